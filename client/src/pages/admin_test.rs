use super::*;
use crate::util::guard::{Access, access_for_path};

#[test]
fn sections_are_in_sidebar_order() {
    let labels: Vec<_> = AdminSection::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["Dashboard", "Categories", "Products", "Orders", "Users", "Inventory"]);
}

#[test]
fn every_section_path_is_admin_only() {
    for section in AdminSection::ALL {
        assert_eq!(access_for_path(section.path()), Access::AdminOnly, "{section:?}");
    }
}

#[test]
fn from_path_round_trips_and_tolerates_trailing_slash() {
    for section in AdminSection::ALL {
        assert_eq!(AdminSection::from_path(section.path()), Some(section));
    }
    assert_eq!(AdminSection::from_path("/admin/orders/"), Some(AdminSection::Orders));
    assert_eq!(AdminSection::from_path("/admin/login"), None);
    assert_eq!(AdminSection::from_path("/orders"), None);
}
