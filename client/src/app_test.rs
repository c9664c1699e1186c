use super::*;
use crate::util::guard::{ROUTES, access_for_path};

#[test]
fn customer_routes_declare_what_the_route_table_lists() {
    for path in CUSTOMER_PATHS {
        assert_eq!(access_for_path(path), CUSTOMER_ACCESS, "{path}");
    }
}

#[test]
fn admin_routes_declare_what_the_route_table_lists() {
    for section in AdminSection::ALL {
        assert_eq!(access_for_path(section.path()), ADMIN_ACCESS, "{section:?}");
    }
}

#[test]
fn every_guarded_table_entry_is_wrapped_in_app() {
    let guarded: Vec<&str> = ROUTES
        .iter()
        .filter(|(_, access)| *access != Access::Public)
        .map(|(path, _)| *path)
        .collect();
    let wrapped: Vec<&str> = CUSTOMER_PATHS
        .into_iter()
        .chain(AdminSection::ALL.iter().map(|s| s.path()))
        .collect();
    assert_eq!(guarded, wrapped);
}
