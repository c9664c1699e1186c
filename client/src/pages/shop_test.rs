use super::*;

#[test]
fn title_from_slug_capitalises_each_word() {
    assert_eq!(title_from_slug("blue-denim-jacket"), "Blue Denim Jacket");
    assert_eq!(title_from_slug("tea_set"), "Tea Set");
}

#[test]
fn title_from_slug_skips_empty_segments() {
    assert_eq!(title_from_slug("--mug--"), "Mug");
    assert_eq!(title_from_slug(""), "");
}
