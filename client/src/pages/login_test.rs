use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  user@x.com ", " pass word "),
        Ok(("user@x.com".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("user@x.com", ""), Err("Enter both email and password."));
}

#[test]
fn customer_login_lands_on_home() {
    let copy = login_copy(false);
    assert_eq!(copy.success_path, "/");
    assert_eq!(copy.busy_label, "Authenticating...");
}

#[test]
fn admin_login_lands_on_dashboard() {
    let copy = login_copy(true);
    assert_eq!(copy.success_path, "/admin/dashboard");
    assert_eq!(copy.title, "Admin Login");
}
