use super::*;

#[test]
fn dashboard_link_by_role() {
    assert_eq!(dashboard_link(Role::Provider), Some(("/provider/dashboard", "Dashboard")));
    assert_eq!(dashboard_link(Role::Admin), Some(("/admin", "Admin")));
    assert_eq!(dashboard_link(Role::Client), None);
}
