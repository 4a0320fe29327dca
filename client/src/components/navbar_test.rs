use super::*;
use crate::state::auth::{Role, User};

fn auth_with_role(role: Role) -> AuthState {
    AuthState {
        user: Some(User {
            id: "u-1".to_owned(),
            email: "u@9lmnts.com".to_owned(),
            name: "U".to_owned(),
            role,
        }),
        access_token: Some("tok".to_owned()),
        loading: false,
    }
}

#[test]
fn primary_links_cover_public_pages() {
    let names: Vec<&str> = PRIMARY_LINKS.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["home", "services", "pricing", "about", "portfolio"]);
}

#[test]
fn anonymous_visitor_gets_no_account_links() {
    let auth = AuthState { loading: false, ..AuthState::default() };
    assert!(account_links(&auth).is_empty());
}

#[test]
fn signed_in_user_sees_portal_only() {
    let links = account_links(&auth_with_role(Role::User));
    assert_eq!(links, vec![("client-portal", "Client Portal")]);
}

#[test]
fn staff_sees_portal_admin_and_crm() {
    for role in [Role::Admin, Role::SuperAdmin] {
        let links = account_links(&auth_with_role(role));
        let names: Vec<&str> = links.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["client-portal", "admin", "crm"]);
    }
}
