use super::*;
use crate::net::types::UserMetadata;

fn provider_user(email: Option<&str>, name: Option<&str>, role: Option<&str>) -> ProviderUser {
    ProviderUser {
        id: "u-1".to_owned(),
        email: email.map(str::to_owned),
        user_metadata: UserMetadata {
            name: name.map(str::to_owned),
            role: role.map(str::to_owned),
        },
    }
}

#[test]
fn role_parse_recognizes_staff() {
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse("super_admin"), Role::SuperAdmin);
    assert!(Role::Admin.is_staff());
    assert!(Role::SuperAdmin.is_staff());
}

#[test]
fn role_parse_defaults_unknown_to_user() {
    assert_eq!(Role::parse("user"), Role::User);
    assert_eq!(Role::parse("moderator"), Role::User);
    assert_eq!(Role::parse(""), Role::User);
    assert!(!Role::User.is_staff());
}

#[test]
fn user_prefers_metadata_name() {
    let user = User::from_provider(&provider_user(Some("d@9lmnts.com"), Some("Darnley"), None));
    assert_eq!(user.name, "Darnley");
    assert_eq!(user.email, "d@9lmnts.com");
    assert_eq!(user.role, Role::User);
}

#[test]
fn user_falls_back_to_email_then_placeholder() {
    let from_email = User::from_provider(&provider_user(Some("d@9lmnts.com"), None, None));
    assert_eq!(from_email.name, "d@9lmnts.com");

    let placeholder = User::from_provider(&provider_user(None, None, None));
    assert_eq!(placeholder.name, "User");
    assert_eq!(placeholder.email, "");
}

#[test]
fn user_reads_role_from_metadata() {
    let admin = User::from_provider(&provider_user(Some("a@9lmnts.com"), None, Some("admin")));
    assert_eq!(admin.role, Role::Admin);

    let unknown = User::from_provider(&provider_user(Some("b@9lmnts.com"), None, Some("vip")));
    assert_eq!(unknown.role, Role::User);
}

#[test]
fn empty_metadata_name_is_ignored() {
    let user = User::from_provider(&provider_user(Some("d@9lmnts.com"), Some(""), None));
    assert_eq!(user.name, "d@9lmnts.com");
}

#[test]
fn auth_state_starts_loading_and_signed_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.access_token.is_none());
}
