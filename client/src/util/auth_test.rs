use super::*;
use crate::net::types::User;

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(User {
            user_id: 1,
            username: "admin".to_owned(),
            email: "admin@example.com".to_owned(),
            realname: "system admin".to_owned(),
            has_admin_role: true,
        }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn sign_in_url_carries_encoded_return_path() {
    assert_eq!(sign_in_url("/harbor"), "/harbor/sign-in?redirect_url=%2Fharbor");
}

#[test]
fn sign_in_url_without_return_path() {
    assert_eq!(sign_in_url(""), SIGN_IN_ROUTE);
}
