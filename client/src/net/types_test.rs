use super::*;

// =============================================================
// AppConfig
// =============================================================

#[test]
fn app_config_defaults_to_db_auth_without_sign_up() {
    let config = AppConfig::default();
    assert_eq!(config.auth_mode, AuthMode::DbAuth);
    assert!(!config.self_registration);
    assert!(!config.with_admiral);
}

#[test]
fn app_config_decodes_partial_systeminfo() {
    let config: AppConfig =
        serde_json::from_str(r#"{"auth_mode":"oidc_auth","harbor_version":"v1.10.0"}"#).unwrap();
    assert_eq!(config.auth_mode, AuthMode::OidcAuth);
    assert_eq!(config.harbor_version, "v1.10.0");
    assert!(!config.read_only);
}

#[test]
fn app_config_unknown_auth_mode_maps_to_unknown() {
    let config: AppConfig = serde_json::from_str(r#"{"auth_mode":"kerberos_auth"}"#).unwrap();
    assert_eq!(config.auth_mode, AuthMode::Unknown);
}

#[test]
fn skin_config_reads_camel_case_keys() {
    let skin: SkinConfig =
        serde_json::from_str(r##"{"loginBgImg":"/images/bg.jpg","appTitle":"Acme Registry","headerBgColor":"#000"}"##)
            .unwrap();
    assert_eq!(skin.login_bg_img.as_deref(), Some("/images/bg.jpg"));
    assert_eq!(skin.app_title.as_deref(), Some("Acme Registry"));
}

#[test]
fn credential_completeness_requires_both_fields() {
    let mut credential = Credential::default();
    assert!(!credential.is_complete());
    credential.principal = "admin".to_owned();
    assert!(!credential.is_complete());
    credential.password = "Harbor12345".to_owned();
    assert!(credential.is_complete());
}

// =============================================================
// SignInError
// =============================================================

#[test]
fn error_body_classifies_raw_text() {
    assert_eq!(ErrorBody::from_raw("  "), ErrorBody::Empty);
    assert_eq!(ErrorBody::from_raw("forbidden"), ErrorBody::Text("forbidden".to_owned()));
    assert!(matches!(ErrorBody::from_raw(r#"{"a":1}"#), ErrorBody::Json(_)));
}

#[test]
fn diagnostic_combines_status_and_text() {
    let err = SignInError { status: 401, status_text: "Unauthorized".to_owned(), body: ErrorBody::Empty };
    assert_eq!(err.diagnostic(), "401:Unauthorized");
}

#[test]
fn diagnostic_for_transport_failure_is_the_message() {
    assert_eq!(SignInError::transport("connection refused").diagnostic(), "connection refused");
}

#[test]
fn redirect_location_from_structured_body() {
    let err = SignInError {
        status: 403,
        status_text: "Forbidden".to_owned(),
        body: ErrorBody::Json(serde_json::json!({"redirect_location": "https://idp/login"})),
    };
    assert_eq!(err.redirect_location().as_deref(), Some("https://idp/login"));
}

#[test]
fn redirect_location_from_text_body() {
    let err = SignInError {
        status: 403,
        status_text: "Forbidden".to_owned(),
        body: ErrorBody::Text(r#"{"redirect_location":"https://idp/login"}"#.to_owned()),
    };
    assert_eq!(err.redirect_location().as_deref(), Some("https://idp/login"));
}

#[test]
fn error_body_unwraps_json_string_body() {
    let raw = r#""{\"redirect_location\":\"https://idp/login\"}""#;
    assert_eq!(ErrorBody::from_raw(raw), ErrorBody::Text(r#"{"redirect_location":"https://idp/login"}"#.to_owned()));
}

#[test]
fn redirect_location_from_json_string_body() {
    let err = SignInError {
        status: 403,
        status_text: "Forbidden".to_owned(),
        body: ErrorBody::from_raw(r#""{\"redirect_location\":\"https://idp/login\"}""#),
    };
    assert_eq!(err.redirect_location().as_deref(), Some("https://idp/login"));
}

#[test]
fn redirect_location_missing_for_unparsable_body() {
    let err = SignInError {
        status: 403,
        status_text: "Forbidden".to_owned(),
        body: ErrorBody::Text("<html>nope</html>".to_owned()),
    };
    assert_eq!(err.redirect_location(), None);
}
