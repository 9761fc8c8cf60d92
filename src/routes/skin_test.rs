use super::*;

#[test]
fn parse_skin_reads_branding_fields() {
    let skin = parse_skin(r#"{"loginBgImg":"/images/login.jpg","appTitle":"Acme"}"#).unwrap();
    assert_eq!(skin.login_bg_img.as_deref(), Some("/images/login.jpg"));
    assert_eq!(skin.app_title.as_deref(), Some("Acme"));
}

#[test]
fn parse_skin_accepts_empty_object() {
    assert_eq!(parse_skin("{}").unwrap(), SkinConfig::default());
}

#[test]
fn parse_skin_rejects_non_json() {
    assert!(parse_skin("title = acme").is_err());
}

#[tokio::test]
async fn load_skin_without_path_is_none() {
    assert_eq!(load_skin(None).await, None);
}

#[tokio::test]
async fn load_skin_missing_file_is_none() {
    let path = std::env::temp_dir().join("__portal_missing_skin_5521__.json");
    assert_eq!(load_skin(Some(&path)).await, None);
}

#[tokio::test]
async fn load_skin_reads_file_from_disk() {
    let path = std::env::temp_dir().join("__portal_skin_8813__.json");
    tokio::fs::write(&path, r#"{"appTitle":"Acme"}"#).await.unwrap();
    let skin = load_skin(Some(&path)).await.unwrap();
    assert_eq!(skin.app_title.as_deref(), Some("Acme"));
    let _ = tokio::fs::remove_file(&path).await;
}
