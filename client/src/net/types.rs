//! Wire DTOs exchanged with the registry core service.
//!
//! DESIGN
//! ======
//! Every field carries a serde default so a partially populated
//! `/api/systeminfo` response (older core versions, anonymous callers) still
//! decodes into a usable config instead of failing the whole page.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Principal + password pair bound to the sign-in form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub principal: String,
    pub password: String,
}

impl Credential {
    /// Both fields are filled in.
    pub fn is_complete(&self) -> bool {
        !self.principal.is_empty() && !self.password.is_empty()
    }
}

/// Authentication backend configured on the core service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// Local database accounts.
    #[default]
    DbAuth,
    LdapAuth,
    UaaAuth,
    HttpAuth,
    OidcAuth,
    /// Any mode string this console does not know about.
    #[serde(other)]
    Unknown,
}

/// Server-supplied bootstrap options from `GET /api/systeminfo`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub auth_mode: AuthMode,
    pub self_registration: bool,
    pub with_admiral: bool,
    pub admiral_endpoint: String,
    pub with_notary: bool,
    pub with_clair: bool,
    pub with_chartmuseum: bool,
    pub registry_url: String,
    pub project_creation_restriction: String,
    pub has_ca_root: bool,
    pub harbor_version: String,
    pub read_only: bool,
}

/// Branding overrides from `setting.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinConfig {
    #[serde(rename = "loginBgImg", default, skip_serializing_if = "Option::is_none")]
    pub login_bg_img: Option<String>,
    #[serde(rename = "appTitle", default, skip_serializing_if = "Option::is_none")]
    pub app_title: Option<String>,
}

/// The signed-in account as reported by `GET /api/users/current`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub realname: String,
    #[serde(default)]
    pub has_admin_role: bool,
}

/// Body of a failed sign-in response.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorBody {
    /// The body parsed as JSON.
    Json(serde_json::Value),
    /// The body was not a JSON object: raw text, or the contents of a JSON string.
    Text(String),
    Empty,
}

impl ErrorBody {
    /// Classify a raw response body.
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value @ serde_json::Value::Object(_)) => Self::Json(value),
            // A JSON-encoded string body: keep the decoded contents.
            Ok(serde_json::Value::String(decoded)) => Self::Text(decoded),
            _ => Self::Text(raw.to_owned()),
        }
    }
}

/// Failed `POST /c/login`.
///
/// `status` is `0` when the request never produced an HTTP response; the
/// transport message is then carried in `status_text`.
#[derive(Clone, Debug, PartialEq)]
pub struct SignInError {
    pub status: u16,
    pub status_text: String,
    pub body: ErrorBody,
}

impl SignInError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self { status: 0, status_text: message.into(), body: ErrorBody::Empty }
    }

    /// Diagnostic text: `"<status>:<statusText>"`, or the bare message for
    /// transport failures.
    pub fn diagnostic(&self) -> String {
        if self.status == 0 {
            self.status_text.clone()
        } else {
            format!("{}:{}", self.status, self.status_text)
        }
    }

    /// `redirect_location` carried by the body, if any.
    ///
    /// A JSON object body is read directly; a text body is parsed as JSON as
    /// a fallback. Anything else yields `None`.
    pub fn redirect_location(&self) -> Option<String> {
        let from_value = |value: &serde_json::Value| {
            value
                .get("redirect_location")
                .and_then(serde_json::Value::as_str)
                .filter(|loc| !loc.is_empty())
                .map(str::to_owned)
        };
        match &self.body {
            ErrorBody::Json(value) => from_value(value),
            ErrorBody::Text(text) => serde_json::from_str::<serde_json::Value>(text).ok().and_then(|v| from_value(&v)),
            ErrorBody::Empty => None,
        }
    }
}
