//! Registration service client
//!
//! One JSON call: `POST {base}/api/user/signup`. A 2xx response carries the
//! fresh [`AuthSession`]; failures carry an optional `{"message": ...}` body.
//! Status 409 means the email address is already registered and is surfaced
//! separately so the form can pin it to the email field.

use serde::{Deserialize, Serialize};

use crate::core::form::RegistrationForm;
use crate::core::session::AuthSession;

/// Wire payload for the sign-up call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    /// Builds the payload the service expects: trimmed names joined with a
    /// single space, email trimmed and lowercased, password untouched.
    pub fn from_form(form: &RegistrationForm) -> Self {
        Self {
            name: format!("{} {}", form.first_name.trim(), form.last_name.trim()),
            email: form.email.trim().to_lowercase(),
            password: form.password.clone(),
        }
    }
}

/// Error body the service sends alongside failure statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Failures from the registration call, split by how the form reacts to them.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Status 409: the address is already registered. Carries the server's
    /// own message when one was sent.
    #[error("email already registered")]
    Conflict(Option<String>),

    /// Any other non-success status.
    #[error("registration rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("network failure: {0}")]
    Network(String),

    /// A success status whose body did not parse as a session.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Text shown to the user when the failure is not field-specific.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Conflict(message) => message
                .clone()
                .unwrap_or_else(|| "Email already registered".to_string()),
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Network(_) => "Network error, please check your connection".to_string(),
            ApiError::Rejected { message: None, .. } | ApiError::Malformed(_) => {
                "Something went wrong. Try again.".to_string()
            }
        }
    }
}

fn classify_failure(status: u16, message: Option<String>) -> ApiError {
    if status == 409 {
        ApiError::Conflict(message)
    } else {
        ApiError::Rejected { status, message }
    }
}

/// The remote registration call.
#[allow(async_fn_in_trait)]
pub trait RegistrationApi {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthSession, ApiError>;
}

/// Talks to the registration service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRegistrationApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpRegistrationApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Client pointed at the page's own origin; a reverse proxy is expected
    /// to route `/api` onward.
    #[cfg(not(feature = "ssr"))]
    pub fn from_page_origin() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::new(origin)
    }

    /// The server renders the form but never submits it.
    #[cfg(feature = "ssr")]
    pub fn from_page_origin() -> Self {
        Self::new(String::new())
    }

    fn signup_url(&self) -> String {
        format!("{}/api/user/signup", self.base_url.trim_end_matches('/'))
    }
}

impl RegistrationApi for HttpRegistrationApi {
    async fn register(&self, request: &RegisterRequest) -> Result<AuthSession, ApiError> {
        let url = self.signup_url();
        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<AuthSession>()
                .await
                .map_err(|e| ApiError::Malformed(e.to_string()));
        }

        tracing::warn!("registration rejected: status {}", status);
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);

        Err(classify_failure(status.as_u16(), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_form() -> RegistrationForm {
        RegistrationForm {
            first_name: "  Jane ".to_string(),
            last_name: " Doe ".to_string(),
            email: "  Jane.Doe@Example.COM ".to_string(),
            password: " Secret1! ".to_string(),
            confirm_password: " Secret1! ".to_string(),
        }
    }

    #[test]
    fn test_from_form_normalizes_name_and_email() {
        let request = RegisterRequest::from_form(&raw_form());
        assert_eq!(request.name, "Jane Doe");
        assert_eq!(request.email, "jane.doe@example.com");
    }

    #[test]
    fn test_from_form_keeps_password_verbatim() {
        // Leading or trailing spaces in a password are the user's choice.
        let request = RegisterRequest::from_form(&raw_form());
        assert_eq!(request.password, " Secret1! ");
    }

    #[test]
    fn test_register_request_serialization_shape() {
        let request = RegisterRequest::from_form(&raw_form());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["name"], "Jane Doe");
        assert_eq!(value["email"], "jane.doe@example.com");
        assert_eq!(value["password"], " Secret1! ");
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_classify_failure_conflict() {
        let err = classify_failure(409, Some("Email already registered".to_string()));
        assert!(matches!(err, ApiError::Conflict(Some(_))));

        let err = classify_failure(409, None);
        assert!(matches!(err, ApiError::Conflict(None)));
    }

    #[test]
    fn test_classify_failure_other_statuses() {
        assert!(matches!(
            classify_failure(400, None),
            ApiError::Rejected { status: 400, .. }
        ));
        assert!(matches!(
            classify_failure(500, Some("boom".to_string())),
            ApiError::Rejected { status: 500, .. }
        ));
    }

    #[test]
    fn test_user_message_mapping() {
        assert_eq!(
            ApiError::Conflict(None).user_message(),
            "Email already registered"
        );
        assert_eq!(
            ApiError::Conflict(Some("That address is taken".to_string())).user_message(),
            "That address is taken"
        );
        assert_eq!(
            ApiError::Rejected {
                status: 422,
                message: Some("Name is required".to_string())
            }
            .user_message(),
            "Name is required"
        );
        assert_eq!(
            ApiError::Rejected {
                status: 500,
                message: None
            }
            .user_message(),
            "Something went wrong. Try again."
        );
        assert_eq!(
            ApiError::Network("connection refused".to_string()).user_message(),
            "Network error, please check your connection"
        );
        assert_eq!(
            ApiError::Malformed("missing field `token`".to_string()).user_message(),
            "Something went wrong. Try again."
        );
    }

    #[test]
    fn test_error_body_parsing() {
        let body: ErrorBody = serde_json::from_str(r#"{"message": "Email already registered"}"#)
            .expect("well-formed body");
        assert_eq!(body.message.as_deref(), Some("Email already registered"));

        let body: ErrorBody = serde_json::from_str("{}").expect("empty object");
        assert!(body.message.is_none());
    }

    #[test]
    fn test_signup_url_building() {
        let api = HttpRegistrationApi::new("https://shop.example.com");
        assert_eq!(api.signup_url(), "https://shop.example.com/api/user/signup");

        // A trailing slash must not double up.
        let api = HttpRegistrationApi::new("https://shop.example.com/");
        assert_eq!(api.signup_url(), "https://shop.example.com/api/user/signup");
    }
}
