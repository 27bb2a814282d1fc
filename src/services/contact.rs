use reqwest::Client;
use serde::Deserialize;

use crate::config::CONTACT_ENDPOINT;
use crate::models::ContactSubmission;
use crate::services::validation::ValidationError;

/// Shown when the API rejects a submission without saying why.
pub const SERVER_FALLBACK_MESSAGE: &str = "送信に失敗しました。";

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Server(String),
    #[error("予期しないエラーが発生しました。")]
    Transport(#[source] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Posts contact submissions to the lead-capture API.
#[derive(Debug, Clone)]
pub struct ContactClient {
    http: Client,
    endpoint: String,
}

impl Default for ContactClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactClient {
    pub fn new() -> Self {
        Self::with_endpoint(CONTACT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one JSON POST. Any 2xx counts as accepted; the response body is ignored.
    pub async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let res = self
            .http
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(transport_error)?;

        if res.status().is_success() {
            return Ok(());
        }

        let status = res.status();
        let body: ErrorBody = res.json().await.map_err(transport_error)?;
        let message = body
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| SERVER_FALLBACK_MESSAGE.to_string());
        leptos::logging::warn!("contact API returned {status}: {message}");
        Err(ContactError::Server(message))
    }
}

fn transport_error(err: reqwest::Error) -> ContactError {
    leptos::logging::error!("contact submission failed: {err}");
    ContactError::Transport(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_targets_contact_endpoint() {
        assert_eq!(ContactClient::default().endpoint(), CONTACT_ENDPOINT);
    }

    #[test]
    fn error_display_is_the_visitor_message() {
        assert_eq!(
            ContactError::Server("duplicate".into()).to_string(),
            "duplicate"
        );
        assert_eq!(
            ContactError::from(ValidationError::Email).to_string(),
            "無効なメールアドレスです。"
        );
    }
}
