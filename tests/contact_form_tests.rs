//! End-to-end submit flow of the contact form state against a mocked API.

use career::models::{ContactFormState, ContactSubmission, Field, FormStatus, StatusKind, SUCCESS_MESSAGE};
use career::services::contact::ContactClient;
use career::services::validation::ValidationError;
use mockito::{Matcher, Server};
use serde_json::json;

fn form_with(name: &str, email: &str, tel: &str) -> ContactFormState {
    let mut form = ContactFormState::default();
    form.set(Field::Name, name.into());
    form.set(Field::Email, email.into());
    form.set(Field::Tel, tel.into());
    form
}

fn valid_form() -> ContactFormState {
    form_with("田中太郎", "taro@example.com", "090-1234-5678")
}

#[tokio::test]
async fn test_successful_submit_clears_fields() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/api/contact")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "name": "田中太郎",
            "email": "taro@example.com",
            "tel": "090-1234-5678"
        })))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let client = ContactClient::with_endpoint(format!("{}/api/contact", server.url()));
    let mut form = valid_form();
    form.submit(&client).await;

    mock.assert_async().await;
    assert_eq!(form.status(), Some(&FormStatus::success(SUCCESS_MESSAGE)));
    assert_eq!(form.submission(), &ContactSubmission::default());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_server_rejection_shows_its_message() {
    let mut server = Server::new_async().await;

    server
        .mock("POST", "/api/contact")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"duplicate"}"#)
        .create_async()
        .await;

    let client = ContactClient::with_endpoint(format!("{}/api/contact", server.url()));
    let mut form = valid_form();
    form.submit(&client).await;

    assert_eq!(form.status(), Some(&FormStatus::error("duplicate")));
    assert_eq!(form.value(Field::Email), "taro@example.com");
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_network_failure_shows_generic_message() {
    let client = ContactClient::with_endpoint("http://127.0.0.1:1/api/contact");
    let mut form = valid_form();
    form.submit(&client).await;

    assert_eq!(
        form.status(),
        Some(&FormStatus::error("予期しないエラーが発生しました。"))
    );
    assert!(!form.is_submitting());
    assert_eq!(form.value(Field::Name), "田中太郎");
}

#[tokio::test]
async fn test_invalid_fields_never_reach_the_network() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = ContactClient::with_endpoint(format!("{}/api/contact", server.url()));

    let cases = [
        (form_with("T", "taro@example.com", "090-1234-5678"), ValidationError::Name),
        (form_with("田中太郎", "taro@example", "090-1234-5678"), ValidationError::Email),
        (form_with("田中太郎", "taro@example.com", "call me"), ValidationError::Tel),
        (form_with("", "", ""), ValidationError::Name),
    ];

    for (mut form, expected) in cases {
        form.submit(&client).await;

        let status = form.status().expect("status is set");
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.message, expected.to_string());
        assert!(!form.is_submitting());
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_resubmit_replaces_previous_status() {
    let mut server = Server::new_async().await;

    server
        .mock("POST", "/api/contact")
        .with_status(200)
        .create_async()
        .await;

    let client = ContactClient::with_endpoint(format!("{}/api/contact", server.url()));
    let mut form = form_with("田中太郎", "bad", "090-1234-5678");

    form.submit(&client).await;
    assert_eq!(form.status().map(|s| s.kind), Some(StatusKind::Error));

    form.set(Field::Email, "taro@example.com".into());
    form.submit(&client).await;
    assert_eq!(form.status().map(|s| s.kind), Some(StatusKind::Success));
}
