use std::sync::LazyLock;

use regex::Regex;

use crate::models::{ContactSubmission, Field};

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ぁ-んァ-ヶ一-龥a-zA-Z\s]{2,30}$").expect("name pattern is valid")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

// Optional "+81"-style prefix, optional "(03)"-style area code, then up to three digit groups.
static TEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:\+?[0-9]{1,4}[-\s]?)?(?:\(?[0-9]{1,4}\)?[-\s]?)?[0-9]{1,4}[-\s]?[0-9]{1,4}[-\s]?[0-9]{1,4}$",
    )
    .expect("tel pattern is valid")
});

/// A field that failed its shape check. The message is shown to the visitor as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("名前は2〜30文字以内で、日本語、英字、スペースのみ使用可能です。")]
    Name,
    #[error("無効なメールアドレスです。")]
    Email,
    #[error("電話番号は日本の形式、または国際形式（+81 90 1234 5678など）で入力してください。")]
    Tel,
}

impl ValidationError {
    pub fn field(self) -> Field {
        match self {
            ValidationError::Name => Field::Name,
            ValidationError::Email => Field::Email,
            ValidationError::Tel => Field::Tel,
        }
    }
}

pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_tel(tel: &str) -> bool {
    TEL_PATTERN.is_match(tel)
}

/// Checks name, email and tel in that order and reports the first failure.
pub fn validate(submission: &ContactSubmission) -> Result<(), ValidationError> {
    if !is_valid_name(&submission.name) {
        return Err(ValidationError::Name);
    }
    if !is_valid_email(&submission.email) {
        return Err(ValidationError::Email);
    }
    if !is_valid_tel(&submission.tel) {
        return Err(ValidationError::Tel);
    }
    Ok(())
}
