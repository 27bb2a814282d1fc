use serde::{Deserialize, Serialize};

use crate::services::contact::{ContactClient, ContactError};
use crate::services::validation::{self, ValidationError};

pub const SUCCESS_MESSAGE: &str = "お問い合わせありがとうございました。";

/// What the visitor typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub tel: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Tel,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Tel];

    /// Used for both the element id and the form field name.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Tel => "tel",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "氏名",
            Field::Email => "メールアドレス",
            Field::Tel => "電話番号",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::Tel => "tel",
            Field::Name | Field::Email => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl FormStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }
}

/// Contact form state, independent of how it is rendered.
///
/// A submit goes `begin_submit` -> network call -> `finish_submit`. The
/// component drives these two halves around a spawned task; [`submit`]
/// runs them back to back.
///
/// [`submit`]: ContactFormState::submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    submission: ContactSubmission,
    submitting: bool,
    status: Option<FormStatus>,
}

impl ContactFormState {
    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.submission.name,
            Field::Email => &self.submission.email,
            Field::Tel => &self.submission.tel,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.submission.name = value,
            Field::Email => self.submission.email = value,
            Field::Tel => self.submission.tel = value,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<&FormStatus> {
        self.status.as_ref()
    }

    /// Validates the current values. On success marks the form as submitting
    /// and returns the record to send; on failure records the error status.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, ValidationError> {
        if let Err(err) = validation::validate(&self.submission) {
            self.status = Some(FormStatus::error(err.to_string()));
            return Err(err);
        }
        self.submitting = true;
        self.status = None;
        Ok(self.submission.clone())
    }

    pub fn finish_submit(&mut self, outcome: Result<(), ContactError>) {
        self.submitting = false;
        self.status = Some(match outcome {
            Ok(()) => {
                self.submission = ContactSubmission::default();
                FormStatus::success(SUCCESS_MESSAGE)
            }
            Err(err) => FormStatus::error(err.to_string()),
        });
    }

    pub async fn submit(&mut self, client: &ContactClient) {
        let Ok(submission) = self.begin_submit() else {
            return;
        };
        let outcome = client.send(&submission).await;
        self.finish_submit(outcome);
    }
}
