use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::booking::Step;

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Service,
    Artist,
    PreferredDate,
    PreferredTime,
    Description,
    AllergyDetails,
    ReferenceImages,
    Name,
    Subject,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Phone => "Phone number",
            Field::Service => "Service type",
            Field::Artist => "Preferred artist",
            Field::PreferredDate => "Preferred date",
            Field::PreferredTime => "Preferred time",
            Field::Description => "Tattoo description",
            Field::AllergyDetails => "Allergy details",
            Field::ReferenceImages => "Reference images",
            Field::Name => "Name",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    Required,
    InvalidEmail,
    DateInPast,
    SlotUnavailable,
    UnsupportedAttachment,
    TooManyAttachments,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{}", describe(.field, .reason))]
pub struct FieldError {
    pub field: Field,
    pub reason: ValidationReason,
}

impl FieldError {
    pub fn new(field: Field, reason: ValidationReason) -> Self {
        Self { field, reason }
    }

    pub fn required(field: Field) -> Self {
        Self::new(field, ValidationReason::Required)
    }
}

fn describe(field: &Field, reason: &ValidationReason) -> String {
    let label = field.label();
    match reason {
        ValidationReason::Required => format!("{label} is required"),
        ValidationReason::InvalidEmail => "Please enter a valid email address".to_string(),
        ValidationReason::DateInPast => format!("{label} cannot be in the past"),
        ValidationReason::SlotUnavailable => {
            "The studio is closed at that time on the chosen day".to_string()
        }
        ValidationReason::UnsupportedAttachment => "Only image files can be attached".to_string(),
        ValidationReason::TooManyAttachments => "Too many reference images".to_string(),
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    #[error("this action is only available on the {expected} step (currently on {actual})")]
    WrongStep { expected: Step, actual: Step },
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<FieldError>),
    #[error("a submission is already in progress")]
    SubmissionInFlight,
}

impl WizardError {
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            WizardError::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown artist: {0}")]
    UnknownArtist(String),
    #[error("unknown service: {0}")]
    UnknownService(String),
    #[error("unknown time slot: {0}")]
    UnknownTimeSlot(String),
    #[error("unknown gallery style: {0}")]
    UnknownCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_read_as_sentences() {
        assert_eq!(
            FieldError::required(Field::FirstName).to_string(),
            "First name is required"
        );
        assert_eq!(
            FieldError::new(Field::PreferredDate, ValidationReason::DateInPast).to_string(),
            "Preferred date cannot be in the past"
        );
        let err: &dyn std::error::Error = &FieldError::new(Field::Email, ValidationReason::InvalidEmail);
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }
}
