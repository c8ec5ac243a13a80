//! Payloads sent to the intake server functions and the replies they return.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{ArtistId, InquiryType, ServiceId, TimeSlot};
use crate::error::{FieldError, ValidationReason};

/// Metadata for a reference image picked in the browser. The file bytes stay
/// on the client; the studio follows up by email for the images themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceImage {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

pub const MAX_REFERENCE_IMAGES: usize = 10;

impl ReferenceImage {
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub is_first_tattoo: bool,
    pub has_allergies: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergy_details: Option<String>,
    pub artist: ArtistId,
    pub service: ServiceId,
    pub preferred_date: NaiveDate,
    pub preferred_time: TimeSlot,
    pub description: String,
    #[serde(default)]
    pub reference_images: Vec<ReferenceImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inquiry_type: Option<InquiryType>,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    Validation,
    SlotUnavailable,
    ServiceUnavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejection {
    pub reason: RejectionReason,
    pub message: String,
    #[serde(default)]
    pub field_errors: Vec<FieldError>,
}

impl Rejection {
    /// Classifies server-side validation failures; an unavailable slot wins
    /// over generic validation so the client can point at the time picker.
    pub fn from_field_errors(field_errors: Vec<FieldError>) -> Self {
        let slot_taken = field_errors
            .iter()
            .any(|e| e.reason == ValidationReason::SlotUnavailable);
        let (reason, message) = if slot_taken {
            (
                RejectionReason::SlotUnavailable,
                "That time slot is not available. Please choose another time.".to_string(),
            )
        } else {
            (
                RejectionReason::Validation,
                "Some details are missing or invalid.".to_string(),
            )
        };
        Rejection {
            reason,
            message,
            field_errors,
        }
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Rejection {
            reason: RejectionReason::ServiceUnavailable,
            message: message.into(),
            field_errors: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IntakeReply {
    Accepted { reference: String },
    Rejected(Rejection),
}

/// Where a form is in its submit round trip.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted { reference: String },
    Failed(Rejection),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Field;

    #[test]
    fn slot_errors_classify_as_slot_unavailable() {
        let rejection = Rejection::from_field_errors(vec![
            FieldError::required(Field::Description),
            FieldError::new(Field::PreferredTime, ValidationReason::SlotUnavailable),
        ]);
        assert_eq!(rejection.reason, RejectionReason::SlotUnavailable);
        assert_eq!(rejection.field_errors.len(), 2);

        let rejection = Rejection::from_field_errors(vec![FieldError::required(Field::Email)]);
        assert_eq!(rejection.reason, RejectionReason::Validation);
    }

    #[test]
    fn replies_are_tagged_by_status() {
        let json = serde_json::to_value(IntakeReply::Accepted {
            reference: "abc".to_string(),
        })
        .unwrap();
        assert_eq!(json["status"], "accepted");
        assert_eq!(json["reference"], "abc");

        let json = serde_json::to_value(IntakeReply::Rejected(Rejection::service_unavailable(
            "down",
        )))
        .unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["reason"], "service_unavailable");
    }
}
