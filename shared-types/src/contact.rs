use validator::ValidateEmail;

use crate::catalog::InquiryType;
use crate::error::{Field, FieldError, ValidationReason, WizardError};
use crate::intake::{ContactSubmission, IntakeReply, Rejection, SubmissionStatus};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: Option<InquiryType>,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::required(Field::Name));
        }
        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::required(Field::Email));
        } else if !email.validate_email() {
            errors.push(FieldError::new(Field::Email, ValidationReason::InvalidEmail));
        }
        if self.subject.trim().is_empty() {
            errors.push(FieldError::required(Field::Subject));
        }
        if self.message.trim().is_empty() {
            errors.push(FieldError::required(Field::Message));
        }
        errors
    }

    pub fn to_submission(&self) -> Result<ContactSubmission, Vec<FieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let phone = self.phone.trim();
        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            inquiry_type: self.inquiry_type,
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

impl ContactSubmission {
    pub fn validate(&self) -> Vec<FieldError> {
        ContactDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone().unwrap_or_default(),
            inquiry_type: self.inquiry_type,
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
        .validate()
    }
}

/// Single-step counterpart of the booking wizard with the same submit guard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    draft: ContactDraft,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn edit(&mut self, f: impl FnOnce(&mut ContactDraft)) -> Result<(), WizardError> {
        if self.status.is_submitting() {
            return Err(WizardError::SubmissionInFlight);
        }
        f(&mut self.draft);
        Ok(())
    }

    pub fn begin_submit(&mut self) -> Result<ContactSubmission, WizardError> {
        if self.status.is_submitting() {
            return Err(WizardError::SubmissionInFlight);
        }
        let submission = self.draft.to_submission().map_err(WizardError::Invalid)?;
        self.status = SubmissionStatus::Submitting;
        Ok(submission)
    }

    pub fn finish_submit(&mut self, reply: IntakeReply) {
        match reply {
            IntakeReply::Accepted { reference } => {
                self.draft = ContactDraft::default();
                self.status = SubmissionStatus::Submitted { reference };
            }
            IntakeReply::Rejected(rejection) => {
                self.status = SubmissionStatus::Failed(rejection);
            }
        }
    }

    pub fn fail_submit(&mut self, message: impl Into<String>) {
        self.status = SubmissionStatus::Failed(Rejection::service_unavailable(message));
    }

    pub fn dismiss_status(&mut self) {
        if !self.status.is_submitting() {
            self.status = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(|d| {
            d.name = "Jane Doe".to_string();
            d.email = "jane@x.com".to_string();
            d.subject = "Aftercare".to_string();
            d.message = "How long should I keep the wrap on?".to_string();
            d.inquiry_type = Some(InquiryType::Aftercare);
        })
        .unwrap();
        form
    }

    #[test]
    fn empty_form_lists_required_fields() {
        let fields: Vec<_> = ContactDraft::default()
            .validate()
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(
            fields,
            vec![Field::Name, Field::Email, Field::Subject, Field::Message]
        );
    }

    #[test]
    fn blank_phone_is_omitted() {
        let mut form = filled();
        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.phone, None);
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("phone").is_none());
        assert_eq!(json["inquiry_type"], "aftercare");
    }

    #[test]
    fn accepted_message_resets_the_form() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(WizardError::SubmissionInFlight));
        form.finish_submit(IntakeReply::Accepted {
            reference: "r-1".to_string(),
        });
        assert_eq!(form.draft(), &ContactDraft::default());
        assert_matches!(form.status(), SubmissionStatus::Submitted { .. });
    }

    #[test]
    fn rejected_message_keeps_the_form() {
        let mut form = filled();
        let draft = form.draft().clone();
        form.begin_submit().unwrap();
        form.finish_submit(IntakeReply::Rejected(Rejection::service_unavailable(
            "try later",
        )));
        assert_eq!(form.draft(), &draft);
        assert_matches!(form.status(), SubmissionStatus::Failed(_));
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn received_contact_payloads_are_revalidated() {
        let mut submission = filled().begin_submit().unwrap();
        assert!(submission.validate().is_empty());
        submission.email = "nope".to_string();
        assert_eq!(
            submission.validate(),
            vec![FieldError::new(Field::Email, ValidationReason::InvalidEmail)]
        );
    }
}
