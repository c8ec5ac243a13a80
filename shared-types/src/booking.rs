//! The booking wizard: a four-step draft with per-step validation and a
//! guarded submit round trip.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::ValidateEmail;

use crate::catalog::{ArtistId, ServiceId, TimeSlot};
use crate::error::{Field, FieldError, ValidationReason, WizardError};
use crate::intake::{
    BookingSubmission, IntakeReply, ReferenceImage, Rejection, SubmissionStatus,
    MAX_REFERENCE_IMAGES,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Step {
    #[default]
    Identity,
    ServiceArtist,
    Schedule,
    Details,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::Identity,
        Step::ServiceArtist,
        Step::Schedule,
        Step::Details,
    ];

    /// 1-based position shown in the progress indicator.
    pub fn number(self) -> usize {
        match self {
            Step::Identity => 1,
            Step::ServiceArtist => 2,
            Step::Schedule => 3,
            Step::Details => 4,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Identity => "Personal Information",
            Step::ServiceArtist => "Service & Artist",
            Step::Schedule => "Date & Time",
            Step::Details => "Tattoo Details",
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Identity => Some(Step::ServiceArtist),
            Step::ServiceArtist => Some(Step::Schedule),
            Step::Schedule => Some(Step::Details),
            Step::Details => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Identity => None,
            Step::ServiceArtist => Some(Step::Identity),
            Step::Schedule => Some(Step::ServiceArtist),
            Step::Details => Some(Step::Schedule),
        }
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// The step whose form holds `field`; `None` for contact-only fields.
    pub fn owning(field: Field) -> Option<Step> {
        match field {
            Field::FirstName | Field::LastName | Field::Email | Field::Phone => Some(Step::Identity),
            Field::Service | Field::Artist => Some(Step::ServiceArtist),
            Field::PreferredDate | Field::PreferredTime => Some(Step::Schedule),
            Field::Description | Field::AllergyDetails | Field::ReferenceImages => Some(Step::Details),
            Field::Name | Field::Subject | Field::Message => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// The appointment request being assembled. Lives only as long as the wizard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub is_first_tattoo: bool,
    pub has_allergies: bool,
    /// Buffered even while `has_allergies` is off; only submitted when it is on.
    pub allergy_details: String,
    pub artist: Option<ArtistId>,
    pub service: Option<ServiceId>,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: Option<TimeSlot>,
    pub description: String,
    pub reference_images: Vec<ReferenceImage>,
}

fn require(value: &str, field: Field, errors: &mut Vec<FieldError>) {
    if value.trim().is_empty() {
        errors.push(FieldError::required(field));
    }
}

impl BookingDraft {
    /// Validation errors for the fields owned by `step`.
    pub fn step_errors(&self, step: Step, today: NaiveDate) -> Vec<FieldError> {
        let mut errors = Vec::new();
        match step {
            Step::Identity => {
                require(&self.first_name, Field::FirstName, &mut errors);
                require(&self.last_name, Field::LastName, &mut errors);
                let email = self.email.trim();
                if email.is_empty() {
                    errors.push(FieldError::required(Field::Email));
                } else if !email.validate_email() {
                    errors.push(FieldError::new(Field::Email, ValidationReason::InvalidEmail));
                }
                require(&self.phone, Field::Phone, &mut errors);
            }
            Step::ServiceArtist => {
                if self.service.is_none() {
                    errors.push(FieldError::required(Field::Service));
                }
            }
            Step::Schedule => {
                match self.preferred_date {
                    None => errors.push(FieldError::required(Field::PreferredDate)),
                    Some(date) if date < today => errors.push(FieldError::new(
                        Field::PreferredDate,
                        ValidationReason::DateInPast,
                    )),
                    Some(_) => {}
                }
                match (self.preferred_date, self.preferred_time) {
                    (_, None) => errors.push(FieldError::required(Field::PreferredTime)),
                    (Some(date), Some(slot)) if !slot.is_open_on(date) => errors.push(
                        FieldError::new(Field::PreferredTime, ValidationReason::SlotUnavailable),
                    ),
                    _ => {}
                }
            }
            Step::Details => {
                require(&self.description, Field::Description, &mut errors);
                if self.has_allergies {
                    require(&self.allergy_details, Field::AllergyDetails, &mut errors);
                }
                if self.reference_images.iter().any(|img| !img.is_image()) {
                    errors.push(FieldError::new(
                        Field::ReferenceImages,
                        ValidationReason::UnsupportedAttachment,
                    ));
                }
                if self.reference_images.len() > MAX_REFERENCE_IMAGES {
                    errors.push(FieldError::new(
                        Field::ReferenceImages,
                        ValidationReason::TooManyAttachments,
                    ));
                }
            }
        }
        errors
    }

    /// Errors across every step, in step order.
    pub fn validate(&self, today: NaiveDate) -> Vec<FieldError> {
        Step::ALL
            .iter()
            .flat_map(|step| self.step_errors(*step, today))
            .collect()
    }

    /// Packages the draft for the booking intake. Allergy details are dropped
    /// unless `has_allergies` is set; a missing artist means any artist.
    pub fn to_submission(&self, today: NaiveDate) -> Result<BookingSubmission, Vec<FieldError>> {
        let errors = self.validate(today);
        if !errors.is_empty() {
            return Err(errors);
        }
        match (self.service, self.preferred_date, self.preferred_time) {
            (Some(service), Some(preferred_date), Some(preferred_time)) => Ok(BookingSubmission {
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
                email: self.email.trim().to_string(),
                phone: self.phone.trim().to_string(),
                is_first_tattoo: self.is_first_tattoo,
                has_allergies: self.has_allergies,
                allergy_details: self
                    .has_allergies
                    .then(|| self.allergy_details.trim().to_string()),
                artist: self.artist.unwrap_or(ArtistId::Any),
                service,
                preferred_date,
                preferred_time,
                description: self.description.trim().to_string(),
                reference_images: self.reference_images.clone(),
            }),
            _ => Err(self.validate(today)),
        }
    }
}

impl From<&BookingSubmission> for BookingDraft {
    fn from(s: &BookingSubmission) -> Self {
        BookingDraft {
            first_name: s.first_name.clone(),
            last_name: s.last_name.clone(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            is_first_tattoo: s.is_first_tattoo,
            has_allergies: s.has_allergies,
            allergy_details: s.allergy_details.clone().unwrap_or_default(),
            artist: Some(s.artist),
            service: Some(s.service),
            preferred_date: Some(s.preferred_date),
            preferred_time: Some(s.preferred_time),
            description: s.description.clone(),
            reference_images: s.reference_images.clone(),
        }
    }
}

impl BookingSubmission {
    /// Re-runs the draft rules against a received payload.
    pub fn validate(&self, today: NaiveDate) -> Vec<FieldError> {
        BookingDraft::from(self).validate(today)
    }

    /// Drops allergy details the client sent without the allergy flag and
    /// trims the ones it kept.
    pub fn normalized(mut self) -> Self {
        self.allergy_details = match self.allergy_details.take() {
            Some(details) if self.has_allergies => Some(details.trim().to_string()),
            _ => None,
        };
        self
    }
}

/// Owns the draft, the active step and the submission status.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingWizard {
    step: Step,
    draft: BookingDraft,
    status: SubmissionStatus,
}

impl BookingWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    fn ensure_idle(&self) -> Result<(), WizardError> {
        if self.status.is_submitting() {
            Err(WizardError::SubmissionInFlight)
        } else {
            Ok(())
        }
    }

    fn ensure_step(&self, expected: Step) -> Result<(), WizardError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    /// Applies a free-form field edit. Edits are refused while a submission is
    /// in flight so the payload on the wire matches what the user sees.
    pub fn edit(&mut self, f: impl FnOnce(&mut BookingDraft)) -> Result<(), WizardError> {
        self.ensure_idle()?;
        f(&mut self.draft);
        Ok(())
    }

    /// Advances one step if the active step validates. A no-op on the last step.
    pub fn next(&mut self, today: NaiveDate) -> Result<Step, WizardError> {
        self.ensure_idle()?;
        let Some(next) = self.step.next() else {
            return Ok(self.step);
        };
        let errors = self.draft.step_errors(self.step, today);
        if !errors.is_empty() {
            return Err(WizardError::Invalid(errors));
        }
        self.step = next;
        Ok(self.step)
    }

    /// Goes back one step without validating. A no-op on the first step.
    pub fn previous(&mut self) -> Step {
        if !self.status.is_submitting() {
            if let Some(previous) = self.step.previous() {
                self.step = previous;
            }
        }
        self.step
    }

    pub fn select_service(&mut self, id: ServiceId) -> Result<(), WizardError> {
        self.ensure_step(Step::ServiceArtist)?;
        self.edit(|d| d.service = Some(id))
    }

    pub fn select_artist(&mut self, id: ArtistId) -> Result<(), WizardError> {
        self.ensure_step(Step::ServiceArtist)?;
        self.edit(|d| d.artist = Some(id))
    }

    pub fn select_time(&mut self, slot: TimeSlot) -> Result<(), WizardError> {
        self.ensure_step(Step::Schedule)?;
        self.edit(|d| d.preferred_time = Some(slot))
    }

    /// Sets the preferred date; dates before `today` are rejected and the
    /// previous value is kept.
    pub fn set_preferred_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), WizardError> {
        if date < today {
            return Err(WizardError::Invalid(vec![FieldError::new(
                Field::PreferredDate,
                ValidationReason::DateInPast,
            )]));
        }
        self.edit(|d| d.preferred_date = Some(date))
    }

    pub fn attach_image(&mut self, image: ReferenceImage) -> Result<(), WizardError> {
        if !image.is_image() {
            return Err(WizardError::Invalid(vec![FieldError::new(
                Field::ReferenceImages,
                ValidationReason::UnsupportedAttachment,
            )]));
        }
        if self.draft.reference_images.len() >= MAX_REFERENCE_IMAGES {
            return Err(WizardError::Invalid(vec![FieldError::new(
                Field::ReferenceImages,
                ValidationReason::TooManyAttachments,
            )]));
        }
        self.edit(|d| d.reference_images.push(image))
    }

    pub fn remove_image(&mut self, index: usize) -> Result<(), WizardError> {
        self.edit(|d| {
            if index < d.reference_images.len() {
                d.reference_images.remove(index);
            }
        })
    }

    /// Validates the whole draft and marks the submission as in flight.
    /// Returns the payload to hand to the booking intake.
    pub fn begin_submit(&mut self, today: NaiveDate) -> Result<BookingSubmission, WizardError> {
        self.ensure_idle()?;
        self.ensure_step(Step::Details)?;
        let submission = self.draft.to_submission(today).map_err(WizardError::Invalid)?;
        self.status = SubmissionStatus::Submitting;
        Ok(submission)
    }

    /// Records the intake reply. An accepted request clears the draft and
    /// rewinds to the first step. A rejection keeps the draft and moves back
    /// to the earliest step holding one of its field errors.
    pub fn finish_submit(&mut self, reply: IntakeReply) {
        match reply {
            IntakeReply::Accepted { reference } => {
                self.draft = BookingDraft::default();
                self.step = Step::Identity;
                self.status = SubmissionStatus::Submitted { reference };
            }
            IntakeReply::Rejected(rejection) => {
                if let Some(step) = rejection
                    .field_errors
                    .iter()
                    .filter_map(|e| Step::owning(e.field))
                    .min_by_key(|step| step.number())
                {
                    self.step = step;
                }
                self.status = SubmissionStatus::Failed(rejection);
            }
        }
    }

    /// Transport failure while talking to the intake.
    pub fn fail_submit(&mut self, message: impl Into<String>) {
        self.status = SubmissionStatus::Failed(Rejection::service_unavailable(message));
    }

    /// Clears a confirmation or failure banner.
    pub fn dismiss_status(&mut self) {
        if !self.status.is_submitting() {
            self.status = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::RejectionReason;
    use assert_matches::assert_matches;

    fn today() -> NaiveDate {
        // A Friday.
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn tomorrow() -> NaiveDate {
        today().succ_opt().unwrap()
    }

    fn fill_identity(w: &mut BookingWizard) {
        w.edit(|d| {
            d.first_name = "Jane".to_string();
            d.last_name = "Doe".to_string();
            d.email = "jane@x.com".to_string();
            d.phone = "555-1234".to_string();
        })
        .unwrap();
    }

    /// Walks a wizard to the details step with valid answers.
    fn wizard_at_details() -> BookingWizard {
        let mut w = BookingWizard::new();
        fill_identity(&mut w);
        w.next(today()).unwrap();
        w.select_service(ServiceId::Medium).unwrap();
        w.select_artist(ArtistId::Any).unwrap();
        w.next(today()).unwrap();
        w.set_preferred_date(tomorrow(), today()).unwrap();
        w.select_time(TimeSlot::TwoPm).unwrap();
        w.next(today()).unwrap();
        w.edit(|d| d.description = "Pine branch on the forearm".to_string())
            .unwrap();
        w
    }

    #[test]
    fn starts_on_identity_with_empty_draft() {
        let w = BookingWizard::new();
        assert_eq!(w.step(), Step::Identity);
        assert_eq!(w.draft(), &BookingDraft::default());
        assert_eq!(w.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn step_numbers_cover_one_to_four() {
        let numbers: Vec<_> = Step::ALL.iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert!(Step::Details.is_last());
    }

    #[test]
    fn next_is_blocked_by_missing_identity_fields() {
        let mut w = BookingWizard::new();
        let err = w.next(today()).unwrap_err();
        assert_eq!(w.step(), Step::Identity);
        let fields: Vec<_> = err.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![Field::FirstName, Field::LastName, Field::Email, Field::Phone]
        );
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let mut w = BookingWizard::new();
        fill_identity(&mut w);
        w.edit(|d| d.phone = "   ".to_string()).unwrap();
        let err = w.next(today()).unwrap_err();
        assert_eq!(err.field_errors(), &[FieldError::required(Field::Phone)]);
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut w = BookingWizard::new();
        fill_identity(&mut w);
        w.edit(|d| d.email = "jane-at-example".to_string()).unwrap();
        let err = w.next(today()).unwrap_err();
        assert_eq!(
            err.field_errors(),
            &[FieldError::new(Field::Email, ValidationReason::InvalidEmail)]
        );
    }

    #[test]
    fn next_on_last_step_is_a_no_op() {
        let mut w = wizard_at_details();
        let before = w.clone();
        assert_eq!(w.next(today()), Ok(Step::Details));
        assert_eq!(w, before);
    }

    #[test]
    fn previous_on_first_step_is_a_no_op() {
        let mut w = BookingWizard::new();
        assert_eq!(w.previous(), Step::Identity);
        assert_eq!(w, BookingWizard::new());
    }

    #[test]
    fn back_and_forth_from_interior_steps_is_idempotent() {
        let full = wizard_at_details();
        for step in [Step::ServiceArtist, Step::Schedule] {
            let mut w = full.clone();
            while w.step() != step {
                w.previous();
            }
            let before = w.clone();

            w.previous();
            w.next(today()).unwrap();
            assert_eq!(w, before);

            w.next(today()).unwrap();
            w.previous();
            assert_eq!(w, before);
        }
    }

    #[test]
    fn selections_are_only_accepted_on_their_step() {
        let mut w = BookingWizard::new();
        assert_matches!(
            w.select_service(ServiceId::Small),
            Err(WizardError::WrongStep {
                expected: Step::ServiceArtist,
                actual: Step::Identity
            })
        );
        assert_matches!(
            w.select_time(TimeSlot::Noon),
            Err(WizardError::WrongStep { expected: Step::Schedule, .. })
        );
        assert_eq!(w.draft().service, None);
        assert_eq!(w.draft().preferred_time, None);
    }

    #[test]
    fn service_is_required_but_artist_is_not() {
        let mut w = BookingWizard::new();
        fill_identity(&mut w);
        w.next(today()).unwrap();
        let err = w.next(today()).unwrap_err();
        assert_eq!(err.field_errors(), &[FieldError::required(Field::Service)]);

        w.select_service(ServiceId::Consultation).unwrap();
        assert_eq!(w.next(today()), Ok(Step::Schedule));
    }

    #[test]
    fn past_dates_are_rejected_at_selection() {
        let mut w = BookingWizard::new();
        let yesterday = today().pred_opt().unwrap();
        assert_matches!(
            w.set_preferred_date(yesterday, today()),
            Err(WizardError::Invalid(errors)) if errors[0].reason == ValidationReason::DateInPast
        );
        assert_eq!(w.draft().preferred_date, None);

        w.set_preferred_date(today(), today()).unwrap();
        assert_eq!(w.draft().preferred_date, Some(today()));
    }

    #[test]
    fn a_date_that_has_since_passed_blocks_the_schedule_step() {
        let mut w = wizard_at_details();
        w.previous();
        let later = tomorrow().succ_opt().unwrap();
        let err = w.next(later).unwrap_err();
        assert_eq!(
            err.field_errors(),
            &[FieldError::new(Field::PreferredDate, ValidationReason::DateInPast)]
        );
    }

    #[test]
    fn closed_hours_block_the_schedule_step() {
        let mut w = wizard_at_details();
        w.previous();
        w.select_time(TimeSlot::NineAm).unwrap();
        let err = w.next(today()).unwrap_err();
        assert_eq!(
            err.field_errors(),
            &[FieldError::new(Field::PreferredTime, ValidationReason::SlotUnavailable)]
        );
    }

    #[test]
    fn allergy_details_required_only_when_flagged() {
        let mut w = wizard_at_details();
        w.edit(|d| d.has_allergies = true).unwrap();
        let err = w.begin_submit(today()).unwrap_err();
        assert_eq!(err.field_errors(), &[FieldError::required(Field::AllergyDetails)]);

        w.edit(|d| d.allergy_details = "Latex".to_string()).unwrap();
        let submission = w.begin_submit(today()).unwrap();
        assert_eq!(submission.allergy_details.as_deref(), Some("Latex"));
    }

    #[test]
    fn unflagged_allergies_are_dropped_from_the_payload() {
        let mut w = wizard_at_details();
        w.edit(|d| {
            d.has_allergies = true;
            d.allergy_details = "Nickel".to_string();
            d.has_allergies = false;
        })
        .unwrap();
        let submission = w.begin_submit(today()).unwrap();
        assert_eq!(submission.allergy_details, None);
        let json = serde_json::to_value(&submission).unwrap();
        assert!(json.get("allergy_details").is_none());
    }

    #[test]
    fn attachments_must_be_images() {
        let mut w = wizard_at_details();
        let pdf = ReferenceImage {
            file_name: "idea.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            size_bytes: 1200,
        };
        assert_matches!(w.attach_image(pdf), Err(WizardError::Invalid(_)));
        assert!(w.draft().reference_images.is_empty());

        let png = ReferenceImage {
            file_name: "pine.png".to_string(),
            content_type: "image/png".to_string(),
            size_bytes: 52_000,
        };
        for _ in 0..MAX_REFERENCE_IMAGES {
            w.attach_image(png.clone()).unwrap();
        }
        assert_matches!(w.attach_image(png), Err(WizardError::Invalid(_)));

        w.remove_image(0).unwrap();
        w.remove_image(99).unwrap();
        assert_eq!(w.draft().reference_images.len(), MAX_REFERENCE_IMAGES - 1);
    }

    #[test]
    fn submit_is_only_available_on_details() {
        let mut w = BookingWizard::new();
        fill_identity(&mut w);
        assert_matches!(
            w.begin_submit(today()),
            Err(WizardError::WrongStep { expected: Step::Details, .. })
        );
    }

    #[test]
    fn duplicate_submissions_are_refused() {
        let mut w = wizard_at_details();
        w.begin_submit(today()).unwrap();
        assert_eq!(w.begin_submit(today()), Err(WizardError::SubmissionInFlight));
        assert_eq!(
            w.edit(|d| d.description.clear()),
            Err(WizardError::SubmissionInFlight)
        );
        assert_eq!(w.previous(), Step::Details);
    }

    #[test]
    fn accepted_submission_clears_the_draft() {
        let mut w = wizard_at_details();
        w.begin_submit(today()).unwrap();
        w.finish_submit(IntakeReply::Accepted {
            reference: "0192".to_string(),
        });
        assert_eq!(w.step(), Step::Identity);
        assert_eq!(w.draft(), &BookingDraft::default());
        assert_eq!(
            w.status(),
            &SubmissionStatus::Submitted {
                reference: "0192".to_string()
            }
        );
        w.dismiss_status();
        assert_eq!(w.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn failed_submission_keeps_the_draft_for_retry() {
        let mut w = wizard_at_details();
        let draft = w.draft().clone();
        w.begin_submit(today()).unwrap();
        w.fail_submit("network down");
        assert_matches!(w.status(), SubmissionStatus::Failed(r) if r.message == "network down");
        assert_eq!(w.draft(), &draft);
        assert_eq!(w.step(), Step::Details);

        assert!(w.begin_submit(today()).is_ok());
    }

    #[test]
    fn server_rejection_returns_to_the_offending_step() {
        let mut w = wizard_at_details();
        w.begin_submit(today()).unwrap();
        w.finish_submit(IntakeReply::Rejected(Rejection::from_field_errors(vec![
            FieldError::required(Field::Description),
            FieldError::new(Field::PreferredTime, ValidationReason::SlotUnavailable),
        ])));
        assert_eq!(w.step(), Step::Schedule);
        assert_matches!(
            w.status(),
            SubmissionStatus::Failed(r) if r.reason == RejectionReason::SlotUnavailable
        );

        w.select_time(TimeSlot::ThreePm).unwrap();
        w.next(today()).unwrap();
        assert!(w.begin_submit(today()).is_ok());
    }

    #[test]
    fn rejection_without_field_errors_stays_on_details() {
        let mut w = wizard_at_details();
        w.begin_submit(today()).unwrap();
        w.finish_submit(IntakeReply::Rejected(Rejection::service_unavailable("down")));
        assert_eq!(w.step(), Step::Details);
    }

    #[test]
    fn every_booking_field_belongs_to_a_step() {
        assert_eq!(Step::owning(Field::Email), Some(Step::Identity));
        assert_eq!(Step::owning(Field::Service), Some(Step::ServiceArtist));
        assert_eq!(Step::owning(Field::PreferredDate), Some(Step::Schedule));
        assert_eq!(Step::owning(Field::AllergyDetails), Some(Step::Details));
        assert_eq!(Step::owning(Field::Subject), None);
    }

    #[test]
    fn end_to_end_payload_matches_the_answers() {
        let mut w = wizard_at_details();
        let submission = w.begin_submit(today()).unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "first_name": "Jane",
                "last_name": "Doe",
                "email": "jane@x.com",
                "phone": "555-1234",
                "is_first_tattoo": false,
                "has_allergies": false,
                "artist": "any",
                "service": "medium",
                "preferred_date": "2026-10-17",
                "preferred_time": "2:00 PM",
                "description": "Pine branch on the forearm",
                "reference_images": [],
            })
        );
    }

    #[test]
    fn missing_artist_submits_as_any() {
        let mut w = wizard_at_details();
        w.edit(|d| d.artist = None).unwrap();
        assert_eq!(w.begin_submit(today()).unwrap().artist, ArtistId::Any);
    }

    #[test]
    fn received_payloads_are_revalidated() {
        let mut submission = wizard_at_details().begin_submit(today()).unwrap();
        assert!(submission.validate(today()).is_empty());

        submission.has_allergies = true;
        submission.preferred_date = today().pred_opt().unwrap();
        let fields: Vec<_> = submission
            .validate(today())
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec![Field::PreferredDate, Field::AllergyDetails]);
    }

    #[test]
    fn received_allergy_details_follow_the_flag() {
        let mut submission = wizard_at_details().begin_submit(today()).unwrap();
        submission.allergy_details = Some("Nickel".to_string());
        assert_eq!(submission.clone().normalized().allergy_details, None);

        submission.has_allergies = true;
        submission.allergy_details = Some("  Latex ".to_string());
        assert_eq!(submission.normalized().allergy_details.as_deref(), Some("Latex"));
    }
}
