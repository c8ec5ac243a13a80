pub mod booking;
pub mod catalog;
pub mod contact;
pub mod error;
pub mod intake;
pub mod masonry;

pub use booking::{BookingDraft, BookingWizard, Step};
pub use contact::{ContactDraft, ContactForm};
pub use error::{CatalogError, Field, FieldError, ValidationReason, WizardError};
pub use intake::{
    BookingSubmission, ContactSubmission, IntakeReply, ReferenceImage, Rejection,
    RejectionReason, SubmissionStatus,
};
