pub mod artist_card;
pub mod booking_wizard;
pub mod contact_form;
pub mod error;
pub mod error_boundary;
pub mod footer;
pub mod loading;
pub mod masonry_gallery;
pub mod navbar;
pub mod studio_info;

// Re-export commonly used types
pub use artist_card::ArtistCard;
pub use booking_wizard::BookingWizardForm;
pub use contact_form::ContactInquiryForm;
pub use error::ErrorView;
pub use error_boundary::{log_component_error, SectionBoundary};
pub use footer::Footer;
pub use loading::LoadingView;
pub use masonry_gallery::MasonryGallery;
pub use navbar::Navbar;
pub use studio_info::{BusinessHours, StudioContactCard, StudioLocation, StudioPolicies};
