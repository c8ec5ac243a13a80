pub mod about;
pub mod artists;
pub mod booking;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod not_found;
