pub mod files;
pub mod viewport;
