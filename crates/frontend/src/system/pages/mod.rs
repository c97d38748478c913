pub mod home;
pub mod media;
pub mod not_found;
pub mod settings;
