pub mod archive;
pub mod home;
pub mod insights;
pub mod journey;
pub mod settings_dialog;
