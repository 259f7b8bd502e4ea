pub mod app_layout;
pub mod document;
