pub mod colors;
pub mod error;
pub mod search_params;
