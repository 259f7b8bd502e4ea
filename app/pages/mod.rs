pub mod home;
pub mod prediction;
