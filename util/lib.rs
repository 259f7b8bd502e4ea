pub mod error;
pub mod finite;
pub mod serve;
