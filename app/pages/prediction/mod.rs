mod get;
mod page;

pub use self::get::get;
