/*!
This crate re-exports the third party crates used across the workspace so their versions are declared in one place.
*/

pub use anyhow;
pub use backtrace;
pub use futures;
pub use hyper;
pub use hyper::http;
pub use itertools;
pub use lexical;
pub use num_traits;
pub use rand;
pub use serde_urlencoded;
pub use tokio;
pub use tracing;
pub use tracing_subscriber;
