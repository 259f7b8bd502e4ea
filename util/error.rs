pub use klang_deps::anyhow::{Error, Result};

/// Create an [`Error`](type.Error.html) from a format string.
#[macro_export]
macro_rules! err {
	($($t:tt)*) => {
		$crate::error::Error::msg(format!($($t)*))
	};
}

#[test]
fn test_err() {
	let column = "XYZ";
	let error: Error = err!("unknown column \"{}\"", column);
	assert_eq!(error.to_string(), "unknown column \"XYZ\"");
}
