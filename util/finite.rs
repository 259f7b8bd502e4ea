use klang_deps::num_traits::Float;
use std::cmp::{Ord, Ordering};
use thiserror::Error;

/// A floating point value that is neither infinite nor NaN, which makes it totally ordered.
#[derive(Clone, Copy, Debug)]
pub struct Finite<T>(T)
where
	T: Float;

#[derive(Debug, Error, PartialEq)]
#[error("not finite")]
pub struct NotFiniteError;

impl<T> Finite<T>
where
	T: Float,
{
	pub fn new(value: T) -> Result<Self, NotFiniteError> {
		if value.is_finite() {
			Ok(Self(value))
		} else {
			Err(NotFiniteError)
		}
	}

	pub fn get(self) -> T {
		self.0
	}
}

impl<T> std::ops::Deref for Finite<T>
where
	T: Float,
{
	type Target = T;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<T> std::fmt::Display for Finite<T>
where
	T: Float + std::fmt::Display,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl<T> PartialEq for Finite<T>
where
	T: Float,
{
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.0.eq(&other.0)
	}
}

impl<T> Eq for Finite<T> where T: Float {}

impl<T> PartialOrd for Finite<T>
where
	T: Float,
{
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<T> Ord for Finite<T>
where
	T: Float,
{
	fn cmp(&self, other: &Self) -> Ordering {
		// Finite values always compare.
		self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
	}
}

pub trait ToFinite<T>
where
	T: Float,
{
	/// If the value is finite, return `Ok(Finite(self))`, otherwise return an error.
	fn to_finite(self) -> Result<Finite<T>, NotFiniteError>;
}

impl<T> ToFinite<T> for T
where
	T: Float,
{
	fn to_finite(self) -> Result<Finite<T>, NotFiniteError> {
		Finite::new(self)
	}
}

/// Sort the values in ascending order. Returns an error if any value is not finite.
pub fn sorted<T>(values: &[T]) -> Result<Vec<T>, NotFiniteError>
where
	T: Float,
{
	let mut values = values
		.iter()
		.map(|value| value.to_finite())
		.collect::<Result<Vec<_>, _>>()?;
	values.sort_unstable();
	Ok(values.into_iter().map(|value| value.get()).collect())
}

#[test]
fn test_finite() {
	assert!(Finite::new(1.0f64).is_ok());
	assert_eq!(Finite::new(f64::NAN), Err(NotFiniteError));
	assert_eq!(f64::INFINITY.to_finite(), Err(NotFiniteError));
	assert!(Finite::new(-2.5f64).unwrap() < Finite::new(0.1).unwrap());
}

#[test]
fn test_sorted() {
	assert_eq!(sorted(&[3.0f64, -1.0, 2.5, 0.0]), Ok(vec![-1.0, 0.0, 2.5, 3.0]));
	assert_eq!(sorted(&[1.0f64, f64::NAN]), Err(NotFiniteError));
}
