//! https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Parallel_algorithm

use super::StreamingMetric;
use klang_deps::num_traits::ToPrimitive;

/// MeanVariance accumulates the count, mean and sum of squared deviations (`m2`) of a stream of values.
#[derive(Debug, Clone, Default)]
pub struct MeanVariance {
	n: u64,
	mean: f64,
	m2: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeanVarianceOutput {
	pub n: u64,
	pub mean: f64,
	/// The population variance, `m2 / n`.
	pub variance: f64,
	/// The sample standard deviation, `sqrt(m2 / (n - 1))`. This is `None` when `n < 2`.
	pub std: Option<f64>,
}

impl MeanVariance {
	pub fn from_values(values: &[f64]) -> MeanVariance {
		let mut mean_variance = MeanVariance::default();
		for value in values.iter() {
			mean_variance.update(*value);
		}
		mean_variance
	}
}

impl<'a> StreamingMetric<'a> for MeanVariance {
	type Input = f64;
	type Output = Option<MeanVarianceOutput>;

	fn update(&mut self, value: f64) {
		let (mean, m2) = merge_mean_m2(self.n, self.mean, self.m2, 1, value, 0.0);
		self.n += 1;
		self.mean = mean;
		self.m2 = m2;
	}

	fn merge(&mut self, other: Self) {
		if other.n == 0 {
			return;
		}
		if self.n == 0 {
			*self = other;
			return;
		}
		let (mean, m2) = merge_mean_m2(self.n, self.mean, self.m2, other.n, other.mean, other.m2);
		self.n += other.n;
		self.mean = mean;
		self.m2 = m2;
	}

	fn finalize(self) -> Self::Output {
		if self.n == 0 {
			return None;
		}
		let std = if self.n > 1 {
			Some(m2_to_variance(self.m2, self.n - 1).sqrt())
		} else {
			None
		};
		Some(MeanVarianceOutput {
			n: self.n,
			mean: self.mean,
			variance: m2_to_variance(self.m2, self.n),
			std,
		})
	}
}

/// Combine two separately computed means and `m2`s into a single mean and `m2`.
pub fn merge_mean_m2(
	n_a: u64,
	mean_a: f64,
	m2_a: f64,
	n_b: u64,
	mean_b: f64,
	m2_b: f64,
) -> (f64, f64) {
	let n_a = n_a.to_f64().unwrap_or(0.0);
	let n_b = n_b.to_f64().unwrap_or(0.0);
	(
		(((n_a * mean_a) + (n_b * mean_b)) / (n_a + n_b)),
		m2_a + m2_b + (mean_b - mean_a) * (mean_b - mean_a) * (n_a * n_b / (n_a + n_b)),
	)
}

pub fn m2_to_variance(m2: f64, n: u64) -> f64 {
	m2 / n.to_f64().unwrap_or(f64::NAN)
}

#[test]
fn test_mean_variance() {
	let output = MeanVariance::from_values(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])
		.finalize()
		.unwrap();
	assert_eq!(output.n, 8);
	assert!((output.mean - 5.0).abs() < 1e-12);
	assert!((output.variance - 4.0).abs() < 1e-12);
	assert!((output.std.unwrap() - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
}

#[test]
fn test_mean_variance_merge() {
	let mut a = MeanVariance::from_values(&[1.0, 2.0, 3.0]);
	let b = MeanVariance::from_values(&[10.0, 20.0]);
	a.merge(b);
	let merged = a.finalize().unwrap();
	let whole = MeanVariance::from_values(&[1.0, 2.0, 3.0, 10.0, 20.0])
		.finalize()
		.unwrap();
	assert_eq!(merged.n, whole.n);
	assert!((merged.mean - whole.mean).abs() < 1e-12);
	assert!((merged.variance - whole.variance).abs() < 1e-9);
}

#[test]
fn test_mean_variance_small_inputs() {
	assert_eq!(MeanVariance::default().finalize(), None);
	let single = MeanVariance::from_values(&[3.5]).finalize().unwrap();
	assert_eq!(single.mean, 3.5);
	assert_eq!(single.variance, 0.0);
	assert_eq!(single.std, None);
}
