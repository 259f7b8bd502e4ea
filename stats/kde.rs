use super::{MeanVariance, Metric, StreamingMetric};
use klang_deps::num_traits::ToPrimitive;
use std::f64::consts::PI;

/// KernelDensity estimates the probability density of a column with a Gaussian kernel. The bandwidth follows Scott's rule, `std * n^(-1/5)`, and the density is evaluated on `n_points` evenly spaced points from `min - cut * bandwidth` to `max + cut * bandwidth`.
pub struct KernelDensity;

pub struct KernelDensityInput<'a> {
	pub values: &'a [f64],
	pub n_points: usize,
	pub cut: f64,
}

impl<'a> KernelDensityInput<'a> {
	pub fn new(values: &'a [f64]) -> KernelDensityInput<'a> {
		KernelDensityInput {
			values,
			n_points: 200,
			cut: 3.0,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct KernelDensityOutput {
	pub bandwidth: f64,
	/// `(x, density)` pairs in ascending order of `x`.
	pub points: Vec<(f64, f64)>,
}

impl<'a> Metric<'a> for KernelDensity {
	type Input = KernelDensityInput<'a>;
	/// `None` if there are fewer than two values, fewer than two points, or the values have no spread.
	type Output = Option<KernelDensityOutput>;

	fn compute(input: Self::Input) -> Self::Output {
		let KernelDensityInput {
			values,
			n_points,
			cut,
		} = input;
		if n_points < 2 || values.iter().any(|value| !value.is_finite()) {
			return None;
		}
		let std = MeanVariance::from_values(values).finalize()?.std?;
		if std <= 0.0 {
			return None;
		}
		let n = values.len().to_f64()?;
		let bandwidth = std * n.powf(-0.2);
		let (min, max) = values
			.iter()
			.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
				(min.min(*value), max.max(*value))
			});
		let start = min - cut * bandwidth;
		let end = max + cut * bandwidth;
		let step = (end - start) / (n_points - 1).to_f64()?;
		let points = (0..n_points)
			.map(|index| {
				let x = if index == n_points - 1 {
					end
				} else {
					start + step * index.to_f64().unwrap_or(0.0)
				};
				(x, density(values, bandwidth, x))
			})
			.collect();
		Some(KernelDensityOutput { bandwidth, points })
	}
}

fn density(values: &[f64], bandwidth: f64, x: f64) -> f64 {
	let n = values.len().to_f64().unwrap_or(f64::NAN);
	let sum: f64 = values
		.iter()
		.map(|value| {
			let z = (x - value) / bandwidth;
			(-0.5 * z * z).exp()
		})
		.sum();
	sum / (n * bandwidth * (2.0 * PI).sqrt())
}

#[test]
fn test_density() {
	let values = [0.0, 1.0, 2.0];
	let bandwidth = 3.0f64.powf(-0.2);
	insta::assert_debug_snapshot!(format!("{:.6}", density(&values, bandwidth, 2.0)), @r###""0.249343""###);
}

#[test]
fn test_kernel_density() {
	let values = [0.0, 1.0, 2.0];
	let output = KernelDensity::compute(KernelDensityInput::new(&values)).unwrap();
	assert!((output.bandwidth - 0.802742).abs() < 1e-6);
	assert_eq!(output.points.len(), 200);
	let (first_x, _) = output.points[0];
	let (last_x, _) = output.points[199];
	assert!((first_x - (0.0 - 3.0 * output.bandwidth)).abs() < 1e-12);
	assert!((last_x - (2.0 + 3.0 * output.bandwidth)).abs() < 1e-12);
	// The estimate is a density, so the area under it is close to one.
	let area: f64 = output
		.points
		.windows(2)
		.map(|window| (window[1].0 - window[0].0) * (window[0].1 + window[1].1) / 2.0)
		.sum();
	assert!((area - 1.0).abs() < 0.01);
}

#[test]
fn test_kernel_density_degenerate() {
	assert_eq!(KernelDensity::compute(KernelDensityInput::new(&[1.0])), None);
	assert_eq!(
		KernelDensity::compute(KernelDensityInput::new(&[4.0, 4.0, 4.0])),
		None
	);
}
