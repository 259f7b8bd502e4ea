use super::Metric;
use klang_deps::num_traits::ToPrimitive;

/// The adjusted Fisher-Pearson sample skewness, `G1 = sqrt(n (n - 1)) / (n - 2) * m3 / m2^(3/2)`, where `m2` and `m3` are the biased second and third central moments.
pub struct Skewness;

impl<'a> Metric<'a> for Skewness {
	type Input = &'a [f64];
	/// `None` when there are fewer than three values. A constant input has skewness 0.
	type Output = Option<f64>;

	fn compute(values: Self::Input) -> Self::Output {
		if values.len() < 3 {
			return None;
		}
		let n = values.len().to_f64()?;
		let mean = values.iter().sum::<f64>() / n;
		let (m2, m3) = values.iter().fold((0.0, 0.0), |(m2, m3), value| {
			let delta = value - mean;
			(m2 + delta * delta, m3 + delta * delta * delta)
		});
		let m2 = m2 / n;
		let m3 = m3 / n;
		if m2 <= (f64::EPSILON * mean.abs()).powi(2) {
			return Some(0.0);
		}
		let g1 = m3 / m2.powf(1.5);
		Some((n * (n - 1.0)).sqrt() / (n - 2.0) * g1)
	}
}

#[test]
fn test_skewness() {
	let skewness = Skewness::compute(&[1.0, 2.0, 3.0, 10.0]).unwrap();
	insta::assert_debug_snapshot!(format!("{:.4}", skewness), @r###""1.7636""###);
}

#[test]
fn test_skewness_symmetric() {
	assert_eq!(Skewness::compute(&[1.0, 2.0, 3.0]), Some(0.0));
	let skewness = Skewness::compute(&[-4.0, -1.0, 0.0, 1.0, 4.0]).unwrap();
	assert!(skewness.abs() < 1e-12);
}

#[test]
fn test_skewness_degenerate() {
	assert_eq!(Skewness::compute(&[]), None);
	assert_eq!(Skewness::compute(&[1.0, 2.0]), None);
	assert_eq!(Skewness::compute(&[5.0, 5.0, 5.0, 5.0]), Some(0.0));
}
