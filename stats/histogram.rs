use super::Metric;
use klang_deps::num_traits::ToPrimitive;

/// Histogram counts values into `n_bins` equal width bins spanning the minimum to the maximum value. Every bin is closed on the left and open on the right, except the last, which is closed on both sides. If all values are equal, the bins span `[value - 0.5, value + 0.5]`.
pub struct Histogram;

pub struct HistogramInput<'a> {
	pub values: &'a [f64],
	pub n_bins: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
	pub start: f64,
	pub end: f64,
	pub count: usize,
}

impl<'a> Metric<'a> for Histogram {
	type Input = HistogramInput<'a>;
	/// `None` if there are no values, no bins, or a value is not finite.
	type Output = Option<Vec<HistogramBin>>;

	fn compute(input: Self::Input) -> Self::Output {
		let HistogramInput { values, n_bins } = input;
		if values.is_empty() || n_bins == 0 || values.iter().any(|value| !value.is_finite()) {
			return None;
		}
		let (mut min, mut max) = values
			.iter()
			.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
				(min.min(*value), max.max(*value))
			});
		if min == max {
			min -= 0.5;
			max += 0.5;
		}
		let n_bins_f64 = n_bins.to_f64()?;
		let bin_width = (max - min) / n_bins_f64;
		let mut bins: Vec<HistogramBin> = (0..n_bins)
			.map(|bin_index| {
				let bin_index = bin_index.to_f64().unwrap_or(0.0);
				HistogramBin {
					start: min + bin_width * bin_index,
					end: min + bin_width * (bin_index + 1.0),
					count: 0,
				}
			})
			.collect();
		// Pin the last edge to the maximum to avoid accumulated rounding.
		if let Some(last) = bins.last_mut() {
			last.end = max;
		}
		for value in values.iter() {
			let bin_index = ((value - min) / (max - min) * n_bins_f64)
				.floor()
				.to_usize()
				.unwrap_or(0)
				.min(n_bins - 1);
			bins[bin_index].count += 1;
		}
		Some(bins)
	}
}

#[test]
fn test_histogram() {
	let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
	let bins = Histogram::compute(HistogramInput {
		values: &values,
		n_bins: 10,
	})
	.unwrap();
	assert_eq!(bins.len(), 10);
	assert_eq!(
		bins.iter().map(|bin| bin.count).collect::<Vec<_>>(),
		vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 2]
	);
	assert_eq!(bins.iter().map(|bin| bin.count).sum::<usize>(), values.len());
	assert_eq!(bins[0].start, 0.0);
	assert_eq!(bins[9].end, 10.0);
}

#[test]
fn test_histogram_constant() {
	let bins = Histogram::compute(HistogramInput {
		values: &[2.0, 2.0, 2.0],
		n_bins: 10,
	})
	.unwrap();
	assert_eq!(bins[0].start, 1.5);
	assert_eq!(bins[9].end, 2.5);
	assert_eq!(bins[5].count, 3);
	assert_eq!(bins.iter().map(|bin| bin.count).sum::<usize>(), 3);
}

#[test]
fn test_histogram_invalid() {
	assert_eq!(
		Histogram::compute(HistogramInput {
			values: &[],
			n_bins: 10
		}),
		None
	);
	assert_eq!(
		Histogram::compute(HistogramInput {
			values: &[1.0, f64::NAN],
			n_bins: 10
		}),
		None
	);
}
