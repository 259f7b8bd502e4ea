use super::{Metric, Quartiles};
use klang_util::finite::sorted;

/// BoxPlot computes the quartiles of a column, the whiskers, which extend to the most extreme values within 1.5 IQR of the box, and the outliers beyond the whiskers.
pub struct BoxPlot;

#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotOutput {
	pub p25: f64,
	pub p50: f64,
	pub p75: f64,
	pub whisker_low: f64,
	pub whisker_high: f64,
	pub outliers: Vec<f64>,
}

const WHISKER_IQR_RATIO: f64 = 1.5;

impl<'a> Metric<'a> for BoxPlot {
	type Input = &'a [f64];
	/// `None` if there are no values or a value is not finite.
	type Output = Option<BoxPlotOutput>;

	fn compute(values: Self::Input) -> Self::Output {
		let values = sorted(values).ok()?;
		let quartiles = Quartiles::from_sorted(&values)?;
		let low_fence = quartiles.p25 - WHISKER_IQR_RATIO * quartiles.iqr();
		let high_fence = quartiles.p75 + WHISKER_IQR_RATIO * quartiles.iqr();
		let whisker_low = values
			.iter()
			.cloned()
			.find(|value| *value >= low_fence)
			.unwrap_or(quartiles.p25)
			.min(quartiles.p25);
		let whisker_high = values
			.iter()
			.rev()
			.cloned()
			.find(|value| *value <= high_fence)
			.unwrap_or(quartiles.p75)
			.max(quartiles.p75);
		let outliers = values
			.iter()
			.cloned()
			.filter(|value| *value < whisker_low || *value > whisker_high)
			.collect();
		Some(BoxPlotOutput {
			p25: quartiles.p25,
			p50: quartiles.p50,
			p75: quartiles.p75,
			whisker_low,
			whisker_high,
			outliers,
		})
	}
}

#[test]
fn test_box_plot() {
	let values = [100.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
	insta::assert_debug_snapshot!(BoxPlot::compute(&values), @r###"
 Some(
     BoxPlotOutput {
         p25: 3.25,
         p50: 5.5,
         p75: 7.75,
         whisker_low: 1.0,
         whisker_high: 9.0,
         outliers: [
             100.0,
         ],
     },
 )
 "###);
}

#[test]
fn test_box_plot_without_outliers() {
	let output = BoxPlot::compute(&[3.0, 1.0, 2.0]).unwrap();
	assert_eq!(output.whisker_low, 1.0);
	assert_eq!(output.whisker_high, 3.0);
	assert!(output.outliers.is_empty());
	assert_eq!(BoxPlot::compute(&[]), None);
	assert_eq!(BoxPlot::compute(&[1.0, f64::INFINITY]), None);
}
