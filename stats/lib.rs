/*!
This crate computes the summary statistics shown on the dashboard: [`MeanVariance`](struct.MeanVariance.html), [`Skewness`](struct.Skewness.html), quantiles, a binned [`Histogram`](struct.Histogram.html), a Gaussian [`KernelDensity`](struct.KernelDensity.html) estimate and [`BoxPlot`](struct.BoxPlot.html) statistics.

Statistics that are computed when the entire input is available at once implement [`Metric`](trait.Metric.html). Statistics that can be aggregated in chunks implement [`StreamingMetric`](trait.StreamingMetric.html).
*/

#![allow(clippy::tabs_in_doc_comments)]

mod box_plot;
mod histogram;
mod kde;
mod mean_variance;
mod quantile;
mod skewness;

pub use self::box_plot::{BoxPlot, BoxPlotOutput};
pub use self::histogram::{Histogram, HistogramBin, HistogramInput};
pub use self::kde::{KernelDensity, KernelDensityInput, KernelDensityOutput};
pub use self::mean_variance::{m2_to_variance, merge_mean_m2, MeanVariance, MeanVarianceOutput};
pub use self::quantile::{quantile, Quartiles};
pub use self::skewness::Skewness;

/**
The `Metric` trait defines a common interface to statistics that are computed when the entire input is available at once.

The generic lifetime `'a` allows `Input`s and `Output`s to borrow from their enclosing scope.
*/
pub trait Metric<'a> {
	type Input;
	type Output;
	fn compute(input: Self::Input) -> Self::Output;
}

/**
The `StreamingMetric` trait defines a common interface to statistics that can be computed in a streaming manner, where the input is available in chunks.

After being initialized, a value of type `T` implementing the `StreamingMetric` trait can have `update()` called on it with values of the associated type `Input`. Multiple values of `T` can be merged together by calling `merge()`. When finished aggregating, call `finalize()` to produce the associated type `Output`.

# Examples

Here is a basic `Max` statistic, which takes `f64`s as input and produces the largest of them.

```
use klang_stats::StreamingMetric;

struct Max(f64);

impl StreamingMetric<'_> for Max {
	type Input = f64;
	type Output = f64;
	fn update(&mut self, input: Self::Input) {
		self.0 = self.0.max(input)
	}
	fn merge(&mut self, other: Self) { self.0 = self.0.max(other.0) }
	fn finalize(self) -> Self::Output { self.0 }
}
```
*/
pub trait StreamingMetric<'a> {
	/// `Input` is the type to aggregate in calls to `update()`.
	type Input;
	/// `Output` is the return type of `finalize()`.
	type Output;
	/// Update this streaming metric with the `Input` `input`.
	fn update(&mut self, input: Self::Input);
	/// Merge multiple independently computed streaming metrics.
	fn merge(&mut self, other: Self);
	/// When you are done aggregating `Input`s, call `finalize()` to produce an `Output`.
	fn finalize(self) -> Self::Output;
}
