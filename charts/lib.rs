/*!
This crate renders the dashboard's charts as inline svg on the server. Every chart is a component taking an options struct, and is drawn inside a [`ChartFrame`](components/struct.ChartFrame.html) with a title and an optional legend.
*/

pub mod bar_chart;
pub mod box_chart;
pub mod common;
pub mod components;
pub mod line_chart;
pub mod pie_chart;
pub mod scatter_chart;

pub use self::bar_chart::{
	BarChart, BarChartOptions, BarChartSeries, HistogramChart, HistogramChartOptions,
};
pub use self::box_chart::{BoxChart, BoxChartOptions};
pub use self::line_chart::{LineChart, LineChartOptions, LineChartPoint, LineChartSeries};
pub use self::pie_chart::{PieChart, PieChartOptions, PieChartSlice};
pub use self::scatter_chart::{ScatterChart, ScatterChartOptions};
