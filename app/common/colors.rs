use klang_core::dataset::Parameter;

pub const HISTOGRAM_COLOR: &str = "#067c96";
pub const DENSITY_COLOR: &str = "#9c092b";
pub const SCATTER_COLOR: &str = "#5e0358";
pub const BOX_COLOR: &str = "#51136e";

const SERIES_COLORS: [&str; 18] = [
	"#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
	"#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
	"#bcbd22", "#dbdb8d",
];

/// The color of a parameter's series in the charts that draw every column.
pub fn series_color(parameter: Parameter) -> &'static str {
	SERIES_COLORS[parameter.index() % SERIES_COLORS.len()]
}
