use super::page::{render, DataPreview, DataPreviewCell, DataPreviewColumn, Props};
use crate::{
	common::{
		colors::{series_color, BOX_COLOR, DENSITY_COLOR, HISTOGRAM_COLOR, SCATTER_COLOR},
		error::html_response,
		search_params::parameter_search_param,
	},
	Context,
};
use klang_charts::{
	BarChartOptions, BarChartSeries, BoxChartOptions, HistogramChartOptions, LineChartOptions,
	LineChartPoint, LineChartSeries, PieChartOptions, PieChartSlice, ScatterChartOptions,
};
use klang_core::{
	classifier::PollutionCategory,
	dataset::{Distribution, Parameter, SampleTable},
	pollution::POLLUTION_DISTRIBUTION,
};
use klang_deps::{
	http::{Request, Response, StatusCode},
	hyper::Body,
	num_traits::ToPrimitive,
	rand,
	tracing::debug,
};
use klang_stats::{
	BoxPlot, Histogram, HistogramInput, KernelDensity, KernelDensityInput, Metric, Skewness,
};
use klang_ui as ui;
use klang_util::error::Result;
use std::collections::BTreeMap;

const PREVIEW_ROWS: usize = 5;
const HISTOGRAM_BINS: usize = 10;

pub async fn get(
	context: &Context,
	_request: Request<Body>,
	search_params: Option<BTreeMap<String, String>>,
) -> Result<Response<Body>> {
	let column = parameter_search_param(search_params.as_ref(), "column")?;
	let y_column = parameter_search_param(search_params.as_ref(), "y")?;
	let table = SampleTable::generate(&mut rand::thread_rng(), context.options.rows);
	debug!(rows = table.n_rows(), %column, %y_column, "generated sample table");
	let props = props(&table, column, y_column);
	Ok(html_response(StatusCode::OK, render(props)))
}

pub fn props(table: &SampleTable, column: Parameter, y_column: Parameter) -> Props {
	let values = table.column(column);
	let skewness = Skewness::compute(values).unwrap_or(f64::NAN);
	let density = KernelDensity::compute(KernelDensityInput::new(values));
	let bins = Histogram::compute(HistogramInput {
		values,
		n_bins: HISTOGRAM_BINS,
	})
	.unwrap_or_default();
	let box_plot = BoxPlot::compute(values);
	let column_options = Parameter::ALL
		.iter()
		.map(|parameter| ui::SelectFieldOption {
			text: parameter.name().to_owned(),
			value: parameter.name().to_owned(),
		})
		.collect();
	Props {
		column: column.name().to_owned(),
		y_column: y_column.name().to_owned(),
		column_options,
		preview: data_preview(table),
		line_chart: line_chart(table),
		bar_chart: bar_chart(table),
		histogram: HistogramChartOptions {
			bins,
			color: HISTOGRAM_COLOR.to_owned(),
			title: Some(format!("Histogram of {}", column)),
			x_axis_title: Some(column.name().to_owned()),
			y_axis_title: Some("Frequency".to_owned()),
		},
		density: LineChartOptions {
			series: density
				.into_iter()
				.map(|density| LineChartSeries {
					color: DENSITY_COLOR.to_owned(),
					data: density
						.points
						.into_iter()
						.map(|(x, y)| LineChartPoint { x, y })
						.collect(),
					fill: true,
					title: None,
				})
				.collect(),
			title: Some(format!(
				"Skewness Line of {} (Skewness: {:.2})",
				column, skewness
			)),
			x_axis_title: Some(column.name().to_owned()),
			y_axis_title: Some("Density".to_owned()),
			y_includes_zero: true,
		},
		scatter: ScatterChartOptions {
			color: SCATTER_COLOR.to_owned(),
			points: values
				.iter()
				.cloned()
				.zip(table.column(y_column).iter().cloned())
				.collect(),
			title: Some(format!("Scatter Plot of {} vs {}", column, y_column)),
			x_axis_title: Some(column.name().to_owned()),
			y_axis_title: Some(y_column.name().to_owned()),
		},
		box_plot: box_plot.map(|value| BoxChartOptions {
			color: BOX_COLOR.to_owned(),
			label: column.name().to_owned(),
			value,
			title: Some(format!("Box Plot of {}", column)),
			y_axis_title: Some(column.name().to_owned()),
		}),
		pie_chart: PieChartOptions {
			slices: POLLUTION_DISTRIBUTION
				.iter()
				.map(|(category, percentage)| PieChartSlice {
					color: category.color().to_owned(),
					label: category.label().to_owned(),
					value: *percentage,
				})
				.collect(),
			start_angle: 90.0,
			title: Some("Pollution Rate of Klang River".to_owned()),
		},
	}
}

fn data_preview(table: &SampleTable) -> DataPreview {
	let columns = Parameter::ALL
		.iter()
		.map(|parameter| DataPreviewColumn {
			name: parameter.name().to_owned(),
			description: parameter.description().to_owned(),
		})
		.collect();
	let rows = table
		.head(PREVIEW_ROWS)
		.into_iter()
		.map(|row| {
			row.into_iter()
				.zip(Parameter::ALL.iter())
				.map(|(value, parameter)| data_preview_cell(*parameter, value))
				.collect()
		})
		.collect();
	DataPreview { columns, rows }
}

/// Integer columns are shown without decimals. `WQC` cells carry the name of their pollution category.
fn data_preview_cell(parameter: Parameter, value: f64) -> DataPreviewCell {
	let text = match parameter.distribution() {
		Distribution::Integer { .. } => ui::format_decimal(value, 0),
		Distribution::Uniform { .. } => ui::format_decimal(value, 6),
	};
	let title = match parameter {
		Parameter::Wqc => value
			.to_usize()
			.and_then(PollutionCategory::from_class_index)
			.map(|category| category.label().to_owned()),
		_ => None,
	};
	DataPreviewCell { text, title }
}

fn line_chart(table: &SampleTable) -> LineChartOptions {
	let series = table
		.columns()
		.map(|(parameter, values)| LineChartSeries {
			color: series_color(parameter).to_owned(),
			data: values
				.iter()
				.enumerate()
				.map(|(index, value)| LineChartPoint {
					x: index.to_f64().unwrap_or(0.0),
					y: *value,
				})
				.collect(),
			fill: false,
			title: Some(parameter.name().to_owned()),
		})
		.collect();
	LineChartOptions {
		series,
		title: None,
		x_axis_title: None,
		y_axis_title: None,
		y_includes_zero: true,
	}
}

fn bar_chart(table: &SampleTable) -> BarChartOptions {
	let series = table
		.columns()
		.map(|(parameter, values)| BarChartSeries {
			color: series_color(parameter).to_owned(),
			data: values.to_vec(),
			title: Some(parameter.name().to_owned()),
		})
		.collect();
	BarChartOptions {
		categories: (0..table.n_rows()).map(|index| index.to_string()).collect(),
		series,
		stacked: true,
		title: None,
		x_axis_title: None,
		y_axis_title: None,
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use klang_deps::rand::{rngs::StdRng, SeedableRng};

	#[test]
	fn test_props() {
		let table = SampleTable::generate(&mut StdRng::seed_from_u64(0), 100);
		let props = props(&table, Parameter::Bod, Parameter::Temp);
		assert_eq!(props.preview.rows.len(), 5);
		assert_eq!(props.preview.columns.len(), 18);
		assert_eq!(props.preview.columns[0].description, "Ammoniacal nitrogen (mg/L)");
		assert_eq!(
			props.histogram.bins.iter().map(|bin| bin.count).sum::<usize>(),
			100
		);
		assert_eq!(props.histogram.bins.len(), 10);
		assert_eq!(props.density.series.len(), 1);
		assert_eq!(props.density.series[0].data.len(), 200);
		assert!(props
			.density
			.title
			.as_ref()
			.unwrap()
			.starts_with("Skewness Line of BOD (Skewness: "));
		assert_eq!(props.scatter.points.len(), 100);
		assert_eq!(
			props.scatter.title.as_deref(),
			Some("Scatter Plot of BOD vs Temp")
		);
		assert_eq!(props.line_chart.series.len(), 18);
		assert_eq!(props.bar_chart.categories.len(), 100);
		let pie_values: Vec<f64> = props
			.pie_chart
			.slices
			.iter()
			.map(|slice| slice.value)
			.collect();
		assert_eq!(pie_values, vec![20.0, 50.0, 30.0]);
	}

	#[test]
	fn test_data_preview_cell() {
		let cell = data_preview_cell(Parameter::Wqc, 2.0);
		assert_eq!(cell.text, "2");
		assert_eq!(cell.title.as_deref(), Some("Polluted"));
		let cell = data_preview_cell(Parameter::Taste, 1.0);
		assert_eq!(cell.text, "1");
		assert_eq!(cell.title, None);
		let cell = data_preview_cell(Parameter::Ph, 7.25);
		assert_eq!(cell.text, "7.250000");
		assert_eq!(cell.title, None);
	}

	#[test]
	fn test_render_single_row() {
		let table = SampleTable::generate(&mut StdRng::seed_from_u64(3), 1);
		let html = render(props(&table, Parameter::Taste, Parameter::Wqc));
		assert!(html.contains(r#"<div class="alert-wrapper alert-level-info" role="alert">Taste has too few distinct values to estimate its density.</div>"#));
		assert!(html.contains(r#"title="Biochemical oxygen demand (mg/L)">BOD</th>"#));
		assert!(html.contains("Box Plot of Taste"));
	}

	#[test]
	fn test_props_with_too_few_rows() {
		let table = SampleTable::generate(&mut StdRng::seed_from_u64(0), 2);
		let props = props(&table, Parameter::Nh3n, Parameter::Nh3n);
		assert_eq!(
			props.density.title.as_deref(),
			Some("Skewness Line of NH3N (Skewness: NaN)")
		);
		assert_eq!(props.preview.rows.len(), 2);
	}

	#[test]
	fn test_data_preview_formats_integer_columns() {
		let table = SampleTable::generate(&mut StdRng::seed_from_u64(3), 10);
		let preview = data_preview(&table);
		let taste = preview.rows[0][Parameter::Taste.index()].text.as_str();
		assert!(taste == "0" || taste == "1");
		assert!(preview.rows[0][Parameter::Ph.index()].text.contains('.'));
	}
}
