use crate::common::{
	compute_chart_box, draw_axes, format_number, nice_range, AxesOptions, Range, Scale,
	XAxisLabels, CHART_CONFIG,
};
use crate::components::{ChartFrame, LegendItem};
use html::{component, html, Node};
use klang_deps::num_traits::ToPrimitive;
use klang_stats::HistogramBin;

pub struct BarChartOptions {
	/// One label per category along the x axis.
	pub categories: Vec<String>,
	pub series: Vec<BarChartSeries>,
	/// Draw the series of each category on top of each other instead of side by side.
	pub stacked: bool,
	pub title: Option<String>,
	pub x_axis_title: Option<String>,
	pub y_axis_title: Option<String>,
}

#[derive(Clone, Debug)]
pub struct BarChartSeries {
	pub color: String,
	/// One value per category.
	pub data: Vec<f64>,
	pub title: Option<String>,
}

const GROUP_GAP_RATIO: f64 = 0.2;

#[component]
pub fn BarChart(options: BarChartOptions) {
	let BarChartOptions {
		categories,
		series,
		stacked,
		title,
		x_axis_title,
		y_axis_title,
	} = options;
	let legend = legend_items(&series);
	let chart_box = compute_chart_box();
	let n_categories = categories.len();
	let values = (0..n_categories).flat_map(|category_index| {
		let totals = if stacked {
			let (negative, positive) = series
				.iter()
				.filter_map(|series| series.data.get(category_index))
				.fold((0.0, 0.0), |(negative, positive), value| {
					if *value < 0.0 {
						(negative + value, positive)
					} else {
						(negative, positive + value)
					}
				});
			vec![negative, positive]
		} else {
			series
				.iter()
				.filter_map(|series| series.data.get(category_index).cloned())
				.collect()
		};
		totals
	});
	let y_range = Range::from_values(values)
		.unwrap_or(Range { min: 0.0, max: 1.0 })
		.including(0.0);
	let (y_range, y_grid_line_info) = nice_range(y_range, CHART_CONFIG.max_grid_lines);
	let y_scale = Scale::y(y_range, chart_box);
	let n_categories_f64 = n_categories.max(1).to_f64().unwrap_or(1.0);
	let category_width = chart_box.w / n_categories_f64;
	let group_gap = category_width * GROUP_GAP_RATIO;
	let n_series = series.len().max(1).to_f64().unwrap_or(1.0);
	let bar_width = if stacked {
		category_width - group_gap
	} else {
		(category_width - group_gap) / n_series
	};
	let mut bars: Vec<Node> = Vec::new();
	for category_index in 0..n_categories {
		let category_x =
			chart_box.x + category_width * category_index.to_f64().unwrap_or(0.0) + group_gap / 2.0;
		let mut positive_offset = 0.0;
		let mut negative_offset = 0.0;
		for (series_index, series) in series.iter().enumerate() {
			let value = match series.data.get(category_index) {
				Some(value) if value.is_finite() => *value,
				_ => continue,
			};
			let (x, base) = if stacked {
				let base = if value < 0.0 {
					negative_offset
				} else {
					positive_offset
				};
				if value < 0.0 {
					negative_offset += value;
				} else {
					positive_offset += value;
				}
				(category_x, base)
			} else {
				(
					category_x + bar_width * series_index.to_f64().unwrap_or(0.0),
					0.0,
				)
			};
			let y_start = y_scale.apply(base);
			let y_end = y_scale.apply(base + value);
			bars.push(html! {
				<rect
					class="chart-bar"
					x={x}
					y={y_start.min(y_end)}
					width={bar_width}
					height={(y_start - y_end).abs()}
					fill={series.color.clone()}
				>
					<title>{format!("{}: {}", categories[category_index], format_number(value))}</title>
				</rect>
			});
		}
	}
	let x_axis_labels = categories
		.iter()
		.enumerate()
		.map(|(index, label)| {
			let x = chart_box.x + category_width * (index.to_f64().unwrap_or(0.0) + 0.5);
			(x, label.clone())
		})
		.collect();
	html! {
		<ChartFrame chart_type="bar" title={title} legend={legend}>
			{draw_axes(AxesOptions {
				chart_box,
				x_axis_labels: XAxisLabels::Categorical(x_axis_labels),
				y_scale,
				y_grid_line_info,
				x_axis_title,
				y_axis_title,
			})}
			<g class="chart-bars">{bars}</g>
		</ChartFrame>
	}
}

pub struct HistogramChartOptions {
	pub bins: Vec<HistogramBin>,
	pub color: String,
	pub title: Option<String>,
	pub x_axis_title: Option<String>,
	pub y_axis_title: Option<String>,
}

/// A histogram draws one bar per bin, spanning the bin on a numeric x axis, with no gap between bars.
#[component]
pub fn HistogramChart(options: HistogramChartOptions) {
	let HistogramChartOptions {
		bins,
		color,
		title,
		x_axis_title,
		y_axis_title,
	} = options;
	let chart_box = compute_chart_box();
	let x_range = Range::from_values(bins.iter().flat_map(|bin| vec![bin.start, bin.end]))
		.unwrap_or(Range { min: 0.0, max: 1.0 });
	let (x_range, x_grid_line_info) = nice_range(x_range, CHART_CONFIG.max_grid_lines);
	let x_scale = Scale::x(x_range, chart_box);
	let max_count = bins.iter().map(|bin| bin.count).max().unwrap_or(0);
	let y_range = Range {
		min: 0.0,
		max: max_count.max(1).to_f64().unwrap_or(1.0),
	};
	let (y_range, y_grid_line_info) = nice_range(y_range, CHART_CONFIG.max_grid_lines);
	let y_scale = Scale::y(y_range, chart_box);
	let bars = bins
		.iter()
		.map(|bin| {
			let x_start = x_scale.apply(bin.start);
			let x_end = x_scale.apply(bin.end);
			let y = y_scale.apply(bin.count.to_f64().unwrap_or(0.0));
			html! {
				<rect
					class="chart-bar"
					x={x_start}
					y={y}
					width={x_end - x_start}
					height={chart_box.bottom() - y}
					fill={color.clone()}
					stroke="white"
				>
					<title>
						{format!("{} to {}: {}", format_number(bin.start), format_number(bin.end), bin.count)}
					</title>
				</rect>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<ChartFrame chart_type="histogram" title={title} legend={None}>
			{draw_axes(AxesOptions {
				chart_box,
				x_axis_labels: XAxisLabels::Numeric {
					scale: x_scale,
					grid_line_info: x_grid_line_info,
				},
				y_scale,
				y_grid_line_info,
				x_axis_title,
				y_axis_title,
			})}
			<g class="chart-bars">{bars}</g>
		</ChartFrame>
	}
}

pub(crate) fn legend_items(series: &[BarChartSeries]) -> Option<Vec<LegendItem>> {
	let items: Vec<LegendItem> = series
		.iter()
		.filter_map(|series| {
			series.title.as_ref().map(|title| LegendItem {
				color: series.color.clone(),
				title: title.clone(),
			})
		})
		.collect();
	if items.is_empty() {
		None
	} else {
		Some(items)
	}
}

#[test]
fn test_histogram_chart() {
	let bins = vec![
		HistogramBin {
			start: 0.0,
			end: 5.0,
			count: 3,
		},
		HistogramBin {
			start: 5.0,
			end: 10.0,
			count: 1,
		},
	];
	let html = html! {
		<HistogramChart options={HistogramChartOptions {
			bins,
			color: "#067c96".to_owned(),
			title: Some("Histogram of NH3N".to_owned()),
			x_axis_title: Some("NH3N".to_owned()),
			y_axis_title: Some("Frequency".to_owned()),
		}} />
	}
	.render_to_string();
	assert!(html.contains(r#"data-chart-type="histogram""#));
	assert!(html.contains(r#"<div class="chart-title">Histogram of NH3N</div>"#));
	assert_eq!(html.matches(r##"fill="#067c96""##).count(), 2);
	assert!(html.contains("<title>0 to 5: 3</title>"));
	assert!(html.contains(">Frequency</text>"));
}

#[test]
fn test_stacked_bar_chart() {
	let html = html! {
		<BarChart options={BarChartOptions {
			categories: vec!["0".to_owned(), "1".to_owned()],
			series: vec![
				BarChartSeries {
					color: "#111111".to_owned(),
					data: vec![1.0, 2.0],
					title: Some("NH3N".to_owned()),
				},
				BarChartSeries {
					color: "#222222".to_owned(),
					data: vec![3.0, 4.0],
					title: Some("BOD".to_owned()),
				},
			],
			stacked: true,
			title: None,
			x_axis_title: None,
			y_axis_title: None,
		}} />
	}
	.render_to_string();
	assert_eq!(html.matches("<rect").count(), 4);
	assert!(html.contains(r#"<div class="chart-legend-title">BOD</div>"#));
	assert!(html.contains("<title>1: 4</title>"));
	assert!(!html.contains("chart-title"));
}
