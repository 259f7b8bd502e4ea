use crate::common::{
	compute_chart_box, draw_axes, nice_range, AxesOptions, Range, Scale, XAxisLabels,
	CHART_CONFIG,
};
use crate::components::{ChartFrame, LegendItem};
use html::{component, format_coordinate, html};
use klang_deps::itertools::Itertools;

pub struct LineChartOptions {
	pub series: Vec<LineChartSeries>,
	pub title: Option<String>,
	pub x_axis_title: Option<String>,
	pub y_axis_title: Option<String>,
	/// Include zero in the y axis.
	pub y_includes_zero: bool,
}

#[derive(Clone, Debug)]
pub struct LineChartSeries {
	pub color: String,
	pub data: Vec<LineChartPoint>,
	/// Fill the area between the line and `y = 0`.
	pub fill: bool,
	pub title: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineChartPoint {
	pub x: f64,
	pub y: f64,
}

#[component]
pub fn LineChart(options: LineChartOptions) {
	let LineChartOptions {
		series,
		title,
		x_axis_title,
		y_axis_title,
		y_includes_zero,
	} = options;
	let chart_box = compute_chart_box();
	let points = || series.iter().flat_map(|series| series.data.iter());
	let x_range = Range::from_values(points().map(|point| point.x))
		.unwrap_or(Range { min: 0.0, max: 1.0 });
	let mut y_range = Range::from_values(points().map(|point| point.y))
		.unwrap_or(Range { min: 0.0, max: 1.0 });
	if y_includes_zero || series.iter().any(|series| series.fill) {
		y_range = y_range.including(0.0);
	}
	let (x_range, x_grid_line_info) = nice_range(x_range, CHART_CONFIG.max_grid_lines);
	let (y_range, y_grid_line_info) = nice_range(y_range, CHART_CONFIG.max_grid_lines);
	let x_scale = Scale::x(x_range, chart_box);
	let y_scale = Scale::y(y_range, chart_box);
	let legend: Vec<LegendItem> = series
		.iter()
		.filter_map(|series| {
			series.title.as_ref().map(|title| LegendItem {
				color: series.color.clone(),
				title: title.clone(),
			})
		})
		.collect();
	let legend = if legend.is_empty() { None } else { Some(legend) };
	let lines = series
		.iter()
		.map(|series| {
			let path = line_path(&series.data, x_scale, y_scale);
			let area = if series.fill {
				area_path(&series.data, x_scale, y_scale).map(|area| {
					html! {
						<path
							class="chart-area"
							d={area}
							fill={series.color.clone()}
							fill-opacity="0.3"
						/>
					}
				})
			} else {
				None
			};
			html! {
				<g class="chart-series">
					{area}
					<path
						class="chart-line"
						d={path}
						fill="none"
						stroke={series.color.clone()}
						stroke-width="2"
					/>
				</g>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<ChartFrame chart_type="line" title={title} legend={legend}>
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
			{lines}
		</ChartFrame>
	}
}

/// Build the svg path data connecting the finite points in order.
pub fn line_path(points: &[LineChartPoint], x_scale: Scale, y_scale: Scale) -> String {
	points
		.iter()
		.filter(|point| point.x.is_finite() && point.y.is_finite())
		.enumerate()
		.map(|(index, point)| {
			format!(
				"{}{},{}",
				if index == 0 { "M" } else { "L" },
				format_coordinate(x_scale.apply(point.x)),
				format_coordinate(y_scale.apply(point.y)),
			)
		})
		.join(" ")
}

/// Build the svg path data of the area between the line and `y = 0`.
fn area_path(points: &[LineChartPoint], x_scale: Scale, y_scale: Scale) -> Option<String> {
	let first = points.first()?;
	let last = points.last()?;
	let baseline = format_coordinate(y_scale.apply(0.0));
	Some(format!(
		"M{},{} {} L{},{} Z",
		format_coordinate(x_scale.apply(first.x)),
		baseline,
		line_path(points, x_scale, y_scale).replacen('M', "L", 1),
		format_coordinate(x_scale.apply(last.x)),
		baseline,
	))
}

#[test]
fn test_line_path() {
	let scale = Scale {
		domain: Range { min: 0.0, max: 10.0 },
		start_pixels: 0.0,
		end_pixels: 100.0,
	};
	let y_scale = Scale {
		domain: Range { min: 0.0, max: 1.0 },
		start_pixels: 50.0,
		end_pixels: 0.0,
	};
	let points = vec![
		LineChartPoint { x: 0.0, y: 0.0 },
		LineChartPoint { x: 5.0, y: 0.5 },
		LineChartPoint {
			x: 7.5,
			y: f64::NAN,
		},
		LineChartPoint { x: 10.0, y: 1.0 },
	];
	assert_eq!(line_path(&points, scale, y_scale), "M0,50 L50,25 L100,0");
	assert_eq!(
		area_path(&points, scale, y_scale).unwrap(),
		"M0,50 L0,50 L50,25 L100,0 L100,50 Z"
	);
	assert_eq!(area_path(&[], scale, y_scale), None);
}

#[test]
fn test_line_chart() {
	let html = html! {
		<LineChart options={LineChartOptions {
			series: vec![LineChartSeries {
				color: "#9c092b".to_owned(),
				data: vec![
					LineChartPoint { x: 0.0, y: 0.1 },
					LineChartPoint { x: 1.0, y: 0.4 },
					LineChartPoint { x: 2.0, y: 0.1 },
				],
				fill: true,
				title: None,
			}],
			title: Some("Skewness Line of BOD (Skewness: 0.00)".to_owned()),
			x_axis_title: Some("BOD".to_owned()),
			y_axis_title: Some("Density".to_owned()),
			y_includes_zero: true,
		}} />
	}
	.render_to_string();
	assert!(html.contains(r#"data-chart-type="line""#));
	assert!(html.contains(r##"class="chart-area""##));
	assert_eq!(html.matches(r##"stroke="#9c092b""##).count(), 1);
	assert!(!html.contains("chart-legend-wrapper"));
}
