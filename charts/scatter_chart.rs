use crate::common::{
	compute_chart_box, draw_axes, format_number, nice_range, AxesOptions, Range, Scale,
	XAxisLabels, CHART_CONFIG,
};
use crate::components::ChartFrame;
use html::{component, html};

pub struct ScatterChartOptions {
	pub color: String,
	pub points: Vec<(f64, f64)>,
	pub title: Option<String>,
	pub x_axis_title: Option<String>,
	pub y_axis_title: Option<String>,
}

const POINT_RADIUS: f64 = 5.0;

#[component]
pub fn ScatterChart(options: ScatterChartOptions) {
	let ScatterChartOptions {
		color,
		points,
		title,
		x_axis_title,
		y_axis_title,
	} = options;
	let points: Vec<(f64, f64)> = points
		.into_iter()
		.filter(|(x, y)| x.is_finite() && y.is_finite())
		.collect();
	let chart_box = compute_chart_box();
	let x_range =
		Range::from_values(points.iter().map(|(x, _)| *x)).unwrap_or(Range { min: 0.0, max: 1.0 });
	let y_range =
		Range::from_values(points.iter().map(|(_, y)| *y)).unwrap_or(Range { min: 0.0, max: 1.0 });
	let (x_range, x_grid_line_info) = nice_range(x_range, CHART_CONFIG.max_grid_lines);
	let (y_range, y_grid_line_info) = nice_range(y_range, CHART_CONFIG.max_grid_lines);
	let x_scale = Scale::x(x_range, chart_box);
	let y_scale = Scale::y(y_range, chart_box);
	let circles = points
		.iter()
		.map(|(x, y)| {
			html! {
				<circle
					class="chart-point"
					cx={x_scale.apply(*x)}
					cy={y_scale.apply(*y)}
					r={POINT_RADIUS}
					fill={color.clone()}
					fill-opacity="0.7"
					stroke="white"
				>
					<title>{format!("({}, {})", format_number(*x), format_number(*y))}</title>
				</circle>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<ChartFrame chart_type="scatter" title={title} legend={None}>
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
			<g class="chart-points">{circles}</g>
		</ChartFrame>
	}
}

#[test]
fn test_scatter_chart() {
	let html = html! {
		<ScatterChart options={ScatterChartOptions {
			color: "#5e0358".to_owned(),
			points: vec![(1.0, 2.0), (3.0, f64::NAN), (2.0, 4.5)],
			title: Some("Scatter Plot of NH3N vs BOD".to_owned()),
			x_axis_title: Some("NH3N".to_owned()),
			y_axis_title: Some("BOD".to_owned()),
		}} />
	}
	.render_to_string();
	assert_eq!(html.matches("<circle").count(), 2);
	assert!(html.contains("<title>(2, 4.5)</title>"));
	assert!(html.contains("Scatter Plot of NH3N vs BOD"));
}
