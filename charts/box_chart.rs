use crate::common::{
	compute_chart_box, draw_axes, format_number, nice_range, AxesOptions, Range, Scale,
	XAxisLabels, CHART_CONFIG,
};
use crate::components::ChartFrame;
use html::{component, html, Node};
use klang_stats::BoxPlotOutput;

pub struct BoxChartOptions {
	pub color: String,
	pub label: String,
	pub value: BoxPlotOutput,
	pub title: Option<String>,
	pub y_axis_title: Option<String>,
}

/// The box is drawn at half of the chart's width.
const BOX_WIDTH_RATIO: f64 = 0.5;
const OUTLIER_RADIUS: f64 = 4.0;

#[component]
pub fn BoxChart(options: BoxChartOptions) {
	let BoxChartOptions {
		color,
		label,
		value,
		title,
		y_axis_title,
	} = options;
	let chart_box = compute_chart_box();
	let y_range = Range::from_values(
		vec![value.whisker_low, value.whisker_high]
			.into_iter()
			.chain(value.outliers.iter().cloned()),
	)
	.unwrap_or(Range { min: 0.0, max: 1.0 });
	let (y_range, y_grid_line_info) = nice_range(y_range, CHART_CONFIG.max_grid_lines);
	let y_scale = Scale::y(y_range, chart_box);
	let center = chart_box.x + chart_box.w / 2.0;
	let box_width = chart_box.w * BOX_WIDTH_RATIO;
	let left = center - box_width / 2.0;
	let right = center + box_width / 2.0;
	let cap_left = center - box_width / 4.0;
	let cap_right = center + box_width / 4.0;
	let p25 = y_scale.apply(value.p25);
	let p50 = y_scale.apply(value.p50);
	let p75 = y_scale.apply(value.p75);
	let whisker_low = y_scale.apply(value.whisker_low);
	let whisker_high = y_scale.apply(value.whisker_high);
	let summary = format!(
		"min: {}, p25: {}, median: {}, p75: {}, max: {}",
		format_number(value.whisker_low),
		format_number(value.p25),
		format_number(value.p50),
		format_number(value.p75),
		format_number(value.whisker_high),
	);
	let outliers: Vec<Node> = value
		.outliers
		.iter()
		.map(|outlier| {
			html! {
				<circle
					class="chart-outlier"
					cx={center}
					cy={y_scale.apply(*outlier)}
					r={OUTLIER_RADIUS}
					fill="none"
					stroke="white"
				>
					<title>{format_number(*outlier)}</title>
				</circle>
			}
		})
		.collect();
	html! {
		<ChartFrame chart_type="box" title={title} legend={None}>
			{draw_axes(AxesOptions {
				chart_box,
				x_axis_labels: XAxisLabels::Categorical(vec![(center, label)]),
				y_scale,
				y_grid_line_info,
				x_axis_title: None,
				y_axis_title,
			})}
			<g class="chart-box">
				<line class="chart-whisker" x1={center} y1={whisker_low} x2={center} y2={p25} stroke="white" />
				<line class="chart-whisker" x1={center} y1={p75} x2={center} y2={whisker_high} stroke="white" />
				<line class="chart-whisker" x1={cap_left} y1={whisker_low} x2={cap_right} y2={whisker_low} stroke="white" />
				<line class="chart-whisker" x1={cap_left} y1={whisker_high} x2={cap_right} y2={whisker_high} stroke="white" />
				<rect
					x={left}
					y={p75}
					width={box_width}
					height={p25 - p75}
					fill={color}
					stroke="white"
				>
					<title>{summary}</title>
				</rect>
				<line class="chart-median" x1={left} y1={p50} x2={right} y2={p50} stroke="#ff7f0e" stroke-width="2" />
				{outliers}
			</g>
		</ChartFrame>
	}
}

#[test]
fn test_box_chart() {
	let html = html! {
		<BoxChart options={BoxChartOptions {
			color: "#51136e".to_owned(),
			label: "NH3N".to_owned(),
			value: BoxPlotOutput {
				p25: 3.25,
				p50: 5.5,
				p75: 7.75,
				whisker_low: 1.0,
				whisker_high: 9.0,
				outliers: vec![100.0],
			},
			title: Some("Box Plot of NH3N".to_owned()),
			y_axis_title: Some("NH3N".to_owned()),
		}} />
	}
	.render_to_string();
	assert_eq!(html.matches(r#"class="chart-outlier""#).count(), 1);
	assert_eq!(html.matches(r#"class="chart-whisker""#).count(), 4);
	assert!(html.contains("min: 1, p25: 3.25, median: 5.5, p75: 7.75, max: 9"));
	assert!(html.contains(r##"fill="#51136e""##));
}
