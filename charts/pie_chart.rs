use crate::common::{format_percent, CHART_CONFIG};
use crate::components::ChartFrame;
use html::{component, format_coordinate, html, Node};

pub struct PieChartOptions {
	pub slices: Vec<PieChartSlice>,
	/// The angle in degrees, counterclockwise from the positive x axis, at which the first slice starts.
	pub start_angle: f64,
	pub title: Option<String>,
}

#[derive(Clone, Debug)]
pub struct PieChartSlice {
	pub color: String,
	pub label: String,
	pub value: f64,
}

const RADIUS: f64 = 150.0;
const PERCENT_LABEL_RADIUS_RATIO: f64 = 0.6;
const LABEL_RADIUS_RATIO: f64 = 1.1;

/// Slices are laid out counterclockwise. Each slice shows its share of the total as a percentage with one decimal place.
#[component]
pub fn PieChart(options: PieChartOptions) {
	let PieChartOptions {
		slices,
		start_angle,
		title,
	} = options;
	let center = (CHART_CONFIG.width / 2.0, CHART_CONFIG.height / 2.0);
	let total: f64 = slices
		.iter()
		.map(|slice| slice.value)
		.filter(|value| value.is_finite() && *value > 0.0)
		.sum();
	let mut angle = start_angle;
	let mut nodes: Vec<Node> = Vec::new();
	for slice in slices.into_iter() {
		if total <= 0.0 || !slice.value.is_finite() || slice.value <= 0.0 {
			continue;
		}
		let fraction = slice.value / total;
		let end_angle = angle + 360.0 * fraction;
		let middle_angle = (angle + end_angle) / 2.0;
		let shape = if fraction >= 1.0 {
			html! {
				<circle
					class="chart-slice"
					cx={center.0}
					cy={center.1}
					r={RADIUS}
					fill={slice.color.clone()}
					stroke="white"
				/>
			}
		} else {
			html! {
				<path
					class="chart-slice"
					d={slice_path(center, RADIUS, angle, end_angle)}
					fill={slice.color.clone()}
					stroke="white"
				/>
			}
		};
		let (percent_x, percent_y) =
			polar_to_cartesian(center, RADIUS * PERCENT_LABEL_RADIUS_RATIO, middle_angle);
		let (label_x, label_y) = polar_to_cartesian(center, RADIUS * LABEL_RADIUS_RATIO, middle_angle);
		let label_anchor = if label_x >= center.0 { "start" } else { "end" };
		nodes.push(html! {
			<g class="chart-slice-group">
				{shape}
				<text
					class="chart-slice-percent"
					x={percent_x}
					y={percent_y}
					text-anchor="middle"
					dominant-baseline="middle"
				>
					{format_percent(fraction)}
				</text>
				<text
					class="chart-slice-label"
					x={label_x}
					y={label_y}
					text-anchor={label_anchor}
					dominant-baseline="middle"
				>
					{slice.label}
				</text>
			</g>
		});
		angle = end_angle;
	}
	html! {
		<ChartFrame chart_type="pie" title={title} legend={None}>
			{nodes}
		</ChartFrame>
	}
}

/// Convert an angle in degrees, counterclockwise from the positive x axis, to svg coordinates, whose y axis points down.
fn polar_to_cartesian(center: (f64, f64), radius: f64, angle: f64) -> (f64, f64) {
	let radians = angle.to_radians();
	(
		center.0 + radius * radians.cos(),
		center.1 - radius * radians.sin(),
	)
}

/// Build the svg path data of the slice from `start_angle` to `end_angle`, drawn counterclockwise.
fn slice_path(center: (f64, f64), radius: f64, start_angle: f64, end_angle: f64) -> String {
	let (start_x, start_y) = polar_to_cartesian(center, radius, start_angle);
	let (end_x, end_y) = polar_to_cartesian(center, radius, end_angle);
	let large_arc = if end_angle - start_angle > 180.0 { 1 } else { 0 };
	format!(
		"M{},{} L{},{} A{},{} 0 {} 0 {},{} Z",
		format_coordinate(center.0),
		format_coordinate(center.1),
		format_coordinate(start_x),
		format_coordinate(start_y),
		format_coordinate(radius),
		format_coordinate(radius),
		large_arc,
		format_coordinate(end_x),
		format_coordinate(end_y),
	)
}

#[test]
fn test_slice_path() {
	assert_eq!(
		slice_path((320.0, 200.0), 150.0, 90.0, 162.0),
		"M320,200 L320,50 A150,150 0 0 0 177.34,153.65 Z"
	);
	assert!(slice_path((320.0, 200.0), 150.0, 90.0, 300.0).contains(" 0 1 0 "));
}

#[test]
fn test_pie_chart() {
	let slice = |label: &str, color: &str, value| PieChartSlice {
		color: color.to_owned(),
		label: label.to_owned(),
		value,
	};
	let html = html! {
		<PieChart options={PieChartOptions {
			slices: vec![
				slice("Clean", "#76c7c0", 20.0),
				slice("Slightly Polluted", "#ffcc00", 50.0),
				slice("Polluted", "#ff6f61", 30.0),
			],
			start_angle: 90.0,
			title: Some("Pollution Rate of Klang River".to_owned()),
		}} />
	}
	.render_to_string();
	assert_eq!(html.matches("<path").count(), 3);
	assert!(html.contains(">20.0%</text>"));
	assert!(html.contains(">50.0%</text>"));
	assert!(html.contains(">30.0%</text>"));
	assert!(html.contains(r#"d="M320,200 L320,50 A150,150 0 0 0 177.34,153.65 Z""#));
	assert!(html.contains(">Slightly Polluted</text>"));
}
