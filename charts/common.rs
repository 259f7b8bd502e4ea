use html::{html, Node};
use klang_deps::num_traits::ToPrimitive;

/// The size and spacing of every chart, in svg user units.
pub struct ChartConfig {
	pub width: f64,
	pub height: f64,
	pub top_padding: f64,
	pub bottom_padding: f64,
	pub left_padding: f64,
	pub right_padding: f64,
	pub font_size: f64,
	pub label_padding: f64,
	pub y_axis_labels_width: f64,
	pub max_grid_lines: usize,
	pub max_x_axis_labels: usize,
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
	width: 640.0,
	height: 400.0,
	top_padding: 16.0,
	bottom_padding: 8.0,
	left_padding: 8.0,
	right_padding: 16.0,
	font_size: 14.0,
	label_padding: 8.0,
	y_axis_labels_width: 48.0,
	max_grid_lines: 6,
	max_x_axis_labels: 10,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartBox {
	pub x: f64,
	pub y: f64,
	pub w: f64,
	pub h: f64,
}

impl ChartBox {
	pub fn bottom(&self) -> f64 {
		self.y + self.h
	}

	pub fn right(&self) -> f64 {
		self.x + self.w
	}
}

/// Compute the box the data is drawn in, leaving room for the axis labels and titles.
pub fn compute_chart_box() -> ChartBox {
	let ChartConfig {
		width,
		height,
		top_padding,
		bottom_padding,
		left_padding,
		right_padding,
		font_size,
		label_padding,
		y_axis_labels_width,
		..
	} = CHART_CONFIG;
	let x = left_padding + font_size + label_padding + y_axis_labels_width + label_padding;
	let bottom = height - bottom_padding - font_size - label_padding - font_size - label_padding;
	ChartBox {
		x,
		y: top_padding,
		w: width - x - right_padding,
		h: bottom - top_padding,
	}
}

/// A closed interval of data values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
	pub min: f64,
	pub max: f64,
}

impl Range {
	/// The smallest range containing every finite value, or `None` if there are none. A range of a single value is widened by 0.5 on both sides.
	pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Range> {
		let (min, max) = values
			.into_iter()
			.filter(|value| value.is_finite())
			.fold(None, |range: Option<(f64, f64)>, value| match range {
				None => Some((value, value)),
				Some((min, max)) => Some((min.min(value), max.max(value))),
			})?;
		if min == max {
			Some(Range {
				min: min - 0.5,
				max: max + 0.5,
			})
		} else {
			Some(Range { min, max })
		}
	}

	pub fn including(self, value: f64) -> Range {
		Range {
			min: self.min.min(value),
			max: self.max.max(value),
		}
	}
}

/// The interval between grid lines is `k * 10 ^ p`, where k is 1, 2 or 5.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLineInterval {
	pub k: f64,
	pub p: i32,
}

impl GridLineInterval {
	pub fn value(&self) -> f64 {
		self.k * 10f64.powi(self.p)
	}
}

/// Choose the smallest interval of the form `k * 10 ^ p` that spans `range` with at most `max_grid_lines` intervals.
pub fn compute_grid_line_interval(range: Range, max_grid_lines: usize) -> GridLineInterval {
	let span = range.max - range.min;
	let max_grid_lines = max_grid_lines.max(1).to_f64().unwrap_or(1.0);
	if !span.is_finite() || span <= 0.0 {
		return GridLineInterval { k: 1.0, p: 0 };
	}
	let ideal = span / max_grid_lines;
	let p = ideal.log10().floor().to_i32().unwrap_or(0);
	let base = 10f64.powi(p);
	for k in [1.0, 2.0, 5.0].iter() {
		// Allow for rounding in `ideal`.
		if k * base >= ideal * (1.0 - 1e-9) {
			return GridLineInterval { k: *k, p };
		}
	}
	GridLineInterval { k: 1.0, p: p + 1 }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLineInfo {
	pub start: f64,
	pub interval: f64,
	pub num_grid_lines: usize,
}

impl GridLineInfo {
	pub fn values(&self) -> impl Iterator<Item = f64> {
		let GridLineInfo {
			start,
			interval,
			num_grid_lines,
		} = *self;
		(0..num_grid_lines).map(move |index| start + interval * index.to_f64().unwrap_or(0.0))
	}
}

/// Compute the grid lines at multiples of `interval` that fall within `range`.
pub fn compute_grid_line_info(range: Range, interval: GridLineInterval) -> GridLineInfo {
	let interval = interval.value();
	let start = (range.min / interval - 1e-9).ceil() * interval;
	let num_grid_lines = ((range.max - start) / interval + 1e-9)
		.floor()
		.to_usize()
		.map(|n| n + 1)
		.unwrap_or(0);
	GridLineInfo {
		start,
		interval,
		num_grid_lines,
	}
}

/// Widen `range` outward to the nearest grid lines and return it together with its grid lines.
pub fn nice_range(range: Range, max_grid_lines: usize) -> (Range, GridLineInfo) {
	let interval = compute_grid_line_interval(range, max_grid_lines);
	let value = interval.value();
	let range = Range {
		min: (range.min / value + 1e-9).floor() * value,
		max: (range.max / value - 1e-9).ceil() * value,
	};
	(range, compute_grid_line_info(range, interval))
}

/// Scale maps data values in `domain` linearly onto pixels from `start_pixels` to `end_pixels`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
	pub domain: Range,
	pub start_pixels: f64,
	pub end_pixels: f64,
}

impl Scale {
	pub fn x(domain: Range, chart_box: ChartBox) -> Scale {
		Scale {
			domain,
			start_pixels: chart_box.x,
			end_pixels: chart_box.right(),
		}
	}

	/// Svg y coordinates grow downward, so the domain minimum maps to the bottom of the box.
	pub fn y(domain: Range, chart_box: ChartBox) -> Scale {
		Scale {
			domain,
			start_pixels: chart_box.bottom(),
			end_pixels: chart_box.y,
		}
	}

	pub fn apply(&self, value: f64) -> f64 {
		let span = self.domain.max - self.domain.min;
		let fraction = if span == 0.0 {
			0.5
		} else {
			(value - self.domain.min) / span
		};
		self.start_pixels + fraction * (self.end_pixels - self.start_pixels)
	}
}

/// Format a number for an axis label, without trailing zeros.
pub fn format_number(value: f64) -> String {
	if !value.is_finite() {
		return value.to_string();
	}
	let rounded = (value * 1e6).round() / 1e6;
	if rounded == 0.0 {
		"0".to_owned()
	} else {
		rounded.to_string()
	}
}

/// Format a fraction as a percentage with one decimal place, as in `0.2 -> "20.0%"`.
pub fn format_percent(fraction: f64) -> String {
	format!("{:.1}%", fraction * 100.0)
}

/// The labels under the x axis. Numeric axes label their grid lines. Categorical axes label the given pixel positions.
pub enum XAxisLabels {
	Numeric {
		scale: Scale,
		grid_line_info: GridLineInfo,
	},
	Categorical(Vec<(f64, String)>),
}

pub struct AxesOptions {
	pub chart_box: ChartBox,
	pub x_axis_labels: XAxisLabels,
	pub y_scale: Scale,
	pub y_grid_line_info: GridLineInfo,
	pub x_axis_title: Option<String>,
	pub y_axis_title: Option<String>,
}

/// Draw the horizontal grid lines, the y axis labels, the x axis with its labels, and the axis titles.
pub fn draw_axes(options: AxesOptions) -> Node {
	let AxesOptions {
		chart_box,
		x_axis_labels,
		y_scale,
		y_grid_line_info,
		x_axis_title,
		y_axis_title,
	} = options;
	let ChartConfig {
		height,
		bottom_padding,
		left_padding,
		font_size,
		label_padding,
		max_x_axis_labels,
		..
	} = CHART_CONFIG;
	let y_grid_lines = y_grid_line_info
		.values()
		.map(|value| {
			let y = y_scale.apply(value);
			html! {
				<g>
					<line
						class="chart-grid-line"
						x1={chart_box.x}
						y1={y}
						x2={chart_box.right()}
						y2={y}
					/>
					<text
						class="chart-label"
						x={chart_box.x - label_padding}
						y={y}
						text-anchor="end"
						dominant-baseline="middle"
					>
						{format_number(value)}
					</text>
				</g>
			}
		})
		.collect::<Vec<_>>();
	let x_labels: Vec<(f64, String)> = match x_axis_labels {
		XAxisLabels::Numeric {
			scale,
			grid_line_info,
		} => grid_line_info
			.values()
			.map(|value| (scale.apply(value), format_number(value)))
			.collect(),
		XAxisLabels::Categorical(labels) => {
			let stride = (labels.len() + max_x_axis_labels - 1) / max_x_axis_labels.max(1);
			labels.into_iter().step_by(stride.max(1)).collect()
		}
	};
	let x_labels_y = chart_box.bottom() + label_padding + font_size / 2.0;
	let x_labels = x_labels
		.into_iter()
		.map(|(x, label)| {
			html! {
				<text
					class="chart-label"
					x={x}
					y={x_labels_y}
					text-anchor="middle"
					dominant-baseline="middle"
				>
					{label}
				</text>
			}
		})
		.collect::<Vec<_>>();
	let x_axis_title = x_axis_title.map(|title| {
		html! {
			<text
				class="chart-axis-title"
				x={chart_box.x + chart_box.w / 2.0}
				y={height - bottom_padding - font_size / 2.0}
				text-anchor="middle"
				dominant-baseline="middle"
			>
				{title}
			</text>
		}
	});
	let y_axis_title = y_axis_title.map(|title| {
		let x = left_padding + font_size / 2.0;
		let y = chart_box.y + chart_box.h / 2.0;
		html! {
			<text
				class="chart-axis-title"
				x={x}
				y={y}
				transform={format!("rotate(-90 {} {})", html::format_coordinate(x), html::format_coordinate(y))}
				text-anchor="middle"
				dominant-baseline="middle"
			>
				{title}
			</text>
		}
	});
	html! {
		<g class="chart-axes">
			{y_grid_lines}
			<line
				class="chart-axis"
				x1={chart_box.x}
				y1={chart_box.bottom()}
				x2={chart_box.right()}
				y2={chart_box.bottom()}
			/>
			<line
				class="chart-axis"
				x1={chart_box.x}
				y1={chart_box.y}
				x2={chart_box.x}
				y2={chart_box.bottom()}
			/>
			{x_labels}
			{x_axis_title}
			{y_axis_title}
		</g>
	}
}

#[test]
fn test_compute_grid_line_interval() {
	let interval = compute_grid_line_interval(Range { min: 0.0, max: 10.0 }, 5);
	assert_eq!(interval, GridLineInterval { k: 2.0, p: 0 });
	let interval = compute_grid_line_interval(Range { min: 0.0, max: 4999.0 }, 5);
	assert_eq!(interval, GridLineInterval { k: 1.0, p: 3 });
	let interval = compute_grid_line_interval(Range { min: 6.5, max: 8.5 }, 6);
	assert_eq!(interval, GridLineInterval { k: 5.0, p: -1 });
	let interval = compute_grid_line_interval(Range { min: 1.0, max: 1.0 }, 6);
	assert_eq!(interval, GridLineInterval { k: 1.0, p: 0 });
}

#[test]
fn test_compute_grid_line_info() {
	let info = compute_grid_line_info(
		Range { min: 0.0, max: 10.0 },
		GridLineInterval { k: 2.0, p: 0 },
	);
	assert_eq!(
		info.values().collect::<Vec<_>>(),
		vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
	);
	let info = compute_grid_line_info(
		Range { min: -2.4, max: 4.4 },
		GridLineInterval { k: 2.0, p: 0 },
	);
	assert_eq!(info.values().collect::<Vec<_>>(), vec![-2.0, 0.0, 2.0, 4.0]);
}

#[test]
fn test_nice_range() {
	let (range, info) = nice_range(Range { min: 0.0, max: 17.0 }, 6);
	assert_eq!(range, Range { min: 0.0, max: 20.0 });
	assert_eq!(info.num_grid_lines, 5);
	assert_eq!(info.interval, 5.0);
}

#[test]
fn test_scale() {
	let chart_box = ChartBox {
		x: 10.0,
		y: 20.0,
		w: 100.0,
		h: 50.0,
	};
	let domain = Range { min: 0.0, max: 10.0 };
	assert_eq!(Scale::x(domain, chart_box).apply(5.0), 60.0);
	assert_eq!(Scale::y(domain, chart_box).apply(0.0), 70.0);
	assert_eq!(Scale::y(domain, chart_box).apply(10.0), 20.0);
}

#[test]
fn test_range_from_values() {
	assert_eq!(
		Range::from_values(vec![3.0, f64::NAN, -1.0, 2.0]),
		Some(Range { min: -1.0, max: 3.0 })
	);
	assert_eq!(
		Range::from_values(vec![2.0, 2.0]),
		Some(Range { min: 1.5, max: 2.5 })
	);
	assert_eq!(Range::from_values(vec![]), None);
}

#[test]
fn test_format_percent() {
	assert_eq!(format_percent(0.2), "20.0%");
	assert_eq!(format_percent(0.424292), "42.4%");
	assert_eq!(format_percent(1.0), "100.0%");
	assert_eq!(format_percent(1.0 / 3.0), "33.3%");
}

#[test]
fn test_format_number() {
	assert_eq!(format_number(0.30000000000000004), "0.3");
	assert_eq!(format_number(5000.0), "5000");
	assert_eq!(format_number(-0.0), "0");
	assert_eq!(format_number(-2.5), "-2.5");
}
