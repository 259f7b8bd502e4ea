use crate::common::CHART_CONFIG;
use html::{component, html, style};

#[component]
pub fn ChartTitle() {
	html! {
		<div class="chart-title">{children}</div>
	}
}

#[derive(Clone, Debug)]
pub struct LegendItem {
	pub color: String,
	pub title: String,
}

#[component]
pub fn ChartLegend(items: Vec<LegendItem>) {
	html! {
		<div class="chart-legend-wrapper">
			{items.into_iter().map(|item| html! {
				<ChartLegendItem
					color={item.color}
					title={item.title}
				/>
			}).collect::<Vec<_>>()}
		</div>
	}
}

#[component]
fn ChartLegendItem(color: String, title: String) {
	let style = style! {
		"background-color" => color,
	};
	html! {
		<div class="chart-legend-item">
			<div class="chart-legend-indicator" style={style}></div>
			<div class="chart-legend-title">{title}</div>
		</div>
	}
}

/// The title, optional legend, and svg canvas shared by every chart. `chart_type` is written to the `data-chart-type` attribute.
#[component]
pub fn ChartFrame(chart_type: &'static str, title: Option<String>, legend: Option<Vec<LegendItem>>) {
	let view_box = format!("0 0 {} {}", CHART_CONFIG.width, CHART_CONFIG.height);
	html! {
		<div class="chart-wrapper">
			{title.map(|title| html! { <ChartTitle>{title}</ChartTitle> })}
			{legend.map(|items| html! { <ChartLegend items={items} /> })}
			<svg
				class="chart"
				data-chart-type={chart_type}
				viewBox={view_box}
				xmlns="http://www.w3.org/2000/svg"
				role="img"
			>
				{children}
			</svg>
		</div>
	}
}
