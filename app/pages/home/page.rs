use crate::layouts::{
	app_layout::{AppLayout, NavItem},
	document::render_document,
};
use html::{component, html};
use klang_charts::{
	BarChart, BarChartOptions, BoxChart, BoxChartOptions, HistogramChart, HistogramChartOptions,
	LineChart, LineChartOptions, PieChart, PieChartOptions, ScatterChart, ScatterChartOptions,
};
use klang_ui as ui;

pub struct Props {
	pub column: String,
	pub y_column: String,
	pub column_options: Vec<ui::SelectFieldOption>,
	pub preview: DataPreview,
	pub line_chart: LineChartOptions,
	pub bar_chart: BarChartOptions,
	pub histogram: HistogramChartOptions,
	pub density: LineChartOptions,
	pub scatter: ScatterChartOptions,
	pub box_plot: Option<BoxChartOptions>,
	pub pie_chart: PieChartOptions,
}

/// The first rows of the sample table, formatted for display.
pub struct DataPreview {
	pub columns: Vec<DataPreviewColumn>,
	pub rows: Vec<Vec<DataPreviewCell>>,
}

pub struct DataPreviewColumn {
	pub name: String,
	pub description: String,
}

pub struct DataPreviewCell {
	pub text: String,
	pub title: Option<String>,
}

pub fn render(props: Props) -> String {
	let Props {
		column,
		y_column,
		column_options,
		preview,
		line_chart,
		bar_chart,
		histogram,
		density,
		scatter,
		box_plot,
		pie_chart,
	} = props;
	let y_column_options = column_options.clone();
	let density_note = if density.series.is_empty() {
		Some(html! {
			<ui::Alert level={ui::Level::Info} title={None}>
				{format!("{} has too few distinct values to estimate its density.", column)}
			</ui::Alert>
		})
	} else {
		None
	};
	let box_plot = match box_plot {
		Some(options) => html! { <BoxChart options={options} /> },
		None => html! {
			<ui::Alert level={ui::Level::Info} title={None}>
				{format!("{} has no values to summarize.", column)}
			</ui::Alert>
		},
	};
	let html = html! {
		<AppLayout selected={NavItem::Home}>
			<div class="eda-title">{"Exploratory Data Analysis"}</div>
			<ui::S1>
				<ui::H2>{"Klang River Data"}</ui::H2>
				<DataPreviewTable preview={preview} />
				<ui::H2>{"Data Distribution"}</ui::H2>
				<ui::Grid columns={2}>
					<LineChart options={line_chart} />
					<BarChart options={bar_chart} />
				</ui::Grid>
				<ui::Form action={"/".to_owned()} id={Some("visualization".to_owned())}>
					<ui::H2>{"Select a Parameter for Visualization"}</ui::H2>
					<ui::SelectField
						label="Select a parameter to visualize:"
						name="column"
						options={column_options}
						submit_on_change={true}
						value={Some(column)}
					/>
					<ui::Grid columns={2}>
						<ui::S2>
							<ui::H3>{"Histogram"}</ui::H3>
							<HistogramChart options={histogram} />
						</ui::S2>
						<ui::S2>
							<ui::H3>{"Skewness"}</ui::H3>
							<LineChart options={density} />
							{density_note}
						</ui::S2>
					</ui::Grid>
					<ui::H2>{"Scatter Plot and Box Plot"}</ui::H2>
					<ui::Grid columns={2}>
						<ui::S2>
							<ui::H3>{"Scatter Plot"}</ui::H3>
							<ui::SelectField
								label="Select Y-axis parameter:"
								name="y"
								options={y_column_options}
								submit_on_change={true}
								value={Some(y_column)}
							/>
							<ScatterChart options={scatter} />
						</ui::S2>
						<ui::S2>
							<ui::H3>{"Box Plot"}</ui::H3>
							<div class="box-plot-spacer"></div>
							{box_plot}
						</ui::S2>
					</ui::Grid>
					<noscript>
						<ui::Button name={None} value={None}>
							{"Update"}
						</ui::Button>
					</noscript>
				</ui::Form>
				<ui::H2>{"Pollution Distribution of Klang River"}</ui::H2>
				<ui::Grid columns={2}>
					<PieChart options={pie_chart} />
				</ui::Grid>
			</ui::S1>
		</AppLayout>
	};
	render_document(html)
}

#[component]
fn DataPreviewTable(preview: DataPreview) {
	let DataPreview { columns, rows } = preview;
	html! {
		<ui::Table>
			<ui::TableHeader>
				<ui::TableRow>
					<ui::TableHeaderCell text_align={ui::TextAlign::Left} title={None}>
						{""}
					</ui::TableHeaderCell>
					{columns.into_iter().map(|column| html! {
						<ui::TableHeaderCell
							text_align={ui::TextAlign::Right}
							title={Some(column.description)}
						>
							{column.name}
						</ui::TableHeaderCell>
					}).collect::<Vec<_>>()}
				</ui::TableRow>
			</ui::TableHeader>
			<ui::TableBody>
				{rows.into_iter().enumerate().map(|(index, row)| html! {
					<ui::TableRow>
						<ui::TableHeaderCell text_align={ui::TextAlign::Left} title={None}>
							{index.to_string()}
						</ui::TableHeaderCell>
						{row.into_iter().map(|cell| html! {
							<ui::TableCell text_align={ui::TextAlign::Right} title={cell.title}>
								{cell.text}
							</ui::TableCell>
						}).collect::<Vec<_>>()}
					</ui::TableRow>
				}).collect::<Vec<_>>()}
			</ui::TableBody>
		</ui::Table>
	}
}
