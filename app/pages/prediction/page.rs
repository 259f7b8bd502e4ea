use crate::layouts::{
	app_layout::{AppLayout, NavItem},
	document::render_document,
};
use html::{component, html};
use klang_core::classifier::PollutionCategory;
use klang_ui as ui;

pub struct Props {
	pub fields: Vec<Field>,
	pub outcome: Option<Outcome>,
}

/// A number input, with the value submitted last or the default.
pub struct Field {
	pub label: String,
	pub name: String,
	pub value: String,
}

pub enum Outcome {
	Prediction(PollutionCategory),
	InvalidReading(String),
}

/// The readings are laid out two per column.
const FIELDS_PER_COLUMN: usize = 2;

pub fn render(props: Props) -> String {
	let Props { fields, outcome } = props;
	let mut columns: Vec<Vec<Field>> = Vec::new();
	for field in fields {
		match columns.last_mut() {
			Some(column) if column.len() < FIELDS_PER_COLUMN => column.push(field),
			_ => columns.push(vec![field]),
		}
	}
	let n_columns = columns.len();
	let outcome = outcome.map(|outcome| match outcome {
		Outcome::Prediction(category) => html! { <PredictionResult category={category} /> },
		Outcome::InvalidReading(message) => html! {
			<ui::Alert level={ui::Level::Danger} title={Some("Invalid reading".to_owned())}>
				{message}
			</ui::Alert>
		},
	});
	let html = html! {
		<AppLayout selected={NavItem::Prediction}>
			<ui::S1>
				<ui::H1>{"Water Pollution Prediction"}</ui::H1>
				<ui::P>{"Enter the values for the following parameters:"}</ui::P>
				<ui::Form action={"/prediction".to_owned()} id={None}>
					<ui::Grid columns={n_columns}>
						{columns.into_iter().map(|column| html! {
							<ui::S2>
								{column.into_iter().map(|field| html! {
									<ui::NumberField
										label={field.label}
										name={field.name}
										min={Some(0.0)}
										step={Some(0.1)}
										value={field.value}
									/>
								}).collect::<Vec<_>>()}
							</ui::S2>
						}).collect::<Vec<_>>()}
					</ui::Grid>
					<ui::Button name={Some("predict".to_owned())} value={Some("true".to_owned())}>
						{"Predict"}
					</ui::Button>
				</ui::Form>
				{outcome}
			</ui::S1>
		</AppLayout>
	};
	render_document(html)
}

#[component]
fn PredictionResult(category: PollutionCategory) {
	let class = format!("prediction-result {}", category.css_class());
	html! {
		<div class={class}>
			{"Prediction: "}
			<b>{category.label()}</b>
		</div>
	}
}

#[test]
fn test_prediction_result() {
	let html = html! {
		<PredictionResult category={PollutionCategory::SlightlyPolluted} />
	}
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="prediction-result slightly-polluted">Prediction: <b>Slightly Polluted</b></div>"###);
}
