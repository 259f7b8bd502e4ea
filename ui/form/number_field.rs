use super::FieldLabel;
use html::{component, format_coordinate, html};

/// A numeric input. `min` and `step` are enforced by the browser only, so the server validates submitted values again.
#[component]
pub fn NumberField(label: String, name: String, min: Option<f64>, step: Option<f64>, value: String) {
	html! {
		<FieldLabel html_for={Some(name.clone())}>
			{label}
			<input
				class="form-number-field"
				id={name.clone()}
				min={min.map(format_coordinate)}
				name={name}
				step={step.map(format_coordinate)}
				type="number"
				value={value}
			/>
		</FieldLabel>
	}
}

#[test]
fn test_number_field() {
	let html = html! {
		<NumberField
			label={"NH3N (mg/L):".to_owned()}
			name={"nh3n".to_owned()}
			min={Some(0.0)}
			step={Some(0.1)}
			value={"0.0".to_owned()}
		/>
	}
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<label class="field-label" for="nh3n">NH3N (mg/L):<input class="form-number-field" id="nh3n" min="0" name="nh3n" step="0.1" type="number" value="0.0" /></label>"###);
}
