use super::FieldLabel;
use html::{component, html};

#[derive(Clone, Debug)]
pub struct SelectFieldOption {
	pub text: String,
	pub value: String,
}

/// A select element. With `submit_on_change`, choosing an option submits the enclosing form.
#[component]
pub fn SelectField(
	label: String,
	name: String,
	options: Vec<SelectFieldOption>,
	submit_on_change: bool,
	value: Option<String>,
) {
	let on_change = if submit_on_change {
		Some("this.form.submit()")
	} else {
		None
	};
	html! {
		<FieldLabel html_for={Some(name.clone())}>
			{label}
			<select class="form-select" id={name.clone()} name={name} onchange={on_change}>
				{options.into_iter().map(|option| {
					let selected = value.as_ref() == Some(&option.value);
					html! {
						<option selected={selected} value={option.value}>
							{option.text}
						</option>
					}
				}).collect::<Vec<_>>()}
			</select>
		</FieldLabel>
	}
}

#[test]
fn test_select_field() {
	let options = vec!["NH3N", "BOD"]
		.into_iter()
		.map(|name| SelectFieldOption {
			text: name.to_owned(),
			value: name.to_owned(),
		})
		.collect();
	let html = html! {
		<SelectField
			label={"Select a parameter to visualize:".to_owned()}
			name={"column".to_owned()}
			options={options}
			submit_on_change={true}
			value={Some("BOD".to_owned())}
		/>
	}
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<label class="field-label" for="column">Select a parameter to visualize:<select class="form-select" id="column" name="column" onchange="this.form.submit()"><option value="NH3N">NH3N</option><option selected value="BOD">BOD</option></select></label>"###);
}
