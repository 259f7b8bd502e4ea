use html::{component, html};

/// A submit button. When `name` is set, the button submits `name=value` along with the form, which lets a page tell a submission apart from a first visit.
#[component]
pub fn Button(name: Option<String>, value: Option<String>) {
	html! {
		<button class="button" name={name} type="submit" value={value}>
			{children}
		</button>
	}
}

#[test]
fn test_button() {
	let html = html! {
		<Button name={Some("predict".to_owned())} value={Some("true".to_owned())}>
			{"Predict"}
		</Button>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<button class="button" name="predict" type="submit" value="true">Predict</button>"#
	);
}
