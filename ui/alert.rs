use html::{classes, component, html};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Level {
	Info,
	Danger,
}

#[component]
pub fn Alert(level: Level, title: Option<String>) {
	let level_class = match level {
		Level::Info => "alert-level-info",
		Level::Danger => "alert-level-danger",
	};
	html! {
		<div class={classes!("alert-wrapper", level_class)} role="alert">
			{title.map(|title| html! {
				<div class="alert-title">{title}</div>
			})}
			{children}
		</div>
	}
}

#[test]
fn test_alert() {
	let html = html! {
		<Alert level={Level::Danger} title={Some("Invalid reading".to_owned())}>
			{"BOD (mg/L) must not be negative"}
		</Alert>
	}
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="alert-wrapper alert-level-danger" role="alert"><div class="alert-title">Invalid reading</div>BOD (mg/L) must not be negative</div>"###);
}
