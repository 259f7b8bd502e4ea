use html::{component, html, style};

#[component]
pub fn S1() {
	html! {
		<div class="s1">{children}</div>
	}
}

#[component]
pub fn S2() {
	html! {
		<div class="s2">{children}</div>
	}
}

#[component]
pub fn H1() {
	html! {
		<h1 class="h1">{children}</h1>
	}
}

#[component]
pub fn H2() {
	html! {
		<h2 class="h2">{children}</h2>
	}
}

#[component]
pub fn H3() {
	html! {
		<h3 class="h3">{children}</h3>
	}
}

#[component]
pub fn P() {
	html! {
		<p class="p">{children}</p>
	}
}

/// Lay out the children in `columns` equal columns.
#[component]
pub fn Grid(columns: usize) {
	let style = style! {
		"grid-template-columns" => format!("repeat({}, minmax(0, 1fr))", columns.max(1)),
	};
	html! {
		<div class="grid" style={style}>{children}</div>
	}
}

#[test]
fn test_grid() {
	let html = html! {
		<Grid columns={3}>
			<H3>{"NH3N"}</H3>
		</Grid>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<div class="grid" style="grid-template-columns: repeat(3, minmax(0, 1fr));"><h3 class="h3">NH3N</h3></div>"#
	);
}
