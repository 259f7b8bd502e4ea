use html::{component, html};

#[component]
fn Banner(class: String, label: Option<String>) {
	html! {
		<div class={class}>
			{"Prediction: "}
			<b>{label}</b>
			{children}
		</div>
	}
}

#[component]
fn Chart(width: f64, height: f64) {
	html! {
		<svg viewBox={format!("0 0 {} {}", width, height)} data-chart-type="histogram">
			<rect x={0.0} y={0.0} width={width} height={height} stroke-width={1.5} />
		</svg>
	}
}

#[test]
fn test_component() {
	let html = html!(<Banner class={"prediction-result clean".to_owned()} label={Some("Clean".to_owned())} />)
		.render_to_string();
	assert_eq!(
		html,
		r#"<div class="prediction-result clean">Prediction: <b>Clean</b></div>"#
	);
}

#[test]
fn test_children_and_fragments() {
	let items = vec!["NH3N", "BOD"];
	let html = html! {
		<Banner class={"polluted".to_owned()} label={None}>
			<>
				{items.into_iter().map(|item| html! { <span>{item}</span> }).collect::<Vec<_>>()}
			</>
		</Banner>
	}
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="polluted">Prediction: <b></b><span>NH3N</span><span>BOD</span></div>"###);
}

#[test]
fn test_dashed_attributes() {
	let html = html!(<Chart width={300.0} height={200.0} />).render_to_string();
	assert_eq!(
		html,
		r#"<svg viewBox="0 0 300 200" data-chart-type="histogram"><rect x="0" y="0" width="300" height="200" stroke-width="1.5" /></svg>"#
	);
}
