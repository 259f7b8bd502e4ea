use html::{classes, component, html};

#[component]
pub fn Table() {
	html! {
		<div class="table-wrapper">
			<table class="table">{children}</table>
		</div>
	}
}

#[component]
pub fn TableHeader() {
	html! {
		<thead class="table-header">{children}</thead>
	}
}

#[component]
pub fn TableBody() {
	html! {
		<tbody>{children}</tbody>
	}
}

#[component]
pub fn TableRow() {
	html! {
		<tr>{children}</tr>
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextAlign {
	Left,
	Right,
}

fn text_align_class(text_align: TextAlign) -> &'static str {
	match text_align {
		TextAlign::Left => "table-align-left",
		TextAlign::Right => "table-align-right",
	}
}

/// `title` is shown by the browser as a tooltip.
#[component]
pub fn TableHeaderCell(text_align: TextAlign, title: Option<String>) {
	html! {
		<th class={classes!("table-header-cell", text_align_class(text_align))} title={title}>
			{children}
		</th>
	}
}

#[component]
pub fn TableCell(text_align: TextAlign, title: Option<String>) {
	html! {
		<td class={classes!("table-cell", text_align_class(text_align))} title={title}>
			{children}
		</td>
	}
}

#[test]
fn test_table() {
	let html = html! {
		<Table>
			<TableHeader>
				<TableRow>
					<TableHeaderCell text_align={TextAlign::Left} title={None}>{""}</TableHeaderCell>
					<TableHeaderCell
						text_align={TextAlign::Right}
						title={Some("Water quality class".to_owned())}
					>
						{"WQC"}
					</TableHeaderCell>
				</TableRow>
			</TableHeader>
			<TableBody>
				<TableRow>
					<TableHeaderCell text_align={TextAlign::Left} title={None}>{"0"}</TableHeaderCell>
					<TableCell text_align={TextAlign::Right} title={Some("Polluted".to_owned())}>
						{"2"}
					</TableCell>
				</TableRow>
			</TableBody>
		</Table>
	}
	.render_to_string();
	insta::assert_snapshot!(html, @r###"<div class="table-wrapper"><table class="table"><thead class="table-header"><tr><th class="table-header-cell table-align-left"></th><th class="table-header-cell table-align-right" title="Water quality class">WQC</th></tr></thead><tbody><tr><th class="table-header-cell table-align-left">0</th><td class="table-cell table-align-right" title="Polluted">2</td></tr></tbody></table></div>"###);
}
