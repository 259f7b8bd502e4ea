use html::{component, html};

#[component]
pub fn Document(title: String) {
	html! {
		<html lang="en">
			<head>
				<meta charset="utf-8" />
				<meta content="width=device-width, initial-scale=1" name="viewport" />
				<title>{title}</title>
				<link href="/styles.css" rel="stylesheet" />
				<meta
					content="Analysis and prediction of water pollution in the Klang river"
					name="description"
				/>
			</head>
			<body>{children}</body>
		</html>
	}
}

/// Render a page to a complete html document, including the doctype.
pub fn render_document(page: html::Node) -> String {
	format!("<!doctype html>{}", page.render_to_string())
}
