use html::{component, html};

/// A form that submits with `GET` to `action`, so the submitted values end up in the query string.
#[component]
pub fn Form(action: String, id: Option<String>) {
	html! {
		<form id={id} action={action} class="form" method="get">
			{children}
		</form>
	}
}
