use html::{classes, component, html};

#[component]
pub fn SideNav() {
	html! {
		<nav class="side-nav">{children}</nav>
	}
}

#[component]
pub fn SideNavTitle() {
	html! {
		<div class="side-nav-title">{children}</div>
	}
}

/// A group of links that behaves like a radio group: exactly one item is selected.
#[component]
pub fn SideNavRadioGroup(label: String) {
	html! {
		<div class="side-nav-radio-group" role="radiogroup">
			<div class="side-nav-radio-group-label">{label}</div>
			{children}
		</div>
	}
}

#[component]
pub fn SideNavItem(href: String, selected: bool) {
	let selected_class = if selected {
		Some("side-nav-item-selected")
	} else {
		None
	};
	let aria_checked = if selected { "true" } else { "false" };
	html! {
		<a
			class={classes!("side-nav-item", selected_class)}
			href={href}
			role="radio"
			aria-checked={aria_checked}
		>
			<span class="side-nav-radio"></span>
			{children}
		</a>
	}
}

#[test]
fn test_side_nav_item() {
	let html = html! {
		<SideNavItem href={"/".to_owned()} selected={true}>{"Home"}</SideNavItem>
	}
	.render_to_string();
	assert_eq!(
		html,
		r#"<a class="side-nav-item side-nav-item-selected" href="/" role="radio" aria-checked="true"><span class="side-nav-radio"></span>Home</a>"#
	);
}
