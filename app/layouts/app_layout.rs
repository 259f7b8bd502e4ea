use super::document::Document;
use html::{component, html};
use klang_ui as ui;

const PAGE_TITLE: &str = "Water Pollution Dashboard";
const DASHBOARD_TITLE: &str = "💧 WATER POLLUTION OF KLANG RIVER DASHBOARD 🌊";
const DASHBOARD_SUBTITLE: &str = "Analysis and Prediction";

/// The pages listed in the side navigation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavItem {
	Home,
	Prediction,
}

impl NavItem {
	const ALL: [NavItem; 2] = [NavItem::Home, NavItem::Prediction];

	fn href(self) -> &'static str {
		match self {
			NavItem::Home => "/",
			NavItem::Prediction => "/prediction",
		}
	}

	fn title(self) -> &'static str {
		match self {
			NavItem::Home => "Home",
			NavItem::Prediction => "Water Pollution Prediction",
		}
	}
}

#[component]
pub fn AppLayout(selected: NavItem) {
	let nav_items = NavItem::ALL
		.iter()
		.map(|item| {
			html! {
				<ui::SideNavItem href={item.href().to_owned()} selected={*item == selected}>
					{item.title()}
				</ui::SideNavItem>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<Document title={PAGE_TITLE.to_owned()}>
			<div class="app-layout">
				<aside class="app-layout-sidebar">
					<ui::SideNav>
						<ui::SideNavTitle>{"Navigation"}</ui::SideNavTitle>
						<ui::SideNavRadioGroup label="Go to">
							{nav_items}
						</ui::SideNavRadioGroup>
					</ui::SideNav>
				</aside>
				<main class="app-layout-main">
					<div class="title">{DASHBOARD_TITLE}</div>
					<div class="subtitle">{DASHBOARD_SUBTITLE}</div>
					{children}
				</main>
			</div>
		</Document>
	}
}
