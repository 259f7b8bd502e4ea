/*!
This crate renders html on the server. Trees of [`Node`](enum.Node.html)s are built with the `html!` macro, and reusable pieces of markup are written as functions annotated with `#[component]`.
*/

use derive_more::From;
use std::borrow::Cow;
use std::fmt::Write;

pub use html_macro::{component, html};

pub enum Node {
	RawText(RawTextNode),
	EscapedText(EscapedTextNode),
	Fragment(FragmentNode),
	Host(HostNode),
	Component(ComponentNode),
	Option(Option<Box<Node>>),
	Vec(Vec<Node>),
}

pub struct RawTextNode(pub Cow<'static, str>);

pub struct EscapedTextNode(pub Cow<'static, str>);

pub struct FragmentNode {
	pub children: Vec<Node>,
}

pub struct HostNode {
	pub name: &'static str,
	pub attributes: Vec<(AttributeKey, AttributeValue)>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

pub type AttributeKey = &'static str;

#[derive(From)]
pub enum AttributeValue {
	Bool(Option<bool>),
	String(Option<Cow<'static, str>>),
}

pub enum ComponentNode {
	Unrendered {
		component: Option<Box<dyn Component>>,
		children: Option<Vec<Node>>,
	},
	Rendered(Box<Node>),
}

/// A `Component` is produced by the `#[component]` attribute. Its fields are the arguments of the annotated function, and `render` runs the function body with the component's children in scope as `children`.
pub trait Component {
	fn render(self: Box<Self>, children: Vec<Node>) -> Node;
}

impl Node {
	pub fn render_to_string(mut self) -> String {
		self.render();
		self.to_string()
	}

	fn render(&mut self) {
		match self {
			Node::Fragment(node) => {
				for child in node.children.iter_mut() {
					child.render();
				}
			}
			Node::Host(node) => {
				for child in node.children.iter_mut() {
					child.render();
				}
			}
			Node::Component(node) => {
				if let ComponentNode::Unrendered {
					component,
					children,
				} = node
				{
					if let (Some(component), Some(children)) = (component.take(), children.take()) {
						let mut rendered = component.render(children);
						rendered.render();
						*node = ComponentNode::Rendered(Box::new(rendered));
					}
				}
			}
			Node::Vec(node) => {
				for child in node.iter_mut() {
					child.render();
				}
			}
			Node::Option(node) => {
				if let Some(node) = node {
					node.render();
				}
			}
			Node::RawText(_) | Node::EscapedText(_) => {}
		}
	}
}

impl std::fmt::Display for Node {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Node::RawText(node) => write!(f, "{}", node),
			Node::EscapedText(node) => write!(f, "{}", node),
			Node::Fragment(node) => write!(f, "{}", node),
			Node::Host(node) => write!(f, "{}", node),
			Node::Component(node) => write!(f, "{}", node),
			Node::Option(node) => {
				if let Some(node) = node {
					write!(f, "{}", node)?;
				}
				Ok(())
			}
			Node::Vec(nodes) => {
				for node in nodes {
					write!(f, "{}", node)?;
				}
				Ok(())
			}
		}
	}
}

impl std::fmt::Display for FragmentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for child in self.children.iter() {
			write!(f, "{}", child)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for HostNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "<{}", self.name)?;
		for (key, value) in self.attributes.iter() {
			match value {
				AttributeValue::Bool(value) => {
					if let Some(true) = value {
						write!(f, " {}", key)?;
					}
				}
				AttributeValue::String(value) => {
					if let Some(value) = value {
						write!(f, r#" {}=""#, key)?;
						write_escaped(f, value)?;
						write!(f, "\"")?;
					}
				}
			}
		}
		if self.self_closing {
			write!(f, " /")?;
		}
		write!(f, ">")?;
		if !self.self_closing {
			for child in self.children.iter() {
				write!(f, "{}", child)?;
			}
			write!(f, "</{}>", self.name)?;
		}
		Ok(())
	}
}

impl std::fmt::Display for ComponentNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ComponentNode::Rendered(rendered) => write!(f, "{}", rendered),
			// A component is rendered by `render_to_string` before it is displayed.
			ComponentNode::Unrendered { .. } => Err(std::fmt::Error),
		}
	}
}

impl std::fmt::Display for RawTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::fmt::Display for EscapedTextNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write_escaped(f, &self.0)
	}
}

fn write_escaped(f: &mut std::fmt::Formatter<'_>, value: &str) -> std::fmt::Result {
	for c in value.chars() {
		match c {
			'>' => write!(f, "&gt;")?,
			'<' => write!(f, "&lt;")?,
			'"' => write!(f, "&quot;")?,
			'&' => write!(f, "&amp;")?,
			'\'' => write!(f, "&apos;")?,
			c => f.write_char(c)?,
		};
	}
	Ok(())
}

impl From<bool> for AttributeValue {
	fn from(value: bool) -> AttributeValue {
		AttributeValue::Bool(Some(value))
	}
}

impl From<Option<String>> for AttributeValue {
	fn from(value: Option<String>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<Option<&'static str>> for AttributeValue {
	fn from(value: Option<&'static str>) -> AttributeValue {
		AttributeValue::String(value.map(|value| value.into()))
	}
}

impl From<String> for AttributeValue {
	fn from(value: String) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

impl From<&'static str> for AttributeValue {
	fn from(value: &'static str) -> AttributeValue {
		AttributeValue::String(Some(value.into()))
	}
}

/// Svg geometry attributes are numbers. They are written with at most two decimal places.
impl From<f64> for AttributeValue {
	fn from(value: f64) -> AttributeValue {
		AttributeValue::String(Some(format_coordinate(value).into()))
	}
}

impl From<usize> for AttributeValue {
	fn from(value: usize) -> AttributeValue {
		AttributeValue::String(Some(value.to_string().into()))
	}
}

pub fn format_coordinate(value: f64) -> String {
	let value = (value * 100.0).round() / 100.0;
	if value == 0.0 {
		// Avoid writing "-0".
		"0".to_owned()
	} else {
		value.to_string()
	}
}

impl From<RawTextNode> for Node {
	fn from(value: RawTextNode) -> Node {
		Node::RawText(value)
	}
}

impl From<EscapedTextNode> for Node {
	fn from(value: EscapedTextNode) -> Node {
		Node::EscapedText(value)
	}
}

impl From<FragmentNode> for Node {
	fn from(value: FragmentNode) -> Node {
		Node::Fragment(value)
	}
}

impl From<HostNode> for Node {
	fn from(value: HostNode) -> Node {
		Node::Host(value)
	}
}

impl From<ComponentNode> for Node {
	fn from(value: ComponentNode) -> Node {
		Node::Component(value)
	}
}

impl From<Vec<Node>> for Node {
	fn from(value: Vec<Node>) -> Node {
		Node::Vec(value)
	}
}

impl From<String> for Node {
	fn from(value: String) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl From<&'static str> for Node {
	fn from(value: &'static str) -> Node {
		Node::EscapedText(EscapedTextNode(value.into()))
	}
}

impl<T> From<Option<T>> for Node
where
	T: Into<Node>,
{
	fn from(value: Option<T>) -> Node {
		Node::Option(value.map(|value| Box::new(value.into())))
	}
}

/// This trait converts the values accepted by the `classes!` and `style!` macros into an optional string. `None` values are skipped.
pub trait IntoOptionString {
	fn into_option_string(self) -> Option<String>;
}

impl IntoOptionString for &str {
	fn into_option_string(self) -> Option<String> {
		Some(self.to_owned())
	}
}

impl IntoOptionString for String {
	fn into_option_string(self) -> Option<String> {
		Some(self)
	}
}

impl IntoOptionString for &String {
	fn into_option_string(self) -> Option<String> {
		Some(self.clone())
	}
}

impl IntoOptionString for Option<&str> {
	fn into_option_string(self) -> Option<String> {
		self.map(|value| value.to_owned())
	}
}

impl IntoOptionString for Option<String> {
	fn into_option_string(self) -> Option<String> {
		self
	}
}

#[macro_export]
macro_rules! raw {
	($t:expr) => {
		::html::RawTextNode($t.into())
	};
}

#[macro_export]
macro_rules! text {
	($t:expr) => {
		::html::EscapedTextNode($t.into())
	};
}

/// Join class names with spaces, skipping `None`s.
#[macro_export]
macro_rules! classes {
	($($class:expr),* $(,)?) => {{
		let mut classes: Vec<String> = Vec::new();
		$(
			if let Some(class) = $crate::IntoOptionString::into_option_string($class) {
				classes.push(class);
			}
		)*
		classes.join(" ")
	}};
}

/// Build an inline style attribute from `"property" => value` pairs, skipping `None` values.
#[macro_export]
macro_rules! style {
	($($property:expr => $value:expr),* $(,)?) => {{
		let mut style = String::new();
		$(
			if let Some(value) = $crate::IntoOptionString::into_option_string($value) {
				style.push_str($property);
				style.push_str(": ");
				style.push_str(&value);
				style.push(';');
			}
		)*
		style
	}};
}

#[test]
fn test_escaped_text() {
	let node: Node = "<b>Clean & \"safe\"</b>".into();
	assert_eq!(
		node.render_to_string(),
		"&lt;b&gt;Clean &amp; &quot;safe&quot;&lt;/b&gt;"
	);
}

#[test]
fn test_host_node_attributes() {
	let node = Node::Host(HostNode {
		name: "input",
		attributes: vec![
			("name", "nh3n".into()),
			("min", 0.0f64.into()),
			("step", 0.1f64.into()),
			("disabled", AttributeValue::Bool(Some(false))),
			("required", true.into()),
			("placeholder", AttributeValue::String(None)),
		],
		children: vec![],
		self_closing: true,
	});
	assert_eq!(
		node.render_to_string(),
		r#"<input name="nh3n" min="0" step="0.1" required />"#
	);
}

#[test]
fn test_classes_and_style() {
	let selected: Option<&str> = None;
	assert_eq!(classes!("side-nav-item", selected, "dark"), "side-nav-item dark");
	let color: Option<String> = Some("#76c7c0".to_owned());
	let width: Option<String> = None;
	assert_eq!(
		style! { "background-color" => color, "width" => width, "margin-top" => "80px" },
		"background-color: #76c7c0;margin-top: 80px;"
	);
}

#[test]
fn test_format_coordinate() {
	assert_eq!(format_coordinate(12.345), "12.35");
	assert_eq!(format_coordinate(-0.001), "0");
	assert_eq!(format_coordinate(300.0), "300");
}
