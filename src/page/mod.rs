//! In-memory page model the renderer writes into before it is serialized.

mod layout;

pub use layout::Page;

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::cards::{html_escape, Card};

pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const MOBILE_MENU_ID: &str = "mobileMenu";

/// The handful of element properties the navigation controller touches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
	attributes: BTreeMap<String, String>,
	classes: BTreeSet<String>,
	display: Option<String>,
}

impl Element {
	pub fn new() -> Self {
		Element::default()
	}

	pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
		self.set_attribute(name, value);
		self
	}

	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}

	pub fn set_attribute(&mut self, name: &str, value: &str) {
		self.attributes.insert(name.to_owned(), value.to_owned());
	}

	pub fn has_class(&self, class: &str) -> bool {
		self.classes.contains(class)
	}

	pub fn add_class(&mut self, class: &str) {
		self.classes.insert(class.to_owned());
	}

	pub fn remove_class(&mut self, class: &str) {
		self.classes.remove(class);
	}

	pub fn toggle_class(&mut self, class: &str, force: bool) {
		if force {
			self.add_class(class)
		} else {
			self.remove_class(class)
		}
	}

	/// Inline `display` style, if one was set.
	pub fn display(&self) -> Option<&str> {
		self.display.as_deref()
	}

	pub fn set_display(&mut self, value: &str) {
		self.display = Some(value.to_owned());
	}

	/// `id`, `class`, `style` and the remaining attributes, ready to go inside a start tag.
	pub fn attributes_html(&self) -> String {
		let mut out = String::new();
		if !self.classes.is_empty() {
			let classes: Vec<&str> = self.classes.iter().map(String::as_str).collect();
			out.push_str(&format!(r#" class="{}""#, classes.join(" ")));
		}
		if let Some(display) = &self.display {
			out.push_str(&format!(r#" style="display: {}""#, html_escape(display)));
		}
		for (name, value) in &self.attributes {
			out.push_str(&format!(r#" {}="{}""#, name, html_escape(value)));
		}
		out
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Link {
	pub href: String,
	pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MobileMenu {
	pub element: Element,
	pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	Card(Card),
	Html(String),
}

/// A listing container, e.g. `agencyCards`.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
	id: String,
	class_name: String,
	children: Vec<Node>,
}

impl Container {
	pub fn new(id: &str, class_name: &str) -> Self {
		Container {
			id: id.to_owned(),
			class_name: class_name.to_owned(),
			children: Vec::new(),
		}
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn append(&mut self, card: Card) {
		self.children.push(Node::Card(card));
	}

	/// Drops every child and leaves only `html`.
	pub fn replace_html(&mut self, html: impl Into<String>) {
		self.children.clear();
		self.children.push(Node::Html(html.into()));
	}

	pub fn children(&self) -> &[Node] {
		&self.children
	}

	pub fn cards(&self) -> impl Iterator<Item = &Card> {
		self.children.iter().filter_map(|node| match node {
			Node::Card(card) => Some(card),
			Node::Html(_) => None,
		})
	}

	pub fn to_html(&self) -> String {
		let mut inner = String::new();
		for child in &self.children {
			match child {
				Node::Card(card) => inner.push_str(&card.to_html()),
				Node::Html(html) => inner.push_str(html),
			}
		}
		format!(r#"<div id="{}" class="{}">{}</div>"#, self.id, self.class_name, inner)
	}
}

/// Everything the page script could look up. Any piece may be missing.
#[derive(Debug, Clone, Default)]
pub struct Document {
	pub body: Element,
	pub header: Option<Element>,
	pub nav_toggle: Option<Element>,
	pub mobile_menu: Option<MobileMenu>,
	/// Vertical scroll offset in CSS pixels.
	pub scroll_y: f64,
	containers: HashMap<String, Container>,
}

impl Document {
	pub fn new() -> Self {
		Document::default()
	}

	pub fn insert_container(&mut self, container: Container) {
		self.containers.insert(container.id.clone(), container);
	}

	pub fn container(&self, id: &str) -> Option<&Container> {
		self.containers.get(id)
	}

	/// Hands a container to a single writer until it is inserted back.
	pub fn take_container(&mut self, id: &str) -> Option<Container> {
		self.containers.remove(id)
	}

	/// Standard page chrome: header, collapsed toggle and hidden menu.
	pub fn with_navigation(mut self, links: Vec<Link>) -> Self {
		self.header = Some(Element::new());
		self.nav_toggle = Some(
			Element::new()
				.with_attribute("id", NAV_TOGGLE_ID)
				.with_attribute("aria-expanded", "false")
				.with_attribute("aria-controls", MOBILE_MENU_ID),
		);
		let mut menu = Element::new().with_attribute("id", MOBILE_MENU_ID);
		menu.set_display("none");
		self.mobile_menu = Some(MobileMenu { element: menu, links });
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn replace_html_drops_cards() {
		let mut container = Container::new("agencyCards", "card-grid");
		container.append(crate::cards::build_agency_card(&Default::default()));
		container.replace_html("<p>x</p>");
		assert_eq!(container.cards().count(), 0);
		assert_eq!(container.to_html(), r#"<div id="agencyCards" class="card-grid"><p>x</p></div>"#);
	}

	#[test]
	fn take_and_insert_container() {
		let mut doc = Document::new();
		doc.insert_container(Container::new("cmdPage", "card-grid"));
		let taken = doc.take_container("cmdPage").unwrap();
		assert!(doc.container("cmdPage").is_none());
		doc.insert_container(taken);
		assert!(doc.container("cmdPage").is_some());
	}

	#[test]
	fn element_attributes_render_in_order() {
		let mut el = Element::new().with_attribute("id", "navToggle").with_attribute("aria-expanded", "false");
		el.add_class("nav-toggle");
		el.set_display("none");
		assert_eq!(
			el.attributes_html(),
			r#" class="nav-toggle" style="display: none" aria-expanded="false" id="navToggle""#
		);
	}
}
