use crate::page::Document;

/// Offset past which the header switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
	ToggleClick,
	MenuLinkClick,
	Scroll(f64),
}

/// Mobile menu toggle plus the sticky header state.
#[derive(Debug)]
pub struct NavController;

impl NavController {
	/// `None` when the page has no toggle or no menu.
	pub fn attach(doc: &mut Document) -> Option<Self> {
		if doc.nav_toggle.is_none() || doc.mobile_menu.is_none() {
			return None;
		}
		let scroll_y = doc.scroll_y;
		NavController.handle(doc, NavEvent::Scroll(scroll_y));
		Some(NavController)
	}

	pub fn handle(&self, doc: &mut Document, event: NavEvent) {
		match event {
			NavEvent::ToggleClick => toggle_menu(doc),
			NavEvent::MenuLinkClick => close_menu(doc),
			NavEvent::Scroll(y) => {
				doc.scroll_y = y;
				if let Some(header) = doc.header.as_mut() {
					header.toggle_class("is-scrolled", y > SCROLL_THRESHOLD);
				}
			}
		}
	}
}

fn toggle_menu(doc: &mut Document) {
	let (Some(toggle), Some(menu)) = (doc.nav_toggle.as_mut(), doc.mobile_menu.as_mut()) else {
		return;
	};
	let expanded = toggle.attribute("aria-expanded") == Some("true");
	toggle.set_attribute("aria-expanded", if expanded { "false" } else { "true" });
	menu.element.set_display(if expanded { "none" } else { "block" });
	doc.body.toggle_class("nav-open", !expanded);
}

fn close_menu(doc: &mut Document) {
	let (Some(toggle), Some(menu)) = (doc.nav_toggle.as_mut(), doc.mobile_menu.as_mut()) else {
		return;
	};
	toggle.set_attribute("aria-expanded", "false");
	menu.element.set_display("none");
	doc.body.remove_class("nav-open");
}
