use super::{Container, Document, Element, Link};
use crate::cards::html_escape;
use crate::render::{AGENCIES_PAGE_ID, AGENCY_CARDS_ID, CMD_CARDS_ID, CMD_PAGE_ID};

/// The public pages and the containers each one carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
	Home,
	Agencies,
	Vehicles,
}

impl Page {
	pub fn title(self) -> &'static str {
		match self {
			Page::Home => "Inicio",
			Page::Agencies => "Agencias",
			Page::Vehicles => "Carros de Moca",
		}
	}

	fn sections(self) -> &'static [(&'static str, &'static str)] {
		match self {
			Page::Home => &[(AGENCY_CARDS_ID, "Agencias destacadas"), (CMD_CARDS_ID, "Vehículos recientes")],
			Page::Agencies => &[(AGENCIES_PAGE_ID, "Todas las agencias")],
			Page::Vehicles => &[(CMD_PAGE_ID, "Todos los vehículos")],
		}
	}

	/// Empty page, before any listing is rendered.
	pub fn skeleton(self) -> Document {
		let mut doc = Document::new().with_navigation(nav_links());
		for (id, _) in self.sections() {
			doc.insert_container(Container::new(id, "card-grid"));
		}
		doc
	}

	pub fn to_html(self, doc: &Document) -> String {
		let header = doc.header.as_ref().map(|h| header_html(h, doc)).unwrap_or_default();

		let mut main = String::new();
		for (id, heading) in self.sections() {
			if let Some(container) = doc.container(id) {
				main.push_str(&format!(
					r#"
    <section class="section">
      <h2>{}</h2>
      {}
    </section>"#,
					heading,
					container.to_html()
				));
			}
		}

		format!(
			r#"<!DOCTYPE html>
<html lang="es">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{} - CarrosMocanos.com</title>
  <link rel="stylesheet" href="assets/css/styles.css">
</head>
<body{}>
  {}
  <main>{}
  </main>
</body>
</html>"#,
			self.title(),
			doc.body.attributes_html(),
			header,
			main
		)
	}
}

fn nav_links() -> Vec<Link> {
	[("/inicio", "Inicio"), ("/agencias", "Agencias"), ("/cmd", "Carros de Moca")]
		.into_iter()
		.map(|(href, label)| Link {
			href: href.to_owned(),
			label: label.to_owned(),
		})
		.collect()
}

fn header_html(header: &Element, doc: &Document) -> String {
	let toggle = doc
		.nav_toggle
		.as_ref()
		.map(|t| {
			format!(
				r#"<button class="nav-toggle"{} aria-label="Abrir menú"><span></span><span></span><span></span></button>"#,
				t.attributes_html()
			)
		})
		.unwrap_or_default();

	let menu = doc
		.mobile_menu
		.as_ref()
		.map(|m| {
			let links: String = m
				.links
				.iter()
				.map(|l| format!(r#"<a href="{}">{}</a>"#, html_escape(&l.href), html_escape(&l.label)))
				.collect();
			format!(r#"<nav class="mobile-menu"{}>{}</nav>"#, m.element.attributes_html(), links)
		})
		.unwrap_or_default();

	format!(
		r#"<header{}>
    <a href="/inicio" class="logo">CarrosMocanos.com</a>
    {}
    {}
  </header>"#,
		header.attributes_html(),
		toggle,
		menu
	)
}
