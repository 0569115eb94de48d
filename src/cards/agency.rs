use super::{html_escape, list_items, whatsapp_link, Card};
use crate::listings::Agency;

const PLACEHOLDER_LOGO: &str = "assets/images/agency-placeholder.svg";
const GREETING: &str = "Hola, vi su agencia en CarrosMocanos.com y quiero más información";
const MAX_SERVICES: usize = 3;

pub fn build_agency_card(agency: &Agency) -> Card {
	let name = html_escape(&agency.name);
	let phone = html_escape(&agency.phone);
	let logo = html_escape(agency.logo().unwrap_or(PLACEHOLDER_LOGO));
	let badge = if agency.verified { r#"<span class="badge">Verificada</span>"# } else { "" };

	let tags = agency.tags();
	let tags = if tags.is_empty() {
		String::new()
	} else {
		format!(r#"<ul class="meta-list">{}</ul>"#, list_items(tags))
	};

	let services = agency
		.services
		.as_deref()
		.map(|s| list_items(s.iter().take(MAX_SERVICES).map(String::as_str)))
		.unwrap_or_default();
	let services = if services.is_empty() {
		services
	} else {
		format!(r#"<ul class="meta-list">{}</ul>"#, services)
	};

	let notes = agency
		.notes()
		.map(|n| format!(r#"<p class="subtle-text">{}</p>"#, html_escape(n)))
		.unwrap_or_default();

	let chat = html_escape(&whatsapp_link(agency.whatsapp(), GREETING));

	let inner_html = format!(
		r#"
    <div class="card-header">
      <img src="{logo}" alt="Logo de {name}" loading="lazy">
      {badge}
    </div>
    <div class="card-body">
      <h3>{name}</h3>
      <p>{address}</p>
      <p class="tag"><span class="icon icon-phone" aria-hidden="true"></span><span>{phone}</span></p>
      {tags}
      {services}
      {notes}
      <div class="actions">
        <a class="btn btn-whatsapp" href="{chat}" target="_blank" rel="noopener">
          <span class="icon icon-whatsapp" aria-hidden="true"></span>
          WhatsApp
        </a>
        <a class="btn btn-outline" href="tel:{phone}">
          <span class="icon icon-phone" aria-hidden="true"></span>
          Llamar
        </a>
      </div>
    </div>
  "#,
		address = html_escape(&agency.address),
	);

	Card {
		class_name: "card agency-card",
		inner_html,
	}
}
