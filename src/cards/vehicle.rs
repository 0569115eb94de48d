use super::{format_price, html_escape, whatsapp_link, Card, PRICE_ON_REQUEST};
use crate::listings::Vehicle;

const PLACEHOLDER_IMAGE: &str = "assets/images/car-placeholder.svg";

pub fn build_vehicle_card(vehicle: &Vehicle) -> Card {
	let title = html_escape(&vehicle.title);
	let image = html_escape(vehicle.image().unwrap_or(PLACEHOLDER_IMAGE));
	let badge = match vehicle.price() {
		Some(_) => String::new(),
		None => format!(r#"<span class="badge">{}</span>"#, PRICE_ON_REQUEST),
	};
	let subtitle = vehicle
		.subtitle()
		.map(|s| format!("<p>{}</p>", html_escape(s)))
		.unwrap_or_default();
	let price = html_escape(&format_price(vehicle.price()));
	let chat = html_escape(&whatsapp_link(vehicle.contact_number(), &vehicle.contact_message()));

	let inner_html = format!(
		r#"
    <div class="card-header">
      <img src="{image}" alt="{title}" loading="lazy">
      {badge}
    </div>
    <div class="card-body">
      <h3>{title}</h3>
      {subtitle}
      <p class="price">{price}</p>
      <div class="actions">
        <a class="btn btn-whatsapp" href="{chat}" target="_blank" rel="noopener">
          <span class="icon icon-whatsapp" aria-hidden="true"></span>
          Quiero más información
        </a>
      </div>
    </div>
  "#
	);

	Card {
		class_name: "card vehicle-card",
		inner_html,
	}
}
