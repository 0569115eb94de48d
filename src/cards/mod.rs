//! Listing cards: one `<article>` fragment per record.

mod agency;
mod vehicle;

pub use agency::build_agency_card;
pub use vehicle::build_vehicle_card;

pub const PRICE_ON_REQUEST: &str = "Precio a consultar";

/// A rendered listing card.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
	class_name: &'static str,
	inner_html: String,
}

impl Card {
	pub fn inner_html(&self) -> &str {
		&self.inner_html
	}

	pub fn to_html(&self) -> String {
		format!(r#"<article class="{}">{}</article>"#, self.class_name, self.inner_html)
	}
}

/// Chat deep link with a pre-filled message, or an inert `#` without a number.
pub fn whatsapp_link(number: Option<&str>, message: &str) -> String {
	match number.filter(|n| !n.is_empty()) {
		Some(number) => format!("https://wa.me/{}?text={}", number, encode_uri_component(message)),
		None => "#".to_owned(),
	}
}

// encodeURIComponent leaves these marks alone; urlencoding does not.
fn encode_uri_component(text: &str) -> String {
	urlencoding::encode(text)
		.replace("%21", "!")
		.replace("%27", "'")
		.replace("%28", "(")
		.replace("%29", ")")
		.replace("%2A", "*")
}

/// `RD$ ` plus the amount grouped the es-DO way: `1,250,000.5`.
pub fn format_price(price: Option<f64>) -> String {
	let Some(price) = price.filter(|p| *p != 0.0 && p.is_finite()) else {
		return PRICE_ON_REQUEST.to_owned();
	};

	// Whole part stays in f64 so large amounts keep every digit.
	let mut whole = price.abs().trunc();
	let mut fraction = ((price.abs() - whole) * 1000.0).round() as u32;
	if fraction >= 1000 {
		whole += 1.0;
		fraction = 0;
	}
	let whole = group_thousands(&format!("{:.0}", whole));
	let sign = if price < 0.0 { "-" } else { "" };

	if fraction == 0 {
		format!("RD$ {}{}", sign, whole)
	} else {
		let fraction = format!("{:03}", fraction);
		format!("RD$ {}{}.{}", sign, whole, fraction.trim_end_matches('0'))
	}
}

fn group_thousands(digits: &str) -> String {
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(c);
	}
	grouped
}

pub fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

fn list_items<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
	items.into_iter().map(|item| format!("<li>{}</li>", html_escape(item))).collect()
}
