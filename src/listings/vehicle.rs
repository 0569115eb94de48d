use super::{loose, present};

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Vehicle {
	#[serde(default, deserialize_with = "loose::string")]
	pub title: String,
	/// Model year; the data files carry it as a number or as text.
	#[serde(default, deserialize_with = "loose::opt_string")]
	pub year: Option<String>,
	#[serde(default, deserialize_with = "loose::opt_number")]
	pub price: Option<f64>,
	#[serde(default, deserialize_with = "loose::opt_string")]
	pub image: Option<String>,
	#[serde(default, deserialize_with = "loose::opt_string")]
	pub whatsapp: Option<String>,
	#[serde(default, deserialize_with = "loose::opt_string")]
	pub whatsapp_number: Option<String>,
	#[serde(default, deserialize_with = "loose::opt_string")]
	pub whatsapp_message: Option<String>,
}

/// `data/cmd.json`
#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct VehicleDocument {
	pub cmd: Vec<Vehicle>,
}

impl Vehicle {
	pub fn image(&self) -> Option<&str> {
		present(&self.image)
	}

	/// A price of zero means "ask the seller".
	pub fn price(&self) -> Option<f64> {
		self.price.filter(|p| *p != 0.0 && p.is_finite())
	}

	pub fn subtitle(&self) -> Option<&str> {
		present(&self.year)
	}

	pub fn contact_number(&self) -> Option<&str> {
		present(&self.whatsapp).or_else(|| present(&self.whatsapp_number))
	}

	pub fn contact_message(&self) -> String {
		match present(&self.whatsapp_message) {
			Some(message) => message.to_owned(),
			None => format!("Hola, quiero más información sobre {}", self.title),
		}
	}
}
