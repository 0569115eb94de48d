pub mod agency;
pub mod vehicle;

pub use agency::{Agency, AgencyDocument};
pub use vehicle::{Vehicle, VehicleDocument};

pub const AGENCIES_PATH: &str = "data/agencies.json";
pub const CMD_PATH: &str = "data/cmd.json";

/// Empty strings in the data files mean the same as a missing field.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|s| !s.is_empty())
}

/// Field readers that take whatever JSON type the data files hold, so a
/// single odd record never rejects the whole document.
pub(crate) mod loose {
	use serde::{Deserialize, Deserializer};
	use serde_json::Value;

	fn text(value: Value) -> Option<String> {
		match value {
			Value::String(s) => Some(s),
			Value::Number(n) => Some(n.to_string()),
			Value::Bool(b) => Some(b.to_string()),
			_ => None,
		}
	}

	pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
		Ok(text(Value::deserialize(d)?).unwrap_or_default())
	}

	pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
		Ok(text(Value::deserialize(d)?))
	}

	/// Numbers, or strings holding one.
	pub fn opt_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
		Ok(match Value::deserialize(d)? {
			Value::Number(n) => n.as_f64(),
			Value::String(s) => s.trim().parse().ok(),
			_ => None,
		})
	}

	pub fn truthy<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
		Ok(match Value::deserialize(d)? {
			Value::Null => false,
			Value::Bool(b) => b,
			Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
			Value::String(s) => !s.is_empty(),
			Value::Array(_) | Value::Object(_) => true,
		})
	}

	pub fn opt_string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<String>>, D::Error> {
		Ok(match Value::deserialize(d)? {
			Value::Array(items) => Some(items.into_iter().filter_map(text).collect()),
			_ => None,
		})
	}
}
