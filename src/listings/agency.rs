use super::{loose, present};

#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Agency {
	#[serde(default, deserialize_with = "loose::string")]
	pub name: String,
	#[serde(default, deserialize_with = "loose::string")]
	pub address: String,
	#[serde(default, deserialize_with = "loose::string")]
	pub phone: String,
	#[serde(default, deserialize_with = "loose::opt_string")]
	pub whatsapp: Option<String>,
	#[serde(default, deserialize_with = "loose::opt_string")]
	pub logo: Option<String>,
	#[serde(default, deserialize_with = "loose::truthy")]
	pub verified: bool,
	#[serde(default, deserialize_with = "loose::opt_string")]
	pub size: Option<String>,
	#[serde(default, deserialize_with = "loose::opt_string")]
	pub vehicle_types: Option<String>,
	#[serde(default, deserialize_with = "loose::opt_string_list")]
	pub services: Option<Vec<String>>,
	#[serde(default, deserialize_with = "loose::opt_string")]
	pub notes: Option<String>,
}

/// `data/agencies.json`
#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct AgencyDocument {
	pub agencies: Vec<Agency>,
}

impl Agency {
	pub fn logo(&self) -> Option<&str> {
		present(&self.logo)
	}

	pub fn whatsapp(&self) -> Option<&str> {
		present(&self.whatsapp)
	}

	pub fn notes(&self) -> Option<&str> {
		present(&self.notes)
	}

	/// Size and vehicle types, whichever are filled in.
	pub fn tags(&self) -> Vec<&str> {
		[present(&self.size), present(&self.vehicle_types)].into_iter().flatten().collect()
	}
}
