use std::{env, net::SocketAddr, path::PathBuf};

use anyhow::Context;
use reqwest::Url;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:4000";
pub const DEFAULT_SITE_DIR: &str = "frontend";

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
	pub bind_addr: SocketAddr,
	/// Directory holding `data/` and `assets/`.
	pub site_dir: PathBuf,
	/// Base the renderer resolves `data/*.json` against.
	pub data_base_url: Url,
}

impl Config {
	pub fn from_env() -> anyhow::Result<Self> {
		Self::from_lookup(|key| env::var(key).ok())
	}

	fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
		let bind = lookup("CARROS_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
		let bind_addr: SocketAddr = bind
			.trim()
			.parse()
			.with_context(|| format!("invalid CARROS_BIND_ADDR `{}`", bind))?;

		let site_dir = PathBuf::from(lookup("CARROS_SITE_DIR").unwrap_or_else(|| DEFAULT_SITE_DIR.to_owned()));

		let base = lookup("CARROS_DATA_BASE_URL").unwrap_or_else(|| format!("http://127.0.0.1:{}/", bind_addr.port()));
		let data_base_url = parse_base_url(&base).with_context(|| format!("invalid CARROS_DATA_BASE_URL `{}`", base))?;

		Ok(Config {
			bind_addr,
			site_dir,
			data_base_url,
		})
	}
}

// Url::join drops the last segment unless the base ends with a slash.
fn parse_base_url(raw: &str) -> anyhow::Result<Url> {
	let raw = raw.trim();
	let normalized = if raw.ends_with('/') { raw.to_owned() } else { format!("{}/", raw) };
	Ok(Url::parse(&normalized)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
		let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
		Config::from_lookup(|key| vars.get(key).cloned())
	}

	#[test]
	fn defaults_point_the_fetcher_at_the_service_itself() {
		let config = config_from(&[]).unwrap();
		assert_eq!(config.bind_addr.port(), 4000);
		assert_eq!(config.site_dir, PathBuf::from("frontend"));
		assert_eq!(config.data_base_url.as_str(), "http://127.0.0.1:4000/");
	}

	#[test]
	fn base_url_gains_a_trailing_slash() {
		let config = config_from(&[("CARROS_DATA_BASE_URL", "https://carrosmocanos.com/site")]).unwrap();
		assert_eq!(config.data_base_url.join("data/cmd.json").unwrap().as_str(), "https://carrosmocanos.com/site/data/cmd.json");
	}

	#[test]
	fn bad_bind_address_is_an_error() {
		let err = config_from(&[("CARROS_BIND_ADDR", "not-an-addr")]).unwrap_err();
		assert!(err.to_string().contains("CARROS_BIND_ADDR"));
	}
}
