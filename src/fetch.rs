use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The only way a data document can fail: it could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
	#[error("No se pudo cargar {path}")]
	Unavailable {
		path: String,
		#[source]
		source: Option<BoxError>,
	},
}

impl FetchError {
	fn unavailable(path: &str, source: Option<BoxError>) -> Self {
		FetchError::Unavailable {
			path: path.to_owned(),
			source,
		}
	}
}

/// Loads the read-only JSON documents the pages are built from.
#[derive(Debug, Clone)]
pub struct DataFetcher {
	client: Client,
	base: Url,
}

impl DataFetcher {
	pub fn new(base: Url) -> Self {
		DataFetcher {
			client: Client::new(),
			base,
		}
	}

	pub async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
		let url = self.base.join(path).map_err(|e| FetchError::unavailable(path, Some(e.into())))?;

		let response = self
			.client
			.get(url)
			.send()
			.await
			.map_err(|e| FetchError::unavailable(path, Some(e.into())))?;

		if !response.status().is_success() {
			log::debug!("{} answered {}", path, response.status());
			return Err(FetchError::unavailable(path, None));
		}

		response.json::<T>().await.map_err(|e| FetchError::unavailable(path, Some(e.into())))
	}
}
