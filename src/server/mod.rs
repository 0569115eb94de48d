mod pages;

use std::path::PathBuf;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::{config::Config, fetch::DataFetcher, file_server};

#[derive(Clone)]
pub struct AppState {
	pub fetcher: DataFetcher,
	pub site_dir: PathBuf,
}

impl AppState {
	pub fn new(config: &Config) -> Self {
		AppState {
			fetcher: DataFetcher::new(config.data_base_url.clone()),
			site_dir: config.site_dir.clone(),
		}
	}
}

pub fn create_router(state: AppState) -> Router {
	Router::new()
		.route("/", get(pages::greeting))
		.route("/ping", get(pages::ping))
		.route("/inicio", get(pages::home))
		.route("/agencias", get(pages::agencies))
		.route("/cmd", get(pages::vehicles))
		.route("/data/:file", get(file_server::data_handler))
		.route("/assets/*path", get(file_server::asset_handler))
		.layer(CorsLayer::permissive())
		.with_state(state)
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
	let app = create_router(AppState::new(&config));

	let listener = TcpListener::bind(config.bind_addr).await?;
	log::info!(
		"listening on http://{} (site {}, data from {})",
		config.bind_addr,
		config.site_dir.display(),
		config.data_base_url
	);
	axum::serve(listener, app).await?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_support::{agencies_json, spawn_data_server, vehicles_json};
	use axum::{
		body::{to_bytes, Body},
		http::{Request, StatusCode},
	};
	use reqwest::Url;
	use serde_json::Value;
	use tower::ServiceExt;

	async fn get_path(app: Router, uri: &str) -> (StatusCode, String) {
		let response = app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap()).await.unwrap();
		let status = response.status();
		let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
		(status, String::from_utf8(bytes.to_vec()).unwrap())
	}

	fn app_with(base: Url, site_dir: PathBuf) -> Router {
		create_router(AppState {
			fetcher: DataFetcher::new(base),
			site_dir,
		})
	}

	fn unreachable_base() -> Url {
		Url::parse("http://127.0.0.1:9/").unwrap()
	}

	#[tokio::test]
	async fn greeting_and_ping() {
		let dir = tempfile::tempdir().unwrap();
		let app = app_with(unreachable_base(), dir.path().to_path_buf());

		let (status, body) = get_path(app.clone(), "/").await;
		assert_eq!(status, StatusCode::OK);
		let json: Value = serde_json::from_str(&body).unwrap();
		assert_eq!(json["message"], "Hello CarrosMocanos.Com");

		let (status, body) = get_path(app, "/ping").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, r#"{"ping":"ok"}"#);
	}

	#[tokio::test]
	async fn home_page_renders_capped_listings() {
		let base = spawn_data_server(vec![
			("/data/agencies.json", agencies_json(12)),
			("/data/cmd.json", vehicles_json(9)),
		])
		.await;
		let dir = tempfile::tempdir().unwrap();
		let app = app_with(base, dir.path().to_path_buf());

		let (status, body) = get_path(app, "/inicio").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body.matches(r#"<article class="card agency-card">"#).count(), 9);
		assert_eq!(body.matches(r#"<article class="card vehicle-card">"#).count(), 6);
	}

	#[tokio::test]
	async fn vehicles_page_apologizes_when_data_is_down() {
		let dir = tempfile::tempdir().unwrap();
		let app = app_with(unreachable_base(), dir.path().to_path_buf());

		let (status, body) = get_path(app, "/cmd").await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains("No se pudieron cargar los vehículos."));
		assert!(!body.contains("vehicle-card"));
	}

	#[tokio::test]
	async fn serves_data_files_and_rejects_traversal() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::create_dir_all(dir.path().join("data")).unwrap();
		std::fs::write(dir.path().join("data/cmd.json"), r#"{"cmd":[]}"#).unwrap();
		std::fs::write(dir.path().join("secret.txt"), "x").unwrap();
		let app = app_with(unreachable_base(), dir.path().to_path_buf());

		let (status, body) = get_path(app.clone(), "/data/cmd.json").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, r#"{"cmd":[]}"#);

		let (status, _) = get_path(app.clone(), "/data/agencies.json").await;
		assert_eq!(status, StatusCode::NOT_FOUND);

		let (status, _) = get_path(app, "/assets/../secret.txt").await;
		assert_eq!(status, StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn site_can_feed_its_own_renderer() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::create_dir_all(dir.path().join("data")).unwrap();
		std::fs::write(dir.path().join("data/agencies.json"), agencies_json(3).to_string()).unwrap();

		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		let base = Url::parse(&format!("http://{}/", addr)).unwrap();
		let app = app_with(base.clone(), dir.path().to_path_buf());
		tokio::spawn(async move {
			axum::serve(listener, app).await.unwrap();
		});

		let body = reqwest::get(base.join("agencias").unwrap()).await.unwrap().text().await.unwrap();
		assert_eq!(body.matches(r#"<article class="card agency-card">"#).count(), 3);
	}
}
