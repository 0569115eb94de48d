use std::path::Path as FsPath;

use axum::{
	body::Body,
	extract::{Path, State},
	http::header,
	response::{IntoResponse, Response},
};
use hyper::StatusCode;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use crate::server::AppState;

/// `GET /data/:file`
pub async fn data_handler(State(state): State<AppState>, Path(file): Path<String>) -> Response {
	serve_from(&state.site_dir.join("data"), &file).await
}

/// `GET /assets/*path`
pub async fn asset_handler(State(state): State<AppState>, Path(path): Path<String>) -> Response {
	serve_from(&state.site_dir.join("assets"), &path).await
}

async fn serve_from(root: &FsPath, relative: &str) -> Response {
	if relative.contains("..") || relative.starts_with('/') || relative.contains('\\') {
		log::warn!("rejected file path {:?}", relative);
		return not_found();
	}

	let path = root.join(relative);
	match read_file_stream(&path).await {
		Some(stream) => {
			let mime = mime_guess::from_path(&path).first_or_octet_stream().to_string();
			([(header::CONTENT_TYPE, mime)], Body::from_stream(stream)).into_response()
		}
		None => {
			log::debug!("no file at {}", path.display());
			not_found()
		}
	}
}

fn not_found() -> Response {
	(StatusCode::NOT_FOUND, "Archivo no encontrado").into_response()
}

pub async fn read_file_stream(path: &FsPath) -> Option<ReaderStream<File>> {
	let meta = tokio::fs::metadata(path).await.ok()?;
	if !meta.is_file() {
		return None;
	}
	File::open(path).await.map(ReaderStream::new).ok()
}
