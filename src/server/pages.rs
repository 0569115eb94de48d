use axum::{extract::State, response::Html, Json};
use serde_json::{json, Value};

use super::AppState;
use crate::{page::Page, render::initialize};

pub async fn greeting() -> Json<Value> {
	Json(json!({ "message": "Hello CarrosMocanos.Com" }))
}

pub async fn ping() -> Json<Value> {
	Json(json!({ "ping": "ok" }))
}

pub async fn home(State(state): State<AppState>) -> Html<String> {
	render_page(&state, Page::Home).await
}

pub async fn agencies(State(state): State<AppState>) -> Html<String> {
	render_page(&state, Page::Agencies).await
}

pub async fn vehicles(State(state): State<AppState>) -> Html<String> {
	render_page(&state, Page::Vehicles).await
}

async fn render_page(state: &AppState, page: Page) -> Html<String> {
	let mut doc = page.skeleton();
	initialize(&mut doc, &state.fetcher).await;
	Html(page.to_html(&doc))
}
