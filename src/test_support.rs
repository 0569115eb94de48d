use axum::{routing::get, Json, Router};
use reqwest::Url;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Serves each `(path, body)` pair as JSON on an ephemeral port; everything else is a 404.
pub async fn spawn_data_server(documents: Vec<(&'static str, Value)>) -> Url {
	let mut app = Router::new();
	for (path, body) in documents {
		app = app.route(
			path,
			get(move || {
				let body = body.clone();
				async move { Json(body) }
			}),
		);
	}

	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move {
		axum::serve(listener, app).await.unwrap();
	});

	Url::parse(&format!("http://{}/", addr)).unwrap()
}

pub fn agencies_json(count: usize) -> Value {
	let agencies: Vec<Value> = (1..=count)
		.map(|i| {
			json!({
				"name": format!("Agencia {}", i),
				"address": format!("Calle {}, Moca", i),
				"phone": format!("809-555-{:04}", i),
				"whatsapp": "18095551234",
				"verified": i % 2 == 0,
			})
		})
		.collect();
	json!({ "agencies": agencies })
}

pub fn vehicles_json(count: usize) -> Value {
	let cmd: Vec<Value> = (1..=count)
		.map(|i| {
			json!({
				"title": format!("Toyota Corolla {}", i),
				"year": 2015 + i,
				"price": 650000 + i * 1000,
				"whatsapp": "18095551234",
			})
		})
		.collect();
	json!({ "cmd": cmd })
}
