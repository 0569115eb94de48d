//! Fills the listing containers of a page from the data documents.

use crate::{
	cards::{build_agency_card, build_vehicle_card},
	fetch::{DataFetcher, FetchError},
	listings::{AgencyDocument, VehicleDocument, AGENCIES_PATH, CMD_PATH},
	nav::NavController,
	page::{Container, Document},
};

pub const AGENCY_CARDS_ID: &str = "agencyCards";
pub const AGENCIES_PAGE_ID: &str = "agenciesPage";
pub const CMD_CARDS_ID: &str = "cmdCards";
pub const CMD_PAGE_ID: &str = "cmdPage";

pub const HOME_AGENCY_LIMIT: usize = 9;
pub const HOME_CMD_LIMIT: usize = 6;

pub const AGENCIES_ERROR_HTML: &str = r#"<p class="subtle-text">No se pudieron cargar las agencias.</p>"#;
pub const VEHICLES_ERROR_HTML: &str = r#"<p class="subtle-text">No se pudieron cargar los vehículos.</p>"#;

pub async fn render_home_agencies(fetcher: &DataFetcher, container: Option<&mut Container>) {
	render_agencies(fetcher, container, Some(HOME_AGENCY_LIMIT)).await
}

pub async fn render_all_agencies(fetcher: &DataFetcher, container: Option<&mut Container>) {
	render_agencies(fetcher, container, None).await
}

pub async fn render_home_cmd(fetcher: &DataFetcher, container: Option<&mut Container>) {
	render_vehicles(fetcher, container, Some(HOME_CMD_LIMIT)).await
}

pub async fn render_cmd_page(fetcher: &DataFetcher, container: Option<&mut Container>) {
	render_vehicles(fetcher, container, None).await
}

async fn render_agencies(fetcher: &DataFetcher, container: Option<&mut Container>, limit: Option<usize>) {
	let Some(container) = container else {
		return;
	};

	match fetcher.fetch_json::<AgencyDocument>(AGENCIES_PATH).await {
		Ok(doc) => {
			for agency in doc.agencies.iter().take(limit.unwrap_or(usize::MAX)) {
				container.append(build_agency_card(agency));
			}
		}
		Err(err) => fail(container, AGENCIES_ERROR_HTML, &err),
	}
}

async fn render_vehicles(fetcher: &DataFetcher, container: Option<&mut Container>, limit: Option<usize>) {
	let Some(container) = container else {
		return;
	};

	match fetcher.fetch_json::<VehicleDocument>(CMD_PATH).await {
		Ok(doc) => {
			for vehicle in doc.cmd.iter().take(limit.unwrap_or(usize::MAX)) {
				container.append(build_vehicle_card(vehicle));
			}
		}
		Err(err) => fail(container, VEHICLES_ERROR_HTML, &err),
	}
}

fn fail(container: &mut Container, message: &str, err: &FetchError) {
	container.replace_html(message);
	match std::error::Error::source(err) {
		Some(cause) => log::error!("#{}: {}: {}", container.id(), err, cause),
		None => log::error!("#{}: {}", container.id(), err),
	}
}

/// Page-load entry point: wires the navigation, then renders all four
/// listings concurrently, each owning its container while it runs.
pub async fn initialize(doc: &mut Document, fetcher: &DataFetcher) -> Option<NavController> {
	let nav = NavController::attach(doc);

	let mut home_agencies = doc.take_container(AGENCY_CARDS_ID);
	let mut all_agencies = doc.take_container(AGENCIES_PAGE_ID);
	let mut home_cmd = doc.take_container(CMD_CARDS_ID);
	let mut cmd_page = doc.take_container(CMD_PAGE_ID);

	tokio::join!(
		render_home_agencies(fetcher, home_agencies.as_mut()),
		render_all_agencies(fetcher, all_agencies.as_mut()),
		render_home_cmd(fetcher, home_cmd.as_mut()),
		render_cmd_page(fetcher, cmd_page.as_mut())
	);

	for container in [home_agencies, all_agencies, home_cmd, cmd_page].into_iter().flatten() {
		doc.insert_container(container);
	}

	nav
}
