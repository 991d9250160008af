use axum::{Router, routing::get};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

use boruto_app::repository::HeroRepository;
use boruto_types::{ApplicationError, Result};

use crate::handlers::{get_all_heroes, home, page_not_found, search_heroes};

#[derive(Clone)]
pub struct AppState {
    pub hero_repository: Arc<dyn HeroRepository>,
}

impl AppState {
    pub fn new(hero_repository: Arc<dyn HeroRepository>) -> AppState {
        AppState { hero_repository }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let router = Router::new()
            .route("/", get(home))
            .route("/boruto/heroes", get(get_all_heroes))
            .route("/boruto/heroes/search", get(search_heroes))
            .fallback(page_not_found)
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            let err = format!("{:#?}", e);
            ApplicationError::Infrastructure(err)
        })?;

        tracing::info!(
            "HTTP Server started, listening on http://{}",
            addr.to_string()
        );
        axum::serve(listener, router).await.map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
