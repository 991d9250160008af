use std::sync::Arc;

use boruto_app::{catalog::HeroCatalog, config::Config, repository::HeroRepository};
use boruto_types::{ApplicationError, Result};
use boruto_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    setup_logging();

    let config = Config::from_env();
    let catalog: Arc<dyn HeroRepository> = Arc::new(HeroCatalog::new());
    tracing::info!(
        "Hero catalog loaded with {} pages",
        boruto_app::catalog::PAGE_COUNT
    );
    let state = AppState::new(catalog);

    WebRouter::serve(state, config.http_port).await
}
