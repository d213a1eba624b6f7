use axum::{routing::get, Router};
use minijinja::Environment;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod templates;
pub mod utils;

use error::AppError;
use routes::{
    catalog::{index, list_books},
    health::health_check,
    order::{order_form, submit_order},
};
use services::scrape::{CatalogParser, CatalogSource, HttpCatalog};
use utils::config::AppConfig;

type Catalog = Arc<dyn CatalogSource + Send + Sync>;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub parser: Arc<CatalogParser>,
    pub templates: Arc<Environment<'static>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: AppConfig) -> Result<Self, AppError> {
        Ok(Self {
            catalog,
            parser: Arc::new(CatalogParser::new()?),
            templates: Arc::new(templates::environment()?),
            config: Arc::new(config),
        })
    }

    /// State backed by the live catalog site named in `config`.
    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let catalog = HttpCatalog::new(&config.catalog_base_url, config.fetch_timeout)?;
        Self::new(Arc::new(catalog), config)
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/order", get(order_form).post(submit_order))
        .route("/api/books", get(list_books))
        .route("/status", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
