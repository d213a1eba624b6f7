use book_haven::utils::config::AppConfig;
use book_haven::{app, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("book_haven=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env();
    let addr = config.bind_addr();
    info!(
        "Scraping {} pages from {} per request",
        config.pages, config.catalog_base_url
    );

    let state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to initialise service: {}", e);
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Book Haven starting on {}", addr);

    if let Err(e) = axum::serve(listener, app(state)).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
