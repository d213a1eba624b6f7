use crate::models::responses::HealthResponse;
use crate::AppState;
use axum::extract::State;
use axum::response::Json;

/// Liveness plus the catalog settings each request will scrape with.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        service: env!("CARGO_PKG_NAME").to_string(),
        status: "running".to_string(),
        catalog: state.catalog.site_root().to_string(),
        pages: state.config.pages,
        recommendations: state.config.recommendations,
    })
}
