use crate::error::AppError;
use crate::models::book::BookRecord;
use crate::models::responses::CatalogResponse;
use crate::services::pipeline::{run_pipeline, CatalogSnapshot};
use crate::templates::INDEX;
use crate::AppState;
use axum::extract::State;
use axum::response::{Html, Json};
use chrono::Utc;
use minijinja::context;
use serde::Serialize;
use tracing::info;

const MISSING: &str = "N/A";

/// Template-facing view of a book; absent values are already rendered.
#[derive(Debug, Serialize)]
pub struct BookView {
    pub title: String,
    pub price: String,
    pub data_price: String,
    pub rating: String,
    pub image: String,
    pub recs: Vec<String>,
}

impl BookView {
    pub fn new(book: &BookRecord, recs: &[String]) -> Self {
        Self {
            title: book.title.clone(),
            price: book
                .price
                .map(|p| format!("${:.2}", p))
                .unwrap_or_else(|| MISSING.to_string()),
            data_price: format!("{:.2}", book.price.unwrap_or(0.0)),
            rating: book
                .rating
                .map(|r| r.to_string())
                .unwrap_or_else(|| MISSING.to_string()),
            image: book.image.clone(),
            recs: recs.to_vec(),
        }
    }
}

pub(crate) async fn fetch_snapshot(state: &AppState) -> CatalogSnapshot {
    run_pipeline(
        state.catalog.as_ref(),
        &state.parser,
        state.config.pages,
        state.config.recommendations,
    )
    .await
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let snapshot = fetch_snapshot(&state).await;
    info!("Rendering {} books", snapshot.books.len());

    let books: Vec<BookView> = {
        let recs_by_title = snapshot.recs_by_title();
        snapshot
            .books
            .iter()
            .map(|book| {
                let recs = recs_by_title.get(book.title.as_str()).copied().unwrap_or(&[]);
                BookView::new(book, recs)
            })
            .collect()
    };

    let (labels, values) = snapshot
        .stats
        .as_ref()
        .map(|stats| (stats.labels(), stats.values()))
        .unwrap_or_default();

    let html = state.templates.get_template(INDEX)?.render(context! {
        books => books,
        stats => snapshot.stats,
        chart_labels => serde_json::to_string(&labels).unwrap_or_else(|_| "[]".to_string()),
        chart_values => serde_json::to_string(&values).unwrap_or_else(|_| "[]".to_string()),
    })?;

    Ok(Html(html))
}

pub async fn list_books(State(state): State<AppState>) -> Json<CatalogResponse> {
    let snapshot = fetch_snapshot(&state).await;

    Json(CatalogResponse {
        count: snapshot.books.len(),
        books: snapshot.books,
        stats: snapshot.stats,
        recommendations: snapshot.recommendations,
        generated_at: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_render_as_na() {
        let book = BookRecord {
            title: "Soumission".to_string(),
            price: None,
            rating: None,
            source: "BooksToScrape".to_string(),
            image: String::new(),
        };

        let view = BookView::new(&book, &[]);

        assert_eq!(view.price, "N/A");
        assert_eq!(view.rating, "N/A");
        assert_eq!(view.data_price, "0.00");
    }

    #[test]
    fn present_price_carries_currency() {
        let book = BookRecord {
            title: "Sharp Objects".to_string(),
            price: Some(47.82),
            rating: Some(4),
            source: "BooksToScrape".to_string(),
            image: String::new(),
        };

        let view = BookView::new(&book, &[]);

        assert_eq!(view.price, "$47.82");
        assert_eq!(view.rating, "4");
        assert_eq!(view.data_price, "47.82");
    }
}
