use crate::models::book::{BookRecord, RatingStats, RecommendationEntry};
use crate::services::analyze::analyze;
use crate::services::recommend::recommend;
use crate::services::scrape::{scrape, CatalogParser, CatalogSource};
use std::collections::HashMap;

/// Everything one page view needs, computed from a single fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub books: Vec<BookRecord>,
    pub stats: Option<RatingStats>,
    pub recommendations: Vec<RecommendationEntry>,
}

impl CatalogSnapshot {
    pub fn from_books(books: Vec<BookRecord>, top_n: usize) -> Self {
        let stats = analyze(&books);
        let recommendations = recommend(&books, top_n);

        Self {
            books,
            stats,
            recommendations,
        }
    }

    /// Recommendations keyed by title. With duplicate titles the later entry
    /// wins.
    pub fn recs_by_title(&self) -> HashMap<&str, &[String]> {
        self.recommendations
            .iter()
            .map(|entry| (entry.title.as_str(), entry.recs.as_slice()))
            .collect()
    }
}

pub async fn run_pipeline(
    source: &(dyn CatalogSource + Send + Sync),
    parser: &CatalogParser,
    pages: u32,
    top_n: usize,
) -> CatalogSnapshot {
    let books = scrape(source, parser, pages).await;
    CatalogSnapshot::from_books(books, top_n)
}
