use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tag attached to every record scraped from books.toscrape.com.
pub const BOOKS_TO_SCRAPE: &str = "BooksToScrape";

/// One catalog entry as extracted from a listing page.
///
/// `price` and `rating` are `None` when the markup could not be parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub price: Option<f64>,
    pub rating: Option<u8>,
    pub source: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub title: String,
    pub recs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingStats {
    pub average: f64,
    pub max: u8,
    pub min: u8,
    pub count: usize,
    pub distribution: BTreeMap<u8, usize>,
}

impl RatingStats {
    /// Chart labels, ratings ascending.
    pub fn labels(&self) -> Vec<u8> {
        self.distribution.keys().copied().collect()
    }

    /// Chart values aligned with [`RatingStats::labels`].
    pub fn values(&self) -> Vec<usize> {
        self.distribution.values().copied().collect()
    }
}
