use crate::models::book::{BookRecord, RatingStats, RecommendationEntry};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
    pub catalog: String,
    pub pages: u32,
    pub recommendations: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub count: usize,
    pub books: Vec<BookRecord>,
    pub stats: Option<RatingStats>,
    pub recommendations: Vec<RecommendationEntry>,
    pub generated_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderConfirmation {
    pub reference: Uuid,
    pub total: f64,
    pub items: usize,
    pub feedback: String,
    pub created_at: String,
}
