pub mod analyze;
pub mod order;
pub mod pipeline;
pub mod recommend;
pub mod scrape;
