use crate::models::book::{BookRecord, RatingStats};
use std::collections::BTreeMap;

/// Rating statistics over the records that carry a rating. `None` when no
/// record does.
pub fn analyze(records: &[BookRecord]) -> Option<RatingStats> {
    let ratings: Vec<u8> = records.iter().filter_map(|r| r.rating).collect();

    let max = *ratings.iter().max()?;
    let min = *ratings.iter().min()?;
    let count = ratings.len();

    let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
    let mean = f64::from(sum) / count as f64;

    let mut distribution = BTreeMap::new();
    for rating in ratings {
        *distribution.entry(rating).or_insert(0) += 1;
    }

    Some(RatingStats {
        average: (mean * 100.0).round() / 100.0,
        max,
        min,
        count,
        distribution,
    })
}
