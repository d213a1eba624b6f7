use crate::models::book::BookRecord;
use crate::models::order::OrderForm;
use crate::models::responses::OrderConfirmation;
use chrono::Utc;
use std::collections::HashSet;
use uuid::Uuid;

/// Sum of prices of every fetched record whose title was selected. Records
/// without a price add nothing.
pub fn order_total<S: AsRef<str>>(records: &[BookRecord], selected: &[S]) -> f64 {
    let selected: HashSet<&str> = selected.iter().map(|s| s.as_ref()).collect();

    records
        .iter()
        .filter(|r| selected.contains(r.title.as_str()))
        .filter_map(|r| r.price)
        .fold(0.0, |total, price| total + price)
}

pub fn confirm_order(records: &[BookRecord], form: &OrderForm) -> OrderConfirmation {
    let items = records
        .iter()
        .filter(|r| form.selected_books.contains(&r.title))
        .count();

    OrderConfirmation {
        reference: Uuid::new_v4(),
        total: order_total(records, &form.selected_books),
        items,
        feedback: form.feedback.clone(),
        created_at: Utc::now().to_rfc3339(),
    }
}
