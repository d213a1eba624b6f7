use crate::error::AppError;
use crate::models::order::{Delivery, OrderForm};
use crate::routes::catalog::{fetch_snapshot, BookView};
use crate::services::order::confirm_order;
use crate::templates::{CONFIRMATION, ORDER};
use crate::AppState;
use axum::extract::{RawForm, State};
use axum::response::Html;
use minijinja::context;
use tracing::info;

pub async fn order_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let snapshot = fetch_snapshot(&state).await;

    let books: Vec<BookView> = snapshot
        .books
        .iter()
        .map(|book| BookView::new(book, &[]))
        .collect();

    let html = state
        .templates
        .get_template(ORDER)?
        .render(context! { books => books })?;

    Ok(Html(html))
}

pub async fn submit_order(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> Result<Html<String>, AppError> {
    let form = OrderForm::from_urlencoded(&body);
    let snapshot = fetch_snapshot(&state).await;

    let confirmation = confirm_order(&snapshot.books, &form);
    info!(
        "Order {} placed by {} <{}> ({}): {} items, total {:.2}, payment {:?}, delivery {:?} to {}",
        confirmation.reference,
        form.name,
        form.email,
        form.phone,
        confirmation.items,
        confirmation.total,
        form.payment,
        form.delivery,
        form.location
    );

    let html = state.templates.get_template(CONFIRMATION)?.render(context! {
        total => format!("{:.2}", confirmation.total),
        feedback => confirmation.feedback,
        reference => confirmation.reference.to_string(),
        name => form.name,
        email => form.email,
        delivery => form.delivery == Delivery::Yes,
        location => form.location,
    })?;

    Ok(Html(html))
}
