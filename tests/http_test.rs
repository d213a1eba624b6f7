use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use book_haven::models::responses::{CatalogResponse, HealthResponse};
use book_haven::services::scrape::{CatalogSource, ScrapeError};
use book_haven::utils::config::AppConfig;
use book_haven::{app, AppState};
use std::sync::Arc;
use tower::ServiceExt;

const PAGE: &str = include_str!("fixtures/catalog_page.html");

/// Serves the fixture for page 1 and fails every other page.
struct FixtureCatalog;

#[async_trait]
impl CatalogSource for FixtureCatalog {
    fn site_root(&self) -> &str {
        "http://books.toscrape.com/"
    }

    async fn fetch_page(&self, page: u32) -> Result<String, ScrapeError> {
        match page {
            1 => Ok(PAGE.to_string()),
            _ => Err(ScrapeError::Status {
                url: format!("http://books.toscrape.com/catalogue/page-{}.html", page),
                status: 404,
            }),
        }
    }
}

fn test_app(pages: u32) -> axum::Router {
    let config = AppConfig {
        pages,
        ..AppConfig::default()
    };
    let state = AppState::new(Arc::new(FixtureCatalog), config).unwrap();
    app(state)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn status_reports_running() {
    let response = test_app(2)
        .oneshot(Request::get("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let health: HealthResponse = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(health.service, "book-haven");
    assert_eq!(health.status, "running");
    assert_eq!(health.catalog, "http://books.toscrape.com/");
    assert_eq!(health.pages, 2);
    assert_eq!(health.recommendations, 5);
}

#[tokio::test]
async fn index_lists_books_and_chart() {
    let response = test_app(2)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;

    assert!(html.contains("A Light in the Attic"));
    assert!(html.contains("Price: $51.77 | Rating: 3"));
    // The template escapes slashes, so missing values show up as N&#x2f;A.
    assert!(html.contains("Price: N&#x2f;A | Rating: N&#x2f;A"));
    assert!(!html.contains("$N"));
    assert!(html.contains("labels: [1,3,5]"));
    assert!(html.contains("data: [1,1,1]"));
    // Attribute values are escaped, slashes included.
    assert!(html.contains("2cdad67c44b002e7ead0cc35693c0e8b.jpg"));
}

#[tokio::test]
async fn index_renders_when_nothing_was_fetched() {
    let response = test_app(0)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("labels: []"));
    assert!(html.contains("data: []"));
}

#[tokio::test]
async fn api_returns_pipeline_payload() {
    let response = test_app(2)
        .oneshot(Request::get("/api/books").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payload: CatalogResponse = serde_json::from_str(&body_string(response).await).unwrap();

    assert_eq!(payload.count, 4);
    assert_eq!(payload.books[3].price, None);
    assert_eq!(payload.books[3].rating, None);

    let stats = payload.stats.unwrap();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.average, 3.0);

    let attic = &payload.recommendations[0];
    assert_eq!(attic.title, "A Light in the Attic");
    assert_eq!(attic.recs.len(), 3);
    assert_eq!(attic.recs[0], "The Light Fantastic");
}

#[tokio::test]
async fn order_form_lists_checkboxes() {
    let response = test_app(1)
        .oneshot(Request::get("/order").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"value="Tipping the Velvet" data-price="53.74""#));
    assert!(html.contains("Tipping the Velvet - $53.74"));
    assert!(html.contains(r#"data-price="0.00" onchange="updateTotal()"> Soumission - N&#x2f;A"#));
    assert!(html.contains(r#"name="feedback""#));
}

#[tokio::test]
async fn submitted_order_totals_selection() {
    let body = "selected_books=A+Light+in+the+Attic&selected_books=The+Light+Fantastic\
                &selected_books=Soumission&name=Ann&email=ann%40example.com&phone=1\
                &location=Beirut&delivery=yes&payment=cash&feedback=%3Cb%3EGreat%3C%2Fb%3E";

    let response = test_app(1)
        .oneshot(
            Request::post("/order")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Your order total is $99.59."));
    assert!(html.contains("&lt;b&gt;Great"));
    assert!(!html.contains("<b>Great"));
    assert!(html.contains("Ordered by Ann (ann@example.com)"));
    assert!(html.contains("Delivering to Beirut"));
}

#[tokio::test]
async fn empty_order_totals_zero() {
    let response = test_app(1)
        .oneshot(
            Request::post("/order")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("name=Ann&feedback="))
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("Your order total is $0.00."));
    assert!(html.contains("Ordered by Ann</p>"));
    assert!(html.contains("Delivering to the address on file"));
}

#[tokio::test]
async fn pickup_order_skips_delivery_address() {
    let response = test_app(1)
        .oneshot(
            Request::post("/order")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("delivery=no&location=Beirut"))
                .unwrap(),
        )
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("Pickup in store"));
    assert!(!html.contains("Beirut"));
    assert!(!html.contains("Ordered by"));
}
