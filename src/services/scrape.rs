use crate::models::book::{BookRecord, BOOKS_TO_SCRAPE};
use crate::utils::config::USER_AGENT;
use crate::utils::parse::{absolute_image_url, parse_price, parse_rating};
use async_trait::async_trait;
use reqwest::StatusCode;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },
    #[error("Invalid selector {0}")]
    Selector(String),
}

/// Somewhere catalog pages come from. Pages are numbered from 1.
#[async_trait]
pub trait CatalogSource {
    /// Root that relative image paths are resolved against.
    fn site_root(&self) -> &str;

    async fn fetch_page(&self, page: u32) -> Result<String, ScrapeError>;
}

pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self { client, base_url })
    }

    pub fn page_url(&self, page: u32) -> String {
        format!("{}catalogue/page-{}.html", self.base_url, page)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    fn site_root(&self) -> &str {
        &self.base_url
    }

    async fn fetch_page(&self, page: u32) -> Result<String, ScrapeError> {
        let url = self.page_url(page);
        info!("Fetching catalog page {} from {}", page, url);

        let response = self.client.get(&url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(ScrapeError::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// Compiled selectors for a books.toscrape.com listing page.
pub struct CatalogParser {
    article: Selector,
    title: Selector,
    price: Selector,
    rating: Selector,
    image: Selector,
}

fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{:?}: {}", css, e)))
}

impl CatalogParser {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            article: selector("article.product_pod")?,
            title: selector("h3 > a")?,
            price: selector("p.price_color")?,
            rating: selector("p.star-rating")?,
            image: selector("img")?,
        })
    }

    /// Extracts every product entry of one page, in document order.
    pub fn parse_page(&self, html: &str, site_root: &str) -> Vec<BookRecord> {
        let document = Html::parse_document(html);

        document
            .select(&self.article)
            .filter_map(|article| self.parse_article(article, site_root))
            .collect()
    }

    fn parse_article(&self, article: ElementRef<'_>, site_root: &str) -> Option<BookRecord> {
        let title = match article
            .select(&self.title)
            .next()
            .and_then(|a| a.value().attr("title"))
        {
            Some(title) => title.to_string(),
            None => {
                debug!("Skipping product entry without a title");
                return None;
            }
        };

        let price = article
            .select(&self.price)
            .next()
            .and_then(|p| parse_price(&p.text().collect::<String>()));

        let rating = article
            .select(&self.rating)
            .next()
            .and_then(|p| p.value().attr("class"))
            .and_then(|classes| classes.split_whitespace().nth(1))
            .and_then(parse_rating);

        let image = article
            .select(&self.image)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(|src| absolute_image_url(site_root, src))
            .unwrap_or_default();

        Some(BookRecord {
            title,
            price,
            rating,
            source: BOOKS_TO_SCRAPE.to_string(),
            image,
        })
    }
}

/// Fetches pages `1..=pages` in order and extracts their books. A page that
/// fails to load contributes nothing.
pub async fn scrape(
    source: &(dyn CatalogSource + Send + Sync),
    parser: &CatalogParser,
    pages: u32,
) -> Vec<BookRecord> {
    let mut books = Vec::new();

    for page in 1..=pages {
        match source.fetch_page(page).await {
            Ok(html) => {
                let records = parser.parse_page(&html, source.site_root());
                debug!("Page {} yielded {} books", page, records.len());
                books.extend(records);
            }
            Err(e) => {
                warn!("Skipping catalog page {}: {}", page, e);
            }
        }
    }

    info!("Scraped {} books from {} pages", books.len(), pages);
    books
}
