use std::time::Duration;

use log::info;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use scraper::{Html, Selector};
use thiserror::Error;

/// Transport-level failures at the page-fetch seam. Callers catch these at
/// the metric boundary; they never travel further up.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("page load timed out")]
    Timeout,
    #[error("navigation failed: {0}")]
    Http(reqwest::Error),
    #[error("blocked response status {0}")]
    BadStatus(u16),
}

impl FetchError {
    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Http(err)
        }
    }
}

/// Immutable capture of one rendered page. Everything downstream of the
/// fetch works on this snapshot, never on a live session handle.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub url: String,
    pub title: String,
    pub body: String,
}

impl PageSnapshot {
    pub fn new(url: String, body: String) -> Self {
        let title = extract_title(&body);
        PageSnapshot { url, title, body }
    }
}

fn extract_title(body: &str) -> String {
    let document = Html::parse_document(body);
    let selector = Selector::parse("title").unwrap();
    document
        .select(&selector)
        .next()
        .map(|t| t.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// A thing that can turn a URL into a page snapshot. Stealth measures,
/// popup dismissal and scrolling live behind this seam.
pub trait PageClient {
    fn navigate(&mut self, url: &str) -> Result<PageSnapshot, FetchError>;
}

/// Default client: one blocking HTTP session with its own cookie jar and a
/// rotated user agent. One instance per country; never shared.
pub struct HttpPageClient {
    client: Client,
}

impl HttpPageClient {
    pub fn new(page_load_timeout: Duration) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = Client::builder()
            .timeout(page_load_timeout)
            .default_headers(headers)
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        HttpPageClient { client }
    }

    fn get_random_user_agent() -> &'static str {
        let uas = [
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
            "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:121.0) Gecko/20100101 Firefox/121.0",
        ];
        use rand::Rng;
        let mut rng = rand::thread_rng();
        uas[rng.gen_range(0..uas.len())]
    }
}

impl PageClient for HttpPageClient {
    fn navigate(&mut self, url: &str) -> Result<PageSnapshot, FetchError> {
        let ua = Self::get_random_user_agent();
        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, ua)
            .send()
            .map_err(FetchError::from_reqwest)?;

        let status = resp.status();
        if status.as_u16() == 403 || status.as_u16() == 429 {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let final_url = resp.url().to_string();
        let body = resp.text().map_err(FetchError::from_reqwest)?;
        info!("Fetched {} ({} bytes)", final_url, body.len());
        Ok(PageSnapshot::new(final_url, body))
    }
}
