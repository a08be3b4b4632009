use regex::Regex;
use scraper::{Html, Selector};

use crate::page_client::PageSnapshot;

/// Result of one count-extraction attempt. `Challenged` is produced by the
/// orchestrator when the detector trips before extraction runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Count(u32),
    Challenged,
    NotFound,
}

/// Structural probe targets for the result count, in fallback order.
/// Updated here when the site markup shifts; the extraction logic below
/// never changes with it.
const COUNT_SELECTORS: &[&str] = &[
    "[data-test=\"jobCount\"]",
    ".jobsCount",
    ".count",
    "header h1",
    ".job-search-key-1mn3ow8",
    ".heading5",
    "h1",
];

pub struct CountExtractor {
    keyword_count: Regex,
    digit_group: Regex,
    title_leading: Regex,
}

impl CountExtractor {
    pub fn new(job_title: &str) -> Self {
        CountExtractor {
            // "1,234 jobs", "1,234 Data Analyst jobs", "showing 1,234 jobs"
            keyword_count: Regex::new(&format!(
                r"(?i)\b([0-9][0-9,]*)\s+(?:{}\s+)?jobs\b",
                regex::escape(job_title)
            ))
            .unwrap(),
            digit_group: Regex::new(r"[0-9][0-9,]*").unwrap(),
            title_leading: Regex::new(r"^\s*([0-9][0-9,]*)").unwrap(),
        }
    }

    /// Ordered strategies, first hit wins: keyword regex over the raw body,
    /// then the structural selector probe, then leading digits in the page
    /// title. `NotFound` is a valid outcome, not an error.
    pub fn extract_count(&self, page: &PageSnapshot) -> ExtractionOutcome {
        if let Some(n) = self.keyword_scan(&page.body) {
            return ExtractionOutcome::Count(n);
        }
        if let Some(n) = self.probe_selectors(&page.body) {
            return ExtractionOutcome::Count(n);
        }
        if let Some(n) = self.title_scan(&page.title) {
            return ExtractionOutcome::Count(n);
        }
        ExtractionOutcome::NotFound
    }

    fn keyword_scan(&self, body: &str) -> Option<u32> {
        self.keyword_count
            .captures(body)
            .and_then(|cap| parse_digit_group(cap.get(1)?.as_str()))
    }

    fn probe_selectors(&self, body: &str) -> Option<u32> {
        let document = Html::parse_document(body);
        for sel_str in COUNT_SELECTORS {
            let selector = Selector::parse(sel_str).unwrap();
            for element in document.select(&selector) {
                let text = element.text().collect::<Vec<_>>().join(" ");
                if let Some(m) = self.digit_group.find(&text) {
                    if let Some(n) = parse_digit_group(m.as_str()) {
                        return Some(n);
                    }
                }
            }
        }
        None
    }

    fn title_scan(&self, title: &str) -> Option<u32> {
        self.title_leading
            .captures(title)
            .and_then(|cap| parse_digit_group(cap.get(1)?.as_str()))
    }
}

/// Strips thousands separators and parses the remaining digits.
fn parse_digit_group(raw: &str) -> Option<u32> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
