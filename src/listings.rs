//! Live job listings lifted from a results-page snapshot. Card and field
//! selectors are ordered fallback lists; markup drift is handled here, not
//! in the orchestration code.

use log::debug;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::document::{JobListing, Provenance};
use crate::page_client::PageSnapshot;
use crate::skill_extractor::SkillExtractor;

const CARD_SELECTORS: &[&str] = &[
    "[data-test=\"jobListing\"]",
    "li.react-job-listing",
    "li[data-id]",
    ".jobCard",
    "article.job",
];

const TITLE_SELECTORS: &[&str] = &[
    "[data-test=\"job-title\"]",
    ".jobTitle",
    ".job-title",
    "a.jobLink",
    "h2",
    "h3",
];

const COMPANY_SELECTORS: &[&str] = &[
    "[data-test=\"employer-name\"]",
    ".employerName",
    ".companyName",
    ".company",
];

const LOCATION_SELECTORS: &[&str] = &[
    "[data-test=\"emp-location\"]",
    ".location",
    ".jobLocation",
];

const SALARY_SELECTORS: &[&str] = &[
    "[data-test=\"detailSalary\"]",
    ".salaryEstimate",
    ".salary",
];

const POSTED_SELECTORS: &[&str] = &[
    "[data-test=\"job-age\"]",
    ".jobAge",
    ".listing-age",
    ".posted",
];

const DESCRIPTION_SELECTORS: &[&str] = &[
    "[data-test=\"descSnippet\"]",
    ".jobDescriptionContent",
    ".job-snippet",
    ".description",
    "p",
];

/// Extracts up to `limit` listings from the snapshot. Cards missing a
/// title or company are skipped; an empty result is a valid outcome the
/// caller answers with fabricated listings.
pub fn extract_listings(
    page: &PageSnapshot,
    limit: usize,
    skills: &SkillExtractor,
) -> Vec<JobListing> {
    let document = Html::parse_document(&page.body);
    let base_url = Url::parse(&page.url).ok();
    let mut listings = Vec::new();

    for sel_str in CARD_SELECTORS {
        let selector = Selector::parse(sel_str).unwrap();
        for card in document.select(&selector) {
            if listings.len() >= limit {
                break;
            }
            match listing_from_card(card, base_url.as_ref(), skills) {
                Some(listing) => listings.push(listing),
                None => debug!("Skipping malformed job card under '{}'", sel_str),
            }
        }
        // The first selector generation that produced cards is the right
        // one for this markup; later ones would double-count.
        if !listings.is_empty() {
            break;
        }
    }

    listings
}

fn listing_from_card(
    card: ElementRef,
    base_url: Option<&Url>,
    skills: &SkillExtractor,
) -> Option<JobListing> {
    let title = first_text(card, TITLE_SELECTORS)?;
    let company = first_text(card, COMPANY_SELECTORS)?;
    let location = first_text(card, LOCATION_SELECTORS).unwrap_or_default();
    let salary = first_text(card, SALARY_SELECTORS).unwrap_or_default();
    let posted_date = first_text(card, POSTED_SELECTORS).unwrap_or_default();
    let description = first_text(card, DESCRIPTION_SELECTORS).unwrap_or_default();

    let skill_text = format!("{} {}", title, description);

    Some(JobListing {
        link: card_link(card, base_url).unwrap_or_default(),
        skills: skills.extract_skills(&skill_text),
        title,
        company,
        location,
        salary,
        posted_date,
        description,
        requirements: String::new(),
        responsibilities: String::new(),
        source: Provenance::Live,
    })
}

/// First non-empty text under any of the selectors, in order.
fn first_text(card: ElementRef, selectors: &[&str]) -> Option<String> {
    for sel_str in selectors {
        let selector = Selector::parse(sel_str).unwrap();
        if let Some(element) = card.select(&selector).next() {
            let text = element
                .text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

fn card_link(card: ElementRef, base_url: Option<&Url>) -> Option<String> {
    let selector = Selector::parse("a[href]").unwrap();
    let href = card
        .select(&selector)
        .next()
        .and_then(|a| a.value().attr("href"))?;
    match base_url {
        Some(base) => base.join(href).map(|u| u.to_string()).ok(),
        None => Some(href.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"
        <html><head><title>87 Data Analyst Jobs</title></head><body>
        <ul>
          <li data-id="101">
            <a class="jobTitle" href="/job/101">Data Analyst</a>
            <span class="companyName">Acme Insights</span>
            <span class="location">Toronto, ON</span>
            <span class="salaryEstimate">CA$70K - CA$90K</span>
            <span class="jobAge">3d</span>
            <p>SQL and Tableau reporting for the growth team.</p>
          </li>
          <li data-id="102">
            <a class="jobTitle" href="/job/102">Senior Data Analyst</a>
            <span class="companyName">Northwind</span>
            <span class="location">Remote</span>
          </li>
          <li data-id="103">
            <span class="companyName">Cardless Card</span>
          </li>
        </ul>
        </body></html>"#;

    fn snapshot() -> PageSnapshot {
        PageSnapshot::new(
            "https://www.glassdoor.com/Job/canada-data-analyst-jobs.htm".to_string(),
            RESULTS_PAGE.to_string(),
        )
    }

    #[test]
    fn extracts_cards_and_skips_malformed() {
        let listings = extract_listings(&snapshot(), 5, &SkillExtractor::new());
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].title, "Data Analyst");
        assert_eq!(listings[0].company, "Acme Insights");
        assert_eq!(listings[0].location, "Toronto, ON");
        assert_eq!(listings[0].salary, "CA$70K - CA$90K");
        assert_eq!(listings[0].posted_date, "3d");
        assert_eq!(listings[0].source, Provenance::Live);
    }

    #[test]
    fn link_joined_against_page_url() {
        let listings = extract_listings(&snapshot(), 5, &SkillExtractor::new());
        assert_eq!(listings[0].link, "https://www.glassdoor.com/job/101");
    }

    #[test]
    fn skills_come_from_live_text() {
        let listings = extract_listings(&snapshot(), 5, &SkillExtractor::new());
        assert!(listings[0].skills.contains("SQL"));
        assert!(listings[0].skills.contains("Tableau"));
    }

    #[test]
    fn limit_caps_the_result() {
        let listings = extract_listings(&snapshot(), 1, &SkillExtractor::new());
        assert_eq!(listings.len(), 1);
    }

    #[test]
    fn no_cards_is_empty_not_error() {
        let page = PageSnapshot::new(
            "https://www.glassdoor.com/x".to_string(),
            "<html><body><p>nothing here</p></body></html>".to_string(),
        );
        assert!(extract_listings(&page, 5, &SkillExtractor::new()).is_empty());
    }
}
