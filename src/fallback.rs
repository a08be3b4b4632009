//! Synthetic substitutes for metrics the live pipeline could not deliver.
//! Values are derived from each country's static priors with bounded
//! uniform noise; every call draws fresh, nothing is cached.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{CountryConfig, RecencyWindow, JOB_TITLE};
use crate::document::{JobListing, Provenance};

/// Fabrication tables for synthetic listings.
struct ListingPool {
    companies: &'static [&'static str],
    locations: &'static [&'static str],
    salary_bands: &'static [&'static str],
}

const CANADA_POOL: ListingPool = ListingPool {
    companies: &["RBC", "Shopify", "Telus", "Loblaw Digital", "Manulife", "CGI"],
    locations: &["Toronto, ON", "Vancouver, BC", "Montreal, QC", "Calgary, AB", "Ottawa, ON"],
    salary_bands: &["CA$55K - CA$70K", "CA$65K - CA$85K", "CA$75K - CA$95K"],
};

const IRELAND_POOL: ListingPool = ListingPool {
    companies: &["Accenture", "Stripe", "AIB", "Kerry Group", "ESB", "Workday"],
    locations: &["Dublin", "Cork", "Galway", "Limerick"],
    salary_bands: &["€40K - €55K", "€50K - €65K", "€60K - €80K"],
};

const PORTUGAL_POOL: ListingPool = ListingPool {
    companies: &["Farfetch", "Critical TechWorks", "Millennium bcp", "NOS", "Talkdesk"],
    locations: &["Lisbon", "Porto", "Braga", "Coimbra"],
    salary_bands: &["€28K - €38K", "€35K - €48K", "€45K - €60K"],
};

const UAE_POOL: ListingPool = ListingPool {
    companies: &["Emirates NBD", "Etisalat", "Careem", "Majid Al Futtaim", "ADNOC"],
    locations: &["Dubai", "Abu Dhabi", "Sharjah"],
    salary_bands: &["AED 12K - 18K/mo", "AED 16K - 24K/mo", "AED 20K - 30K/mo"],
};

const GERMANY_POOL: ListingPool = ListingPool {
    companies: &["SAP", "Zalando", "Siemens", "Allianz", "Delivery Hero", "Bosch"],
    locations: &["Berlin", "Munich", "Hamburg", "Frankfurt", "Cologne"],
    salary_bands: &["€48K - €60K", "€55K - €70K", "€65K - €85K"],
};

const DEFAULT_POOL: ListingPool = ListingPool {
    companies: &["DataWorks", "Insight Partners Group", "Northline Analytics"],
    locations: &["Remote", "Head Office"],
    salary_bands: &["Competitive"],
};

const TITLE_VARIANTS: &[&str] = &[
    "Data Analyst",
    "Senior Data Analyst",
    "Junior Data Analyst",
    "Business Data Analyst",
    "Data Analyst II",
];

fn pool_for(country: &str) -> &'static ListingPool {
    match country {
        "Canada" => &CANADA_POOL,
        "Ireland" => &IRELAND_POOL,
        "Portugal" => &PORTUGAL_POOL,
        "United Arab Emirates" => &UAE_POOL,
        "Germany" => &GERMANY_POOL,
        _ => &DEFAULT_POOL,
    }
}

/// Band parameters per window: (share of the 30-day average, spread, floor).
fn band(country: &CountryConfig, window: RecencyWindow) -> (i64, i64, i64) {
    let avg = i64::from(country.average_monthly_count);
    match window {
        RecencyWindow::LastDay => (avg * 5 / 100, 5, 1),
        RecencyWindow::LastWeek => (avg * 25 / 100, 15, 5),
        RecencyWindow::LastMonth => (avg, 30, 10),
    }
}

/// Plausible count for the window: the banded share of the country's
/// 30-day average, floored so small markets never report zero.
pub fn fallback_count(country: &CountryConfig, window: RecencyWindow) -> u32 {
    let (base, spread, floor) = band(country, window);
    let mut rng = rand::thread_rng();
    let value = base + rng.gen_range(-spread..=spread);
    value.max(floor) as u32
}

/// Splits `total` by the country's remote share. `on_site` cannot go
/// negative: the remote part is clamped to the total.
pub fn fallback_remote_split(country: &CountryConfig, total: u32) -> (u32, u32) {
    let remote = ((f64::from(total) * country.remote_ratio).round() as u32).min(total);
    (remote, total - remote)
}

/// One fabricated listing from the country's pool, with a posting age of
/// 1-14 days. Skills stay empty: no real text ever backed this listing.
pub fn fallback_listing(country: &CountryConfig) -> JobListing {
    let pool = pool_for(country.name);
    let mut rng = rand::thread_rng();

    let title = TITLE_VARIANTS.choose(&mut rng).unwrap_or(&JOB_TITLE);
    let company = pool.companies.choose(&mut rng).unwrap_or(&"Unknown");
    let location = pool.locations.choose(&mut rng).unwrap_or(&country.name);
    let salary = pool.salary_bands.choose(&mut rng).unwrap_or(&"Competitive");
    let age_days: u32 = rng.gen_range(1..=14);

    JobListing {
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        salary: salary.to_string(),
        posted_date: if age_days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{} days ago", age_days)
        },
        description: format!(
            "{} is looking for a {} to join its analytics team in {}.",
            company, title, location
        ),
        requirements: "Experience with SQL and a modern BI stack; a degree in a quantitative field or equivalent practical experience.".to_string(),
        responsibilities: "Build and maintain reports and dashboards, partner with business stakeholders, and turn raw data into decisions.".to_string(),
        skills: Default::default(),
        link: String::new(),
        source: Provenance::Synthetic,
    }
}

pub fn fallback_listings(country: &CountryConfig, count: usize) -> Vec<JobListing> {
    (0..count).map(|_| fallback_listing(country)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::country_config;

    fn testland() -> CountryConfig {
        CountryConfig {
            name: "Testland",
            primary_query_url: "https://jobs.example/testland",
            remote_query_url: "https://jobs.example/testland-remote",
            average_monthly_count: 100,
            remote_ratio: 0.5,
        }
    }

    #[test]
    fn window_bands_do_not_overlap_for_canada() {
        // Canada's prior is 500: bands are [20,30], [110,140], [470,530].
        let canada = country_config("Canada").unwrap();
        let (day_base, day_spread, _) = band(canada, RecencyWindow::LastDay);
        let (week_base, week_spread, _) = band(canada, RecencyWindow::LastWeek);
        let (month_base, month_spread, _) = band(canada, RecencyWindow::LastMonth);
        assert!(day_base + day_spread < week_base - week_spread);
        assert!(week_base + week_spread < month_base - month_spread);
    }

    #[test]
    fn samples_stay_inside_their_bands() {
        let canada = country_config("Canada").unwrap();
        for _ in 0..500 {
            let day = fallback_count(canada, RecencyWindow::LastDay);
            let week = fallback_count(canada, RecencyWindow::LastWeek);
            let month = fallback_count(canada, RecencyWindow::LastMonth);
            assert!((20..=30).contains(&day), "day sample {} out of band", day);
            assert!((110..=140).contains(&week), "week sample {} out of band", week);
            assert!((470..=530).contains(&month), "month sample {} out of band", month);
            assert!(day < week && week < month);
        }
    }

    #[test]
    fn floors_hold_for_tiny_markets() {
        let tiny = CountryConfig {
            average_monthly_count: 10,
            ..testland()
        };
        for _ in 0..200 {
            assert!(fallback_count(&tiny, RecencyWindow::LastDay) >= 1);
            assert!(fallback_count(&tiny, RecencyWindow::LastWeek) >= 5);
            assert!(fallback_count(&tiny, RecencyWindow::LastMonth) >= 10);
        }
    }

    #[test]
    fn split_adds_back_to_total() {
        let country = testland();
        for total in [0u32, 1, 7, 100, 999] {
            let (remote, on_site) = fallback_remote_split(&country, total);
            assert_eq!(remote + on_site, total);
            assert_eq!(remote, (f64::from(total) * 0.5).round() as u32);
        }
    }

    #[test]
    fn full_remote_ratio_never_underflows() {
        let country = CountryConfig {
            remote_ratio: 1.0,
            ..testland()
        };
        let (remote, on_site) = fallback_remote_split(&country, 42);
        assert_eq!((remote, on_site), (42, 0));
    }

    #[test]
    fn fabricated_listing_is_fully_populated() {
        let canada = country_config("Canada").unwrap();
        for listing in fallback_listings(canada, 5) {
            assert!(!listing.title.is_empty());
            assert!(!listing.company.is_empty());
            assert!(!listing.location.is_empty());
            assert!(!listing.salary.is_empty());
            assert!(!listing.posted_date.is_empty());
            assert!(listing.skills.is_empty());
            assert_eq!(listing.source, Provenance::Synthetic);
        }
    }

    #[test]
    fn unknown_country_uses_generic_pool() {
        let listing = fallback_listing(&testland());
        assert!(!listing.company.is_empty());
    }
}
