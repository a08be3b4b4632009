use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

/// The job title every query is scoped to.
pub const JOB_TITLE: &str = "Data Analyst";

/// One supported country: its two query endpoints plus the statistical
/// priors the fallback generator draws from.
#[derive(Debug, Clone)]
pub struct CountryConfig {
    pub name: &'static str,
    pub primary_query_url: &'static str,
    pub remote_query_url: &'static str,
    pub average_monthly_count: u32,
    pub remote_ratio: f64,
}

/// Static country table. Loaded once, read-only for the process lifetime.
/// Country names are the only valid keys into the orchestrator.
pub const COUNTRIES: &[CountryConfig] = &[
    CountryConfig {
        name: "Canada",
        primary_query_url: "https://www.glassdoor.com/Job/canada-data-analyst-jobs-SRCH_IL.0,6_IN3_KO7,19.htm",
        remote_query_url: "https://www.glassdoor.com/Job/canada-remote-data-analyst-jobs-SRCH_IL.0,6_IN3_KO7,27.htm",
        average_monthly_count: 500,
        remote_ratio: 0.35,
    },
    CountryConfig {
        name: "Ireland",
        primary_query_url: "https://www.glassdoor.com/Job/ireland-data-analyst-jobs-SRCH_IL.0,7_IN70_KO8,20.htm",
        remote_query_url: "https://www.glassdoor.com/Job/ireland-remote-data-analyst-jobs-SRCH_IL.0,7_IN70_KO8,28.htm",
        average_monthly_count: 220,
        remote_ratio: 0.40,
    },
    CountryConfig {
        name: "Portugal",
        primary_query_url: "https://www.glassdoor.com/Job/portugal-data-analyst-jobs-SRCH_IL.0,8_IN195_KO9,21.htm",
        remote_query_url: "https://www.glassdoor.com/Job/portugal-remote-data-analyst-jobs-SRCH_IL.0,8_IN195_KO9,29.htm",
        average_monthly_count: 180,
        remote_ratio: 0.30,
    },
    CountryConfig {
        name: "United Arab Emirates",
        primary_query_url: "https://www.glassdoor.com/Job/united-arab-emirates-data-analyst-jobs-SRCH_IL.0,20_IN6_KO21,33.htm",
        remote_query_url: "https://www.glassdoor.com/Job/united-arab-emirates-remote-data-analyst-jobs-SRCH_IL.0,20_IN6_KO21,41.htm",
        average_monthly_count: 260,
        remote_ratio: 0.20,
    },
    CountryConfig {
        name: "Germany",
        primary_query_url: "https://www.glassdoor.com/Job/germany-data-analyst-jobs-SRCH_IL.0,7_IN96_KO8,20.htm",
        remote_query_url: "https://www.glassdoor.com/Job/germany-remote-data-analyst-jobs-SRCH_IL.0,7_IN96_KO8,28.htm",
        average_monthly_count: 650,
        remote_ratio: 0.30,
    },
];

pub fn country_config(name: &str) -> Option<&'static CountryConfig> {
    COUNTRIES.iter().find(|c| c.name == name)
}

/// Posting-age lookback periods. The numeric value feeds the `fromAge`
/// query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecencyWindow {
    LastDay,
    LastWeek,
    LastMonth,
}

impl RecencyWindow {
    pub const ALL: [RecencyWindow; 3] = [
        RecencyWindow::LastDay,
        RecencyWindow::LastWeek,
        RecencyWindow::LastMonth,
    ];

    pub fn days(self) -> u32 {
        match self {
            RecencyWindow::LastDay => 1,
            RecencyWindow::LastWeek => 7,
            RecencyWindow::LastMonth => 30,
        }
    }
}

/// Runtime knobs for a scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeOptions {
    /// Hard cap on a single page load.
    pub page_load_timeout: Duration,
    /// Seconds slept between live fetches, picked uniformly per fetch.
    pub think_time_secs: RangeInclusive<u64>,
    /// Listings kept (live) or fabricated (fallback) per country.
    pub listing_limit: usize,
    pub output_path: PathBuf,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        ScrapeOptions {
            page_load_timeout: Duration::from_secs(60),
            think_time_secs: 2..=5,
            listing_limit: 5,
            output_path: PathBuf::from("data/data.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn country_table_is_well_formed() {
        let mut names = HashSet::new();
        for country in COUNTRIES {
            assert!(names.insert(country.name), "duplicate entry: {}", country.name);
            assert!(
                (0.0..=1.0).contains(&country.remote_ratio),
                "{} remote_ratio out of range",
                country.name
            );
            assert!(country.average_monthly_count > 0);
            assert!(country.primary_query_url.starts_with("https://"));
            assert!(country.remote_query_url.starts_with("https://"));
        }
    }

    #[test]
    fn lookup_by_name() {
        assert!(country_config("Canada").is_some());
        assert!(country_config("canada").is_none());
        assert!(country_config("Atlantis").is_none());
    }

    #[test]
    fn window_days() {
        assert_eq!(RecencyWindow::LastDay.days(), 1);
        assert_eq!(RecencyWindow::LastWeek.days(), 7);
        assert_eq!(RecencyWindow::LastMonth.days(), 30);
    }
}
