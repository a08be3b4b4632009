use log::{error, info, warn};
use url::Url;

use crate::challenge::{self, Classification};
use crate::config::{country_config, CountryConfig, RecencyWindow, ScrapeOptions, COUNTRIES, JOB_TITLE};
use crate::count_extractor::{CountExtractor, ExtractionOutcome};
use crate::document::{CountryResult, Provenance};
use crate::fallback;
use crate::listings;
use crate::page_client::{PageClient, PageSnapshot};
use crate::pacing;
use crate::skill_extractor::SkillExtractor;

/// Per-country extraction mode. Once a country falls back it stays there
/// for the rest of that country's metrics; the next country starts over
/// in `Live`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CountryMode {
    Live,
    Fallback,
}

/// Drives the fetch -> classify -> extract -> fall-back sequence for each
/// country and metric. Never fails past its own boundary: every call
/// produces a complete `CountryResult`.
pub struct ScrapeOrchestrator {
    options: ScrapeOptions,
    counts: CountExtractor,
    skills: SkillExtractor,
}

impl ScrapeOrchestrator {
    pub fn new(options: ScrapeOptions) -> Self {
        ScrapeOrchestrator {
            options,
            counts: CountExtractor::new(JOB_TITLE),
            skills: SkillExtractor::new(),
        }
    }

    /// Processes every configured country sequentially. `new_session`
    /// supplies a fresh, isolated page client per country.
    pub fn scrape_all<F>(&self, mut new_session: F) -> Vec<CountryResult>
    where
        F: FnMut() -> Box<dyn PageClient>,
    {
        COUNTRIES
            .iter()
            .map(|cfg| {
                info!("Processing country: {}", cfg.name);
                let mut client = new_session();
                self.scrape_configured(client.as_mut(), cfg)
            })
            .collect()
    }

    /// Entry point keyed by country name. An unknown name is a caller
    /// contract violation: it is refused with a zeroed, empty result
    /// rather than an error.
    pub fn scrape_country(&self, client: &mut dyn PageClient, name: &str) -> CountryResult {
        match country_config(name) {
            Some(cfg) => self.scrape_configured(client, cfg),
            None => {
                error!("No configuration found for country: {}", name);
                CountryResult {
                    country: name.to_string(),
                    last_24h: 0,
                    last_7d: 0,
                    last_30d: 0,
                    remote: 0,
                    on_site: 0,
                    source: Provenance::Synthetic,
                    job_listings: Vec::new(),
                }
            }
        }
    }

    pub fn scrape_configured(
        &self,
        client: &mut dyn PageClient,
        cfg: &CountryConfig,
    ) -> CountryResult {
        info!("Starting scrape for {}", cfg.name);
        let mut mode = CountryMode::Live;
        let mut live_metrics = 0u32;
        let mut fallback_metrics = 0u32;

        // Recency-window counts, in order; the 30-day snapshot doubles as
        // the listing source later.
        let mut month_snapshot: Option<PageSnapshot> = None;
        let mut counts = [0u32; 3];
        for (slot, window) in RecencyWindow::ALL.iter().enumerate() {
            counts[slot] = match mode {
                CountryMode::Live => {
                    let url = window_url(cfg.primary_query_url, window.days());
                    let (outcome, snapshot) = self.attempt_live(client, &url);
                    pacing::think(&self.options.think_time_secs);
                    match outcome {
                        ExtractionOutcome::Count(n) => {
                            live_metrics += 1;
                            if *window == RecencyWindow::LastMonth {
                                month_snapshot = snapshot;
                            }
                            info!(
                                "Found {} jobs in {} for last {} days",
                                n,
                                cfg.name,
                                window.days()
                            );
                            n
                        }
                        ExtractionOutcome::Challenged | ExtractionOutcome::NotFound => {
                            warn!(
                                "Switching {} to fallback data after failed extraction",
                                cfg.name
                            );
                            mode = CountryMode::Fallback;
                            fallback_metrics += 1;
                            fallback::fallback_count(cfg, *window)
                        }
                    }
                }
                CountryMode::Fallback => {
                    fallback_metrics += 1;
                    fallback::fallback_count(cfg, *window)
                }
            };
        }

        let last_30d = counts[2];

        // Remote count; on-site is always derived from this document's own
        // 30-day total so the pair stays consistent in either mode.
        let (remote, on_site) = match mode {
            CountryMode::Live => {
                let (outcome, _) = self.attempt_live(client, cfg.remote_query_url);
                pacing::think(&self.options.think_time_secs);
                match outcome {
                    ExtractionOutcome::Count(n) => {
                        live_metrics += 1;
                        info!("Found {} remote jobs in {}", n, cfg.name);
                        (n, last_30d.saturating_sub(n))
                    }
                    ExtractionOutcome::Challenged | ExtractionOutcome::NotFound => {
                        warn!(
                            "Switching {} to fallback data for the remote split",
                            cfg.name
                        );
                        mode = CountryMode::Fallback;
                        fallback_metrics += 1;
                        fallback::fallback_remote_split(cfg, last_30d)
                    }
                }
            }
            CountryMode::Fallback => {
                fallback_metrics += 1;
                fallback::fallback_remote_split(cfg, last_30d)
            }
        };

        // Listings: live cards from the 30-day page while the country is
        // still live; fabricated otherwise. A card-less live page falls
        // back on listings alone without flipping the count mode.
        let mut job_listings = Vec::new();
        if mode == CountryMode::Live {
            if let Some(snapshot) = &month_snapshot {
                job_listings =
                    listings::extract_listings(snapshot, self.options.listing_limit, &self.skills);
            }
        }
        if job_listings.is_empty() {
            if mode == CountryMode::Live {
                info!("No job cards found for {}; fabricating listings", cfg.name);
            }
            fallback_metrics += 1;
            job_listings = fallback::fallback_listings(cfg, self.options.listing_limit);
        } else {
            live_metrics += 1;
        }

        let source = match (live_metrics, fallback_metrics) {
            (0, _) => Provenance::Synthetic,
            (_, 0) => Provenance::Live,
            _ => Provenance::Mixed,
        };

        let result = CountryResult {
            country: cfg.name.to_string(),
            last_24h: counts[0],
            last_7d: counts[1],
            last_30d,
            remote,
            on_site,
            source,
            job_listings,
        };
        info!(
            "Completed scrape for {}: 24h={} 7d={} 30d={} remote={} on_site={}",
            result.country, result.last_24h, result.last_7d, result.last_30d, result.remote,
            result.on_site
        );
        result
    }

    /// One live attempt: fetch, classify, extract. Transport errors and
    /// challenge pages both come back as `Challenged`; a zero count is
    /// only ever returned after the page classified `Clear`.
    fn attempt_live(
        &self,
        client: &mut dyn PageClient,
        url: &str,
    ) -> (ExtractionOutcome, Option<PageSnapshot>) {
        info!("Navigating to: {}", url);
        let snapshot = match client.navigate(url) {
            Ok(s) => s,
            Err(e) => {
                warn!("Navigation failed for {}: {}", url, e);
                return (ExtractionOutcome::Challenged, None);
            }
        };

        if challenge::classify(&snapshot.title, &snapshot.url, &snapshot.body)
            == Classification::Challenged
        {
            warn!("Challenge page detected at {}", snapshot.url);
            return (ExtractionOutcome::Challenged, Some(snapshot));
        }

        let outcome = self.counts.extract_count(&snapshot);
        (outcome, Some(snapshot))
    }
}

/// Appends the posting-age filter to a query endpoint.
fn window_url(base: &str, days: u32) -> String {
    match Url::parse(base) {
        Ok(mut url) => {
            url.query_pairs_mut()
                .append_pair("fromAge", &days.to_string());
            url.to_string()
        }
        Err(_) => format!("{}?fromAge={}", base, days),
    }
}
