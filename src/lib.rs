pub mod challenge;
pub mod config;
pub mod count_extractor;
pub mod document;
pub mod fallback;
pub mod listings;
pub mod logger;
pub mod orchestrator;
pub mod pacing;
pub mod page_client;
pub mod skill_extractor;

// Exporting types for convenience
pub use config::{CountryConfig, RecencyWindow, ScrapeOptions, COUNTRIES, JOB_TITLE};
pub use count_extractor::{CountExtractor, ExtractionOutcome};
pub use document::{CountryResult, JobListing, Provenance, ScrapeDocument};
pub use orchestrator::ScrapeOrchestrator;
pub use page_client::{FetchError, HttpPageClient, PageClient, PageSnapshot};
pub use skill_extractor::SkillExtractor;
