use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

/// Where a value came from. Exposed so downstream consumers can tell a
/// real empty skills set from a fabricated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Live,
    Synthetic,
    Mixed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub posted_date: String,
    pub description: String,
    pub requirements: String,
    pub responsibilities: String,
    pub skills: BTreeSet<String>,
    pub link: String,
    pub source: Provenance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryResult {
    pub country: String,
    pub last_24h: u32,
    pub last_7d: u32,
    pub last_30d: u32,
    pub remote: u32,
    pub on_site: u32,
    pub source: Provenance,
    pub job_listings: Vec<JobListing>,
}

/// Root persisted artifact: one entry per configured country plus the
/// generation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeDocument {
    pub countries: BTreeMap<String, CountryResult>,
    pub last_updated: String,
}

/// Pure merge of per-country results into the canonical document shape.
/// Exactly one entry per handed-in result; no extraction logic here.
pub fn assemble(results: Vec<CountryResult>, generated_at: DateTime<Utc>) -> ScrapeDocument {
    let countries = results
        .into_iter()
        .map(|r| (r.country.clone(), r))
        .collect();
    ScrapeDocument {
        countries,
        last_updated: generated_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    }
}

/// Writes the document as pretty-printed UTF-8 JSON. The write goes to a
/// sibling temp file first and is renamed into place, so readers never see
/// a partial document.
pub fn save_document(document: &ScrapeDocument, path: &Path) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(document)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp_path = Path::new(&tmp);
    fs::write(tmp_path, json)?;
    fs::rename(tmp_path, path)?;

    info!("Data saved to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn result_for(name: &str) -> CountryResult {
        CountryResult {
            country: name.to_string(),
            last_24h: 3,
            last_7d: 20,
            last_30d: 100,
            remote: 40,
            on_site: 60,
            source: Provenance::Live,
            job_listings: vec![],
        }
    }

    #[test]
    fn one_key_per_result() {
        let generated = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
        let doc = assemble(
            vec![result_for("Canada"), result_for("Ireland"), result_for("Germany")],
            generated,
        );
        assert_eq!(doc.countries.len(), 3);
        assert!(doc.countries.contains_key("Canada"));
        assert!(doc.countries.contains_key("Ireland"));
        assert!(doc.countries.contains_key("Germany"));
    }

    #[test]
    fn timestamp_is_utc_second_precision() {
        let generated = Utc.with_ymd_and_hms(2026, 8, 7, 9, 30, 5).unwrap();
        let doc = assemble(vec![], generated);
        assert_eq!(doc.last_updated, "2026-08-07T09:30:05Z");
    }

    #[test]
    fn save_and_reload_round_trip() {
        let generated = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
        let doc = assemble(vec![result_for("Portugal")], generated);

        let dir = std::env::temp_dir().join(format!("jobmarket-doc-{}", std::process::id()));
        let path = dir.join("data.json");
        save_document(&doc, &path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: ScrapeDocument = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.countries.len(), 1);
        assert_eq!(parsed.countries["Portugal"].last_30d, 100);
        assert_eq!(parsed.last_updated, doc.last_updated);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn provenance_serializes_lowercase() {
        let json = serde_json::to_string(&Provenance::Synthetic).unwrap();
        assert_eq!(json, "\"synthetic\"");
    }
}
