//! Loading of the static JSON snapshot.
//!
//! The comparative report and the per-city detail reports are written at
//! build time and trusted. Files ending in `.gz` are read through a gzip
//! decoder.

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::scoring::types::{CityScores, CitySummary, ComparativeReport};

/// Suffix of the per-city detail report files, e.g. `indore_verified_report.json`.
pub const CITY_REPORT_SUFFIX: &str = "_verified_report.json";

/// On-disk shape of `comparative_report.json`.
#[derive(Debug, Deserialize)]
struct ReportFile {
    report_generated: String,
    cities: Vec<CitySummary>,
    #[serde(default)]
    ranking: Vec<String>,
}

/// Full detail record of one city.
///
/// `verified_data` is passed through untouched for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityReport {
    pub report_generated: String,
    pub city: String,
    pub state: String,
    pub population: u64,
    pub scores: CityScores,
    #[serde(default)]
    pub verified_data: serde_json::Value,
}

/// Per-city detail reports keyed by slug (lowercase city name).
#[derive(Debug, Default)]
pub struct CityDirectory {
    entries: BTreeMap<String, CityReport>,
}

impl CityDirectory {
    pub fn by_slug(&self, slug: &str) -> Option<&CityReport> {
        self.entries.get(&slug.to_lowercase())
    }

    /// All slugs, sorted.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reads a comparative report and rebuilds its ranking from the city scores.
///
/// A ranking stored in the file that disagrees with the scores is replaced
/// and logged.
pub fn load_report(path: &Path) -> Result<ComparativeReport> {
    let file: ReportFile = read_json(path)?;
    let generated_at = parse_timestamp(&file.report_generated)
        .with_context(|| format!("bad report_generated in {}", path.display()))?;

    let report = ComparativeReport::new(generated_at, file.cities);

    if !file.ranking.is_empty() && file.ranking != report.ranking() {
        warn!(
            path = %path.display(),
            stored = ?file.ranking,
            computed = ?report.ranking(),
            "Stored ranking disagrees with scores, using recomputed ranking"
        );
    }

    info!(
        path = %path.display(),
        cities = report.cities().len(),
        generated_at = %report.generated_at(),
        "Comparative report loaded"
    );
    Ok(report)
}

/// Parses a report from an in-memory JSON string.
pub fn parse_report(json: &str) -> Result<ComparativeReport> {
    let file: ReportFile = serde_json::from_str(json)?;
    let generated_at = parse_timestamp(&file.report_generated)?;
    Ok(ComparativeReport::new(generated_at, file.cities))
}

/// Loads every `<slug>_verified_report.json` (or `.json.gz`) file in `dir`.
pub fn load_city_reports(dir: &Path) -> Result<CityDirectory> {
    let mut entries = BTreeMap::new();

    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let name = name.strip_suffix(".gz").unwrap_or(name);
        let Some(slug) = name.strip_suffix(CITY_REPORT_SUFFIX) else {
            continue;
        };
        if slug.is_empty() {
            warn!(file = name, "City report without a slug skipped");
            continue;
        }

        let report: CityReport = read_json(&entry.path())?;
        debug!(slug, city = %report.city, "City report loaded");
        entries.insert(slug.to_lowercase(), report);
    }

    info!(dir = %dir.display(), count = entries.len(), "City reports loaded");
    Ok(CityDirectory { entries })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader: Box<dyn Read> = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };

    serde_json::from_reader(BufReader::new(reader))
        .with_context(|| format!("parsing {}", path.display()))
}

/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.f]` (taken as UTC), or a
/// bare date.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(ts.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(ts) = date.and_hms_opt(0, 0, 0) {
            return Ok(ts.and_utc());
        }
    }
    Err(anyhow!("unrecognised timestamp '{raw}'"))
}
