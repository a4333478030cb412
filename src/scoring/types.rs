//! Value records shared by the aggregator, the loader and the output layer.

use crate::scoring::category::{ScoreCategory, ScoreKey};
use crate::scoring::rank::rank_by;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pre-computed sub-scores for one city, each on a 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CityScores {
    pub healthcare_score: f64,
    pub hospitality_score: f64,
    pub education_score: f64,
    pub real_estate_score: f64,
    pub future_infrastructure_score: f64,
    pub migration_score: f64,
    pub overall_score: f64,
}

impl CityScores {
    pub fn category(&self, category: ScoreCategory) -> f64 {
        match category {
            ScoreCategory::Healthcare => self.healthcare_score,
            ScoreCategory::Hospitality => self.hospitality_score,
            ScoreCategory::Education => self.education_score,
            ScoreCategory::RealEstate => self.real_estate_score,
            ScoreCategory::FutureInfrastructure => self.future_infrastructure_score,
            ScoreCategory::Migration => self.migration_score,
        }
    }

    pub fn get(&self, key: ScoreKey) -> f64 {
        match key {
            ScoreKey::Category(c) => self.category(c),
            ScoreKey::Overall => self.overall_score,
        }
    }
}

/// One city row of the comparative report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CitySummary {
    #[serde(rename = "city")]
    pub name: String,
    pub state: String,
    pub population: u64,
    pub scores: CityScores,
}

impl CitySummary {
    /// Case-insensitive identity check.
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// URL slug of the city, as used by the per-city report files.
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }
}

/// The comparative snapshot: every city plus the overall ranking.
///
/// `ranking` is derived from `cities` on construction and is never taken
/// from the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparativeReport {
    #[serde(rename = "report_generated")]
    generated_at: DateTime<Utc>,
    cities: Vec<CitySummary>,
    ranking: Vec<String>,
}

impl ComparativeReport {
    pub fn new(generated_at: DateTime<Utc>, cities: Vec<CitySummary>) -> Self {
        let ranking = overall_ranking(&cities);
        Self {
            generated_at,
            cities,
            ranking,
        }
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn cities(&self) -> &[CitySummary] {
        &self.cities
    }

    /// City names, best to worst by overall score.
    pub fn ranking(&self) -> &[String] {
        &self.ranking
    }

    /// Returns a report over a new city set, with the ranking recomputed.
    pub fn with_cities(&self, cities: Vec<CitySummary>) -> Self {
        Self::new(self.generated_at, cities)
    }

    pub fn city(&self, name: &str) -> Option<&CitySummary> {
        self.cities.iter().find(|c| c.is_named(name))
    }

    /// 1-based overall rank of `name`, if present.
    pub fn overall_rank(&self, name: &str) -> Option<usize> {
        self.ranking
            .iter()
            .position(|n| names_match(n, name))
            .map(|i| i + 1)
    }
}

/// City names are unique keys regardless of case.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn overall_ranking(cities: &[CitySummary]) -> Vec<String> {
    rank_by(cities, ScoreKey::Overall)
        .into_iter()
        .map(|c| c.name)
        .collect()
}

/// A single category's score for one city.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: ScoreCategory,
    pub score: f64,
}

/// The best city of one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryLeader {
    pub category: ScoreCategory,
    pub city: String,
    pub score: f64,
}

/// Where one city places within a single category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryRank {
    pub category: ScoreCategory,
    pub rank: usize,
    pub score: f64,
}

/// One city's value on a radar axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPoint {
    pub city: String,
    pub score: f64,
}

/// One radar axis: a category and the score of every selected city on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarRow {
    pub category: &'static str,
    pub key: ScoreCategory,
    pub points: Vec<RadarPoint>,
}

impl RadarRow {
    /// Score of `city` on this axis, matching the name case-insensitively.
    pub fn score_for(&self, city: &str) -> Option<f64> {
        self.points
            .iter()
            .find(|p| names_match(&p.city, city))
            .map(|p| p.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn city(name: &str, overall: f64) -> CitySummary {
        CitySummary {
            name: name.to_string(),
            state: "Test".to_string(),
            population: 1_000,
            scores: CityScores {
                overall_score: overall,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_report_ranking_is_derived() {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
        let report = ComparativeReport::new(
            at,
            vec![city("Indore", 82.5), city("Nagpur", 77.0), city("Jaipur", 91.2)],
        );

        assert_eq!(report.ranking(), ["Jaipur", "Indore", "Nagpur"]);
        assert_eq!(report.overall_rank("nagpur"), Some(3));
        assert_eq!(report.overall_rank("Pune"), None);
    }

    #[test]
    fn test_with_cities_recomputes_ranking() {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
        let report = ComparativeReport::new(at, vec![city("A", 10.0), city("B", 20.0)]);
        let updated = report.with_cities(vec![city("A", 30.0), city("B", 20.0), city("C", 25.0)]);

        assert_eq!(report.ranking(), ["B", "A"]);
        assert_eq!(updated.ranking(), ["A", "C", "B"]);
        assert_eq!(updated.generated_at(), at);
    }

    #[test]
    fn test_city_lookup_ignores_case() {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap();
        let report = ComparativeReport::new(at, vec![city("Gurugram", 70.0)]);

        assert!(report.city("GURUGRAM").is_some());
        assert!(report.city("Gurgaon").is_none());
    }

    #[test]
    fn test_summary_json_uses_city_field() {
        let json = serde_json::to_value(city("Lucknow", 60.0)).unwrap();
        assert_eq!(json["city"], "Lucknow");
        assert_eq!(json["scores"]["overall_score"], 60.0);
    }
}
