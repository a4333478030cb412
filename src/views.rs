//! Ready-to-render view records assembled from the scoring functions.

use serde::Serialize;

use crate::config::Palette;
use crate::scoring::category::{SCORE_CATEGORIES, ScoreKey};
use crate::scoring::profile::{ProfileLabel, best_for_tags, classify_profile};
use crate::scoring::rank::{category_ranks, rank_by, select_cities};
use crate::scoring::rating::{Rating, ScoreBand, format_population, rating, score_band};
use crate::scoring::strengths::{strongest_categories, weakest_categories};
use crate::scoring::types::{
    CategoryRank, CategoryScore, CitySummary, ComparativeReport, RadarPoint,
};

/// One line of a leaderboard.
#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub city: String,
    pub state: String,
    pub score: f64,
    pub rating: Rating,
    pub band: ScoreBand,
    pub color: String,
}

/// Leaderboard of all cities on `key`.
pub fn leaderboard(cities: &[CitySummary], key: ScoreKey, palette: &Palette) -> Vec<RankedEntry> {
    rank_by(cities, key)
        .into_iter()
        .enumerate()
        .map(|(i, city)| {
            let score = city.scores.get(key);
            RankedEntry {
                rank: i + 1,
                color: palette.city_color(&city.name).to_string(),
                city: city.name,
                state: city.state,
                score,
                rating: rating(score),
                band: score_band(score),
            }
        })
        .collect()
}

/// Everything the city detail page shows about one city.
#[derive(Debug, Clone, Serialize)]
pub struct CityProfile {
    pub city: String,
    pub state: String,
    pub population: u64,
    pub population_display: String,
    pub overall_score: f64,
    pub overall_rank: usize,
    pub rating: Rating,
    pub color: String,
    pub profile: ProfileLabel,
    pub best_for: Vec<&'static str>,
    pub strengths: Vec<CategoryScore>,
    pub weaknesses: Vec<CategoryScore>,
    pub category_ranks: Vec<CategoryRank>,
}

/// Builds the detail view of `name`, or `None` if the report has no such city.
pub fn city_profile(
    report: &ComparativeReport,
    name: &str,
    highlights: usize,
    palette: &Palette,
) -> Option<CityProfile> {
    let city = report.city(name)?;
    let overall_rank = report.overall_rank(&city.name)?;
    let category_ranks = category_ranks(report.cities(), &city.name)?;

    Some(CityProfile {
        city: city.name.clone(),
        state: city.state.clone(),
        population: city.population,
        population_display: format_population(city.population),
        overall_score: city.scores.overall_score,
        overall_rank,
        rating: rating(city.scores.overall_score),
        color: palette.city_color(&city.name).to_string(),
        profile: classify_profile(city),
        best_for: best_for_tags(city),
        strengths: strongest_categories(city, highlights),
        weaknesses: weakest_categories(city, highlights),
        category_ranks,
    })
}

/// Fewest and most cities a comparison shows.
pub const MIN_COMPARE: usize = 2;
pub const MAX_COMPARE: usize = 4;

/// Cities compared when none are named: the top of the overall ranking.
pub const DEFAULT_COMPARE: usize = 3;

/// Resolves the cities to compare, listed in overall-ranking order.
///
/// An empty `names` picks the first [`DEFAULT_COMPARE`] cities of the
/// ranking. Unknown and repeated names are dropped; the count is not
/// checked here.
pub fn compare_selection<S: AsRef<str>>(
    report: &ComparativeReport,
    names: &[S],
) -> Vec<CitySummary> {
    if names.is_empty() {
        let top: Vec<&str> = report
            .ranking()
            .iter()
            .take(DEFAULT_COMPARE)
            .map(String::as_str)
            .collect();
        return select_cities(report.cities(), &top);
    }

    let mut selected = select_cities(report.cities(), names);
    selected.sort_by_key(|c| report.overall_rank(&c.name));
    selected
}

/// One line of the side-by-side comparison: a score field across the
/// selected cities, and every city holding the top score on it.
#[derive(Debug, Clone, Serialize)]
pub struct CompareRow {
    pub key: &'static str,
    pub label: &'static str,
    pub scores: Vec<RadarPoint>,
    pub best: Vec<String>,
}

/// Comparison table of the selected cities: every category, then the overall score.
pub fn compare_rows(selected: &[CitySummary]) -> Vec<CompareRow> {
    SCORE_CATEGORIES
        .iter()
        .map(|&c| ScoreKey::from(c))
        .chain(std::iter::once(ScoreKey::Overall))
        .map(|key| {
            let scores: Vec<RadarPoint> = selected
                .iter()
                .map(|city| RadarPoint {
                    city: city.name.clone(),
                    score: city.scores.get(key),
                })
                .collect();
            let top = scores.iter().map(|p| p.score).fold(f64::NEG_INFINITY, f64::max);
            let best = scores
                .iter()
                .filter(|p| p.score == top)
                .map(|p| p.city.clone())
                .collect();

            CompareRow {
                key: key.key(),
                label: key.label(),
                scores,
                best,
            }
        })
        .collect()
}
