use crate::scoring::category::SCORE_CATEGORIES;
use crate::scoring::types::{CategoryScore, CitySummary, RadarPoint, RadarRow};

/// Shapes the scores of the selected cities into one row per category.
///
/// Rows come out in declared category order and points in selection order,
/// so chart geometry stays the same between renders. An empty selection
/// still yields every category row, with no points.
pub fn build_radar_rows(cities: &[CitySummary]) -> Vec<RadarRow> {
    SCORE_CATEGORIES
        .iter()
        .map(|&category| RadarRow {
            category: category.label(),
            key: category,
            points: cities
                .iter()
                .map(|city| RadarPoint {
                    city: city.name.clone(),
                    score: city.scores.category(category),
                })
                .collect(),
        })
        .collect()
}

/// Reads one city's column back out of radar rows.
///
/// The name is matched case-insensitively. Returns `None` if the city is
/// missing from any row.
pub fn radar_column(rows: &[RadarRow], city: &str) -> Option<Vec<CategoryScore>> {
    rows.iter()
        .map(|row| {
            row.score_for(city).map(|score| CategoryScore {
                category: row.key,
                score,
            })
        })
        .collect()
}
