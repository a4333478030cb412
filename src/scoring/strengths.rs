use crate::scoring::category::SCORE_CATEGORIES;
use crate::scoring::types::{CategoryScore, CitySummary};
use std::cmp::Ordering;

/// Number of strengths/weaknesses shown for a city by default.
pub const DEFAULT_HIGHLIGHTS: usize = 2;

/// The `n` categories where `city` scores highest.
///
/// Equal scores keep the declared category order.
pub fn strongest_categories(city: &CitySummary, n: usize) -> Vec<CategoryScore> {
    ordered_categories(city, |a, b| b.total_cmp(&a), n)
}

/// The `n` categories where `city` scores lowest.
///
/// Equal scores keep the declared category order.
pub fn weakest_categories(city: &CitySummary, n: usize) -> Vec<CategoryScore> {
    ordered_categories(city, |a, b| a.total_cmp(&b), n)
}

fn ordered_categories<F>(city: &CitySummary, cmp: F, n: usize) -> Vec<CategoryScore>
where
    F: Fn(f64, f64) -> Ordering,
{
    let mut scores: Vec<CategoryScore> = SCORE_CATEGORIES
        .iter()
        .map(|&category| CategoryScore {
            category,
            score: city.scores.category(category),
        })
        .collect();

    scores.sort_by(|a, b| cmp(a.score, b.score));
    scores.truncate(n);
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::category::ScoreCategory;
    use crate::scoring::types::CityScores;

    fn city(scores: [f64; 6]) -> CitySummary {
        CitySummary {
            name: "Coimbatore".to_string(),
            state: "Tamil Nadu".to_string(),
            population: 1_061_447,
            scores: CityScores {
                healthcare_score: scores[0],
                hospitality_score: scores[1],
                education_score: scores[2],
                real_estate_score: scores[3],
                future_infrastructure_score: scores[4],
                migration_score: scores[5],
                overall_score: 0.0,
            },
        }
    }

    fn categories(scores: &[CategoryScore]) -> Vec<ScoreCategory> {
        scores.iter().map(|s| s.category).collect()
    }

    #[test]
    fn test_strongest_and_weakest() {
        let c = city([72.0, 35.5, 80.1, 41.0, 64.0, 58.0]);

        let strongest = strongest_categories(&c, DEFAULT_HIGHLIGHTS);
        assert_eq!(
            categories(&strongest),
            vec![ScoreCategory::Education, ScoreCategory::Healthcare]
        );
        assert_eq!(strongest[0].score, 80.1);

        let weakest = weakest_categories(&c, DEFAULT_HIGHLIGHTS);
        assert_eq!(
            categories(&weakest),
            vec![ScoreCategory::Hospitality, ScoreCategory::RealEstate]
        );
    }

    #[test]
    fn test_ties_follow_declared_order() {
        let c = city([50.0; 6]);

        assert_eq!(
            categories(&strongest_categories(&c, 3)),
            vec![
                ScoreCategory::Healthcare,
                ScoreCategory::Hospitality,
                ScoreCategory::Education
            ]
        );
        assert_eq!(
            categories(&weakest_categories(&c, 2)),
            vec![ScoreCategory::Healthcare, ScoreCategory::Hospitality]
        );
    }

    #[test]
    fn test_no_overlap_with_distinct_scores() {
        let c = city([10.0, 20.0, 30.0, 40.0, 50.0, 60.0]);
        let strongest = categories(&strongest_categories(&c, 2));
        let weakest = categories(&weakest_categories(&c, 2));

        assert!(strongest.iter().all(|s| !weakest.contains(s)));
    }

    #[test]
    fn test_n_is_clamped() {
        let c = city([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(strongest_categories(&c, 10).len(), 6);
        assert!(weakest_categories(&c, 0).is_empty());
    }
}
