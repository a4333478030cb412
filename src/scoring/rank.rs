use crate::error::ScoreError;
use crate::scoring::category::{SCORE_CATEGORIES, ScoreCategory, ScoreKey};
use crate::scoring::types::{CategoryLeader, CategoryRank, CitySummary, names_match};

/// Sorts cities best-first on `key`.
///
/// The sort is stable: cities with equal scores keep their input order.
pub fn rank_by(cities: &[CitySummary], key: ScoreKey) -> Vec<CitySummary> {
    let mut ranked = cities.to_vec();
    ranked.sort_by(|a, b| b.scores.get(key).total_cmp(&a.scores.get(key)));
    ranked
}

/// Sorts cities best-first on the named score field, or on `overall_score`
/// when no field is given.
///
/// # Errors
///
/// Returns [`ScoreError::InvalidCategory`] for an unknown field name.
pub fn rank_all(
    cities: &[CitySummary],
    category: Option<&str>,
) -> Result<Vec<CitySummary>, ScoreError> {
    Ok(rank_by(cities, ScoreKey::resolve(category)?))
}

/// 1-based rank of `city_name` on the given field, or `None` if no city in
/// `cities` has that name (compared case-insensitively).
pub fn rank_of(
    cities: &[CitySummary],
    city_name: &str,
    category: Option<&str>,
) -> Result<Option<usize>, ScoreError> {
    let ranked = rank_all(cities, category)?;
    Ok(position_of(&ranked, city_name))
}

fn position_of(ranked: &[CitySummary], city_name: &str) -> Option<usize> {
    ranked
        .iter()
        .position(|c| c.is_named(city_name))
        .map(|i| i + 1)
}

/// The highest-scoring city on `key`. The first city in input order wins a tie.
pub fn leader_by(cities: &[CitySummary], key: ScoreKey) -> Option<&CitySummary> {
    cities.iter().fold(None, |best: Option<&CitySummary>, city| match best {
        Some(b) if b.scores.get(key) >= city.scores.get(key) => Some(b),
        _ => Some(city),
    })
}

/// The leader of the named score field; `None` only when `cities` is empty.
pub fn category_leader(
    cities: &[CitySummary],
    category: &str,
) -> Result<Option<CitySummary>, ScoreError> {
    let key: ScoreKey = category.parse()?;
    Ok(leader_by(cities, key).cloned())
}

/// Leader of every category, in declared category order.
pub fn category_leaders(cities: &[CitySummary]) -> Vec<CategoryLeader> {
    SCORE_CATEGORIES
        .iter()
        .filter_map(|&category| {
            leader_by(cities, category.into()).map(|city| CategoryLeader {
                category,
                city: city.name.clone(),
                score: city.scores.category(category),
            })
        })
        .collect()
}

/// Where `city_name` places in each category across `cities`.
pub fn category_ranks(cities: &[CitySummary], city_name: &str) -> Option<Vec<CategoryRank>> {
    let city = cities.iter().find(|c| c.is_named(city_name))?;

    SCORE_CATEGORIES
        .iter()
        .map(|&category: &ScoreCategory| {
            let ranked = rank_by(cities, category.into());
            position_of(&ranked, &city.name).map(|rank| CategoryRank {
                category,
                rank,
                score: city.scores.category(category),
            })
        })
        .collect()
}

/// Picks the named cities out of `cities`, in the order they were asked for.
///
/// Names are matched case-insensitively; unknown and repeated names are skipped.
pub fn select_cities<S: AsRef<str>>(cities: &[CitySummary], names: &[S]) -> Vec<CitySummary> {
    let mut selected: Vec<CitySummary> = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        if selected.iter().any(|c| names_match(&c.name, name)) {
            continue;
        }
        if let Some(city) = cities.iter().find(|c| c.is_named(name)) {
            selected.push(city.clone());
        }
    }
    selected
}
