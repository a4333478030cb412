//! Investor-facing classification of a city.
//!
//! Both classifiers compare raw sub-scores against fixed cutoffs. A cutoff
//! is exclusive: a score must be strictly above it to count.

use crate::scoring::category::ScoreCategory;
use crate::scoring::types::CitySummary;
use serde::Serialize;
use std::fmt;

/// Coarse investment profile of a city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProfileLabel {
    #[serde(rename = "Earning Capital")]
    EarningCapital,
    #[serde(rename = "Living Value")]
    LivingValue,
    #[serde(rename = "Future Growth")]
    FutureGrowth,
    Balanced,
}

impl ProfileLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileLabel::EarningCapital => "Earning Capital",
            ProfileLabel::LivingValue => "Living Value",
            ProfileLabel::FutureGrowth => "Future Growth",
            ProfileLabel::Balanced => "Balanced",
        }
    }
}

impl fmt::Display for ProfileLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A profile applies when every listed category beats its cutoff.
struct ProfileRule {
    label: ProfileLabel,
    above: &'static [(ScoreCategory, f64)],
}

/// Evaluated top to bottom; the first matching rule wins.
static PROFILE_RULES: &[ProfileRule] = &[
    ProfileRule {
        label: ProfileLabel::EarningCapital,
        above: &[(ScoreCategory::RealEstate, 70.0), (ScoreCategory::Migration, 65.0)],
    },
    ProfileRule {
        label: ProfileLabel::LivingValue,
        above: &[(ScoreCategory::Healthcare, 65.0), (ScoreCategory::Education, 60.0)],
    },
    ProfileRule {
        label: ProfileLabel::FutureGrowth,
        above: &[(ScoreCategory::FutureInfrastructure, 70.0)],
    },
];

/// Tags that each apply on their own cutoff; several may match at once.
static BEST_FOR_RULES: &[(ScoreCategory, f64, &str)] = &[
    (ScoreCategory::RealEstate, 70.0, "Long-term investors"),
    (ScoreCategory::Education, 65.0, "Families"),
    (ScoreCategory::FutureInfrastructure, 70.0, "Growth seekers"),
    (ScoreCategory::Migration, 65.0, "Hybrid workers"),
];

pub const FALLBACK_TAG: &str = "Value seekers";

fn beats(city: &CitySummary, category: ScoreCategory, cutoff: f64) -> bool {
    city.scores.category(category) > cutoff
}

/// Assigns exactly one profile to `city`, falling back to [`ProfileLabel::Balanced`].
pub fn classify_profile(city: &CitySummary) -> ProfileLabel {
    PROFILE_RULES
        .iter()
        .find(|rule| rule.above.iter().all(|&(c, cutoff)| beats(city, c, cutoff)))
        .map_or(ProfileLabel::Balanced, |rule| rule.label)
}

/// Audience tags for `city`, in rule order. Never empty.
pub fn best_for_tags(city: &CitySummary) -> Vec<&'static str> {
    let tags: Vec<&'static str> = BEST_FOR_RULES
        .iter()
        .filter(|&&(c, cutoff, _)| beats(city, c, cutoff))
        .map(|&(_, _, tag)| tag)
        .collect();

    if tags.is_empty() {
        vec![FALLBACK_TAG]
    } else {
        tags
    }
}
