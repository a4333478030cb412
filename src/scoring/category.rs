//! Score dimensions and the keys used to select them.

use crate::error::ScoreError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One named sub-score dimension of a city.
///
/// The declaration order is the display order everywhere: radar rows,
/// leader tables and tie-breaking between equal category scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Healthcare,
    Hospitality,
    Education,
    RealEstate,
    FutureInfrastructure,
    Migration,
}

/// All categories in declared order.
pub static SCORE_CATEGORIES: [ScoreCategory; 6] = [
    ScoreCategory::Healthcare,
    ScoreCategory::Hospitality,
    ScoreCategory::Education,
    ScoreCategory::RealEstate,
    ScoreCategory::FutureInfrastructure,
    ScoreCategory::Migration,
];

impl ScoreCategory {
    /// Field name of this category in the report JSON.
    pub fn key(self) -> &'static str {
        match self {
            ScoreCategory::Healthcare => "healthcare_score",
            ScoreCategory::Hospitality => "hospitality_score",
            ScoreCategory::Education => "education_score",
            ScoreCategory::RealEstate => "real_estate_score",
            ScoreCategory::FutureInfrastructure => "future_infrastructure_score",
            ScoreCategory::Migration => "migration_score",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreCategory::Healthcare => "Healthcare",
            ScoreCategory::Hospitality => "Hospitality",
            ScoreCategory::Education => "Education",
            ScoreCategory::RealEstate => "Real Estate",
            ScoreCategory::FutureInfrastructure => "Infrastructure",
            ScoreCategory::Migration => "Migration",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ScoreCategory::Healthcare => "Hospital beds, doctors, medical colleges",
            ScoreCategory::Hospitality => "Hotels, occupancy rates, tourism",
            ScoreCategory::Education => "Universities, IIT/NIT, literacy",
            ScoreCategory::RealEstate => "Prices, appreciation, sales growth",
            ScoreCategory::FutureInfrastructure => "Metro, railways, airports",
            ScoreCategory::Migration => "Employment, population growth",
        }
    }

    /// Position in the declared order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A sortable score field: one of the categories or the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreKey {
    Category(ScoreCategory),
    Overall,
}

pub const OVERALL_KEY: &str = "overall_score";

impl ScoreKey {
    /// Resolves an optional key, falling back to the overall score when absent.
    pub fn resolve(key: Option<&str>) -> Result<Self, ScoreError> {
        key.map_or(Ok(ScoreKey::Overall), |k| k.parse())
    }

    pub fn key(self) -> &'static str {
        match self {
            ScoreKey::Category(c) => c.key(),
            ScoreKey::Overall => OVERALL_KEY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreKey::Category(c) => c.label(),
            ScoreKey::Overall => "Overall",
        }
    }
}

impl FromStr for ScoreKey {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == OVERALL_KEY {
            return Ok(ScoreKey::Overall);
        }
        SCORE_CATEGORIES
            .iter()
            .find(|c| c.key() == s)
            .map(|&c| ScoreKey::Category(c))
            .ok_or_else(|| ScoreError::InvalidCategory(s.to_string()))
    }
}

impl From<ScoreCategory> for ScoreKey {
    fn from(category: ScoreCategory) -> Self {
        ScoreKey::Category(category)
    }
}

impl fmt::Display for ScoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
