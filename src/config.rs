use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::scoring::category::ScoreCategory;

/// Colour used for any city without an entry.
pub const DEFAULT_CITY_COLOR: &str = "#6366f1";
/// Colour used for any category without an entry.
pub const DEFAULT_CATEGORY_COLOR: &str = "#d4a574";

static CITY_COLORS: &[(&str, &str)] = &[
    ("lucknow", "#ff6b6b"),
    ("indore", "#4ecdc4"),
    ("jaipur", "#a855f7"),
    ("nagpur", "#f59e0b"),
    ("coimbatore", "#10b981"),
    ("gurugram", "#3b82f6"),
];

static CATEGORY_COLORS: &[(&str, &str)] = &[
    ("healthcare_score", "#ef4444"),
    ("hospitality_score", "#f59e0b"),
    ("education_score", "#a855f7"),
    ("real_estate_score", "#22c55e"),
    ("future_infrastructure_score", "#3b82f6"),
    ("migration_score", "#ec4899"),
];

/// Override file layout. Both maps are optional:
/// ```json
/// {
///   "cities": { "pune": "#0ea5e9" },
///   "categories": { "migration_score": "#14b8a6" }
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
struct PaletteFile {
    #[serde(default)]
    cities: HashMap<String, String>,
    #[serde(default)]
    categories: HashMap<String, String>,
}

/// Colour lookup tables for cities (by lowercase name) and score categories.
#[derive(Debug, Clone)]
pub struct Palette {
    cities: HashMap<String, String>,
    categories: HashMap<String, String>,
}

impl Default for Palette {
    fn default() -> Self {
        let owned = |table: &[(&str, &str)]| {
            table
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>()
        };
        Self {
            cities: owned(CITY_COLORS),
            categories: owned(CATEGORY_COLORS),
        }
    }
}

impl Palette {
    /// Loads the built-in palette with overrides from the JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading palette {}", path.display()))?;
        let file: PaletteFile = serde_json::from_str(&content)
            .with_context(|| format!("parsing palette {}", path.display()))?;

        let mut palette = Self::default();
        debug!(
            cities = file.cities.len(),
            categories = file.categories.len(),
            "Applying palette overrides"
        );
        for (city, color) in file.cities {
            palette.cities.insert(city.to_lowercase(), color);
        }
        palette.categories.extend(file.categories);
        Ok(palette)
    }

    /// Loads overrides when a path is configured, otherwise the built-in palette.
    pub fn from_optional(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn city_color(&self, city: &str) -> &str {
        self.cities
            .get(&city.to_lowercase())
            .map_or(DEFAULT_CITY_COLOR, String::as_str)
    }

    pub fn category_color(&self, category: ScoreCategory) -> &str {
        self.categories
            .get(category.key())
            .map_or(DEFAULT_CATEGORY_COLOR, String::as_str)
    }
}
