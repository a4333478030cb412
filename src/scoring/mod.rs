//! Comparative scoring over a snapshot of city score records.
//!
//! Everything in this module is a pure function of its arguments: inputs
//! are borrowed, results are fresh values, and nothing here performs I/O.
//! The selection of cities a view works on is always passed in explicitly.

pub mod category;
pub mod profile;
pub mod radar;
pub mod rank;
pub mod rating;
pub mod strengths;
pub mod types;

pub use category::{SCORE_CATEGORIES, ScoreCategory, ScoreKey};
pub use profile::{ProfileLabel, best_for_tags, classify_profile};
pub use radar::{build_radar_rows, radar_column};
pub use rank::{
    category_leader, category_leaders, category_ranks, leader_by, rank_all, rank_by, rank_of,
    select_cities,
};
pub use rating::{Rating, ScoreBand, format_population, rating, score_band};
pub use strengths::{DEFAULT_HIGHLIGHTS, strongest_categories, weakest_categories};
pub use types::{
    CategoryLeader, CategoryRank, CategoryScore, CityScores, CitySummary, ComparativeReport,
    RadarPoint, RadarRow,
};
