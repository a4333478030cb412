//! Table lookups that turn raw scores and counts into display text.

use serde::Serialize;
use std::fmt;

/// Rating shown next to an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rating {
    Excellent,
    Good,
    Moderate,
    Developing,
    #[serde(rename = "Early Stage")]
    EarlyStage,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Moderate => "Moderate",
            Rating::Developing => "Developing",
            Rating::EarlyStage => "Early Stage",
        })
    }
}

/// Converts a 0–100 score into a [`Rating`].
///
/// | Range  | Rating      |
/// |--------|-------------|
/// | >= 75  | Excellent   |
/// | >= 60  | Good        |
/// | >= 45  | Moderate    |
/// | >= 30  | Developing  |
/// | < 30   | Early Stage |
pub fn rating(score: f64) -> Rating {
    match score {
        s if s >= 75.0 => Rating::Excellent,
        s if s >= 60.0 => Rating::Good,
        s if s >= 45.0 => Rating::Moderate,
        s if s >= 30.0 => Rating::Developing,
        _ => Rating::EarlyStage,
    }
}

/// Colour band of a single score bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    High,
    Mid,
    Low,
    Poor,
}

/// | Range  | Band |
/// |--------|------|
/// | >= 70  | High |
/// | >= 50  | Mid  |
/// | >= 30  | Low  |
/// | < 30   | Poor |
pub fn score_band(score: f64) -> ScoreBand {
    match score {
        s if s >= 70.0 => ScoreBand::High,
        s if s >= 50.0 => ScoreBand::Mid,
        s if s >= 30.0 => ScoreBand::Low,
        _ => ScoreBand::Poor,
    }
}

const CRORE: u64 = 10_000_000;
const LAKH: u64 = 100_000;

/// Formats a population in Indian units: crore (`Cr`), lakh (`L`), or
/// plain digits grouped with commas.
pub fn format_population(population: u64) -> String {
    if population >= CRORE {
        format!("{:.2} Cr", population as f64 / CRORE as f64)
    } else if population >= LAKH {
        format!("{:.2} L", population as f64 / LAKH as f64)
    } else {
        group_indian(population)
    }
}

/// Indian digit grouping: the last three digits, then pairs (`12,34,567`).
pub fn group_indian(n: u64) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_boundaries() {
        assert_eq!(rating(100.0), Rating::Excellent);
        assert_eq!(rating(75.0), Rating::Excellent);
        assert_eq!(rating(74.9), Rating::Good);
        assert_eq!(rating(60.0), Rating::Good);
        assert_eq!(rating(59.9), Rating::Moderate);
        assert_eq!(rating(45.0), Rating::Moderate);
        assert_eq!(rating(44.9), Rating::Developing);
        assert_eq!(rating(30.0), Rating::Developing);
        assert_eq!(rating(29.9), Rating::EarlyStage);
        assert_eq!(rating(0.0), Rating::EarlyStage);
        assert_eq!(Rating::EarlyStage.to_string(), "Early Stage");
    }

    #[test]
    fn test_score_band_boundaries() {
        assert_eq!(score_band(70.0), ScoreBand::High);
        assert_eq!(score_band(69.9), ScoreBand::Mid);
        assert_eq!(score_band(50.0), ScoreBand::Mid);
        assert_eq!(score_band(49.9), ScoreBand::Low);
        assert_eq!(score_band(30.0), ScoreBand::Low);
        assert_eq!(score_band(29.9), ScoreBand::Poor);
    }

    #[test]
    fn test_format_population_units() {
        assert_eq!(format_population(36_820_000), "3.68 Cr");
        assert_eq!(format_population(10_000_000), "1.00 Cr");
        assert_eq!(format_population(2_405_421), "24.05 L");
        assert_eq!(format_population(100_000), "1.00 L");
        assert_eq!(format_population(99_999), "99,999");
        assert_eq!(format_population(999), "999");
        assert_eq!(format_population(0), "0");
    }

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(1_234), "1,234");
        assert_eq!(group_indian(1_234_567), "12,34,567");
        assert_eq!(group_indian(123_456_789), "12,34,56,789");
    }
}
