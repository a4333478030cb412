use citysense::loader::{load_city_reports, load_report};
use citysense::scoring::{
    ProfileLabel, SCORE_CATEGORIES, ScoreCategory, best_for_tags, build_radar_rows,
    category_leader, category_leaders, classify_profile, radar_column, rank_all, rank_of,
    select_cities, strongest_categories, weakest_categories,
};
use std::fs;
use std::path::Path;

const REPORT: &str = "tests/fixtures/comparative_report.json";

fn report() -> citysense::scoring::ComparativeReport {
    load_report(Path::new(REPORT)).expect("Failed to load fixture report")
}

#[test]
fn test_full_pipeline() {
    let report = report();
    assert_eq!(report.cities().len(), 6);
    assert_eq!(
        report.ranking(),
        ["Gurugram", "Indore", "Jaipur", "Lucknow", "Nagpur", "Coimbatore"]
    );

    let ranked = rank_all(report.cities(), None).unwrap();
    let names: Vec<&str> = ranked.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, report.ranking());
}

#[test]
fn test_rank_by_category_and_rank_of() {
    let report = report();
    let cities = report.cities();

    let by_hospitality = rank_all(cities, Some("hospitality_score")).unwrap();
    assert_eq!(by_hospitality[0].name, "Jaipur");

    for (i, city) in by_hospitality.iter().enumerate() {
        assert_eq!(
            rank_of(cities, &city.name, Some("hospitality_score")).unwrap(),
            Some(i + 1)
        );
    }
    assert_eq!(rank_of(cities, "LUCKNOW", None).unwrap(), Some(4));
    assert_eq!(rank_of(cities, "Pune", None).unwrap(), None);
    assert!(rank_all(cities, Some("nightlife_score")).is_err());
}

#[test]
fn test_leaders_match_fixture() {
    let report = report();
    let leaders = category_leaders(report.cities());
    let pairs: Vec<(ScoreCategory, &str)> =
        leaders.iter().map(|l| (l.category, l.city.as_str())).collect();

    assert_eq!(
        pairs,
        vec![
            (ScoreCategory::Healthcare, "Lucknow"),
            (ScoreCategory::Hospitality, "Jaipur"),
            (ScoreCategory::Education, "Coimbatore"),
            (ScoreCategory::RealEstate, "Gurugram"),
            (ScoreCategory::FutureInfrastructure, "Gurugram"),
            (ScoreCategory::Migration, "Gurugram"),
        ]
    );

    let overall = category_leader(report.cities(), "overall_score").unwrap().unwrap();
    assert_eq!(overall.name, "Gurugram");
}

#[test]
fn test_profiles_and_tags() {
    let report = report();
    let expect = [
        (
            "Gurugram",
            ProfileLabel::EarningCapital,
            vec!["Long-term investors", "Growth seekers", "Hybrid workers"],
        ),
        (
            "Indore",
            ProfileLabel::EarningCapital,
            vec!["Long-term investors", "Families", "Growth seekers", "Hybrid workers"],
        ),
        ("Lucknow", ProfileLabel::LivingValue, vec!["Families"]),
        ("Jaipur", ProfileLabel::Balanced, vec!["Value seekers"]),
        ("Nagpur", ProfileLabel::LivingValue, vec!["Growth seekers"]),
        ("Coimbatore", ProfileLabel::LivingValue, vec!["Families"]),
    ];

    for (name, profile, tags) in expect {
        let city = report.city(name).unwrap();
        assert_eq!(classify_profile(city), profile, "profile of {name}");
        assert_eq!(best_for_tags(city), tags, "tags of {name}");
    }
}

#[test]
fn test_strengths_of_gurugram() {
    let report = report();
    let gurugram = report.city("gurugram").unwrap();

    let strongest: Vec<ScoreCategory> = strongest_categories(gurugram, 2)
        .iter()
        .map(|s| s.category)
        .collect();
    let weakest: Vec<ScoreCategory> = weakest_categories(gurugram, 2)
        .iter()
        .map(|s| s.category)
        .collect();

    assert_eq!(strongest, vec![ScoreCategory::RealEstate, ScoreCategory::Migration]);
    assert_eq!(weakest, vec![ScoreCategory::Education, ScoreCategory::Hospitality]);
}

#[test]
fn test_radar_round_trip_for_selection() {
    let report = report();
    let selected = select_cities(report.cities(), &["Nagpur", "jaipur", "Atlantis"]);
    let rows = build_radar_rows(&selected);

    assert_eq!(rows.len(), SCORE_CATEGORIES.len());
    assert!(rows.iter().all(|r| r.points.len() == 2));
    assert_eq!(rows[0].points[0].city, "Nagpur");

    for city in &selected {
        let column = radar_column(&rows, &city.name).unwrap();
        let restored: Vec<f64> = column.iter().map(|c| c.score).collect();
        let original: Vec<f64> = SCORE_CATEGORIES
            .iter()
            .map(|&c| city.scores.category(c))
            .collect();
        assert_eq!(restored, original);
    }
}

#[test]
fn test_stale_ranking_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stale.json");

    let mut json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(REPORT).unwrap()).unwrap();
    json["ranking"] = serde_json::json!(["Coimbatore", "Gurugram"]);
    fs::write(&path, json.to_string()).unwrap();

    let report = load_report(&path).unwrap();
    assert_eq!(report.ranking().len(), 6);
    assert_eq!(report.ranking()[0], "Gurugram");
}

#[test]
fn test_city_directory_fixture() {
    let cities = load_city_reports(Path::new("tests/fixtures/cities")).unwrap();
    assert_eq!(cities.slugs().collect::<Vec<_>>(), vec!["gurugram", "indore"]);

    let indore = cities.by_slug("indore").unwrap();
    assert_eq!(indore.verified_data["education"]["data"]["iit_name"], "IIT Indore");
    assert_eq!(indore.scores, report().city("Indore").unwrap().scores);
}
