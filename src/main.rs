//! CLI entry point for CitySense.
//!
//! Loads the static comparative report and prints rankings, city profiles,
//! category leaders, radar rows and comparisons derived from it.

use anyhow::{Context, Result, bail};
use citysense::config::Palette;
use citysense::loader::{load_city_reports, load_report};
use citysense::output::{print_json, print_pretty, print_table, write_radar_csv, write_records};
use citysense::scoring::{
    CategoryScore, CitySummary, ComparativeReport, DEFAULT_HIGHLIGHTS, SCORE_CATEGORIES, ScoreKey,
    build_radar_rows, category_leaders, select_cities,
};
use citysense::views::{
    CityProfile, MAX_COMPARE, MIN_COMPARE, city_profile, compare_rows, compare_selection,
    leaderboard,
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "citysense")]
#[command(about = "Rank and compare city investment scores", long_about = None)]
struct Cli {
    /// Comparative report JSON (optionally .gz)
    #[arg(
        long,
        global = true,
        env = "CITYSENSE_REPORT",
        default_value = "data/comparative_report.json"
    )]
    report: PathBuf,

    /// JSON file with colour overrides
    #[arg(long, global = true, env = "CITYSENSE_PALETTE")]
    palette: Option<PathBuf>,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank all cities by a score field
    Rank {
        /// Score field, e.g. "education_score" (default: overall_score)
        #[arg(short, long)]
        category: Option<String>,

        /// Also write the ranking to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Gzip-compress the CSV file
        #[arg(long, default_value_t = false)]
        gzip: bool,
    },
    /// Show the profile of one city
    City {
        /// City name (case-insensitive)
        name: String,

        /// Number of strengths and weaknesses to list
        #[arg(short = 'n', long, default_value_t = DEFAULT_HIGHLIGHTS)]
        top: usize,

        /// Directory holding <slug>_verified_report.json files
        #[arg(long, env = "CITYSENSE_CITIES_DIR")]
        cities_dir: Option<PathBuf>,
    },
    /// Show the leading city of every category
    Leaders,
    /// Build radar chart rows for the selected cities
    Radar {
        /// City names, in legend order
        #[arg(required = true)]
        cities: Vec<String>,

        /// Write the rows to this CSV file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Gzip-compress the CSV file
        #[arg(long, default_value_t = false)]
        gzip: bool,
    },
    /// Compare 2 to 4 cities category by category
    Compare {
        /// City names (default: the top 3 of the overall ranking)
        cities: Vec<String>,
    },
    /// List the score categories
    Categories,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = init_tracing()?;

    let cli = Cli::parse();
    let palette = Palette::from_optional(cli.palette.as_deref())?;
    let report = load_report(&cli.report)?;

    match cli.command {
        Commands::Rank {
            category,
            output,
            gzip,
        } => {
            let key = ScoreKey::resolve(category.as_deref())?;
            let board = leaderboard(report.cities(), key, &palette);
            debug!(key = %key, cities = board.len(), "Ranking computed");

            if let Some(path) = output {
                write_records(&path, &board, gzip)?;
            }

            if cli.json {
                print_json(&board)?;
            } else {
                let rows: Vec<Vec<String>> = board
                    .iter()
                    .map(|e| {
                        vec![
                            e.rank.to_string(),
                            e.city.clone(),
                            e.state.clone(),
                            format!("{:.1}", e.score),
                            e.rating.to_string(),
                        ]
                    })
                    .collect();
                print_table(&["#", "City", "State", key.label(), "Rating"], &rows)?;
            }
        }
        Commands::City {
            name,
            top,
            cities_dir,
        } => {
            let Some(profile) = city_profile(&report, &name, top, &palette) else {
                bail!("city '{name}' is not in {}", cli.report.display());
            };
            print_pretty(&profile);

            let details = match cities_dir {
                Some(dir) => {
                    let directory = load_city_reports(&dir)?;
                    let details = directory.by_slug(&profile.city).map(|r| r.verified_data.clone());
                    if details.is_none() {
                        warn!(
                            city = %profile.city,
                            dir = %dir.display(),
                            "No detail report for city"
                        );
                    }
                    details
                }
                None => None,
            };

            if cli.json {
                #[derive(Serialize)]
                struct CityOutput<'a> {
                    #[serde(flatten)]
                    profile: &'a CityProfile,
                    #[serde(skip_serializing_if = "Option::is_none")]
                    verified_data: Option<serde_json::Value>,
                }
                print_json(&CityOutput {
                    profile: &profile,
                    verified_data: details,
                })?;
            } else {
                let listed = |scores: &[CategoryScore]| {
                    scores
                        .iter()
                        .map(|s| format!("{} ({:.1})", s.category, s.score))
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                let rows = vec![
                    vec!["City".to_string(), format!("{}, {}", profile.city, profile.state)],
                    vec!["Population".to_string(), profile.population_display.clone()],
                    vec![
                        "Overall".to_string(),
                        format!(
                            "{:.1} (#{} {})",
                            profile.overall_score, profile.overall_rank, profile.rating
                        ),
                    ],
                    vec!["Profile".to_string(), profile.profile.to_string()],
                    vec!["Best for".to_string(), profile.best_for.join(", ")],
                    vec!["Strengths".to_string(), listed(&profile.strengths)],
                    vec!["Weaknesses".to_string(), listed(&profile.weaknesses)],
                ];
                print_table(&["Field", "Value"], &rows)?;

                let ranks: Vec<Vec<String>> = profile
                    .category_ranks
                    .iter()
                    .map(|r| {
                        vec![
                            r.category.to_string(),
                            format!("{:.1}", r.score),
                            format!("#{}", r.rank),
                        ]
                    })
                    .collect();
                println!();
                print_table(&["Category", "Score", "Rank"], &ranks)?;
            }
        }
        Commands::Leaders => {
            let leaders = category_leaders(report.cities());
            if cli.json {
                print_json(&leaders)?;
            } else {
                let rows: Vec<Vec<String>> = leaders
                    .iter()
                    .map(|l| {
                        vec![
                            l.category.to_string(),
                            l.city.clone(),
                            format!("{:.1}", l.score),
                            palette.category_color(l.category).to_string(),
                        ]
                    })
                    .collect();
                print_table(&["Category", "Leader", "Score", "Color"], &rows)?;
            }
        }
        Commands::Radar {
            cities,
            output,
            gzip,
        } => {
            let selected = select_checked(&report, &cities)?;
            let rows = build_radar_rows(&selected);

            match output {
                Some(path) => write_radar_csv(&path, &rows, gzip)?,
                None => print_json(&rows)?,
            }
        }
        Commands::Compare { cities } => {
            warn_unknown(&report, &cities);
            let selected = compare_selection(&report, &cities);
            if !(MIN_COMPARE..=MAX_COMPARE).contains(&selected.len()) {
                bail!(
                    "compare needs {MIN_COMPARE} to {MAX_COMPARE} known cities, got {}",
                    selected.len()
                );
            }
            info!(selected = selected.len(), "Cities selected");
            let rows = compare_rows(&selected);

            if cli.json {
                print_json(&rows)?;
            } else {
                let mut headers = vec!["Category"];
                headers.extend(selected.iter().map(|c| c.name.as_str()));
                headers.push("Best");

                let table: Vec<Vec<String>> = rows
                    .iter()
                    .map(|row| {
                        let mut cells = vec![row.label.to_string()];
                        cells.extend(row.scores.iter().map(|p| format!("{:.1}", p.score)));
                        cells.push(row.best.join(", "));
                        cells
                    })
                    .collect();
                print_table(&headers, &table)?;
            }
        }
        Commands::Categories => {
            #[derive(Serialize)]
            struct CategoryInfo {
                key: &'static str,
                label: &'static str,
                description: &'static str,
            }
            let categories: Vec<CategoryInfo> = SCORE_CATEGORIES
                .iter()
                .map(|c| CategoryInfo {
                    key: c.key(),
                    label: c.label(),
                    description: c.description(),
                })
                .collect();

            if cli.json {
                print_json(&categories)?;
            } else {
                let rows: Vec<Vec<String>> = categories
                    .iter()
                    .map(|c| {
                        vec![
                            c.key.to_string(),
                            c.label.to_string(),
                            c.description.to_string(),
                        ]
                    })
                    .collect();
                print_table(&["Key", "Label", "Description"], &rows)?;
            }
        }
    }

    Ok(())
}

/// Resolves the selection against the report, warning about unknown names.
fn select_checked(report: &ComparativeReport, names: &[String]) -> Result<Vec<CitySummary>> {
    warn_unknown(report, names);
    let selected = select_cities(report.cities(), names);
    if selected.is_empty() {
        bail!("none of the selected cities are in the report");
    }
    info!(selected = selected.len(), "Cities selected");
    Ok(selected)
}

fn warn_unknown(report: &ComparativeReport, names: &[String]) {
    for name in names {
        if report.city(name).is_none() {
            warn!(city = %name, "Unknown city skipped");
        }
    }
}

/// Logging setup: coloured stderr, plus a JSON rolling log file when
/// `LOG_FILE_PATH` is set.
fn init_tracing() -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_path = Path::new(&log_file_path);
            let log_dir = log_path.parent().unwrap_or(Path::new("logs"));
            let log_file_name = log_path
                .file_name()
                .context("LOG_FILE_PATH has no file name")?;

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}
