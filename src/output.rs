//! Output formatting and export of derived views.
//!
//! Supports plain-text tables and pretty JSON on stdout, and CSV files that
//! can optionally be gzip-compressed.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Serialize;
use std::fmt::Debug;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::scoring::types::RadarRow;

/// Logs a value using Rust's debug pretty-print format.
pub fn print_pretty(value: &impl Debug) {
    debug!("{:#?}", value);
}

/// Writes a value to stdout as pretty-printed JSON.
pub fn print_json(value: &impl Serialize) -> Result<()> {
    let mut out = io::stdout().lock();
    write_json(&mut out, value)
}

pub fn write_json<W: Write>(out: &mut W, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Writes rows as a left-aligned text table to stdout.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut out = io::stdout().lock();
    write_table(&mut out, headers, rows)
}

pub fn write_table<W: Write>(out: &mut W, headers: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    writeln!(out, "{}", table_line(headers, &widths))?;
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        writeln!(out, "{}", table_line(&cells, &widths))?;
    }
    Ok(())
}

fn table_line(cells: &[&str], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Writes `bytes` to `path`, gzip-compressed when asked.
fn write_file(path: &Path, bytes: &[u8], gzip: bool) -> Result<()> {
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    if gzip {
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(bytes)?;
        encoder.finish()?;
    } else {
        file.write_all(bytes)?;
    }
    Ok(())
}

/// Writes serializable records to a new CSV file at `path`, header first.
pub fn write_records<T: Serialize>(path: &Path, records: &[T], gzip: bool) -> Result<()> {
    debug!(path = %path.display(), gzip, count = records.len(), "Writing CSV records");

    let mut writer = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    write_file(path, &writer.into_inner().map_err(|e| e.into_error())?, gzip)?;

    info!(path = %path.display(), rows = records.len(), "CSV written");
    Ok(())
}

/// Writes radar rows as CSV: a `category` column, then one column per city.
pub fn write_radar_csv(path: &Path, rows: &[RadarRow], gzip: bool) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());

    let mut header = vec!["category".to_string()];
    if let Some(first) = rows.first() {
        header.extend(first.points.iter().map(|p| p.city.clone()));
    }
    writer.write_record(&header)?;

    for row in rows {
        let mut record = vec![row.category.to_string()];
        record.extend(row.points.iter().map(|p| p.score.to_string()));
        writer.write_record(&record)?;
    }
    write_file(path, &writer.into_inner().map_err(|e| e.into_error())?, gzip)?;

    info!(path = %path.display(), gzip, columns = header.len(), "Radar CSV written");
    Ok(())
}
