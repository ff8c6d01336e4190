use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::sql_gen::{generate_delete, generate_header, generate_insert, generate_verification};
use crate::parser::{parse_cities, parse_record, record_id, CityRow, ParseOutcome};
use crate::report::Reporter;
use crate::schema::{CITIES, SRI_LANKA_BOUNDS};

/// Counters for one generation run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MigrationStats {
    /// Records in the input array
    pub total: usize,
    /// Rows that made it into the INSERT
    pub written: usize,
    /// Records rejected for zero coordinates
    pub skipped: usize,
    /// Records dropped because of a per-record failure
    pub errors: usize,
}

/// Assembled migration text plus its run counters
#[derive(Debug)]
pub struct Migration {
    pub sql: String,
    pub stats: MigrationStats,
}

/// Validate every record, keeping input order for the accepted ones.
///
/// Rejections and per-record failures are diagnostics, never fatal: the rest
/// of the batch still goes through. Out-of-range coordinates only warn.
pub fn collect_rows(
    cities: &[Value],
    reporter: &mut impl Reporter,
) -> (Vec<CityRow>, MigrationStats) {
    let mut rows: Vec<CityRow> = Vec::with_capacity(cities.len());
    let mut stats = MigrationStats {
        total: cities.len(),
        ..Default::default()
    };

    for city in cities {
        match parse_record(city) {
            Ok(ParseOutcome::Accepted(row)) => {
                if !SRI_LANKA_BOUNDS.contains(row.latitude, row.longitude) {
                    reporter.warn(format!(
                        "Warning: {} coordinates ({}, {}) outside Sri Lanka bounds",
                        row.display_name(),
                        row.latitude,
                        row.longitude
                    ));
                }
                rows.push(row);
            }
            Ok(ParseOutcome::Rejected { label }) => {
                stats.skipped += 1;
                reporter.log(format!("Skipping {} - invalid coordinates", label));
            }
            Err(e) => {
                stats.errors += 1;
                reporter.log(format!(
                    "Error processing city {}: {:#}",
                    record_id(city),
                    e
                ));
            }
        }
    }

    stats.written = rows.len();
    (rows, stats)
}

/// Transform parsed records into the migration text. Pure: no clock, no I/O.
pub fn build_migration(
    cities: &[Value],
    generated_at: &str,
    reporter: &mut impl Reporter,
) -> Migration {
    let (rows, stats) = collect_rows(cities, reporter);

    let mut sql = generate_header(stats.total, generated_at);
    sql.push_str(&generate_delete(&CITIES));
    sql.push_str(&generate_insert(&CITIES, &rows));
    sql.push_str(&generate_verification(&CITIES));

    Migration { sql, stats }
}

/// Read the dataset, build the migration, and write it to `output`
pub fn generate_migration(
    input: &Path,
    output: &Path,
    reporter: &mut impl Reporter,
) -> Result<MigrationStats> {
    reporter.log(format!("Reading JSON data from: {}", input.display()));
    let cities = read_cities(input)?;
    reporter.log(format!("Loaded {} cities", cities.len()));

    let generated_at = Utc::now().to_rfc3339();
    let migration = build_migration(&cities, &generated_at, reporter);

    write_migration(output, &migration.sql)?;
    reporter.log(format!("SQL migration generated: {}", output.display()));
    reporter.log(format!(
        "Successfully processed {} cities",
        migration.stats.written
    ));

    Ok(migration.stats)
}

/// Dry run: validate the dataset and report what generate would do, without
/// writing anything
pub fn check_dataset(input: &Path, reporter: &mut impl Reporter) -> Result<MigrationStats> {
    reporter.log(format!("Reading JSON data from: {}", input.display()));
    let cities = read_cities(input)?;
    reporter.log(format!("Loaded {} cities", cities.len()));

    let (_, stats) = collect_rows(&cities, reporter);
    Ok(stats)
}

fn read_cities(input: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    parse_cities(&text).with_context(|| format!("Failed to parse {}", input.display()))
}

/// Write the migration text, creating parent directories as needed
pub fn write_migration(output: &Path, sql: &str) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(output, sql).with_context(|| format!("Failed to write {}", output.display()))
}
