//! Integration tests that drive the full file-to-file pipeline:
//! write a JSON dataset to disk, generate the migration, and inspect
//! the SQL text and the diagnostics that came out of the run.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use lk_cities_to_sql::report::{MemoryReporter, SilentReporter};
use lk_cities_to_sql::writer::{check_dataset, generate_migration, MigrationStats};

// =============================================================================
// Helpers
// =============================================================================

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write the input dataset and return its path
    fn input(&self, json: &str) -> PathBuf {
        let path = self.dir.path().join("sri_lanka_cities.json");
        fs::write(&path, json).expect("Failed to write input file");
        path
    }

    /// Output path nested the way the real migration directory is
    fn output(&self) -> PathBuf {
        self.dir
            .path()
            .join("database/migrations/003_import_sri_lankan_cities.sql")
    }
}

fn generate(json: &str) -> (String, MigrationStats, MemoryReporter) {
    let ws = Workspace::new();
    let input = ws.input(json);
    let output = ws.output();

    let mut reporter = MemoryReporter::new();
    let stats = generate_migration(&input, &output, &mut reporter).expect("generation failed");

    let sql = fs::read_to_string(&output).expect("Failed to read generated SQL");
    (sql, stats, reporter)
}

// =============================================================================
// End-to-end generation
// =============================================================================

#[test]
fn test_major_city_row() {
    let (sql, stats, _) =
        generate(r#"[{"name_en":"Colombo","latitude":6.9271,"longitude":79.8612}]"#);

    assert!(sql.contains(
        "('Colombo', 'Sri Lanka', 'Sri Lanka', 6.9271, 79.8612, 100000, true, 'Asia/Colombo')"
    ));
    assert_eq!(stats.total, 1);
    assert_eq!(stats.written, 1);
}

#[test]
fn test_minor_city_gets_null_population() {
    let (sql, _, _) =
        generate(r#"[{"name_en":"Dehiwala","latitude":6.851,"longitude":79.865}]"#);

    assert!(sql.contains(
        "('Dehiwala', 'Sri Lanka', 'Sri Lanka', 6.851, 79.865, NULL, false, 'Asia/Colombo')"
    ));
}

#[test]
fn test_migration_statement_structure() {
    let (sql, _, _) =
        generate(r#"[{"name_en":"Colombo","latitude":6.9271,"longitude":79.8612}]"#);

    let delete_at = sql
        .find("DELETE FROM cities WHERE country = 'Sri Lanka';")
        .expect("missing DELETE");
    let insert_at = sql.find("INSERT INTO cities (").expect("missing INSERT");
    let conflict_at = sql
        .find("ON CONFLICT (name, country) DO UPDATE SET")
        .expect("missing upsert clause");
    let verify_at = sql.find("-- Verify import").expect("missing verification");
    let nearby_at = sql.find("ST_DWithin(").expect("missing PostGIS query");

    assert!(delete_at < insert_at);
    assert!(insert_at < conflict_at);
    assert!(conflict_at < verify_at);
    assert!(verify_at < nearby_at);

    assert!(sql.contains("-- Total Cities: 1"));
    assert!(sql.contains("-- Generated: "));
}

#[test]
fn test_rows_follow_input_order() {
    let (sql, _, _) = generate(
        r#"[
            {"name_en":"Matara","latitude":5.9549,"longitude":80.555},
            {"name_en":"Jaffna","latitude":9.6615,"longitude":80.0255},
            {"name_en":"Galle","latitude":6.0535,"longitude":80.221}
        ]"#,
    );

    let matara = sql.find("'Matara'").unwrap();
    let jaffna = sql.find("'Jaffna'").unwrap();
    let galle = sql.find("'Galle'").unwrap();
    assert!(matara < jaffna && jaffna < galle);
}

#[test]
fn test_single_quotes_are_doubled() {
    let (sql, _, _) =
        generate(r#"[{"name_en":"O'Brien","latitude":6.5,"longitude":80.5}]"#);

    assert!(sql.contains("('O''Brien',"));
    assert!(!sql.contains("'O'Brien'"));
}

// =============================================================================
// Skips, warnings, and per-record errors
// =============================================================================

#[test]
fn test_zero_coordinates_skip_the_record() {
    let (sql, stats, reporter) =
        generate(r#"[{"name_en":"Nowhere","latitude":0,"longitude":0}]"#);

    assert!(!sql.contains("Nowhere"));
    assert_eq!(stats.written, 0);
    assert_eq!(stats.skipped, 1);
    assert!(reporter
        .logs
        .iter()
        .any(|m| m == "Skipping Nowhere - invalid coordinates"));
}

#[test]
fn test_malformed_record_does_not_abort_the_batch() {
    let (sql, stats, reporter) = generate(
        r#"[
            {"id": 1, "name_en":"Broken","latitude":"abc","longitude":80.0},
            {"name_en":"Kandy","latitude":7.2906,"longitude":80.6337}
        ]"#,
    );

    assert!(!sql.contains("Broken"));
    assert!(sql.contains("('Kandy', 'Sri Lanka', 'Sri Lanka', 7.2906, 80.6337, 100000, true, 'Asia/Colombo')"));
    assert_eq!(stats.errors, 1);
    assert_eq!(stats.written, 1);
    assert!(reporter
        .logs
        .iter()
        .any(|m| m.starts_with("Error processing city 1:")));
}

#[test]
fn test_out_of_bounds_record_is_kept_with_warning() {
    let (sql, stats, reporter) =
        generate(r#"[{"name_en":"Chennai","latitude":13.0827,"longitude":80.2707}]"#);

    // kept in the output, only flagged
    assert!(sql.contains("('Chennai',"));
    assert_eq!(stats.written, 1);
    assert_eq!(reporter.warnings.len(), 1);
    assert!(reporter.warnings[0].contains("outside Sri Lanka bounds"));
}

#[test]
fn test_placeholder_names_render_as_sql_null() {
    let (sql, _, _) =
        generate(r#"[{"name_en":"NULL","latitude":6.5,"longitude":80.5}]"#);

    assert!(sql.contains("(NULL, 'Sri Lanka', 'Sri Lanka', 6.5, 80.5, NULL, false, 'Asia/Colombo')"));
    assert!(!sql.contains("'NULL', 'Sri Lanka'"));
}

// =============================================================================
// Read and write failures
// =============================================================================

#[test]
fn test_missing_input_file_is_an_error() {
    let ws = Workspace::new();
    let mut reporter = MemoryReporter::new();

    let result = generate_migration(
        &ws.dir.path().join("does_not_exist.json"),
        &ws.output(),
        &mut reporter,
    );

    let err = format!("{:#}", result.unwrap_err());
    assert!(err.contains("Failed to read"));
}

#[test]
fn test_invalid_json_is_an_error() {
    let ws = Workspace::new();
    let input = ws.input("{ not json ]");
    let mut reporter = SilentReporter::new();

    let result = generate_migration(&input, &ws.output(), &mut reporter);

    let err = format!("{:#}", result.unwrap_err());
    assert!(err.contains("Failed to parse"));
}

#[test]
fn test_output_parent_directories_are_created() {
    let ws = Workspace::new();
    let input = ws.input(r#"[{"name_en":"Galle","latitude":6.0535,"longitude":80.221}]"#);
    let output = ws.output();
    assert!(!output.parent().unwrap().exists());

    let mut reporter = SilentReporter::new();
    generate_migration(&input, &output, &mut reporter).expect("generation failed");

    assert!(output.exists());
}

// =============================================================================
// Dry run
// =============================================================================

#[test]
fn test_check_reports_without_writing() {
    let ws = Workspace::new();
    let input = ws.input(
        r#"[
            {"name_en":"Colombo","latitude":6.9271,"longitude":79.8612},
            {"name_en":"Nowhere","latitude":0,"longitude":0}
        ]"#,
    );

    let mut reporter = MemoryReporter::new();
    let stats = check_dataset(&input, &mut reporter).expect("check failed");

    assert_eq!(stats.total, 2);
    assert_eq!(stats.written, 1);
    assert_eq!(stats.skipped, 1);
    assert!(!ws.output().exists());
    assert!(reporter
        .logs
        .iter()
        .any(|m| m == "Skipping Nowhere - invalid coordinates"));
}
