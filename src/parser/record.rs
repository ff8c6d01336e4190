use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::schema::{is_major_city, COUNTRY, MAJOR_CITY_POPULATION, STATE, TIMEZONE};

/// A city record as it appears in the dataset JSON. Field types are left
/// loose so a single malformed record cannot poison the whole array; unknown
/// fields are ignored.
#[derive(Debug, Deserialize)]
pub struct RawCity {
    pub id: Option<Value>,
    pub name_en: Option<Value>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
}

/// A validated city ready for SQL rendering
#[derive(Debug, Clone, PartialEq)]
pub struct CityRow {
    pub name: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub population: Option<i64>,
    pub is_major_city: bool,
}

impl CityRow {
    /// Values in `cities` table column order
    pub fn values(&self) -> Vec<SqlValue> {
        vec![
            self.name.clone().map(SqlValue::Text).unwrap_or(SqlValue::Null),
            SqlValue::Text(COUNTRY.to_string()),
            SqlValue::Text(STATE.to_string()),
            SqlValue::Real(self.latitude),
            SqlValue::Real(self.longitude),
            self.population.map(SqlValue::Integer).unwrap_or(SqlValue::Null),
            SqlValue::Boolean(self.is_major_city),
            SqlValue::Text(TIMEZONE.to_string()),
        ]
    }

    /// Name used in diagnostics for rows without one
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unknown")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Boolean(bool),
}

impl SqlValue {
    /// Render as a PostgreSQL literal. Text is single-quoted with embedded
    /// quotes doubled; booleans are the lowercase keywords.
    pub fn to_literal(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Integer(i) => i.to_string(),
            SqlValue::Real(f) => f.to_string(),
            SqlValue::Text(s) => format!("'{}'", s.replace('\'', "''")),
            SqlValue::Boolean(b) => b.to_string(),
        }
    }
}

/// Outcome of parsing one record
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Accepted(CityRow),
    /// Latitude or longitude missing or zero. The only hard rejection rule.
    Rejected { label: String },
}

/// Parse the dataset file contents into individual records
pub fn parse_cities(json: &str) -> Result<Vec<Value>> {
    serde_json::from_str(json).context("input is not a JSON array")
}

/// Validate and transform a single record
pub fn parse_record(record: &Value) -> Result<ParseOutcome> {
    let raw: RawCity =
        serde_json::from_value(record.clone()).context("record is not a JSON object")?;

    let name = clean_value(raw.name_en.as_ref());
    let latitude = coerce_coordinate(raw.latitude.as_ref()).context("bad latitude")?;
    let longitude = coerce_coordinate(raw.longitude.as_ref()).context("bad longitude")?;

    if latitude == 0.0 || longitude == 0.0 {
        let label = name.unwrap_or_else(|| label_from_id(raw.id.as_ref()));
        return Ok(ParseOutcome::Rejected { label });
    }

    let major = name.as_deref().map(is_major_city).unwrap_or(false);

    Ok(ParseOutcome::Accepted(CityRow {
        name,
        latitude,
        longitude,
        population: major.then_some(MAJOR_CITY_POPULATION),
        is_major_city: major,
    }))
}

/// Map placeholder values (JSON null, the string "NULL", the empty string)
/// to absent, and coerce anything else to text.
pub fn clean_value(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() || s == "NULL" => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Coordinate coercion: absent and JSON null default to 0 (rejected later as
/// a zero coordinate), numeric strings are accepted, anything else is a
/// record error.
pub fn coerce_coordinate(value: Option<&Value>) -> Result<f64> {
    match value {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => n.as_f64().context("coordinate out of range"),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .with_context(|| format!("invalid coordinate {:?}", s)),
        Some(other) => bail!("invalid coordinate {}", other),
    }
}

/// The record's `id` rendered for diagnostics, or "unknown"
pub fn record_id(record: &Value) -> String {
    label_from_id(record.get("id"))
}

fn label_from_id(id: Option<&Value>) -> String {
    match id {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "unknown".to_string(),
    }
}
