use crate::parser::CityRow;
use crate::schema::{
    TableSchema, COLOMBO_LATITUDE, COLOMBO_LONGITUDE, COUNTRY, DATASET_SOURCE,
    NEARBY_RADIUS_METERS,
};

/// Header comment block for the generated migration
pub fn generate_header(total_records: usize, generated_at: &str) -> String {
    format!(
        "-- Migration: Import Complete Sri Lankan Cities Dataset
-- Source: {}
-- Total Cities: {}
-- Generated: {}

",
        DATASET_SOURCE, total_records, generated_at
    )
}

/// DELETE clearing previously imported rows for the country
pub fn generate_delete(table: &TableSchema) -> String {
    format!(
        "-- Delete existing Sri Lankan cities to avoid duplicates
DELETE FROM {} WHERE country = '{}';

",
        table.name, COUNTRY
    )
}

/// One SQL value tuple for a city row
pub fn values_tuple(row: &CityRow) -> String {
    let literals: Vec<String> = row.values().iter().map(|v| v.to_literal()).collect();
    format!("({})", literals.join(", "))
}

/// INSERT ... VALUES with the upsert clause for the table's unique constraint
pub fn generate_insert(table: &TableSchema, rows: &[CityRow]) -> String {
    let mut sql = format!(
        "-- Insert complete Sri Lankan cities dataset\nINSERT INTO {} (\n",
        table.name
    );

    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|col| format!("    {}", col))
        .collect();
    sql.push_str(&columns.join(",\n"));
    sql.push_str("\n) VALUES\n");

    let tuples: Vec<String> = rows.iter().map(values_tuple).collect();
    sql.push_str(&tuples.join(",\n"));

    sql.push_str(&format!(
        "\nON CONFLICT ({}) DO UPDATE SET\n",
        table.conflict_columns.join(", ")
    ));
    let updates: Vec<String> = table
        .update_columns
        .iter()
        .map(|col| format!("    {} = EXCLUDED.{}", col, col))
        .collect();
    sql.push_str(&updates.join(",\n"));
    sql.push_str(";\n\n");

    sql
}

/// Fixed verification queries appended after the import statements
pub fn generate_verification(table: &TableSchema) -> String {
    format!(
        "-- Verify import
SELECT
    COUNT(*) as total_cities,
    COUNT(CASE WHEN is_major_city THEN 1 END) as major_cities,
    MIN(latitude) as min_lat,
    MAX(latitude) as max_lat,
    MIN(longitude) as min_lng,
    MAX(longitude) as max_lng
FROM {table}
WHERE country = '{country}';

-- Sample query: Find cities near Colombo (within {radius_km}km)
SELECT name, latitude, longitude,
    ROUND(ST_Distance(
        geom,
        ST_SetSRID(ST_MakePoint({lon}, {lat}), 4326)::geography
    ) / 1000, 2) as distance_km
FROM {table}
WHERE country = '{country}'
    AND ST_DWithin(
        geom,
        ST_SetSRID(ST_MakePoint({lon}, {lat}), 4326)::geography,
        {radius}
    )
ORDER BY distance_km
LIMIT 10;
",
        table = table.name,
        country = COUNTRY,
        radius_km = NEARBY_RADIUS_METERS / 1000,
        lat = COLOMBO_LATITUDE,
        lon = COLOMBO_LONGITUDE,
        radius = NEARBY_RADIUS_METERS,
    )
}
