//! Target table definition and Sri Lanka dataset constants

use super::types::{BoundingBox, TableSchema};

/// URL of the upstream dataset, quoted in the migration header
pub const DATASET_SOURCE: &str = "https://github.com/SKIDDOW/SriLankaCitiesDatabase";

pub const COUNTRY: &str = "Sri Lanka";
pub const STATE: &str = "Sri Lanka";
pub const TIMEZONE: &str = "Asia/Colombo";

/// Estimated population assigned to every major city
pub const MAJOR_CITY_POPULATION: i64 = 100_000;

/// Place names flagged as major cities. Membership is exact and
/// case-sensitive against the cleaned `name_en` value.
pub const MAJOR_CITIES: &[&str] = &[
    "Colombo",
    "Kandy",
    "Galle",
    "Negombo",
    "Jaffna",
    "Trincomalee",
    "Batticaloa",
    "Ratnapura",
    "Anuradhapura",
    "Polonnaruwa",
    "Matara",
    "Hambantota",
    "Kurunegala",
    "Puttalam",
    "Badulla",
    "Bandarawela",
    "Nuwara Eliya",
    "Dambulla",
    "Sigiriya",
    "Vavuniya",
    "Mannar",
];

pub fn is_major_city(name: &str) -> bool {
    MAJOR_CITIES.contains(&name)
}

/// Plausible coordinate range for the island. Records outside it are kept
/// but flagged with a warning.
pub const SRI_LANKA_BOUNDS: BoundingBox = BoundingBox::new(5.5, 10.0, 79.0, 82.0);

/// Reference point for the nearest-cities verification query
pub const COLOMBO_LATITUDE: f64 = 6.9271;
pub const COLOMBO_LONGITUDE: f64 = 79.8612;

/// Search radius of the verification query, in meters
pub const NEARBY_RADIUS_METERS: u32 = 50_000;

pub static CITIES: TableSchema = TableSchema {
    name: "cities",
    columns: &[
        "name",
        "country",
        "state",
        "latitude",
        "longitude",
        "population",
        "is_major_city",
        "timezone",
    ],
    conflict_columns: &["name", "country"],
    update_columns: &[
        "latitude",
        "longitude",
        "state",
        "population",
        "is_major_city",
    ],
};
