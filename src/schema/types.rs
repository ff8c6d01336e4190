/// Inclusive latitude/longitude rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    pub const fn new(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Self {
        Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        }
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_latitude
            && latitude <= self.max_latitude
            && longitude >= self.min_longitude
            && longitude <= self.max_longitude
    }
}

/// Target table description, used to assemble INSERT and upsert SQL
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: &'static str,
    /// Columns in insert order
    pub columns: &'static [&'static str],
    /// Unique constraint columns forming the ON CONFLICT target
    pub conflict_columns: &'static [&'static str],
    /// Columns refreshed from EXCLUDED when the conflict target matches
    pub update_columns: &'static [&'static str],
}
