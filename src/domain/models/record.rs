use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One detection row as returned by the backend record query. The relay only
/// reads these; the backend owns persistence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectionRecord {
    pub datetime: DateTime<Utc>,
    pub location_lat: f64,
    pub location_long: f64,
}

/// Body of a record-creation call for a reported sighting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecord {
    pub informant: String,
    pub location_lat: f64,
    pub location_long: f64,
}
