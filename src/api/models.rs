use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PositionRequest {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize)]
pub struct UtmBlock {
    pub zone: String,
    pub easting: f64,
    pub northing: f64,
}

#[derive(Debug, Serialize)]
pub struct Tm3Block {
    pub zone: String,
    pub epsg: u32,
    pub easting: f64,
    pub northing: f64,
}

#[derive(Debug, Serialize)]
pub struct PositionResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub dms_latitude: String,
    pub dms_longitude: String,
    /// Null when the projection backend rejects the point
    pub utm: Option<UtmBlock>,
    /// Null outside the 16 TM3 bands
    pub tm3: Option<Tm3Block>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// "tm3", "utm", "geographic" or "unrecognized"
    pub kind: &'static str,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Human-readable echo of the matched query
    pub matched: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
