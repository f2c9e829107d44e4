use axum::{extract::Query, http::StatusCode, Json};

use super::models::*;
use crate::crs::{tm3, utm};
use crate::format::{dms, Axis};
use crate::parse::{parse, ParsedInput};
use crate::types::GeoPoint;

/// Returns every coordinate representation of a geographic point: DD,
/// DMS, UTM and (inside coverage) TM3. Mirrors the map's position panel.
pub async fn get_position(
    Query(req): Query<PositionRequest>,
) -> Result<Json<PositionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let point = GeoPoint::new(req.latitude, req.longitude);
    if !point.in_valid_range() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!(
                    "Coordinates out of range: {}, {}",
                    req.latitude, req.longitude
                ),
            }),
        ));
    }

    // projection failures render as null blocks, never as a 500
    let utm = utm::geo_to_utm(point).ok().map(|u| UtmBlock {
        zone: u.zone.to_string(),
        easting: u.easting,
        northing: u.northing,
    });

    let tm3 = tm3::geo_to_tm3(point).ok().flatten().map(|t| Tm3Block {
        zone: t.zone_code.to_string(),
        epsg: t.epsg,
        easting: t.easting,
        northing: t.northing,
    });

    Ok(Json(PositionResponse {
        latitude: point.latitude,
        longitude: point.longitude,
        dms_latitude: dms(point.latitude, Axis::Latitude),
        dms_longitude: dms(point.longitude, Axis::Longitude),
        utm,
        tm3,
    }))
}

/// Resolves a free-text query to a coordinate if it matches one of the
/// supported grammars. Unrecognized input is a normal response, not an
/// error; the caller forwards those queries to its geocoder.
pub async fn search(Query(req): Query<SearchRequest>) -> Json<SearchResponse> {
    let response = match parse(&req.q) {
        ParsedInput::Tm3 { coordinate, point } => SearchResponse {
            kind: "tm3",
            latitude: Some(point.latitude),
            longitude: Some(point.longitude),
            matched: Some(format!(
                "TM3 Zone {} → {:.5} E, {:.5} N",
                coordinate.zone_code, coordinate.easting, coordinate.northing
            )),
        },
        ParsedInput::Utm { coordinate, point } => SearchResponse {
            kind: "utm",
            latitude: Some(point.latitude),
            longitude: Some(point.longitude),
            matched: Some(format!(
                "UTM {} → {:.5} E, {:.5} N",
                coordinate.zone, coordinate.easting, coordinate.northing
            )),
        },
        ParsedInput::Geographic(point) => SearchResponse {
            kind: "geographic",
            latitude: Some(point.latitude),
            longitude: Some(point.longitude),
            matched: Some(format!(
                "{:.6}, {:.6}",
                point.latitude, point.longitude
            )),
        },
        ParsedInput::Unrecognized => SearchResponse {
            kind: "unrecognized",
            latitude: None,
            longitude: None,
            matched: None,
        },
    };

    Json(response)
}
