//! UTM zone determination and conversions
//!
//! Standard 6-degree UTM zones on WGS84. Zone numbers run 1..=60 from
//! 180°W eastward; the hemisphere selects the false-northing convention.

use crate::crs::backend::GeoTransform;
use crate::error::{Error, Result};
use crate::types::{GeoPoint, Hemisphere, UtmCoordinate, UtmZone};

/// Computes the UTM zone number for a longitude in [-180, 180].
///
/// Longitude exactly +180° is identified with -180° and wraps to zone 1,
/// keeping the result inside 1..=60.
pub fn zone_number(longitude: f64) -> u8 {
    let lon = if longitude >= 180.0 {
        longitude - 360.0
    } else {
        longitude
    };
    (((lon + 180.0) / 6.0).floor() as u8) + 1
}

/// Derives the full zone descriptor for a geographic point
pub fn zone_for_point(point: GeoPoint) -> UtmZone {
    UtmZone::new(
        zone_number(point.longitude),
        Hemisphere::from_latitude(point.latitude),
    )
}

/// Builds the PROJ definition for a UTM zone on WGS84, in meters
pub fn proj_definition(zone: UtmZone) -> String {
    let south = match zone.hemisphere {
        Hemisphere::South => " +south",
        Hemisphere::North => "",
    };
    format!(
        "+proj=utm +zone={}{} +datum=WGS84 +units=m +no_defs",
        zone.number, south
    )
}

/// Projects a geographic point into its UTM zone.
///
/// Fails with `Error::Projection` only when PROJ rejects the input, e.g.
/// pole-adjacent latitudes where UTM is not well defined.
pub fn geo_to_utm(point: GeoPoint) -> Result<UtmCoordinate> {
    let zone = zone_for_point(point);
    let transform = GeoTransform::to_projected(&proj_definition(zone))?;
    let (easting, northing) = transform.project(point)?;
    Ok(UtmCoordinate::new(zone, easting, northing))
}

/// Unprojects a UTM easting/northing back to a geographic point.
///
/// Fails with `Error::InvalidZone` when the zone number is outside 1..=60.
/// The result is not re-validated against the nominal zone extent; points
/// slightly outside the band unproject normally.
pub fn utm_to_geo(
    zone_number: u8,
    hemisphere: Hemisphere,
    easting: f64,
    northing: f64,
) -> Result<GeoPoint> {
    if !(1..=60).contains(&zone_number) {
        return Err(Error::InvalidZone(zone_number));
    }
    let zone = UtmZone::new(zone_number, hemisphere);
    let transform = GeoTransform::to_geographic(&proj_definition(zone))?;
    transform.unproject(easting, northing)
}
