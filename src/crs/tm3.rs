//! Indonesian TM3 zones (SRGI2013 / BIG)
//!
//! TM3 is a national 3-degree Transverse Mercator zoning scheme layered on
//! a generic tmerc projection: scale factor 0.9999, false easting 200 km,
//! false northing 1500 km, WGS84 ellipsoid with zero datum shift. Each UTM
//! zone over Indonesia splits into a western (.1) and eastern (.2) half;
//! adjacent codes share an EPSG registration but have distinct meridians.

use crate::crs::backend::GeoTransform;
use crate::error::Result;
use crate::types::{GeoPoint, Tm3Coordinate};

pub const SCALE_FACTOR: f64 = 0.9999;
pub const FALSE_EASTING: f64 = 200_000.0;
pub const FALSE_NORTHING: f64 = 1_500_000.0;

/// One TM3 zone: code, EPSG registration, central meridian and the
/// half-open longitude band [lon_min, lon_max) it covers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tm3Zone {
    pub code: &'static str,
    pub epsg: u32,
    pub central_meridian: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

/// The 16 TM3 zones, 93°E to 141°E, ordered by central meridian.
/// Reference: ITRF2014, Epoch 2021.0.
pub const TM3_ZONES: [Tm3Zone; 16] = [
    Tm3Zone { code: "46.2", epsg: 9476, central_meridian: 94.5, lon_min: 93.0, lon_max: 96.0 },
    Tm3Zone { code: "47.1", epsg: 9487, central_meridian: 97.5, lon_min: 96.0, lon_max: 99.0 },
    Tm3Zone { code: "47.2", epsg: 9487, central_meridian: 100.5, lon_min: 99.0, lon_max: 102.0 },
    Tm3Zone { code: "48.1", epsg: 9488, central_meridian: 103.5, lon_min: 102.0, lon_max: 105.0 },
    Tm3Zone { code: "48.2", epsg: 9488, central_meridian: 106.5, lon_min: 105.0, lon_max: 108.0 },
    Tm3Zone { code: "49.1", epsg: 9489, central_meridian: 109.5, lon_min: 108.0, lon_max: 111.0 },
    Tm3Zone { code: "49.2", epsg: 9489, central_meridian: 112.5, lon_min: 111.0, lon_max: 114.0 },
    Tm3Zone { code: "50.1", epsg: 9490, central_meridian: 115.5, lon_min: 114.0, lon_max: 117.0 },
    Tm3Zone { code: "50.2", epsg: 9490, central_meridian: 118.5, lon_min: 117.0, lon_max: 120.0 },
    Tm3Zone { code: "51.1", epsg: 9491, central_meridian: 121.5, lon_min: 120.0, lon_max: 123.0 },
    Tm3Zone { code: "51.2", epsg: 9491, central_meridian: 124.5, lon_min: 123.0, lon_max: 126.0 },
    Tm3Zone { code: "52.1", epsg: 9492, central_meridian: 127.5, lon_min: 126.0, lon_max: 129.0 },
    Tm3Zone { code: "52.2", epsg: 9492, central_meridian: 130.5, lon_min: 129.0, lon_max: 132.0 },
    Tm3Zone { code: "53.1", epsg: 9493, central_meridian: 133.5, lon_min: 132.0, lon_max: 135.0 },
    Tm3Zone { code: "53.2", epsg: 9493, central_meridian: 136.5, lon_min: 135.0, lon_max: 138.0 },
    Tm3Zone { code: "54.1", epsg: 9494, central_meridian: 139.5, lon_min: 138.0, lon_max: 141.0 },
];

/// Finds the zone whose band contains the longitude. `None` outside all
/// 16 bands — the normal outcome for any point outside Indonesia.
pub fn zone_for_longitude(longitude: f64) -> Option<&'static Tm3Zone> {
    TM3_ZONES
        .iter()
        .find(|z| longitude >= z.lon_min && longitude < z.lon_max)
}

/// Looks up a zone by exact code, e.g. "49.2"
pub fn zone_for_code(code: &str) -> Option<&'static Tm3Zone> {
    TM3_ZONES.iter().find(|z| z.code == code)
}

/// Resolves a short code without sub-zone suffix ("49") to the first
/// table entry starting with that prefix ("49.1"). Table order is the
/// documented tie-break.
pub fn zone_for_code_prefix(prefix: &str) -> Option<&'static Tm3Zone> {
    TM3_ZONES
        .iter()
        .find(|z| z.code.len() > prefix.len() && z.code.starts_with(prefix) && z.code.as_bytes()[prefix.len()] == b'.')
}

/// Builds the PROJ definition for a TM3 zone
pub fn proj_definition(zone: &Tm3Zone) -> String {
    format!(
        "+proj=tmerc +lat_0=0 +lon_0={} +k={} +x_0={} +y_0={} +ellps=WGS84 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs +type=crs",
        zone.central_meridian, SCALE_FACTOR, FALSE_EASTING, FALSE_NORTHING
    )
}

/// Projects a geographic point into its TM3 zone.
///
/// `Ok(None)` when the longitude is outside all defined bands; callers
/// treat that as "no TM3 representation", not as a failure.
pub fn geo_to_tm3(point: GeoPoint) -> Result<Option<Tm3Coordinate>> {
    let zone = match zone_for_longitude(point.longitude) {
        Some(zone) => zone,
        None => return Ok(None),
    };
    let transform = GeoTransform::to_projected(&proj_definition(zone))?;
    let (easting, northing) = transform.project(point)?;
    Ok(Some(Tm3Coordinate::new(
        zone.code,
        zone.epsg,
        easting,
        northing,
    )))
}

/// Unprojects a TM3 easting/northing back to a geographic point.
///
/// `Ok(None)` when the zone code is not in the table — an input problem
/// for the caller to report, not a system fault.
pub fn tm3_to_geo(zone_code: &str, easting: f64, northing: f64) -> Result<Option<GeoPoint>> {
    let zone = match zone_for_code(zone_code) {
        Some(zone) => zone,
        None => return Ok(None),
    };
    let transform = GeoTransform::to_geographic(&proj_definition(zone))?;
    transform.unproject(easting, northing).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_invariants() {
        assert_eq!(TM3_ZONES.len(), 16);
        for pair in TM3_ZONES.windows(2) {
            // contiguous, non-overlapping, ordered by meridian
            assert_eq!(pair[0].lon_max, pair[1].lon_min);
            assert!(pair[0].central_meridian < pair[1].central_meridian);
        }
        for zone in &TM3_ZONES {
            assert_eq!(zone.lon_max - zone.lon_min, 3.0);
            assert_eq!(zone.central_meridian, (zone.lon_min + zone.lon_max) / 2.0);
        }
    }

    #[test]
    fn test_zone_for_longitude_coverage() {
        assert_eq!(zone_for_longitude(93.0).unwrap().code, "46.2");
        assert_eq!(zone_for_longitude(107.6).unwrap().code, "48.2");
        assert_eq!(zone_for_longitude(140.999).unwrap().code, "54.1");
        assert!(zone_for_longitude(92.999).is_none());
        assert!(zone_for_longitude(141.0).is_none());
        assert!(zone_for_longitude(-73.5).is_none());
    }

    #[test]
    fn test_zone_boundary_is_half_open() {
        // a lon_max boundary belongs to the next zone
        assert_eq!(zone_for_longitude(96.0).unwrap().code, "47.1");
        assert_eq!(zone_for_longitude(114.0).unwrap().code, "50.1");
    }

    #[test]
    fn test_zone_for_code() {
        assert_eq!(zone_for_code("49.2").unwrap().central_meridian, 112.5);
        assert!(zone_for_code("49.3").is_none());
        assert!(zone_for_code("49").is_none());
    }

    #[test]
    fn test_zone_for_code_prefix() {
        assert_eq!(zone_for_code_prefix("49").unwrap().code, "49.1");
        assert_eq!(zone_for_code_prefix("46").unwrap().code, "46.2");
        assert!(zone_for_code_prefix("45").is_none());
        // a full code is not a prefix of itself
        assert!(zone_for_code_prefix("49.1").is_none());
    }

    #[test]
    fn test_proj_definition_recipe() {
        let def = proj_definition(zone_for_code("48.2").unwrap());
        assert!(def.contains("+proj=tmerc"));
        assert!(def.contains("+lon_0=106.5"));
        assert!(def.contains("+k=0.9999"));
        assert!(def.contains("+x_0=200000"));
        assert!(def.contains("+y_0=1500000"));
        assert!(def.contains("+towgs84=0,0,0,0,0,0,0"));
    }

    #[test]
    fn test_geo_to_tm3_bandung() {
        // 105 <= 107.6 < 108 puts Bandung in zone 48.2 (meridian 106.5)
        let tm3 = geo_to_tm3(GeoPoint::new(-6.9, 107.6)).unwrap().unwrap();
        assert_eq!(tm3.zone_code, "48.2");
        assert_eq!(tm3.epsg, 9488);
        // 1.1° east of the meridian: easting sits east of the false origin
        assert!(tm3.easting > FALSE_EASTING);
        assert!(tm3.easting < FALSE_EASTING + 200_000.0);
        // 6.9° south of the equator: northing well below the false origin
        assert!(tm3.northing < FALSE_NORTHING);
    }

    #[test]
    fn test_geo_to_tm3_outside_coverage() {
        assert!(geo_to_tm3(GeoPoint::new(40.7, -73.9)).unwrap().is_none());
        assert!(geo_to_tm3(GeoPoint::new(35.6, 139.7)).unwrap().is_some());
    }

    #[test]
    fn test_tm3_round_trip() {
        let points = [
            GeoPoint::new(-6.9, 107.6),
            GeoPoint::new(3.6, 98.7),
            GeoPoint::new(-8.65, 115.2),
            GeoPoint::new(-2.5, 140.7),
        ];
        for point in points {
            let tm3 = geo_to_tm3(point).unwrap().unwrap();
            let back = tm3_to_geo(tm3.zone_code, tm3.easting, tm3.northing)
                .unwrap()
                .unwrap();
            assert!(
                (back.latitude - point.latitude).abs() < 1e-6,
                "latitude drifted for {:?}",
                point
            );
            assert!(
                (back.longitude - point.longitude).abs() < 1e-6,
                "longitude drifted for {:?}",
                point
            );
        }
    }

    #[test]
    fn test_tm3_to_geo_unknown_code() {
        assert!(tm3_to_geo("45.1", 200_000.0, 1_500_000.0)
            .unwrap()
            .is_none());
    }
}
