//! Core value types for coordkit

use serde::{Deserialize, Serialize};

/// A geographic point on the WGS84 ellipsoid, in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a new geographic point
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns true when latitude is in [-90, 90] and longitude in [-180, 180]
    pub fn in_valid_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Hemisphere of a UTM zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Hemisphere for a latitude: north for lat >= 0, south otherwise
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude >= 0.0 {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }

    /// Parses a hemisphere letter, case-insensitive
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Hemisphere::North),
            'S' => Some(Hemisphere::South),
            _ => None,
        }
    }

    /// Returns the single-letter designator
    pub fn letter(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
        }
    }
}

/// A UTM zone descriptor: zone number 1..=60 plus hemisphere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtmZone {
    pub number: u8,
    pub hemisphere: Hemisphere,
}

impl UtmZone {
    pub fn new(number: u8, hemisphere: Hemisphere) -> Self {
        Self { number, hemisphere }
    }
}

impl std::fmt::Display for UtmZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.number, self.hemisphere.letter())
    }
}

/// A projected UTM coordinate. Easting/northing are meaningless without
/// the zone descriptor they were projected in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UtmCoordinate {
    pub zone: UtmZone,
    pub easting: f64,
    pub northing: f64,
}

impl UtmCoordinate {
    pub fn new(zone: UtmZone, easting: f64, northing: f64) -> Self {
        Self {
            zone,
            easting,
            northing,
        }
    }
}

/// A projected TM3 coordinate in one of the 16 Indonesian 3-degree zones.
/// The zone code always points into the static zone table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tm3Coordinate {
    pub zone_code: &'static str,
    pub epsg: u32,
    pub easting: f64,
    pub northing: f64,
}

impl Tm3Coordinate {
    pub fn new(zone_code: &'static str, epsg: u32, easting: f64, northing: f64) -> Self {
        Self {
            zone_code,
            epsg,
            easting,
            northing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_range() {
        assert!(GeoPoint::new(-6.9, 107.6).in_valid_range());
        assert!(!GeoPoint::new(91.0, 50.0).in_valid_range());
        assert!(!GeoPoint::new(45.0, 181.0).in_valid_range());
    }

    #[test]
    fn test_hemisphere_from_latitude() {
        assert_eq!(Hemisphere::from_latitude(0.0), Hemisphere::North);
        assert_eq!(Hemisphere::from_latitude(51.0), Hemisphere::North);
        assert_eq!(Hemisphere::from_latitude(-6.9), Hemisphere::South);
    }

    #[test]
    fn test_hemisphere_from_letter() {
        assert_eq!(Hemisphere::from_letter('n'), Some(Hemisphere::North));
        assert_eq!(Hemisphere::from_letter('S'), Some(Hemisphere::South));
        assert_eq!(Hemisphere::from_letter('E'), None);
    }

    #[test]
    fn test_utm_zone_display() {
        let zone = UtmZone::new(48, Hemisphere::South);
        assert_eq!(zone.to_string(), "48S");
    }
}
