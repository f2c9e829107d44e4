//! DD and DMS display formatting for geographic coordinates

use crate::types::GeoPoint;

/// Which axis a value sits on, for picking the N/S vs E/W designator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// Geographic display format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordFormat {
    DecimalDegrees,
    DegreesMinutesSeconds,
}

/// Formats a decimal-degree value as degrees/minutes/seconds,
/// e.g. `6° 54' 00.00" S`
pub fn dms(value: f64, axis: Axis) -> String {
    let dir = match axis {
        Axis::Latitude => {
            if value >= 0.0 {
                'N'
            } else {
                'S'
            }
        }
        Axis::Longitude => {
            if value >= 0.0 {
                'E'
            } else {
                'W'
            }
        }
    };

    let abs = value.abs();
    let deg = abs.floor();
    let min_full = (abs - deg) * 60.0;
    let min = min_full.floor();
    let sec = (min_full - min) * 60.0;

    format!("{}° {:02}' {:05.2}\" {}", deg as u32, min as u32, sec, dir)
}

/// Formats a point in the requested display format, returning
/// (latitude, longitude) strings. DD uses 6 decimal places.
pub fn format_point(point: GeoPoint, format: CoordFormat) -> (String, String) {
    match format {
        CoordFormat::DecimalDegrees => (
            format!("{:.6}", point.latitude),
            format!("{:.6}", point.longitude),
        ),
        CoordFormat::DegreesMinutesSeconds => (
            dms(point.latitude, Axis::Latitude),
            dms(point.longitude, Axis::Longitude),
        ),
    }
}
