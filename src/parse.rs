//! Free-text coordinate input parsing
//!
//! Search input may be a TM3 coordinate, a UTM coordinate, a bare lat/lng
//! pair, or anything else (typically a place name for the geocoder). The
//! grammars overlap: a TM3 zone code like "49.2" reads like a latitude,
//! and a UTM zone number like "48" reads like one too. Matchers therefore
//! run in a fixed order from most to least specific, and the first match
//! wins. A stage that matches syntactically but fails validation falls
//! through without consuming the input.

use lazy_static::lazy_static;
use regex::Regex;

use crate::crs::{tm3, utm};
use crate::types::{GeoPoint, Hemisphere, Tm3Coordinate, UtmCoordinate, UtmZone};

/// A coordinate query recognized in free-text input. Matched variants
/// carry both the typed query and its resolved geographic point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedInput {
    Tm3 {
        coordinate: Tm3Coordinate,
        point: GeoPoint,
    },
    Utm {
        coordinate: UtmCoordinate,
        point: GeoPoint,
    },
    Geographic(GeoPoint),
    Unrecognized,
}

type Matcher = fn(&str) -> Option<ParsedInput>;

/// Tried in order; first `Some` wins
const MATCHERS: [Matcher; 3] = [match_tm3, match_utm, match_geographic];

/// Parses a raw search string into a typed coordinate query.
///
/// Never fails: input matching none of the grammars, including empty or
/// whitespace-only strings, yields [`ParsedInput::Unrecognized`].
pub fn parse(raw: &str) -> ParsedInput {
    let query = raw.trim();
    if query.is_empty() {
        return ParsedInput::Unrecognized;
    }

    MATCHERS
        .iter()
        .find_map(|matcher| matcher(query))
        .unwrap_or(ParsedInput::Unrecognized)
}

lazy_static! {
    // "TM3 49.2 200978 1344535", "49.2 200000 1500000", "tm3 49 200000 1500000"
    static ref TM3_RE: Regex =
        Regex::new(r"^(?i:tm3\s+)?(\d+(?:\.\d+)?)\s+([\d.]+)\s+([\d.]+)$")
            .expect("failed to create regex");

    // "48S 791000 9236000", "48 s 791000 9236000", "UTM 48S 791000 9236000"
    static ref UTM_RE: Regex =
        Regex::new(r"^(?i:utm\s+)?(\d{1,2})\s*([NSns])\s+([\d.]+)\s+([\d.]+)$")
            .expect("failed to create regex");

    // "-6.9, 107.6", "-6.9; 107.6", "-6.9 107.6"
    static ref GEO_RE: Regex =
        Regex::new(r"^(-?\d+\.?\d*)\s*[,;\s]\s*(-?\d+\.?\d*)$")
            .expect("failed to create regex");
}

fn match_tm3(query: &str) -> Option<ParsedInput> {
    let caps = TM3_RE.captures(query)?;

    let code_token = caps.get(1)?.as_str();
    let easting: f64 = caps.get(2)?.as_str().parse().ok()?;
    let northing: f64 = caps.get(3)?.as_str().parse().ok()?;

    // exact code first, then short-prefix resolution for inputs like "49"
    let zone = tm3::zone_for_code(code_token).or_else(|| {
        if code_token.contains('.') {
            None
        } else {
            tm3::zone_for_code_prefix(code_token)
        }
    })?;

    // nonsensical easting/northing pairs surface here, either as a
    // backend error or as a point outside the valid geographic range
    let point = tm3::tm3_to_geo(zone.code, easting, northing).ok()??;
    if !point.in_valid_range() {
        return None;
    }

    Some(ParsedInput::Tm3 {
        coordinate: Tm3Coordinate::new(zone.code, zone.epsg, easting, northing),
        point,
    })
}

fn match_utm(query: &str) -> Option<ParsedInput> {
    let caps = UTM_RE.captures(query)?;

    let zone_number: u8 = caps.get(1)?.as_str().parse().ok()?;
    let hemisphere = Hemisphere::from_letter(caps.get(2)?.as_str().chars().next()?)?;
    let easting: f64 = caps.get(3)?.as_str().parse().ok()?;
    let northing: f64 = caps.get(4)?.as_str().parse().ok()?;

    if !(1..=60).contains(&zone_number) {
        return None;
    }

    let point = utm::utm_to_geo(zone_number, hemisphere, easting, northing).ok()?;
    if !point.in_valid_range() {
        return None;
    }

    Some(ParsedInput::Utm {
        coordinate: UtmCoordinate::new(UtmZone::new(zone_number, hemisphere), easting, northing),
        point,
    })
}

fn match_geographic(query: &str) -> Option<ParsedInput> {
    let caps = GEO_RE.captures(query)?;

    let latitude: f64 = caps.get(1)?.as_str().parse().ok()?;
    let longitude: f64 = caps.get(2)?.as_str().parse().ok()?;

    let point = GeoPoint::new(latitude, longitude);
    if !point.in_valid_range() {
        return None;
    }

    Some(ParsedInput::Geographic(point))
}
