//! coordkit - CRS conversion and coordinate-input parsing for WebGIS
//!
//! coordkit converts geographic WGS84 points to and from UTM and the
//! Indonesian TM3 3-degree Transverse Mercator zones, and parses free-text
//! search input into typed coordinate queries.
//!
//! # Examples
//!
//! ## Converting a point
//!
//! ```no_run
//! use coordkit::{geo_to_tm3, geo_to_utm, GeoPoint};
//!
//! let bandung = GeoPoint::new(-6.9, 107.6);
//!
//! let utm = geo_to_utm(bandung)?;
//! println!("UTM {}: {:.5} E, {:.5} N", utm.zone, utm.easting, utm.northing);
//!
//! if let Some(tm3) = geo_to_tm3(bandung)? {
//!     println!("TM3 {} (EPSG:{}): {:.5} E, {:.5} N",
//!         tm3.zone_code, tm3.epsg, tm3.easting, tm3.northing);
//! }
//! # Ok::<(), coordkit::Error>(())
//! ```
//!
//! ## Parsing search input
//!
//! ```no_run
//! use coordkit::parse::{parse, ParsedInput};
//!
//! match parse("49.2 200000 1500000") {
//!     ParsedInput::Tm3 { coordinate, point } => {
//!         println!("TM3 zone {} is at {:.6}, {:.6}",
//!             coordinate.zone_code, point.latitude, point.longitude);
//!     }
//!     ParsedInput::Unrecognized => println!("send it to the geocoder"),
//!     _ => {}
//! }
//! ```

pub mod api;
pub mod crs;
pub mod error;
pub mod format;
pub mod parse;
pub mod types;

pub use crs::tm3::{geo_to_tm3, tm3_to_geo, Tm3Zone, TM3_ZONES};
pub use crs::utm::{geo_to_utm, utm_to_geo};
pub use crs::{GeoTransform, WGS84_LONGLAT};
pub use error::{Error, Result};
pub use format::{dms, format_point, Axis, CoordFormat};
pub use parse::{parse, ParsedInput};
pub use types::{GeoPoint, Hemisphere, Tm3Coordinate, UtmCoordinate, UtmZone};
