//! Coordinate reference system conversions
//!
//! Geographic (WGS84) to/from UTM and to/from the Indonesian TM3
//! 3-degree Transverse Mercator zones. All conversions pivot through
//! [`GeoPoint`](crate::types::GeoPoint) and delegate the projection
//! math to PROJ.

pub mod backend;
pub mod tm3;
pub mod utm;

pub use backend::{GeoTransform, WGS84_LONGLAT};
pub use tm3::{Tm3Zone, TM3_ZONES};
