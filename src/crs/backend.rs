use crate::error::{Error, Result};
use crate::types::GeoPoint;
use proj::Proj;

/// PROJ definition of the geographic pivot system: WGS84, degrees,
/// longitude/latitude axis order
pub const WGS84_LONGLAT: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// Direction of a [`GeoTransform`]
enum Direction {
    Forward,
    Inverse,
}

/// Transforms points between WGS84 geographic coordinates and a projected
/// CRS described by a PROJ parameter string
pub struct GeoTransform {
    proj: Proj,
    direction: Direction,
    definition: String,
}

impl GeoTransform {
    /// Creates a transform from WGS84 lon/lat into the projected CRS
    pub fn to_projected(definition: &str) -> Result<Self> {
        let proj = Proj::new_known_crs(WGS84_LONGLAT, definition, None)
            .map_err(|e| Error::Projection(format!("Failed to create projection: {}", e)))?;

        Ok(Self {
            proj,
            direction: Direction::Forward,
            definition: definition.to_string(),
        })
    }

    /// Creates a transform from the projected CRS back into WGS84 lon/lat
    pub fn to_geographic(definition: &str) -> Result<Self> {
        let proj = Proj::new_known_crs(definition, WGS84_LONGLAT, None)
            .map_err(|e| Error::Projection(format!("Failed to create projection: {}", e)))?;

        Ok(Self {
            proj,
            direction: Direction::Inverse,
            definition: definition.to_string(),
        })
    }

    /// Projects a geographic point to easting/northing in meters.
    /// Only valid for transforms created with [`GeoTransform::to_projected`].
    pub fn project(&self, point: GeoPoint) -> Result<(f64, f64)> {
        debug_assert!(matches!(self.direction, Direction::Forward));

        let result = self
            .proj
            .convert((point.longitude, point.latitude))
            .map_err(|e| Error::Projection(format!("Transformation failed: {}", e)))?;

        Ok((result.0, result.1))
    }

    /// Unprojects easting/northing in meters to a geographic point.
    /// Only valid for transforms created with [`GeoTransform::to_geographic`].
    pub fn unproject(&self, easting: f64, northing: f64) -> Result<GeoPoint> {
        debug_assert!(matches!(self.direction, Direction::Inverse));

        let result = self
            .proj
            .convert((easting, northing))
            .map_err(|e| Error::Projection(format!("Transformation failed: {}", e)))?;

        Ok(GeoPoint::new(result.1, result.0))
    }

    /// Returns the PROJ definition string of the projected side
    pub fn definition(&self) -> &str {
        &self.definition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_definition_is_projection_error() {
        let result = GeoTransform::to_projected("+proj=nonsense");
        assert!(matches!(result, Err(Error::Projection(_))));
    }

    #[test]
    fn test_definition_accessor() {
        let def = "+proj=utm +zone=48 +south +datum=WGS84 +units=m +no_defs";
        let transform = GeoTransform::to_projected(def).unwrap();
        assert_eq!(transform.definition(), def);
    }

    #[test]
    fn test_project_unproject_agree() {
        let def = "+proj=utm +zone=48 +south +datum=WGS84 +units=m +no_defs";
        let forward = GeoTransform::to_projected(def).unwrap();
        let inverse = GeoTransform::to_geographic(def).unwrap();

        let point = GeoPoint::new(-6.9, 107.6);
        let (easting, northing) = forward.project(point).unwrap();
        let back = inverse.unproject(easting, northing).unwrap();

        assert!((back.latitude - point.latitude).abs() < 1e-6);
        assert!((back.longitude - point.longitude).abs() < 1e-6);
    }
}
