//! Coordinates and bounding boxes
//!
//! A point's position is a (longitude, latitude) pair; a listing request is
//! scoped by a rectangular box given as two opposite corners. Corners are
//! normalized on construction so either ordering works, and containment is
//! inclusive on all edges.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// A validated (longitude, latitude) pair.
///
/// Construction rejects NaN and infinite values; no range clamping is
/// applied beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinates {
    /// Create coordinates, rejecting non-finite values.
    ///
    /// # Example
    /// ```
    /// use mapdrop_core::Coordinates;
    ///
    /// assert!(Coordinates::new(-93.2624, 44.9343).is_ok());
    /// assert!(Coordinates::new(f64::NAN, 44.9343).is_err());
    /// ```
    pub fn new(lng: f64, lat: f64) -> Result<Self, ValidationError> {
        if !lng.is_finite() {
            return Err(ValidationError::NotFinite { field: "longitude" });
        }
        if !lat.is_finite() {
            return Err(ValidationError::NotFinite { field: "latitude" });
        }

        Ok(Self { lng, lat })
    }

    /// Coordinates as a `[lng, lat]` array, the wire geometry order.
    pub fn to_array(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

/// A rectangular lat/lng region, stored as normalized edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    west: f64,
    east: f64,
    south: f64,
    north: f64,
}

impl BoundingBox {
    /// Build a box from two opposite corners, in either order.
    pub fn from_corners(a: Coordinates, b: Coordinates) -> Self {
        Self {
            west: a.lng.min(b.lng),
            east: a.lng.max(b.lng),
            south: a.lat.min(b.lat),
            north: a.lat.max(b.lat),
        }
    }

    pub fn west(&self) -> f64 {
        self.west
    }

    pub fn east(&self) -> f64 {
        self.east
    }

    pub fn south(&self) -> f64 {
        self.south
    }

    pub fn north(&self) -> f64 {
        self.north
    }

    /// Whether the box contains the point. Edges count as inside.
    pub fn contains(&self, c: Coordinates) -> bool {
        c.lng >= self.west && c.lng <= self.east && c.lat >= self.south && c.lat <= self.north
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite() {
        let err = Coordinates::new(f64::INFINITY, 0.0).unwrap_err();
        assert!(matches!(err, ValidationError::NotFinite { field: "longitude" }));

        let err = Coordinates::new(0.0, f64::NAN).unwrap_err();
        assert!(matches!(err, ValidationError::NotFinite { field: "latitude" }));
    }

    #[test]
    fn accepts_extreme_but_finite() {
        assert!(Coordinates::new(-180.0, 90.0).is_ok());
        assert!(Coordinates::new(f64::MAX, f64::MIN).is_ok());
    }

    #[test]
    fn corners_normalize_in_either_order() {
        let ne = Coordinates::new(-93.0, 45.0).unwrap();
        let sw = Coordinates::new(-94.0, 44.0).unwrap();

        let from_ne_sw = BoundingBox::from_corners(ne, sw);
        let from_sw_ne = BoundingBox::from_corners(sw, ne);
        assert_eq!(from_ne_sw, from_sw_ne);

        assert_eq!(from_ne_sw.west(), -94.0);
        assert_eq!(from_ne_sw.east(), -93.0);
        assert_eq!(from_ne_sw.south(), 44.0);
        assert_eq!(from_ne_sw.north(), 45.0);
    }

    #[test]
    fn containment_is_inclusive() {
        let bx = BoundingBox::from_corners(
            Coordinates::new(-94.0, 44.0).unwrap(),
            Coordinates::new(-93.0, 45.0).unwrap(),
        );

        assert!(bx.contains(Coordinates::new(-93.5, 44.5).unwrap()));
        // Edge and corner points are inside.
        assert!(bx.contains(Coordinates::new(-94.0, 44.5).unwrap()));
        assert!(bx.contains(Coordinates::new(-93.0, 45.0).unwrap()));

        assert!(!bx.contains(Coordinates::new(-92.9, 44.5).unwrap()));
        assert!(!bx.contains(Coordinates::new(-93.5, 45.1).unwrap()));
    }
}
