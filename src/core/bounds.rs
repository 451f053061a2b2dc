use crate::core::constants::{DEFAULT_EXTEND_FACTOR, MAX_BOUND_LATITUDE, MAX_BOUND_LONGITUDE};
use crate::core::geo::LatLng;
use crate::{GeoError, Result};
use serde::{Deserialize, Serialize};

/// Represents a bounding box of geographical coordinates.
///
/// `north >= south` always holds. `west > east` is legal and means the box
/// crosses the antimeridian (spans through ±180°).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl LatLngBounds {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        debug_assert!(north >= south, "bounds with north < south are invalid");
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Computes the minimal axis-aligned bounds containing every position.
    ///
    /// This is a plain max/min reduction over lat and lng. It deliberately
    /// does NOT produce an antimeridian-aware minimal box: a set of points
    /// straddling ±180° yields a box spanning most of the world. Map
    /// fit-bounds calls tolerate that; changing it would silently move
    /// viewports.
    pub fn from_positions(positions: &[LatLng]) -> Result<Self> {
        if positions.is_empty() {
            return Err(GeoError::EmptyInput("cannot compute bounds of zero positions"));
        }

        let mut north = f64::NEG_INFINITY;
        let mut south = f64::INFINITY;
        let mut east = f64::NEG_INFINITY;
        let mut west = f64::INFINITY;

        for position in positions {
            north = north.max(position.lat);
            south = south.min(position.lat);
            east = east.max(position.lng);
            west = west.min(position.lng);
        }

        Ok(Self::new(north, south, east, west))
    }

    /// Extends the bounds to include a position
    pub fn extend(&mut self, position: &LatLng) {
        self.north = self.north.max(position.lat);
        self.south = self.south.min(position.lat);
        self.east = self.east.max(position.lng);
        self.west = self.west.min(position.lng);
    }

    /// Returns a copy grown symmetrically by `factor × span` per axis.
    ///
    /// Edges are clamped to ±89.99999° latitude and ±179.99999° longitude so
    /// the result never degenerates at the poles or the antimeridian.
    pub fn extended(&self, factor: f64) -> Result<Self> {
        if factor < 0.0 {
            return Err(GeoError::InvalidArgument(format!(
                "extension factor must be non-negative, got {factor}"
            )));
        }

        let lat_pad = factor * (self.north - self.south);
        let lng_pad = factor * (self.east - self.west);

        Ok(Self::new(
            (self.north + lat_pad).min(MAX_BOUND_LATITUDE),
            (self.south - lat_pad).max(-MAX_BOUND_LATITUDE),
            (self.east + lng_pad).min(MAX_BOUND_LONGITUDE),
            (self.west - lng_pad).max(-MAX_BOUND_LONGITUDE),
        ))
    }

    /// Extends by the default 10% factor
    pub fn extended_default(&self) -> Self {
        // factor is a non-negative constant, the error path is unreachable
        self.extended(DEFAULT_EXTEND_FACTOR)
            .unwrap_or(*self)
    }

    /// Checks if the bounds contain a position.
    ///
    /// The latitude range test runs first and short-circuits to `false`
    /// before any longitude normalization. Longitudes (the candidate's and
    /// the box edges) are wrapped into [-180, 180] before comparison, so a
    /// caller-supplied 541° behaves like -179°. Antimeridian-crossing boxes
    /// (`west > east`) accept `lng <= east || lng >= west`.
    pub fn contains(&self, position: &LatLng) -> bool {
        if position.lat < self.south || position.lat > self.north {
            return false;
        }

        let lng = LatLng::wrap_lng(position.lng);
        let east = LatLng::wrap_lng(self.east);
        let west = LatLng::wrap_lng(self.west);

        if west > east {
            lng <= east || lng >= west
        } else {
            lng >= west && lng <= east
        }
    }

    /// True when the box spans through ±180° longitude
    pub fn crosses_antimeridian(&self) -> bool {
        self.west > self.east
    }

    /// Gets the center of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new((self.north + self.south) / 2.0, (self.east + self.west) / 2.0)
    }

    /// Gets the span of the bounds as (lat span, lng span)
    pub fn span(&self) -> (f64, f64) {
        (self.north - self.south, self.east - self.west)
    }

    /// Returns the union of this bounds with another bounds.
    ///
    /// Same simple max/min reduction as [`from_positions`](Self::from_positions);
    /// not antimeridian-aware.
    pub fn union(&self, other: &LatLngBounds) -> LatLngBounds {
        LatLngBounds::new(
            self.north.max(other.north),
            self.south.min(other.south),
            self.east.max(other.east),
            self.west.min(other.west),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_positions() {
        let positions = [
            LatLng::new(10.0, 20.0),
            LatLng::new(15.0, 25.0),
            LatLng::new(5.0, 15.0),
        ];
        let bounds = LatLngBounds::from_positions(&positions).unwrap();
        assert_eq!(bounds, LatLngBounds::new(15.0, 5.0, 25.0, 15.0));
    }

    #[test]
    fn test_bounds_from_empty_is_an_error() {
        let err = LatLngBounds::from_positions(&[]).unwrap_err();
        assert!(matches!(err, GeoError::EmptyInput(_)));
    }

    #[test]
    fn test_bounds_from_single_position_degenerates() {
        let bounds = LatLngBounds::from_positions(&[LatLng::new(3.0, 4.0)]).unwrap();
        assert_eq!(bounds, LatLngBounds::new(3.0, 3.0, 4.0, 4.0));
    }

    #[test]
    fn test_extended_grows_symmetrically() {
        let bounds = LatLngBounds::new(10.0, 0.0, 20.0, 10.0);
        let grown = bounds.extended(0.5).unwrap();
        assert_eq!(grown, LatLngBounds::new(15.0, -5.0, 25.0, 5.0));
    }

    #[test]
    fn test_extended_clamps_near_poles_and_antimeridian() {
        let bounds = LatLngBounds::new(89.0, -89.0, 179.0, -179.0);
        let grown = bounds.extended(0.1).unwrap();
        assert!(grown.north <= 89.99999 && grown.north > 89.0);
        assert!(grown.south >= -89.99999 && grown.south < -89.0);
        assert!(grown.east <= 179.99999 && grown.east > 179.0);
        assert!(grown.west >= -179.99999 && grown.west < -179.0);
    }

    #[test]
    fn test_extended_rejects_negative_factor() {
        let bounds = LatLngBounds::new(10.0, 0.0, 20.0, 10.0);
        let err = bounds.extended(-0.1).unwrap_err();
        assert!(matches!(err, GeoError::InvalidArgument(_)));
    }

    #[test]
    fn test_extended_zero_factor_is_identity() {
        let bounds = LatLngBounds::new(10.0, 0.0, 20.0, 10.0);
        assert_eq!(bounds.extended(0.0).unwrap(), bounds);
    }

    #[test]
    fn test_contains_simple_box() {
        let bounds = LatLngBounds::new(10.0, 0.0, 20.0, 10.0);
        assert!(bounds.contains(&LatLng::new(5.0, 15.0)));
        assert!(!bounds.contains(&LatLng::new(15.0, 15.0)));
        assert!(!bounds.contains(&LatLng::new(5.0, 25.0)));
    }

    #[test]
    fn test_contains_across_antimeridian() {
        let bounds = LatLngBounds::new(10.0, 0.0, -170.0, 170.0);
        assert!(bounds.crosses_antimeridian());
        assert!(bounds.contains(&LatLng::new(5.0, 175.0)));
        assert!(bounds.contains(&LatLng::new(5.0, -175.0)));
        assert!(!bounds.contains(&LatLng::new(5.0, 0.0)));
    }

    #[test]
    fn test_contains_normalizes_wrapped_longitude() {
        let bounds = LatLngBounds::new(10.0, 0.0, 20.0, 10.0);
        assert_eq!(
            bounds.contains(&LatLng::new(5.0, 15.0 + 360.0)),
            bounds.contains(&LatLng::new(5.0, 15.0))
        );
        // 541° wraps to -179°, which is outside this box
        assert!(!bounds.contains(&LatLng::new(5.0, 541.0)));
    }

    #[test]
    fn test_contains_latitude_short_circuits() {
        // An absurd longitude must never be looked at once latitude misses;
        // exercised with a wrapping box where the lng branch would accept it.
        let bounds = LatLngBounds::new(10.0, 0.0, -170.0, 170.0);
        assert!(!bounds.contains(&LatLng::new(50.0, 175.0)));
        assert!(!bounds.contains(&LatLng::new(-50.0, 9999.0)));
    }

    #[test]
    fn test_union_is_min_max() {
        let a = LatLngBounds::new(10.0, 0.0, 20.0, 10.0);
        let b = LatLngBounds::new(15.0, 5.0, 30.0, 25.0);
        assert_eq!(a.union(&b), LatLngBounds::new(15.0, 0.0, 30.0, 10.0));
    }

    #[test]
    fn test_center_and_span() {
        let bounds = LatLngBounds::new(10.0, 0.0, 20.0, 10.0);
        assert_eq!(bounds.center(), LatLng::new(5.0, 15.0));
        assert_eq!(bounds.span(), (10.0, 10.0));
    }
}
