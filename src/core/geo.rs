use crate::core::constants::{MAX_MERCATOR_LATITUDE, TILE_SIZE};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Wraps longitude to [-180, 180] range
    ///
    /// Interaction layers routinely hand over longitudes accumulated across
    /// repeated world wraps (e.g. 541° from a long eastward drag); those are
    /// equivalent to their wrapped value and must compare equal.
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Clamps latitude to the Web Mercator projection range
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a tile coordinate in the slippy map tile system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Creates a tile coordinate from a LatLng and zoom level, with the
    /// standard 256px tiles.
    pub fn from_lat_lng(lat_lng: &LatLng, zoom: u8) -> Self {
        Self::from_lat_lng_sized(lat_lng, zoom, TILE_SIZE)
    }

    /// Creates a tile coordinate from a LatLng, zoom level, and tile size.
    ///
    /// Larger tiles cover more of the world, so the effective grid is
    /// `2^zoom * 256 / tile_size` tiles across. `tile_size = 256` reproduces
    /// the textbook slippy-map formula. Pure function of its inputs.
    pub fn from_lat_lng_sized(lat_lng: &LatLng, zoom: u8, tile_size: u32) -> Self {
        let lat_rad = LatLng::clamp_lat(lat_lng.lat).to_radians();
        let n = 2_f64.powi(zoom as i32) * (TILE_SIZE as f64 / tile_size.max(1) as f64);

        let frac_x = (LatLng::wrap_lng(lat_lng.lng) + 180.0) / 360.0;
        let frac_y = (1.0 - lat_rad.tan().asinh() / PI) / 2.0;

        let max_index = (n - 1.0).max(0.0);
        let x = (frac_x * n).floor().clamp(0.0, max_index) as u32;
        let y = (frac_y * n).floor().clamp(0.0, max_index) as u32;

        Self::new(x, y, zoom)
    }

    /// Converts tile coordinate to LatLng (northwest corner)
    pub fn to_lat_lng(&self) -> LatLng {
        let n = 2_f64.powi(self.z as i32);
        let lng = self.x as f64 / n * 360.0 - 180.0;
        let lat_rad = (PI * (1.0 - 2.0 * self.y as f64 / n)).sinh().atan();

        LatLng::new(lat_rad.to_degrees(), lng)
    }

    /// Checks if the tile is valid for the given zoom level
    pub fn is_valid(&self) -> bool {
        let max_coord = 2_u32.pow(self.z as u32);
        self.x < max_coord && self.y < max_coord
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(40.7128, -74.0060);
        assert_eq!(coord.lat, 40.7128);
        assert_eq!(coord.lng, -74.0060);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_wrap_lng() {
        assert_eq!(LatLng::wrap_lng(541.0), -179.0);
        assert_eq!(LatLng::wrap_lng(375.0), 15.0);
        assert_eq!(LatLng::wrap_lng(-200.0), 160.0);
        assert_eq!(LatLng::wrap_lng(15.0), 15.0);
    }

    #[test]
    fn test_tile_coord_conversion() {
        let lat_lng = LatLng::new(40.7128, -74.0060);
        let tile = TileCoord::from_lat_lng(&lat_lng, 10);
        let back_to_lat_lng = tile.to_lat_lng();

        // Should be reasonably close (within tile boundaries)
        assert!((back_to_lat_lng.lat - lat_lng.lat).abs() < 1.0);
        assert!((back_to_lat_lng.lng - lat_lng.lng).abs() < 1.0);
    }

    #[test]
    fn test_tile_projection_is_deterministic() {
        let pos = LatLng::new(48.8566, 2.3522);
        let a = TileCoord::from_lat_lng_sized(&pos, 12, 256);
        let b = TileCoord::from_lat_lng_sized(&pos, 12, 256);
        assert_eq!(a, b);
        assert!(a.is_valid());
    }

    #[test]
    fn test_tile_size_scales_grid() {
        // 512px tiles halve the grid, so indices are half the 256px ones
        let pos = LatLng::new(40.7128, -74.0060);
        let fine = TileCoord::from_lat_lng_sized(&pos, 10, 256);
        let coarse = TileCoord::from_lat_lng_sized(&pos, 10, 512);
        assert_eq!(coarse.x, fine.x / 2);
        assert_eq!(coarse.y, fine.y / 2);
    }

    #[test]
    fn test_polar_latitude_is_clamped() {
        // tan(90°) would blow up without the Mercator clamp
        let tile = TileCoord::from_lat_lng_sized(&LatLng::new(90.0, 0.0), 5, 256);
        assert!(tile.is_valid());
        assert_eq!(tile.y, 0);
    }

    #[test]
    fn test_zoom_zero_single_tile() {
        let tile = TileCoord::from_lat_lng_sized(&LatLng::new(51.5, -0.12), 0, 256);
        assert_eq!(tile, TileCoord::new(0, 0, 0));
    }
}
