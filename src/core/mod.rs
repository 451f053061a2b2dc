pub mod bounds;
pub mod constants;
pub mod geo;

// Re-export the essential types
pub use bounds::LatLngBounds;
pub use geo::{LatLng, TileCoord};
