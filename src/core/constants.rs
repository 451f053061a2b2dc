//! Core constants derived from common web-map conventions.
//! Keeping them in a single place makes it easier to tweak library-wide magic numbers.

use std::time::Duration;

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Latitude clamp for the Web Mercator projection; beyond this the
/// `tan`-based transform degenerates.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.0511287798;

/// Extended bounds never reach the exact poles; downstream map APIs
/// misbehave at ±90.
pub const MAX_BOUND_LATITUDE: f64 = 89.99999;

/// Extended bounds never reach the exact antimeridian.
pub const MAX_BOUND_LONGITUDE: f64 = 179.99999;

/// Default growth factor for bounds extension (10% per axis).
pub const DEFAULT_EXTEND_FACTOR: f64 = 0.1;

/// Default throttle window for high-frequency interaction events.
pub const DEFAULT_THROTTLE_INTERVAL: Duration = Duration::from_millis(500);

/// Default debounce quiet period.
pub const DEFAULT_DEBOUNCE_WAIT: Duration = Duration::from_millis(300);

/// Upper bound on total debounce delay under continuous input.
pub const DEFAULT_DEBOUNCE_MAX_WAIT: Duration = Duration::from_millis(1000);

/// Default capacity of the tile-projection LRU cache.
pub const DEFAULT_PROJECTION_CACHE_CAPACITY: usize = 4096;

/// Default viewport clustering grid: 8 columns.
pub const VIEWPORT_GRID_COLS: u32 = 8;

/// Default viewport clustering grid: 4 rows.
pub const VIEWPORT_GRID_ROWS: u32 = 4;

/// How many `Deferred` levels pin resolution will follow before giving up.
pub const MAX_PIN_RESOLVE_DEPTH: usize = 8;
