//! # Geoplet
//!
//! Geographic utility primitives for interactive maps: lat/lng bounds
//! arithmetic with antimeridian handling, tile-based marker clustering,
//! and the throttle/debounce rate limiters used to tame high-frequency
//! interaction events (drag, mousemove, pan).
//!
//! Everything here is synchronous and single-threaded. The clustering and
//! bounds functions are pure; only the rate limiters carry state, and that
//! state is private to one instance.

pub mod core;
pub mod diag;
pub mod limit;
pub mod marker;
pub mod prelude;
pub mod spatial;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::LatLngBounds,
    geo::{LatLng, TileCoord},
};

pub use crate::spatial::{
    clustering::{
        cluster_in_viewport, diff_groups, organise_clusters, organise_clusters_traced,
        organise_clusters_with, retention_bounds, ClusterGroup, ClusterItem, GroupDiff,
    },
    projector::TileProjector,
};

pub use crate::limit::{debounce::Debounce, throttle::Throttle};

pub use crate::diag::DiagnosticsBuffer;

pub use crate::marker::{resolve_pin, ElementHandle, PinContent, PinStyle, ResolvedPin};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, GeoError>;

/// Common error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    #[error("empty input: {0}")]
    EmptyInput(&'static str),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Error type alias for convenience
pub type Error = GeoError;
