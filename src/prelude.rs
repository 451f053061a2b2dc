//! Prelude module for common geoplet types and functions
//!
//! Re-exports the most commonly used types and functions for easy importing
//! with `use geoplet::prelude::*;`

pub use crate::core::{
    bounds::LatLngBounds,
    constants::{
        DEFAULT_DEBOUNCE_MAX_WAIT, DEFAULT_DEBOUNCE_WAIT, DEFAULT_EXTEND_FACTOR,
        DEFAULT_THROTTLE_INTERVAL, TILE_SIZE,
    },
    geo::{LatLng, TileCoord},
};

pub use crate::spatial::{
    clustering::{
        cluster_in_viewport, diff_groups, organise_clusters, organise_clusters_with,
        retention_bounds, ClusterGroup, ClusterItem, GroupDiff,
    },
    projector::TileProjector,
};

pub use crate::limit::{debounce::Debounce, throttle::Throttle};

pub use crate::diag::DiagnosticsBuffer;

pub use crate::marker::{resolve_pin, PinContent, PinStyle, ResolvedPin};

pub use crate::{Error as GeoError, Result};

pub use instant::Instant;
pub use std::time::Duration;

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
