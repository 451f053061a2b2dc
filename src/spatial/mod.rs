pub mod clustering;
pub mod projector;

// Re-export the essential types
pub use clustering::{ClusterGroup, ClusterItem, GroupDiff};
pub use projector::TileProjector;
