use crate::core::constants::DEFAULT_PROJECTION_CACHE_CAPACITY;
use crate::core::geo::{LatLng, TileCoord};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Cache key for one projection: coordinate bit patterns keep the key `Eq`
/// without comparing floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ProjectionKey {
    lat_bits: u64,
    lng_bits: u64,
    zoom: u8,
    tile_size: u32,
}

/// Memoized tile projection with a bounded LRU cache.
///
/// Sustained panning re-projects the same positions over and over, so the
/// projection is worth caching — but the cache must not grow for the life of
/// the process. Capacity-bounded here; callers that want a pass-scoped cache
/// simply construct a fresh projector per clustering pass.
#[derive(Debug)]
pub struct TileProjector {
    cache: LruCache<ProjectionKey, TileCoord>,
    hits: u64,
    misses: u64,
}

impl TileProjector {
    /// Create a projector with the given cache capacity (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Create a projector with the default capacity
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_PROJECTION_CACHE_CAPACITY)
    }

    /// Project a position to its tile coordinate, consulting the cache first.
    ///
    /// Identical `(position, zoom, tile_size)` inputs always yield the
    /// identical tile coordinate, cached or not.
    pub fn project(&mut self, position: &LatLng, zoom: u8, tile_size: u32) -> TileCoord {
        let key = ProjectionKey {
            lat_bits: position.lat.to_bits(),
            lng_bits: position.lng.to_bits(),
            zoom,
            tile_size,
        };

        if let Some(tile) = self.cache.get(&key) {
            self.hits += 1;
            return *tile;
        }

        let tile = TileCoord::from_lat_lng_sized(position, zoom, tile_size);
        self.misses += 1;
        self.cache.put(key, tile);
        log::trace!(
            "projection cache miss for z{zoom} ({}, {}) -> {}/{}",
            position.lat,
            position.lng,
            tile.x,
            tile.y
        );
        tile
    }

    /// Cache hit/miss counters since construction
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    /// Current number of cached projections
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.len() == 0
    }

    /// Cache capacity
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    /// Drop all cached projections
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl Default for TileProjector {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}
