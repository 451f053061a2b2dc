use crate::core::bounds::LatLngBounds;
use crate::core::constants::{VIEWPORT_GRID_COLS, VIEWPORT_GRID_ROWS};
use crate::core::geo::LatLng;
use crate::diag::DiagnosticsBuffer;
use crate::prelude::HashMap;
use crate::spatial::projector::TileProjector;
use crate::Result;
use serde::Serialize;

/// A position plus caller payload, as fed into one clustering pass.
///
/// The payload is whatever the render layer needs back out of a group — an
/// identifier, a style hint, a click-callback handle. Items are never
/// mutated by a pass; ownership stays with the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterItem<T> {
    pub position: LatLng,
    pub payload: T,
}

impl<T> ClusterItem<T> {
    pub fn new(position: LatLng, payload: T) -> Self {
        Self { position, payload }
    }
}

impl ClusterItem<()> {
    /// Payload-free item, convenient when only positions matter
    pub fn at(lat: f64, lng: f64) -> Self {
        Self::new(LatLng::new(lat, lng), ())
    }
}

/// One cluster of a pass: representative position, member items, and the
/// group's share of the pass's total item count as a rounded percentage.
///
/// Groups live exactly one invocation; every pass rebuilds the full
/// partition from scratch. The render layer diffs successive outputs (see
/// [`diff_groups`]) to create/move/destroy on-screen markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterGroup<T> {
    pub position: LatLng,
    pub items: Vec<ClusterItem<T>>,
    pub weight: f64,
}

impl<T> ClusterGroup<T> {
    /// Builds a group from its members, given the pass's total item count.
    ///
    /// The centroid is the independent arithmetic mean of lat and lng — not
    /// a spherical centroid. It drifts near the poles and across the
    /// antimeridian, which is acceptable for screen-space cluster badges.
    fn from_items(items: Vec<ClusterItem<T>>, total_items: usize) -> Self {
        debug_assert!(!items.is_empty(), "a cluster group has at least one member");

        let count = items.len() as f64;
        let lat = items.iter().map(|item| item.position.lat).sum::<f64>() / count;
        let lng = items.iter().map(|item| item.position.lng).sum::<f64>() / count;
        let weight = (count / total_items.max(1) as f64 * 100.0).round();

        Self {
            position: LatLng::new(lat, lng),
            items,
            weight,
        }
    }

    /// Get the number of items in the group
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Check if this is a single-item group
    pub fn is_single(&self) -> bool {
        self.items.len() == 1
    }
}

/// Partition items into cluster groups keyed by their slippy-map tile.
///
/// At `zoom >= max_zoom` clustering is bypassed and every item becomes its
/// own singleton group keyed by its input index — high enough zoom shows
/// individual markers, not aggregates. Below that, items sharing a tile at
/// `zoom` are grouped under the key `"{zoom}-{x}-{y}"`.
///
/// An empty `items` slice yields an empty map; that is a valid result, not
/// an error (unlike bounds computation over zero positions).
pub fn organise_clusters<T: Clone>(
    items: &[ClusterItem<T>],
    zoom: u8,
    max_zoom: u8,
    tile_size: u32,
) -> HashMap<String, ClusterGroup<T>> {
    // Pass-scoped projection cache: sized to the pass, dropped with it
    let mut projector = TileProjector::new(items.len());
    organise_clusters_with(&mut projector, items, zoom, max_zoom, tile_size)
}

/// [`organise_clusters`] with a caller-owned projector, so the projection
/// cache survives across passes driven by the same pan/zoom session.
pub fn organise_clusters_with<T: Clone>(
    projector: &mut TileProjector,
    items: &[ClusterItem<T>],
    zoom: u8,
    max_zoom: u8,
    tile_size: u32,
) -> HashMap<String, ClusterGroup<T>> {
    let mut groups = HashMap::default();
    if items.is_empty() {
        return groups;
    }

    if zoom >= max_zoom {
        for (index, item) in items.iter().enumerate() {
            groups.insert(
                index.to_string(),
                ClusterGroup::from_items(vec![item.clone()], items.len()),
            );
        }
        return groups;
    }

    let mut buckets: HashMap<String, Vec<ClusterItem<T>>> = HashMap::default();
    for item in items {
        let tile = projector.project(&item.position, zoom, tile_size);
        let key = format!("{}-{}-{}", zoom, tile.x, tile.y);
        buckets.entry(key).or_default().push(item.clone());
    }

    let total = items.len();
    for (key, members) in buckets {
        groups.insert(key, ClusterGroup::from_items(members, total));
    }

    log::debug!(
        "clustered {} items into {} groups at zoom {}",
        total,
        groups.len(),
        zoom
    );
    groups
}

/// [`organise_clusters`] that also records a one-line pass summary into a
/// caller-supplied diagnostics buffer.
pub fn organise_clusters_traced<T: Clone>(
    items: &[ClusterItem<T>],
    zoom: u8,
    max_zoom: u8,
    tile_size: u32,
    diagnostics: &mut DiagnosticsBuffer,
) -> HashMap<String, ClusterGroup<T>> {
    let groups = organise_clusters(items, zoom, max_zoom, tile_size);
    diagnostics.record(format!(
        "cluster pass: {} items -> {} groups (zoom {}, max {}, tile {}px)",
        items.len(),
        groups.len(),
        zoom,
        max_zoom,
        tile_size
    ));
    groups
}

/// Partition items by a fixed grid spanning the visible viewport.
///
/// Used when an actual viewport is available: items outside the bounds are
/// filtered out first, the rest land in a `cols × rows` grid anchored at the
/// viewport's south-west corner, keyed `"{cell_x},{cell_y}"`. Aggregation is
/// identical to the tile variant, with weights relative to the items that
/// made it through the filter. Antimeridian-crossing viewports unwrap
/// longitudes against the west edge.
pub fn cluster_in_viewport<T: Clone>(
    items: &[ClusterItem<T>],
    viewport: &LatLngBounds,
    cols: u32,
    rows: u32,
) -> HashMap<String, ClusterGroup<T>> {
    let cols = cols.max(1);
    let rows = rows.max(1);

    let visible: Vec<ClusterItem<T>> = items
        .iter()
        .filter(|item| viewport.contains(&item.position))
        .cloned()
        .collect();

    let mut groups = HashMap::default();
    if visible.is_empty() {
        return groups;
    }

    let lat_span = viewport.north - viewport.south;
    let west = LatLng::wrap_lng(viewport.west);
    let east = LatLng::wrap_lng(viewport.east);
    let lng_span = if west > east {
        east - west + 360.0
    } else {
        east - west
    };

    let mut buckets: HashMap<String, Vec<ClusterItem<T>>> = HashMap::default();
    for item in visible.iter() {
        let cell_y = grid_cell(item.position.lat - viewport.south, lat_span, rows);

        let mut lng_offset = LatLng::wrap_lng(item.position.lng) - west;
        if lng_offset < 0.0 {
            lng_offset += 360.0;
        }
        let cell_x = grid_cell(lng_offset, lng_span, cols);

        let key = format!("{},{}", cell_x, cell_y);
        buckets.entry(key).or_default().push(item.clone());
    }

    let total = visible.len();
    for (key, members) in buckets {
        groups.insert(key, ClusterGroup::from_items(members, total));
    }
    groups
}

/// Same as [`cluster_in_viewport`] with the default 8×4 grid
pub fn cluster_in_viewport_default<T: Clone>(
    items: &[ClusterItem<T>],
    viewport: &LatLngBounds,
) -> HashMap<String, ClusterGroup<T>> {
    cluster_in_viewport(items, viewport, VIEWPORT_GRID_COLS, VIEWPORT_GRID_ROWS)
}

fn grid_cell(offset: f64, span: f64, cells: u32) -> u32 {
    if span <= 0.0 {
        return 0;
    }
    let cell = (offset / (span / cells as f64)).floor();
    // The item on the north/east edge belongs to the last cell
    (cell.max(0.0) as u32).min(cells - 1)
}

/// Keys that changed between two clustering passes, for the render layer's
/// create/move/destroy pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupDiff {
    /// Keys present only in the new pass
    pub created: Vec<String>,
    /// Keys present in both passes whose centroid moved
    pub moved: Vec<String>,
    /// Keys present only in the old pass
    pub removed: Vec<String>,
}

/// Compare two pass outputs by key and centroid. Key vectors come back
/// sorted so callers get a deterministic order out of the hash maps.
pub fn diff_groups<T>(
    old: &HashMap<String, ClusterGroup<T>>,
    new: &HashMap<String, ClusterGroup<T>>,
) -> GroupDiff {
    let mut diff = GroupDiff::default();

    for (key, group) in new.iter() {
        match old.get(key) {
            None => diff.created.push(key.clone()),
            Some(previous) if previous.position != group.position => {
                diff.moved.push(key.clone());
            }
            Some(_) => {}
        }
    }
    for key in old.keys() {
        if !new.contains_key(key) {
            diff.removed.push(key.clone());
        }
    }

    diff.created.sort();
    diff.moved.sort();
    diff.removed.sort();
    diff
}

/// Buffer-margin policy for pans: groups inside this extended viewport stay
/// mounted even when they leave the strict viewport, which avoids marker
/// flicker at the edges. Fails for a negative margin.
pub fn retention_bounds(viewport: &LatLngBounds, margin: f64) -> Result<LatLngBounds> {
    viewport.extended(margin)
}
