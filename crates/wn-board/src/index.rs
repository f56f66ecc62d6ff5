//! Spatial index over task locations.
//!
//! An R-tree (via `rstar`) maps `[lat, lon]` points to `TaskId`s for
//! nearest-task and radius queries.  Tree ordering uses plain degree-space
//! distance; any query that promises kilometres re-checks candidates with the
//! exact haversine distance.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use wn_core::{Coordinate, EARTH_RADIUS_KM, TaskId};

use crate::board::TaskBoard;

/// Kilometres per degree of latitude on the reference sphere.
const KM_PER_DEG: f64 = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;

// ── R-tree task entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a task's location with its id.
#[derive(Clone)]
struct TaskEntry {
    location: Coordinate,
    id: TaskId,
}

impl RTreeObject for TaskEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.location.lat(), self.location.lon()])
    }
}

impl PointDistance for TaskEntry {
    /// Squared Euclidean distance in lat/lon degree space.  Sufficient to
    /// order candidates within a city (error < 0.1 % at ≤ 60° lat).
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.location.lat() - point[0];
        let dlon = self.location.lon() - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── TaskIndex ─────────────────────────────────────────────────────────────────

/// Bulk-loaded spatial index over a set of tasks.
///
/// Built once per board snapshot.  The index does not observe later board
/// refreshes; rebuild it alongside the snapshot it serves.
pub struct TaskIndex {
    tree: RTree<TaskEntry>,
}

impl TaskIndex {
    /// Index the open tasks of `board` (the set worth navigating to).
    pub fn over_open_tasks(board: &TaskBoard) -> Self {
        Self::build(board.open_tasks().map(|t| (t.id, t.location)))
    }

    /// Index arbitrary `(id, location)` pairs.
    ///
    /// Bulk-loads the R-tree in O(N log N), faster than N inserts.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (TaskId, Coordinate)>,
    {
        let entries: Vec<TaskEntry> = entries
            .into_iter()
            .map(|(id, location)| TaskEntry { location, id })
            .collect();
        Self { tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The task nearest to `pos` in degree space.
    ///
    /// `None` only if the index is empty.
    pub fn nearest(&self, pos: Coordinate) -> Option<TaskId> {
        self.tree
            .nearest_neighbor(&[pos.lat(), pos.lon()])
            .map(|e| e.id)
    }

    /// Up to `k` tasks nearest to `pos`, ascending by degree-space distance.
    pub fn k_nearest(&self, pos: Coordinate, k: usize) -> Vec<TaskId> {
        self.tree
            .nearest_neighbor_iter(&[pos.lat(), pos.lon()])
            .take(k)
            .map(|e| e.id)
            .collect()
    }

    /// All tasks within `radius_km` great-circle kilometres of `pos`,
    /// ascending by exact haversine distance (ties break on id).
    ///
    /// Candidates come from a degree-window envelope query and are then
    /// filtered by exact distance.  The window does not wrap the
    /// antimeridian, so a task on the far side of the ±180° seam is not
    /// found; irrelevant at municipal scale.
    pub fn within_radius_km(&self, pos: Coordinate, radius_km: f64) -> Vec<(TaskId, f64)> {
        if radius_km <= 0.0 || self.is_empty() {
            return Vec::new();
        }

        // Conservative degree window containing the great-circle radius.
        // Longitude degrees shrink with latitude, so the lon span widens by
        // the worst-case cosine inside the lat window.
        let d_lat = radius_km / KM_PER_DEG;
        let max_abs_lat = (pos.lat().abs() + d_lat).min(90.0);
        let cos_lat = max_abs_lat.to_radians().cos();
        let d_lon = if cos_lat < 1e-2 {
            180.0
        } else {
            (radius_km / (KM_PER_DEG * cos_lat)).min(180.0)
        };

        let envelope = AABB::from_corners(
            [pos.lat() - d_lat, pos.lon() - d_lon],
            [pos.lat() + d_lat, pos.lon() + d_lon],
        );

        let mut hits: Vec<(TaskId, f64)> = self
            .tree
            .locate_in_envelope(&envelope)
            .filter_map(|e| {
                let d = pos.distance_km(e.location);
                (d <= radius_km).then_some((e.id, d))
            })
            .collect();

        hits.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));
        hits
    }
}
