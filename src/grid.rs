//! Sparse spatial hash grid over unit cells.
//!
//! The grid maps integer cell keys to buckets of client ids. A hash map is
//! used so the lattice is unbounded and sparse: cells exist only while at
//! least one client overlaps them, and no resizing logic is needed as
//! clients wander far from the origin.

use ahash::{AHashMap, AHashSet};

use crate::cell::CellKey;
use crate::client::{Client, ClientId};

/// Spatial hash grid with a fixed 1x1 cell size.
///
/// Clients are axis-aligned rectangles (see [`Client`]); each one is
/// registered in every unit cell its footprint overlaps. Insertion,
/// removal, and range queries all cost O(cells touched).
///
/// The grid holds [`ClientId`] tokens only. It never owns client data and
/// never constructs clients; the caller keeps the id-to-client mapping and
/// is responsible for removing a client before invalidating it elsewhere.
///
/// Mutation requires `&mut self` and queries take `&self`, so the borrow
/// checker enforces the single-writer discipline this structure needs; no
/// internal synchronization is performed.
#[derive(Clone, Debug)]
pub struct SpatialHashGrid {
    /// One bucket per occupied cell. Invariant: a key is present iff its
    /// bucket is non-empty.
    buckets: AHashMap<CellKey, Vec<ClientId>>,
}

/// Half-open cell range `[x0, x1) x [y0, y1)` covered by a client footprint.
///
/// The origin is floored to find the first cell and the far edge is
/// ceiled to cover the last partially-overlapped cell. A degenerate axis
/// still covers one cell, so a zero-size client occupies exactly the cell
/// containing its origin. The same range is computed by insert and remove,
/// which is what makes removal find every bucket insertion touched.
fn coverage<C: Client>(client: &C) -> (i64, i64, i64, i64) {
    let (x, y) = (client.x(), client.y());
    let (w, h) = (client.width(), client.height());
    assert!(
        x.is_finite() && y.is_finite(),
        "client origin must be finite, got ({x}, {y})"
    );
    assert!(
        w >= 0.0 && h >= 0.0 && w.is_finite() && h.is_finite(),
        "client size must be finite and non-negative, got ({w}, {h})"
    );

    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let x1 = ((x + w).ceil() as i64).max(x0 + 1);
    let y1 = ((y + h).ceil() as i64).max(y0 + 1);
    (x0, y0, x1, y1)
}

impl SpatialHashGrid {
    /// Creates a new empty grid.
    pub fn new() -> Self {
        SpatialHashGrid {
            buckets: AHashMap::new(),
        }
    }

    /// Creates a new empty grid with space preallocated for `cells`
    /// occupied cells.
    pub fn with_capacity(cells: usize) -> Self {
        SpatialHashGrid {
            buckets: AHashMap::with_capacity(cells),
        }
    }

    /// Returns the number of occupied cells (non-empty buckets).
    ///
    /// This counts cells, not clients: one client spanning four cells
    /// contributes four, and two clients sharing one cell contribute one.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Returns whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Registers `client` in every cell its footprint overlaps, creating
    /// buckets as needed.
    ///
    /// No de-duplication is performed: inserting the same client twice
    /// records it twice in each covered bucket, and it then takes two
    /// removes to clear. Avoiding double insertion is the caller's job.
    ///
    /// # Panics
    ///
    /// Panics if the client's origin is not finite or its size is
    /// negative, NaN, or infinite.
    pub fn insert<C: Client>(&mut self, client: &C) {
        let (x0, y0, x1, y1) = coverage(client);
        let id = client.id();

        for cy in y0..y1 {
            for cx in x0..x1 {
                self.buckets.entry(CellKey::new(cx, cy)).or_default().push(id);
            }
        }
    }

    /// Unregisters `client` from every cell its *current* footprint
    /// overlaps, deleting buckets that become empty.
    ///
    /// Per covered cell: a missing bucket is skipped, a bucket not
    /// containing the client's id is left untouched, and otherwise one
    /// occurrence is removed (the order of remaining members is not
    /// preserved). Removing a client that was never inserted, or was
    /// already removed, is a complete no-op; it cannot disturb buckets
    /// belonging to other clients.
    ///
    /// # Panics
    ///
    /// Panics if the client's origin is not finite or its size is
    /// negative, NaN, or infinite.
    pub fn remove<C: Client>(&mut self, client: &C) {
        let (x0, y0, x1, y1) = coverage(client);
        let id = client.id();

        for cy in y0..y1 {
            for cx in x0..x1 {
                let key = CellKey::new(cx, cy);
                let Some(bucket) = self.buckets.get_mut(&key) else {
                    continue;
                };
                let Some(pos) = bucket.iter().position(|&member| member == id) else {
                    continue;
                };

                bucket.swap_remove(pos);
                if bucket.is_empty() {
                    self.buckets.remove(&key);
                }
            }
        }
    }

    /// Collects into `results` every client occupying at least one cell in
    /// the half-open range `[x0, x1) x [y0, y1)` of cell coordinates.
    ///
    /// `results` is cleared first and can be reused across queries. Each
    /// client is reported exactly once even when it overlaps several
    /// queried cells; result order is unspecified. An empty range
    /// (`x1 <= x0` or `y1 <= y0`) yields an empty result.
    ///
    /// Bounds are cell-aligned integers: a fractional query region must be
    /// floored/ceiled by the caller before the call.
    pub fn clients_in(&self, x0: i64, y0: i64, x1: i64, y1: i64, results: &mut Vec<ClientId>) {
        results.clear();
        let mut seen: AHashSet<ClientId> = AHashSet::new();

        for cy in y0..y1 {
            for cx in x0..x1 {
                let Some(bucket) = self.buckets.get(&CellKey::new(cx, cy)) else {
                    continue;
                };
                for &id in bucket {
                    if seen.insert(id) {
                        results.push(id);
                    }
                }
            }
        }
    }

    /// Borrows the bucket for one cell, or an empty slice if the cell is
    /// unoccupied. A client inserted twice appears twice.
    pub fn clients_at(&self, cell: CellKey) -> &[ClientId] {
        self.buckets.get(&cell).map_or(&[], Vec::as_slice)
    }

    /// Iterates over the occupied cell keys, in unspecified order.
    pub fn cells(&self) -> impl Iterator<Item = CellKey> + '_ {
        self.buckets.keys().copied()
    }

    /// Drops every bucket, returning the grid to its freshly-constructed
    /// state. Capacity is released.
    pub fn clear(&mut self) {
        self.buckets = AHashMap::new();
    }
}

impl Default for SpatialHashGrid {
    fn default() -> Self {
        Self::new()
    }
}
