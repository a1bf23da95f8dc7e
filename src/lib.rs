//! # shgrid - Sparse Spatial Hash Grid
//!
//! A Rust library providing a simple and efficient spatial hash grid for
//! broad-phase queries on axis-aligned rectangles ("clients").
//!
//! ## Features
//!
//! - **Unit-Cell Bucketing**: Each client is registered in every 1x1 grid
//!   cell its footprint overlaps
//! - **Unbounded & Sparse**: Backed by a hash map, so the lattice has no
//!   borders and empty regions cost nothing
//! - **Range Queries**: De-duplicated retrieval of all clients overlapping
//!   a rectangular block of cells
//! - **Stable Identity**: Clients are tracked by an opaque id token, so two
//!   clients with identical footprints never get confused during removal
//!
//! ## Quick Start
//!
//! ```rust
//! use shgrid::prelude::*;
//!
//! struct Marker {
//!     id: ClientId,
//!     x: f64,
//!     y: f64,
//! }
//!
//! impl Client for Marker {
//!     fn id(&self) -> ClientId { self.id }
//!     fn x(&self) -> f64 { self.x }
//!     fn y(&self) -> f64 { self.y }
//!     fn width(&self) -> f64 { 1.0 }
//!     fn height(&self) -> f64 { 1.0 }
//! }
//!
//! let mut grid = SpatialHashGrid::new();
//! let a = Marker { id: ClientId(0), x: 0.0, y: 0.0 };
//! let b = Marker { id: ClientId(1), x: 0.5, y: 0.5 };
//! grid.insert(&a);
//! grid.insert(&b);
//!
//! // `a` sits in one cell; `b` straddles a 2x2 block of unit cells.
//! assert_eq!(grid.len(), 4);
//!
//! // Both overlap cell (0, 0); each is reported exactly once.
//! let mut results = Vec::new();
//! grid.clients_in(0, 0, 1, 1, &mut results);
//! assert_eq!(results.len(), 2);
//!
//! // Removal recomputes the same cells and prunes emptied buckets.
//! grid.remove(&b);
//! assert_eq!(grid.len(), 1);
//! ```
//!
//! ## How It Works
//!
//! The grid keeps a hash map from integer cell keys to buckets of client
//! ids. Inserting a client floors its origin and ceils its far edge to find
//! the covered cell range, then appends its id to each bucket in that
//! range; removal walks the same range and prunes buckets that empty out,
//! so a cell key exists in the map exactly when at least one client
//! overlaps it.
//!
//! Queries visit the requested block of cells and union their buckets into
//! a result list, de-duplicating by id so a client spanning several queried
//! cells is returned once. This makes the structure a good broad phase for
//! collision detection or visibility culling: the caller narrows the result
//! with exact tests only against clients that share cells with the query
//! region.
//!
//! The grid stores ids, never client data. Callers own their clients, hand
//! them to [`insert`](SpatialHashGrid::insert) and
//! [`remove`](SpatialHashGrid::remove) by reference, and must remove a
//! moving client under its old coordinates before re-inserting it.

pub mod cell;
pub mod client;
pub mod grid;
pub mod prelude;

pub use cell::CellKey;
pub use client::{Client, ClientId};
pub use grid::SpatialHashGrid;
