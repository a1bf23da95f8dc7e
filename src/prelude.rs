//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use shgrid::prelude::*;
//! ```

pub use crate::cell::CellKey;
pub use crate::client::{Client, ClientId};
pub use crate::grid::SpatialHashGrid;
