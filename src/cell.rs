//! Integer cell keys for the unit-cell lattice.

/// Key identifying one unit cell in the unbounded integer lattice.
///
/// Two keys are equal iff both components are equal, and hashing is
/// consistent with that equality, so a `CellKey` can be used directly
/// as a hash map key for bucket lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    /// Cell column (x axis).
    pub x: i64,
    /// Cell row (y axis).
    pub y: i64,
}

impl CellKey {
    /// Creates a key for the cell at column `x`, row `y`.
    pub const fn new(x: i64, y: i64) -> Self {
        CellKey { x, y }
    }

    /// Returns the cell whose half-open unit square `[x, x+1) x [y, y+1)`
    /// contains the given point.
    ///
    /// Negative coordinates round toward negative infinity, so the point
    /// `(-0.5, -0.5)` lies in cell `(-1, -1)`, not `(0, 0)`.
    pub fn containing(x: f64, y: f64) -> Self {
        CellKey::new(x.floor() as i64, y.floor() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::CellKey;

    #[test]
    fn containing_floors_toward_negative_infinity() {
        assert_eq!(CellKey::containing(0.0, 0.0), CellKey::new(0, 0));
        assert_eq!(CellKey::containing(0.9, 0.9), CellKey::new(0, 0));
        assert_eq!(CellKey::containing(-0.5, -0.5), CellKey::new(-1, -1));
        assert_eq!(CellKey::containing(-1.0, 2.0), CellKey::new(-1, 2));
    }
}
