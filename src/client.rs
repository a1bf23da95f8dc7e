//! The client capability: anything with an axis-aligned rectangular footprint.

/// Stable identity token for a client.
///
/// Bucket membership and removal compare this token only, never client
/// coordinates. Two distinct clients with identical footprints therefore
/// stay distinguishable, as long as the caller assigns each live client a
/// unique id. The grid never inspects the value beyond equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(pub u64);

impl From<u64> for ClientId {
    fn from(raw: u64) -> Self {
        ClientId(raw)
    }
}

/// Capability required of anything indexed by a [`SpatialHashGrid`].
///
/// A client exposes an origin and a size describing the half-open
/// axis-aligned rectangle `[x, x+width) x [y, y+height)`. Width and height
/// must be non-negative and all four values finite; the grid asserts this
/// on insert and remove. The grid reads the footprint at call time and
/// keeps no copy, so a client that moves must be removed under its old
/// coordinates before being re-inserted under the new ones.
///
/// This is a compile-time bound on the mutating operations, not a trait
/// object: the grid stores only [`ClientId`] tokens and has no need for a
/// heterogeneous client collection.
///
/// [`SpatialHashGrid`]: crate::SpatialHashGrid
pub trait Client {
    /// Stable identity token for this client.
    fn id(&self) -> ClientId;

    /// Origin of the footprint on the x axis.
    fn x(&self) -> f64;

    /// Origin of the footprint on the y axis.
    fn y(&self) -> f64;

    /// Footprint extent along the x axis, `>= 0`.
    fn width(&self) -> f64;

    /// Footprint extent along the y axis, `>= 0`.
    fn height(&self) -> f64;
}
