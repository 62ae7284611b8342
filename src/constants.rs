//! Shared crate-wide constants.

/// Static base stacking order. Raised panels are always assigned orders
/// strictly above this value so they render over static page content.
pub const BASE_STACKING_ORDER: i64 = 1000;

/// Width, in page units, of the band along a panel's right and bottom edges
/// where a pointer-down never starts a drag.
///
/// The band is reserved for a resize affordance that lives outside this
/// crate; excluding it here keeps dragging and resizing from fighting over
/// the same pixels.
pub const EDGE_TOLERANCE: f64 = 15.0;

/// Default maximum stagger offset for the staggered-open variant, in page
/// units. A freshly opened panel lands at a uniformly random offset in
/// `[0, DEFAULT_MAX_STAGGER)` on both axes.
pub const DEFAULT_MAX_STAGGER: f64 = 50.0;
