//! Stacking-order assignment.

use crate::constants::BASE_STACKING_ORDER;

/// Hands out rendering orders for panels.
///
/// A single instance is owned by the desk and shared by every interaction
/// path that raises a panel, so orders are unique and strictly increasing in
/// assignment order. The counter starts above the static base so a raised
/// panel always sits over static page content.
#[derive(Debug, Clone)]
pub struct StackingController {
    highest: i64,
}

impl Default for StackingController {
    fn default() -> Self {
        Self::new()
    }
}

impl StackingController {
    pub fn new() -> Self {
        Self::with_base(BASE_STACKING_ORDER)
    }

    /// Start the counter at an explicit base, for callers (and tests) that
    /// need a known starting point.
    pub fn with_base(base: i64) -> Self {
        Self { highest: base }
    }

    /// The most recently assigned order, or the base if nothing was raised.
    pub fn highest(&self) -> i64 {
        self.highest
    }

    /// Assign the next stacking order. Always succeeds; each call returns a
    /// strictly larger value than the one before.
    pub fn raise(&mut self) -> i64 {
        self.highest += 1;
        self.highest
    }
}
