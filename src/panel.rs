//! The panel/trigger model and the key convention joining them.

use crate::geometry::Offset;

/// Prefix deriving a panel key from its trigger key.
pub const PANEL_KEY_PREFIX: &str = "popup-";

/// The panel key for a trigger key, by the fixed naming convention.
pub fn panel_key_for(trigger_key: &str) -> String {
    format!("{PANEL_KEY_PREFIX}{trigger_key}")
}

/// The trigger key encoded in a panel key, if the panel key follows the
/// convention.
pub fn trigger_key_for(panel_key: &str) -> Option<&str> {
    panel_key.strip_prefix(PANEL_KEY_PREFIX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Inactive,
    Active,
}

/// A floating popup panel: shown/hidden as a unit, raised on interaction,
/// translated by dragging.
#[derive(Debug, Clone)]
pub struct Panel {
    pub(crate) key: String,
    pub(crate) state: PanelState,
    pub(crate) stacking_order: i64,
    pub(crate) offset: Offset,
}

impl Panel {
    pub(crate) fn new(key: String, base_order: i64) -> Self {
        Self {
            key,
            state: PanelState::Closed,
            stacking_order: base_order,
            offset: Offset::default(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    pub fn stacking_order(&self) -> i64 {
        self.stacking_order
    }

    /// Current translation relative to the base (centered) placement.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn trigger_key(&self) -> Option<&str> {
        trigger_key_for(&self.key)
    }
}

/// The element whose activation opens/raises a panel. Its state mirrors the
/// panel's lifecycle state at every transition.
#[derive(Debug, Clone)]
pub struct Trigger {
    pub(crate) key: String,
    pub(crate) state: TriggerState,
}

impl Trigger {
    pub(crate) fn new(key: String) -> Self {
        Self {
            key,
            state: TriggerState::Inactive,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == TriggerState::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_convention_round_trips() {
        assert_eq!(panel_key_for("docs"), "popup-docs");
        assert_eq!(trigger_key_for("popup-docs"), Some("docs"));
    }

    #[test]
    fn foreign_panel_key_has_no_trigger() {
        assert_eq!(trigger_key_for("sidebar"), None);
    }

    #[test]
    fn panel_starts_closed_at_base() {
        let panel = Panel::new("popup-docs".into(), 1000);
        assert!(!panel.is_open());
        assert_eq!(panel.stacking_order(), 1000);
        assert!(panel.offset().is_neutral());
    }
}
