//! The desk: popup lifecycle and drag routing.
//!
//! All operations run synchronously inside the handler that invoked them;
//! the desk is single-threaded shared state and relies on that
//! run-to-completion model instead of locks. Key lookups that fail resolve
//! to silent no-ops — a trigger whose panel element was never bound is
//! tolerated, never an error.

use std::collections::BTreeMap;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::constants::{BASE_STACKING_ORDER, EDGE_TOLERANCE};
use crate::drag::{self, DragActivation, DragSession, HitRegion};
use crate::geometry::{Bounds, Offset, Point};
use crate::panel::{Panel, PanelState, Trigger, TriggerState, panel_key_for, trigger_key_for};
use crate::stacking::StackingController;

/// Tunables for a desk instance.
#[derive(Debug, Clone)]
pub struct DeskConfig {
    pub base_stacking_order: i64,
    /// Width of the right/bottom exclusion band, in page units.
    pub edge_tolerance: f64,
    pub activation: DragActivation,
    /// When set, a panel opens at a fresh uniformly random offset in
    /// `[0, max)` on both axes instead of the neutral centered position.
    pub max_stagger: Option<f64>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            base_stacking_order: BASE_STACKING_ORDER,
            edge_tolerance: EDGE_TOLERANCE,
            activation: DragActivation::default(),
            max_stagger: None,
        }
    }
}

/// Owns every panel and trigger, the stacking counter and the (at most one)
/// live drag session.
///
/// The panel/trigger set is bound once at startup and fixed thereafter;
/// state mutates only through the operations below.
pub struct Desk {
    panels: BTreeMap<String, Panel>,
    triggers: BTreeMap<String, Trigger>,
    trigger_order: Vec<String>,
    stacking: StackingController,
    drag: Option<DragSession>,
    config: DeskConfig,
    rng: SmallRng,
}

impl Desk {
    /// Bind a panel (keyed `popup-<trigger>`) for every trigger key.
    pub fn new<I, S>(trigger_keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(trigger_keys, DeskConfig::default())
    }

    pub fn with_config<I, S>(trigger_keys: I, config: DeskConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut panels = BTreeMap::new();
        let mut triggers = BTreeMap::new();
        let mut trigger_order = Vec::new();
        for key in trigger_keys {
            let key = key.into();
            if triggers.contains_key(&key) {
                continue;
            }
            let panel_key = panel_key_for(&key);
            panels.insert(
                panel_key.clone(),
                Panel::new(panel_key, config.base_stacking_order),
            );
            triggers.insert(key.clone(), Trigger::new(key.clone()));
            trigger_order.push(key);
        }
        let stacking = StackingController::with_base(config.base_stacking_order);
        Self {
            panels,
            triggers,
            trigger_order,
            stacking,
            drag: None,
            config,
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Seed the stagger rng; lets tests pin the offset sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Bootstrap-time binding for a panel whose trigger element was never
    /// found. The panel participates in the lifecycle (and in `reset_all`)
    /// without a trigger to mirror.
    pub fn bind_panel(&mut self, panel_key: impl Into<String>) {
        let panel_key = panel_key.into();
        self.panels
            .entry(panel_key.clone())
            .or_insert_with(|| Panel::new(panel_key, self.config.base_stacking_order));
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn panel(&self, panel_key: &str) -> Option<&Panel> {
        self.panels.get(panel_key)
    }

    pub fn trigger(&self, trigger_key: &str) -> Option<&Trigger> {
        self.triggers.get(trigger_key)
    }

    /// Trigger keys in the order they were bound.
    pub fn trigger_keys(&self) -> &[String] {
        &self.trigger_order
    }

    /// Open panels back-to-front by stacking order, ready for painting.
    pub fn draw_order(&self) -> Vec<&Panel> {
        let mut open: Vec<&Panel> = self.panels.values().filter(|p| p.is_open()).collect();
        open.sort_by_key(|p| p.stacking_order());
        open
    }

    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// A click on a trigger element. Always raises the associated panel,
    /// even when it is already open; opening computes a fresh initial offset
    /// (neutral, or staggered when configured) and activates the trigger.
    pub fn activate_trigger(&mut self, trigger_key: &str) {
        let panel_key = panel_key_for(trigger_key);
        let Some(panel) = self.panels.get_mut(&panel_key) else {
            tracing::debug!(trigger = %trigger_key, "trigger has no bound panel");
            return;
        };
        panel.stacking_order = self.stacking.raise();
        if panel.state == PanelState::Open {
            return;
        }
        panel.offset = match self.config.max_stagger {
            Some(max) if max > 0.0 => Offset {
                x: self.rng.random_range(0.0..max),
                y: self.rng.random_range(0.0..max),
            },
            _ => Offset::default(),
        };
        panel.state = PanelState::Open;
        if let Some(trigger) = self.triggers.get_mut(trigger_key) {
            trigger.state = TriggerState::Active;
        }
        tracing::debug!(panel = %panel.key, order = panel.stacking_order, "opened panel");
    }

    /// A click on a panel's close control. Idempotent; resets the offset so
    /// the panel reopens from its base position.
    pub fn close_panel(&mut self, panel_key: &str) {
        if self
            .drag
            .as_ref()
            .is_some_and(|session| session.panel_key == panel_key)
        {
            self.drag = None;
        }
        let Some(panel) = self.panels.get_mut(panel_key) else {
            return;
        };
        if panel.state == PanelState::Closed {
            return;
        }
        panel.state = PanelState::Closed;
        panel.offset = Offset::default();
        if let Some(trigger_key) = trigger_key_for(panel_key)
            && let Some(trigger) = self.triggers.get_mut(trigger_key)
        {
            trigger.state = TriggerState::Inactive;
        }
        tracing::debug!(panel = %panel_key, "closed panel");
    }

    /// The reload control: force every panel closed at the neutral offset
    /// and deactivate its trigger. A panel whose trigger never resolved is
    /// still closed; only the trigger reset is skipped.
    pub fn reset_all(&mut self) {
        self.cancel_drag();
        for panel in self.panels.values_mut() {
            panel.state = PanelState::Closed;
            panel.offset = Offset::default();
            if let Some(trigger_key) = panel.trigger_key()
                && let Some(trigger) = self.triggers.get_mut(trigger_key)
            {
                trigger.state = TriggerState::Inactive;
            }
        }
        tracing::debug!("reset all panels");
    }

    /// Pointer-down on an open panel. Returns `true` when a drag session
    /// starts; the caller must then route every pointer-move and the
    /// pointer-up here, wherever the pointer travels, until release.
    pub fn pointer_down(
        &mut self,
        panel_key: &str,
        pointer: Point,
        bounds: Bounds,
        region: HitRegion,
    ) -> bool {
        if self.drag.is_some() {
            // Pointer capture is exclusive per device; a second down
            // mid-session means a release was missed.
            tracing::debug!(panel = %panel_key, "pointer-down ignored during live drag");
            return false;
        }
        let Some(panel) = self.panels.get_mut(panel_key) else {
            return false;
        };
        if panel.state != PanelState::Open {
            return false;
        }
        if !drag::activation_allowed(
            self.config.activation,
            bounds,
            pointer,
            region,
            self.config.edge_tolerance,
        ) {
            return false;
        }
        panel.stacking_order = self.stacking.raise();
        let pointer_offset = drag::capture_pointer_offset(pointer, panel.offset);
        tracing::debug!(panel = %panel.key, order = panel.stacking_order, "drag started");
        self.drag = Some(DragSession {
            panel_key: panel.key.clone(),
            pointer_offset,
        });
        true
    }

    /// Pointer-move while a session is live. 1:1 tracking, applied
    /// immediately, no clamping. A no-op when nothing is being dragged.
    pub fn pointer_move(&mut self, pointer: Point) {
        let Some(session) = &self.drag else {
            return;
        };
        let next = drag::drag_position(pointer, session.pointer_offset);
        if let Some(panel) = self.panels.get_mut(&session.panel_key) {
            panel.offset = next;
        }
    }

    /// Pointer-up anywhere ends the session. Returns the key of the panel
    /// that was being dragged, if any.
    pub fn pointer_up(&mut self) -> Option<String> {
        let session = self.drag.take()?;
        tracing::debug!(panel = %session.panel_key, "drag released");
        Some(session.panel_key)
    }

    /// Forced release path. Equivalent to a pointer-up; called by
    /// `reset_all` and by adapter teardown so a session can never leak past
    /// its gesture.
    pub fn cancel_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            tracing::debug!(panel = %session.panel_key, "drag cancelled");
        }
    }
}
