//! Drag activation and pointer math.
//!
//! The activation test and position math are pure; the desk owns the live
//! session and routes pointer events through it. Movement is deliberately
//! 1:1 with the pointer: no smoothing, no inertia, no clamping, so a panel
//! can be dragged fully off-screen.

use crate::geometry::{Bounds, Offset, Point};

/// What the pointer landed on inside a panel, classified by the presentation
/// adapter before the event reaches the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    TitleBar,
    CloseControl,
    Body,
}

/// Which part of a panel accepts a drag pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragActivation {
    /// Anywhere inside the panel except the edge band and the close control.
    WholePanel,
    /// Only the title bar; the rest of the panel never starts a drag.
    #[default]
    TitleBar,
}

/// Ephemeral per-drag state. Created on activation, dropped on release; it
/// never outlives a single gesture.
#[derive(Debug, Clone)]
pub struct DragSession {
    pub panel_key: String,
    /// Pointer position relative to the panel's translation, captured at
    /// activation and held fixed for the whole session.
    pub pointer_offset: Offset,
}

/// Whether a pointer-down may start a drag.
///
/// The band within `edge_tolerance` of the right or bottom edge never
/// activates regardless of variant (it is reserved for resizing), and
/// neither does the close control.
pub fn activation_allowed(
    activation: DragActivation,
    bounds: Bounds,
    pointer: Point,
    region: HitRegion,
    edge_tolerance: f64,
) -> bool {
    let near_right = bounds.right() - pointer.x < edge_tolerance;
    let near_bottom = bounds.bottom() - pointer.y < edge_tolerance;
    if near_right || near_bottom || region == HitRegion::CloseControl {
        return false;
    }
    match activation {
        DragActivation::WholePanel => bounds.contains(pointer),
        DragActivation::TitleBar => region == HitRegion::TitleBar,
    }
}

/// The offset captured at activation: where the pointer sits relative to the
/// panel's current translation.
pub fn capture_pointer_offset(pointer: Point, current: Offset) -> Offset {
    Offset {
        x: pointer.x - current.x,
        y: pointer.y - current.y,
    }
}

/// The panel translation for a pointer-move while dragging.
pub fn drag_position(pointer: Point, pointer_offset: Offset) -> Offset {
    Offset {
        x: pointer.x - pointer_offset.x,
        y: pointer.y - pointer_offset.y,
    }
}
