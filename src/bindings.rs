//! Startup binding of triggers, panels and the reload control to terminal
//! geometry, plus normalization of raw mouse events into desk operations.
//!
//! This is the thin adapter between the platform event stream and the desk's
//! named transitions: it hit-tests in stacking order, classifies what the
//! pointer landed on (title bar, close control, body) and forwards
//! pointer-move/up globally so a drag keeps tracking after the pointer
//! leaves the panel.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::Rect;

use crate::desk::Desk;
use crate::drag::HitRegion;
use crate::geometry::{Bounds, Point};

/// Panel footprint on the terminal surface, in cells.
pub const PANEL_WIDTH: u16 = 36;
pub const PANEL_HEIGHT: u16 = 12;

pub const RELOAD_LABEL: &str = "[reset]";

/// A normalized user gesture, ready to apply to a [`Desk`].
#[derive(Debug, Clone, PartialEq)]
pub enum DeskEvent {
    TriggerClick(String),
    CloseClick(String),
    ReloadClick,
    PanelPointerDown {
        panel_key: String,
        pointer: Point,
        bounds: Bounds,
        region: HitRegion,
    },
    PointerMove(Point),
    PointerUp,
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Maps the desk onto a terminal area: a trigger bar along the top row with
/// the reload control at its right end, and panels base-centered in the
/// space below.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeskBindings {
    area: Rect,
}

impl DeskBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh the bound area; called once per frame before rendering.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// One `[key]` rect per trigger, in binding order, clipped to the bar.
    pub fn trigger_rects(&self, desk: &Desk) -> Vec<(String, Rect)> {
        let mut rects = Vec::new();
        let mut x = self.area.x.saturating_add(1);
        let end = self.reload_rect().x;
        for key in desk.trigger_keys() {
            let width = key.len() as u16 + 2;
            if x.saturating_add(width) >= end {
                break;
            }
            rects.push((
                key.clone(),
                Rect {
                    x,
                    y: self.area.y,
                    width,
                    height: 1,
                },
            ));
            x = x.saturating_add(width + 1);
        }
        rects
    }

    pub fn reload_rect(&self) -> Rect {
        let width = RELOAD_LABEL.len() as u16;
        Rect {
            x: self
                .area
                .x
                .saturating_add(self.area.width)
                .saturating_sub(width + 1),
            y: self.area.y,
            width,
            height: 1,
        }
    }

    /// The space panels center themselves in: everything below the bar.
    fn panel_area(&self) -> Rect {
        Rect {
            x: self.area.x,
            y: self.area.y.saturating_add(2),
            width: self.area.width,
            height: self.area.height.saturating_sub(2),
        }
    }

    fn panel_base(&self) -> (f64, f64) {
        let panel_area = self.panel_area();
        let x = panel_area.x as f64 + (panel_area.width as f64 - PANEL_WIDTH as f64) / 2.0;
        let y = panel_area.y as f64 + (panel_area.height as f64 - PANEL_HEIGHT as f64) / 2.0;
        (x.max(panel_area.x as f64), y.max(panel_area.y as f64))
    }

    /// The panel's current bounding box: base placement plus its offset.
    pub fn panel_bounds(&self, desk: &Desk, panel_key: &str) -> Option<Bounds> {
        let panel = desk.panel(panel_key)?;
        let (base_x, base_y) = self.panel_base();
        Some(Bounds::new(
            base_x + panel.offset().x,
            base_y + panel.offset().y,
            PANEL_WIDTH as f64,
            PANEL_HEIGHT as f64,
        ))
    }

    /// Classify a raw mouse event into a desk gesture, honoring stacking
    /// order for overlapping panels. Returns `None` for events the desk has
    /// no interest in.
    pub fn classify(&self, desk: &Desk, mouse: &MouseEvent) -> Option<DeskEvent> {
        let pointer = Point::new(mouse.column as f64, mouse.row as f64);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // Topmost open panel under the pointer wins; panels cover
                // the chrome behind them.
                for panel in desk.draw_order().into_iter().rev() {
                    let bounds = self.panel_bounds(desk, panel.key())?;
                    if !bounds.contains(pointer) {
                        continue;
                    }
                    let region = classify_region(bounds, mouse.column, mouse.row);
                    if region == HitRegion::CloseControl {
                        return Some(DeskEvent::CloseClick(panel.key().to_string()));
                    }
                    return Some(DeskEvent::PanelPointerDown {
                        panel_key: panel.key().to_string(),
                        pointer,
                        bounds,
                        region,
                    });
                }
                for (key, rect) in self.trigger_rects(desk) {
                    if rect_contains(rect, mouse.column, mouse.row) {
                        return Some(DeskEvent::TriggerClick(key));
                    }
                }
                if rect_contains(self.reload_rect(), mouse.column, mouse.row) {
                    return Some(DeskEvent::ReloadClick);
                }
                None
            }
            // Move/up stay global so a drag survives leaving the panel.
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                Some(DeskEvent::PointerMove(pointer))
            }
            MouseEventKind::Up(MouseButton::Left) => Some(DeskEvent::PointerUp),
            _ => None,
        }
    }

    /// Classify and apply in one step. Returns `true` when the event was
    /// consumed by the desk.
    pub fn dispatch(&self, desk: &mut Desk, mouse: &MouseEvent) -> bool {
        match self.classify(desk, mouse) {
            Some(DeskEvent::TriggerClick(key)) => {
                desk.activate_trigger(&key);
                true
            }
            Some(DeskEvent::CloseClick(key)) => {
                desk.close_panel(&key);
                true
            }
            Some(DeskEvent::ReloadClick) => {
                desk.reset_all();
                true
            }
            Some(DeskEvent::PanelPointerDown {
                panel_key,
                pointer,
                bounds,
                region,
            }) => desk.pointer_down(&panel_key, pointer, bounds, region),
            Some(DeskEvent::PointerMove(pointer)) => {
                if !desk.dragging() {
                    return false;
                }
                desk.pointer_move(pointer);
                true
            }
            Some(DeskEvent::PointerUp) => desk.pointer_up().is_some(),
            None => false,
        }
    }
}

/// Where inside the panel the pointer landed, on the terminal cell grid.
/// The top border row is the title bar; the close control sits at its right
/// end.
fn classify_region(bounds: Bounds, column: u16, row: u16) -> HitRegion {
    let top = bounds.y.round() as i64;
    if i64::from(row) == top {
        let right = bounds.right().round() as i64;
        let col = i64::from(column);
        if col >= right - 4 && col < right - 1 {
            return HitRegion::CloseControl;
        }
        return HitRegion::TitleBar;
    }
    HitRegion::Body
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desk::DeskConfig;
    use crossterm::event::KeyModifiers;

    fn down(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn drag(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn up() -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn bindings() -> DeskBindings {
        let mut b = DeskBindings::new();
        b.set_area(Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        });
        b
    }

    #[test]
    fn trigger_click_opens_its_panel() {
        let mut desk = Desk::new(["docs", "music"]);
        let bindings = bindings();
        let (key, rect) = bindings.trigger_rects(&desk)[0].clone();
        assert_eq!(key, "docs");
        assert!(bindings.dispatch(&mut desk, &down(rect.x + 1, rect.y)));
        assert!(desk.panel("popup-docs").unwrap().is_open());
    }

    #[test]
    fn reload_click_resets() {
        let mut desk = Desk::new(["docs"]);
        let bindings = bindings();
        desk.activate_trigger("docs");
        let reload = bindings.reload_rect();
        assert!(bindings.dispatch(&mut desk, &down(reload.x, reload.y)));
        assert!(!desk.panel("popup-docs").unwrap().is_open());
    }

    #[test]
    fn close_control_click_closes_topmost() {
        let mut desk = Desk::new(["docs"]);
        let bindings = bindings();
        desk.activate_trigger("docs");
        let bounds = bindings.panel_bounds(&desk, "popup-docs").unwrap();
        let close_col = bounds.right().round() as u16 - 3;
        let title_row = bounds.y.round() as u16;
        assert_eq!(
            bindings.classify(&desk, &down(close_col, title_row)),
            Some(DeskEvent::CloseClick("popup-docs".to_string()))
        );
        assert!(bindings.dispatch(&mut desk, &down(close_col, title_row)));
        assert!(!desk.panel("popup-docs").unwrap().is_open());
    }

    #[test]
    fn title_drag_moves_the_panel() {
        // cell-scale exclusion band; the page-unit default would cover the
        // whole footprint of a terminal panel
        let config = DeskConfig {
            edge_tolerance: 2.0,
            ..DeskConfig::default()
        };
        let mut desk = Desk::with_config(["docs"], config);
        let bindings = bindings();
        desk.activate_trigger("docs");
        let bounds = bindings.panel_bounds(&desk, "popup-docs").unwrap();
        let title_col = bounds.x.round() as u16 + 2;
        let title_row = bounds.y.round() as u16;
        assert!(bindings.dispatch(&mut desk, &down(title_col, title_row)));
        assert!(desk.dragging());
        bindings.dispatch(&mut desk, &drag(title_col + 5, title_row + 3));
        let offset = desk.panel("popup-docs").unwrap().offset();
        assert_eq!(offset.x, 5.0);
        assert_eq!(offset.y, 3.0);
        assert!(bindings.dispatch(&mut desk, &up()));
        assert!(!desk.dragging());
    }

    #[test]
    fn move_without_a_session_is_not_consumed() {
        let mut desk = Desk::new(["docs"]);
        let bindings = bindings();
        assert!(!bindings.dispatch(&mut desk, &drag(10, 10)));
    }

    #[test]
    fn topmost_panel_wins_the_hit_test() {
        let mut desk = Desk::new(["docs", "music"]);
        let bindings = bindings();
        desk.activate_trigger("docs");
        desk.activate_trigger("music");
        // both panels share the base placement, so music is on top
        let bounds = bindings.panel_bounds(&desk, "popup-music").unwrap();
        let event = bindings
            .classify(&desk, &down(bounds.x as u16 + 2, bounds.y as u16))
            .unwrap();
        match event {
            DeskEvent::PanelPointerDown { panel_key, .. } => {
                assert_eq!(panel_key, "popup-music");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
