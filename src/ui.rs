//! Desk rendering: the trigger bar, the reload control and the open panels
//! painted back-to-front by stacking order.

use ratatui::Frame;
use ratatui::prelude::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::bindings::{DeskBindings, PANEL_HEIGHT, PANEL_WIDTH, RELOAD_LABEL};
use crate::desk::Desk;
use crate::panel::Panel;

pub fn render_desk(frame: &mut Frame, desk: &Desk, bindings: &DeskBindings) {
    let area = frame.area();
    render_trigger_bar(frame, desk, bindings);
    for panel in desk.draw_order() {
        render_panel(frame, desk, bindings, panel, area);
    }
}

fn render_trigger_bar(frame: &mut Frame, desk: &Desk, bindings: &DeskBindings) {
    for (key, rect) in bindings.trigger_rects(desk) {
        let active = desk.trigger(&key).is_some_and(|t| t.is_active());
        let style = if active {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(Span::styled(format!("[{key}]"), style)), rect);
    }
    frame.render_widget(
        Paragraph::new(Span::styled(
            RELOAD_LABEL,
            Style::default().add_modifier(Modifier::DIM),
        )),
        bindings.reload_rect(),
    );
}

fn render_panel(frame: &mut Frame, desk: &Desk, bindings: &DeskBindings, panel: &Panel, area: Rect) {
    let Some(bounds) = bindings.panel_bounds(desk, panel.key()) else {
        return;
    };
    let x = bounds.x.round() as i32;
    let y = bounds.y.round() as i32;
    let Some(visible) = clip_signed(x, y, PANEL_WIDTH, PANEL_HEIGHT, area) else {
        return;
    };
    let title = panel.trigger_key().unwrap_or_else(|| panel.key());
    frame.render_widget(Clear, visible);
    frame.render_widget(Block::bordered().title(format!(" {title} ")), visible);

    let offset = panel.offset();
    let body = Paragraph::new(format!("offset {:+.0},{:+.0}", offset.x, offset.y));
    let inner = Rect {
        x: visible.x.saturating_add(1),
        y: visible.y.saturating_add(1),
        width: visible.width.saturating_sub(2),
        height: visible.height.saturating_sub(2),
    };
    if inner.width > 0 && inner.height > 0 {
        frame.render_widget(body, inner);
    }

    let buffer = frame.buffer_mut();
    // close control at the right end of the title bar
    let close_x = x + i32::from(PANEL_WIDTH) - 4;
    if y >= i32::from(area.y)
        && y < i32::from(area.y) + i32::from(area.height)
        && close_x >= i32::from(area.x)
        && close_x + 3 <= i32::from(area.x) + i32::from(area.width)
    {
        buffer.set_string(
            close_x as u16,
            y as u16,
            "[x]",
            Style::default().add_modifier(Modifier::BOLD),
        );
    }
    // resize affordance hint in the excluded corner
    let corner_x = x + i32::from(PANEL_WIDTH) - 1;
    let corner_y = y + i32::from(PANEL_HEIGHT) - 1;
    if corner_x >= i32::from(area.x)
        && corner_x < i32::from(area.x) + i32::from(area.width)
        && corner_y >= i32::from(area.y)
        && corner_y < i32::from(area.y) + i32::from(area.height)
        && let Some(cell) = buffer.cell_mut((corner_x as u16, corner_y as u16))
    {
        cell.set_symbol("◢");
    }
}

/// Clip a signed cell rect to the visible area. Panels can be dragged
/// partially or fully off-screen; only the overlap is painted.
fn clip_signed(x: i32, y: i32, width: u16, height: u16, area: Rect) -> Option<Rect> {
    let x0 = x.max(i32::from(area.x));
    let y0 = y.max(i32::from(area.y));
    let x1 = (x + i32::from(width)).min(i32::from(area.x) + i32::from(area.width));
    let y1 = (y + i32::from(height)).min(i32::from(area.y) + i32::from(area.height));
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(Rect {
        x: x0 as u16,
        y: y0 as u16,
        width: (x1 - x0) as u16,
        height: (y1 - y0) as u16,
    })
}
