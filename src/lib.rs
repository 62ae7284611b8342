//! A desktop-metaphor popup window manager.
//!
//! Trigger ("folder") elements open floating popup panels; panels raise
//! above their siblings on interaction, drag with 1:1 pointer tracking, and
//! reset as a group from a reload control. The core ([`desk`], [`stacking`],
//! [`drag`]) is headless and synchronous; [`bindings`], [`ui`] and the demo
//! binary adapt it to a crossterm/ratatui terminal.

pub mod bindings;
pub mod constants;
pub mod desk;
pub mod drag;
pub mod drivers;
pub mod event_loop;
pub mod geometry;
pub mod panel;
pub mod stacking;
pub mod tracing_sub;
pub mod ui;
