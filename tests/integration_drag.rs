use popup_wm::desk::{Desk, DeskConfig};
use popup_wm::drag::{DragActivation, HitRegion};
use popup_wm::geometry::{Bounds, Offset, Point};

fn body_desk() -> Desk {
    Desk::with_config(
        ["docs"],
        DeskConfig {
            activation: DragActivation::WholePanel,
            ..DeskConfig::default()
        },
    )
}

fn bounds_at(offset: Offset) -> Bounds {
    // base placement at (10, 10), footprint 300x200
    Bounds::new(10.0 + offset.x, 10.0 + offset.y, 300.0, 200.0)
}

#[test]
fn captured_offset_stays_fixed_for_the_session() {
    let mut desk = body_desk();
    desk.activate_trigger("docs");

    // park the panel at (80, 80) with a first gesture
    assert!(desk.pointer_down(
        "popup-docs",
        Point::new(100.0, 100.0),
        bounds_at(Offset::default()),
        HitRegion::Body,
    ));
    desk.pointer_move(Point::new(180.0, 180.0));
    desk.pointer_up();
    let parked = desk.panel("popup-docs").unwrap().offset();
    assert_eq!(parked, Offset::new(80.0, 80.0));

    // second gesture: pointer-down at (100,100) over offset (80,80)
    // captures pointerOffset (20,20); moving to (140,160) lands (120,140)
    assert!(desk.pointer_down(
        "popup-docs",
        Point::new(100.0, 100.0),
        bounds_at(parked),
        HitRegion::Body,
    ));
    desk.pointer_move(Point::new(140.0, 160.0));
    assert_eq!(
        desk.panel("popup-docs").unwrap().offset(),
        Offset::new(120.0, 140.0)
    );
    desk.pointer_up();
}

#[test]
fn edge_band_never_starts_a_session() {
    let mut desk = body_desk();
    desk.activate_trigger("docs");
    let bounds = bounds_at(Offset::default());

    // within 15 of the right edge (right = 310)
    assert!(!desk.pointer_down(
        "popup-docs",
        Point::new(300.0, 100.0),
        bounds,
        HitRegion::Body,
    ));
    // within 15 of the bottom edge (bottom = 210)
    assert!(!desk.pointer_down(
        "popup-docs",
        Point::new(100.0, 200.0),
        bounds,
        HitRegion::Body,
    ));
    assert!(!desk.dragging());
}

#[test]
fn close_control_never_starts_a_session() {
    let mut desk = body_desk();
    desk.activate_trigger("docs");
    assert!(!desk.pointer_down(
        "popup-docs",
        Point::new(100.0, 70.0),
        bounds_at(Offset::default()),
        HitRegion::CloseControl,
    ));
}

#[test]
fn title_bar_variant_rejects_the_body() {
    let mut desk = Desk::new(["docs"]);
    desk.activate_trigger("docs");
    let bounds = bounds_at(Offset::default());
    assert!(!desk.pointer_down(
        "popup-docs",
        Point::new(100.0, 150.0),
        bounds,
        HitRegion::Body,
    ));
    assert!(desk.pointer_down(
        "popup-docs",
        Point::new(100.0, 61.0),
        bounds,
        HitRegion::TitleBar,
    ));
}

#[test]
fn dragging_raises_above_open_siblings() {
    let mut desk = Desk::with_config(
        ["docs", "music"],
        DeskConfig {
            activation: DragActivation::WholePanel,
            ..DeskConfig::default()
        },
    );
    desk.activate_trigger("docs");
    desk.activate_trigger("music");
    let music_order = desk.panel("popup-music").unwrap().stacking_order();

    assert!(desk.pointer_down(
        "popup-docs",
        Point::new(100.0, 100.0),
        bounds_at(Offset::default()),
        HitRegion::Body,
    ));
    assert!(desk.panel("popup-docs").unwrap().stacking_order() > music_order);
    desk.pointer_up();
}

#[test]
fn release_anywhere_ends_the_session_exactly_once() {
    let mut desk = body_desk();
    desk.activate_trigger("docs");
    assert!(desk.pointer_down(
        "popup-docs",
        Point::new(100.0, 100.0),
        bounds_at(Offset::default()),
        HitRegion::Body,
    ));
    // release far outside the panel
    desk.pointer_move(Point::new(900.0, 900.0));
    assert_eq!(desk.pointer_up(), Some("popup-docs".to_string()));
    assert_eq!(desk.pointer_up(), None);

    // the next gesture starts cleanly
    let offset = desk.panel("popup-docs").unwrap().offset();
    assert!(desk.pointer_down(
        "popup-docs",
        Point::new(850.0, 850.0),
        bounds_at(offset),
        HitRegion::Body,
    ));
    desk.pointer_up();
}

#[test]
fn no_clamping_allows_fully_offscreen_positions() {
    let mut desk = body_desk();
    desk.activate_trigger("docs");
    assert!(desk.pointer_down(
        "popup-docs",
        Point::new(100.0, 100.0),
        bounds_at(Offset::default()),
        HitRegion::Body,
    ));
    desk.pointer_move(Point::new(-5000.0, -5000.0));
    let offset = desk.panel("popup-docs").unwrap().offset();
    assert_eq!(offset, Offset::new(-5100.0, -5100.0));
    desk.pointer_up();

    // reload is the recovery path
    desk.reset_all();
    assert!(desk.panel("popup-docs").unwrap().offset().is_neutral());
}
