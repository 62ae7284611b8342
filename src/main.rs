use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use thiserror::Error;

use popup_wm::bindings::DeskBindings;
use popup_wm::desk::{Desk, DeskConfig};
use popup_wm::drag::DragActivation;
use popup_wm::drivers::{ConsoleDriver, InputDriver};
use popup_wm::event_loop::{ControlFlow, EventLoop};
use popup_wm::ui;

const TRIGGERS: [&str; 4] = ["docs", "music", "photos", "trash"];

/// Demo desk: clickable triggers open draggable popup panels in the
/// terminal. Drag panels by their title bar, close them with `[x]`, reset
/// everything with `[reset]` (or the `r` key). Quit with `q`.
#[derive(Debug, Parser)]
#[command(name = "popup-wm", version)]
struct Args {
    /// Open panels at a random offset up to this many cells instead of
    /// centered.
    #[arg(long)]
    stagger: Option<f64>,

    /// Allow dragging from anywhere inside a panel, not just its title bar.
    #[arg(long)]
    whole_panel_drag: bool,

    /// Width, in cells, of the right/bottom band that never starts a drag.
    #[arg(long, default_value_t = 2.0)]
    edge_tolerance: f64,
}

#[derive(Debug, Error)]
enum RunError {
    #[error("terminal io: {0}")]
    Io(#[from] io::Error),
}

fn main() -> Result<(), RunError> {
    popup_wm::tracing_sub::init_default();
    let args = Args::parse();

    let config = DeskConfig {
        edge_tolerance: args.edge_tolerance,
        activation: if args.whole_panel_drag {
            DragActivation::WholePanel
        } else {
            DragActivation::TitleBar
        },
        max_stagger: args.stagger,
        ..DeskConfig::default()
    };
    let mut desk = Desk::with_config(TRIGGERS, config);
    let mut bindings = DeskBindings::new();

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let mut driver = ConsoleDriver::new();
    driver.set_mouse_capture(true)?;
    let mut event_loop = EventLoop::new(&mut driver, Duration::from_millis(16));

    let result = event_loop.run(|_driver, event| {
        match event {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') => return Ok(ControlFlow::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(ControlFlow::Quit);
                }
                KeyCode::Char('r') => desk.reset_all(),
                _ => {}
            },
            Some(Event::Mouse(mouse)) => {
                bindings.dispatch(&mut desk, &mouse);
            }
            Some(_) => {}
            None => {
                terminal.draw(|frame| {
                    bindings.set_area(frame.area());
                    ui::render_desk(frame, &desk, &bindings);
                })?;
            }
        }
        Ok(ControlFlow::Continue)
    });

    // the gesture dies with the screen; never leak a session across teardown
    desk.cancel_drag();

    let _ = event_loop.driver().set_mouse_capture(false);
    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map_err(RunError::from)
}
