use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};

use super::InputDriver;

/// Input driver over the process console via crossterm.
#[derive(Debug, Default)]
pub struct ConsoleDriver;

impl ConsoleDriver {
    pub fn new() -> Self {
        Self
    }
}

impl InputDriver for ConsoleDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            crossterm::execute!(io::stdout(), event::EnableMouseCapture)
        } else {
            crossterm::execute!(io::stdout(), event::DisableMouseCapture)
        }
    }
}
