use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    /// Poll timeout while a scroll animation is running
    frame_interval: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64, frame_interval: Duration) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            frame_interval,
        }
    }

    /// Poll for the next event at the idle tick rate
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll for the next event at the animation frame rate
    pub fn next_frame(&self) -> Result<Option<AppEvent>> {
        self.poll(self.frame_interval)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm 0.27+ sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Moved
                    | MouseEventKind::ScrollDown
                    | MouseEventKind::ScrollUp
                    | MouseEventKind::Down(_) => Ok(Some(AppEvent::Mouse(mouse))),
                    _ => Ok(None),
                },
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Pointer moved, clicked or scrolled
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Poll timed out; used to drive animation frames
    Tick,
}
