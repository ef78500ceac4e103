//! crossterm-backed input source.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, MouseEventKind,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{execute, terminal};

use crate::engine::InputSource;
use crate::handler::KeyTracker;
use crate::map::{is_interrupt, map_key, Binding};
use crate::types::{HeldKeys, InputEvent, Key};

/// Tunables for terminal input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputConfig {
    /// Held-key fallback when the terminal never reports releases.
    pub key_release_timeout_ms: u32,
    /// Pointer units per cell of mouse motion.
    pub pointer_cell_scale: f32,
    /// Pointer units per turn-key press or repeat.
    pub key_turn_rate: f32,
}

/// Reads terminal events and tracks held keys.
pub struct TerminalInput {
    keys: KeyTracker,
    config: InputConfig,
    last_mouse: Option<(u16, u16)>,
    enhanced: bool,
}

impl TerminalInput {
    pub fn new(config: InputConfig) -> Self {
        Self {
            keys: KeyTracker::new(config.key_release_timeout_ms),
            config,
            last_mouse: None,
            enhanced: false,
        }
    }

    /// Ask the terminal for key release events where supported.
    pub fn enable(&mut self) -> io::Result<()> {
        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                io::stdout(),
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                )
            )?;
            self.enhanced = true;
            self.keys.set_release_events(true);
            log::info!("keyboard enhancement enabled; using key release events");
        } else {
            log::info!(
                "no key release events; keys auto-release after {}ms",
                self.config.key_release_timeout_ms
            );
        }
        Ok(())
    }

    pub fn disable(&mut self) -> io::Result<()> {
        if self.enhanced {
            execute!(io::stdout(), PopKeyboardEnhancementFlags)?;
            self.enhanced = false;
            self.keys.set_release_events(false);
        }
        Ok(())
    }

    pub fn keys(&self) -> &KeyTracker {
        &self.keys
    }

    /// Fold one terminal event into key state; return the core event it
    /// produces, if any.
    pub fn translate(&mut self, event: Event, now: Instant) -> Option<InputEvent> {
        match event {
            Event::Key(key) => {
                if is_interrupt(key) {
                    return Some(InputEvent::Quit);
                }
                let binding = map_key(key.code)?;
                match (key.kind, binding) {
                    (KeyEventKind::Release, Binding::Hold(k)) => {
                        self.keys.release(k);
                        None
                    }
                    (KeyEventKind::Release, _) => None,
                    (_, Binding::Hold(k)) => {
                        self.keys.press(k, now);
                        None
                    }
                    (_, Binding::TurnLeft) => Some(InputEvent::PointerMotion {
                        dx: -self.config.key_turn_rate,
                        dy: 0.0,
                    }),
                    (_, Binding::TurnRight) => Some(InputEvent::PointerMotion {
                        dx: self.config.key_turn_rate,
                        dy: 0.0,
                    }),
                }
            }
            Event::Mouse(m) => match m.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    let prev = self.last_mouse.replace((m.column, m.row));
                    let (pc, pr) = prev?;
                    let dx = (m.column as f32 - pc as f32) * self.config.pointer_cell_scale;
                    let dy = (m.row as f32 - pr as f32) * self.config.pointer_cell_scale;
                    if dx == 0.0 && dy == 0.0 {
                        return None;
                    }
                    Some(InputEvent::PointerMotion { dx, dy })
                }
                _ => None,
            },
            Event::Resize(cols, rows) => {
                self.last_mouse = None;
                Some(InputEvent::Resize { cols, rows })
            }
            Event::FocusLost => {
                self.keys.release_all();
                self.last_mouse = None;
                None
            }
            _ => None,
        }
    }
}

impl InputSource for TerminalInput {
    fn poll_event(&mut self) -> Result<Option<InputEvent>> {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Some(out) = self.translate(ev, Instant::now()) {
                return Ok(Some(out));
            }
        }
        Ok(None)
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.keys.is_down(key, Instant::now())
    }

    fn held_keys(&self) -> HeldKeys {
        self.keys.snapshot(Instant::now())
    }
}
