//! Held-key tracking for terminal environments.
//!
//! Terminals with the keyboard enhancement protocol report key releases; most
//! others only report presses and auto-repeats. Without release events a key
//! counts as held until no press/repeat has arrived for the release timeout.

use std::time::{Duration, Instant};

use crate::types::{HeldKeys, Key};

const KEY_COUNT: usize = 5;

#[inline]
fn slot(key: Key) -> usize {
    match key {
        Key::Forward => 0,
        Key::Backward => 1,
        Key::StrafeLeft => 2,
        Key::StrafeRight => 3,
        Key::Quit => 4,
    }
}

/// Tracks which keys are held.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    last_seen: [Option<Instant>; KEY_COUNT],
    release_events: bool,
    release_timeout: Duration,
}

impl KeyTracker {
    pub fn new(release_timeout_ms: u32) -> Self {
        Self {
            last_seen: [None; KEY_COUNT],
            release_events: false,
            release_timeout: Duration::from_millis(release_timeout_ms as u64),
        }
    }

    /// The terminal reports releases; stop relying on the timeout.
    pub fn set_release_events(&mut self, enabled: bool) {
        self.release_events = enabled;
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Press or auto-repeat.
    pub fn press(&mut self, key: Key, now: Instant) {
        self.last_seen[slot(key)] = Some(now);
    }

    pub fn release(&mut self, key: Key) {
        self.last_seen[slot(key)] = None;
    }

    /// Drop everything, e.g. when the terminal loses focus.
    pub fn release_all(&mut self) {
        self.last_seen = [None; KEY_COUNT];
    }

    pub fn is_down(&self, key: Key, now: Instant) -> bool {
        match self.last_seen[slot(key)] {
            Some(_) if self.release_events => true,
            Some(t) => now.saturating_duration_since(t) <= self.release_timeout,
            None => false,
        }
    }

    pub fn snapshot(&self, now: Instant) -> HeldKeys {
        let mut keys = HeldKeys::default();
        for key in [
            Key::Forward,
            Key::Backward,
            Key::StrafeLeft,
            Key::StrafeRight,
            Key::Quit,
        ] {
            keys.set(key, self.is_down(key, now));
        }
        keys
    }
}
