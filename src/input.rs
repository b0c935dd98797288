//! Keyboard input handling
//!
//! Turns key-down/key-up notifications into the two things the game needs:
//! held paddle controls sampled once per tick, and a queue of discrete
//! presses consumed once each.
//!
//! Platform backends report keys by name through [`InputState::key_named`];
//! names the game does not use are dropped there.

use std::collections::{HashSet, VecDeque};

use crate::sim::{SessionEvent, TickInput};

/// Keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Space,
    Escape,
    R,
    M,
    Q,
    Y,
    N,
}

impl Key {
    /// Parse a platform key name
    pub fn from_name(name: &str) -> Option<Key> {
        let key = match name {
            "w" | "W" => Key::W,
            "s" | "S" => Key::S,
            "ArrowUp" | "Up" => Key::Up,
            "ArrowDown" | "Down" => Key::Down,
            " " | "Space" | "space" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            "r" | "R" => Key::R,
            "m" | "M" => Key::M,
            "q" | "Q" => Key::Q,
            "y" | "Y" => Key::Y,
            "n" | "N" => Key::N,
            _ => return None,
        };
        Some(key)
    }

    /// Session event a press of this key sends; paddle keys send none
    pub fn session_event(self) -> Option<SessionEvent> {
        match self {
            Key::Space => Some(SessionEvent::Confirm),
            Key::Escape => Some(SessionEvent::Cancel),
            Key::R => Some(SessionEvent::Restart),
            Key::M => Some(SessionEvent::Menu),
            Key::Q => Some(SessionEvent::Quit),
            Key::Y => Some(SessionEvent::Yes),
            Key::N => Some(SessionEvent::No),
            Key::W | Key::S | Key::Up | Key::Down => None,
        }
    }
}

/// Keyboard state between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    presses: VecDeque<Key>,
    close_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key going down. Auto-repeat (down while already held) is not
    /// a new press.
    pub fn key_down(&mut self, key: Key) {
        if self.held.insert(key) {
            self.presses.push_back(key);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Record a key event reported by platform key name.
    /// Returns false for keys the game does not use.
    pub fn key_named(&mut self, name: &str, pressed: bool) -> bool {
        let Some(key) = Key::from_name(name) else {
            return false;
        };
        if pressed {
            self.key_down(key);
        } else {
            self.key_up(key);
        }
        true
    }

    /// Forget held keys, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// The window asked to close
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Snapshot of the paddle controls for this tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left_up: self.is_held(Key::W),
            left_down: self.is_held(Key::S),
            right_up: self.is_held(Key::Up),
            right_down: self.is_held(Key::Down),
        }
    }

    /// Consume queued presses as session events, in press order
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        let mut events: Vec<SessionEvent> = self
            .presses
            .drain(..)
            .filter_map(Key::session_event)
            .collect();
        if std::mem::take(&mut self.close_requested) {
            events.push(SessionEvent::Close);
        }
        events
    }
}
