//! Abstract input events
//!
//! Device capture happens elsewhere; it only has to turn raw keys and buttons
//! into [`InputEvent`]s. Producers on other threads hand events over through an
//! [`InputQueue`], which the frame driver drains between frames so each event
//! is applied exactly once.

use std::sync::mpsc::{self, Receiver, Sender};

use serde::{Deserialize, Serialize};

/// A single player intent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Start, hit the obstacle, or restart (no payload)
    Hit,
    /// Change shuttle speed by this many radians/sec
    SpeedAdjust(f32),
    /// Force a new obstacle position (debug)
    Regenerate,
}

/// Device keys the default binding understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    PrimaryButton,
    ArrowUp,
    ArrowDown,
    R,
    Other,
}

/// Map a pressed key to an event, with arrows stepping speed by `speed_step`
pub fn bind(key: Key, speed_step: f32) -> Option<InputEvent> {
    match key {
        Key::Space | Key::PrimaryButton => Some(InputEvent::Hit),
        Key::ArrowUp => Some(InputEvent::SpeedAdjust(speed_step)),
        Key::ArrowDown => Some(InputEvent::SpeedAdjust(-speed_step)),
        Key::R => Some(InputEvent::Regenerate),
        Key::Other => None,
    }
}

/// Cloneable producer side of an [`InputQueue`]
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: Sender<InputEvent>,
}

impl InputSender {
    /// Queue an event; returns false once the queue has been dropped
    pub fn send(&self, event: InputEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Single-consumer queue of pending events
#[derive(Debug)]
pub struct InputQueue {
    rx: Receiver<InputEvent>,
}

impl InputQueue {
    pub fn channel() -> (InputSender, InputQueue) {
        let (tx, rx) = mpsc::channel();
        (InputSender { tx }, InputQueue { rx })
    }

    /// Take everything queued so far, in arrival order
    pub fn drain(&self) -> Vec<InputEvent> {
        self.rx.try_iter().collect()
    }
}
