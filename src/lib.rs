//! Orbit Reflex - a ring-orbit reflex arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (state, physics, scoring, state machine)
//! - `render`: Draw-command generation for an external renderer
//! - `input`: Abstract input events and key bindings
//! - `game`: Frame driver facade tying the pieces together
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod game;
pub mod highscores;
pub mod input;
pub mod render;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, SetupError, TuningError};
pub use game::Game;
pub use highscores::HighScores;
pub use input::InputEvent;
pub use tuning::Tuning;

use glam::Vec2;
use std::f32::consts::TAU;

/// Geometry and presentation constants
pub mod consts {
    /// Orbit diameter as a fraction of the canvas width
    pub const ORBIT_WIDTH_FRACTION: f32 = 0.7;
    /// Shuttle radius as a fraction of the orbit radius
    pub const SHUTTLE_RADIUS_FRACTION: f32 = 0.06;
    /// Obstacle radius as a fraction of the orbit radius
    pub const OBSTACLE_RADIUS_FRACTION: f32 = 0.05;
    /// Approach circle grows this many shuttle radii per radian of distance
    pub const APPROACH_RADIUS_SCALE: f32 = 10.0;

    /// Scoreboard anchor height as a fraction of the canvas height
    pub const SCOREBOARD_TOP_FRACTION: f32 = 0.1;
    /// Scoreboard line spacing as a fraction of the canvas height
    pub const SCOREBOARD_LINE_FRACTION: f32 = 0.05;
    /// Scoreboard font size as a fraction of the canvas height
    pub const SCOREBOARD_FONT_FRACTION: f32 = 0.04;

    /// Field aspect (width / height) used when sizing from a window
    pub const FIELD_ASPECT: f32 = 0.56;

    /// Scoreboard labels
    pub const LABEL_INIT: &str = "PRESS TO START";
    pub const LABEL_RUNNING: &str = "HIT THE TARGET";
    pub const LABEL_GAME_OVER: &str = "GAME OVER";
}

/// Fold an angle into (-2π, 2π].
///
/// Only angles past a full turn are wrapped; anything already inside the band
/// is returned unchanged.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    if angle > TAU {
        angle % TAU
    } else if angle <= -TAU {
        // `%` keeps the dividend's sign; negating lands in [0, 2π)
        -(angle % TAU)
    } else {
        angle
    }
}

/// Shortest-path distance between two angles, always in [0, π]
#[inline]
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let delta = a - b;
    delta.sin().atan2(delta.cos()).abs()
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Playfield size for a window: full height, width capped by the field aspect
pub fn field_size(window_width: f32, window_height: f32) -> (f32, f32) {
    let width = (window_height * consts::FIELD_ASPECT).round().min(window_width);
    (width, window_height)
}
