//! Per-frame physics step
//!
//! Advances the shuttle along the ring, refreshes collision and approach
//! feedback, and runs the clock down. Only active while a run is in progress.

use super::collision;
use super::state::{GamePhase, SimulationState};
use crate::normalize_angle;

/// What a physics step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Not running, nothing changed
    Idle,
    /// Shuttle moved, clock still positive
    Advanced,
    /// Clock dropped below zero this step
    TimeExpired,
}

/// Negative or non-finite frame times are treated as a zero step
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Ignoring invalid frame time {dt}");
        0.0
    }
}

/// Advance the simulation by `dt` seconds
pub fn advance(state: &mut SimulationState, dt: f32) -> StepOutcome {
    if state.phase != GamePhase::Running {
        return StepOutcome::Idle;
    }
    let dt = sanitize_dt(dt);

    let shuttle = &mut state.shuttle;
    shuttle.angle = normalize_angle(shuttle.angle + shuttle.speed * dt * shuttle.direction);

    state.collision = collision::resolve(&mut state.shuttle, &state.obstacle);

    state.stats.elapsed += dt;
    let remaining = state.scoreboard.time_remaining() - dt;
    state.scoreboard.set_time_remaining(remaining);

    if remaining < 0.0 {
        StepOutcome::TimeExpired
    } else {
        StepOutcome::Advanced
    }
}
