//! Session state machine
//!
//! Init --hit--> Running --clock runs out--> GameOver --hit--> Init.
//! While running, a hit lands only if the shuttle currently overlaps the
//! obstacle; otherwise it is ignored.

use serde::{Deserialize, Serialize};

use super::collision;
use super::rng::AngleSource;
use super::state::{Collision, GamePhase, RunStats, SimulationState};
use super::tick::{self, StepOutcome};
use crate::consts::{LABEL_GAME_OVER, LABEL_INIT, LABEL_RUNNING};
use crate::input::InputEvent;
use crate::normalize_angle;

/// Notable things that happened, for audio, logging and leaderboards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run began
    Started,
    /// A hit landed on the obstacle
    Hit { gained: u64, score: u64 },
    /// The clock ran out
    GameOver { score: u64, hits: u32, elapsed: f32 },
    /// Back to the start screen
    Reset,
}

/// Apply one input event to the session
pub fn apply_input(
    state: &mut SimulationState,
    event: InputEvent,
    angles: &mut impl AngleSource,
) -> Option<GameEvent> {
    match event {
        InputEvent::Hit => match state.phase {
            GamePhase::Init => Some(start_run(state, angles)),
            GamePhase::Running if state.collision.collides => Some(land_hit(state, angles)),
            GamePhase::Running => {
                log::debug!(
                    "Miss at distance {:.3} (window {:.3})",
                    state.collision.distance,
                    state.obstacle.angular_radius
                );
                None
            }
            GamePhase::GameOver => Some(reset(state)),
        },
        InputEvent::SpeedAdjust(delta) => {
            adjust_speed(state, delta);
            None
        }
        InputEvent::Regenerate => {
            regenerate_obstacle(state, angles);
            None
        }
    }
}

/// Run one physics step and handle clock expiry
pub fn update(state: &mut SimulationState, dt: f32) -> Option<GameEvent> {
    match tick::advance(state, dt) {
        StepOutcome::TimeExpired => Some(end_run(state)),
        StepOutcome::Advanced | StepOutcome::Idle => None,
    }
}

/// Place the obstacle ahead of the shuttle in its direction of travel
pub fn regenerate_obstacle(state: &mut SimulationState, angles: &mut impl AngleSource) {
    let offset =
        state.obstacle.minimal_offset_from_shuttle + angles.next_unit() * state.obstacle.spread;
    state.obstacle.angle = normalize_angle(state.shuttle.angle + offset * state.shuttle.direction);
    state.collision = collision::resolve(&mut state.shuttle, &state.obstacle);
    log::debug!("Obstacle regenerated at {:.3} rad", state.obstacle.angle);
}

fn adjust_speed(state: &mut SimulationState, delta: f32) {
    if state.phase == GamePhase::GameOver || !delta.is_finite() {
        return;
    }
    state.shuttle.speed = (state.shuttle.speed + delta).max(0.0);
    log::debug!("Shuttle speed now {:.2} rad/s", state.shuttle.speed);
}

fn start_run(state: &mut SimulationState, angles: &mut impl AngleSource) -> GameEvent {
    state.shuttle.speed = state.tuning.initial_speed;
    regenerate_obstacle(state, angles);
    state.scoreboard.set_time_remaining(state.tuning.start_time);
    state.scoreboard.set_score(0);
    state.scoreboard.set_label(LABEL_RUNNING);
    state.stats = RunStats::default();
    state.phase = GamePhase::Running;
    log::info!("Run started");
    GameEvent::Started
}

fn land_hit(state: &mut SimulationState, angles: &mut impl AngleSource) -> GameEvent {
    let gained = (state.shuttle.speed * 100.0).floor() as u64;

    state.shuttle.flip_direction();
    regenerate_obstacle(state, angles);
    state.scoreboard.add_score(gained);
    state.scoreboard.add_time(state.tuning.time_bonus);
    state.shuttle.speed += state.tuning.speed_increment;
    state.stats.hits += 1;

    let score = state.scoreboard.score();
    log::debug!("Hit for {gained} (score {score}, speed {:.2})", state.shuttle.speed);
    GameEvent::Hit { gained, score }
}

fn end_run(state: &mut SimulationState) -> GameEvent {
    state.shuttle.speed = 0.0;
    state.scoreboard.set_label(LABEL_GAME_OVER);
    state.phase = GamePhase::GameOver;

    let score = state.scoreboard.score();
    log::info!(
        "Game over: score {score}, {} hits in {:.1}s",
        state.stats.hits,
        state.stats.elapsed
    );
    GameEvent::GameOver {
        score,
        hits: state.stats.hits,
        elapsed: state.stats.elapsed,
    }
}

fn reset(state: &mut SimulationState) -> GameEvent {
    state.scoreboard.set_label(LABEL_INIT);
    state.shuttle.angle = state.tuning.start_angle;
    state.shuttle.direction = 1.0;
    state.shuttle.speed = state.tuning.initial_speed;
    state.shuttle.clear_approach();
    state.collision = Collision::default();
    state.scoreboard.set_time_remaining(state.tuning.start_time);
    state.scoreboard.set_score(0);
    state.phase = GamePhase::Init;
    log::info!("Session reset");
    GameEvent::Reset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angular_distance;
    use crate::sim::rng::FixedAngles;
    use crate::tuning::Tuning;
    use assert_approx_eq::assert_approx_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn new_state() -> SimulationState {
        SimulationState::new(800.0, 600.0, Tuning::default()).unwrap()
    }

    fn running(angles: &mut FixedAngles) -> SimulationState {
        let mut state = new_state();
        assert_eq!(
            apply_input(&mut state, InputEvent::Hit, angles),
            Some(GameEvent::Started)
        );
        state
    }

    /// Park the obstacle on the shuttle so the next hit lands
    fn line_up(state: &mut SimulationState) {
        state.obstacle.angle = state.shuttle.angle;
        update(state, 0.0);
        assert!(state.collision.collides);
    }

    #[test]
    fn test_start_from_init() {
        let mut angles = FixedAngles::new(vec![0.5]);
        let state = running(&mut angles);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.scoreboard.score(), 0);
        assert_eq!(state.scoreboard.time_remaining(), 15.0);
        assert_eq!(state.scoreboard.top, LABEL_RUNNING);
        assert_eq!(state.shuttle.speed, Tuning::default().initial_speed);
    }

    #[test]
    fn test_regeneration_lands_inside_window() {
        for sample in [0.0, 0.3, 0.99] {
            let mut angles = FixedAngles::new(vec![sample]);
            let state = running(&mut angles);
            let expected = FRAC_PI_2 + FRAC_PI_4 + sample * FRAC_PI_2;
            assert_approx_eq!(state.obstacle.angle, expected, 1e-5);
            assert!(!state.collision.collides);
        }
    }

    #[test]
    fn test_regeneration_follows_direction() {
        let mut angles = FixedAngles::new(vec![0.0]);
        let mut state = running(&mut angles);
        state.shuttle.direction = -1.0;
        regenerate_obstacle(&mut state, &mut angles);
        assert_approx_eq!(state.obstacle.angle, FRAC_PI_2 - FRAC_PI_4, 1e-5);
    }

    #[test]
    fn test_colliding_hit_scores() {
        let mut angles = FixedAngles::new(vec![0.5]);
        let mut state = running(&mut angles);
        line_up(&mut state);

        let speed = state.shuttle.speed;
        let time = state.scoreboard.time_remaining();
        let event = apply_input(&mut state, InputEvent::Hit, &mut angles);

        let gained = (speed * 100.0).floor() as u64;
        assert_eq!(event, Some(GameEvent::Hit { gained, score: gained }));
        assert_eq!(state.scoreboard.score(), gained);
        assert!(state.scoreboard.time_remaining() > time);
        assert_approx_eq!(state.scoreboard.time_remaining(), time + 1.5, 1e-5);
        assert_eq!(state.shuttle.direction, -1.0);
        assert_approx_eq!(state.shuttle.speed, speed + 0.15, 1e-6);
        assert_eq!(state.stats.hits, 1);
    }

    #[test]
    fn test_hit_moves_obstacle_out_of_reach() {
        let mut angles = FixedAngles::new(vec![0.5]);
        let mut state = running(&mut angles);
        line_up(&mut state);
        apply_input(&mut state, InputEvent::Hit, &mut angles);

        // A second hit in the same frame must not score again
        assert!(!state.collision.collides);
        let score = state.scoreboard.score();
        assert_eq!(apply_input(&mut state, InputEvent::Hit, &mut angles), None);
        assert_eq!(state.scoreboard.score(), score);

        // New obstacle sits ahead in the new (negative) direction
        let distance = angular_distance(state.shuttle.angle, state.obstacle.angle);
        assert!(distance >= FRAC_PI_4 - 1e-5);
    }

    #[test]
    fn test_missed_hit_changes_nothing() {
        let mut angles = FixedAngles::new(vec![0.5]);
        let mut state = running(&mut angles);
        update(&mut state, 0.016);
        assert!(!state.collision.collides);

        let before = serde_json::to_string(&state).unwrap();
        assert_eq!(apply_input(&mut state, InputEvent::Hit, &mut angles), None);
        assert_eq!(serde_json::to_string(&state).unwrap(), before);
    }

    #[test]
    fn test_clock_expiry_ends_run() {
        let mut angles = FixedAngles::new(vec![0.5]);
        let mut state = running(&mut angles);

        let mut event = None;
        for _ in 0..20 {
            if let Some(e) = update(&mut state, 1.0) {
                event = Some(e);
                break;
            }
        }
        assert!(matches!(event, Some(GameEvent::GameOver { score: 0, .. })));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.shuttle.speed, 0.0);
        assert_eq!(state.scoreboard.top, LABEL_GAME_OVER);
        assert_eq!(state.scoreboard.bottom, "00:00,000");

        let frozen = serde_json::to_string(&state).unwrap();
        for _ in 0..10 {
            assert_eq!(update(&mut state, 0.5), None);
        }
        assert_eq!(serde_json::to_string(&state).unwrap(), frozen);
    }

    #[test]
    fn test_speed_adjust() {
        let mut angles = FixedAngles::new(vec![0.5]);
        let mut state = running(&mut angles);
        let speed = state.shuttle.speed;

        apply_input(&mut state, InputEvent::SpeedAdjust(0.25), &mut angles);
        assert_approx_eq!(state.shuttle.speed, speed + 0.25, 1e-6);

        apply_input(&mut state, InputEvent::SpeedAdjust(-100.0), &mut angles);
        assert_eq!(state.shuttle.speed, 0.0);

        state.phase = GamePhase::GameOver;
        apply_input(&mut state, InputEvent::SpeedAdjust(1.0), &mut angles);
        assert_eq!(state.shuttle.speed, 0.0);
    }

    #[test]
    fn test_regenerate_input_works_in_any_phase() {
        let mut angles = FixedAngles::new(vec![0.0, 0.99]);
        let mut state = new_state();
        apply_input(&mut state, InputEvent::Regenerate, &mut angles);
        assert_approx_eq!(state.obstacle.angle, FRAC_PI_2 + FRAC_PI_4, 1e-5);
        assert_eq!(state.phase, GamePhase::Init);

        state.phase = GamePhase::GameOver;
        apply_input(&mut state, InputEvent::Regenerate, &mut angles);
        assert_approx_eq!(
            state.obstacle.angle,
            FRAC_PI_2 + FRAC_PI_4 + 0.99 * FRAC_PI_2,
            1e-4
        );
    }

    #[test]
    fn test_restart_cycle() {
        let mut angles = FixedAngles::new(vec![0.5]);
        let mut state = running(&mut angles);
        line_up(&mut state);
        apply_input(&mut state, InputEvent::Hit, &mut angles);
        while update(&mut state, 0.5).is_none() {}
        assert_eq!(state.phase, GamePhase::GameOver);

        assert_eq!(
            apply_input(&mut state, InputEvent::Hit, &mut angles),
            Some(GameEvent::Reset)
        );
        assert_eq!(state.phase, GamePhase::Init);
        assert_eq!(state.scoreboard.top, LABEL_INIT);
        assert_eq!(state.shuttle.angle, FRAC_PI_2);
        assert_eq!(state.shuttle.direction, 1.0);
        assert_eq!(state.scoreboard.score(), 0);
        assert_eq!(state.scoreboard.time_remaining(), 15.0);
        assert!(!state.collision.collides);

        // And around again
        assert_eq!(
            apply_input(&mut state, InputEvent::Hit, &mut angles),
            Some(GameEvent::Started)
        );
        assert_eq!(state.stats.hits, 0);
    }
}
