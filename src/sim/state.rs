//! Simulation state and core data types
//!
//! Everything the loop core reads or writes lives in [`SimulationState`].
//! Geometry is derived from the canvas size once and never touched again.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SetupError;
use crate::polar_to_cartesian;
use crate::tuning::Tuning;

use super::score::Scoreboard;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle, waiting for a start input
    Init,
    /// Simulation active
    Running,
    /// Run ended, waiting for a restart input
    GameOver,
}

/// The fixed circular track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orbit {
    pub center: Vec2,
    pub radius: f32,
    /// Ring stroke width
    pub thickness: f32,
    pub color: [f32; 4],
}

impl Orbit {
    /// Screen position of a point on the ring
    pub fn point_at(&self, angle: f32) -> Vec2 {
        self.center + polar_to_cartesian(self.radius, angle)
    }
}

/// The player-controlled actor orbiting the ring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shuttle {
    /// Radians, kept in (-2π, 2π]
    pub angle: f32,
    /// +1.0 or -1.0
    pub direction: f32,
    /// Radians per second, never negative
    pub speed: f32,
    pub radius: f32,
    pub approach_circle_radius: f32,
    /// 0 when far from the obstacle, 1 when on top of it
    pub approach_circle_opacity: f32,
    pub approach_trigger_angular_radius: f32,
}

impl Shuttle {
    pub fn flip_direction(&mut self) {
        self.direction = -self.direction;
    }

    pub fn clear_approach(&mut self) {
        self.approach_circle_radius = 0.0;
        self.approach_circle_opacity = 0.0;
    }
}

/// The target the shuttle has to be over when the player hits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub angle: f32,
    /// Half-width of the hit window around `angle`
    pub angular_radius: f32,
    pub radius: f32,
    /// Closest a regenerated obstacle may land to the shuttle
    pub minimal_offset_from_shuttle: f32,
    /// Width of the landing window past the minimal offset
    pub spread: f32,
}

/// Collision result for the current frame
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Collision {
    pub collides: bool,
    /// Shuttle to obstacle angular distance, [0, π]
    pub distance: f32,
}

/// Scoreboard text placement
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TextLayout {
    pub anchor: Vec2,
    pub line_spacing: f32,
    pub font_size: f32,
}

/// Per-run statistics, reset when a run starts
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RunStats {
    pub hits: u32,
    pub elapsed: f32,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub width: f32,
    pub height: f32,
    pub phase: GamePhase,
    pub orbit: Orbit,
    pub shuttle: Shuttle,
    pub obstacle: Obstacle,
    pub collision: Collision,
    pub scoreboard: Scoreboard,
    pub layout: TextLayout,
    pub stats: RunStats,
    pub tuning: Tuning,
}

impl SimulationState {
    /// Build a session for a canvas of the given size
    pub fn new(width: f32, height: f32, tuning: Tuning) -> Result<Self, SetupError> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(SetupError::InvalidDimensions { width, height });
        }
        tuning.validate()?;

        let orbit_radius = (width * ORBIT_WIDTH_FRACTION / 2.0).round().max(1.0);
        let orbit = Orbit {
            center: Vec2::new(width / 2.0, height / 2.0),
            radius: orbit_radius,
            thickness: (orbit_radius / 100.0).round().max(1.0) * 2.0,
            color: colors::ORBIT,
        };

        let shuttle = Shuttle {
            angle: tuning.start_angle,
            direction: 1.0,
            speed: tuning.initial_speed,
            radius: (orbit_radius * SHUTTLE_RADIUS_FRACTION).round().max(1.0),
            approach_circle_radius: 0.0,
            approach_circle_opacity: 0.0,
            approach_trigger_angular_radius: tuning.approach_trigger,
        };

        let obstacle_radius = (orbit_radius * OBSTACLE_RADIUS_FRACTION).round().max(1.0);
        let obstacle = Obstacle {
            // Opposite the shuttle until the first run regenerates it
            angle: crate::normalize_angle(tuning.start_angle + std::f32::consts::PI),
            angular_radius: obstacle_radius / orbit_radius,
            radius: obstacle_radius,
            minimal_offset_from_shuttle: tuning.obstacle_min_offset,
            spread: tuning.obstacle_spread,
        };

        let layout = TextLayout {
            anchor: Vec2::new(width / 2.0, (height * SCOREBOARD_TOP_FRACTION).round()),
            line_spacing: (height * SCOREBOARD_LINE_FRACTION).round(),
            font_size: (height * SCOREBOARD_FONT_FRACTION).round(),
        };

        let scoreboard = Scoreboard::new(LABEL_INIT, tuning.start_time);

        log::info!(
            "Session set up for {}x{} canvas (orbit radius {})",
            width,
            height,
            orbit_radius
        );

        Ok(Self {
            width,
            height,
            phase: GamePhase::Init,
            orbit,
            shuttle,
            obstacle,
            collision: Collision::default(),
            scoreboard,
            layout,
            stats: RunStats::default(),
            tuning,
        })
    }

    /// Screen position of the shuttle
    pub fn shuttle_position(&self) -> Vec2 {
        self.orbit.point_at(self.shuttle.angle)
    }

    /// Screen position of the obstacle
    pub fn obstacle_position(&self) -> Vec2 {
        self.orbit.point_at(self.obstacle.angle)
    }
}

/// Colors for game elements
pub mod colors {
    pub const ORBIT: [f32; 4] = [0.35, 0.35, 0.45, 1.0];
    pub const OBSTACLE_FILL: [f32; 4] = [0.9, 0.3, 0.25, 1.0];
    pub const OBSTACLE_STROKE: [f32; 4] = [1.0, 0.85, 0.8, 1.0];
    pub const APPROACH: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const SHUTTLE: [f32; 4] = [0.3, 0.85, 1.0, 1.0];
    pub const TEXT: [f32; 4] = [0.95, 0.95, 0.95, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_from_canvas() {
        let state = SimulationState::new(800.0, 600.0, Tuning::default()).unwrap();
        assert_eq!(state.phase, GamePhase::Init);
        assert_eq!(state.orbit.radius, 280.0);
        assert_eq!(state.orbit.center, Vec2::new(400.0, 300.0));
        assert_eq!(state.shuttle.radius, 17.0);
        assert_eq!(state.obstacle.radius, 14.0);
        assert!((state.obstacle.angular_radius - 0.05).abs() < 1e-6);
        assert_eq!(state.layout.anchor, Vec2::new(400.0, 60.0));
        assert_eq!(state.layout.line_spacing, 30.0);
    }

    #[test]
    fn test_initial_scoreboard() {
        let state = SimulationState::new(800.0, 600.0, Tuning::default()).unwrap();
        assert_eq!(state.scoreboard.top, LABEL_INIT);
        assert_eq!(state.scoreboard.middle, "0");
        assert_eq!(state.scoreboard.bottom, "00:15,000");
    }

    #[test]
    fn test_rejects_degenerate_canvas() {
        for (w, h) in [(0.0, 600.0), (800.0, -1.0), (f32::NAN, 600.0)] {
            assert!(matches!(
                SimulationState::new(w, h, Tuning::default()),
                Err(SetupError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_invalid_tuning() {
        let tuning = Tuning {
            start_time: -3.0,
            ..Default::default()
        };
        assert!(matches!(
            SimulationState::new(800.0, 600.0, tuning),
            Err(SetupError::InvalidTuning(_))
        ));
    }

    #[test]
    fn test_shuttle_starts_at_bottom_of_ring() {
        let state = SimulationState::new(800.0, 600.0, Tuning::default()).unwrap();
        let pos = state.shuttle_position();
        assert!((pos.x - 400.0).abs() < 1e-3);
        assert!((pos.y - 580.0).abs() < 1e-3);
    }
}
