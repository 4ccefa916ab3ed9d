//! Rendering module
//!
//! The crate never touches pixels. [`frame`] turns a read-only snapshot of the
//! session into an ordered list of draw commands; whatever owns the drawing
//! surface implements [`Renderer`] to consume them.

use glam::Vec2;
use serde::Serialize;

use crate::sim::state::colors;
use crate::sim::{GamePhase, SimulationState};

/// One drawing primitive, in screen coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Stroked circle centered on `radius`
    Ring {
        center: Vec2,
        radius: f32,
        width: f32,
        color: [f32; 4],
    },
    /// Filled circle with an optional inner stroke (color, width)
    Disc {
        center: Vec2,
        radius: f32,
        fill: [f32; 4],
        stroke: Option<([f32; 4], f32)>,
    },
    /// Single line of text, centered on `position`
    Text {
        text: String,
        position: Vec2,
        size: f32,
        color: [f32; 4],
    },
}

/// Consumer of draw commands
pub trait Renderer {
    fn draw(&mut self, command: &DrawCommand);

    fn draw_frame(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            self.draw(command);
        }
    }
}

/// Collecting renderer, handy for tests and headless runs
impl Renderer for Vec<DrawCommand> {
    fn draw(&mut self, command: &DrawCommand) {
        self.push(command.clone());
    }
}

/// Approach ring stroke width
const APPROACH_WIDTH: f32 = 2.0;
/// Obstacle outline width
const OBSTACLE_STROKE_WIDTH: f32 = 2.0;

/// Build the draw list for the current state: orbit, obstacle, approach ring
/// (running only), shuttle, then the three scoreboard lines.
pub fn frame(state: &SimulationState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(7);

    commands.push(DrawCommand::Ring {
        center: state.orbit.center,
        radius: state.orbit.radius,
        width: state.orbit.thickness,
        color: state.orbit.color,
    });

    commands.push(DrawCommand::Disc {
        center: state.obstacle_position(),
        radius: state.obstacle.radius,
        fill: colors::OBSTACLE_FILL,
        stroke: Some((colors::OBSTACLE_STROKE, OBSTACLE_STROKE_WIDTH)),
    });

    let shuttle_pos = state.shuttle_position();
    if state.phase == GamePhase::Running && state.shuttle.approach_circle_opacity > 0.0 {
        let mut color = colors::APPROACH;
        color[3] = state.shuttle.approach_circle_opacity;
        commands.push(DrawCommand::Ring {
            center: shuttle_pos,
            radius: state.shuttle.approach_circle_radius,
            width: APPROACH_WIDTH,
            color,
        });
    }

    commands.push(DrawCommand::Disc {
        center: shuttle_pos,
        radius: state.shuttle.radius,
        fill: colors::SHUTTLE,
        stroke: None,
    });

    let board = &state.scoreboard;
    let layout = &state.layout;
    for (i, line) in [&board.top, &board.middle, &board.bottom].into_iter().enumerate() {
        commands.push(DrawCommand::Text {
            text: line.clone(),
            position: layout.anchor + Vec2::new(0.0, layout.line_spacing * i as f32),
            size: layout.font_size,
            color: colors::TEXT,
        });
    }

    commands
}
