//! Frame driver facade
//!
//! Owns one session plus its randomness and leaderboard. A platform layer calls
//! [`Game::init`] once, then per frame: feed inputs (directly or via
//! [`Game::pump`]), [`Game::update`], [`Game::render`].

use crate::error::SetupError;
use crate::highscores::HighScores;
use crate::input::{InputEvent, InputQueue};
use crate::render::{self, Renderer};
use crate::sim::{self, AngleSource, GameEvent, SimulationState, SystemAngles};
use crate::tuning::Tuning;

pub struct Game<A: AngleSource = SystemAngles> {
    pub state: SimulationState,
    pub high_scores: HighScores,
    angles: A,
    events: Vec<GameEvent>,
}

impl Game<SystemAngles> {
    /// New session with default tuning and un-seeded randomness
    pub fn init(width: f32, height: f32) -> Result<Self, SetupError> {
        Self::with_angles(width, height, Tuning::default(), SystemAngles::system())
    }
}

impl<A: AngleSource> Game<A> {
    pub fn with_angles(
        width: f32,
        height: f32,
        tuning: Tuning,
        angles: A,
    ) -> Result<Self, SetupError> {
        Ok(Self {
            state: SimulationState::new(width, height, tuning)?,
            high_scores: HighScores::new(),
            angles,
            events: Vec::new(),
        })
    }

    /// Apply one input immediately
    pub fn apply_input(&mut self, event: InputEvent) {
        if let Some(event) = sim::apply_input(&mut self.state, event, &mut self.angles) {
            self.record(event);
        }
    }

    /// Apply everything waiting in the queue, in arrival order
    pub fn pump(&mut self, queue: &InputQueue) -> usize {
        let pending = queue.drain();
        let count = pending.len();
        for event in pending {
            self.apply_input(event);
        }
        count
    }

    /// Advance by one frame of `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if let Some(event) = sim::update(&mut self.state, dt) {
            self.record(event);
        }
    }

    /// Hand the current frame to a renderer
    pub fn render(&self, renderer: &mut impl Renderer) {
        renderer.draw_frame(&render::frame(&self.state));
    }

    /// Events since the last call, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn record(&mut self, event: GameEvent) {
        if let GameEvent::GameOver {
            score,
            hits,
            elapsed,
        } = event
        {
            self.high_scores.add_score(score, hits, elapsed);
        }
        self.events.push(event);
    }
}
