//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - Explicit state struct, mutated only through free functions
//! - Pluggable randomness (thread RNG live, seeded or fixed in tests)
//! - No rendering or platform dependencies

pub mod collision;
pub mod machine;
pub mod rng;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{ApproachFeedback, approach_feedback, detect};
pub use machine::{GameEvent, apply_input, regenerate_obstacle, update};
pub use rng::{AngleSource, FixedAngles, RandomAngles, SeededAngles, SystemAngles};
pub use score::{Scoreboard, format_score, format_time_remaining};
pub use state::{
    Collision, GamePhase, Obstacle, Orbit, RunStats, Shuttle, SimulationState, TextLayout,
};
pub use tick::{StepOutcome, advance};
