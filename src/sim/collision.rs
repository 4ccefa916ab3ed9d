//! Angular collision detection and approach feedback
//!
//! Shuttle and obstacle both live on the same ring, so a collision is purely a
//! question of how far apart their angles are. Distance goes through
//! `atan2(sin, cos)` so the seam at ±2π never produces a false miss.

use super::state::{Collision, Obstacle, Shuttle};
use crate::angular_distance;
use crate::consts::APPROACH_RADIUS_SCALE;

/// Approach circle size and opacity for a given distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproachFeedback {
    pub radius: f32,
    pub opacity: f32,
}

/// Collision flag and distance for the current angles
pub fn detect(shuttle: &Shuttle, obstacle: &Obstacle) -> Collision {
    let distance = angular_distance(shuttle.angle, obstacle.angle);
    Collision {
        collides: distance < obstacle.angular_radius,
        distance,
    }
}

/// Feedback ring: grows with distance, fades in linearly inside the trigger
/// radius (1 at zero distance, 0 at the trigger)
pub fn approach_feedback(distance: f32, shuttle_radius: f32, trigger: f32) -> ApproachFeedback {
    let radius = distance * shuttle_radius * APPROACH_RADIUS_SCALE;
    let opacity = if distance > trigger || trigger <= 0.0 {
        0.0
    } else {
        1.0 - distance / trigger
    };
    ApproachFeedback { radius, opacity }
}

/// Recompute collision and feedback fields in place
pub fn resolve(shuttle: &mut Shuttle, obstacle: &Obstacle) -> Collision {
    let collision = detect(shuttle, obstacle);
    let feedback = approach_feedback(
        collision.distance,
        shuttle.radius,
        shuttle.approach_trigger_angular_radius,
    );
    shuttle.approach_circle_radius = feedback.radius;
    shuttle.approach_circle_opacity = feedback.opacity;
    collision
}
