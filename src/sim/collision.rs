//! Collision detection between the body and obstacles
//!
//! The body's circle is approximated by its bounding box. Overlap tests are
//! strict, so touching edges do not count as a hit.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::obstacles::{Obstacle, ObstacleField};

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CollisionCause {
    /// Hit the wall of an obstacle
    Obstacle { id: u32 },
    /// Left the play area through the top or bottom
    Bounds,
}

/// Body's horizontal extent `[x - r, x + r]` overlaps `[ox, ox + w]`
#[inline]
pub fn overlaps_horizontally(body: &Body, obstacle: &Obstacle) -> bool {
    let (left, right) = body.horizontal_extent();
    right > obstacle.x && left < obstacle.right()
}

/// Body overlaps the obstacle and is not fully inside its gap
pub fn body_hits_obstacle(body: &Body, obstacle: &Obstacle) -> bool {
    if !overlaps_horizontally(body, obstacle) {
        return false;
    }
    let (top, bottom) = body.vertical_extent();
    top < obstacle.top() || bottom > obstacle.bottom()
}

/// First obstacle in field order the body collides with
pub fn first_collision<'a>(body: &Body, field: &'a ObstacleField) -> Option<&'a Obstacle> {
    field.iter().find(|o| body_hits_obstacle(body, o))
}
