//! Collision tests for the ball against rects and arena walls
//!
//! The ball is a circle, but every test here treats it as its axis-aligned
//! bounding box: the ball overlaps a rect when `center +/- radius` overlaps
//! the rect on both axes. That over-counts near rect corners, which is the
//! classic arcade behavior this game reproduces.

use glam::Vec2;

use super::rect::Rect;

/// Check overlap between the ball's bounding box and a rect
#[inline]
pub fn ball_rect_overlap(ball_pos: Vec2, ball_radius: f32, rect: &Rect) -> bool {
    ball_pos.x + ball_radius >= rect.left()
        && ball_pos.x - ball_radius <= rect.right()
        && ball_pos.y + ball_radius >= rect.top()
        && ball_pos.y - ball_radius <= rect.bottom()
}

/// Check if the ball is at or past a side wall.
///
/// The left test uses the bare center coordinate while the right test offsets
/// by one radius, so the ball sinks halfway into the left wall but bounces
/// flush off the right one. Kept as-is: bounce positions are part of the
/// game's observable behavior.
#[inline]
pub fn hits_side_wall(ball_pos: Vec2, ball_radius: f32, arena_width: f32) -> bool {
    ball_pos.x <= 0.0 || ball_pos.x >= arena_width - ball_radius
}

/// Check if the ball is at or past the ceiling
#[inline]
pub fn hits_ceiling(ball_pos: Vec2) -> bool {
    ball_pos.y <= 0.0
}

/// Check if the ball has fallen past the bottom of the arena
#[inline]
pub fn past_floor(ball_pos: Vec2, arena_height: f32) -> bool {
    ball_pos.y >= arena_height
}
