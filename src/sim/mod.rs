//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness
//! - Stable brick iteration order (row-major creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{ball_rect_overlap, hits_ceiling, hits_side_wall, past_floor};
pub use rect::Rect;
pub use state::{Ball, Brick, GameEvent, GamePhase, GameState, Paddle, Snapshot, Steer};
pub use tick::{TickInput, tick};
