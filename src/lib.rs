//! Brick Breaker - a classic paddle-and-bricks arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, collisions, game state)
//! - `config`: Arena layout and tuning values, JSON-loadable
//!
//! The crate contains no rendering or windowing code. A host drives the
//! simulation by calling [`sim::tick`] once per fixed timestep, reads back a
//! [`sim::Snapshot`] for drawing, and reacts to drained [`sim::GameEvent`]s
//! (most importantly the game-over transition).

pub mod config;
pub mod sim;

pub use config::ArenaConfig;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (100 Hz)
    pub const TICK_MS: u64 = 10;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Paddle defaults - paddle slides along the bottom edge
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Gap between the paddle and the bottom of the arena
    pub const PADDLE_MARGIN: f32 = 10.0;
    /// Distance the paddle moves per steer command
    pub const PADDLE_STEP: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis ball speed; velocity components are always +/- this value
    pub const BALL_SPEED: f32 = 2.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 4;
    pub const BRICK_COLUMNS: u32 = 10;
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    /// Horizontal and vertical spacing between neighboring bricks
    pub const BRICK_GAP: f32 = 10.0;
    /// Distance from the top of the arena to the first brick row
    pub const BRICK_TOP: f32 = 50.0;
}
