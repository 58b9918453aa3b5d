//! Arena configuration
//!
//! Every layout and tuning value the simulation needs, loadable from a JSON
//! file so the arena can be reshaped without recompiling. Values are taken
//! as-is: the core treats them as caller-validated and never range-checks.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Arena layout and tuning values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Arena width in pixels
    pub arena_width: f32,
    /// Arena height in pixels
    pub arena_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Gap between the paddle and the bottom edge
    pub paddle_margin: f32,
    /// Distance moved per steer command
    pub paddle_step: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis speed; velocity components are always +/- this value
    pub ball_speed: f32,

    // === Brick grid ===
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    /// Spacing between neighboring bricks, both axes
    pub brick_gap: f32,
    /// Distance from the top edge to the first brick row
    pub brick_top: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_step: PADDLE_STEP,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_gap: BRICK_GAP,
            brick_top: BRICK_TOP,
        }
    }
}

impl ArenaConfig {
    /// Total number of bricks in a freshly laid out grid
    pub fn brick_count(&self) -> usize {
        (self.brick_rows * self.brick_columns) as usize
    }

    /// Load config from a JSON file, falling back to defaults on any failure
    pub fn load(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded arena config from {path}");
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring malformed arena config {path}: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No arena config at {path}, using defaults");
                Self::default()
            }
        }
    }

    /// Save config as pretty-printed JSON
    pub fn save(&self, path: &str) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to save arena config to {path}: {e}");
                } else {
                    log::info!("Arena config saved to {path}");
                }
            }
            Err(e) => log::warn!("Failed to serialize arena config: {e}"),
        }
    }
}
