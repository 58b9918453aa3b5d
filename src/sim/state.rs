//! Game state and core simulation types
//!
//! One [`GameState`] owns every entity in the arena. Nothing is shared with
//! the outside except by read-only [`Snapshot`] or by accessor.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::ArenaConfig;

/// Current phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Ball fell past the bottom edge; waiting for restart or quit
    GameOver,
    /// Session ended for good, every further tick is a no-op
    Terminated,
}

/// Paddle steering direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Steer {
    Left,
    Right,
}

/// Events emitted by the simulation for the host to react to
///
/// Drained by the host after each tick. `GameOver` fires exactly once per
/// session, on the transition, so a dialog layer can prompt for
/// restart-or-quit without the core ever blocking on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A brick was struck and removed
    BrickDestroyed { id: u32 },
    /// The ball fell past the bottom edge
    GameOver { score: u32 },
}

/// The player's paddle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// Get the paddle as a Rect for collision detection
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Step the paddle left or right, clamped to the arena.
    ///
    /// Steering past a wall is a silent no-op.
    pub fn step(&mut self, steer: Steer, amount: f32, arena_width: f32) {
        let moved = match steer {
            Steer::Left => self.x - amount,
            Steer::Right => self.x + amount,
        };
        self.x = moved.clamp(0.0, arena_width - self.width);
    }
}

/// The ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Advance one tick worth of movement
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Flip horizontal direction; |vel.x| never changes
    pub fn reverse_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Flip vertical direction; |vel.y| never changes
    pub fn reverse_y(&mut self) {
        self.vel.y = -self.vel.y;
    }
}

/// A brick entity
///
/// Immutable once laid out; struck bricks are removed from the collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub rect: Rect,
}

/// Read-only view of everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub paddle: Rect,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub bricks: Vec<Rect>,
    pub score: u32,
    pub game_over: bool,
}

/// Complete game state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Arena layout this session was created with
    pub config: ArenaConfig,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Remaining bricks, in row-major creation order (stable for
    /// deterministic removal)
    pub bricks: Vec<Brick>,
    /// Bricks destroyed since the last reset
    pub score: u32,
    pub phase: GamePhase,
    /// Ticks advanced since the last reset
    pub time_ticks: u64,
    /// Events since the last drain (not part of the persisted state)
    #[serde(skip)]
    events: Vec<GameEvent>,
    /// Next brick ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh session from the given config
    pub fn new(config: ArenaConfig) -> Self {
        let mut state = Self {
            config,
            paddle: Self::spawn_paddle(&config),
            ball: Self::spawn_ball(&config),
            bricks: Vec::with_capacity(config.brick_count()),
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };
        state.layout_bricks();
        state
    }

    /// Restart the session with the same config: fresh entities, score 0.
    ///
    /// No effect once terminated.
    pub fn reset(&mut self) {
        if self.phase == GamePhase::Terminated {
            return;
        }
        self.paddle = Self::spawn_paddle(&self.config);
        self.ball = Self::spawn_ball(&self.config);
        self.bricks.clear();
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.events.clear();
        self.next_id = 1;
        self.layout_bricks();
        log::info!("Session reset");
    }

    /// End the session for good. One-way: no tick or reset revives it.
    pub fn terminate(&mut self) {
        if self.phase != GamePhase::Terminated {
            log::info!("Session terminated at score {}", self.score);
            self.phase = GamePhase::Terminated;
        }
    }

    /// Steer the paddle, clamped to the arena
    pub fn move_paddle(&mut self, steer: Steer, step: f32) {
        self.paddle.step(steer, step, self.config.arena_width);
    }

    /// Whether the ball has been lost this session
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Build a read-only view for the render collaborator
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            paddle: self.paddle.as_rect(),
            ball_pos: self.ball.pos,
            ball_radius: self.ball.radius,
            bricks: self.bricks.iter().map(|b| b.rect).collect(),
            score: self.score,
            game_over: self.is_over(),
        }
    }

    fn spawn_paddle(config: &ArenaConfig) -> Paddle {
        Paddle {
            x: (config.arena_width - config.paddle_width) / 2.0,
            y: config.arena_height - config.paddle_height - config.paddle_margin,
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    /// Ball starts at the horizontal center, 5/6 of the way down, heading
    /// toward the bottom-right corner.
    fn spawn_ball(config: &ArenaConfig) -> Ball {
        Ball {
            pos: Vec2::new(config.arena_width / 2.0, config.arena_height * 5.0 / 6.0),
            vel: Vec2::splat(config.ball_speed),
            radius: config.ball_radius,
        }
    }

    /// Lay out the brick grid row-major, horizontally centered
    fn layout_bricks(&mut self) {
        let config = &self.config;
        let pitch_x = config.brick_width + config.brick_gap;
        let pitch_y = config.brick_height + config.brick_gap;
        let start_x =
            (config.arena_width - pitch_x * config.brick_columns as f32 + config.brick_gap) / 2.0;
        let start_y = config.brick_top;

        for row in 0..config.brick_rows {
            for col in 0..config.brick_columns {
                let rect = Rect::new(
                    start_x + pitch_x * col as f32,
                    start_y + pitch_y * row as f32,
                    config.brick_width,
                    config.brick_height,
                );
                let id = self.next_id;
                self.next_id += 1;
                self.bricks.push(Brick { id, rect });
            }
        }
        log::info!(
            "Laid out {} bricks ({}x{}) from ({start_x}, {start_y})",
            self.bricks.len(),
            config.brick_rows,
            config.brick_columns,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_layout() {
        let state = GameState::new(ArenaConfig::default());

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.len(), 40);

        // Paddle centered, 10px above the bottom
        assert_eq!(state.paddle.x, 250.0);
        assert_eq!(state.paddle.y, 380.0);

        // Ball at the horizontal center, 5/6 of the way down, heading down-right
        assert_eq!(state.ball.pos, Vec2::new(300.0, 400.0 * 5.0 / 6.0));
        assert_eq!(state.ball.vel, Vec2::new(2.0, 2.0));

        // Grid horizontally centered: first brick at x = (600 - 70*10 + 10)/2
        assert_eq!(state.bricks[0].rect.x, (600.0 - 700.0 + 10.0) / 2.0);
        assert_eq!(state.bricks[0].rect.y, 50.0);
        // Row-major: brick 10 starts the second row
        assert_eq!(state.bricks[10].rect.y, 80.0);
    }

    #[test]
    fn test_brick_ids_stable_row_major() {
        let state = GameState::new(ArenaConfig::default());
        let ids: Vec<u32> = state.bricks.iter().map(|b| b.id).collect();
        assert_eq!(ids, (1..=40).collect::<Vec<u32>>());
    }

    #[test]
    fn test_paddle_clamps_at_walls() {
        let mut state = GameState::new(ArenaConfig::default());

        state.paddle.x = 0.0;
        state.move_paddle(Steer::Left, 20.0);
        assert_eq!(state.paddle.x, 0.0);

        state.paddle.x = 499.0;
        state.move_paddle(Steer::Right, 20.0);
        assert_eq!(state.paddle.x, 500.0);
    }

    #[test]
    fn test_reset_restores_full_grid() {
        let mut state = GameState::new(ArenaConfig::default());
        state.bricks.drain(..5);
        state.score = 5;
        state.phase = GamePhase::GameOver;

        state.reset();
        assert_eq!(state.bricks.len(), 40);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_terminate_is_one_way() {
        let mut state = GameState::new(ArenaConfig::default());
        state.terminate();
        assert_eq!(state.phase, GamePhase::Terminated);

        state.reset();
        assert_eq!(state.phase, GamePhase::Terminated);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(ArenaConfig::default());
        state.bricks.pop();
        state.score = 1;

        let snap = state.snapshot();
        assert_eq!(snap.bricks.len(), 39);
        assert_eq!(snap.score, 1);
        assert_eq!(snap.paddle, state.paddle.as_rect());
        assert_eq!(snap.ball_pos, state.ball.pos);
        assert!(!snap.game_over);
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state = GameState::new(ArenaConfig::default());
        state.push_event(GameEvent::BrickDestroyed { id: 7 });

        let events = state.drain_events();
        assert_eq!(events, vec![GameEvent::BrickDestroyed { id: 7 }]);
        assert!(state.drain_events().is_empty());
    }
}
