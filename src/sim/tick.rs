//! Fixed timestep simulation tick
//!
//! Advances the game by exactly one tick: apply input, move the ball,
//! resolve collisions, check for the lost ball. Deterministic by
//! construction: no randomness, stable brick order, fixed step.

use super::collision::{ball_rect_overlap, hits_ceiling, hits_side_wall, past_floor};
use super::state::{GameEvent, GamePhase, GameState};
pub use super::state::Steer;

/// Input commands for a single tick
///
/// The host collects whatever arrived since the last tick (key presses,
/// dialog choices) into one of these, so all mutation stays serialized
/// inside `tick`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Steer the paddle one step left or right
    pub steer: Option<Steer>,
    /// Start a fresh session (honored in the game-over phase)
    pub restart: bool,
    /// End the session for good
    pub quit: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Terminated => return,
        GamePhase::GameOver => {
            // Idle until the dialog layer answers with restart or quit.
            // Entity state must not change while waiting.
            if input.quit {
                state.terminate();
            } else if input.restart {
                state.reset();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    if input.quit {
        state.terminate();
        return;
    }

    if let Some(steer) = input.steer {
        let step = state.config.paddle_step;
        state.move_paddle(steer, step);
    }

    state.time_ticks += 1;
    state.ball.advance();

    // Paddle bounce
    let paddle_rect = state.paddle.as_rect();
    if ball_rect_overlap(state.ball.pos, state.ball.radius, &paddle_rect) {
        state.ball.reverse_y();
    }

    // Brick scan: detect against the full collection first, remove after.
    // Every hit reverses dy and scores, so an even number of simultaneous
    // hits cancels out to no direction change. Long-standing arcade quirk,
    // kept on purpose.
    let mut struck: Vec<u32> = Vec::new();
    for brick in &state.bricks {
        if ball_rect_overlap(state.ball.pos, state.ball.radius, &brick.rect) {
            struck.push(brick.id);
        }
    }
    for &id in &struck {
        state.ball.reverse_y();
        state.score += 1;
        state.push_event(GameEvent::BrickDestroyed { id });
    }
    if !struck.is_empty() {
        state.bricks.retain(|b| !struck.contains(&b.id));
        log::debug!(
            "Destroyed {} brick(s), {} remaining, score {}",
            struck.len(),
            state.bricks.len(),
            state.score
        );
    }

    // Wall bounces
    if hits_side_wall(state.ball.pos, state.ball.radius, state.config.arena_width) {
        state.ball.reverse_x();
    }
    if hits_ceiling(state.ball.pos) {
        state.ball.reverse_y();
    }

    // Lost ball ends the session; the GameOver event fires exactly once
    if past_floor(state.ball.pos, state.config.arena_height) {
        state.phase = GamePhase::GameOver;
        state.push_event(GameEvent::GameOver { score: state.score });
        log::info!("Game over at score {} after {} ticks", state.score, state.time_ticks);
    }
}
