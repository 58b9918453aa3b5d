//! Brick Breaker entry point (headless demo)
//!
//! Drives the simulation with a fixed-timestep loop and a trivial
//! follow-the-ball steering policy, logging session results. Rendering and
//! real input belong to a host application; this binary exercises the core
//! on its own.

use std::time::{Duration, Instant};

use brick_breaker::ArenaConfig;
use brick_breaker::consts::TICK_MS;
use brick_breaker::sim::{GameEvent, GamePhase, GameState, Steer, TickInput, tick};

const CONFIG_PATH: &str = "arena.json";
/// Demo sessions to play before exiting
const MAX_SESSIONS: u32 = 3;
/// Hard cap on total ticks, in case the follow policy never loses the ball
const MAX_TICKS: u64 = 60_000;

fn main() {
    env_logger::init();
    log::info!("Brick Breaker (headless demo) starting...");

    let config = ArenaConfig::load(CONFIG_PATH);
    let mut state = GameState::new(config);

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut next_tick = Instant::now();
    let mut sessions_played = 0;
    let mut total_ticks: u64 = 0;

    while state.phase != GamePhase::Terminated {
        let mut input = demo_input(&state, sessions_played);
        total_ticks += 1;
        if total_ticks >= MAX_TICKS {
            input.quit = true;
        }
        tick(&mut state, &input);

        for event in state.drain_events() {
            match event {
                GameEvent::BrickDestroyed { id } => log::debug!("Brick {id} destroyed"),
                GameEvent::GameOver { score } => {
                    sessions_played += 1;
                    log::info!("Session {sessions_played} over, final score {score}");
                }
            }
        }

        // Sleep until the next tick boundary
        next_tick += tick_duration;
        let now = Instant::now();
        if next_tick > now {
            std::thread::sleep(next_tick - now);
        } else {
            // Fell behind; realign instead of bursting
            next_tick = now;
        }
    }

    log::info!("Demo finished after {sessions_played} session(s)");
}

/// Steering policy: keep the paddle centered under the ball. In the
/// game-over phase, answer the restart-or-quit prompt the way a dialog
/// layer would.
fn demo_input(state: &GameState, sessions_played: u32) -> TickInput {
    if state.is_over() {
        return TickInput {
            restart: sessions_played < MAX_SESSIONS,
            quit: sessions_played >= MAX_SESSIONS,
            ..Default::default()
        };
    }

    let paddle_center = state.paddle.x + state.paddle.width / 2.0;
    let steer = if state.ball.pos.x < paddle_center - state.config.paddle_step {
        Some(Steer::Left)
    } else if state.ball.pos.x > paddle_center + state.config.paddle_step {
        Some(Steer::Right)
    } else {
        None
    };
    TickInput {
        steer,
        ..Default::default()
    }
}
