//! Property tests: the simulation's bookkeeping invariants must survive
//! arbitrary input sequences.

use brick_breaker::ArenaConfig;
use brick_breaker::sim::{GameState, Steer, TickInput, tick};
use proptest::prelude::*;

/// Strategy for a per-tick steer command
fn steer_strategy() -> impl Strategy<Value = Option<Steer>> {
    prop_oneof![
        Just(None),
        Just(Some(Steer::Left)),
        Just(Some(Steer::Right)),
    ]
}

proptest! {
    /// Whatever the player does, velocity magnitudes, the brick/score
    /// ledger, and the paddle bounds hold on every tick.
    #[test]
    fn invariants_hold_under_random_steering(
        steers in prop::collection::vec(steer_strategy(), 1..2000)
    ) {
        let config = ArenaConfig::default();
        let total = config.brick_count();
        let mut state = GameState::new(config);
        let mut prev_bricks = state.bricks.len();
        let mut prev_score = state.score;

        for steer in steers {
            let input = TickInput { steer, ..Default::default() };
            tick(&mut state, &input);

            prop_assert_eq!(state.ball.vel.x.abs(), config.ball_speed);
            prop_assert_eq!(state.ball.vel.y.abs(), config.ball_speed);

            prop_assert!(state.bricks.len() <= prev_bricks);
            prop_assert!(state.score >= prev_score);
            prop_assert_eq!(state.score as usize, total - state.bricks.len());

            prop_assert!(state.paddle.x >= 0.0);
            prop_assert!(state.paddle.x <= config.arena_width - config.paddle_width);

            prev_bricks = state.bricks.len();
            prev_score = state.score;
        }
    }

    /// Once the ball is lost, any input that is not restart/quit leaves the
    /// session bit-for-bit frozen.
    #[test]
    fn game_over_state_is_frozen(
        steers in prop::collection::vec(steer_strategy(), 1..200)
    ) {
        let mut state = GameState::new(ArenaConfig::default());
        state.ball.pos = glam::Vec2::new(10.0, 399.0);
        state.ball.vel = glam::Vec2::new(-2.0, 2.0);
        tick(&mut state, &TickInput::default());
        prop_assert!(state.is_over());
        state.drain_events();

        let frozen = state.clone();
        for steer in steers {
            let input = TickInput { steer, ..Default::default() };
            tick(&mut state, &input);
            prop_assert_eq!(state.ball.pos, frozen.ball.pos);
            prop_assert_eq!(state.ball.vel, frozen.ball.vel);
            prop_assert_eq!(state.paddle.x, frozen.paddle.x);
            prop_assert_eq!(state.score, frozen.score);
            prop_assert_eq!(state.bricks.len(), frozen.bricks.len());
            prop_assert_eq!(state.time_ticks, frozen.time_ticks);
            prop_assert!(state.drain_events().is_empty());
        }
    }

    /// Paddle steering alone can never push the paddle out of the arena,
    /// whatever the step size.
    #[test]
    fn paddle_never_escapes(
        moves in prop::collection::vec((steer_strategy(), 0.0f32..50.0), 1..500)
    ) {
        let config = ArenaConfig::default();
        let mut state = GameState::new(config);

        for (steer, step) in moves {
            if let Some(steer) = steer {
                state.move_paddle(steer, step);
            }
            prop_assert!(state.paddle.x >= 0.0);
            prop_assert!(state.paddle.x <= config.arena_width - config.paddle_width);
        }
    }
}
