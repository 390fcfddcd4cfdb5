//! Per-frame simulation tick
//!
//! One call advances the game by one rendered frame. Motion is in whole
//! velocity steps per tick, so game speed follows the frame rate of whatever
//! drives the loop.

use super::ball::{BallOutcome, BallWorld};
use super::input::InputState;
use super::state::{GameEvent, GameState};

/// Advance the game state by one frame
///
/// Order: paddle, then ball (which may hit the paddle or bricks), then the
/// life-loss transition if the ball was missed. Does nothing once the game is
/// over.
pub fn tick<I: InputState + ?Sized>(state: &mut GameState, input: &I) {
    if !state.alive {
        return;
    }

    state.events.clear();
    state.time_ticks += 1;

    state.paddle.update(input);

    let had_bricks = !state.bricks.is_empty();
    let GameState {
        config,
        paddle,
        ball,
        bricks,
        active,
        events,
        ..
    } = state;
    let outcome = ball.update(
        input,
        BallWorld {
            paddle,
            bricks,
            active,
            config,
            events,
        },
    );

    if outcome == BallOutcome::FloorMiss {
        let lives = state.paddle.die();
        state.events.push(GameEvent::LifeLost { lives });
        log::info!("Ball lost, {} lives left", lives.max(0));

        if lives < 0 {
            state.finish();
        } else {
            state.respawn_ball();
        }
    }

    if had_bricks && state.bricks.is_empty() {
        state.events.push(GameEvent::FieldCleared);
        log::info!("Field cleared after {} ticks", state.time_ticks);
    }
}
