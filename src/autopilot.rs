//! Demo mode: an input source that plays the game
//!
//! Launches immediately and steers the paddle under the ball. Used by the
//! headless binary and handy for soak-testing the simulation.

use crate::sim::{GamePhase, GameState, Key, KeyState};

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Dead band around the target; avoids jittering left/right every frame
    pub tolerance: f32,
    /// Aim this far from paddle center to put english on returns
    pub aim_offset: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            tolerance: 4.0,
            aim_offset: 0.0,
        }
    }
}

impl Autopilot {
    /// Keys to hold for the next frame
    pub fn input_for(&self, state: &GameState) -> KeyState {
        let mut keys = KeyState::new();

        match state.phase() {
            GamePhase::GameOver => {}
            GamePhase::Waiting => keys.press(Key::Space),
            GamePhase::Playing => {
                let ball = state.ball.center();
                // Lead the ball while it is falling
                let target = if state.ball.velocity.y > 0.0 {
                    ball.x + state.ball.velocity.x + self.aim_offset
                } else {
                    ball.x
                };

                let paddle_x = state.paddle.center().x;
                if paddle_x < target - self.tolerance {
                    keys.press(Key::Right);
                } else if paddle_x > target + self.tolerance {
                    keys.press(Key::Left);
                }
            }
        }

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::InputState;
    use glam::Vec2;

    #[test]
    fn test_launches_when_waiting() {
        let state = GameState::new(GameConfig::default());
        let keys = Autopilot::default().input_for(&state);
        assert!(keys.is_down(Key::Space));
        assert!(!keys.is_down(Key::Left));
        assert!(!keys.is_down(Key::Right));
    }

    #[test]
    fn test_steers_toward_ball() {
        let mut state = GameState::new(GameConfig::default());
        state.update(&KeyState::holding(&[Key::Space]));
        let pilot = Autopilot::default();

        state.ball.rect.center = Vec2::new(400.0, 300.0);
        assert!(pilot.input_for(&state).is_down(Key::Right));

        state.ball.rect.center = Vec2::new(100.0, 300.0);
        assert!(pilot.input_for(&state).is_down(Key::Left));

        state.ball.rect.center = Vec2::new(state.paddle.center().x, 300.0);
        state.ball.velocity = Vec2::new(0.0, -2.0);
        assert_eq!(pilot.input_for(&state), KeyState::new());
    }

    #[test]
    fn test_idle_after_game_over() {
        let mut state = GameState::new(GameConfig::default());
        state.end();
        assert_eq!(Autopilot::default().input_for(&state), KeyState::new());
    }
}
