//! Render-facing snapshot of the playfield
//!
//! The renderer draws a list of boxes; it does not need to know which entity
//! type each one came from beyond the [`SceneKind`] tag.

use serde::{Deserialize, Serialize};

use crate::sim::{GameState, HasBounds, Hsl, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SceneKind {
    Paddle,
    Ball,
    Brick,
}

/// One drawable box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneItem {
    pub kind: SceneKind,
    pub bounds: Rect,
    /// `None` draws in the default black
    pub color: Option<Hsl>,
    pub padding: f32,
}

impl HasBounds for SceneItem {
    fn bounds(&self) -> Rect {
        self.bounds
    }
}

/// Everything a frame needs: drawables plus the HUD values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Remaining bricks
    pub score: usize,
    pub lives: i32,
    pub alive: bool,
    pub active: bool,
    pub items: Vec<SceneItem>,
}

impl Scene {
    pub fn count(&self, kind: SceneKind) -> usize {
        self.items.iter().filter(|item| item.kind == kind).count()
    }
}

impl GameState {
    /// Paddle, ball (only while the game is alive), then bricks in order
    pub fn scene(&self) -> Scene {
        let mut items = Vec::with_capacity(self.bricks.len() + 2);

        items.push(SceneItem {
            kind: SceneKind::Paddle,
            bounds: self.paddle.bounds(),
            color: None,
            padding: 0.0,
        });

        if self.is_alive() {
            items.push(SceneItem {
                kind: SceneKind::Ball,
                bounds: self.ball.bounds(),
                color: None,
                padding: 0.0,
            });
        }

        items.extend(self.bricks.iter().map(|brick| SceneItem {
            kind: SceneKind::Brick,
            bounds: brick.bounds(),
            color: Some(brick.color),
            padding: brick.padding,
        }));

        Scene {
            score: self.score(),
            lives: self.lives(),
            alive: self.is_alive(),
            active: self.is_active(),
            items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_scene_contents() {
        let state = GameState::new(GameConfig::default());
        let scene = state.scene();
        assert_eq!(scene.items.len(), 258);
        assert_eq!(scene.items[0].kind, SceneKind::Paddle);
        assert_eq!(scene.items[1].kind, SceneKind::Ball);
        assert_eq!(scene.count(SceneKind::Brick), scene.score);
        assert_eq!(scene.items[2].padding, 6.0);
        assert!(scene.items[2].color.is_some());
    }

    #[test]
    fn test_ball_hidden_after_game_over() {
        let mut state = GameState::new(GameConfig::default());
        state.end();
        let scene = state.scene();
        assert!(!scene.alive);
        assert_eq!(scene.count(SceneKind::Ball), 0);
        assert_eq!(scene.count(SceneKind::Paddle), 1);
    }

    #[test]
    fn test_scene_serializes() {
        let scene = GameState::new(GameConfig::default()).scene();
        let json = serde_json::to_string(&scene).unwrap();
        assert!(json.contains("\"kind\":\"Paddle\""));
        assert!(json.contains("\"score\":256"));
    }
}
