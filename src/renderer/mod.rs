//! Read-only projection of the world onto a drawable surface
//!
//! [`draw_frame`] issues primitive draw calls against the [`Surface`] trait
//! and never mutates the world. The canvas-backed implementation lives in
//! [`canvas`] (wasm only); tests use a recording surface.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::consts::*;
use crate::sim::{Rect, WorldState};

/// Horizontal text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Primitive draw calls the core issues once per frame.
///
/// Colors are CSS color strings, the canvas 2D idiom.
pub trait Surface {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn stroke_rect(&mut self, rect: Rect, color: &str);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str, align: TextAlign);
}

const PLATFORM_STATIC: &str = "#66bb6a";
const PLATFORM_MOVING: &str = "#aed581";
const BLOCK_ACTIVE: &str = "#fdd835";
const BLOCK_SPENT: &str = "#795548";
const BLOCK_OUTLINE: &str = "#444";
const ITEM_COLOR: &str = "#e53935";
const ENEMY_COLOR: &str = "blue";
const HAMMER_COLOR: &str = "orange";
const GOAL_COLOR: &str = "gold";
const PLAYER_BIG: &str = "red";
const PLAYER_SMALL: &str = "#ff8a80";
const WIN_WASH: &str = "rgba(255, 215, 0, 0.8)";

/// Draw one frame of the world
pub fn draw_frame(world: &WorldState, surface: &mut impl Surface) {
    surface.clear();

    if world.game_won {
        draw_win_overlay(surface);
        return;
    }

    for platform in &world.platforms {
        let color = if platform.is_moving() {
            PLATFORM_MOVING
        } else {
            PLATFORM_STATIC
        };
        surface.fill_rect(platform.bounds, color);
    }

    for block in &world.blocks {
        let color = if block.active { BLOCK_ACTIVE } else { BLOCK_SPENT };
        surface.fill_rect(block.bounds, color);
        surface.stroke_rect(block.bounds, BLOCK_OUTLINE);
        if block.active {
            surface.fill_text(
                "?",
                block.bounds.pos.x + 8.0,
                block.bounds.pos.y + 22.0,
                "20px Arial",
                "#000",
                TextAlign::Left,
            );
        }
    }

    for item in &world.items {
        surface.fill_rect(item.bounds, ITEM_COLOR);
    }

    for enemy in &world.enemies {
        surface.fill_rect(enemy.bounds, ENEMY_COLOR);
    }

    for hammer in &world.projectiles {
        surface.fill_rect(hammer.bounds, HAMMER_COLOR);
    }

    surface.fill_rect(world.goal, GOAL_COLOR);

    if player_visible(world.player.invincible) {
        let color = if world.player.big {
            PLAYER_BIG
        } else {
            PLAYER_SMALL
        };
        surface.fill_rect(world.player.bounds, color);
    }
}

/// Invincibility blink: hide the player on alternating phases of the
/// countdown. Derived from the counter itself so rendering stays a pure
/// function of world state.
fn player_visible(invincible: u32) -> bool {
    invincible == 0 || (invincible / BLINK_PERIOD_TICKS) % 2 == 0
}

fn draw_win_overlay(surface: &mut impl Surface) {
    surface.fill_rect(
        Rect::from_xywh(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT),
        WIN_WASH,
    );
    surface.fill_text(
        "GOAL!!",
        CANVAS_WIDTH / 2.0,
        CANVAS_HEIGHT / 2.0,
        "bold 80px Arial",
        "white",
        TextAlign::Center,
    );
    surface.fill_text(
        "Congratulations!",
        CANVAS_WIDTH / 2.0,
        CANVAS_HEIGHT / 2.0 + 50.0,
        "20px Arial",
        "#333",
        TextAlign::Center,
    );
}
