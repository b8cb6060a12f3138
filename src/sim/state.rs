//! World state and core simulation types
//!
//! Everything the step function mutates lives here. The world exclusively
//! owns all entity collections; items and projectiles are the only
//! variable-length ones, appended and removed by the step function alone.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level;
use super::rect::Rect;
use crate::consts::*;

/// Severity hint attached to a status notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Something changed (shrink, mushroom appeared)
    Notice,
    /// Something good happened (power-up, win)
    Celebrate,
    /// The run was reset
    Danger,
}

impl Severity {
    /// CSS color the status sink should display this severity in
    pub fn css_color(&self) -> &'static str {
        match self {
            Severity::Notice => "orange",
            Severity::Celebrate => "#ffeb3b",
            Severity::Danger => "red",
        }
    }
}

/// A short human-readable message for the status sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub text: String,
    pub severity: Severity,
}

impl StatusEvent {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
        }
    }
}

/// Reflecting back-and-forth motion between `start_x - range` and
/// `start_x + range`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Patrol {
    /// Current horizontal speed (sign flips at the bounds)
    pub vx: f32,
    /// Anchor the patrol oscillates around
    pub start_x: f32,
    /// Maximum distance from the anchor
    pub range: f32,
}

impl Patrol {
    /// Advance `bounds` one step, reversing direction at the patrol bounds.
    ///
    /// Position is pinned to the bound on reversal so `|x - start_x|` never
    /// exceeds `range`.
    pub fn advance(&mut self, bounds: &mut Rect) {
        bounds.pos.x += self.vx;
        let min = self.start_x - self.range;
        let max = self.start_x + self.range;
        if bounds.pos.x >= max {
            bounds.pos.x = max;
            self.vx = -self.vx.abs();
        } else if bounds.pos.x <= min {
            bounds.pos.x = min;
            self.vx = self.vx.abs();
        }
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub bounds: Rect,
    pub vel: Vec2,
    /// Resting on a surface and eligible to jump
    pub grounded: bool,
    /// Size tier: big (height 60) or small (height 30)
    pub big: bool,
    /// Damage-immunity ticks remaining; decremented once per step
    pub invincible: u32,
}

impl Player {
    /// Player in its initial spawn state: big, motionless, vulnerable
    pub fn spawn() -> Self {
        Self {
            bounds: Rect::from_xywh(
                PLAYER_START_X,
                PLAYER_START_Y,
                PLAYER_WIDTH,
                PLAYER_BIG_HEIGHT,
            ),
            vel: Vec2::ZERO,
            grounded: false,
            big: true,
            invincible: 0,
        }
    }
}

/// A patrolling enemy that periodically throws hammers at the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub bounds: Rect,
    pub patrol: Patrol,
    /// Ticks since the last hammer throw
    pub throw_timer: u32,
}

/// A surface the player and items can land on; moving platforms carry
/// the player horizontally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub bounds: Rect,
    pub patrol: Option<Patrol>,
}

impl Platform {
    pub fn is_moving(&self) -> bool {
        self.patrol.is_some()
    }
}

/// A bonus block: yields its item exactly once when struck from below,
/// then stays inert until a full reset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub bounds: Rect,
    pub active: bool,
}

/// Power-up variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Mushroom,
}

/// A loose power-up, falling under gravity until collected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub bounds: Rect,
    pub vel: Vec2,
    pub kind: ItemKind,
}

/// An enemy-thrown hammer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub bounds: Rect,
    pub vel: Vec2,
}

/// Complete world state for one simulation instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub platforms: Vec<Platform>,
    pub blocks: Vec<Block>,
    pub items: Vec<Item>,
    pub projectiles: Vec<Projectile>,
    pub goal: Rect,
    /// Set on reaching the goal; freezes the simulation but not rendering
    pub game_won: bool,
}

impl WorldState {
    /// Fresh world with the fixed level layout
    pub fn new() -> Self {
        Self {
            player: Player::spawn(),
            enemies: level::enemies(),
            platforms: level::platforms(),
            blocks: level::blocks(),
            items: Vec::new(),
            projectiles: Vec::new(),
            goal: level::goal(),
            game_won: false,
        }
    }

    /// Full game reset: respawn the player, clear loose entities,
    /// reactivate every block.
    ///
    /// Enemy and platform patrol positions and timers deliberately survive.
    pub fn reset(&mut self) {
        self.player = Player::spawn();
        self.game_won = false;
        self.items.clear();
        self.projectiles.clear();
        for block in &mut self.blocks {
            block.active = true;
        }
    }

    /// Spawn a mushroom centered above a just-struck block
    pub fn spawn_item_above(&mut self, block_bounds: Rect) {
        self.items.push(Item {
            bounds: Rect::from_xywh(
                block_bounds.pos.x,
                block_bounds.pos.y - ITEM_SIZE,
                ITEM_SIZE,
                ITEM_SIZE,
            ),
            vel: Vec2::new(ITEM_LAUNCH_VX, ITEM_LAUNCH_VY),
            kind: ItemKind::Mushroom,
        });
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_restores_player_and_blocks() {
        let mut world = WorldState::new();
        world.player.bounds.pos = Vec2::new(600.0, 50.0);
        world.player.big = false;
        world.player.bounds.size.y = PLAYER_SMALL_HEIGHT;
        world.player.invincible = 30;
        world.blocks[0].active = false;
        world.spawn_item_above(world.blocks[0].bounds);
        world.projectiles.push(Projectile {
            bounds: Rect::from_xywh(0.0, 0.0, HAMMER_SIZE, HAMMER_SIZE),
            vel: Vec2::ZERO,
        });
        world.game_won = true;

        world.reset();

        assert_eq!(world.player.bounds.pos, Vec2::new(50.0, 200.0));
        assert!(world.player.big);
        assert_eq!(world.player.bounds.size.y, PLAYER_BIG_HEIGHT);
        assert_eq!(world.player.invincible, 0);
        assert_eq!(world.player.vel, Vec2::ZERO);
        assert!(world.blocks.iter().all(|b| b.active));
        assert!(world.items.is_empty());
        assert!(world.projectiles.is_empty());
        assert!(!world.game_won);
    }

    #[test]
    fn test_reset_keeps_patrol_state() {
        let mut world = WorldState::new();
        world.enemies[0].bounds.pos.x = 350.0;
        world.enemies[0].throw_timer = 42;
        let moving = world
            .platforms
            .iter_mut()
            .find(|p| p.is_moving())
            .expect("level has a moving platform");
        moving.bounds.pos.x = 450.0;

        world.reset();

        assert_eq!(world.enemies[0].bounds.pos.x, 350.0);
        assert_eq!(world.enemies[0].throw_timer, 42);
        let moving = world.platforms.iter().find(|p| p.is_moving()).unwrap();
        assert_eq!(moving.bounds.pos.x, 450.0);
    }

    #[test]
    fn test_patrol_stays_within_bounds() {
        let mut patrol = Patrol {
            vx: 2.0,
            start_x: 400.0,
            range: 100.0,
        };
        let mut bounds = Rect::from_xywh(400.0, 200.0, 100.0, 20.0);

        let mut reversals = 0;
        let mut last_vx = patrol.vx;
        for _ in 0..1000 {
            patrol.advance(&mut bounds);
            assert!(bounds.pos.x >= 300.0, "x below patrol range");
            assert!(bounds.pos.x <= 500.0, "x above patrol range");
            if patrol.vx.signum() != last_vx.signum() {
                // Direction only flips exactly at a bound
                assert!(bounds.pos.x == 300.0 || bounds.pos.x == 500.0);
                reversals += 1;
                last_vx = patrol.vx;
            }
        }
        assert!(reversals > 0);
    }

    #[test]
    fn test_world_snapshot_round_trip() {
        let world = WorldState::new();
        let json = serde_json::to_string(&world).unwrap();
        let restored: WorldState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.player.bounds, world.player.bounds);
        assert_eq!(restored.blocks.len(), world.blocks.len());
        assert_eq!(restored.goal, world.goal);
    }
}
