//! Block Hopper - a tiny side-scrolling platformer for the browser canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, world state)
//! - `renderer`: Read-only projection of the world onto a drawable surface
//! - `input`: Thread-safe pressed-keys snapshot fed into each step

pub mod input;
pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Logical canvas dimensions (one unit = one CSS pixel)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;

    /// Downward acceleration per tick, applied to everything that falls
    pub const GRAVITY: f32 = 0.5;
    /// Horizontal velocity multiplier when no move intent is active
    pub const FRICTION: f32 = 0.8;
    /// Vertical velocity set on jump (negative is up)
    pub const JUMP_STRENGTH: f32 = -12.0;
    /// Horizontal speed while a move intent is active
    pub const MOVE_SPEED: f32 = 5.0;

    /// Player spawn and size tiers
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 200.0;
    pub const PLAYER_WIDTH: f32 = 30.0;
    pub const PLAYER_BIG_HEIGHT: f32 = 60.0;
    pub const PLAYER_SMALL_HEIGHT: f32 = 30.0;
    /// Damage-immunity window after shrinking, in ticks
    pub const INVINCIBILITY_TICKS: u32 = 60;

    /// Landing slack: how far below a surface top the pre-move bottom edge
    /// may be and still count as a landing (prevents tunneling through
    /// thin surfaces at high fall speed)
    pub const LANDING_TOLERANCE: f32 = 10.0;
    /// Head-bump slack for blocks only; platforms use an exact edge test
    pub const BLOCK_BUMP_TOLERANCE: f32 = 10.0;

    /// Power-up item defaults
    pub const ITEM_SIZE: f32 = 30.0;
    pub const ITEM_LAUNCH_VX: f32 = 2.0;
    pub const ITEM_LAUNCH_VY: f32 = -5.0;

    /// Hammer projectile defaults
    pub const HAMMER_SIZE: f32 = 10.0;
    pub const HAMMER_SPEED: f32 = 3.0;
    pub const HAMMER_LAUNCH_VY: f32 = -8.0;
    /// Ticks an enemy must accumulate before each throw
    pub const THROW_INTERVAL_TICKS: u32 = 100;

    /// Half-period of the invincibility blink, in ticks
    pub const BLINK_PERIOD_TICKS: u32 = 6;
}
