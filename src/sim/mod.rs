//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per invocation (frame delta is implicitly 1 tick)
//! - No rendering or platform dependencies
//! - World state mutated only by the step function

pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{
    Block, Enemy, Item, ItemKind, Patrol, Platform, Player, Projectile, Severity, StatusEvent,
    WorldState,
};
pub use tick::{TickInput, tick};
