//! The per-frame step function
//!
//! Advances physics, collision resolution, and game-state transitions by
//! exactly one tick, in a fixed order:
//!
//!   1. Player movement and invincibility countdown
//!   2. Platform motion + player/platform resolution
//!   3. Player/block resolution (head-bumps trigger one-shot blocks)
//!   4. Item physics, landing, and collection
//!   5. Enemy patrol, contact damage, and hammer throws
//!   6. Hammer physics, contact damage, and despawn
//!   7. Horizontal clamp, fall-out reset, goal check
//!
//! Pure state mutation: no rendering, no platform dependencies. Status
//! notifications are returned for the driver to forward to the sink.

use glam::Vec2;

use super::rect::Rect;
use super::state::{Projectile, Severity, StatusEvent, WorldState};
use crate::consts::*;

/// Input intents for a single tick, snapshotted from the key state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Advance the world by one tick.
///
/// While the goal has been reached the world is fully frozen: no physics,
/// no AI, no collisions. Rendering is the caller's concern and continues.
pub fn tick(world: &mut WorldState, input: &TickInput) -> Vec<StatusEvent> {
    let mut events = Vec::new();

    if world.game_won {
        return events;
    }

    move_player(world, input);
    resolve_platforms(world);
    resolve_blocks(world, &mut events);
    update_items(world, &mut events);
    update_enemies(world, &mut events);
    update_projectiles(world, &mut events);

    // Keep the player on screen horizontally
    let player = &mut world.player;
    player.bounds.pos.x = player
        .bounds
        .pos
        .x
        .clamp(0.0, CANVAS_WIDTH - player.bounds.size.x);

    if world.player.bounds.pos.y > CANVAS_HEIGHT {
        reset_run(world, "You fell!", &mut events);
    }

    if world.player.bounds.overlaps(&world.goal) {
        log::info!("goal reached");
        world.game_won = true;
        events.push(StatusEvent::new(
            "GOAL!! Congratulations!",
            Severity::Celebrate,
        ));
    }

    events
}

/// Horizontal intent, jump, gravity, Euler integration, invincibility decay
fn move_player(world: &mut WorldState, input: &TickInput) {
    let player = &mut world.player;

    if input.right {
        player.vel.x = MOVE_SPEED;
    } else if input.left {
        player.vel.x = -MOVE_SPEED;
    } else {
        player.vel.x *= FRICTION;
    }

    if input.jump && player.grounded {
        player.vel.y = JUMP_STRENGTH;
        player.grounded = false;
    }

    player.vel.y += GRAVITY;
    player.bounds.pos += player.vel;

    if player.invincible > 0 {
        player.invincible -= 1;
    }
}

/// Landing test shared by the player and items: falling, and the bottom
/// edge before this tick's fall was within the tolerance band of the
/// surface top.
#[inline]
fn lands_on(bounds: &Rect, vy: f32, surface: &Rect) -> bool {
    vy >= 0.0 && bounds.bottom() - vy <= surface.top() + LANDING_TOLERANCE
}

/// Move platforms, then resolve the player against each one.
///
/// Platforms move before the overlap test so the player collides with
/// their new position. Moving platforms carry a landed player.
fn resolve_platforms(world: &mut WorldState) {
    world.player.grounded = false;

    for platform in &mut world.platforms {
        if let Some(patrol) = &mut platform.patrol {
            patrol.advance(&mut platform.bounds);
        }

        let player = &mut world.player;
        if !player.bounds.overlaps(&platform.bounds) {
            continue;
        }

        if lands_on(&player.bounds, player.vel.y, &platform.bounds) {
            player.grounded = true;
            player.vel.y = 0.0;
            player.bounds.pos.y = platform.bounds.top() - player.bounds.size.y;
            if let Some(patrol) = &platform.patrol {
                player.bounds.pos.x += patrol.vx;
            }
        } else if player.vel.y < 0.0
            && player.bounds.top() - player.vel.y >= platform.bounds.bottom()
        {
            // Head-bump: platforms use an exact bottom-edge test
            player.vel.y = 0.0;
            player.bounds.pos.y = platform.bounds.bottom();
        }
    }
}

/// Resolve the player against bonus blocks.
///
/// Unlike platforms, the head-bump test carries a tolerance band, and
/// bumping an active block from below fires its one-shot item spawn.
fn resolve_blocks(world: &mut WorldState, events: &mut Vec<StatusEvent>) {
    let mut spawned = Vec::new();

    for block in &mut world.blocks {
        let player = &mut world.player;
        if !player.bounds.overlaps(&block.bounds) {
            continue;
        }

        if lands_on(&player.bounds, player.vel.y, &block.bounds) {
            player.grounded = true;
            player.vel.y = 0.0;
            player.bounds.pos.y = block.bounds.top() - player.bounds.size.y;
        } else if player.vel.y < 0.0
            && player.bounds.top() - player.vel.y >= block.bounds.bottom() - BLOCK_BUMP_TOLERANCE
        {
            player.vel.y = 0.0;
            player.bounds.pos.y = block.bounds.bottom();

            if block.active {
                block.active = false;
                spawned.push(block.bounds);
                events.push(StatusEvent::new("A mushroom popped out!", Severity::Notice));
            }
        }
    }

    for bounds in spawned {
        world.spawn_item_above(bounds);
    }
}

/// Item physics, landing on platforms/blocks, collection, despawn
fn update_items(world: &mut WorldState, events: &mut Vec<StatusEvent>) {
    let mut i = 0;
    while i < world.items.len() {
        let item = &mut world.items[i];
        item.vel.y += GRAVITY;
        item.bounds.pos += item.vel;

        // Items land like the player does, but never head-bump
        for surface in world
            .platforms
            .iter()
            .map(|p| p.bounds)
            .chain(world.blocks.iter().map(|b| b.bounds))
        {
            if item.bounds.overlaps(&surface) && lands_on(&item.bounds, item.vel.y, &surface) {
                item.vel.y = 0.0;
                item.bounds.pos.y = surface.top() - item.bounds.size.y;
            }
        }

        // Missed items despawn below the canvas, same rule as hammers
        if item.bounds.pos.y > CANVAS_HEIGHT {
            world.items.swap_remove(i);
            continue;
        }

        let collected = world.player.bounds.overlaps(&item.bounds);
        if collected {
            let player = &mut world.player;
            player.big = true;
            player.bounds.size.y = PLAYER_BIG_HEIGHT;
            // Lift so the grown body does not clip into the floor
            player.bounds.pos.y -= PLAYER_BIG_HEIGHT - PLAYER_SMALL_HEIGHT;
            world.items.swap_remove(i);
            events.push(StatusEvent::new("Powered up!", Severity::Celebrate));
            continue;
        }

        i += 1;
    }
}

/// Enemy patrol, contact damage, and timed hammer throws
fn update_enemies(world: &mut WorldState, events: &mut Vec<StatusEvent>) {
    for i in 0..world.enemies.len() {
        let enemy = &mut world.enemies[i];
        enemy.patrol.advance(&mut enemy.bounds);

        if world.enemies[i].bounds.overlaps(&world.player.bounds) {
            apply_damage(world, "Hit by an enemy!", events);
        }

        let enemy = &mut world.enemies[i];
        enemy.throw_timer += 1;
        if enemy.throw_timer > THROW_INTERVAL_TICKS {
            enemy.throw_timer = 0;
            let direction = if world.player.bounds.pos.x < enemy.bounds.pos.x {
                -1.0
            } else {
                1.0
            };
            let origin = enemy.bounds.pos;
            world.projectiles.push(Projectile {
                bounds: Rect::from_xywh(origin.x, origin.y, HAMMER_SIZE, HAMMER_SIZE),
                vel: Vec2::new(HAMMER_SPEED * direction, HAMMER_LAUNCH_VY),
            });
        }
    }
}

/// Hammer physics, contact damage, and off-canvas despawn
fn update_projectiles(world: &mut WorldState, events: &mut Vec<StatusEvent>) {
    let mut i = 0;
    while i < world.projectiles.len() {
        let hammer = &mut world.projectiles[i];
        hammer.vel.y += GRAVITY;
        hammer.bounds.pos += hammer.vel;

        if world.projectiles[i].bounds.overlaps(&world.player.bounds) {
            apply_damage(world, "Hit by a hammer!", events);
            // Damage may have reset the run and emptied this collection
            if i >= world.projectiles.len() {
                break;
            }
        }

        let pos = world.projectiles[i].bounds.pos;
        if pos.y > CANVAS_HEIGHT || pos.x < 0.0 || pos.x > CANVAS_WIDTH {
            world.projectiles.swap_remove(i);
        } else {
            i += 1;
        }
    }
}

/// Player damage state machine.
///
/// Invincible: ignored. Big: shrink to small, start the invincibility
/// window, keep the feet planted. Small and vulnerable: full reset.
pub(crate) fn apply_damage(world: &mut WorldState, cause: &str, events: &mut Vec<StatusEvent>) {
    let player = &mut world.player;
    if player.invincible > 0 {
        return;
    }

    if player.big {
        player.big = false;
        player.bounds.size.y = PLAYER_SMALL_HEIGHT;
        player.bounds.pos.y += PLAYER_BIG_HEIGHT - PLAYER_SMALL_HEIGHT;
        player.invincible = INVINCIBILITY_TICKS;
        events.push(StatusEvent::new(
            format!("{cause} You shrank!"),
            Severity::Notice,
        ));
    } else {
        reset_run(world, cause, events);
    }
}

/// Full game reset with the triggering message
fn reset_run(world: &mut WorldState, cause: &str, events: &mut Vec<StatusEvent>) {
    log::info!("run reset: {cause}");
    world.reset();
    events.push(StatusEvent::new(
        format!("{cause} Try again!"),
        Severity::Danger,
    ));
}
