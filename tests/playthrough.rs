//! End-to-end behavior through the public API: step the world the way the
//! driver does and check the gameplay-level outcomes.

use block_hopper::consts::*;
use block_hopper::renderer::{Surface, TextAlign, draw_frame};
use block_hopper::sim::{Rect, TickInput, WorldState, tick};

/// Counts draw calls; enough to observe that rendering still happens
#[derive(Default)]
struct CountingSurface {
    clears: usize,
    fills: usize,
    texts: usize,
}

impl Surface for CountingSurface {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn fill_rect(&mut self, _rect: Rect, _color: &str) {
        self.fills += 1;
    }

    fn stroke_rect(&mut self, _rect: Rect, _color: &str) {}

    fn fill_text(
        &mut self,
        _text: &str,
        _x: f32,
        _y: f32,
        _font: &str,
        _color: &str,
        _align: TextAlign,
    ) {
        self.texts += 1;
    }
}

/// The level with hazards removed, so movement runs undisturbed
fn hazard_free_world() -> WorldState {
    let mut world = WorldState::new();
    world.enemies.clear();
    world.blocks.clear();
    world
}

#[test]
fn player_runs_right_until_the_canvas_edge() {
    let mut world = hazard_free_world();
    let right = TickInput {
        right: true,
        ..Default::default()
    };

    let mut last_x = world.player.bounds.pos.x;
    for _ in 0..200 {
        tick(&mut world, &right);
        let x = world.player.bounds.pos.x;
        assert!(x >= last_x, "x must increase monotonically");
        assert!(x <= CANVAS_WIDTH - PLAYER_WIDTH, "x must stay on canvas");
        last_x = x;
    }

    // Long enough at full speed to have hit the clamp
    assert_eq!(last_x, CANVAS_WIDTH - PLAYER_WIDTH);
}

#[test]
fn player_falls_onto_the_ground_and_stays_there() {
    let mut world = hazard_free_world();
    world.player.bounds.pos.y = 0.0;

    for _ in 0..120 {
        tick(&mut world, &TickInput::default());
    }

    assert!(world.player.grounded);
    assert_eq!(world.player.vel.y, 0.0);
    assert_eq!(
        world.player.bounds.pos.y,
        350.0 - world.player.bounds.size.y
    );
}

#[test]
fn reaching_the_goal_freezes_the_world_but_not_the_renderer() {
    let mut world = hazard_free_world();
    world.player.bounds.pos = world.goal.pos;
    world.player.vel = glam::Vec2::ZERO;

    let events = tick(&mut world, &TickInput::default());
    assert!(world.game_won);
    assert!(events.iter().any(|e| e.text.contains("GOAL")));

    let frozen = serde_json::to_string(&world).unwrap();
    let mut surface = CountingSurface::default();
    for _ in 0..5 {
        let events = tick(
            &mut world,
            &TickInput {
                left: true,
                jump: true,
                ..Default::default()
            },
        );
        assert!(events.is_empty());
        draw_frame(&world, &mut surface);
    }

    assert_eq!(serde_json::to_string(&world).unwrap(), frozen);
    // Rendering carried on every frame: the win overlay wash and both lines
    assert_eq!(surface.clears, 5);
    assert_eq!(surface.fills, 5);
    assert_eq!(surface.texts, 10);
}

#[test]
fn bumped_block_feeds_the_player_a_mushroom() {
    let mut world = WorldState::new();
    world.enemies.clear();

    // Stand the small player under the first block and jump into it
    world.player.big = false;
    world.player.bounds = Rect::from_xywh(150.0, 320.0, PLAYER_WIDTH, PLAYER_SMALL_HEIGHT);

    let jump = TickInput {
        jump: true,
        ..Default::default()
    };
    let chase = TickInput {
        right: true,
        ..Default::default()
    };
    let mut got_mushroom = false;
    let mut powered_up = false;
    for i in 0..600 {
        // Land first, bounce into the block above, then chase the mushroom
        // as it tumbles off to the right
        let input = if got_mushroom {
            chase
        } else if i < 30 {
            TickInput::default()
        } else {
            jump
        };
        let events = tick(&mut world, &input);
        for event in &events {
            if event.text.contains("mushroom") {
                got_mushroom = true;
            }
            if event.text.contains("Powered up") {
                powered_up = true;
            }
        }
        if powered_up {
            break;
        }
    }

    assert!(got_mushroom, "block above the spawn was never triggered");
    assert!(powered_up, "mushroom was never collected");
    assert!(world.player.big);
    assert_eq!(world.player.bounds.size.y, PLAYER_BIG_HEIGHT);
    assert!(!world.blocks[0].active);
}
