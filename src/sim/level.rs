//! The fixed level layout
//!
//! One hardcoded screen: ground, three floating platforms (one moving),
//! three bonus blocks, two enemies, and the goal. Positions are
//! configuration data, not loaded externally.

use super::rect::Rect;
use super::state::{Block, Enemy, Patrol, Platform};

pub fn platforms() -> Vec<Platform> {
    vec![
        // Ground
        Platform {
            bounds: Rect::from_xywh(0.0, 350.0, 800.0, 50.0),
            patrol: None,
        },
        Platform {
            bounds: Rect::from_xywh(200.0, 250.0, 100.0, 20.0),
            patrol: None,
        },
        // Moving platform
        Platform {
            bounds: Rect::from_xywh(400.0, 200.0, 100.0, 20.0),
            patrol: Some(Patrol {
                vx: 2.0,
                start_x: 400.0,
                range: 100.0,
            }),
        },
        Platform {
            bounds: Rect::from_xywh(600.0, 150.0, 100.0, 20.0),
            patrol: None,
        },
    ]
}

pub fn blocks() -> Vec<Block> {
    [(150.0, 200.0), (450.0, 100.0), (350.0, 200.0)]
        .into_iter()
        .map(|(x, y)| Block {
            bounds: Rect::from_xywh(x, y, 30.0, 30.0),
            active: true,
        })
        .collect()
}

pub fn enemies() -> Vec<Enemy> {
    vec![
        Enemy {
            bounds: Rect::from_xywh(300.0, 320.0, 30.0, 30.0),
            patrol: Patrol {
                vx: 2.0,
                start_x: 300.0,
                range: 100.0,
            },
            throw_timer: 0,
        },
        Enemy {
            bounds: Rect::from_xywh(500.0, 170.0, 30.0, 30.0),
            patrol: Patrol {
                vx: -2.0,
                start_x: 500.0,
                range: 80.0,
            },
            throw_timer: 0,
        },
    ]
}

pub fn goal() -> Rect {
    Rect::from_xywh(700.0, 100.0, 30.0, 30.0)
}
