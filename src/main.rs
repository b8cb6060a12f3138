//! Block Hopper entry point
//!
//! Wires the browser canvas, keyboard events, and status text to the
//! simulation, then drives one step + render per display-refresh callback.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

    use block_hopper::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
    use block_hopper::input::{InputState, key_for_code};
    use block_hopper::renderer::{CanvasSurface, draw_frame};
    use block_hopper::sim::{StatusEvent, WorldState, tick};

    /// Game instance holding all state
    struct Game {
        world: WorldState,
        surface: CanvasSurface,
        input: Arc<InputState>,
        status: Option<HtmlElement>,
    }

    impl Game {
        /// One display-refresh callback: step, forward status, render
        fn frame(&mut self) {
            let events = tick(&mut self.world, &self.input.snapshot());
            for event in &events {
                self.show_status(event);
            }
            draw_frame(&self.world, &mut self.surface);
        }

        fn show_status(&self, event: &StatusEvent) {
            if let Some(status) = &self.status {
                status.set_text_content(Some(&event.text));
                let _ = status
                    .style()
                    .set_property("color", event.severity.css_color());
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Block Hopper starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("failed to get 2d context")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let status = document
            .get_element_by_id("status")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        let input = Arc::new(InputState::default());
        setup_key_listeners(input.clone());

        let game = Rc::new(RefCell::new(Game {
            world: WorldState::new(),
            surface: CanvasSurface::new(ctx),
            input,
            status,
        }));

        request_animation_frame(game);

        log::info!("Block Hopper running!");
    }

    fn setup_key_listeners(input: Arc<InputState>) {
        let document = web_sys::window().unwrap().document().unwrap();

        {
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = key_for_code(&event.code()) {
                    input.set(key, true);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if let Some(key) = key_for_code(&event.code()) {
                    input.set(key, false);
                }
            });
            let _ = document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Block Hopper (native) starting...");
    log::info!("The game is browser-hosted - run with `trunk serve` for the playable version");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
