//! Coin Cruiser entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use coin_cruiser::consts::*;
    use coin_cruiser::platform::KeyState;
    use coin_cruiser::renderer::{scene_vertices, RenderState};
    use coin_cruiser::sim::{generate_layout, GameState, SceneDriver};
    use coin_cruiser::Settings;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        driver: SceneDriver,
        keys: KeyState,
        settings: Settings,
        render_state: Option<RenderState>,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            let layout = generate_layout(seed, LEVEL_OBSTACLES, LEVEL_COINS);
            Self {
                state: GameState::from_layout(&layout),
                driver: SceneDriver::new(),
                keys: KeyState::new(),
                settings: Settings::default(),
                render_state: None,
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run simulation ticks for this frame's wall time
        fn update(&mut self, dt: f32, time: f64) {
            let Game {
                state,
                driver,
                keys,
                settings,
                ..
            } = self;
            driver.advance(state, dt, || keys.sample(&settings.bindings));

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = scene_vertices(&self.state);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.player.score.to_string()));
            }

            if self.settings.show_fps {
                if let Some(el) = document.query_selector("#hud-fps .hud-value").ok().flatten() {
                    el.set_text_content(Some(&self.fps.to_string()));
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Coin Cruiser starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        canvas.set_width(SCENE_WIDTH as u32);
        canvas.set_height(SCENE_HEIGHT as u32);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let bounds = glam::Vec2::new(SCENE_WIDTH, SCENE_HEIGHT);
        let render_state = RenderState::new(
            surface,
            &adapter,
            SCENE_WIDTH as u32,
            SCENE_HEIGHT as u32,
            bounds,
        )
        .await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());

        game.borrow_mut().driver.start();
        request_animation_frame(game);

        log::info!("Coin Cruiser running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key events only flip booleans; the driver samples them per tick
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let key = event.key();
                if key.starts_with("Arrow") {
                    event.prevent_default();
                }
                game.borrow_mut().keys.press(&key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().keys.release(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt, time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Coin Cruiser (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    headless_smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a generated scene for ten simulated seconds with the throttle
/// held, as a quick sanity check of the simulation stack.
#[cfg(not(target_arch = "wasm32"))]
fn headless_smoke_run() {
    use coin_cruiser::consts::*;
    use coin_cruiser::platform::KeyState;
    use coin_cruiser::sim::{generate_layout, GameState, SceneDriver};
    use coin_cruiser::Settings;

    let layout = generate_layout(2026, LEVEL_OBSTACLES, LEVEL_COINS);
    let mut state = GameState::from_layout(&layout);
    let mut driver = SceneDriver::new();
    let mut keys = KeyState::new();
    let settings = Settings::default();

    driver.start();
    keys.press(&settings.bindings.accelerate);

    for _ in 0..600 {
        driver.advance(&mut state, SIM_DT, || keys.sample(&settings.bindings));
    }

    println!(
        "600 ticks: speed {:.2}, score {}, {} object(s) registered",
        state.car.speed,
        state.player.score,
        state.registry.len()
    );
}
