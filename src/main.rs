//! Geometry Jump entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use geometry_jump::Game;
    use geometry_jump::audio::BackgroundMusic;
    use geometry_jump::consts::*;
    use geometry_jump::platform::web::{DomHud, LocalStore};
    use geometry_jump::renderer::{RenderState, build_scene};
    use geometry_jump::settings::Settings;
    use geometry_jump::sim::Action;
    use geometry_jump::version;

    type WebGame = Game<LocalStore, DomHud, BackgroundMusic>;

    /// Game plus the GPU state used to draw it
    struct App {
        game: WebGame,
        render_state: Option<RenderState>,
    }

    impl App {
        fn render(&mut self) {
            let Some(render_state) = self.render_state.as_mut() else {
                return;
            };
            match render_state.render(&build_scene(&self.game.state)) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    render_state.resize(render_state.size.0, render_state.size.1);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Geometry Jump starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let width = FIELD_WIDTH as u32;
        let height = FIELD_HEIGHT as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Game::new applies the stored volume
        let music = BackgroundMusic::new(Settings::default().music_volume);
        let seed = js_sys::Date::now() as u64;
        let mut game = Game::new(seed, LocalStore::new(), DomHud::new(), music);
        game.set_version(DEFAULT_VERSION);
        log::info!(
            "Game initialized with seed: {} (best: {})",
            seed,
            game.high_score()
        );

        let app = Rc::new(RefCell::new(App {
            game,
            render_state: None,
        }));

        // The loop ticks without a renderer; it draws once the GPU is up
        setup_buttons(app.clone());
        setup_input_handlers(&canvas, app.clone());
        load_version(app.clone());
        request_animation_frame(app.clone());

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| JsValue::from_str(&format!("Failed to create surface: {}", e)))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to get adapter: {}", e)))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| JsValue::from_str(&format!("Failed to create device: {}", e)))?;
        app.borrow_mut().render_state = Some(render_state);

        log::info!("Geometry Jump running!");
        Ok(())
    }

    fn load_version(app: Rc<RefCell<App>>) {
        wasm_bindgen_futures::spawn_local(async move {
            let v = version::or_default(version::fetch_version(VERSION_URL).await);
            app.borrow_mut().game.set_version(&v);
        });
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for id in ["startBtn", "restartBtn"] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing #{} button", id);
                continue;
            };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().game.trigger(Action::Start);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().game.trigger(Action::Press);
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().game.trigger(Action::Press);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.code().as_str() {
                    "Space" => {
                        // Keep the page from scrolling
                        event.prevent_default();
                        app.borrow_mut().game.trigger(Action::Press);
                    }
                    "KeyM" => {
                        app.borrow_mut().game.toggle_mute();
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One simulation step and one draw per display frame
    fn game_loop(app: Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            a.game.frame();
            a.render();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Geometry Jump (native) starting...");
    log::info!("Rendering needs a browser - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    let score = autopilot::run(seed, autopilot::MAX_FRAMES);
    println!("Autopilot (seed {}) scored {}", seed, score);
}

#[cfg(target_arch = "wasm32")]
fn main() {}

/// Headless run driven by a simple jump heuristic
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use geometry_jump::Game;
    use geometry_jump::consts::*;
    use geometry_jump::platform::{MemoryStore, RecordingHud, RecordingMusic};
    use geometry_jump::sim::{Action, GameState};

    pub const MAX_FRAMES: u64 = 36_000;

    /// Ticks of lead time between pressing and the spike reaching the player
    const LEAD_TICKS: f32 = 4.0;

    /// Gap to the next spike at which a jump clears it
    fn reach(state: &GameState) -> f32 {
        state.speed as f32 * LEAD_TICKS
    }

    fn should_jump(state: &GameState) -> bool {
        if state.player.airborne {
            return false;
        }
        let front = state.player.pos.x + state.player.size;
        state
            .obstacles
            .iter()
            .map(|o| o.pos.x - front)
            .filter(|gap| *gap >= 0.0)
            .any(|gap| gap <= reach(state))
    }

    /// Play one run and return its score
    pub fn run(seed: u64, max_frames: u64) -> u64 {
        let mut game = Game::new(
            seed,
            MemoryStore::new(),
            RecordingHud::default(),
            RecordingMusic::default(),
        );
        game.set_version(DEFAULT_VERSION);
        game.trigger(Action::Start);

        for frame in 0..max_frames {
            if frame > 0 && !game.state.is_running() {
                break;
            }
            if should_jump(&game.state) {
                game.trigger(Action::Press);
            }
            game.frame();
            if frame % 600 == 0 {
                log::debug!(
                    "frame {}: score {} speed {:.2} obstacles {}",
                    frame,
                    game.state.score,
                    game.state.speed,
                    game.state.obstacles.len()
                );
            }
        }

        log::info!(
            "Run over after {} ticks: score {} (best {})",
            game.state.run_ticks,
            game.state.score,
            game.high_score()
        );
        game.state.score
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use geometry_jump::sim::Obstacle;
        use glam::Vec2;

        fn grounded_run() -> GameState {
            let mut state = GameState::new(3);
            state.reset_run();
            state.player.pos.y = GROUND_Y - state.player.size;
            state
        }

        fn spike_at_gap(state: &GameState, gap: f32) -> Obstacle {
            Obstacle {
                pos: Vec2::new(
                    state.player.pos.x + state.player.size + gap,
                    GROUND_Y - OBSTACLE_SIZE,
                ),
                size: OBSTACLE_SIZE,
            }
        }

        #[test]
        fn test_jumps_for_spike_within_reach() {
            let mut state = grounded_run();
            assert!(!should_jump(&state));

            let obstacle = spike_at_gap(&state, reach(&state) - 1.0);
            state.obstacles.push(obstacle);
            assert!(should_jump(&state));
        }

        #[test]
        fn test_waits_for_distant_or_passed_spikes() {
            let mut state = grounded_run();
            let far = spike_at_gap(&state, reach(&state) + 5.0);
            let passed = spike_at_gap(&state, -10.0);
            state.obstacles.push(far);
            state.obstacles.push(passed);
            assert!(!should_jump(&state));
        }

        #[test]
        fn test_no_jump_while_airborne() {
            let mut state = grounded_run();
            let near = spike_at_gap(&state, 1.0);
            state.obstacles.push(near);
            state.player.airborne = true;
            assert!(!should_jump(&state));
        }

        #[test]
        fn test_bounded_run_scores_whole_obstacles() {
            let score = run(42, 3_000);
            assert!(score > 0);
            assert_eq!(score % OBSTACLE_SCORE, 0);
        }

        #[test]
        fn test_zero_frames_scores_nothing() {
            assert_eq!(run(7, 0), 0);
        }
    }
}
