//! Click Drop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, MouseEvent};

    use click_drop::audio::AudioManager;
    use click_drop::platform::{KeyValueStore, LocalStorage, MemoryStorage};
    use click_drop::renderer::CanvasSurface;
    use click_drop::{Game, Tuning, ui};

    type WebGame = Game<CanvasSurface, Box<dyn KeyValueStore>>;

    /// Live text displays and the leaderboard list
    struct Dom {
        document: Document,
        score: Element,
        lives: Element,
        timer: Element,
        ranking_list: Element,
    }

    impl Dom {
        fn lookup(document: &Document) -> Result<Self, JsValue> {
            Ok(Self {
                document: document.clone(),
                score: element(document, "score")?,
                lives: element(document, "lives")?,
                timer: element(document, "timer")?,
                ranking_list: element(document, "rankingList")?,
            })
        }

        fn update_hud(&self, game: &WebGame) {
            let hud = game.hud();
            self.score.set_text_content(Some(&hud.score));
            self.lives.set_text_content(Some(&hud.lives));
            self.timer.set_text_content(Some(&hud.timer));
        }

        fn show_ranking(&self, lines: &[String]) {
            self.ranking_list.set_inner_html("");
            for line in lines {
                match self.document.create_element("li") {
                    Ok(item) => {
                        item.set_text_content(Some(line));
                        let _ = self.ranking_list.append_child(&item);
                    }
                    Err(e) => log::warn!("Failed to create ranking item: {:?}", e),
                }
            }
        }
    }

    /// Missing elements are a broken page, not a runtime condition
    fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
        document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{} element", id)))
    }

    /// LocalStorage, or a throwaway map when the browser blocks it
    fn open_storage() -> Box<dyn KeyValueStore> {
        match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{} - ranking will not persist", e);
                Box::new(MemoryStorage::new())
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger already set: {}", e).into());
        }

        log::info!("Click Drop starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = element(&document, "gameCanvas")?.dyn_into()?;
        let dom = Rc::new(Dom::lookup(&document)?);

        let tuning = Tuning::default().with_arena(canvas.width() as f32, canvas.height() as f32);
        let store = open_storage();
        let surface = CanvasSurface::new(canvas.clone())?;

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(seed, tuning, surface, store, AudioManager::new());
        log::info!("Game initialized with seed: {}", seed);

        dom.update_hud(&game);
        dom.show_ranking(&game.ranking_lines());

        let game = Rc::new(RefCell::new(game));

        setup_click_handler(&canvas, game.clone(), dom.clone());
        setup_reset_button(&document, game.clone(), dom.clone())?;
        setup_mute_button(&document, game.clone())?;

        // Start game loop
        request_animation_frame(game, dom);

        log::info!("Click Drop running!");
        Ok(())
    }

    fn setup_click_handler(canvas: &HtmlCanvasElement, game: Rc<RefCell<WebGame>>, dom: Rc<Dom>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let point = Vec2::new(
                (event.client_x() as f64 - rect.left()) as f32,
                (event.client_y() as f64 - rect.top()) as f32,
            );
            let mut g = game.borrow_mut();
            if g.click(point).is_some() {
                dom.update_hud(&g);
            }
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_reset_button(
        document: &Document,
        game: Rc<RefCell<WebGame>>,
        dom: Rc<Dom>,
    ) -> Result<(), JsValue> {
        let btn = element(document, "resetRanking")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let Some(window) = web_sys::window() else { return };
            if !window.confirm_with_message(ui::RESET_CONFIRM).unwrap_or(false) {
                return;
            }
            let lines = game.borrow_mut().reset_ranking();
            dom.show_ranking(&lines);
            let _ = window.alert_with_message(ui::RESET_DONE);
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_mute_button(document: &Document, game: Rc<RefCell<WebGame>>) -> Result<(), JsValue> {
        let btn = element(document, "muteToggle")?;
        btn.set_text_content(Some(ui::mute_label(game.borrow().settings().muted)));

        let btn_clone = btn.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let muted = game.borrow_mut().toggle_mute();
            btn_clone.set_text_content(Some(ui::mute_label(muted)));
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<WebGame>>, dom: Rc<Dom>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, dom, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<WebGame>>, dom: Rc<Dom>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();
            let keep_running = g.frame(time);
            dom.update_hud(&g);
            if !keep_running {
                dom.show_ranking(&g.ranking_lines());
            }
            keep_running
        };

        if keep_running {
            request_animation_frame(game, dom);
        } else {
            log::info!("Game loop stopped");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Click Drop (native) starting...");
    log::info!("Native mode plays a headless demo - run with `trunk serve` for the web version");

    headless::play_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// A bot session with no display, for smoke-testing the game logic natively
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use glam::Vec2;
    use rand::Rng;

    use click_drop::audio::AudioManager;
    use click_drop::platform::MemoryStorage;
    use click_drop::renderer::Surface;
    use click_drop::{Game, Tuning};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Chance per frame that the bot takes a shot
    const SHOT_CHANCE: f64 = 0.03;

    /// Surface that only counts draws
    #[derive(Default)]
    struct Headless {
        draws: u64,
    }

    impl Surface for Headless {
        fn size(&self) -> Vec2 {
            Vec2::new(400.0, 400.0)
        }
        fn clear_rect(&mut self, _origin: Vec2, _size: Vec2) {}
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: &str) {
            self.draws += 1;
        }
        fn fill_rect(&mut self, _origin: Vec2, _size: Vec2, _color: &str) {}
        fn fill_text_centered(&mut self, text: &str, _pos: Vec2, _font: &str, _color: &str) {
            println!("{}", text);
        }
    }

    pub fn play_demo() {
        let mut rng = rand::rng();
        let seed: u64 = rng.random();
        let mut game = Game::new(
            seed,
            Tuning::default(),
            Headless::default(),
            MemoryStorage::new(),
            AudioManager::new(),
        );

        let mut now = 0.0;
        while game.frame(now) {
            now += FRAME_MS;
            if rng.random_bool(SHOT_CHANCE) {
                let target = &game.state.target;
                let jitter = Vec2::new(
                    rng.random_range(-1.5..1.5),
                    rng.random_range(-1.5..1.5),
                ) * target.radius;
                let aim = target.pos + jitter;
                game.click(aim);
            }
        }

        let hud = game.hud();
        println!(
            "Demo finished after {:.1}s: score {}, lives {}, {} frames drawn",
            now / 1000.0,
            hud.score,
            hud.lives,
            game.surface().draws
        );
        for line in game.ranking_lines() {
            println!("  {}", line);
        }
    }
}
