//! Shadow Run entry point
//!
//! On the web this hosts the game on a Canvas 2D context. Natively it runs
//! a headless autopilot demo and prints a summary.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement, HtmlImageElement, KeyboardEvent};

    use shadow_run::consts::*;
    use shadow_run::render::{Asset, Color, DrawSink, TextStyle};
    use shadow_run::sim::{Keys, Rect};
    use shadow_run::{FrameDriver, ScoreDisplay, Settings, Tuning};

    /// Canvas 2D implementation of the draw sink
    struct CanvasSink {
        ctx: CanvasRenderingContext2d,
        images: HashMap<Asset, HtmlImageElement>,
    }

    impl CanvasSink {
        fn new(ctx: CanvasRenderingContext2d) -> Result<Self, JsValue> {
            let mut images = HashMap::new();
            for asset in Asset::ALL {
                let img = HtmlImageElement::new()?;
                img.set_src(asset.file_name());
                images.insert(asset, img);
            }
            Ok(Self { ctx, images })
        }

        /// Run `draw` with the origin at the rect center, rotated
        fn rotated(
            &self,
            rect: Rect,
            rotation: f32,
            draw: impl FnOnce(&CanvasRenderingContext2d, f64, f64, f64, f64),
        ) {
            let c = rect.center();
            let (w, h) = (rect.width as f64, rect.height as f64);
            self.ctx.save();
            let _ = self.ctx.translate(c.x as f64, c.y as f64);
            let _ = self.ctx.rotate(rotation as f64);
            draw(&self.ctx, -w / 2.0, -h / 2.0, w, h);
            self.ctx.restore();
        }
    }

    impl DrawSink for CanvasSink {
        fn fill_rect(&mut self, rect: Rect, color: Color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.fill_rect(
                rect.x as f64,
                rect.y as f64,
                rect.width as f64,
                rect.height as f64,
            );
        }

        fn fill_rotated_rect(&mut self, rect: Rect, rotation: f32, color: Color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.rotated(rect, rotation, |ctx, x, y, w, h| ctx.fill_rect(x, y, w, h));
        }

        fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
            self.ctx.set_stroke_style_str(&color.to_css());
            self.ctx.set_line_width(width as f64);
            self.ctx.begin_path();
            self.ctx.move_to(from.x as f64, from.y as f64);
            self.ctx.line_to(to.x as f64, to.y as f64);
            self.ctx.stroke();
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.ctx.set_fill_style_str(&color.to_css());
            self.ctx.begin_path();
            let _ = self.ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            self.ctx.fill();
        }

        fn fill_text(&mut self, text: &str, anchor: Vec2, style: TextStyle, color: Color) {
            self.ctx.set_font(&style.to_css());
            self.ctx.set_text_align("center");
            self.ctx.set_fill_style_str(&color.to_css());
            let _ = self.ctx.fill_text(text, anchor.x as f64, anchor.y as f64);
        }

        fn try_draw_asset(&mut self, asset: Asset, rect: Rect, rotation: f32) -> bool {
            let Some(img) = self.images.get(&asset) else {
                return false;
            };
            // Not loaded yet, or failed to load
            if !img.complete() || img.natural_width() == 0 {
                return false;
            }
            if rotation == 0.0 {
                let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    img,
                    rect.x as f64,
                    rect.y as f64,
                    rect.width as f64,
                    rect.height as f64,
                );
            } else {
                self.rotated(rect, rotation, |ctx, x, y, w, h| {
                    let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h);
                });
            }
            true
        }
    }

    /// `#score` element in the page
    struct DomScore(Option<Element>);

    impl ScoreDisplay for DomScore {
        fn show(&mut self, label: &str) {
            if let Some(el) = &self.0 {
                el.set_text_content(Some(label));
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver,
        sink: CanvasSink,
        score: DomScore,
    }

    impl Game {
        fn frame(&mut self) {
            self.driver.frame(&mut self.sink, &mut self.score);
        }
    }

    /// Physical key code to logical keys
    fn keys_for(code: &str) -> Keys {
        match code {
            "Space" => Keys::JUMP | Keys::START,
            "ArrowDown" => Keys::DOWN,
            "KeyR" => Keys::RESTART,
            _ => Keys::empty(),
        }
    }

    fn request_animation_frame(f: &Closure<dyn FnMut()>) {
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(f.as_ref().unchecked_ref());
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Shadow Run starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("missing #gameCanvas")?
            .dyn_into()?;
        canvas.set_width(CANVAS_WIDTH as u32);
        canvas.set_height(CANVAS_HEIGHT as u32);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("canvas has no 2d context")?
            .dyn_into()?;

        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            driver: FrameDriver::new(seed, Tuning::default(), Settings::default()),
            sink: CanvasSink::new(ctx)?,
            score: DomScore(document.get_element_by_id("score")),
        }));

        // Keyboard
        {
            let game = game.clone();
            let keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                let keys = keys_for(&e.code());
                if keys.is_empty() {
                    return;
                }
                // Keep space from scrolling the page
                e.prevent_default();
                if !e.repeat() {
                    game.borrow_mut().driver.input.press(keys);
                }
            });
            window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
            keydown.forget();
        }
        {
            let game = game.clone();
            let keyup = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                game.borrow_mut().driver.input.release(keys_for(&e.code()));
            });
            window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref())?;
            keyup.forget();
        }

        // Frame loop
        let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let g = f.clone();
        *g.borrow_mut() = Some(Closure::new(move || {
            game.borrow_mut().frame();
            if let Some(cb) = f.borrow().as_ref() {
                request_animation_frame(cb);
            }
        }));
        if let Some(cb) = g.borrow().as_ref() {
            request_animation_frame(cb);
        }

        log::info!("Shadow Run running!");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Frames the headless demo plays (one minute at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAMES: u32 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Shadow Run (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - serve the wasm build to play");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5eed);
    let tuning = match std::env::var("SHADOW_RUN_TUNING") {
        Ok(path) => load_tuning(&path),
        Err(_) => shadow_run::Tuning::default(),
    };

    run_demo(seed, tuning);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> shadow_run::Tuning {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Could not read tuning file {}: {}", path, e);
            return shadow_run::Tuning::default();
        }
    };
    match shadow_run::Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("Ignoring tuning file {}: {}", path, e);
            shadow_run::Tuning::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo(seed: u64, tuning: shadow_run::Tuning) {
    use shadow_run::render::DrawList;
    use shadow_run::sim::GameEvent;
    use shadow_run::{FrameDriver, Settings};

    let mut driver = FrameDriver::new(seed, tuning, Settings::default());
    driver.idle_mode = true;
    let mut list = DrawList::new();

    let mut runs = 0u32;
    let mut best = 0u64;
    let mut draw_calls = 0usize;
    for _ in 0..DEMO_FRAMES {
        list.clear();
        driver.frame(&mut list, &mut ());
        draw_calls += list.commands.len();

        let ended = driver
            .session
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver(_)));
        if ended {
            runs += 1;
            best = best.max(driver.session.score);
        }
    }
    best = best.max(driver.session.score);

    println!("\nDemo finished after {} frames (seed {})", DEMO_FRAMES, seed);
    println!("  runs lost:      {}", runs);
    println!("  best distance:  {}", best);
    println!("  current speed:  {:.1}", driver.session.speed);
    println!(
        "  draw calls/frm: {:.1}",
        draw_calls as f64 / DEMO_FRAMES as f64
    );
}
