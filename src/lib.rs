#![cfg(target_arch = "wasm32")]
use crate::assets::{ImageSlot, LayerSlot};
use crate::audio::ToneEngine;
use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::core::{CrystalId, CrystalSpec, PulseSimulator, Scene};
use crate::frame::FrameDriver;
use fnv::FnvHashMap;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod assets;
mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("garden-web starting");
    Ok(())
}

/// Host handle to a running garden. The creation workflow and page shell live
/// outside this crate; they feed crystals and image sources in through these
/// methods.
#[wasm_bindgen]
pub struct Garden {
    scene: Rc<RefCell<Scene>>,
    pulses: Rc<RefCell<PulseSimulator>>,
    tones: Rc<ToneEngine>,
    background: Rc<LayerSlot>,
    outline: Rc<LayerSlot>,
    sprites: Rc<RefCell<FnvHashMap<String, ImageSlot>>>,
    driver: FrameDriver,
}

#[wasm_bindgen]
impl Garden {
    /// Place a crystal at a finalized canvas position. Scale is clamped to
    /// the supported [1, 32] range. Returns the crystal's stable id.
    pub fn add_crystal(
        &self,
        x: f32,
        y: f32,
        scale: f32,
        color: String,
        tone_hz: f32,
        sprite: Option<String>,
    ) -> u32 {
        if let Some(path) = sprite.as_deref() {
            let mut sprites = self.sprites.borrow_mut();
            if !sprites.contains_key(path) {
                if let Some(slot) = ImageSlot::load(path) {
                    sprites.insert(path.to_owned(), slot);
                }
            }
        }
        let id = self.scene.borrow_mut().add_crystal(CrystalSpec {
            position: Vec2::new(x, y),
            scale,
            color,
            tone_hz,
            sprite,
        });
        log::debug!("added crystal {:?} at ({x:.0},{y:.0})", id);
        id.0
    }

    pub fn remove_crystal(&self, id: u32) -> bool {
        self.scene.borrow_mut().remove_crystal(CrystalId(id))
    }

    pub fn clear_crystals(&self) {
        self.scene.borrow_mut().clear();
        self.pulses.borrow_mut().clear();
    }

    /// Swap the garden background. Takes effect once the image has loaded.
    pub fn set_background(&self, src: &str) {
        self.background.request(src);
    }

    /// Swap the top-most outline layer.
    pub fn set_outline(&self, src: &str) {
        self.outline.request(src);
    }

    /// Stop the frame loop and release the audio subsystem. Safe to call more
    /// than once.
    pub fn dispose(&self) {
        self.driver.cancel();
        self.tones.dispose();
    }
}

/// Build the garden on the canvas with the given element id and start the
/// frame loop. Fails (with a logged error) if the canvas or its 2D context is
/// unavailable; in that case the loop never starts.
#[wasm_bindgen]
pub fn start_garden(canvas_id: &str) -> Result<Garden, JsValue> {
    init(canvas_id).map_err(|e| {
        log::error!("init error: {:?}", e);
        JsValue::from_str(&format!("{e:?}"))
    })
}

fn init(canvas_id: &str) -> anyhow::Result<Garden> {
    let canvas = dom::canvas_by_id(canvas_id)?;
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);
    let ctx2d = dom::context_2d(&canvas)?;

    let tones = Rc::new(ToneEngine::new()?);
    tones.wire_unlock_on_first_gesture();

    let scene = Rc::new(RefCell::new(Scene::new()));
    let pulses = Rc::new(RefCell::new(PulseSimulator::new(
        CANVAS_WIDTH as f32,
        CANVAS_HEIGHT as f32,
    )));
    let background = Rc::new(LayerSlot::new());
    let outline = Rc::new(LayerSlot::new());
    let sprites = Rc::new(RefCell::new(FnvHashMap::default()));

    events::wire_pointer_input(&canvas, scene.clone(), pulses.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        ctx2d,
        scene: scene.clone(),
        pulses: pulses.clone(),
        tones: tones.clone(),
        background: background.clone(),
        outline: outline.clone(),
        sprites: sprites.clone(),
        frame_count: 0,
    }));
    let driver = frame::start_loop(frame_ctx);

    Ok(Garden {
        scene,
        pulses,
        tones,
        background,
        outline,
        sprites,
        driver,
    })
}
