use crate::assets::{ImageSlot, LayerSlot};
use crate::audio::ToneEngine;
use crate::core::{detect_crossings, PulseSimulator, Scene};
use crate::render;
use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one animation frame needs: the drawing surface, the scene, the
/// pulse simulator, audio, and the image layers. Owned by the RAF loop;
/// shared handles let input wiring and the host API mutate state between
/// frames.
pub struct FrameContext {
    pub ctx2d: web::CanvasRenderingContext2d,
    pub scene: Rc<RefCell<Scene>>,
    pub pulses: Rc<RefCell<PulseSimulator>>,
    pub tones: Rc<ToneEngine>,
    pub background: Rc<LayerSlot>,
    pub outline: Rc<LayerSlot>,
    pub sprites: Rc<RefCell<FnvHashMap<String, ImageSlot>>>,
    pub frame_count: u64,
}

impl FrameContext {
    /// One simulation + draw step. `timestamp_ms` is the RAF timestamp.
    pub fn frame(&mut self, timestamp_ms: f64) {
        self.frame_count += 1;
        let timestamp_sec = timestamp_ms / 1000.0;

        self.background.promote_if_ready();
        self.outline.promote_if_ready();

        render::clear(&self.ctx2d);
        render::draw_layer(&self.ctx2d, &self.background);
        render::draw_idle_marker(&self.ctx2d, self.frame_count);

        {
            let scene = self.scene.borrow();
            let sprites = self.sprites.borrow();
            for crystal in scene.crystals() {
                render::draw_crystal(
                    &self.ctx2d,
                    crystal,
                    scene.is_activated(crystal.id),
                    &sprites,
                );
            }
        }

        let max_radius = self.pulses.borrow().max_radius();
        if let Some(frame) = self.pulses.borrow_mut().advance(timestamp_sec) {
            let fired = {
                let scene = self.scene.borrow();
                detect_crossings(&frame, scene.crystals(), scene.activated())
            };
            for id in fired {
                let tone_hz = self.scene.borrow().crystal(id).map(|c| c.tone_hz);
                if let Some(hz) = tone_hz {
                    self.tones.play_tone(hz);
                }
                self.scene.borrow_mut().mark_activated(id);
            }
            render::draw_pulse_ring(
                &self.ctx2d,
                frame.origin,
                frame.new_radius.min(max_radius),
                max_radius,
            );
        }

        render::draw_layer(&self.ctx2d, &self.outline);
    }
}

/// Handle to the scheduled animation frame. Cancellation is idempotent:
/// cancelling twice, or with no frame pending, is a no-op.
pub struct FrameDriver {
    pending: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
}

impl FrameDriver {
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

/// Start the persistent RAF loop and return its cancellation handle.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameDriver {
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let cancelled = Rc::new(Cell::new(false));

    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    let cancelled_tick = cancelled.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        if cancelled_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame(timestamp_ms);
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            ) {
                pending_tick.set(Some(id));
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(w) = web::window() {
        if let Ok(id) =
            w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            pending.set(Some(id));
        }
    }

    FrameDriver { pending, cancelled }
}
