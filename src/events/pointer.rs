use crate::core::{PulseSimulator, Scene};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire the canvas click handler: a pointerdown starts a new pulse at the
/// click position (canvas-local coordinates) and makes every crystal eligible
/// to fire again. Starting a pulse while one is in flight replaces it.
pub fn wire_pointer_input(
    canvas: &web::HtmlCanvasElement,
    scene: Rc<RefCell<Scene>>,
    pulses: Rc<RefCell<PulseSimulator>>,
) {
    let canvas_for_event = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &canvas_for_event);
        let timestamp_sec = ev.time_stamp() / 1000.0;
        pulses.borrow_mut().start_pulse(pos, timestamp_sec);
        scene.borrow_mut().reset_activations();
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}
