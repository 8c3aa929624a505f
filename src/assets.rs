use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An image resource with an observable readiness flag.
///
/// `load` kicks off the browser's asynchronous fetch; the `onload` callback
/// flips the shared flag, which the render loop polls each frame. A layer
/// whose image never becomes ready is simply never drawn; load failures are
/// logged and otherwise ignored.
pub struct ImageSlot {
    element: web::HtmlImageElement,
    ready: Rc<Cell<bool>>,
}

impl ImageSlot {
    pub fn load(src: &str) -> Option<Self> {
        let element = match web::HtmlImageElement::new() {
            Ok(el) => el,
            Err(e) => {
                log::error!("image element creation failed: {:?}", e);
                return None;
            }
        };
        let ready = Rc::new(Cell::new(false));

        let ready_onload = ready.clone();
        let onload = Closure::wrap(Box::new(move || {
            ready_onload.set(true);
        }) as Box<dyn FnMut()>);
        element.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let src_for_err = src.to_owned();
        let onerror = Closure::wrap(Box::new(move || {
            log::warn!("image failed to load: {}", src_for_err);
        }) as Box<dyn FnMut()>);
        element.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        element.set_src(src);
        Some(Self { element, ready })
    }

    pub fn ready(&self) -> bool {
        self.ready.get()
    }

    pub fn element(&self) -> &web::HtmlImageElement {
        &self.element
    }
}

/// A full-canvas image layer that can be swapped at runtime.
///
/// A requested image loads into `pending` and is promoted to `current` only
/// once ready, so swapping the background never blanks the layer while the
/// replacement is still in flight.
#[derive(Default)]
pub struct LayerSlot {
    current: RefCell<Option<ImageSlot>>,
    pending: RefCell<Option<ImageSlot>>,
}

impl LayerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin loading a replacement image for this layer.
    pub fn request(&self, src: &str) {
        *self.pending.borrow_mut() = ImageSlot::load(src);
    }

    /// Promote a finished pending image. Called once per frame.
    pub fn promote_if_ready(&self) {
        let ready = self.pending.borrow().as_ref().is_some_and(|s| s.ready());
        if ready {
            *self.current.borrow_mut() = self.pending.borrow_mut().take();
        }
    }

    /// Run `f` with the current image if one is ready to draw.
    pub fn with_ready<F: FnOnce(&ImageSlot)>(&self, f: F) {
        if let Some(slot) = self.current.borrow().as_ref() {
            if slot.ready() {
                f(slot);
            }
        }
    }
}
