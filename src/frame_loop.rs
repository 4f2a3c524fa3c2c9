use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Handle to a self-rescheduling `requestAnimationFrame` chain.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

fn request_frame(callback: &FrameCallback) -> Option<i32> {
    let window = web_sys::window()?;
    let cb = callback.borrow();
    let closure = cb.as_ref()?;
    window.request_animation_frame(closure.as_ref().unchecked_ref()).ok()
}

impl FrameLoop {
    /// `on_frame` gets the frame timestamp in seconds.
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let running = Rc::new(Cell::new(true));
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let running_inner = running.clone();
        let pending_inner = pending.clone();
        let callback_inner = callback.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            pending_inner.set(None);
            if !running_inner.get() {
                return;
            }

            on_frame(timestamp / 1000.0);

            // Request next frame
            if running_inner.get() {
                pending_inner.set(request_frame(&callback_inner));
            }
        }) as Box<dyn FnMut(f64)>));

        pending.set(request_frame(&callback));

        FrameLoop { running, pending, callback }
    }

    pub fn cancel(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
