use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w.max(0.0), h.max(0.0))
}

pub fn fit_to_viewport(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let (w, h) = viewport_size();
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    (w, h)
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()?
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// A window `resize` listener that is removed again on `detach` (or drop).
pub struct ResizeListener {
    closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

impl ResizeListener {
    pub fn attach(mut on_resize: impl FnMut(f64, f64) + 'static) -> Self {
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let (w, h) = viewport_size();
            on_resize(w, h);
        }) as Box<dyn FnMut(web_sys::Event)>);

        let attached = web_sys::window()
            .map(|window| {
                window
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                    .is_ok()
            })
            .unwrap_or(false);

        ResizeListener { closure: attached.then_some(closure) }
    }

    pub fn detach(&mut self) {
        let Some(closure) = self.closure.take() else { return };
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        self.detach();
    }
}
