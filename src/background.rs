use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::canvas::{self, ResizeListener};
use crate::frame_loop::FrameLoop;
use crate::rng::Rng;
use crate::starfield::{SharedStarfield, Starfield, StarfieldOptions};

struct Mounted {
    field: SharedStarfield,
    frames: FrameLoop,
    resize: ResizeListener,
}

impl Mounted {
    fn unmount(mut self) {
        self.frames.cancel();
        self.resize.detach();
        self.field.borrow_mut().teardown();
    }
}

fn mount(canvas: &HtmlCanvasElement, options: StarfieldOptions) -> Option<Mounted> {
    let (w, h) = canvas::fit_to_viewport(canvas);
    let Some(ctx) = canvas::context_2d(canvas) else {
        web_sys::console::warn_1(&"2d context unavailable, starfield disabled".into());
        return None;
    };

    let field: SharedStarfield =
        Rc::new(RefCell::new(Starfield::new(w, h, options, &mut Rng::from_js())));

    let field_resize = field.clone();
    let canvas_resize = canvas.clone();
    let resize = ResizeListener::attach(move |w, h| {
        if field_resize.borrow().is_torn_down() {
            return;
        }
        canvas_resize.set_width(w as u32);
        canvas_resize.set_height(h as u32);
        field_resize.borrow_mut().resize(w, h);
    });

    let field_frame = field.clone();
    let mut started_at: Option<f64> = None;
    let frames = FrameLoop::start(move |now| {
        let elapsed = now - *started_at.get_or_insert(now);
        let mut f = field_frame.borrow_mut();
        f.tick(elapsed);
        f.render(&ctx);
    });

    web_sys::console::log_1(
        &format!("starfield mounted {}x{} ({} stars)", w, h, options.star_count).into(),
    );
    Some(Mounted { field, frames, resize })
}

/// Full-viewport animated star background. Renders nothing animated when
/// the browser can't provide a 2d context.
#[component]
pub fn StarfieldBackground(options: StarfieldOptions) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let mounted: Rc<RefCell<Option<Mounted>>> = Rc::new(RefCell::new(None));

    let mounted_effect = send_wrapper::SendWrapper::new(mounted.clone());
    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else { return };
        if mounted_effect.borrow().is_some() {
            return;
        }
        *mounted_effect.borrow_mut() = mount(&canvas, options);
    });

    let mounted_cleanup = send_wrapper::SendWrapper::new(mounted);
    on_cleanup(move || {
        if let Some(m) = mounted_cleanup.borrow_mut().take() {
            m.unmount();
        }
    });

    view! { <canvas node_ref=canvas_ref class="starfield-bg"></canvas> }
}
