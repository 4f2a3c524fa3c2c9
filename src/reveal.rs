use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::constants::{REVEAL_DURATION, REVEAL_OFFSET, REVEAL_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Observing,
    Revealed,
    Detached,
}

/// One-shot reveal: `Observing` moves to `Revealed` on the first qualifying
/// intersection, or to `Detached` when the host unmounts first. Neither
/// terminal phase ever changes again.
#[derive(Debug, Clone)]
pub struct RevealState {
    threshold: f64,
    phase: RevealPhase,
}

impl RevealState {
    pub fn new(threshold: f64) -> Self {
        RevealState { threshold: threshold.clamp(0.0, 1.0), phase: RevealPhase::Observing }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn has_been_revealed(&self) -> bool {
        self.phase == RevealPhase::Revealed
    }

    /// Returns true only for the event that triggers the reveal.
    pub fn on_intersection(&mut self, ratio: f64, is_intersecting: bool) -> bool {
        if self.phase != RevealPhase::Observing {
            return false;
        }
        if is_intersecting && ratio >= self.threshold {
            self.phase = RevealPhase::Revealed;
            return true;
        }
        false
    }

    /// Fallback when intersection observation is unavailable.
    pub fn reveal_now(&mut self) -> bool {
        if self.phase != RevealPhase::Observing {
            return false;
        }
        self.phase = RevealPhase::Revealed;
        true
    }

    pub fn detach(&mut self) {
        if self.phase == RevealPhase::Observing {
            self.phase = RevealPhase::Detached;
        }
    }
}

pub fn reveal_style(shown: bool, offset: f64, duration: f64, delay: f64) -> String {
    let (opacity, transform) = if shown {
        ("1".to_string(), "none".to_string())
    } else {
        ("0".to_string(), format!("translateY({}px)", offset))
    };
    format!(
        "opacity: {}; transform: {}; transition: opacity {}s ease-out {}s, transform {}s ease-out {}s;",
        opacity, transform, duration, delay, duration, delay
    )
}

struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

fn observe(
    element: &web_sys::Element,
    state: Rc<RefCell<RevealState>>,
    root_margin: &str,
    threshold: f64,
    revealed: RwSignal<bool>,
) -> Option<ObserverHandle> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            let fire = state
                .borrow_mut()
                .on_intersection(entry.intersection_ratio(), entry.is_intersecting());
            if fire {
                observer.unobserve(&entry.target());
                observer.disconnect();
                revealed.set(true);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    init.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(element);
    Some(ObserverHandle { observer, _callback: callback })
}

/// Wraps `children` and fades them in the first time they scroll into view.
#[component]
pub fn Reveal(
    #[prop(optional)] delay: f64,
    #[prop(default = REVEAL_THRESHOLD)] threshold: f64,
    #[prop(default = "0px")] root_margin: &'static str,
    #[prop(default = REVEAL_DURATION)] duration: f64,
    #[prop(default = REVEAL_OFFSET)] offset: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Div>::new();
    let revealed = RwSignal::new(false);

    let state = Rc::new(RefCell::new(RevealState::new(threshold)));
    let handle: Rc<RefCell<Option<ObserverHandle>>> = Rc::new(RefCell::new(None));

    let state_for_mount = send_wrapper::SendWrapper::new(state.clone());
    let handle_for_mount = send_wrapper::SendWrapper::new(handle.clone());
    Effect::new(move |_| {
        let Some(el) = node_ref.get() else { return };
        if handle_for_mount.borrow().is_some() || state_for_mount.borrow().phase() != RevealPhase::Observing {
            return;
        }

        match observe(&el, (*state_for_mount).clone(), root_margin, threshold, revealed) {
            Some(h) => *handle_for_mount.borrow_mut() = Some(h),
            None => {
                web_sys::console::warn_1(&"IntersectionObserver unavailable, revealing immediately".into());
                if state_for_mount.borrow_mut().reveal_now() {
                    revealed.set(true);
                }
            }
        }
    });

    let state_for_cleanup = send_wrapper::SendWrapper::new(state);
    let handle_for_cleanup = send_wrapper::SendWrapper::new(handle);
    on_cleanup(move || {
        state_for_cleanup.borrow_mut().detach();
        if let Some(h) = handle_for_cleanup.borrow_mut().take() {
            h.observer.disconnect();
        }
    });

    view! {
        <div
            node_ref=node_ref
            class=format!("reveal {}", class)
            style=move || reveal_style(revealed.get(), offset, duration, delay)
        >
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once_at_threshold() {
        let mut state = RevealState::new(0.1);
        assert!(!state.on_intersection(0.05, true));
        assert!(!state.has_been_revealed());

        assert!(state.on_intersection(0.1, true));
        assert!(state.has_been_revealed());

        // scrolled away and back again
        assert!(!state.on_intersection(0.0, false));
        assert!(!state.on_intersection(1.0, true));
        assert!(state.has_been_revealed());
    }

    #[test]
    fn ignores_non_intersecting_entries() {
        let mut state = RevealState::new(0.0);
        assert!(!state.on_intersection(0.0, false));
        assert_eq!(state.phase(), RevealPhase::Observing);
        assert!(state.on_intersection(0.0, true));
    }

    #[test]
    fn detach_before_reveal_is_final() {
        let mut state = RevealState::new(0.1);
        state.detach();
        assert_eq!(state.phase(), RevealPhase::Detached);
        assert!(!state.on_intersection(1.0, true));
        assert!(!state.reveal_now());
        assert!(!state.has_been_revealed());
    }

    #[test]
    fn detach_after_reveal_keeps_revealed() {
        let mut state = RevealState::new(0.1);
        assert!(state.on_intersection(0.5, true));
        state.detach();
        assert!(state.has_been_revealed());
    }

    #[test]
    fn fallback_reveals_once() {
        let mut state = RevealState::new(0.1);
        assert!(state.reveal_now());
        assert!(!state.reveal_now());
        assert!(!state.on_intersection(1.0, true));
    }

    #[test]
    fn threshold_is_clamped() {
        let mut state = RevealState::new(3.0);
        assert!(!state.on_intersection(0.99, true));
        assert!(state.on_intersection(1.0, true));
    }

    #[test]
    fn style_hidden_and_shown() {
        let hidden = reveal_style(false, 40.0, 0.6, 0.2);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translateY(40px)"));
        assert!(hidden.contains("0.6s ease-out 0.2s"));

        let shown = reveal_style(true, 40.0, 0.6, 0.0);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("transform: none;"));
    }
}
