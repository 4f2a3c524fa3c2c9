use std::cell::RefCell;
use std::sync::Arc;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::form::ApplicationForm;
use crate::reveal::Reveal;

/// Welcome screen shown before the site. The enter button only appears
/// after the configured delay.
#[component]
pub fn Splash(config: Arc<SiteConfig>, entered: RwSignal<bool>) -> impl IntoView {
    let cta_visible = RwSignal::new(config.splash.cta_delay_ms == 0);

    if !cta_visible.get_untracked() {
        let timeout = gloo_timers::callback::Timeout::new(config.splash.cta_delay_ms, move || {
            cta_visible.set(true);
        });
        let pending = send_wrapper::SendWrapper::new(RefCell::new(Some(timeout)));
        on_cleanup(move || {
            if let Some(t) = pending.borrow_mut().take() {
                t.cancel();
            }
        });
    }

    let splash = config.splash.clone();

    view! {
        <div class="loading-screen">
            <div class="loading-content">
                <Reveal delay=0.2 duration=1.2 offset={-20.0}>
                    <h1 class="loading-title">{splash.title}</h1>
                </Reveal>
                <Reveal delay=0.6 duration=1.2>
                    <p class="loading-subtitle">{splash.subtitle}</p>
                </Reveal>
                <button
                    class="explore-button"
                    class:visible=move || cta_visible.get()
                    on:click=move |_| entered.set(true)
                >
                    <span class="button-text">{splash.button}</span>
                    <span class="button-glow"></span>
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn Home(config: Arc<SiteConfig>) -> impl IntoView {
    let hero = config.hero.clone();

    view! {
        <div class="kitchen-landing-page">
            <section class="welcome-section glass-effect">
                <Reveal>
                    <h1 class="title">{hero.title}" \u{2605}"</h1>
                </Reveal>
                <Reveal delay=0.2>
                    <p class="subtitle">{hero.subtitle}</p>
                </Reveal>
            </section>
            <Reveal>
                <div class="private-alpha-group glass-effect">{hero.banner}</div>
            </Reveal>
            <section class="feature-grid">
                {config
                    .features
                    .iter()
                    .enumerate()
                    .map(|(i, feature)| {
                        let title = feature.title.clone();
                        let body = feature.body.clone();
                        view! {
                            <Reveal delay={i as f64 * 0.1} class="feature-card glass-effect">
                                <h3>{title}</h3>
                                <p>{body}</p>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </section>
            <Reveal>
                <ApplicationForm form=config.form.clone() />
            </Reveal>
        </div>
    }
}
