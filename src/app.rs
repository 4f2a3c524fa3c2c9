use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::background::StarfieldBackground;
use crate::config::{self, SiteConfig};
use crate::landing::{Home, Splash};
use crate::pages::{AboutPage, ContactPage, NotFound, RoadmapPage};

#[component]
pub fn App() -> impl IntoView {
    let config = match config::load() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            web_sys::console::error_1(&format!("site config: {}", e).into());
            return view! { <p class="config-error">"This page is temporarily unavailable."</p> }
                .into_any();
        }
    };

    let entered = RwSignal::new(false);
    let options = config.background.options();

    view! {
        <StarfieldBackground options=options />
        {move || {
            if entered.get() {
                view! { <Site config=config.clone() /> }.into_any()
            } else {
                view! { <Splash config=config.clone() entered=entered /> }.into_any()
            }
        }}
    }
    .into_any()
}

#[component]
fn Site(config: Arc<SiteConfig>) -> impl IntoView {
    let home = config.clone();
    let roadmap = config.clone();
    let about = config.clone();
    let contact = config.clone();

    view! {
        <Router>
            <Header brand=config.brand.clone() />
            <main class="main-content">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=move || view! { <Home config=home.clone() /> } />
                    <Route path=path!("/roadmap") view=move || view! { <RoadmapPage config=roadmap.clone() /> } />
                    <Route path=path!("/about") view=move || view! { <AboutPage config=about.clone() /> } />
                    <Route path=path!("/contact") view=move || view! { <ContactPage config=contact.clone() /> } />
                </Routes>
            </main>
            <footer class="copyright">{config.copyright.clone()}</footer>
        </Router>
    }
}

#[component]
fn Header(brand: String) -> impl IntoView {
    view! {
        <header class="header glass-effect">
            <div class="logo">
                <A href="/">
                    <span class="star-icon">"\u{2605}"</span>
                    <span>{brand}</span>
                </A>
            </div>
            <nav class="nav-links">
                <A href="/">"Home"</A>
                <A href="/roadmap">"Roadmap"</A>
                <A href="/about">"About"</A>
                <A href="/contact">"Contact"</A>
            </nav>
            <div class="applications-open">"Applications Open"</div>
        </header>
    }
}
