use std::sync::Arc;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::form::ApplicationForm;
use crate::reveal::Reveal;

#[component]
pub fn RoadmapPage(config: Arc<SiteConfig>) -> impl IntoView {
    view! {
        <section class="roadmap-section">
            <Reveal>
                <h2 class="section-title">"Roadmap"</h2>
            </Reveal>
            <ol class="roadmap">
                {config
                    .roadmap
                    .iter()
                    .enumerate()
                    .map(|(i, phase)| {
                        let status = phase.status;
                        let title = phase.title.clone();
                        let items = phase.items.clone();
                        view! {
                            <li class=format!("roadmap-phase {}", status.css_class())>
                                <Reveal delay={i as f64 * 0.15} class="glass-effect">
                                    <div class="phase-header">
                                        <h3>{title}</h3>
                                        <span class="phase-status">{status.label()}</span>
                                    </div>
                                    <ul>
                                        {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                                    </ul>
                                </Reveal>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
pub fn AboutPage(config: Arc<SiteConfig>) -> impl IntoView {
    let about = config.about.clone();
    let contact = config.contact.clone();

    view! {
        <section class="about-section">
            <Reveal>
                <h2 class="about-title">"About Us"</h2>
            </Reveal>
            <div class="about-content">
                <Reveal class="about-left">
                    <div class="globe-graphic"></div>
                    <div class="vision-label">"OUR VISION"</div>
                    <span class="star-icon">"\u{2605}"</span>
                </Reveal>
                <Reveal delay=0.2 class="about-right">
                    <div class="offer-label">"WHAT WE OFFER"</div>
                    <div class="info-columns">
                        <div class="community-column">
                            <div class="icon-label">"\u{2605} Community"</div>
                            <p>{about.vision}</p>
                            {about.paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                        </div>
                        <div class="trading-column">
                            <div class="icon-label">"\u{25A4} Trading"</div>
                            <p>{about.offer_intro}</p>
                            <ul>
                                {about.offers.into_iter().map(|o| view! { <li>{o}</li> }).collect_view()}
                            </ul>
                        </div>
                    </div>
                </Reveal>
            </div>
            <Reveal class="footer-info">
                <div class="contact-info">
                    <p>{contact.heading}</p>
                    <p>{contact.body}</p>
                </div>
                <a href=contact.url target="_blank" rel="noopener noreferrer" class="twitter-handle">
                    {contact.handle}
                </a>
            </Reveal>
        </section>
    }
}

#[component]
pub fn ContactPage(config: Arc<SiteConfig>) -> impl IntoView {
    let contact = config.contact.clone();

    view! {
        <section class="contact-section">
            <Reveal class="glass-effect contact-card">
                <h2 class="section-title">{contact.heading}</h2>
                <p>{contact.body}</p>
                <a href=contact.url target="_blank" rel="noopener noreferrer" class="twitter-handle">
                    {contact.handle}
                </a>
            </Reveal>
            <Reveal delay=0.2>
                <ApplicationForm form=config.form.clone() />
            </Reveal>
        </section>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found glass-effect">
            <h2>"Page not found"</h2>
            <a href="/">"Back home"</a>
        </section>
    }
}
