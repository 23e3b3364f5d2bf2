//! Hero banner - the `#top` anchor of the page.

use leptos::prelude::*;

use crate::types::{LinkSet, Profile};

/// Introductory heading, outbound profile buttons and the headshot.
#[component]
pub fn Hero(profile: Profile, links: LinkSet) -> impl IntoView {
    let Profile {
        name,
        headline,
        intro,
        headshot,
        ..
    } = profile;

    view! {
        <section id="top" class="hero">
            <AccentGlow />
            <div class="hero-grid">
                <div class="hero-content">
                    <h1 class="hero-title">{headline}</h1>
                    <p class="hero-intro">
                        {intro.into_iter().enumerate().map(|(idx, line)| {
                            if idx == 0 {
                                view! { {line} }.into_any()
                            } else {
                                view! { <br /> {line} }.into_any()
                            }
                        }).collect::<Vec<_>>()}
                    </p>
                    <div class="hero-actions">
                        <a href=links.linkedin class="btn">"LinkedIn"</a>
                        <a href=links.github class="btn">"GitHub"</a>
                    </div>
                </div>
                <div class="hero-media">
                    <div class="headshot-frame">
                        <img src=headshot alt=name class="headshot" />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Decorative gradient behind the hero. Not interactive.
#[component]
fn AccentGlow() -> impl IntoView {
    view! { <div class="accent-glow" aria-hidden="true"></div> }
}
