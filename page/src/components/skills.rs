//! Skills cloud.

use leptos::prelude::*;

/// One badge per skill inside a single container. No grouping or dedup.
#[component]
pub fn SkillsCloud(items: Vec<String>) -> impl IntoView {
    view! {
        <div class="card skills-cloud">
            <div class="skills-list">
                {items.into_iter().map(|skill| {
                    view! { <span class="skill-badge">{skill}</span> }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
