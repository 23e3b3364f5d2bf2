//! Contact card.

use leptos::prelude::*;

use crate::types::{LinkSet, Profile};

/// Static invitation plus a single Email action.
#[component]
pub fn ContactCard(profile: Profile, links: LinkSet) -> impl IntoView {
    view! {
        <div class="card contact-card">
            <div>
                <h3 class="contact-heading">{profile.contact_heading}</h3>
                <p class="contact-message">{profile.contact_message}</p>
            </div>
            <div class="contact-actions">
                <a href=links.email class="btn btn-solid">"Email"</a>
            </div>
        </div>
    }
}
