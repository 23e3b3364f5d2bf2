//! Sticky site header with in-page navigation.

use leptos::prelude::*;

use crate::types::{LinkSet, Profile};

/// Navigation entries as `(label, anchor id)`, in page order.
pub const NAV_SECTIONS: [(&str, &str); 4] = [
    ("Projects", "projects"),
    ("Experience", "experience"),
    ("Skills", "skills"),
    ("Contact", "contact"),
];

/// Site title, section navigation and the resume link.
#[component]
pub fn Header(profile: Profile, links: LinkSet) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container">
                <a href="#top" class="brand">
                    <span class="brand-name">{profile.name}</span>
                    <span class="brand-tagline">{profile.tagline}</span>
                </a>
                <nav class="site-nav">
                    {NAV_SECTIONS.iter().map(|(label, id)| {
                        view! {
                            <a href=format!("#{}", id) class="nav-link">{*label}</a>
                        }
                    }).collect::<Vec<_>>()}
                </nav>
                <a
                    href=links.resume
                    target="_blank"
                    rel="noopener noreferrer"
                    class="resume-link"
                >
                    "Resume"
                </a>
            </div>
        </header>
    }
}
