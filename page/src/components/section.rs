//! Titled page section - the shared wrapper for every content block.

use leptos::prelude::*;

/// A titled container whose `id` is an in-page anchor target.
///
/// The `id` must be unique within one page; nothing here checks that.
#[component]
pub fn Section(
    /// Anchor id (without `#`)
    #[prop(into)]
    id: String,
    /// Heading shown above the content
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="page-section">
            <h2 class="section-title">{title}</h2>
            <div class="section-body">{children()}</div>
        </section>
    }
}
