//! Page footer.

use leptos::prelude::*;

/// Copyright line for `year` and a link back to the top of the page.
#[component]
pub fn Footer(
    /// Name after the copyright sign
    #[prop(into)]
    owner: String,
    /// Calendar year, resolved by the caller at render time
    year: i32,
) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <p class="copyright">{format!("© {} {}", year, owner)}</p>
                <a href="#top" class="footer-top">"Back to top"</a>
            </div>
        </footer>
    }
}
