//! Root document components - the complete HTML pages.

use super::{ContactCard, ExperienceList, Footer, Header, Hero, ProjectsGrid, Section, SkillsCloud};
use crate::styles::{PAGE_CSS, REDIRECT_CSS};
use crate::types::Site;
use leptos::prelude::*;

/// The portfolio page: header, hero, the four content sections, footer.
#[component]
pub fn PageDocument(
    site: Site,
    /// Copyright year for the footer
    year: i32,
) -> impl IntoView {
    let Site {
        profile,
        links,
        skills,
        experience,
        projects,
        ..
    } = site;

    let title = format!("{} · {}", profile.name, profile.tagline);
    let owner = profile.name.clone();
    let header_profile = profile.clone();
    let hero_profile = profile.clone();
    let header_links = links.clone();
    let hero_links = links.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <Header profile=header_profile links=header_links />
                <main class="container">
                    <Hero profile=hero_profile links=hero_links />
                    <Section id="projects" title="Projects">
                        <ProjectsGrid projects=projects />
                    </Section>
                    <Section id="experience" title="Experience">
                        <ExperienceList items=experience />
                    </Section>
                    <Section id="skills" title="Skills">
                        <SkillsCloud items=skills />
                    </Section>
                    <Section id="contact" title="Contact">
                        <ContactCard profile=profile links=links />
                    </Section>
                </main>
                <Footer owner=owner year=year />
            </body>
        </html>
    }
}

/// Stand-in document that sends the browser to `location` immediately.
///
/// Carries both a meta refresh and a `location.replace` call so the redirect
/// happens with or without scripting. Nothing from the page body is rendered.
#[component]
pub fn RedirectDocument(
    /// Redirect target
    #[prop(into)]
    location: String,
) -> impl IntoView {
    let refresh = format!("0; url={}", location);
    let script = format!("window.location.replace({});", js_string(&location));
    let href = location.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta http-equiv="refresh" content=refresh />
                <meta name="robots" content="noindex" />
                <title>"Redirecting…"</title>
                <style>{REDIRECT_CSS}</style>
                <script>{script}</script>
            </head>
            <body>
                <p class="redirect-note">
                    "Redirecting to "
                    <a href=href>{location}</a>
                </p>
            </body>
        </html>
    }
}

/// JSON string literal that is also safe inside a `<script>` element.
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_owned())
        .to_string()
        .replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::js_string;

    #[test]
    fn js_string_quotes_and_neutralizes_tags() {
        assert_eq!(js_string("/cv.pdf"), "\"/cv.pdf\"");
        assert_eq!(js_string("a\"b"), "\"a\\\"b\"");
        assert!(!js_string("</script>").contains('<'));
    }
}
