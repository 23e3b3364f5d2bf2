//! Rendering contract for the portfolio page.
//!
//! Components are rendered both on their own and as part of the full page,
//! then the markup is checked against the input data.

use folio_page::clock::FixedClock;
use folio_page::components::{ExperienceList, ProjectsGrid, SkillsCloud};
use folio_page::types::{ExperienceEntry, LinkSet, ProjectEntry, Site, PLACEHOLDER_IMAGE};
use folio_page::{render, render_page, RenderOutcome};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Every substring of `html` found between `start` and the next `end`.
fn between_all(html: &str, start: &str, end: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut rest = html;
    while let Some(idx) = rest.find(start) {
        rest = &rest[idx + start.len()..];
        match rest.find(end) {
            Some(stop) => {
                found.push(rest[..stop].to_string());
                rest = &rest[stop + end.len()..];
            }
            None => break,
        }
    }
    found
}

fn projects() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry {
            title: "Federated Feed".into(),
            stack: vec!["Django".into(), "Heroku".into(), "Django".into()],
            description: "Content spread across instances.".into(),
            href: "https://github.com/owner/feed".into(),
            image: Some("/feed.png".into()),
        },
        ProjectEntry {
            title: "Tag Hunter".into(),
            stack: vec!["Java".into(), "Firebase".into()],
            description: "Scan, tag and sync.".into(),
            href: "https://github.com/owner/hunter".into(),
            image: None,
        },
        ProjectEntry {
            title: "Gym Buddy".into(),
            stack: vec![],
            description: "Pose feedback.".into(),
            href: "https://github.com/owner/gym".into(),
            image: Some("/gym.png".into()),
        },
    ]
}

fn experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            role: "Data Scientist".into(),
            company: "Big Co".into(),
            location: "Toronto (Remote)".into(),
            period: "Apr 2024 – Present".into(),
            bullets: vec![
                "Rewrote the API layer.".into(),
                "Trained ranking models.".into(),
                "Rewrote the API layer.".into(),
            ],
        },
        ExperienceEntry {
            role: "Student Programmer".into(),
            company: "City".into(),
            location: "Calgary".into(),
            period: "May 2025 – Aug 2025".into(),
            bullets: vec![],
        },
        ExperienceEntry {
            role: "Intern".into(),
            company: "Lab".into(),
            location: "Calgary".into(),
            period: "May 2023 – Apr 2024".into(),
            bullets: vec!["Predicted water levels.".into()],
        },
    ]
}

fn skills() -> Vec<String> {
    ["Rust", "SQL", "Docker", "SQL", "pandas"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn site() -> Site {
    Site {
        links: LinkSet {
            email: "mailto:owner@example.com".into(),
            linkedin: "https://www.linkedin.com/in/owner/".into(),
            github: "https://github.com/owner".into(),
            resume: "/resume".into(),
        },
        skills: skills(),
        experience: experience(),
        projects: projects(),
        ..Default::default()
    }
}

mod projects_grid {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid_html() -> String {
        view! { <ProjectsGrid projects=projects() /> }.to_html()
    }

    #[test]
    fn card_titles_and_links_follow_input() {
        let html = grid_html();
        let input = projects();

        let titles = between_all(&html, "<h3 class=\"project-title\">", "</h3>");
        let expected: Vec<String> = input.iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles, expected);

        let hrefs = between_all(&html, "<a href=\"", "\"");
        let expected: Vec<String> = input.iter().map(|p| p.href.clone()).collect();
        assert_eq!(hrefs, expected);
    }

    #[test]
    fn cards_open_in_new_context() {
        let html = grid_html();
        assert_eq!(html.matches("target=\"_blank\"").count(), 3);
        assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 3);
    }

    #[test]
    fn missing_image_uses_placeholder() {
        let html = grid_html();
        let sources = between_all(&html, "<img src=\"", "\"");
        assert_eq!(sources, vec!["/feed.png", PLACEHOLDER_IMAGE, "/gym.png"]);
    }

    #[test]
    fn stack_pills_keep_order_and_duplicates() {
        let html = grid_html();
        let pills = between_all(&html, "<li class=\"pill\">", "</li>");
        assert_eq!(pills, vec!["Django", "Heroku", "Django", "Java", "Firebase"]);
    }

    #[test]
    fn empty_grid_renders_container_only() {
        let html = view! { <ProjectsGrid projects=Vec::new() /> }.to_html();
        assert!(html.contains("projects-grid"));
        assert!(!html.contains("project-card"));
    }
}

mod experience_list {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bullets_match_each_entry_in_order() {
        for entry in experience() {
            let bullets_in = entry.bullets.clone();
            let html = view! { <ExperienceList items=vec![entry] /> }.to_html();
            let rendered = between_all(&html, "<li class=\"timeline-bullet\">", "</li>");
            assert_eq!(rendered, bullets_in);
        }
    }

    #[test]
    fn entries_keep_input_order() {
        let html = view! { <ExperienceList items=experience() /> }.to_html();
        let roles = between_all(&html, "<strong>", "</strong>");
        assert_eq!(roles, vec!["Data Scientist", "Student Programmer", "Intern"]);

        let periods = between_all(&html, "<p class=\"timeline-period\">", "</p>");
        assert_eq!(
            periods,
            vec!["Apr 2024 – Present", "May 2025 – Aug 2025", "May 2023 – Apr 2024"]
        );
    }

    #[test]
    fn header_shows_company_and_location() {
        let html = view! { <ExperienceList items=experience() /> }.to_html();
        assert!(html.contains(" · Big Co"));
        assert!(html.contains("Toronto (Remote)"));
    }
}

mod skills_cloud {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_badge_per_skill_in_order() {
        let html = view! { <SkillsCloud items=skills() /> }.to_html();
        let badges = between_all(&html, "<span class=\"skill-badge\">", "</span>");
        assert_eq!(badges, skills());
    }

    #[test]
    fn empty_skills_render_no_badges() {
        let html = view! { <SkillsCloud items=Vec::new() /> }.to_html();
        assert!(!html.contains("skill-badge"));
    }
}

mod page {
    use super::*;
    use pretty_assertions::assert_eq;

    const SECTION_MARKERS: [&str; 7] = [
        "<header",
        "id=\"top\"",
        "id=\"projects\"",
        "id=\"experience\"",
        "id=\"skills\"",
        "id=\"contact\"",
        "<footer",
    ];

    #[test]
    fn sections_render_in_fixed_order() {
        let clock = FixedClock::ymd(2025, 3, 14).unwrap();
        for path in ["/", "/index.html", "/resume/", "/projects"] {
            let outcome = render(&site(), path, &clock);
            let RenderOutcome::Page { html } = outcome else {
                panic!("path {path:?} should render the page");
            };

            let positions: Vec<usize> = SECTION_MARKERS
                .iter()
                .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {marker}")))
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(positions, sorted, "path {path:?}");
        }
    }

    #[test]
    fn redirect_escapes_query_target() {
        let html = folio_page::render_redirect("/cv.pdf?a=1&b=2");

        assert!(html.contains("content=\"0; url=/cv.pdf?a=1&amp;b=2\""));
        assert!(html.contains("<a href=\"/cv.pdf?a=1&amp;b=2\">"));
        assert!(html.contains("window.location.replace(\"/cv.pdf?a=1&b=2\")"));
    }

    #[test]
    fn resume_path_redirects_without_body() {
        let clock = FixedClock::ymd(2025, 3, 14).unwrap();
        let outcome = render(&site(), "/resume", &clock);

        assert_eq!(outcome.redirect_location(), Some("/Eric_Resume.pdf"));
        let html = outcome.html();
        assert!(html.contains("http-equiv=\"refresh\""));
        assert!(html.contains("window.location.replace(\"/Eric_Resume.pdf\")"));
        for marker in SECTION_MARKERS {
            assert!(!html.contains(marker), "redirect leaked {marker}");
        }
    }

    #[test]
    fn footer_year_follows_clock() {
        for year in [1999, 2025, 2031] {
            let clock = FixedClock::ymd(year, 7, 4).unwrap();
            let html = render(&site(), "/", &clock).into_html();
            assert!(html.contains(&format!("© {} Eric Lee", year)));
        }
    }

    #[test]
    fn navigation_targets_every_section() {
        let html = render_page(&site(), 2025);
        let nav = between_all(&html, "<nav class=\"site-nav\">", "</nav>");
        assert_eq!(nav.len(), 1);
        for id in ["projects", "experience", "skills", "contact"] {
            assert!(nav[0].contains(&format!("href=\"#{}\"", id)));
        }
        assert!(html.contains("Back to top"));
        assert!(html.contains("href=\"#top\""));
    }

    #[test]
    fn links_are_wired_to_their_controls() {
        let html = render_page(&site(), 2025);
        assert!(html.contains("href=\"/resume\""));
        assert!(html.contains("href=\"https://www.linkedin.com/in/owner/\""));
        assert!(html.contains("href=\"https://github.com/owner\""));
        assert!(html.contains("href=\"mailto:owner@example.com\""));
    }

    #[test]
    fn hero_and_contact_use_profile_copy() {
        let mut site = site();
        site.profile.headline = "Systems Tinkerer".into();
        site.profile.intro = vec!["First line.".into(), "Second line.".into()];
        site.profile.contact_message = "Say hi.".into();
        site.profile.headshot = "/me.jpg".into();

        let html = render_page(&site, 2025);
        assert!(html.contains("Systems Tinkerer"));
        assert!(html.contains("First line."));
        assert!(html.contains("Second line."));
        assert!(html.contains("<br"));
        assert!(html.contains("Say hi."));
        assert!(html.contains("src=\"/me.jpg\""));
        assert!(html.contains("aria-hidden=\"true\""));
    }

    #[test]
    fn page_data_matches_component_data() {
        let html = render_page(&site(), 2025);
        let titles = between_all(&html, "<h3 class=\"project-title\">", "</h3>");
        assert_eq!(titles, vec!["Federated Feed", "Tag Hunter", "Gym Buddy"]);
        let badges = between_all(&html, "<span class=\"skill-badge\">", "</span>");
        assert_eq!(badges, skills());
        let bullets = between_all(&html, "<li class=\"timeline-bullet\">", "</li>");
        assert_eq!(bullets.len(), 4);
    }
}
