//! Project gallery.

use leptos::prelude::*;

use crate::types::ProjectEntry;

/// One outbound card per project, in input order.
#[component]
pub fn ProjectsGrid(projects: Vec<ProjectEntry>) -> impl IntoView {
    view! {
        <div class="projects-grid">
            {projects.into_iter().map(|project| {
                view! { <ProjectCard project=project /> }
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn ProjectCard(project: ProjectEntry) -> impl IntoView {
    let image = project.image_src().to_string();
    let ProjectEntry {
        title,
        stack,
        description,
        href,
        ..
    } = project;

    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="card project-card"
        >
            <img src=image alt=title.clone() class="project-image" />
            <div class="project-body">
                <h3 class="project-title">{title}</h3>
                <p class="project-description">{description}</p>
                <ul class="pill-list">
                    {stack.into_iter().map(|tech| {
                        view! { <li class="pill">{tech}</li> }
                    }).collect::<Vec<_>>()}
                </ul>
            </div>
        </a>
    }
}
