//! Experience timeline.

use leptos::prelude::*;

use crate::types::ExperienceEntry;

/// Timeline of jobs. Entries are shown exactly in the order given.
#[component]
pub fn ExperienceList(items: Vec<ExperienceEntry>) -> impl IntoView {
    view! {
        <ol class="timeline">
            {items.into_iter().map(|item| {
                view! { <TimelineItem item=item /> }
            }).collect::<Vec<_>>()}
        </ol>
    }
}

#[component]
fn TimelineItem(item: ExperienceEntry) -> impl IntoView {
    let key = item.key();
    let ExperienceEntry {
        role,
        company,
        location,
        period,
        bullets,
    } = item;

    view! {
        <li class="card timeline-item" data-key=key>
            <div class="timeline-head">
                <div>
                    <p class="timeline-role">
                        <strong>{role}</strong>
                        {format!(" · {}", company)}
                    </p>
                    <p class="timeline-location">{location}</p>
                </div>
                <p class="timeline-period">{period}</p>
            </div>
            <ul class="timeline-bullets">
                {bullets.into_iter().map(|bullet| {
                    view! { <li class="timeline-bullet">{bullet}</li> }
                }).collect::<Vec<_>>()}
            </ul>
        </li>
    }
}
