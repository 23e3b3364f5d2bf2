//! CSS for the portfolio page.
//!
//! The stylesheet is embedded in every rendered document, so the output is a
//! single self-contained file apart from images.
//!
//! # Customization
//!
//! ```rust
//! use folio_page::styles::PAGE_CSS;
//!
//! let my_css = ".card { border-color: hotpink; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Complete CSS for the page - dark neutral theme.
pub const PAGE_CSS: &str = r#"
:root {
    --bg: #0a0a0a;
    --bg-card: rgba(10, 10, 10, 0.4);
    --bg-raised: #171717;
    --text: #e5e5e5;
    --text-strong: #f5f5f5;
    --text-dim: #a3a3a3;
    --text-muted: #737373;
    --border: #262626;
    --border-subtle: rgba(23, 23, 23, 0.6);
    --container-max: 72rem;
    --radius: 1rem;
    --radius-sm: 0.5rem;
    --font-sans: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    min-height: 100vh;
    font-family: var(--font-sans);
    background: var(--bg);
    color: var(--text);
    -webkit-font-smoothing: antialiased;
    line-height: 1.5;
}

::selection {
    background: var(--bg-raised);
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1.5rem;
}

/* Header */

.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    border-bottom: 1px solid var(--border-subtle);
    background: rgba(10, 10, 10, 0.7);
    backdrop-filter: blur(8px);
}

.site-header .container {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 1rem;
    padding-bottom: 1rem;
}

.brand {
    display: inline-flex;
    align-items: baseline;
    gap: 0.5rem;
}

.brand-name {
    font-size: 1.125rem;
    font-weight: 600;
    letter-spacing: -0.01em;
}

.brand-tagline {
    font-size: 0.75rem;
    color: var(--text-dim);
}

.site-nav {
    display: none;
    gap: 1.5rem;
    font-size: 0.875rem;
}

.site-nav a,
.footer-top {
    color: var(--text-dim);
    transition: color 0.15s;
}

.site-nav a:hover,
.footer-top:hover {
    color: var(--text-strong);
}

.resume-link {
    display: none;
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    padding: 0.375rem 0.75rem;
    font-size: 0.875rem;
}

/* Hero */

.hero {
    position: relative;
    isolation: isolate;
    padding: 4rem 0;
}

.accent-glow {
    pointer-events: none;
    position: absolute;
    left: 0;
    right: 0;
    top: -5rem;
    z-index: -10;
    height: 15rem;
    background:
        radial-gradient(120px 80px at 20% 40%, rgba(59, 130, 246, 0.12), transparent),
        radial-gradient(160px 120px at 80% 30%, rgba(236, 72, 153, 0.10), transparent);
}

.hero-grid {
    display: grid;
    gap: 2.5rem;
}

.hero-title {
    margin: 0;
    font-size: 1.875rem;
    font-weight: 600;
    letter-spacing: -0.01em;
}

.hero-intro {
    margin-top: 1rem;
    max-width: 65ch;
    color: var(--text-dim);
}

.hero-actions {
    margin-top: 2rem;
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
}

.btn {
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    padding: 0.5rem 1rem;
    transition: background 0.15s;
}

.btn:hover,
.resume-link:hover {
    background: var(--bg-raised);
}

.btn-solid {
    border-color: transparent;
    background: var(--text-strong);
    color: var(--bg-raised);
}

.btn-solid:hover {
    background: #ffffff;
}

.headshot-frame {
    border: 1px dashed var(--border);
    border-radius: var(--radius);
    background: rgba(23, 23, 23, 0.3);
    padding: 0.75rem;
}

.headshot {
    display: block;
    width: 100%;
    aspect-ratio: 1 / 1;
    object-fit: cover;
    border-radius: 0.75rem;
}

/* Sections */

.page-section {
    padding: 3.5rem 0;
}

.section-title {
    margin: 0;
    font-size: 1.25rem;
    font-weight: 600;
    letter-spacing: -0.01em;
}

.section-body {
    margin-top: 1.5rem;
}

.card {
    border: 1px solid var(--border-subtle);
    border-radius: var(--radius);
    background: var(--bg-card);
}

/* Projects */

.projects-grid {
    display: grid;
    gap: 1.5rem;
}

.project-card {
    display: block;
    padding: 0.75rem;
    transition: border-color 0.15s, background 0.15s;
}

.project-card:hover {
    border-color: #404040;
    background: rgba(23, 23, 23, 0.4);
}

.project-image {
    display: block;
    width: 100%;
    aspect-ratio: 16 / 10;
    object-fit: contain;
    border-radius: 0.75rem;
    background: var(--bg-raised);
    transition: transform 0.3s;
}

.project-card:hover .project-image {
    transform: scale(1.03);
}

.project-body {
    padding: 0.5rem;
}

.project-title {
    margin: 0.75rem 0 0;
    font-size: 1rem;
    font-weight: 500;
    color: var(--text-strong);
}

.project-description {
    margin: 0.25rem 0 0;
    font-size: 0.875rem;
    color: var(--text-dim);
}

.pill-list {
    list-style: none;
    margin: 0.75rem 0 0;
    padding: 0;
    display: flex;
    flex-wrap: wrap;
    gap: 0.375rem;
}

.pill,
.skill-badge {
    border: 1px solid var(--border);
    border-radius: var(--radius-sm);
    padding: 0.125rem 0.5rem;
    font-size: 0.75rem;
    color: var(--text-dim);
}

/* Experience */

.timeline {
    list-style: none;
    margin: 0;
    padding: 0;
    display: grid;
    gap: 1.5rem;
}

.timeline-item {
    padding: 1rem;
}

.timeline-head {
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    gap: 0.5rem;
}

.timeline-role {
    margin: 0;
}

.timeline-role strong {
    font-weight: 500;
}

.timeline-location {
    margin: 0;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.timeline-period {
    margin: 0;
    font-size: 0.875rem;
    color: var(--text-dim);
}

.timeline-bullets {
    margin: 0.75rem 0 0;
    padding-left: 1.25rem;
    list-style: disc;
    font-size: 0.875rem;
    color: #d4d4d4;
}

.timeline-bullet + .timeline-bullet {
    margin-top: 0.25rem;
}

/* Skills */

.skills-cloud {
    padding: 1rem;
}

.skills-list {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.skill-badge {
    padding: 0.25rem 0.5rem;
    color: #d4d4d4;
}

/* Contact */

.contact-card {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    padding: 1.5rem;
}

.contact-heading {
    margin: 0;
    font-size: 1rem;
    font-weight: 500;
    color: var(--text-strong);
}

.contact-message {
    margin: 0.25rem 0 0;
    font-size: 0.875rem;
    color: var(--text-dim);
}

/* Footer */

.site-footer {
    border-top: 1px solid var(--border-subtle);
}

.site-footer .container {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 2rem;
    padding-bottom: 2rem;
    font-size: 0.875rem;
    color: var(--text-muted);
}

@media (min-width: 640px) {
    .hero { padding: 6rem 0; }
    .hero-title { font-size: 2.25rem; }
    .page-section { padding: 5rem 0; }
    .section-title { font-size: 1.5rem; }
    .projects-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .timeline-head { flex-direction: row; align-items: baseline; }
    .contact-card { flex-direction: row; align-items: center; justify-content: space-between; }
}

@media (min-width: 768px) {
    .site-nav { display: flex; }
    .resume-link { display: block; }
    .hero-grid { grid-template-columns: 3fr 2fr; }
}

@media (min-width: 1024px) {
    .projects-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}
"#;

/// Minimal CSS for the redirect stub shown while the browser navigates away.
pub const REDIRECT_CSS: &str = r#"
body {
    margin: 0;
    font-family: ui-sans-serif, system-ui, sans-serif;
    background: #0a0a0a;
    color: #a3a3a3;
    display: grid;
    place-items: center;
    min-height: 100vh;
}
a { color: #f5f5f5; }
"#;
