//! HTML site generation.
//!
//! Stage 3 of the build pipeline. Takes the processed manifest and generates
//! the final static site.
//!
//! ## Generated Pages
//!
//! - **Home** (`/index.html`): typed hero, career timeline, featured-project
//!   carousel and the "What I'm learning" list, as full-height sections with
//!   a "Next" button
//! - **Projects** (`/projects/index.html`): side-project showcase with search,
//!   type and stack filters and sort
//! - **TechLog** (`/techlog/index.html`): one tab per stack with highlighted
//!   code samples
//! - **Contact** (`/contact/index.html`): contact cards
//! - **Pages** (`/{slug}/index.html`): markdown pages from the content root
//! - **Protected routes** (`/dashboard/`, `/admin/`): redirect stubs to the
//!   login path
//! - **Not found** (`/404.html`)
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── 404.html
//! ├── projects/index.html
//! ├── techlog/index.html
//! ├── contact/index.html
//! ├── about/index.html
//! ├── dashboard/index.html       # redirect stub
//! ├── shots/                     # processed screenshots
//! │   └── fillme/001-login-3f9a0c12.png
//! └── assets/...                 # copied from content/assets
//! ```
//!
//! ## Interactivity
//!
//! The site is static; interactive state is computed here with the same
//! modules the browser runtime mirrors, so the first paint is already
//! correct:
//!
//! - the hero timeline comes from [`crate::sequencer::render_timeline`] and is
//!   embedded as JSON for `static/folio.js` to replay
//! - carousel transforms and dots come from [`crate::carousel`]
//! - section ids and epsilon come from [`crate::sections::SectionTracker`]
//! - the project list is ordered by [`crate::filter`] with the default
//!   criteria, and each card carries the fields the filter reads
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors injected from config)
//! - `static/folio.js`: Typing replay, section navigation, carousels, filters
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.

use crate::carousel::{Carousel, NestedCarousel};
use crate::config::{self, SiteConfig};
use crate::contact::{CardAction, contact_cards};
use crate::filter::{self, FilterCriteria, Showcase, SortBy};
use crate::highlight;
use crate::routes::{AuthState, Resolution, Route, RouteTable, PROTECTED_PATHS};
use crate::scan::{ASSETS_DIR, Manifest};
use crate::sections::SectionTracker;
use crate::sequencer::render_timeline;
use crate::types::{
    CareerEntry, FeaturedProject, NavItem, Page, Post, ProjectType, SideProject,
};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html as md_html};
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to walk {0}")]
    Walk(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/folio.js");

/// Directory under the output root that receives processed screenshots.
pub const SHOTS_DIR: &str = "shots";

/// Home-page sections, in scroll order. The hero is always present; the
/// others only when they have content.
pub fn home_sections(manifest: &Manifest) -> Vec<&'static str> {
    let mut ids = vec!["top"];
    if !manifest.career.is_empty() {
        ids.push("more");
    }
    if !manifest.featured.is_empty() {
        ids.push("experience");
    }
    if !manifest.techlog.is_empty() {
        ids.push("techlog");
    }
    ids
}

pub fn generate(
    manifest_path: &Path,
    processed_dir: &Path,
    output_dir: &Path,
    source_root: &Path,
) -> Result<(), GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    generate_site(&manifest, processed_dir, output_dir, source_root)
}

/// Write the whole site for an in-memory manifest.
pub fn generate_site(
    manifest: &Manifest,
    processed_dir: &Path,
    output_dir: &Path,
    source_root: &Path,
) -> Result<(), GenerateError> {
    // Generate CSS with colors from config
    let color_css = config::generate_color_css(&manifest.config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);

    fs::create_dir_all(output_dir)?;

    // Assets first so generated pages win on name collisions
    let assets = source_root.join(ASSETS_DIR);
    if assets.is_dir() {
        copy_tree(&assets, &output_dir.join(ASSETS_DIR))?;
    }
    if processed_dir.is_dir() {
        copy_tree(processed_dir, &output_dir.join(SHOTS_DIR))?;
    }

    let routes = RouteTable::new(&manifest.pages);
    for route in routes.public() {
        let markup = match route {
            Route::Home => render_home(manifest, &css)?,
            Route::Projects => render_projects_page(manifest, &css),
            Route::TechLog => render_techlog_page(manifest, &css),
            Route::Contact => render_contact_page(manifest, &css),
            Route::Page(slug) => match manifest.pages.iter().find(|p| &p.slug == slug) {
                Some(page) => render_page(page, manifest, &css),
                None => continue,
            },
        };
        write_page(output_dir, &route.output_file(), markup)?;
    }

    for path in PROTECTED_PATHS {
        if let Resolution::Redirect(target) = routes.resolve(path, AuthState::default()) {
            let file = format!("{}/index.html", path.trim_start_matches('/'));
            write_page(output_dir, &file, render_redirect(target))?;
        }
    }

    write_page(output_dir, "404.html", render_not_found(manifest, &css))?;

    tracing::info!(output = %output_dir.display(), "site generated");
    Ok(())
}

fn write_page(output_dir: &Path, file: &str, markup: Markup) -> Result<(), GenerateError> {
    let path = output_dir.join(file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, markup.into_string())?;
    tracing::debug!(file, "wrote page");
    Ok(())
}

/// Copy a directory tree, skipping manifests and hidden files.
fn copy_tree(src: &Path, dst: &Path) -> Result<(), GenerateError> {
    for entry in WalkDir::new(src)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
    {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_name() != "manifest.json" {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Markdown to HTML, with fenced code blocks run through [`highlight`].
pub fn render_markdown(source: &str) -> String {
    let mut code: Option<(String, String)> = None;
    let mut events = Vec::new();
    for event in Parser::new_ext(source, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
    {
        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => {
                        info.split_whitespace().next().unwrap_or("").to_string()
                    }
                    CodeBlockKind::Indented => String::new(),
                };
                code = Some((lang, String::new()));
            }
            Event::Text(text) if code.is_some() => {
                if let Some((_, buffer)) = code.as_mut() {
                    buffer.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some((lang, buffer)) = code.take() {
                    let rendered = highlight::render(&buffer, &lang).into_string();
                    events.push(Event::Html(rendered.into()));
                }
            }
            other => events.push(other),
        }
    }
    let mut out = String::new();
    md_html::push_html(&mut out, events.into_iter());
    out
}

/// JSON safe to embed in a `<script>` element.
fn script_json(value: &impl serde::Serialize) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(
    title: &str,
    config: &SiteConfig,
    css: &str,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    let full_title = if title == config.site.title {
        title.to_string()
    } else {
        format!("{} | {}", title, config.site.title)
    };
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (full_title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
                (site_footer(config))
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Renders the sidebar menu; the entry for `current_path` is marked.
pub fn render_nav(items: &[NavItem], current_path: &str) -> Markup {
    html! {
        input.nav-toggle type="checkbox" id="nav-toggle";
        label.nav-hamburger for="nav-toggle" aria-label="Menu" {
            span.hamburger-line {}
            span.hamburger-line {}
            span.hamburger-line {}
        }
        nav.sidebar {
            h2.sidebar-title { "Menu" }
            ul {
                @for item in items {
                    @let is_current = !item.external && item.path == current_path;
                    li class=[is_current.then_some("current")] {
                        @if item.external {
                            a href=(item.path) target="_blank" rel="noopener" { (item.title) }
                        } @else {
                            a href=(item.path) { (item.title) }
                        }
                    }
                }
            }
        }
    }
}

fn site_footer(config: &SiteConfig) -> Markup {
    html! {
        footer.site-footer {
            @if !config.site.owner.is_empty() {
                span.copyright { "© " (config.site.owner) }
            }
            @if !config.site.footer.is_empty() {
                span.footer-text { (config.site.footer) }
            }
        }
    }
}

// ============================================================================
// Home
// ============================================================================

/// Renders the home page: hero plus the sections that have content.
fn render_home(manifest: &Manifest, css: &str) -> Result<Markup, GenerateError> {
    let config = &manifest.config;
    let hero = &config.hero;
    let timeline = render_timeline(hero.stages());
    let timeline_json = script_json(&timeline)?;

    let tracker = SectionTracker::with_epsilon(home_sections(manifest), config.sections.epsilon);
    let section_ids = script_json(&tracker.ids())?;

    let content = html! {
        (render_nav(&manifest.navigation, "/"))
        main.home
            data-sections=(section_ids)
            data-current=[tracker.current_id()]
            data-epsilon=(tracker.epsilon().to_string())
        {
            section #top.hero.snap-section {
                div.hero-logo {
                    span.logo-mark { "</>" }
                    h1.hero-logo-text data-stage="0" { (hero.logo) }
                }
                div.hero-center {
                    h2.hero-headline data-stage="1" { (hero.headline) }
                    p.hero-subtitle {
                        @for (i, segment) in hero.subtitle.iter().enumerate() {
                            @let highlighted = hero.highlight_segment == Some(i);
                            span.hero-segment.highlight[highlighted] data-stage=(i + 2) { (segment) }
                        }
                    }
                }
                script type="application/json" id="hero-timeline" { (PreEscaped(timeline_json)) }
            }
            @if !manifest.career.is_empty() {
                section #more.snap-section {
                    (render_career(&manifest.career))
                }
            }
            @if !manifest.featured.is_empty() {
                section #experience.snap-section {
                    (render_featured(&manifest.featured, config))
                }
            }
            @if !manifest.techlog.is_empty() {
                section #techlog.snap-section {
                    (render_learning(&manifest.techlog))
                }
            }
            @if tracker.ids().len() > 1 {
                button.next-section type="button" aria-label="Next section" { "↓ Next" }
            }
        }
    };

    Ok(base_document(&config.site.title, config, css, Some("home-view"), content))
}

fn render_career(entries: &[CareerEntry]) -> Markup {
    html! {
        div.career-timeline {
            h3.section-title { "Career" }
            ol.timeline {
                @for entry in entries {
                    li.timeline-entry {
                        span.timeline-period { (entry.period) }
                        h4.timeline-title { (entry.title) }
                        @if let Some(subtitle) = &entry.subtitle {
                            p.timeline-subtitle { (subtitle) }
                        }
                        @if let Some(summary) = &entry.summary {
                            p.timeline-summary { (summary) }
                        }
                        @if !entry.projects.is_empty() {
                            div.timeline-projects {
                                @for project in &entry.projects {
                                    article.career-project {
                                        h5 { (project.name) }
                                        p.career-project-meta {
                                            @if let Some(period) = &project.period {
                                                span { (period) }
                                            }
                                            @if let Some(participants) = &project.participants {
                                                span { (participants) }
                                            }
                                        }
                                        @if let Some(summary) = &project.summary {
                                            p { (summary) }
                                        }
                                        @if let Some(stacks) = &project.stacks {
                                            p.career-project-stacks { (stacks) }
                                        }
                                        p.card-links {
                                            @if let Some(url) = &project.github_url {
                                                a href=(url) target="_blank" rel="noopener" { "GitHub" }
                                            }
                                            @if let Some(url) = &project.service_url {
                                                a href=(url) target="_blank" rel="noopener" { "Service" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Dot indicators for a carousel; the current one is marked active.
fn render_dots(carousel: &Carousel, label: &str) -> Markup {
    html! {
        div.slider-dots role="tablist" {
            @for i in 0..carousel.len() {
                @let active = i == carousel.index();
                button.dot.active[active] type="button" data-goto=(i)
                    aria-label={ (label) " " (i + 1) } aria-selected=(active) {}
            }
        }
    }
}

/// Renders the featured-project carousel: one slide per project, each with
/// its own screenshot carousel.
pub fn render_featured(projects: &[FeaturedProject], config: &SiteConfig) -> Markup {
    let lens: Vec<usize> = projects.iter().map(|p| p.screenshots.len()).collect();
    let slider = NestedCarousel::new(&lens);
    let outer = slider.outer();
    let fallback = &config.showcase.fallback_screenshot;

    html! {
        div.project-slider data-swipe-threshold=(config.showcase.swipe_threshold.to_string()) {
            h3.section-title { "Featured Projects" }
            div.slider-viewport {
                div.slider-track style=(outer.track_style()) {
                    @for (i, project) in projects.iter().enumerate() {
                        @let inner = slider.inner(i).copied().unwrap_or_else(|| Carousel::new(0));
                        @let slide_class = match &project.background {
                            Some(background) => format!("slide {background}"),
                            None => "slide".to_string(),
                        };
                        article class=(slide_class) style=(outer.slide_style()) data-index=(i) {
                            (render_screenshots(project, &inner, fallback))
                            (render_slide_body(project))
                        }
                    }
                }
            }
            @if outer.len() > 1 {
                div.slider-controls {
                    button.slider-prev type="button" aria-label="Previous project" { "‹" }
                    (render_dots(outer, "Project"))
                    button.slider-next type="button" aria-label="Next project" { "›" }
                }
            }
        }
    }
}

fn render_screenshots(project: &FeaturedProject, inner: &Carousel, fallback: &str) -> Markup {
    html! {
        div.shot-carousel {
            @if project.screenshots.is_empty() {
                img.shot src=(fallback) alt={ (project.title) " (no screenshot)" } loading="lazy";
            } @else {
                div.shot-viewport {
                    div.shot-track style=(inner.track_style()) {
                        @for (i, shot) in project.screenshots.iter().enumerate() {
                            figure.shot-frame style=(inner.slide_style()) {
                                img.shot src=(shot.path)
                                    alt={ (project.title) " screenshot " (i + 1) }
                                    width=[shot.dimensions.map(|d| d.0)]
                                    height=[shot.dimensions.map(|d| d.1)]
                                    loading="lazy"
                                    data-fallback=(fallback)
                                    onerror="this.onerror=null;this.src=this.dataset.fallback";
                            }
                        }
                    }
                }
                @if inner.len() > 1 {
                    div.shot-controls {
                        button.shot-prev type="button" aria-label="Previous screenshot" { "‹" }
                        (render_dots(inner, "Screenshot"))
                        button.shot-next type="button" aria-label="Next screenshot" { "›" }
                    }
                }
            }
        }
    }
}

fn render_slide_body(project: &FeaturedProject) -> Markup {
    let facts = [
        ("Period", &project.period),
        ("Role", &project.role),
        ("Team", &project.team_size),
        ("Stack", &project.stacks),
    ];
    html! {
        div.slide-body {
            h4.slide-title { (project.title) }
            dl.slide-facts {
                @for (label, value) in facts {
                    @if let Some(value) = value {
                        dt { (label) }
                        dd { (value) }
                    }
                }
            }
            @if let Some(problem) = &project.problem {
                h5 { "Problem" }
                p { (problem) }
            }
            @if !project.actions.is_empty() {
                h5 { "What I did" }
                ul { @for action in &project.actions { li { (action) } } }
            }
            @if let Some(impact) = &project.impact {
                h5 { "Impact" }
                p { (impact) }
            }
            @if !project.metrics.is_empty() {
                ul.slide-metrics { @for metric in &project.metrics { li { (metric) } } }
            }
            @if !project.links.is_empty() {
                p.card-links {
                    @for link in &project.links {
                        a href=(link.url) target="_blank" rel="noopener" { (link.label) }
                    }
                }
            }
        }
    }
}

fn render_learning(posts: &[Post]) -> Markup {
    html! {
        div.learning {
            h3.section-title { "What I'm Learning" }
            ul.learning-list {
                @for post in posts {
                    li {
                        a href={ "/techlog/#" (post.slug) } { (post.title) }
                        @if let Some(summary) = &post.summary {
                            span.learning-summary { (summary) }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Projects
// ============================================================================

fn render_project_card(project: &SideProject) -> Markup {
    html! {
        article.project-card
            data-id=(project.id)
            data-title=(project.title)
            data-period=(project.period.as_deref().unwrap_or(""))
            data-summary=(project.summary)
            data-type=(project.project_type.map(|t| t.label()).unwrap_or(""))
            data-stack=(project.stack.join("|"))
            data-tags=(project.tags.join("|")) {
            @if let Some(cover) = &project.cover {
                img.project-cover src=(cover) alt=(project.title) loading="lazy";
            }
            header.project-card-header {
                h3 { (project.title) }
                @if let Some(status) = project.status {
                    span class={ "badge status-" (status.label().to_lowercase()) } { (status.label()) }
                }
                @if let Some(kind) = project.project_type {
                    span.badge.type-badge { (kind.label()) }
                }
            }
            @if let Some(period) = &project.period {
                p.project-period { (period) }
            }
            @if !project.summary.is_empty() {
                p.project-summary { (project.summary) }
            }
            @if !project.stack.is_empty() {
                ul.stack-list { @for s in &project.stack { li { (s) } } }
            }
            @if let Some(phase) = project.phase {
                div.phase-bars {
                    @for (label, percent) in phase.steps() {
                        div.phase {
                            span.phase-label { (label) " " (percent) "%" }
                            span.phase-bar { span.phase-fill style={ "width: " (percent) "%" } {} }
                        }
                    }
                }
            }
            @if !project.highlights.is_empty() || !project.problems.is_empty() || !project.solutions.is_empty() {
                details.project-details {
                    summary { "Details" }
                    @for (heading, items) in [("Highlights", &project.highlights), ("Problems", &project.problems), ("Solutions", &project.solutions)] {
                        @if !items.is_empty() {
                            h4 { (heading) }
                            ul { @for item in items { li { (item) } } }
                        }
                    }
                }
            }
            p.card-links {
                @if let Some(url) = &project.github {
                    a href=(url) target="_blank" rel="noopener" { "GitHub" }
                }
                @if let Some(url) = &project.live {
                    a href=(url) target="_blank" rel="noopener" { "Live" }
                }
            }
        }
    }
}

/// Renders the side-project showcase. Cards are ordered with the default
/// criteria; the browser re-runs the same filter on input.
pub fn render_projects_page(manifest: &Manifest, css: &str) -> Markup {
    let config = &manifest.config;
    let criteria = FilterCriteria {
        sort_by: config.showcase.default_sort,
        ..Default::default()
    };
    let showcase = filter::showcase(&manifest.projects, &criteria);
    let stacks = filter::all_stacks(&manifest.projects);

    let content = html! {
        (render_nav(&manifest.navigation, "/projects/"))
        main.projects-page {
            header.page-header {
                h1 { "Side Projects" }
                p { (manifest.projects.len()) " projects" }
            }
            form.project-filters role="search" {
                input.filter-query type="search" name="q" placeholder="Search title, summary or tag" aria-label="Search projects";
                select.filter-type name="type" aria-label="Project type" {
                    option value="all" { "All" }
                    @for kind in ProjectType::ALL {
                        option value=(kind.label()) { (kind.label()) }
                    }
                }
                select.filter-sort name="sort" aria-label="Sort" {
                    @for sort in [SortBy::Recent, SortBy::Title] {
                        option value=(sort.to_string()) selected[sort == criteria.sort_by] {
                            @match sort {
                                SortBy::Recent => { "Recent" }
                                SortBy::Title => { "Title" }
                            }
                        }
                    }
                }
                @if !stacks.is_empty() {
                    div.stack-chips {
                        @for stack in &stacks {
                            button.chip type="button" data-stack=(stack) aria-pressed="false" { (stack) }
                        }
                    }
                }
            }
            div.project-grid {
                @for project in showcase.projects() {
                    (render_project_card(project))
                }
            }
            div.no-results hidden[!matches!(showcase, Showcase::NoResults)] {
                p { "No projects match the current filters." }
                button.filter-reset type="button" { "Reset filters" }
            }
        }
    };

    base_document("Projects", config, css, Some("projects-view"), content)
}

// ============================================================================
// TechLog, contact, pages
// ============================================================================

/// Renders the TechLog: a tab per stack, the first one open.
pub fn render_techlog_page(manifest: &Manifest, css: &str) -> Markup {
    let posts = &manifest.techlog;
    let content = html! {
        (render_nav(&manifest.navigation, "/techlog/"))
        main.techlog-page {
            header.page-header {
                h1 { "TechLog" }
            }
            @if posts.is_empty() {
                p.empty-state { "Nothing logged yet." }
            } @else {
                div.techlog-tabs role="tablist" {
                    @for (i, post) in posts.iter().enumerate() {
                        @let active = i == 0;
                        button.tab.active[active] type="button" role="tab"
                            data-tab=(post.slug) aria-selected=(active) { (post.title) }
                    }
                }
                @for (i, post) in posts.iter().enumerate() {
                    article.techlog-panel id=(post.slug) role="tabpanel" hidden[i != 0] {
                        (PreEscaped(render_markdown(&post.body)))
                    }
                }
            }
        }
    };
    base_document("TechLog", &manifest.config, css, Some("techlog-view"), content)
}

pub fn render_contact_page(manifest: &Manifest, css: &str) -> Markup {
    let cards = contact_cards(&manifest.config.contact);
    let content = html! {
        (render_nav(&manifest.navigation, "/contact/"))
        main.contact-page {
            header.page-header {
                p.eyebrow { "Contact" }
                h1 { "Let's talk" }
                a.button-outline href="/projects/" { "See the projects first" }
            }
            section.contact-grid aria-label="Contact channels" {
                @for card in &cards {
                    article.contact-card.hint[card.is_hint()] data-card=(card.id) {
                        h3 { (card.title) }
                        p { (card.summary) }
                        @match &card.action {
                            CardAction::Link { label, href } => {
                                a.card-action href=(href) target="_blank" rel="noopener" { (label) }
                            }
                            CardAction::Hint { label } => {
                                span.card-hint { (label) }
                            }
                        }
                    }
                }
            }
        }
    };
    base_document("Contact", &manifest.config, css, Some("contact-view"), content)
}

/// Renders a markdown page.
fn render_page(page: &Page, manifest: &Manifest, css: &str) -> Markup {
    let current = format!("/{}/", page.slug);
    let content = html! {
        (render_nav(&manifest.navigation, &current))
        main.page {
            article.page-content {
                (PreEscaped(render_markdown(&page.body)))
            }
        }
    };
    base_document(&page.title, &manifest.config, css, None, content)
}

/// Stub that sends the visitor to `target`.
fn render_redirect(target: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta http-equiv="refresh" content={ "0; url=" (target) };
                link rel="canonical" href=(target);
                title { "Redirecting" }
            }
            body {
                p { "Redirecting to " a href=(target) { (target) } }
            }
        }
    }
}

fn render_not_found(manifest: &Manifest, css: &str) -> Markup {
    let content = html! {
        (render_nav(&manifest.navigation, ""))
        main.not-found {
            h1 { "Not Found" }
            p { a href="/" { "Back to home" } }
        }
    };
    base_document("Not Found", &manifest.config, css, None, content)
}

// ============================================================================
// Tests
// ============================================================================
