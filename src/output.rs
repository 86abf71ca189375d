//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output lists content, not files. Every entity (page, featured project,
//! side project, career entry, post) leads with its positional index and
//! title; source paths and details follow as indented context lines.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Pages
//! 001 About
//!     Source: about.md
//!
//! Featured
//! 001 FillMe (3 screenshots)
//!     001 001-login.png
//!     002 002-report.png
//!
//! Projects
//! 001 FLOWIN Ledger [Web]
//!     Stack: TypeScript, Chart.js
//!
//! Career
//! 001 2022.09 Bootcamp (1 project)
//!
//! TechLog
//! 001 TypeScript
//!     Realtime gateways with NestJS and socket.io.
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Process
//!
//! ```text
//! FillMe (3 screenshots)
//!     001 001-login.png
//!         Source: featured/010-fillme/001-login.png
//!         Output: /shots/fillme/001-login-3f9a0c12.png (1280x800)
//!         copied
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! Projects → projects/index.html
//! ...
//! /dashboard → /login
//! Not found → 404.html
//!
//! Generated 6 pages, 2 redirects
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::filter::{FilterCriteria, Showcase, TypeFilter};
use crate::process::{ProcessEvent, ScreenshotStatus};
use crate::routes::{PROTECTED_PATHS, Resolution, Route, RouteTable};
use crate::scan::{ASSETS_DIR, Manifest};
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Pluralize `noun` for `n` (`1 project`, `3 projects`).
fn counted(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Entity header: positional index + title, with optional detail in parens.
///
/// ```text
/// 001 FillMe (3 screenshots)
/// 002 About
/// ```
fn entity_header(index: usize, title: &str, detail: Option<String>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), title, d),
        None => format!("{} {}", format_index(index), title),
    }
}

/// Last path segment, used to show screenshot files by name.
fn file_label(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Start a titled block, separated from the previous one by a blank line.
fn section(lines: &mut Vec<String>, title: &str) {
    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(title.to_string());
}

/// Format scan stage output: everything the content directory provides.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    if !manifest.pages.is_empty() {
        section(&mut lines, "Pages");
        for (i, page) in manifest.pages.iter().enumerate() {
            let marker = match (page.is_link, page.in_nav) {
                (true, _) => " (link)",
                (false, false) => " (hidden)",
                (false, true) => "",
            };
            lines.push(format!("{}{}", entity_header(i + 1, &page.title, None), marker));
            lines.push(format!("{}Source: {}.md", indent(1), page.slug));
        }
    }

    if !manifest.featured.is_empty() {
        section(&mut lines, "Featured");
        for (i, project) in manifest.featured.iter().enumerate() {
            let shots = project.screenshots.len();
            lines.push(entity_header(
                i + 1,
                &project.title,
                Some(counted(shots, "screenshot")),
            ));
            for (j, shot) in project.screenshots.iter().enumerate() {
                let label = match &shot.source_path {
                    Some(source) => file_label(source).to_string(),
                    None => format!("{} (external)", shot.path),
                };
                lines.push(format!("{}{} {}", indent(1), format_index(j + 1), label));
            }
        }
    }

    if !manifest.projects.is_empty() {
        section(&mut lines, "Projects");
        for (i, project) in manifest.projects.iter().enumerate() {
            let mut header = entity_header(i + 1, &project.title, None);
            if let Some(t) = project.project_type {
                header.push_str(&format!(" [{}]", t.label()));
            }
            lines.push(header);
            if !project.stack.is_empty() {
                lines.push(format!("{}Stack: {}", indent(1), project.stack.join(", ")));
            }
        }
    }

    if !manifest.career.is_empty() {
        section(&mut lines, "Career");
        for (i, entry) in manifest.career.iter().enumerate() {
            let title = format!("{} {}", entry.period, entry.title);
            let detail = (!entry.projects.is_empty())
                .then(|| counted(entry.projects.len(), "project"));
            lines.push(entity_header(i + 1, &title, detail));
        }
    }

    if !manifest.techlog.is_empty() {
        section(&mut lines, "TechLog");
        for (i, post) in manifest.techlog.iter().enumerate() {
            lines.push(entity_header(i + 1, &post.title, None));
            if let Some(summary) = &post.summary {
                lines.push(format!("{}{}", indent(1), truncate_desc(summary, 60)));
            }
        }
    }

    section(&mut lines, "Config");
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    }
    if source_root.join(ASSETS_DIR).is_dir() {
        lines.push(format!("{}{}/", indent(1), ASSETS_DIR));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Process output
// ============================================================================

/// Format a single process progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::ProjectStarted {
            title,
            screenshot_count,
        } => vec![format!("{} ({})", title, counted(*screenshot_count, "screenshot"))],
        ProcessEvent::ScreenshotProcessed {
            index,
            source,
            output,
            dimensions,
            status,
        } => {
            let mut lines = vec![format!(
                "{}{} {}",
                indent(1),
                format_index(*index),
                file_label(source)
            )];
            if *status != ScreenshotStatus::External {
                lines.push(format!("{}Source: {}", indent(2), source));
            }
            let size = dimensions
                .map(|(w, h)| format!(" ({w}x{h})"))
                .unwrap_or_default();
            lines.push(format!("{}Output: {}{}", indent(2), output, size));
            let status = match status {
                ScreenshotStatus::Copied => "copied",
                ScreenshotStatus::Unchanged => "unchanged",
                ScreenshotStatus::Missing => "missing, using fallback",
                ScreenshotStatus::External => "external",
            };
            lines.push(format!("{}{}", indent(2), status));
            lines
        }
    }
}

// ============================================================================
// Stage 3: Generate output
// ============================================================================

fn route_label(route: &Route, manifest: &Manifest) -> String {
    match route {
        Route::Home => "Home".to_string(),
        Route::Projects => "Projects".to_string(),
        Route::TechLog => "TechLog".to_string(),
        Route::Contact => "Contact".to_string(),
        Route::Page(slug) => manifest
            .pages
            .iter()
            .find(|p| &p.slug == slug)
            .map(|p| p.title.clone())
            .unwrap_or_else(|| slug.clone()),
    }
}

/// Format generate stage output: one line per written file.
pub fn format_generate_output(manifest: &Manifest) -> Vec<String> {
    let routes = RouteTable::new(&manifest.pages);
    let mut lines = Vec::new();

    for route in routes.public() {
        lines.push(format!(
            "{} \u{2192} {}",
            route_label(route, manifest),
            route.output_file()
        ));
    }

    let mut redirects = 0;
    for path in PROTECTED_PATHS {
        if let Resolution::Redirect(target) = routes.resolve(path, Default::default()) {
            lines.push(format!("{} \u{2192} {}", path, target));
            redirects += 1;
        }
    }
    lines.push("Not found \u{2192} 404.html".to_string());

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}",
        counted(routes.public().len(), "page"),
        counted(redirects, "redirect")
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(manifest: &Manifest) {
    for line in format_generate_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Search output
// ============================================================================

/// One-line description of the active criteria.
fn describe_criteria(criteria: &FilterCriteria) -> String {
    let mut parts = Vec::new();
    if !criteria.query.trim().is_empty() {
        parts.push(format!("query \"{}\"", criteria.query.trim()));
    }
    if let TypeFilter::Only(t) = criteria.project_type {
        parts.push(format!("type {}", t.label()));
    }
    if !criteria.stacks.is_empty() {
        let stacks: Vec<&str> = criteria.stacks.iter().map(String::as_str).collect();
        parts.push(format!("stack {}", stacks.join(" + ")));
    }
    if parts.is_empty() {
        format!("all projects, sorted by {}", criteria.sort_by)
    } else {
        format!("{}, sorted by {}", parts.join(", "), criteria.sort_by)
    }
}

/// Format the result of a showcase search.
pub fn format_search_results(showcase: &Showcase, criteria: &FilterCriteria) -> Vec<String> {
    let mut lines = vec![describe_criteria(criteria)];
    match showcase {
        Showcase::NoResults => {
            lines.push("No projects match".to_string());
        }
        Showcase::Results(projects) => {
            for (i, project) in projects.iter().enumerate() {
                lines.push(entity_header(i + 1, &project.title, project.period.clone()));
                if !project.summary.is_empty() {
                    lines.push(format!("{}{}", indent(1), truncate_desc(&project.summary, 60)));
                }
                if !project.stack.is_empty() {
                    lines.push(format!("{}Stack: {}", indent(1), project.stack.join(", ")));
                }
            }
        }
    }
    lines
}

/// Print search results to stdout.
pub fn print_search_results(showcase: &Showcase, criteria: &FilterCriteria) {
    for line in format_search_results(showcase, criteria) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
