//! Filesystem scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Walks the content directory and produces a
//! [`Manifest`] that the process and generate stages consume.
//!
//! ## Directory Structure
//!
//! ```text
//! content/
//! ├── config.toml                  # Site configuration (optional)
//! ├── assets/                      # Copied verbatim to the output root
//! ├── 010-about.md                 # Page (numbered = appears in the menu)
//! ├── 050-blog.md                  # External link page (URL-only content)
//! ├── projects/                    # Side-project showcase
//! │   ├── 010-flowin-ledger.toml
//! │   └── 020-dailyon.toml
//! ├── featured/                    # Home-page carousel, one slide per dir
//! │   ├── 010-fillme/
//! │   │   ├── project.toml
//! │   │   ├── 001-login.png        # Screenshots, ordered by number
//! │   │   └── 002-report.png
//! │   └── 020-signage/
//! │       └── project.toml         # No screenshots = placeholder slide
//! ├── career/                      # Timeline milestones, oldest first
//! │   ├── 010-bootcamp.toml
//! │   └── 020-first-job.toml
//! └── techlog/                     # One markdown file per stack
//!     ├── 010-typescript.md
//!     └── 020-java.md
//! ```
//!
//! Every section is optional; a missing directory yields an empty list.
//!
//! ## Validation
//!
//! - Duplicate screenshot numbers within one featured project are an error.
//! - Duplicate side-project ids are an error.
//! - Slugs keep Unicode letters; a name with none falls back to its number.
//!   An empty slug, a page slug that names a built-in route, and a slug used
//!   twice among pages, posts or featured projects are errors.
//! - TOML errors carry the offending file path.

use crate::config::{self, SiteConfig};
use crate::naming::{ParsedName, parse_entry_name, slugify};
use crate::routes::is_reserved_slug;
use crate::types::{
    CareerEntry, FeaturedProject, Link, NavItem, Page, Post, Screenshot, SideProject,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Duplicate screenshot number {0} in {1}")]
    DuplicateNumber(u32, PathBuf),
    #[error("Duplicate side-project id '{0}' ({1})")]
    DuplicateProjectId(String, PathBuf),
    #[error("Featured project directory has no project.toml: {0}")]
    MissingProjectFile(PathBuf),
    #[error("Cannot derive a URL slug from {0}")]
    EmptySlug(PathBuf),
    #[error("Slug '{0}' of {1} is reserved for a built-in page")]
    ReservedSlug(String, PathBuf),
    #[error("Duplicate slug '{0}' ({1})")]
    DuplicateSlug(String, PathBuf),
}

/// Directory copied as-is to the output root.
pub const ASSETS_DIR: &str = "assets";
pub const PROJECTS_DIR: &str = "projects";
pub const FEATURED_DIR: &str = "featured";
pub const CAREER_DIR: &str = "career";
pub const TECHLOG_DIR: &str = "techlog";
/// Descriptor file inside each featured-project directory.
pub const PROJECT_FILE: &str = "project.toml";

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "svg"];

/// Manifest shared by all stages.
///
/// The process stage rewrites screenshot paths and dimensions in place and
/// writes the same structure back out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub navigation: Vec<NavItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub featured: Vec<FeaturedProject>,
    #[serde(default)]
    pub projects: Vec<SideProject>,
    #[serde(default)]
    pub career: Vec<CareerEntry>,
    #[serde(default)]
    pub techlog: Vec<Post>,
    pub config: SiteConfig,
}

/// `project.toml` as written by the user.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FeaturedFile {
    title: Option<String>,
    period: Option<String>,
    role: Option<String>,
    team_size: Option<String>,
    stacks: Option<String>,
    problem: Option<String>,
    actions: Vec<String>,
    impact: Option<String>,
    metrics: Vec<String>,
    github_url: Option<String>,
    service_url: Option<String>,
    links: Vec<Link>,
    /// Extra screenshot paths (absolute URLs or site paths), shown after
    /// the local image files.
    screenshots: Vec<String>,
    background: Option<String>,
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    // Load site config first so a broken config fails fast
    let config = config::load_config(root)?;

    let pages = parse_pages(root)?;
    let projects = scan_projects(&root.join(PROJECTS_DIR))?;
    let featured = scan_featured(root, &root.join(FEATURED_DIR))?;
    let career = scan_career(&root.join(CAREER_DIR))?;
    let techlog = scan_techlog(&root.join(TECHLOG_DIR))?;

    let navigation = build_navigation(&pages, !projects.is_empty(), !techlog.is_empty());

    Ok(Manifest {
        navigation,
        pages,
        featured,
        projects,
        career,
        techlog,
        config,
    })
}

/// Sidebar menu: Home, numbered pages, then the built-in sections that have
/// content, and Contact last.
fn build_navigation(pages: &[Page], has_projects: bool, has_techlog: bool) -> Vec<NavItem> {
    let mut nav = vec![NavItem {
        title: "Home".to_string(),
        path: "/".to_string(),
        external: false,
    }];
    for page in pages.iter().filter(|p| p.in_nav) {
        nav.push(if page.is_link {
            NavItem {
                title: page.link_title.clone(),
                path: page.body.trim().to_string(),
                external: true,
            }
        } else {
            NavItem {
                title: page.title.clone(),
                path: format!("/{}/", page.slug),
                external: false,
            }
        });
    }
    if has_projects {
        nav.push(NavItem {
            title: "Projects".to_string(),
            path: "/projects/".to_string(),
            external: false,
        });
    }
    if has_techlog {
        nav.push(NavItem {
            title: "TechLog".to_string(),
            path: "/techlog/".to_string(),
            external: false,
        });
    }
    nav.push(NavItem {
        title: "Contact".to_string(),
        path: "/contact/".to_string(),
        external: false,
    });
    nav
}

/// Files in `dir` with one of `extensions`, sorted by `NNN-` prefix then name.
/// A missing directory yields an empty list.
fn numbered_files(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && !is_hidden(p) && has_extension(p, extensions))
        .collect();
    files.sort_by_key(|p| (parse_entry_name(&file_stem(p)).sort_key(), file_name(p)));
    Ok(files)
}

fn is_hidden(path: &Path) -> bool {
    file_name(path).starts_with('.')
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|e| extensions.contains(&e.as_str()))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ScanError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|source| ScanError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

/// Slug for an entry, falling back to its zero-padded number when the name
/// has no letters or digits.
fn entry_slug(parsed: &ParsedName, path: &Path) -> Result<String, ScanError> {
    let slug = slugify(&parsed.name);
    if !slug.is_empty() {
        return Ok(slug);
    }
    parsed
        .number
        .map(|n| format!("{n:03}"))
        .ok_or_else(|| ScanError::EmptySlug(path.to_path_buf()))
}

/// Record `slug` as used, failing if it already was.
fn claim_slug(seen: &mut HashSet<String>, slug: &str, path: &Path) -> Result<(), ScanError> {
    if seen.insert(slug.to_string()) {
        Ok(())
    } else {
        Err(ScanError::DuplicateSlug(slug.to_string(), path.to_path_buf()))
    }
}

/// First `# heading` of a markdown document.
fn first_heading(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches("# ").trim().to_string())
}

/// First paragraph of plain text: the first run of non-blank lines that is
/// not a heading or a code fence.
fn first_paragraph(markdown: &str) -> Option<String> {
    let mut lines = Vec::new();
    let mut in_fence = false;
    for line in markdown.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("```") {
            if !lines.is_empty() {
                break;
            }
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if trimmed.is_empty() || trimmed.starts_with('#') {
            if !lines.is_empty() {
                break;
            }
            continue;
        }
        lines.push(trimmed);
    }
    (!lines.is_empty()).then(|| lines.join(" "))
}

/// Parse all markdown files in the root directory into pages.
///
/// Each `.md` file becomes a page. Numbered files (`NNN-name.md`) appear in
/// navigation sorted by number; unnumbered files are generated but hidden.
/// If a file's only content is a URL, it becomes an external link in the nav.
fn parse_pages(root: &Path) -> Result<Vec<Page>, ScanError> {
    let mut pages = Vec::new();
    let mut seen = HashSet::new();
    for md_path in numbered_files(root, &["md"])? {
        let parsed = parse_entry_name(&file_stem(&md_path));
        let in_nav = parsed.number.is_some();
        let link_title = parsed.display_title.clone();

        let content = fs::read_to_string(&md_path)?;
        let trimmed = content.trim();

        // A page whose only content is a URL becomes an external link
        let is_link = !trimmed.contains('\n')
            && (trimmed.starts_with("http://") || trimmed.starts_with("https://"));

        // Link pages write no file, so only rendered pages claim a route
        let slug = if is_link {
            slugify(&parsed.name)
        } else {
            let slug = entry_slug(&parsed, &md_path)?;
            if is_reserved_slug(&slug) {
                return Err(ScanError::ReservedSlug(slug, md_path));
            }
            claim_slug(&mut seen, &slug, &md_path)?;
            slug
        };

        let title = if is_link {
            link_title.clone()
        } else {
            first_heading(&content).unwrap_or_else(|| link_title.clone())
        };

        pages.push(Page {
            title,
            link_title,
            slug,
            body: content,
            in_nav,
            sort_key: parsed.sort_key(),
            is_link,
        });
    }
    Ok(pages)
}

fn scan_projects(dir: &Path) -> Result<Vec<SideProject>, ScanError> {
    let mut seen = HashSet::new();
    let mut projects = Vec::new();
    for path in numbered_files(dir, &["toml"])? {
        let mut project: SideProject = read_toml(&path)?;
        if project.id.trim().is_empty() {
            project.id = entry_slug(&parse_entry_name(&file_stem(&path)), &path)?;
        }
        if !seen.insert(project.id.clone()) {
            return Err(ScanError::DuplicateProjectId(project.id, path));
        }
        projects.push(project);
    }
    Ok(projects)
}

fn scan_featured(root: &Path, dir: &Path) -> Result<Vec<FeaturedProject>, ScanError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut dirs: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_dir() && !is_hidden(p))
        .collect();
    dirs.sort_by_key(|p| (parse_entry_name(&file_name(p)).sort_key(), file_name(p)));

    let mut seen = HashSet::new();
    let mut featured = Vec::new();
    for project_dir in &dirs {
        let project = build_featured(root, project_dir)?;
        claim_slug(&mut seen, &project.slug, project_dir)?;
        featured.push(project);
    }
    Ok(featured)
}

fn build_featured(root: &Path, project_dir: &Path) -> Result<FeaturedProject, ScanError> {
    let descriptor = project_dir.join(PROJECT_FILE);
    if !descriptor.is_file() {
        return Err(ScanError::MissingProjectFile(project_dir.to_path_buf()));
    }
    let file: FeaturedFile = read_toml(&descriptor)?;
    let parsed = parse_entry_name(&file_name(project_dir));
    let slug = entry_slug(&parsed, project_dir)?;

    // Numbered screenshots first, in number order; duplicates are an error
    let mut numbered: BTreeMap<u32, PathBuf> = BTreeMap::new();
    let mut unnumbered = Vec::new();
    for image in numbered_files(project_dir, IMAGE_EXTENSIONS)? {
        match parse_entry_name(&file_stem(&image)).number {
            Some(n) => {
                if numbered.insert(n, image).is_some() {
                    return Err(ScanError::DuplicateNumber(n, project_dir.to_path_buf()));
                }
            }
            None => unnumbered.push(image),
        }
    }

    let mut screenshots: Vec<Screenshot> = numbered
        .into_values()
        .chain(unnumbered)
        .map(|image| {
            let rel = image
                .strip_prefix(root)
                .unwrap_or(&image)
                .to_string_lossy()
                .replace('\\', "/");
            Screenshot {
                path: format!("/{rel}"),
                source_path: Some(rel),
                dimensions: None,
            }
        })
        .collect();
    screenshots.extend(
        file.screenshots
            .into_iter()
            .filter(|s| !s.trim().is_empty())
            .map(|path| Screenshot {
                path,
                source_path: None,
                dimensions: None,
            }),
    );

    let mut links = Vec::new();
    if let Some(url) = non_blank(file.github_url) {
        links.push(Link {
            label: "GitHub".to_string(),
            url,
        });
    }
    if let Some(url) = non_blank(file.service_url) {
        links.push(Link {
            label: "Service".to_string(),
            url,
        });
    }
    links.extend(file.links);

    Ok(FeaturedProject {
        slug,
        title: non_blank(file.title).unwrap_or(parsed.display_title),
        period: non_blank(file.period),
        role: non_blank(file.role),
        team_size: non_blank(file.team_size),
        stacks: non_blank(file.stacks),
        problem: non_blank(file.problem),
        actions: file.actions,
        impact: non_blank(file.impact),
        metrics: file.metrics,
        links,
        screenshots,
        background: non_blank(file.background),
    })
}

/// Empty strings in content files mean "not set".
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn scan_career(dir: &Path) -> Result<Vec<CareerEntry>, ScanError> {
    numbered_files(dir, &["toml"])?
        .iter()
        .map(|path| {
            let mut entry: CareerEntry = read_toml(path)?;
            for project in &mut entry.projects {
                project.github_url = non_blank(project.github_url.take());
                project.service_url = non_blank(project.service_url.take());
            }
            Ok(entry)
        })
        .collect()
}

fn scan_techlog(dir: &Path) -> Result<Vec<Post>, ScanError> {
    let mut posts = Vec::new();
    let mut seen = HashSet::new();
    for path in numbered_files(dir, &["md"])? {
        let parsed = parse_entry_name(&file_stem(&path));
        let slug = entry_slug(&parsed, &path)?;
        claim_slug(&mut seen, &slug, &path)?;
        let body = fs::read_to_string(&path)?;
        posts.push(Post {
            slug,
            title: first_heading(&body).unwrap_or_else(|| parsed.display_title.clone()),
            summary: first_paragraph(&body),
            body,
            sort_key: parsed.sort_key(),
        });
    }
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn scan_reads_every_section() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(manifest.featured.len(), 3);
        assert_eq!(manifest.projects.len(), 3);
        assert_eq!(manifest.career.len(), 2);
        assert_eq!(manifest.techlog.len(), 2);
    }

    #[test]
    fn navigation_order() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(
            nav_titles(&manifest),
            vec!["Home", "About", "Blog", "Projects", "TechLog", "Contact"]
        );
        let blog = manifest.navigation.iter().find(|n| n.title == "Blog").unwrap();
        assert!(blog.external);
    }

    #[test]
    fn minimal_content_has_home_and_contact() {
        let tmp = TempDir::new().unwrap();
        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(nav_titles(&manifest), vec!["Home", "Contact"]);
        assert!(manifest.featured.is_empty());
    }

    #[test]
    fn side_project_id_defaults_to_file_slug() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let ledger = find_project(&manifest, "flowin-ledger");
        assert_eq!(ledger.title, "FLOWIN Ledger");
        assert!(ledger.stack.contains(&"TypeScript".to_string()));
    }

    #[test]
    fn duplicate_project_id_is_error() {
        let tmp = setup_fixtures();
        fs::write(
            tmp.path().join("projects/090-copy.toml"),
            "id = \"flowin-ledger\"\ntitle = \"Copy\"\n",
        )
        .unwrap();
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::DuplicateProjectId(id, _)) if id == "flowin-ledger"
        ));
    }

    #[test]
    fn invalid_project_toml_names_file() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join("projects/099-bad.toml"), "title = ").unwrap();
        let err = scan(tmp.path()).unwrap_err().to_string();
        assert!(err.contains("099-bad.toml"), "{err}");
    }

    #[test]
    fn unknown_project_field_rejected() {
        let tmp = setup_fixtures();
        fs::write(
            tmp.path().join("projects/099-typo.toml"),
            "title = \"T\"\nstacks = [\"Rust\"]\n",
        )
        .unwrap();
        assert!(matches!(scan(tmp.path()), Err(ScanError::Toml { .. })));
    }

    #[test]
    fn featured_screenshots_in_number_order() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let fillme = find_featured(&manifest, "fillme");
        assert_eq!(
            screenshot_paths(fillme),
            vec![
                "/featured/010-fillme/001-login.png",
                "/featured/010-fillme/002-report.png",
                "/featured/010-fillme/010-settings.png",
            ]
        );
        assert_eq!(
            fillme.screenshots[0].source_path.as_deref(),
            Some("featured/010-fillme/001-login.png")
        );
    }

    #[test]
    fn featured_links_from_urls() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let fillme = find_featured(&manifest, "fillme");
        let labels: Vec<&str> = fillme.links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Service"]);
    }

    #[test]
    fn featured_without_screenshots_is_kept() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let signage = find_featured(&manifest, "signage");
        assert!(signage.screenshots.is_empty());
        assert_eq!(signage.period, None);
    }

    #[test]
    fn explicit_screenshots_follow_local_ones() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let mfds = find_featured(&manifest, "mfds");
        assert_eq!(screenshot_paths(mfds), vec!["/images/mfds-1.png"]);
        assert_eq!(mfds.screenshots[0].source_path, None);
    }

    #[test]
    fn duplicate_screenshot_number_is_error() {
        let tmp = setup_fixtures();
        let dir = tmp.path().join("featured/010-fillme");
        fs::copy(dir.join("001-login.png"), dir.join("001-again.png")).unwrap();
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::DuplicateNumber(1, _))
        ));
    }

    #[test]
    fn featured_dir_without_descriptor_is_error() {
        let tmp = setup_fixtures();
        fs::create_dir_all(tmp.path().join("featured/090-empty")).unwrap();
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::MissingProjectFile(_))
        ));
    }

    #[test]
    fn career_entries_in_file_order() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let periods: Vec<&str> = manifest.career.iter().map(|c| c.period.as_str()).collect();
        assert_eq!(periods, vec!["2022.09", "2023.05"]);
        // blank URLs are treated as absent
        let first = &manifest.career[1].projects[0];
        assert_eq!(first.github_url, None);
    }

    #[test]
    fn techlog_titles_and_summaries() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let ts = find_post(&manifest, "typescript");
        assert_eq!(ts.title, "TypeScript");
        assert_eq!(
            ts.summary.as_deref(),
            Some("Realtime gateways with NestJS and socket.io.")
        );
    }

    #[test]
    fn first_paragraph_skips_code_and_headings() {
        let md = "# Title\n\n```rust\nfn main() {}\n```\n\nBody line one\nline two\n\nNext";
        assert_eq!(
            first_paragraph(md).as_deref(),
            Some("Body line one line two")
        );
        assert_eq!(first_paragraph("# Only heading"), None);
    }

    #[test]
    fn pages_parsed_from_fixtures() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let about = find_page(&manifest, "about");
        assert_eq!(about.title, "About");
        assert!(about.in_nav);
        let blog = find_page(&manifest, "blog");
        assert!(blog.is_link);
    }

    #[test]
    fn unnumbered_page_hidden_from_nav() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join("uses.md"), "# Uses\n\nGear.").unwrap();
        let manifest = scan(tmp.path()).unwrap();
        let uses = find_page(&manifest, "uses");
        assert!(!uses.in_nav);
        assert!(!nav_titles(&manifest).contains(&"Uses"));
    }

    #[test]
    fn multiline_content_not_detected_as_link() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("010-links.md"),
            "https://example.com\nhttps://example.org\n",
        )
        .unwrap();
        let manifest = scan(tmp.path()).unwrap();
        assert!(!manifest.pages[0].is_link);
    }

    #[test]
    fn hangul_page_name_keeps_its_slug() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join("020-소개.md"), "# 소개\n\n안녕하세요.").unwrap();
        let manifest = scan(tmp.path()).unwrap();
        let intro = find_page(&manifest, "소개");
        assert!(intro.in_nav);
        assert!(manifest.navigation.iter().any(|n| n.path == "/소개/"));
    }

    #[test]
    fn punctuation_only_name_falls_back_to_number() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join("040-!!!.md"), "# Bang\n\nBody.").unwrap();
        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(find_page(&manifest, "040").title, "Bang");
    }

    #[test]
    fn unnumbered_page_without_slug_is_error() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join("!!!.md"), "# Bang").unwrap();
        assert!(matches!(scan(tmp.path()), Err(ScanError::EmptySlug(_))));
    }

    #[test]
    fn page_named_like_builtin_route_is_error() {
        for name in ["030-projects.md", "contact.md", "090-Login.md"] {
            let tmp = setup_fixtures();
            fs::write(tmp.path().join(name), "# Clash\n\nBody.").unwrap();
            let err = scan(tmp.path()).unwrap_err();
            assert!(matches!(err, ScanError::ReservedSlug(..)), "{name}: {err}");
        }
    }

    #[test]
    fn link_page_may_use_builtin_name() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join("060-projects.md"), "https://github.com/me").unwrap();
        let manifest = scan(tmp.path()).unwrap();
        assert!(find_page(&manifest, "projects").is_link);
    }

    #[test]
    fn duplicate_page_slug_is_error() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join("030-About.md"), "# About again").unwrap();
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::DuplicateSlug(slug, _)) if slug == "about"
        ));
    }

    #[test]
    fn duplicate_post_slug_is_error() {
        let tmp = setup_fixtures();
        fs::write(tmp.path().join("techlog/030-TypeScript.md"), "# TS again").unwrap();
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::DuplicateSlug(slug, _)) if slug == "typescript"
        ));
    }

    #[test]
    fn featured_slugs_keep_unicode_and_stay_unique() {
        let tmp = setup_fixtures();
        let dir = tmp.path().join("featured/040-사이니지");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(PROJECT_FILE), "title = \"Signage KR\"\n").unwrap();
        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(find_featured(&manifest, "사이니지").title, "Signage KR");

        let dup = tmp.path().join("featured/050-fillme");
        fs::create_dir_all(&dup).unwrap();
        fs::write(dup.join(PROJECT_FILE), "title = \"Again\"\n").unwrap();
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::DuplicateSlug(slug, _)) if slug == "fillme"
        ));
    }

    #[test]
    fn config_loaded_from_fixtures() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        assert_eq!(manifest.config.hero.logo, "SH.dev");
    }

    #[test]
    fn manifest_round_trips_through_json() {
        let tmp = setup_fixtures();
        let manifest = scan(tmp.path()).unwrap();
        let json = serde_json::to_string(&manifest).unwrap();
        let back: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.featured, manifest.featured);
        assert_eq!(back.projects, manifest.projects);
    }
}
