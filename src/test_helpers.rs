//! Shared test utilities for the simple-folio test suite.
//!
//! Provides fixture setup and lookup helpers over the scan [`Manifest`].
//! Lookups panic with the available keys on a miss, so a failing test says
//! what was there instead.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let fillme = find_featured(&manifest, "fillme");
//! assert_eq!(screenshot_paths(fillme)[0], "/featured/010-fillme/001-login.png");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::scan::Manifest;
use crate::types::{FeaturedProject, Page, Post, SideProject};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Manifest lookups
// =========================================================================

/// Find a featured project by slug. Panics if not found.
pub fn find_featured<'a>(manifest: &'a Manifest, slug: &str) -> &'a FeaturedProject {
    manifest
        .featured
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = manifest.featured.iter().map(|p| p.slug.as_str()).collect();
            panic!("featured project '{slug}' not found. Available: {slugs:?}")
        })
}

/// Find a side project by id. Panics if not found.
pub fn find_project<'a>(manifest: &'a Manifest, id: &str) -> &'a SideProject {
    manifest
        .projects
        .iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| {
            let ids: Vec<&str> = manifest.projects.iter().map(|p| p.id.as_str()).collect();
            panic!("side project '{id}' not found. Available: {ids:?}")
        })
}

/// Find a TechLog post by slug. Panics if not found.
pub fn find_post<'a>(manifest: &'a Manifest, slug: &str) -> &'a Post {
    manifest
        .techlog
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = manifest.techlog.iter().map(|p| p.slug.as_str()).collect();
            panic!("post '{slug}' not found. Available: {slugs:?}")
        })
}

/// Find a page by slug. Panics if not found.
pub fn find_page<'a>(manifest: &'a Manifest, slug: &str) -> &'a Page {
    manifest
        .pages
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| {
            let slugs: Vec<&str> = manifest.pages.iter().map(|p| p.slug.as_str()).collect();
            panic!("page '{slug}' not found. Available: {slugs:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Navigation titles in order.
pub fn nav_titles(manifest: &Manifest) -> Vec<&str> {
    manifest
        .navigation
        .iter()
        .map(|n| n.title.as_str())
        .collect()
}

/// Screenshot paths of a featured project, in display order.
pub fn screenshot_paths(project: &FeaturedProject) -> Vec<&str> {
    project.screenshots.iter().map(|s| s.path.as_str()).collect()
}
