//! Screenshot fingerprinting and asset preparation.
//!
//! Stage 2 of the build pipeline. Takes the manifest from the scan stage and
//! prepares every local screenshot of the featured projects for publishing.
//!
//! For each local screenshot:
//! - **Fingerprint**: SHA-256 of the file content; the first 8 hex digits go
//!   into the output filename so browsers can cache them forever.
//! - **Dimensions**: read from the image header (no full decode) and emitted
//!   as `width`/`height` attributes to avoid layout shift.
//! - **Copy**: `processed/<project-slug>/<stem>-<hash8>.<ext>`.
//!
//! A screenshot whose source file is gone is not an error: it is pointed at
//! the configured fallback image and logged. Screenshots listed explicitly in
//! `project.toml` (no local source) pass through untouched.
//!
//! ## Output Structure
//!
//! ```text
//! processed/
//! ├── manifest.json                    # Same manifest, screenshot paths rewritten
//! ├── fillme/
//! │   ├── 001-login-3f9a0c12.png
//! │   └── 002-report-b71e44d0.png
//! └── ...
//! ```
//!
//! The generate stage copies everything but `manifest.json` to `dist/shots/`.
//!
//! ## Parallel Processing
//!
//! Screenshots of one project are processed in parallel with
//! [rayon](https://docs.rs/rayon); the pool size comes from
//! `processing.max_processes`.

use crate::scan::Manifest;
use crate::types::Screenshot;
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// URL prefix under which processed screenshots are served.
pub const SHOTS_URL_PREFIX: &str = "/shots";

/// Hex digits of the content hash kept in output filenames.
const HASH_PREFIX_LEN: usize = 8;

/// What happened to one screenshot.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenshotStatus {
    /// Copied to a new fingerprinted file.
    Copied,
    /// A file with the same fingerprint already existed.
    Unchanged,
    /// Source missing; the slide will show the fallback image.
    Missing,
    /// Not a local file; kept as written.
    External,
}

/// Progress event emitted during processing, for CLI output.
#[derive(Debug, Clone)]
pub enum ProcessEvent {
    ProjectStarted {
        title: String,
        screenshot_count: usize,
    },
    ScreenshotProcessed {
        /// 1-based position within the project.
        index: usize,
        /// The source path, or the path as written for external ones.
        source: String,
        /// Path the page will reference.
        output: String,
        dimensions: Option<(u32, u32)>,
        status: ScreenshotStatus,
    },
}

/// Result of one screenshot, before it is folded back into the manifest.
struct Processed {
    screenshot: Screenshot,
    status: ScreenshotStatus,
}

/// Read the scan manifest at `manifest_path` and process its screenshots.
pub fn process(
    manifest_path: &Path,
    source_root: &Path,
    output_dir: &Path,
    progress: Option<Sender<ProcessEvent>>,
) -> Result<Manifest, ProcessError> {
    let content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&content)?;
    process_manifest(manifest, source_root, output_dir, progress)
}

/// Process an in-memory manifest, returning it with screenshot paths rewritten.
pub fn process_manifest(
    mut manifest: Manifest,
    source_root: &Path,
    output_dir: &Path,
    progress: Option<Sender<ProcessEvent>>,
) -> Result<Manifest, ProcessError> {
    fs::create_dir_all(output_dir)?;
    let fallback = manifest.config.showcase.fallback_screenshot.clone();

    for project in &mut manifest.featured {
        if let Some(tx) = &progress {
            tx.send(ProcessEvent::ProjectStarted {
                title: project.title.clone(),
                screenshot_count: project.screenshots.len(),
            })
            .ok();
        }
        if project.screenshots.is_empty() {
            continue;
        }

        let project_dir = output_dir.join(&project.slug);
        fs::create_dir_all(&project_dir)?;

        let results: Vec<Result<Processed, ProcessError>> = project
            .screenshots
            .par_iter()
            .map(|shot| {
                process_screenshot(shot, source_root, &project_dir, &project.slug, &fallback)
            })
            .collect();

        let mut screenshots = Vec::with_capacity(results.len());
        for (i, result) in results.into_iter().enumerate() {
            let processed = result?;
            if let Some(tx) = &progress {
                let original = &project.screenshots[i];
                tx.send(ProcessEvent::ScreenshotProcessed {
                    index: i + 1,
                    source: original
                        .source_path
                        .clone()
                        .unwrap_or_else(|| original.path.clone()),
                    output: processed.screenshot.path.clone(),
                    dimensions: processed.screenshot.dimensions,
                    status: processed.status.clone(),
                })
                .ok();
            }
            screenshots.push(processed.screenshot);
        }
        project.screenshots = screenshots;
    }

    Ok(manifest)
}

fn process_screenshot(
    shot: &Screenshot,
    source_root: &Path,
    project_dir: &Path,
    slug: &str,
    fallback: &str,
) -> Result<Processed, ProcessError> {
    let Some(rel) = shot.source_path.as_deref() else {
        return Ok(Processed {
            screenshot: shot.clone(),
            status: ScreenshotStatus::External,
        });
    };

    let source = source_root.join(rel);
    let bytes = match fs::read(&source) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(
                source = %source.display(),
                fallback,
                "screenshot missing, using fallback"
            );
            return Ok(Processed {
                screenshot: Screenshot {
                    path: fallback.to_string(),
                    source_path: shot.source_path.clone(),
                    dimensions: None,
                },
                status: ScreenshotStatus::Missing,
            });
        }
        Err(e) => return Err(e.into()),
    };

    let file_name = fingerprinted_name(&source, &content_hash(&bytes));
    let dest = project_dir.join(&file_name);
    let status = if dest.exists() {
        ScreenshotStatus::Unchanged
    } else {
        fs::write(&dest, &bytes).map_err(|source| ProcessError::Copy {
            path: dest.clone(),
            source,
        })?;
        ScreenshotStatus::Copied
    };

    Ok(Processed {
        screenshot: Screenshot {
            path: format!("{SHOTS_URL_PREFIX}/{slug}/{file_name}"),
            source_path: shot.source_path.clone(),
            dimensions: read_dimensions(&source),
        },
        status,
    })
}

/// Hex SHA-256 of `bytes`.
pub fn content_hash(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// `001-login.png` + hash → `001-login-3f9a0c12.png`.
fn fingerprinted_name(source: &Path, hash: &str) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let short = &hash[..HASH_PREFIX_LEN.min(hash.len())];
    match source.extension() {
        Some(ext) => format!(
            "{stem}-{short}.{}",
            ext.to_string_lossy().to_lowercase()
        ),
        None => format!("{stem}-{short}"),
    }
}

/// Pixel dimensions from the image header. Formats the decoder does not know
/// (SVG) have none.
fn read_dimensions(path: &Path) -> Option<(u32, u32)> {
    match image::image_dimensions(path) {
        Ok(dims) => Some(dims),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no dimensions");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan;
    use crate::test_helpers::*;
    use std::sync::mpsc;
    use tempfile::TempDir;

    fn run(content: &Path, out: &Path) -> (Manifest, Vec<ProcessEvent>) {
        let manifest = scan(content).unwrap();
        let (tx, rx) = mpsc::channel();
        let result = process_manifest(manifest, content, out, Some(tx)).unwrap();
        (result, rx.into_iter().collect())
    }

    #[test]
    fn content_hash_is_sha256_hex() {
        assert_eq!(
            content_hash(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn fingerprinted_name_keeps_stem_and_lowercases_ext() {
        let name = fingerprinted_name(Path::new("a/001-login.PNG"), "deadbeefcafe");
        assert_eq!(name, "001-login-deadbeef.png");
    }

    #[test]
    fn local_screenshots_copied_with_fingerprint() {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();
        let (manifest, _) = run(content.path(), out.path());

        let fillme = find_featured(&manifest, "fillme");
        let first = &fillme.screenshots[0];
        assert!(first.path.starts_with("/shots/fillme/001-login-"), "{}", first.path);
        assert!(first.path.ends_with(".png"));

        let file = first.path.trim_start_matches("/shots/");
        assert!(out.path().join(file).is_file());
    }

    #[test]
    fn dimensions_read_from_header() {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();
        let (manifest, _) = run(content.path(), out.path());
        let fillme = find_featured(&manifest, "fillme");
        assert_eq!(fillme.screenshots[0].dimensions, Some((4, 3)));
    }

    #[test]
    fn external_screenshots_untouched() {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();
        let (manifest, events) = run(content.path(), out.path());
        let mfds = find_featured(&manifest, "mfds");
        assert_eq!(mfds.screenshots[0].path, "/images/mfds-1.png");
        assert!(events.iter().any(|e| matches!(
            e,
            ProcessEvent::ScreenshotProcessed { status: ScreenshotStatus::External, .. }
        )));
    }

    #[test]
    fn missing_source_falls_back() {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();
        let manifest = scan(content.path()).unwrap();
        fs::remove_file(content.path().join("featured/010-fillme/002-report.png")).unwrap();

        let result = process_manifest(manifest, content.path(), out.path(), None).unwrap();
        let fillme = find_featured(&result, "fillme");
        assert_eq!(fillme.screenshots[1].path, "/assets/placeholder.svg");
        assert_eq!(fillme.screenshots[1].dimensions, None);
        // the others are still processed
        assert!(fillme.screenshots[0].path.starts_with("/shots/"));
    }

    #[test]
    fn second_run_reports_unchanged() {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();
        run(content.path(), out.path());
        let (_, events) = run(content.path(), out.path());
        let statuses: Vec<&ScreenshotStatus> = events
            .iter()
            .filter_map(|e| match e {
                ProcessEvent::ScreenshotProcessed { status, .. } => Some(status),
                _ => None,
            })
            .filter(|s| **s != ScreenshotStatus::External)
            .collect();
        assert!(!statuses.is_empty());
        assert!(statuses.iter().all(|s| **s == ScreenshotStatus::Unchanged));
    }

    #[test]
    fn events_in_project_then_screenshot_order() {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();
        let (_, events) = run(content.path(), out.path());
        match &events[0] {
            ProcessEvent::ProjectStarted {
                title,
                screenshot_count,
            } => {
                assert_eq!(title, "FillMe");
                assert_eq!(*screenshot_count, 3);
            }
            other => panic!("unexpected first event {other:?}"),
        }
        let indices: Vec<usize> = events
            .iter()
            .skip(1)
            .take(3)
            .filter_map(|e| match e {
                ProcessEvent::ScreenshotProcessed { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn process_reads_manifest_file() {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();
        let manifest = scan(content.path()).unwrap();
        let manifest_path = out.path().join("manifest.json");
        fs::write(&manifest_path, serde_json::to_string(&manifest).unwrap()).unwrap();

        let result = process(&manifest_path, content.path(), &out.path().join("processed"), None)
            .unwrap();
        assert_eq!(result.featured.len(), manifest.featured.len());
        assert_eq!(result.projects, manifest.projects);
    }
}
