//! # Simple Folio
//!
//! A minimal static site generator for developer portfolios.
//! Your filesystem is the data source: TOML files describe featured projects,
//! side projects and career milestones, markdown files become pages and
//! TechLog posts, and screenshots are ordered by numeric prefix.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! Content goes through three independent stages, each producing a JSON
//! manifest that the next stage consumes:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (filesystem → structured data)
//! 2. Process   manifest  →  processed/       (fingerprinted screenshots + dimensions)
//! 3. Generate  manifest  →  dist/            (final HTML site)
//! ```
//!
//! Every manifest is human-readable JSON you can inspect, and each stage can be
//! run on its own from the CLI.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: walks the content directory and produces the manifest |
//! | [`process`] | Stage 2: fingerprints and copies screenshots, reads their dimensions |
//! | [`generate`] | Stage 3: renders the final HTML site with Maud |
//! | [`config`] | `config.toml` loading, validation, env overrides and CSS generation |
//! | [`types`] | Shared types serialized between stages |
//! | [`naming`] | `NNN-name` filename convention and slugs |
//! | [`sequencer`] | Typing-animation timeline for the landing hero |
//! | [`sections`] | Full-page section tracking and the "Next" target |
//! | [`carousel`] | Outer project slider and nested screenshot carousels |
//! | [`filter`] | Side-project search, type/stack filters and sort |
//! | [`highlight`] | Line-numbered code-block highlighting for TechLog samples |
//! | [`contact`] | Contact cards with configuration hints |
//! | [`routes`] | Route table, protected-path redirects and not-found |
//! | [`output`] | CLI output formatting for every stage |
//!
//! # Design Decisions
//!
//! ## Interactive State Computed at Build Time
//!
//! The typing timeline, the carousel positions, the section list and the
//! default project order are computed in Rust and written into the page. The
//! small script in `static/folio.js` only replays and updates that state, so
//! a page without JavaScript still shows every section in its initial state.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time HTML
//! macro system. Malformed markup is a build error and all interpolation is
//! auto-escaped.
//!
//! ## NNN-Prefix Ordering
//!
//! Files and directories use a numeric prefix (`001-`, `020-`, etc.) for
//! explicit ordering, parsed by [`naming::parse_entry_name`]. Pages without a
//! prefix are built but hidden from navigation.
//!
//! ## Fingerprinted Screenshots
//!
//! Screenshot filenames carry a content hash, so they can be cached forever
//! and a rebuild with unchanged files copies nothing.

pub mod carousel;
pub mod config;
pub mod contact;
pub mod filter;
pub mod generate;
pub mod highlight;
pub mod naming;
pub mod output;
pub mod process;
pub mod routes;
pub mod scan;
pub mod sections;
pub mod sequencer;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
