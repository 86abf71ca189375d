//! Site configuration module.
//!
//! Handles loading, validating, and merging the `config.toml` in the content
//! root. Stock defaults are the base layer; the user file only needs the keys
//! it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Portfolio"
//! owner = ""
//! footer = ""
//!
//! [hero]
//! logo = "dev.folio"
//! headline = "Create. Build. Deploy."
//! subtitle = ["A developer who ships things people use, ", "", ""]
//! highlight_segment = 1        # Subtitle segment shown larger (omit for none)
//! logo_char_ms = 80
//! logo_pause_ms = 200
//! headline_char_ms = 50
//! headline_pause_ms = 300
//! subtitle_char_ms = 45
//! subtitle_pause_ms = 150
//!
//! [showcase]
//! swipe_threshold = 50.0       # px of horizontal drag that counts as a swipe
//! fallback_screenshot = "/assets/placeholder.svg"
//! default_sort = "recent"      # recent | title
//!
//! [sections]
//! epsilon = 8.0                # px slack for the "Next section" button
//!
//! [contact]
//! github = ""
//! resume = "/resume.pdf"
//! # email = "me@example.com"   # or SIMPLE_FOLIO_CONTACT_EMAIL
//! # chat = "https://..."       # or SIMPLE_FOLIO_CONTACT_CHAT
//!
//! [colors.light]
//! background = "#ffffff"
//! ...
//!
//! [processing]
//! max_processes = 4            # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! Unknown keys are rejected to catch typos early.
//!
//! ## Environment
//!
//! The contact email and chat link usually differ per deployment, so they can
//! also come from `SIMPLE_FOLIO_CONTACT_EMAIL` and `SIMPLE_FOLIO_CONTACT_CHAT`.
//! A non-blank environment value wins over the file. Absence of both is the
//! normal "not configured" state.

use crate::filter::SortBy;
use crate::sequencer::Stage;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const CONTACT_EMAIL_ENV: &str = "SIMPLE_FOLIO_CONTACT_EMAIL";
pub const CONTACT_CHAT_ENV: &str = "SIMPLE_FOLIO_CONTACT_CHAT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity shown in titles and the footer.
    pub site: SiteInfo,
    /// Landing hero text and typing cadence.
    pub hero: HeroConfig,
    /// Featured carousel and side-project showcase settings.
    pub showcase: ShowcaseConfig,
    /// Full-page section navigation on the home page.
    pub sections: SectionsConfig,
    /// Contact cards.
    pub contact: ContactConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation("site.title must not be empty".into()));
        }
        if !(self.showcase.swipe_threshold.is_finite() && self.showcase.swipe_threshold > 0.0) {
            return Err(ConfigError::Validation(
                "showcase.swipe_threshold must be a positive number".into(),
            ));
        }
        if !(self.sections.epsilon.is_finite() && self.sections.epsilon >= 0.0) {
            return Err(ConfigError::Validation(
                "sections.epsilon must be zero or positive".into(),
            ));
        }
        if let Some(i) = self.hero.highlight_segment
            && i >= self.hero.subtitle.len()
        {
            return Err(ConfigError::Validation(format!(
                "hero.highlight_segment {} is out of range ({} subtitle segments)",
                i,
                self.hero.subtitle.len()
            )));
        }
        Ok(())
    }

    /// Fill contact email/chat from the environment when set.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// [`apply_env`](Self::apply_env) with an injectable lookup, for tests.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        if let Some(email) = non_blank(CONTACT_EMAIL_ENV) {
            tracing::debug!(env = CONTACT_EMAIL_ENV, "contact email taken from environment");
            self.contact.email = Some(email);
        }
        if let Some(chat) = non_blank(CONTACT_CHAT_ENV) {
            tracing::debug!(env = CONTACT_CHAT_ENV, "contact chat taken from environment");
            self.contact.chat = Some(chat);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub title: String,
    /// Name used in the footer copyright line.
    pub owner: String,
    /// Extra footer text.
    pub footer: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            owner: String::new(),
            footer: String::new(),
        }
    }
}

/// Landing hero: three text fields revealed by the typing sequencer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    pub logo: String,
    pub headline: String,
    /// Subtitle segments, revealed left to right.
    pub subtitle: Vec<String>,
    /// Index of the subtitle segment rendered with emphasis.
    pub highlight_segment: Option<usize>,
    pub logo_char_ms: u64,
    pub logo_pause_ms: u64,
    pub headline_char_ms: u64,
    pub headline_pause_ms: u64,
    pub subtitle_char_ms: u64,
    pub subtitle_pause_ms: u64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            logo: "dev.folio".to_string(),
            headline: "Create. Build. Deploy.".to_string(),
            subtitle: vec![
                "A developer who ships things people use, ".to_string(),
                String::new(),
                String::new(),
            ],
            highlight_segment: Some(1),
            logo_char_ms: 80,
            logo_pause_ms: 200,
            headline_char_ms: 50,
            headline_pause_ms: 300,
            subtitle_char_ms: 45,
            subtitle_pause_ms: 150,
        }
    }
}

impl HeroConfig {
    /// Sequencer stages: logo, headline, then one per subtitle segment.
    pub fn stages(&self) -> Vec<Stage> {
        let ms = Duration::from_millis;
        let mut stages = vec![
            Stage::new(&self.logo, ms(self.logo_char_ms), ms(self.logo_pause_ms)),
            Stage::new(
                &self.headline,
                ms(self.headline_char_ms),
                ms(self.headline_pause_ms),
            ),
        ];
        stages.extend(self.subtitle.iter().map(|segment| {
            Stage::new(
                segment,
                ms(self.subtitle_char_ms),
                ms(self.subtitle_pause_ms),
            )
        }));
        stages
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Horizontal drag in pixels that counts as a swipe.
    pub swipe_threshold: f64,
    /// Image shown when a screenshot fails to load or is missing.
    pub fallback_screenshot: String,
    /// Initial sort order of the side-project list.
    pub default_sort: SortBy,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: crate::carousel::SWIPE_THRESHOLD_PX,
            fallback_screenshot: "/assets/placeholder.svg".to_string(),
            default_sort: SortBy::Recent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SectionsConfig {
    pub epsilon: f64,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            epsilon: crate::sections::DEFAULT_EPSILON_PX,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    /// GitHub profile URL; empty hides the card.
    pub github: String,
    /// Resume link; empty hides the card.
    pub resume: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            github: String::new(),
            resume: "/resume.pdf".to_string(),
            email: None,
            chat: None,
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel screenshot workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config
        .max_processes
        .map(|n| n.clamp(1, cores))
        .unwrap_or(cores)
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Background of cards and slides.
    pub surface: String,
    pub text: String,
    /// Secondary text (periods, captions, hints).
    pub text_muted: String,
    pub border: String,
    /// Links, active chips, carousel dots.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#f8fafc".to_string(),
            surface: "#ffffff".to_string(),
            text: "#0f172a".to_string(),
            text_muted: "#64748b".to_string(),
            border: "#e2e8f0".to_string(),
            accent: "#0284c7".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#020617".to_string(),
            surface: "#0f172a".to_string(),
            text: "#f1f5f9".to_string(),
            text_muted: "#94a3b8".to_string(),
            border: "#1e293b".to_string(),
            accent: "#38bdf8".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// applies environment overrides, and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    let mut config = resolve_config(base, overlay)?;
    config.apply_env();
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Folio Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
title = "Portfolio"
# Name in the footer copyright line.
owner = ""
footer = ""

# ---------------------------------------------------------------------------
# Landing hero (typed text)
# ---------------------------------------------------------------------------
[hero]
logo = "dev.folio"
headline = "Create. Build. Deploy."
# Segments are typed left to right; finished segments stay visible.
subtitle = ["A developer who ships things people use, ", "", ""]
# Segment rendered with emphasis (e.g. your name). Remove for none.
highlight_segment = 1

# Per-character delay and trailing pause of each stage, in milliseconds.
logo_char_ms = 80
logo_pause_ms = 200
headline_char_ms = 50
headline_pause_ms = 300
subtitle_char_ms = 45
subtitle_pause_ms = 150

# ---------------------------------------------------------------------------
# Featured carousel and side-project showcase
# ---------------------------------------------------------------------------
[showcase]
# Horizontal drag, in pixels, that counts as a swipe.
swipe_threshold = 50.0
# Shown when a screenshot is missing or fails to load.
fallback_screenshot = "/assets/placeholder.svg"
# Initial order of the side-project list: "recent" or "title".
default_sort = "recent"

# ---------------------------------------------------------------------------
# Home page sections
# ---------------------------------------------------------------------------
[sections]
# A section whose top is within this many pixels of the scroll position
# counts as the current one for the "Next" button.
epsilon = 8.0

# ---------------------------------------------------------------------------
# Contact
# ---------------------------------------------------------------------------
[contact]
github = ""
resume = "/resume.pdf"
# Also read from SIMPLE_FOLIO_CONTACT_EMAIL / SIMPLE_FOLIO_CONTACT_CHAT.
# email = "me@example.com"
# chat = "https://open.kakao.com/..."

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#f8fafc"
surface = "#ffffff"
text = "#0f172a"
text_muted = "#64748b"
border = "#e2e8f0"
accent = "#0284c7"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#020617"
surface = "#0f172a"
text = "#f1f5f9"
text_muted = "#94a3b8"
border = "#1e293b"
accent = "#38bdf8"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel screenshot workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-surface: {light_surface};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-surface: {dark_surface};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_surface = colors.light.surface,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_surface = colors.dark.surface,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
    )
}
