//! Filename conventions shared by every content type.
//!
//! Pages, featured projects, career entries, TechLog posts and screenshots all
//! use an optional numeric prefix for ordering: `NNN-name`. Numbered entries
//! are listed in number order; unnumbered pages are built but left out of the
//! menu.
//!
//! - `020-flowin-ledger/` → number 20, slug `flowin-ledger`
//! - `001-dashboard.png` → number 1, title "dashboard"
//! - `040-about-me.md` → number 40, link title "about me"

/// Result of parsing a numbered entry name like `020-flowin-ledger`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Number prefix if present (e.g., `20` from `020-flowin-ledger`)
    pub number: Option<u32>,
    /// Raw name part after `NNN-`, dashes preserved. Empty if number-only.
    /// For unnumbered entries, this is the full input.
    pub name: String,
    /// Display title: name with dashes converted to spaces.
    pub display_title: String,
}

impl ParsedName {
    /// Key that orders numbered entries first, by number, then the rest.
    pub fn sort_key(&self) -> u32 {
        self.number.unwrap_or(u32::MAX)
    }
}

/// Parse an entry name following the `NNN-name` convention.
///
/// - `"020-My-Side-Project"` → number=Some(20), name="My-Side-Project", display_title="My Side Project"
/// - `"001"` → number=Some(1), name="", display_title=""
/// - `"001-"` → number=Some(1), name="", display_title=""
/// - `"drafts"` → number=None, name="drafts", display_title="drafts"
pub fn parse_entry_name(name: &str) -> ParsedName {
    if let Some((prefix, rest)) = name.split_once('-')
        && let Ok(num) = prefix.parse::<u32>()
    {
        return ParsedName {
            number: Some(num),
            name: rest.to_string(),
            display_title: rest.replace('-', " "),
        };
    }
    if let Ok(num) = name.parse::<u32>() {
        return ParsedName {
            number: Some(num),
            name: String::new(),
            display_title: String::new(),
        };
    }
    ParsedName {
        number: None,
        name: name.to_string(),
        display_title: name.replace('-', " "),
    }
}

/// URL slug: lowercase, runs of anything but letters and digits collapsed
/// to a single dash, no leading or trailing dash. Non-ASCII letters are kept
/// as they are, so a Hangul or accented name still has a slug.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_with_multi_word_name() {
        let p = parse_entry_name("020-flowin-ledger");
        assert_eq!(p.number, Some(20));
        assert_eq!(p.name, "flowin-ledger");
        assert_eq!(p.display_title, "flowin ledger");
    }

    #[test]
    fn number_only_no_dash() {
        let p = parse_entry_name("001");
        assert_eq!(p.number, Some(1));
        assert_eq!(p.name, "");
        assert_eq!(p.display_title, "");
    }

    #[test]
    fn number_with_trailing_dash() {
        let p = parse_entry_name("001-");
        assert_eq!(p.number, Some(1));
        assert_eq!(p.name, "");
    }

    #[test]
    fn unnumbered_keeps_full_name() {
        let p = parse_entry_name("wip-notes");
        assert_eq!(p.number, None);
        assert_eq!(p.name, "wip-notes");
        assert_eq!(p.display_title, "wip notes");
        assert_eq!(p.sort_key(), u32::MAX);
    }

    #[test]
    fn non_numeric_prefix_is_unnumbered() {
        let p = parse_entry_name("v2-release");
        assert_eq!(p.number, None);
        assert_eq!(p.name, "v2-release");
    }

    #[test]
    fn zero_prefix() {
        let p = parse_entry_name("000-first");
        assert_eq!(p.number, Some(0));
        assert_eq!(p.sort_key(), 0);
    }

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Note – Electron Productivity Suite"), "note-electron-productivity-suite");
        assert_eq!(slugify("  React 18 "), "react-18");
        assert_eq!(slugify("Chart.js"), "chart-js");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slugify_keeps_unicode_letters() {
        assert_eq!(slugify("신현우"), "신현우");
        assert_eq!(slugify("소개 페이지"), "소개-페이지");
        assert_eq!(slugify("Café Déjà"), "café-déjà");
    }
}
