//! Search, filter and sort for the side-project showcase.
//!
//! [`filter`] is a pure function from a static project list and the current
//! [`FilterCriteria`] to the ordered list to display. Each step is skipped
//! when its criterion is at the default:
//!
//! 1. **Text**: the trimmed, lowercased query must occur in the title, the
//!    summary, or any tag (case-insensitive substring).
//! 2. **Type**: the project type must equal the selected one, unless `All`.
//! 3. **Stack**: every selected stack tag must be in the project's stack
//!    (AND across selections).
//! 4. **Sort**: `recent` orders by the period label descending, `title` by
//!    title ascending.
//!
//! `recent` compares period labels as strings. That is only chronological
//! because every label starts with `YYYY.MM`; a label in any other format
//! sorts wherever its characters put it. Projects without a period sort last.
//!
//! Both sorts are stable, so equal keys keep source order.

use crate::types::{ProjectType, SideProject};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Recent,
    Title,
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recent" => Ok(SortBy::Recent),
            "title" => Ok(SortBy::Title),
            other => Err(format!("unknown sort order '{other}' (expected recent or title)")),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Recent => f.write_str("recent"),
            SortBy::Title => f.write_str("title"),
        }
    }
}

/// Type selector: a single [`ProjectType`] or the wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ProjectType),
}

impl TypeFilter {
    fn matches(&self, project: &SideProject) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => project.project_type == Some(*t),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(TypeFilter::All);
        }
        ProjectType::from_label(s)
            .map(TypeFilter::Only)
            .ok_or_else(|| format!("unknown project type '{s}'"))
    }
}

/// Current search/filter/sort selection of the showcase page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub query: String,
    pub project_type: TypeFilter,
    pub stacks: BTreeSet<String>,
    pub sort_by: SortBy,
}

impl FilterCriteria {
    /// Add the tag if absent, remove it if present (a filter chip click).
    pub fn toggle_stack(&mut self, stack: &str) {
        if !self.stacks.remove(stack) {
            self.stacks.insert(stack.to_string());
        }
    }

    /// True when no criterion narrows the list.
    pub fn is_unfiltered(&self) -> bool {
        self.query.trim().is_empty()
            && self.project_type == TypeFilter::All
            && self.stacks.is_empty()
    }
}

/// Result of applying criteria, with the empty case kept distinct so the
/// page can render a "no results" block instead of an empty grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Showcase<'a> {
    Results(Vec<&'a SideProject>),
    NoResults,
}

impl<'a> Showcase<'a> {
    pub fn from_list(list: Vec<&'a SideProject>) -> Self {
        if list.is_empty() {
            Showcase::NoResults
        } else {
            Showcase::Results(list)
        }
    }

    pub fn projects(&self) -> &[&'a SideProject] {
        match self {
            Showcase::Results(list) => list,
            Showcase::NoResults => &[],
        }
    }
}

fn matches_query(project: &SideProject, needle: &str) -> bool {
    project.title.to_lowercase().contains(needle)
        || project.summary.to_lowercase().contains(needle)
        || project
            .tags
            .iter()
            .any(|t| t.to_lowercase().contains(needle))
}

fn has_all_stacks(project: &SideProject, stacks: &BTreeSet<String>) -> bool {
    stacks.iter().all(|s| project.stack.iter().any(|p| p == s))
}

/// Apply `criteria` to `source` without modifying either.
pub fn filter<'a>(source: &'a [SideProject], criteria: &FilterCriteria) -> Vec<&'a SideProject> {
    let needle = criteria.query.trim().to_lowercase();

    let mut rows: Vec<&SideProject> = source
        .iter()
        .filter(|p| needle.is_empty() || matches_query(p, &needle))
        .filter(|p| criteria.project_type.matches(p))
        .filter(|p| has_all_stacks(p, &criteria.stacks))
        .collect();

    match criteria.sort_by {
        SortBy::Recent => rows.sort_by(|a, b| {
            let a = a.period.as_deref().unwrap_or("");
            let b = b.period.as_deref().unwrap_or("");
            b.cmp(a)
        }),
        SortBy::Title => rows.sort_by(|a, b| a.title.cmp(&b.title)),
    }

    rows
}

/// [`filter`], classified into results or the empty state.
pub fn showcase<'a>(source: &'a [SideProject], criteria: &FilterCriteria) -> Showcase<'a> {
    Showcase::from_list(filter(source, criteria))
}

/// Every stack tag used by any project, sorted and deduplicated.
pub fn all_stacks(source: &[SideProject]) -> Vec<String> {
    source
        .iter()
        .flat_map(|p| p.stack.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, period: Option<&str>, stack: &[&str]) -> SideProject {
        SideProject {
            id: title.to_lowercase().replace(' ', "-"),
            title: title.to_string(),
            period: period.map(str::to_string),
            summary: String::new(),
            status: None,
            project_type: Some(ProjectType::App),
            stack: stack.iter().map(|s| s.to_string()).collect(),
            tags: Vec::new(),
            cover: None,
            github: None,
            live: None,
            phase: None,
            highlights: Vec::new(),
            problems: Vec::new(),
            solutions: Vec::new(),
        }
    }

    fn sample() -> Vec<SideProject> {
        let mut note = project("Note Suite", Some("2024.02"), &["TypeScript", "Electron"]);
        note.summary = "Offline markdown notes".into();
        let mut ledger = project("FLOWIN Ledger", Some("2025.09"), &["TypeScript", "Chart.js"]);
        ledger.tags = vec!["Fintech".into()];
        let mut dailyon = project("Dailyon", Some("2024.08"), &["React", "Spring Boot"]);
        dailyon.project_type = Some(ProjectType::Web);
        dailyon.tags = vec!["AI".into(), "PWA".into()];
        vec![note, ledger, dailyon]
    }

    fn titles(list: &[&SideProject]) -> Vec<String> {
        list.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn recent_sort_orders_periods_descending() {
        let source = sample();
        let list = filter(&source, &FilterCriteria::default());
        let periods: Vec<_> = list.iter().map(|p| p.period.as_deref().unwrap()).collect();
        assert_eq!(periods, vec!["2025.09", "2024.08", "2024.02"]);
    }

    #[test]
    fn title_sort_is_case_sensitive_ascending() {
        let source = sample();
        let criteria = FilterCriteria {
            sort_by: SortBy::Title,
            ..Default::default()
        };
        // uppercase sorts before lowercase in byte order
        assert_eq!(
            titles(&filter(&source, &criteria)),
            vec!["Dailyon", "FLOWIN Ledger", "Note Suite"]
        );
    }

    #[test]
    fn query_matches_title_case_insensitively() {
        let source = sample();
        let criteria = FilterCriteria {
            query: "  flow ".into(),
            ..Default::default()
        };
        assert_eq!(titles(&filter(&source, &criteria)), vec!["FLOWIN Ledger"]);
    }

    #[test]
    fn query_matches_summary_and_tags() {
        let source = sample();
        let by_summary = FilterCriteria {
            query: "MARKDOWN".into(),
            ..Default::default()
        };
        assert_eq!(titles(&filter(&source, &by_summary)), vec!["Note Suite"]);

        let by_tag = FilterCriteria {
            query: "pwa".into(),
            ..Default::default()
        };
        assert_eq!(titles(&filter(&source, &by_tag)), vec!["Dailyon"]);
    }

    #[test]
    fn unmatched_query_is_no_results() {
        let source = sample();
        let criteria = FilterCriteria {
            query: "zzz".into(),
            ..Default::default()
        };
        assert_eq!(showcase(&source, &criteria), Showcase::NoResults);
        assert!(showcase(&source, &criteria).projects().is_empty());
    }

    #[test]
    fn type_filter_keeps_only_selected_type() {
        let source = sample();
        let criteria = FilterCriteria {
            project_type: TypeFilter::Only(ProjectType::Web),
            ..Default::default()
        };
        assert_eq!(titles(&filter(&source, &criteria)), vec!["Dailyon"]);
    }

    #[test]
    fn stack_filter_requires_every_selected_tag() {
        let source = sample();
        let mut criteria = FilterCriteria::default();
        criteria.toggle_stack("TypeScript");
        assert_eq!(filter(&source, &criteria).len(), 2);
        criteria.toggle_stack("Electron");
        assert_eq!(titles(&filter(&source, &criteria)), vec!["Note Suite"]);
        criteria.toggle_stack("Electron");
        assert_eq!(filter(&source, &criteria).len(), 2);
    }

    #[test]
    fn adding_a_stack_never_grows_results() {
        let source = sample();
        let mut criteria = FilterCriteria::default();
        let mut previous = filter(&source, &criteria).len();
        for stack in all_stacks(&source) {
            criteria.toggle_stack(&stack);
            let now = filter(&source, &criteria).len();
            assert!(now <= previous);
            previous = now;
        }
    }

    #[test]
    fn filtering_twice_is_stable() {
        let source = sample();
        let criteria = FilterCriteria {
            query: "a".into(),
            sort_by: SortBy::Title,
            ..Default::default()
        };
        let once: Vec<SideProject> = filter(&source, &criteria).into_iter().cloned().collect();
        let twice: Vec<SideProject> = filter(&once, &criteria).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_period_sorts_last_under_recent() {
        let mut source = sample();
        source.push(project("Undated", None, &[]));
        let list = filter(&source, &FilterCriteria::default());
        assert_eq!(list.last().unwrap().title, "Undated");
    }

    #[test]
    fn all_stacks_sorted_unique() {
        let source = sample();
        assert_eq!(
            all_stacks(&source),
            vec!["Chart.js", "Electron", "React", "Spring Boot", "TypeScript"]
        );
    }

    #[test]
    fn parse_selectors() {
        assert_eq!("title".parse::<SortBy>().unwrap(), SortBy::Title);
        assert!("newest".parse::<SortBy>().is_err());
        assert_eq!("All".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!(
            "cli".parse::<TypeFilter>().unwrap(),
            TypeFilter::Only(ProjectType::Cli)
        );
    }

    #[test]
    fn unfiltered_criteria() {
        let mut c = FilterCriteria::default();
        assert!(c.is_unfiltered());
        c.query = "   ".into();
        assert!(c.is_unfiltered());
        c.toggle_stack("Rust");
        assert!(!c.is_unfiltered());
    }
}
