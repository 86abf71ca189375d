//! Tracking which full-page section of the home page is in view.
//!
//! The home page is a column of scroll-snapped, viewport-height sections.
//! The browser reports visibility changes in batches (one entry per section
//! whose intersection ratio crossed a threshold); [`SectionTracker::observe`]
//! folds each batch into a current index.
//!
//! Selection rule: among the entries that are intersecting, the highest
//! ratio wins. Equal ratios go to the section registered first, whatever
//! order the batch lists them in. A batch with nothing intersecting leaves
//! the current index alone.
//!
//! The "Next" button uses [`SectionTracker::next_target`]: the first section
//! whose top lies more than `epsilon` pixels below the scroll position, or
//! the first section again when already at the bottom.

use serde::Serialize;

/// Slack, in pixels, so a section snapped exactly at the top is not "next".
pub const DEFAULT_EPSILON_PX: f64 = 8.0;

/// One visibility report for a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visibility<'a> {
    pub id: &'a str,
    pub ratio: f64,
    pub intersecting: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionTracker {
    ids: Vec<String>,
    current: usize,
    epsilon: f64,
}

impl SectionTracker {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_epsilon(ids, DEFAULT_EPSILON_PX)
    }

    pub fn with_epsilon<I, S>(ids: I, epsilon: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            current: 0,
            epsilon,
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_id(&self) -> Option<&str> {
        self.ids.get(self.current).map(String::as_str)
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|s| s == id)
    }

    /// Fold a batch of visibility reports into the current index.
    ///
    /// Entries for ids that were never registered are ignored.
    pub fn observe(&mut self, batch: &[Visibility<'_>]) -> usize {
        let best = batch
            .iter()
            .filter(|v| v.intersecting)
            .filter_map(|v| self.position(v.id).map(|pos| (pos, v.ratio)))
            .fold(None::<(usize, f64)>, |best, (pos, ratio)| match best {
                Some((best_pos, best_ratio))
                    if best_ratio > ratio || (best_ratio == ratio && best_pos < pos) =>
                {
                    Some((best_pos, best_ratio))
                }
                _ => Some((pos, ratio)),
            });

        if let Some((pos, _)) = best {
            self.current = pos;
        }
        self.current
    }

    /// Section to scroll to from `scroll_y`.
    ///
    /// `tops` gives each registered section's top offset, in registration
    /// order; `None` marks a section that is not on the page and is skipped.
    /// Returns `None` only when no section is present at all.
    pub fn next_target(&self, scroll_y: f64, tops: &[Option<f64>]) -> Option<&str> {
        let present: Vec<(&str, f64)> = self
            .ids
            .iter()
            .zip(tops.iter())
            .filter_map(|(id, top)| top.map(|t| (id.as_str(), t)))
            .collect();

        present
            .iter()
            .find(|(_, top)| *top > scroll_y + self.epsilon)
            .or_else(|| present.first())
            .map(|(id, _)| *id)
    }
}
