//! Index arithmetic for the featured-project carousels.
//!
//! The home page shows two levels of slides: an outer carousel over featured
//! projects, and for every project an inner carousel over its screenshots.
//! Both are the same [`Carousel`]: a current position in a fixed-length list
//! with wraparound navigation.
//!
//! ## Navigation
//!
//! ```text
//! next()   index = (index + 1) mod len
//! prev()   index = (index - 1 + len) mod len
//! goto(i)  index = i            if 0 <= i < len, otherwise ignored
//! ```
//!
//! A carousel with `len == 0` is the empty state: the index is pinned at 0
//! and every navigation call is a no-op. The page renders a placeholder.
//!
//! ## Swipes
//!
//! Touch navigation records the x coordinate on touch-start and compares it
//! with the x coordinate on touch-end. A drag further than the threshold
//! (50 px unless configured otherwise) to the left means "next", to the right
//! means "prev"; anything shorter is a tap.
//!
//! ## Nesting
//!
//! [`NestedCarousel`] keeps one inner carousel per outer slide. Moving the
//! outer carousel never touches the inner ones, so every project remembers
//! the screenshot it was last showing.
//!
//! The browser runtime (`static/folio.js`) mirrors this module; the generator
//! uses it to render the initial transforms and dot indicators.

use serde::{Deserialize, Serialize};

/// Minimum horizontal drag, in pixels, that counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Position within a fixed-length ordered list of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// A carousel over `len` slides, starting at the first one.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to an absolute position. Out-of-range requests are ignored.
    ///
    /// Returns whether the index was accepted.
    pub fn goto(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Apply a classified swipe.
    pub fn apply(&mut self, swipe: Swipe) {
        match swipe {
            Swipe::Next => self.next(),
            Swipe::Prev => self.prev(),
            Swipe::None => {}
        }
    }

    /// Horizontal translation of the slide track, in percent of the track width.
    ///
    /// The track is `len` slides wide, so each slide occupies `100 / len`
    /// percent of it.
    pub fn offset_percent(&self) -> f64 {
        if self.len == 0 {
            0.0
        } else {
            self.index as f64 * (100.0 / self.len as f64)
        }
    }

    /// CSS `transform` value for the current position.
    pub fn transform_css(&self) -> String {
        let offset = self.offset_percent();
        if offset == 0.0 {
            "translateX(0%)".to_string()
        } else {
            format!("translateX(-{}%)", trim_float(offset))
        }
    }

    /// Inline style of the slide track: `len` slides wide, shifted to the
    /// current one. An empty carousel gets a single-slide track.
    pub fn track_style(&self) -> String {
        format!(
            "width: {}%; transform: {};",
            self.len.max(1) * 100,
            self.transform_css()
        )
    }

    /// Inline style of one slide: its share of the track width.
    pub fn slide_style(&self) -> String {
        format!("width: {}%;", trim_float(100.0 / self.len.max(1) as f64))
    }
}

/// Format with at most four decimals and no trailing zeros.
fn trim_float(value: f64) -> String {
    let s = format!("{:.4}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Outcome of a touch gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Prev,
    None,
}

/// Classify a drag from `start_x` to `end_x`.
///
/// `delta = start_x - end_x`; dragging left (positive delta) past the
/// threshold advances, dragging right past it goes back.
pub fn classify_swipe(start_x: f64, end_x: f64, threshold: f64) -> Swipe {
    let delta = start_x - end_x;
    if delta > threshold {
        Swipe::Next
    } else if delta < -threshold {
        Swipe::Prev
    } else {
        Swipe::None
    }
}

/// Touch-start / touch-end pairing for one gesture at a time.
#[derive(Debug, Clone)]
pub struct SwipeGesture {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeGesture {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the gesture. A touch-end without a touch-start is not a swipe.
    pub fn touch_end(&mut self, x: f64) -> Swipe {
        match self.start_x.take() {
            Some(start) => classify_swipe(start, x, self.threshold),
            None => Swipe::None,
        }
    }
}

impl Default for SwipeGesture {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

/// Outer carousel over projects, one inner carousel per project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedCarousel {
    outer: Carousel,
    inner: Vec<Carousel>,
}

impl NestedCarousel {
    /// Build from the number of inner slides (screenshots) of each outer slide.
    pub fn new(inner_lens: &[usize]) -> Self {
        Self {
            outer: Carousel::new(inner_lens.len()),
            inner: inner_lens.iter().map(|&n| Carousel::new(n)).collect(),
        }
    }

    pub fn outer(&self) -> &Carousel {
        &self.outer
    }

    pub fn outer_mut(&mut self) -> &mut Carousel {
        &mut self.outer
    }

    pub fn inner(&self, slide: usize) -> Option<&Carousel> {
        self.inner.get(slide)
    }

    pub fn inner_mut(&mut self, slide: usize) -> Option<&mut Carousel> {
        self.inner.get_mut(slide)
    }

    /// Inner carousel of the slide currently shown by the outer carousel.
    pub fn current_inner(&self) -> Option<&Carousel> {
        self.inner.get(self.outer.index())
    }

    pub fn current_inner_mut(&mut self) -> Option<&mut Carousel> {
        self.inner.get_mut(self.outer.index())
    }

    /// Inner indices, one per outer slide.
    pub fn inner_indices(&self) -> Vec<usize> {
        self.inner.iter().map(Carousel::index).collect()
    }
}
