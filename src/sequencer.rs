//! Typed text reveal for the landing hero.
//!
//! A [`Sequencer`] reveals a list of strings one character at a time, stage by
//! stage. A stage is fully revealed, then holds for its trailing pause, before
//! the next stage starts. Earlier stages stay fully visible.
//!
//! The sequencer is a plain state machine driven from outside. The host
//! calls [`Sequencer::tick`] from a timer callback with the current time and
//! asks [`Sequencer::next_wake`] when to call again:
//!
//! ```text
//! tick(now) ─► frames due at or before `now`
//! next_wake() ─► Some(t)  schedule the next callback at t
//!                None     finished or cancelled, stop scheduling
//! ```
//!
//! Time comes from a [`Clock`]. The generator runs the hero sequence on a
//! [`ManualClock`] at build time and embeds the resulting timeline in the
//! page, so the browser only replays timestamps.
//!
//! Teardown goes through a [`CancelToken`]. The token is checked before every
//! update; once cancelled the sequencer emits nothing and schedules nothing.

use serde::Serialize;
use std::cell::Cell;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// One string to reveal.
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    pub text: String,
    /// Delay after each revealed character.
    pub char_delay: Duration,
    /// Hold after the stage is complete, before the next one starts.
    pub pause_after: Duration,
}

impl Stage {
    pub fn new(text: impl Into<String>, char_delay: Duration, pause_after: Duration) -> Self {
        Self {
            text: text.into(),
            char_delay,
            pause_after,
        }
    }
}

/// A revealed prefix for one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub stage: usize,
    pub text: String,
}

/// A frame with the time it became due, relative to the sequence start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyframe {
    pub at_ms: u64,
    pub stage: usize,
    pub text: String,
}

/// Source of "now" for driving a sequencer.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Liveness flag shared between a sequencer and the view that owns it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Next due step reveals character `chars + 1` of `stage`.
    Revealing { stage: usize, chars: usize },
    /// Stage is complete; next due step moves past its pause.
    Pausing { stage: usize },
    Done,
}

#[derive(Debug)]
pub struct Sequencer {
    stages: Vec<Stage>,
    /// Character counts per stage, so exhaustion checks never rescan the text.
    lengths: Vec<usize>,
    revealed: Vec<String>,
    state: State,
    due: Duration,
    token: CancelToken,
}

impl Sequencer {
    /// Start a sequence at time `start`.
    pub fn new(stages: Vec<Stage>, start: Duration, token: CancelToken) -> Self {
        let lengths = stages.iter().map(|s| s.text.chars().count()).collect();
        let revealed = vec![String::new(); stages.len()];
        let state = if stages.is_empty() {
            State::Done
        } else {
            State::Revealing { stage: 0, chars: 0 }
        };
        let mut seq = Self {
            stages,
            lengths,
            revealed,
            state,
            due: start,
            token,
        };
        seq.skip_exhausted_stage();
        seq
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    /// Current prefix of every stage, in stage order.
    pub fn revealed(&self) -> &[String] {
        &self.revealed
    }

    pub fn is_finished(&self) -> bool {
        self.state == State::Done
    }

    /// When the host should call [`tick`](Self::tick) next.
    pub fn next_wake(&self) -> Option<Duration> {
        if self.token.is_cancelled() || self.state == State::Done {
            None
        } else {
            Some(self.due)
        }
    }

    /// Run every step due at or before `now`, returning the emitted frames.
    pub fn tick(&mut self, now: Duration) -> Vec<Frame> {
        let mut frames = Vec::new();
        while let Some(due) = self.next_wake() {
            if due > now {
                break;
            }
            if let Some(frame) = self.step() {
                frames.push(frame);
            }
        }
        frames
    }

    /// Tick using the time reported by `clock`.
    pub fn tick_with(&mut self, clock: &impl Clock) -> Vec<Frame> {
        self.tick(clock.now())
    }

    fn step(&mut self) -> Option<Frame> {
        match self.state {
            State::Revealing { stage, chars } => {
                let chars = chars + 1;
                let full = &self.stages[stage].text;
                let end = full.char_indices().nth(chars).map_or(full.len(), |(i, _)| i);
                let text = full[..end].to_string();
                self.revealed[stage].clone_from(&text);
                self.due += self.stages[stage].char_delay;
                self.state = State::Revealing { stage, chars };
                self.skip_exhausted_stage();
                Some(Frame { stage, text })
            }
            State::Pausing { stage } => {
                self.due += self.stages[stage].pause_after;
                self.state = if stage + 1 < self.stages.len() {
                    State::Revealing {
                        stage: stage + 1,
                        chars: 0,
                    }
                } else {
                    State::Done
                };
                self.skip_exhausted_stage();
                None
            }
            State::Done => None,
        }
    }

    /// A stage with every character shown goes straight to its pause. Empty
    /// stages therefore reveal nothing and only contribute their pause.
    fn skip_exhausted_stage(&mut self) {
        if let State::Revealing { stage, chars } = self.state
            && chars >= self.lengths[stage]
        {
            self.state = State::Pausing { stage };
        }
    }
}

/// Run a sequence to completion on a manual clock and record when each frame
/// became due.
pub fn render_timeline(stages: Vec<Stage>) -> Vec<Keyframe> {
    let clock = ManualClock::new();
    let mut seq = Sequencer::new(stages, clock.now(), CancelToken::new());
    let mut keyframes = Vec::new();
    while let Some(wake) = seq.next_wake() {
        clock.set(wake);
        for frame in seq.tick_with(&clock) {
            keyframes.push(Keyframe {
                at_ms: wake.as_millis() as u64,
                stage: frame.stage,
                text: frame.text,
            });
        }
    }
    keyframes
}
