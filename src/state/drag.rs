//! Drag Session - pointer/touch swipe state machine
//!
//! ```text
//!          start(x)                         end / cancel
//!   Idle ─────────▶ Dragging{start, offset} ─────────▶ Idle
//!                        │  ▲
//!                        └──┘ move(x): offset = x - start
//! ```
//!
//! The session owns the document-level listener ids registered when it
//! began. Leaving `Dragging` hands them back so they are removed on every
//! exit path.

use crate::types::{ListenerId, PointerSource};

/// Fraction of a step a drag must cover to commit a navigation.
pub const DRAG_COMMIT_RATIO: f64 = 0.25;

/// What a finished drag does to the current index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Dragged left past the threshold.
    Forward,
    /// Dragged right past the threshold.
    Backward,
    /// Below threshold: settle back on the current slide.
    Snap,
}

impl DragOutcome {
    /// Decide the outcome of a drag of `offset` pixels.
    pub fn resolve(offset: f64, step_width: f64) -> Self {
        if offset.abs() > step_width * DRAG_COMMIT_RATIO {
            if offset < 0.0 { Self::Forward } else { Self::Backward }
        } else {
            Self::Snap
        }
    }

    /// Index delta to apply.
    pub fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
            Self::Snap => 0,
        }
    }
}

/// A live gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    source: PointerSource,
    start: f64,
    offset: f64,
    listeners: Vec<ListenerId>,
}

impl DragSession {
    pub fn new(source: PointerSource, start: f64, listeners: Vec<ListenerId>) -> Self {
        Self {
            source,
            start,
            offset: 0.0,
            listeners,
        }
    }

    /// Track the pointer; returns the signed offset from the start.
    pub fn update(&mut self, position: f64) -> f64 {
        self.offset = position - self.start;
        self.offset
    }

    pub fn source(&self) -> PointerSource {
        self.source
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn into_listeners(self) -> Vec<ListenerId> {
        self.listeners
    }

    pub fn outcome(&self, step_width: f64) -> DragOutcome {
        DragOutcome::resolve(self.offset, step_width)
    }
}

/// Gesture state of one carousel.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Enter `Dragging`, returning a session that was still live.
    pub fn begin(&mut self, session: DragSession) -> Option<DragSession> {
        match std::mem::replace(self, Self::Dragging(session)) {
            Self::Dragging(stale) => Some(stale),
            Self::Idle => None,
        }
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Return to `Idle`, yielding the session that ended.
    pub fn finish(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}
