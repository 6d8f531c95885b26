//! Carousel Engine - instances and the page runtime that drives them.
//!
//! - [`Carousel`]: one slider's position, drag, autoplay and responsive state
//! - [`Page`]: owns the document and timer queue, routes events to instances
//!
//! # Architecture
//!
//! ```text
//! UiEvent ──▶ Page::dispatch ──▶ Carousel (drag / click / hover / resize)
//!                │                    │
//!                │                    ▼
//!                │              Dom (transform, classes, listeners)
//!                ▼                    │
//!          Scheduler ◀── transitions ─┘
//!      (autoplay, resize debounce, transition end)
//! ```
//!
//! Instances share nothing but the document and the clock.

mod carousel;
mod page;

pub use carousel::{Carousel, Control, RESIZE_DEBOUNCE};
pub use page::Page;

use crate::types::{CarouselId, ElementId};

/// Work a page timer carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Autoplay advance for a carousel.
    Autoplay(CarouselId),
    /// Debounced responsive recompute for a carousel.
    Resize(CarouselId),
    /// Transition end owed for an element.
    TransitionEnd(ElementId),
}
