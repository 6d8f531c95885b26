//! # spark-carousel
//!
//! Headless infinite-loop carousel engine for reactive UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals): the
//! current index and visible slide count of every carousel are signals a
//! renderer can track.
//!
//! ## Architecture
//!
//! A carousel pads its real slides with a clone at each end. Navigation
//! animates the track; once a transition settles on a clone the track snaps,
//! untransitioned, to the real slide showing the same content:
//!
//! ```text
//! [n'] [1] [2] ... [n] [1']
//!   ▲                   ▲
//!   └ snap to n         └ snap to 1
//! ```
//!
//! Everything runs on one logical thread over a virtual clock. The host feeds
//! [`UiEvent`]s to a [`Page`] and advances time; the page fires autoplay,
//! debounced-resize and transition-end timers in order.
//!
//! ## Modules
//!
//! - [`types`] - Handles, transitions, listener kinds
//! - [`config`] - Per-carousel and page configuration (TOML)
//! - [`presets`] - Stock testimonial and gallery carousels
//! - [`dom`] - Host document trait and the in-memory document
//! - [`timer`] - Cooperative timer queue and debouncer
//! - [`state`] - Drag, wrap, responsive, indicator and autoplay state
//! - [`engine`] - `Carousel` and `Page`
//! - [`input`] - UI events and the crossterm bridge

pub mod config;
pub mod dom;
pub mod engine;
pub mod error;
pub mod input;
pub mod presets;
pub mod state;
pub mod timer;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::{Breakpoint, CarouselConfig, PageConfig};
pub use dom::{Dom, MemoryDom, Selector, TransitionChange};
pub use engine::{Carousel, Control, Page, TimerTask, RESIZE_DEBOUNCE};
pub use error::{CarouselError, Result};
pub use input::{TerminalInput, UiEvent};
pub use state::{BoundaryState, DragOutcome, DRAG_COMMIT_RATIO};
pub use timer::{Debouncer, Scheduler, TimerId};
