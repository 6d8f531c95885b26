//! State Module - per-instance carousel state machines
//!
//! Each piece is pure and owned by a single [`Carousel`](crate::engine::Carousel);
//! nothing here is shared between instances.
//!
//! - **Position** - step width and track offset math
//! - **Wrap** - boundary classification and loop-wrap correction
//! - **Drag** - `Idle -> Dragging -> Idle` gesture session and commit rule
//! - **Responsive** - breakpoint selection
//! - **Indicators** - dot set and active-dot mapping
//! - **Autoplay** - the instance's repeating advance timer

pub mod autoplay;
pub mod drag;
pub mod indicators;
pub mod position;
pub mod responsive;
pub mod wrap;

pub use autoplay::Autoplay;
pub use drag::{DragOutcome, DragSession, DragState, DRAG_COMMIT_RATIO};
pub use indicators::{active_indicator, IndicatorSet};
pub use position::{step_width, track_offset};
pub use responsive::Breakpoints;
pub use wrap::{fold_index, BoundaryState};
