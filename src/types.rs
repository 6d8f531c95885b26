//! Core types for spark-carousel.
//!
//! Handles, styling values and flags shared by the document, the engine
//! and the event router.

use std::fmt;
use std::time::Duration;

// =============================================================================
// Handles
// =============================================================================

/// Handle to an element in a [`Dom`](crate::dom::Dom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a carousel instance mounted on a [`Page`](crate::engine::Page).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarouselId(pub usize);

impl fmt::Display for CarouselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "carousel-{}", self.0)
    }
}

/// Handle to a document-level listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

// =============================================================================
// Track styling
// =============================================================================

/// Duration of an animated slide move.
pub const SLIDE_TRANSITION: Duration = Duration::from_millis(600);

/// Easing curve of an animated slide move.
pub const SLIDE_EASING: &str = "cubic-bezier(0.65, 0, 0.35, 1)";

/// Transition applied to the track's transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Transition {
    /// Transform changes apply instantly.
    #[default]
    None,
    /// Transform changes animate over `duration`.
    Animated {
        duration: Duration,
        easing: &'static str,
    },
}

impl Transition {
    /// The standard slide animation.
    pub const fn slide() -> Self {
        Self::Animated {
            duration: SLIDE_TRANSITION,
            easing: SLIDE_EASING,
        }
    }

    /// Whether transform changes animate.
    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Animated { .. })
    }

    /// CSS `transition` property value.
    pub fn css(&self) -> String {
        match self {
            Self::None => "none".to_string(),
            Self::Animated { duration, easing } => {
                format!("transform {}s {}", duration.as_secs_f64(), easing)
            }
        }
    }
}

/// CSS `transform` value for a horizontal translation.
pub fn translate_x_css(px: f64) -> String {
    format!("translateX({}px)", px)
}

/// Cursor shown over the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Auto,
    Grab,
    Grabbing,
}

// =============================================================================
// Input sources
// =============================================================================

/// Device a pointer gesture comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

// =============================================================================
// Listener kinds (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Document-level event kinds a carousel listens to while dragging.
    ///
    /// Combine with bitwise OR: `ListenerKinds::MOUSE_MOVE | ListenerKinds::MOUSE_UP`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ListenerKinds: u8 {
        const MOUSE_MOVE = 1 << 0;
        const MOUSE_UP = 1 << 1;
        const TOUCH_MOVE = 1 << 2;
        const TOUCH_END = 1 << 3;
    }
}

impl ListenerKinds {
    /// Everything a drag gesture registers at start.
    pub const DRAG: Self = Self::all();

    /// The move kind for a pointer source.
    pub fn move_for(source: PointerSource) -> Self {
        match source {
            PointerSource::Mouse => Self::MOUSE_MOVE,
            PointerSource::Touch => Self::TOUCH_MOVE,
        }
    }

    /// The end kind for a pointer source.
    pub fn end_for(source: PointerSource) -> Self {
        match source {
            PointerSource::Mouse => Self::MOUSE_UP,
            PointerSource::Touch => Self::TOUCH_END,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_css() {
        assert_eq!(Transition::None.css(), "none");
        assert_eq!(
            Transition::slide().css(),
            "transform 0.6s cubic-bezier(0.65, 0, 0.35, 1)"
        );
    }

    #[test]
    fn test_translate_css() {
        assert_eq!(translate_x_css(-300.0), "translateX(-300px)");
        assert_eq!(translate_x_css(12.5), "translateX(12.5px)");
    }

    #[test]
    fn test_listener_kinds_for_source() {
        assert_eq!(ListenerKinds::move_for(PointerSource::Touch), ListenerKinds::TOUCH_MOVE);
        assert_eq!(ListenerKinds::end_for(PointerSource::Mouse), ListenerKinds::MOUSE_UP);
        assert_eq!(ListenerKinds::DRAG.iter().count(), 4);
    }
}
