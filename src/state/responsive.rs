//! Responsive slide count.
//!
//! The highest threshold not above the viewport width wins; below every
//! threshold the default applies.

use crate::config::CarouselConfig;

/// Breakpoint table of one carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
    default: usize,
    /// `(min_width, slides_per_view)`, widest first.
    thresholds: Vec<(u32, usize)>,
}

impl Breakpoints {
    pub fn new(default: usize, thresholds: impl IntoIterator<Item = (u32, usize)>) -> Self {
        let mut thresholds: Vec<(u32, usize)> = thresholds
            .into_iter()
            .map(|(width, count)| (width, count.max(1)))
            .collect();
        thresholds.sort_by(|a, b| b.0.cmp(&a.0));
        thresholds.dedup_by_key(|(width, _)| *width);
        Self {
            default: default.max(1),
            thresholds,
        }
    }

    pub fn from_config(config: &CarouselConfig) -> Self {
        Self::new(
            config.slides_per_view,
            config
                .responsive
                .iter()
                .map(|(width, bp)| (*width, bp.slides_per_view)),
        )
    }

    pub fn default_count(&self) -> usize {
        self.default
    }

    /// Slides visible at `viewport_width`.
    pub fn resolve(&self, viewport_width: u32) -> usize {
        self.thresholds
            .iter()
            .find(|(min_width, _)| viewport_width >= *min_width)
            .map(|(_, count)| *count)
            .unwrap_or(self.default)
    }
}
