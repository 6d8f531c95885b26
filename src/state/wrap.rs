//! Loop-Wrap Correction
//!
//! The augmented sequence is `[last clone, real 1..=n, first clone]`.
//! After a transition settles on a clone, the track snaps (untransitioned)
//! to the real slide showing the same content:
//!
//! ```text
//! index:   0      1   2   ...   n    n+1
//!        [n']    [1] [2]  ...  [n]   [1']
//!          └──snap to n        snap to 1──┘
//! ```
//!
//! Indices beyond the clones (several navigations issued before one
//! transition settles) fold the same way, so correction always lands in
//! `1..=n` no matter how far the index ran.

/// Where the current index sits relative to the real range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryState {
    /// `1..=n`: a real slide, nothing to correct.
    WithinBounds,
    /// `0`: clone of the last real slide.
    AtTailClone,
    /// `n + 1`: clone of the first real slide.
    AtHeadClone,
    /// Past either clone.
    OutOfRange,
}

impl BoundaryState {
    pub fn classify(index: i64, real_count: usize) -> Self {
        let n = real_count as i64;
        match index {
            i if i >= 1 && i <= n => Self::WithinBounds,
            0 => Self::AtTailClone,
            i if i == n + 1 => Self::AtHeadClone,
            _ => Self::OutOfRange,
        }
    }

    /// Index to snap to, `None` when already within bounds.
    pub fn correction(index: i64, real_count: usize) -> Option<i64> {
        if real_count == 0 {
            return None;
        }
        match Self::classify(index, real_count) {
            Self::WithinBounds => None,
            Self::AtTailClone => Some(real_count as i64),
            Self::AtHeadClone => Some(1),
            Self::OutOfRange => Some(fold_index(index, real_count)),
        }
    }
}

/// Map any augmented index onto the real slide it shows: `((i - 1) mod n) + 1`.
pub fn fold_index(index: i64, real_count: usize) -> i64 {
    let n = real_count.max(1) as i64;
    (index - 1).rem_euclid(n) + 1
}
