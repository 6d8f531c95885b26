//! Track geometry.
//!
//! One index step is `track_width / slides_per_view` pixels; the track is
//! translated left by `index` steps.

/// Pixel width of one index step.
pub fn step_width(track_width: f64, slides_per_view: usize) -> f64 {
    track_width / slides_per_view.max(1) as f64
}

/// Translation that aligns augmented index `index` with the viewport's
/// left edge.
pub fn track_offset(index: i64, step: f64) -> f64 {
    -(index as f64 * step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_width() {
        assert_eq!(step_width(900.0, 3), 300.0);
        assert_eq!(step_width(900.0, 1), 900.0);
        // Zero never divides
        assert_eq!(step_width(900.0, 0), 900.0);
    }

    #[test]
    fn test_track_offset_moves_left() {
        assert_eq!(track_offset(1, 300.0), -300.0);
        assert_eq!(track_offset(4, 250.0), -1000.0);
        assert_eq!(track_offset(-1, 100.0), 100.0);
    }
}
