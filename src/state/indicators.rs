//! Indicator dots.
//!
//! One dot per real slide. The active dot is `(index - 1) mod n`, which
//! stays correct while the track rests on a clone before wrap correction.

use crate::dom::Dom;
use crate::types::ElementId;

/// Class toggled on the active dot.
pub const ACTIVE_CLASS: &str = "active";

/// Dot for augmented index `index`, `None` without real slides.
pub fn active_indicator(index: i64, real_count: usize) -> Option<usize> {
    if real_count == 0 {
        return None;
    }
    Some((index - 1).rem_euclid(real_count as i64) as usize)
}

/// The dots of one carousel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorSet {
    dots: Vec<ElementId>,
    active: Option<usize>,
}

impl IndicatorSet {
    /// Replace the contents of `container` with one `button` per slide.
    pub fn generate<D: Dom>(
        dom: &mut D,
        container: ElementId,
        count: usize,
        dot_class: Option<&str>,
    ) -> Self {
        dom.clear_children(container);
        let dots = (0..count)
            .map(|i| {
                let dot = dom.create_element("button");
                if let Some(class) = dot_class {
                    dom.set_class(dot, class, true);
                }
                dom.set_attribute(dot, "aria-label", &format!("Go to slide {}", i + 1));
                dom.append_child(container, dot);
                dot
            })
            .collect();
        Self { dots, active: None }
    }

    /// Use the children already inside `container` as dots.
    pub fn adopt<D: Dom>(dom: &D, container: ElementId) -> Self {
        Self {
            dots: dom.children(container),
            active: None,
        }
    }

    pub fn dots(&self) -> &[ElementId] {
        &self.dots
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Index of the dot that is or contains `target`.
    pub fn position<D: Dom>(&self, dom: &D, target: ElementId) -> Option<usize> {
        self.dots.iter().position(|dot| dom.contains(*dot, target))
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Mark exactly the dot for `index` active.
    pub fn sync<D: Dom>(&mut self, dom: &mut D, index: i64, real_count: usize) {
        if self.dots.is_empty() {
            return;
        }
        let active = active_indicator(index, real_count);
        for (i, dot) in self.dots.iter().enumerate() {
            dom.set_class(*dot, ACTIVE_CLASS, Some(i) == active);
        }
        self.active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;

    #[test]
    fn test_active_indicator_wraps() {
        assert_eq!(active_indicator(1, 5), Some(0));
        assert_eq!(active_indicator(5, 5), Some(4));
        // Head clone, before correction
        assert_eq!(active_indicator(6, 5), Some(0));
        // Tail clone
        assert_eq!(active_indicator(0, 5), Some(4));
        assert_eq!(active_indicator(3, 0), None);
    }

    #[test]
    fn test_generate_replaces_container_contents() {
        let mut dom = MemoryDom::default();
        let body = dom.document_root();
        let container = dom.build(body, "div.controls");
        dom.build(container, "span.placeholder");

        let set = IndicatorSet::generate(&mut dom, container, 3, Some("gallery-dot"));
        assert_eq!(set.len(), 3);
        assert_eq!(dom.children(container), set.dots().to_vec());
        assert!(dom.has_class(set.dots()[0], "gallery-dot"));
        assert_eq!(dom.tag(set.dots()[2]), "button");
        assert_eq!(dom.attribute(set.dots()[2], "aria-label"), Some("Go to slide 3"));
    }

    #[test]
    fn test_sync_marks_exactly_one() {
        let mut dom = MemoryDom::default();
        let body = dom.document_root();
        let container = dom.build(body, "div");
        let mut set = IndicatorSet::generate(&mut dom, container, 4, None);

        set.sync(&mut dom, 3, 4);
        assert_eq!(set.active(), Some(2));
        set.sync(&mut dom, 5, 4);
        let active: Vec<bool> = set
            .dots()
            .iter()
            .map(|d| dom.has_class(*d, ACTIVE_CLASS))
            .collect();
        assert_eq!(active, vec![true, false, false, false]);
    }

    #[test]
    fn test_adopt_existing_dots() {
        let mut dom = MemoryDom::default();
        let body = dom.document_root();
        let container = dom.build(body, "div");
        let a = dom.build(container, "button");
        let b = dom.build(container, "button");
        let icon = dom.build(b, "span");

        let set = IndicatorSet::adopt(&dom, container);
        assert_eq!(set.dots(), &[a, b]);
        assert_eq!(set.position(&dom, icon), Some(1));
        assert_eq!(set.position(&dom, container), None);
    }
}
