//! DOM Boundary - what the carousel engine needs from its host document.
//!
//! The engine never owns elements. It resolves them by selector at mount
//! time, then only reads widths and writes styling through this trait:
//!
//! - **Tree** - query, clone, insert, clear
//! - **Classes & attributes** - `active` dots, `aria-label`
//! - **Track style** - transform, transition, cursor
//! - **Document listeners** - move/end listeners live only during a drag
//!
//! [`MemoryDom`] is the in-process implementation used by tests, demos and
//! hosts that draw the document themselves.

mod memory;
mod selector;

pub use memory::MemoryDom;
pub use selector::Selector;

use std::time::Duration;

use crate::types::{CarouselId, Cursor, ElementId, ListenerId, ListenerKinds, Transition};

/// A transform transition starting or stopping on an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionChange {
    Started { element: ElementId, duration: Duration },
    Cancelled { element: ElementId },
}

/// Host document interface.
pub trait Dom {
    /// The document itself, scope for page-level queries.
    fn document_root(&self) -> ElementId;

    /// All descendants of `scope` matching `selector`, in document order.
    ///
    /// An unparsable selector matches nothing.
    fn query_all(&self, scope: ElementId, selector: &str) -> Vec<ElementId>;

    /// First descendant of `scope` matching `selector`.
    fn query(&self, scope: ElementId, selector: &str) -> Option<ElementId> {
        self.query_all(scope, selector).into_iter().next()
    }

    fn parent(&self, element: ElementId) -> Option<ElementId>;

    fn children(&self, element: ElementId) -> Vec<ElementId>;

    /// Whether `element` is `ancestor` or lies inside it.
    fn contains(&self, ancestor: ElementId, element: ElementId) -> bool {
        let mut cursor = Some(element);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    fn create_element(&mut self, tag: &str) -> ElementId;

    /// Deep copy of `element`, detached from the tree.
    fn clone_node(&mut self, element: ElementId) -> ElementId;

    fn append_child(&mut self, parent: ElementId, child: ElementId);

    /// Insert `child` before `reference`; appends if `reference` is not a child.
    fn insert_before(&mut self, parent: ElementId, child: ElementId, reference: ElementId);

    fn clear_children(&mut self, element: ElementId);

    fn set_class(&mut self, element: ElementId, class: &str, on: bool);

    fn has_class(&self, element: ElementId, class: &str) -> bool;

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str);

    fn set_transition(&mut self, element: ElementId, transition: Transition);

    /// Horizontal translation of `element` in pixels.
    fn set_translate_x(&mut self, element: ElementId, px: f64);

    fn set_cursor(&mut self, element: ElementId, cursor: Cursor);

    /// Inner width of `element` in pixels.
    fn client_width(&self, element: ElementId) -> f64;

    fn viewport_width(&self) -> u32;

    /// Record a new viewport width. Hosts that read it live may ignore this.
    fn resize_viewport(&mut self, width: u32);

    /// Register a document-level listener of one `kind` for `owner`.
    fn add_document_listener(&mut self, kind: ListenerKinds, owner: CarouselId) -> ListenerId;

    /// Returns false if `id` was not registered.
    fn remove_document_listener(&mut self, id: ListenerId) -> bool;

    /// Owners of every live listener intersecting `kind`, deduplicated.
    fn document_listeners(&self, kind: ListenerKinds) -> Vec<CarouselId>;

    /// Transitions started or cancelled since the last call.
    ///
    /// Hosts with native transition-end events return nothing and deliver
    /// [`UiEvent::TransitionEnd`](crate::input::UiEvent::TransitionEnd) themselves.
    fn drain_transitions(&mut self) -> Vec<TransitionChange> {
        Vec::new()
    }

    /// The transition on `element` has finished.
    fn complete_transition(&mut self, _element: ElementId) {}
}
