//! In-memory document.
//!
//! An arena of element nodes with just enough styling state to drive a
//! carousel: per-element width, translation, transition and cursor.
//! Transform changes made while a transition is enabled are reported
//! through [`Dom::drain_transitions`] so the page can schedule the matching
//! transition-end notification.

use std::collections::BTreeMap;

use super::selector::Selector;
use super::{Dom, TransitionChange};
use crate::types::{CarouselId, Cursor, ElementId, ListenerId, ListenerKinds, Transition};

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    width: f64,
    translate_x: f64,
    transition: Transition,
    cursor: Cursor,
    transition_running: bool,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
            width: 0.0,
            translate_x: 0.0,
            transition: Transition::None,
            cursor: Cursor::Auto,
            transition_running: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Listener {
    id: ListenerId,
    kind: ListenerKinds,
    owner: CarouselId,
}

/// Arena-backed [`Dom`].
#[derive(Debug, Clone)]
pub struct MemoryDom {
    nodes: Vec<Node>,
    viewport_width: u32,
    listeners: Vec<Listener>,
    next_listener: u64,
    transitions: Vec<TransitionChange>,
}

impl MemoryDom {
    /// Empty document with a `body` root.
    pub fn new(viewport_width: u32) -> Self {
        Self {
            nodes: vec![Node::new("body")],
            viewport_width,
            listeners: Vec::new(),
            next_listener: 0,
            transitions: Vec::new(),
        }
    }

    /// Create an element from a compound selector (`div.slide#first`) and
    /// append it to `parent`.
    ///
    /// Falls back to a bare `div` if `markup` does not parse.
    pub fn build(&mut self, parent: ElementId, markup: &str) -> ElementId {
        let selector = Selector::parse(markup).unwrap_or_default();
        let element = self.create_element(selector.tag().unwrap_or("div"));
        if let Some(id) = selector.id() {
            self.set_attribute(element, "id", id);
        }
        for class in selector.classes() {
            self.set_class(element, class, true);
        }
        self.append_child(parent, element);
        element
    }

    pub fn set_text(&mut self, element: ElementId, text: &str) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.text = text.to_string();
        }
    }

    pub fn text(&self, element: ElementId) -> &str {
        self.nodes.get(element.0).map(|n| n.text.as_str()).unwrap_or("")
    }

    pub fn set_width(&mut self, element: ElementId, width: f64) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.width = width;
        }
    }

    pub fn tag(&self, element: ElementId) -> &str {
        self.nodes.get(element.0).map(|n| n.tag.as_str()).unwrap_or("")
    }

    pub fn attribute(&self, element: ElementId, name: &str) -> Option<&str> {
        self.nodes
            .get(element.0)
            .and_then(|n| n.attributes.get(name))
            .map(String::as_str)
    }

    pub fn translate_x(&self, element: ElementId) -> f64 {
        self.nodes.get(element.0).map(|n| n.translate_x).unwrap_or(0.0)
    }

    pub fn transition(&self, element: ElementId) -> Transition {
        self.nodes
            .get(element.0)
            .map(|n| n.transition)
            .unwrap_or_default()
    }

    pub fn cursor(&self, element: ElementId) -> Cursor {
        self.nodes.get(element.0).map(|n| n.cursor).unwrap_or_default()
    }

    /// Whether a transform transition is in flight on `element`.
    pub fn is_transitioning(&self, element: ElementId) -> bool {
        self.nodes
            .get(element.0)
            .map(|n| n.transition_running)
            .unwrap_or(false)
    }

    /// Live document-level listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn detach(&mut self, child: ElementId) {
        let Some(parent) = self.nodes.get(child.0).and_then(|n| n.parent) else {
            return;
        };
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.retain(|c| *c != child);
        }
        if let Some(node) = self.nodes.get_mut(child.0) {
            node.parent = None;
        }
    }

    fn collect_matches(&self, scope: ElementId, selector: &Selector, out: &mut Vec<ElementId>) {
        let Some(node) = self.nodes.get(scope.0) else {
            return;
        };
        for &child in &node.children {
            if let Some(c) = self.nodes.get(child.0) {
                let id = c.attributes.get("id").map(String::as_str);
                if selector.matches(&c.tag, id, &c.classes) {
                    out.push(child);
                }
            }
            self.collect_matches(child, selector, out);
        }
    }
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new(1024)
    }
}

impl Dom for MemoryDom {
    fn document_root(&self) -> ElementId {
        ElementId(0)
    }

    fn query_all(&self, scope: ElementId, selector: &str) -> Vec<ElementId> {
        let mut out = Vec::new();
        if let Some(selector) = Selector::parse(selector) {
            self.collect_matches(scope, &selector, &mut out);
        }
        out
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.nodes.get(element.0).and_then(|n| n.parent)
    }

    fn children(&self, element: ElementId) -> Vec<ElementId> {
        self.nodes
            .get(element.0)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    fn create_element(&mut self, tag: &str) -> ElementId {
        self.nodes.push(Node::new(tag));
        ElementId(self.nodes.len() - 1)
    }

    fn clone_node(&mut self, element: ElementId) -> ElementId {
        let Some(source) = self.nodes.get(element.0).cloned() else {
            return self.create_element("div");
        };
        let mut copy = source.clone();
        copy.parent = None;
        copy.children = Vec::new();
        copy.transition_running = false;
        self.nodes.push(copy);
        let cloned = ElementId(self.nodes.len() - 1);

        for child in source.children {
            let child_copy = self.clone_node(child);
            self.append_child(cloned, child_copy);
        }
        cloned
    }

    fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() || parent == child {
            return;
        }
        self.detach(child);
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    fn insert_before(&mut self, parent: ElementId, child: ElementId, reference: ElementId) {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() || parent == child {
            return;
        }
        self.detach(child);
        let siblings = &mut self.nodes[parent.0].children;
        match siblings.iter().position(|c| *c == reference) {
            Some(pos) => siblings.insert(pos, child),
            None => siblings.push(child),
        }
        self.nodes[child.0].parent = Some(parent);
    }

    fn clear_children(&mut self, element: ElementId) {
        for child in self.children(element) {
            self.detach(child);
        }
    }

    fn set_class(&mut self, element: ElementId, class: &str, on: bool) {
        let Some(node) = self.nodes.get_mut(element.0) else {
            return;
        };
        let present = node.classes.iter().any(|c| c == class);
        if on && !present {
            node.classes.push(class.to_string());
        } else if !on && present {
            node.classes.retain(|c| c != class);
        }
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.nodes
            .get(element.0)
            .map(|n| n.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_transition(&mut self, element: ElementId, transition: Transition) {
        let Some(node) = self.nodes.get_mut(element.0) else {
            return;
        };
        node.transition = transition;
        if !transition.is_animated() && node.transition_running {
            node.transition_running = false;
            self.transitions.push(TransitionChange::Cancelled { element });
        }
    }

    fn set_translate_x(&mut self, element: ElementId, px: f64) {
        let Some(node) = self.nodes.get_mut(element.0) else {
            return;
        };
        let changed = node.translate_x != px;
        node.translate_x = px;
        if let (true, Transition::Animated { duration, .. }) = (changed, node.transition) {
            node.transition_running = true;
            self.transitions
                .push(TransitionChange::Started { element, duration });
        }
    }

    fn set_cursor(&mut self, element: ElementId, cursor: Cursor) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.cursor = cursor;
        }
    }

    fn client_width(&self, element: ElementId) -> f64 {
        self.nodes.get(element.0).map(|n| n.width).unwrap_or(0.0)
    }

    fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    fn resize_viewport(&mut self, width: u32) {
        self.viewport_width = width;
    }

    fn add_document_listener(&mut self, kind: ListenerKinds, owner: CarouselId) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(Listener { id, kind, owner });
        id
    }

    fn remove_document_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    fn document_listeners(&self, kind: ListenerKinds) -> Vec<CarouselId> {
        let mut owners: Vec<CarouselId> = Vec::new();
        for listener in &self.listeners {
            if listener.kind.intersects(kind) && !owners.contains(&listener.owner) {
                owners.push(listener.owner);
            }
        }
        owners
    }

    fn drain_transitions(&mut self) -> Vec<TransitionChange> {
        std::mem::take(&mut self.transitions)
    }

    fn complete_transition(&mut self, element: ElementId) {
        if let Some(node) = self.nodes.get_mut(element.0) {
            node.transition_running = false;
        }
    }
}
