//! Page - runtime that owns the document, the timer queue and every
//! carousel, and routes [`UiEvent`]s to the instance they concern.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use spark_carousel::{CarouselConfig, Dom, MemoryDom, Page, UiEvent};
//!
//! let mut dom = MemoryDom::new(1200);
//! let body = dom.document_root();
//! let root = dom.build(body, "div.carousel");
//! let track = dom.build(root, "div.track");
//! dom.set_width(track, 900.0);
//! for _ in 0..3 {
//!     dom.build(track, "div.slide");
//! }
//! let next = dom.build(root, "button#next");
//!
//! let mut page = Page::new(dom);
//! let id = page
//!     .mount(&CarouselConfig::new(".carousel", ".track", ".slide").with_buttons("#prev", "#next"))
//!     .unwrap();
//!
//! page.dispatch(UiEvent::Click { target: next });
//! page.advance(Duration::from_millis(600));
//! assert_eq!(page.carousel(id).unwrap().current_index(), 2);
//! ```

use std::collections::HashMap;
use std::time::Duration;

use super::{Carousel, TimerTask};
use crate::config::{CarouselConfig, PageConfig};
use crate::dom::{Dom, TransitionChange};
use crate::error::Result;
use crate::input::UiEvent;
use crate::timer::{Scheduler, TimerId};
use crate::types::{CarouselId, ElementId, ListenerKinds};

pub struct Page<D: Dom> {
    dom: D,
    timers: Scheduler<TimerTask>,
    carousels: Vec<Carousel>,
    /// Transition-end notifications owed per element.
    pending_transitions: HashMap<ElementId, TimerId>,
}

impl<D: Dom> Page<D> {
    pub fn new(dom: D) -> Self {
        Self {
            dom,
            timers: Scheduler::new(),
            carousels: Vec::new(),
            pending_transitions: HashMap::new(),
        }
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    pub fn timers(&self) -> &Scheduler<TimerTask> {
        &self.timers
    }

    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    pub fn carousel(&self, id: CarouselId) -> Option<&Carousel> {
        self.carousels.get(id.0)
    }

    pub fn carousels(&self) -> &[Carousel] {
        &self.carousels
    }

    // =========================================================================
    // Mounting
    // =========================================================================

    /// Mount a carousel, reporting why it could not be.
    pub fn try_mount(&mut self, config: &CarouselConfig) -> Result<CarouselId> {
        let id = CarouselId(self.carousels.len());
        let carousel = Carousel::mount(id, config, &mut self.dom, &mut self.timers)?;
        self.carousels.push(carousel);
        self.flush_transitions();
        Ok(id)
    }

    /// Mount a carousel; a page without its elements simply has no carousel.
    pub fn mount(&mut self, config: &CarouselConfig) -> Option<CarouselId> {
        match self.try_mount(config) {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::debug!(root = %config.root, error = %e, "carousel not mounted");
                None
            }
        }
    }

    /// Mount every carousel of a page config; absent ones are skipped.
    pub fn mount_all(&mut self, config: &PageConfig) -> Vec<CarouselId> {
        config
            .carousel
            .iter()
            .filter_map(|c| self.mount(c))
            .collect()
    }

    // =========================================================================
    // Direct navigation
    // =========================================================================

    pub fn go_to_slide(&mut self, id: CarouselId, target: i64) {
        if let Some(carousel) = self.carousels.get_mut(id.0) {
            carousel.go_to_slide(&mut self.dom, target);
        }
        self.flush_transitions();
    }

    pub fn next(&mut self, id: CarouselId) {
        if let Some(carousel) = self.carousels.get_mut(id.0) {
            carousel.next(&mut self.dom);
        }
        self.flush_transitions();
    }

    pub fn prev(&mut self, id: CarouselId) {
        if let Some(carousel) = self.carousels.get_mut(id.0) {
            carousel.prev(&mut self.dom);
        }
        self.flush_transitions();
    }

    pub fn start_autoplay(&mut self, id: CarouselId) -> bool {
        self.carousels
            .get_mut(id.0)
            .is_some_and(|c| c.start_autoplay(&mut self.timers))
    }

    pub fn stop_autoplay(&mut self, id: CarouselId) {
        if let Some(carousel) = self.carousels.get_mut(id.0) {
            carousel.stop_autoplay(&mut self.timers);
        }
    }

    // =========================================================================
    // Event routing
    // =========================================================================

    /// Deliver one UI event.
    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::PointerDown { target, source, x } => {
                if let Some(carousel) = self
                    .carousels
                    .iter_mut()
                    .find(|c| c.track_contains(&self.dom, target))
                {
                    carousel.drag_start(&mut self.dom, &mut self.timers, source, x);
                }
            }
            UiEvent::PointerMove { source, x } => {
                for owner in self.dom.document_listeners(ListenerKinds::move_for(source)) {
                    if let Some(carousel) = self.carousels.get_mut(owner.0) {
                        carousel.drag_move(&mut self.dom, x);
                    }
                }
            }
            UiEvent::PointerUp { source } => {
                for owner in self.dom.document_listeners(ListenerKinds::end_for(source)) {
                    if let Some(carousel) = self.carousels.get_mut(owner.0) {
                        carousel.drag_end(&mut self.dom, &mut self.timers);
                    }
                }
            }
            UiEvent::PointerCancel { source } => {
                for owner in self.dom.document_listeners(ListenerKinds::end_for(source)) {
                    if let Some(carousel) = self.carousels.get_mut(owner.0) {
                        carousel.drag_cancel(&mut self.dom, &mut self.timers);
                    }
                }
            }
            UiEvent::PointerOver { target } => {
                for carousel in &mut self.carousels {
                    let inside = target.is_some_and(|t| self.dom.contains(carousel.root(), t));
                    carousel.set_hovered(inside, &mut self.timers);
                }
            }
            UiEvent::Click { target } => {
                for carousel in &mut self.carousels {
                    if let Some(control) = carousel.control_for(&self.dom, target) {
                        carousel.activate(&mut self.dom, control);
                        break;
                    }
                }
            }
            UiEvent::TransitionEnd { target } => {
                if let Some(timer) = self.pending_transitions.remove(&target) {
                    self.timers.clear(timer);
                }
                self.transition_ended(target);
            }
            UiEvent::Resize { width } => {
                self.dom.resize_viewport(width);
                for carousel in &mut self.carousels {
                    carousel.on_resize(&mut self.timers);
                }
            }
        }
        self.flush_transitions();
    }

    /// Advance virtual time, firing every timer due on the way.
    pub fn advance(&mut self, by: Duration) {
        let until = self.timers.now() + by;
        while let Some((timer, task)) = self.timers.pop_due(until) {
            self.run_timer(timer, task);
            self.flush_transitions();
        }
    }

    fn run_timer(&mut self, timer: TimerId, task: TimerTask) {
        match task {
            TimerTask::Autoplay(id) => {
                if let Some(carousel) = self.carousels.get_mut(id.0) {
                    carousel.on_autoplay_tick(&mut self.dom, timer);
                }
            }
            TimerTask::Resize(id) => {
                if let Some(carousel) = self.carousels.get_mut(id.0) {
                    carousel.on_resize_timer(&mut self.dom, timer);
                }
            }
            TimerTask::TransitionEnd(element) => {
                if self.pending_transitions.get(&element) == Some(&timer) {
                    self.pending_transitions.remove(&element);
                    self.transition_ended(element);
                }
            }
        }
    }

    fn transition_ended(&mut self, element: ElementId) {
        self.dom.complete_transition(element);
        for carousel in &mut self.carousels {
            if carousel.track() == element {
                carousel.handle_transition_end(&mut self.dom);
            }
        }
    }

    /// Turn transitions the document started or cancelled into owed
    /// transition-end notifications.
    fn flush_transitions(&mut self) {
        for change in self.dom.drain_transitions() {
            match change {
                TransitionChange::Started { element, duration } => {
                    let timer = self
                        .timers
                        .set_timeout(duration, TimerTask::TransitionEnd(element));
                    if let Some(previous) = self.pending_transitions.insert(element, timer) {
                        self.timers.clear(previous);
                    }
                }
                TransitionChange::Cancelled { element } => {
                    if let Some(previous) = self.pending_transitions.remove(&element) {
                        self.timers.clear(previous);
                    }
                }
            }
        }
    }

    /// Whether a transition-end is still owed for `element`.
    pub fn is_transition_pending(&self, element: ElementId) -> bool {
        self.pending_transitions.contains_key(&element)
    }
}
