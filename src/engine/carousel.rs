//! Carousel - one infinite-loop slider instance.
//!
//! Owns its slide sequence, position, drag session, autoplay timer and
//! responsive state. Reads widths from and writes styling to a [`Dom`];
//! schedules timers on the page's [`Scheduler`].
//!
//! Every navigation path (buttons, dots, drag commit, autoplay) funnels
//! through [`Carousel::go_to_slide`], the single place the index changes
//! apart from loop-wrap correction.

use std::time::Duration;

use spark_signals::{signal, Signal};

use super::TimerTask;
use crate::config::CarouselConfig;
use crate::dom::Dom;
use crate::error::{CarouselError, Result};
use crate::state::{
    step_width, track_offset, Autoplay, BoundaryState, Breakpoints, DragOutcome, DragSession,
    DragState, IndicatorSet,
};
use crate::timer::{Debouncer, Scheduler, TimerId};
use crate::types::{CarouselId, Cursor, ElementId, ListenerKinds, PointerSource, Transition};

/// Quiet window before a resize recomputes the layout.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// A clickable control of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Prev,
    Next,
    /// Dot for real slide `n` (0-based).
    Dot(usize),
}

pub struct Carousel {
    id: CarouselId,
    root: ElementId,
    track: ElementId,
    /// `[last clone, real slides.., first clone]`
    slides: Vec<ElementId>,
    real_count: usize,
    indicators: IndicatorSet,
    prev_btn: Option<ElementId>,
    next_btn: Option<ElementId>,
    breakpoints: Breakpoints,
    current_index: Signal<i64>,
    slides_per_view: Signal<usize>,
    drag: DragState,
    autoplay: Autoplay,
    resize: Debouncer,
    hovered: bool,
}

impl Carousel {
    /// Resolve, augment and position a carousel.
    ///
    /// Fails with a missing-target error when the root, the track or the
    /// slides are absent; the document is left untouched in that case.
    pub fn mount<D: Dom>(
        id: CarouselId,
        config: &CarouselConfig,
        dom: &mut D,
        timers: &mut Scheduler<TimerTask>,
    ) -> Result<Self> {
        let document = dom.document_root();
        let root = dom
            .query(document, &config.root)
            .ok_or_else(|| CarouselError::MissingTarget {
                selector: config.root.clone(),
            })?;
        let track = dom
            .query(root, &config.container)
            .ok_or_else(|| CarouselError::MissingTarget {
                selector: config.container.clone(),
            })?;
        let real = dom.query_all(root, &config.slides);
        let (Some(&first), Some(&last)) = (real.first(), real.last()) else {
            return Err(CarouselError::EmptySlides {
                selector: config.slides.clone(),
            });
        };

        let find = |dom: &D, selector: &Option<String>| {
            selector.as_deref().and_then(|s| dom.query(root, s))
        };
        let dots_container = find(&*dom, &config.dots_container);
        let prev_btn = find(&*dom, &config.prev_btn);
        let next_btn = find(&*dom, &config.next_btn);

        // Infinite loop setup: clones are created once and never recreated
        let first_clone = dom.clone_node(first);
        let last_clone = dom.clone_node(last);
        dom.append_child(track, first_clone);
        dom.insert_before(track, last_clone, first);

        let real_count = real.len();
        let mut slides = Vec::with_capacity(real_count + 2);
        slides.push(last_clone);
        slides.extend(real);
        slides.push(first_clone);

        let indicators = match dots_container {
            Some(container) if config.generate_dots => IndicatorSet::generate(
                dom,
                container,
                real_count,
                config.dot_class.as_deref(),
            ),
            Some(container) => IndicatorSet::adopt(dom, container),
            None => IndicatorSet::default(),
        };

        let breakpoints = Breakpoints::from_config(config);
        let mut carousel = Self {
            id,
            root,
            track,
            slides,
            real_count,
            indicators,
            prev_btn,
            next_btn,
            current_index: signal(1),
            slides_per_view: signal(breakpoints.default_count()),
            breakpoints,
            drag: DragState::Idle,
            autoplay: Autoplay::new(config.auto_play_interval()),
            resize: Debouncer::new(RESIZE_DEBOUNCE),
            hovered: false,
        };

        carousel.update_responsive(dom);
        carousel.set_position(dom, false);
        carousel.update_controls(dom);
        dom.set_cursor(track, Cursor::Grab);
        carousel.start_autoplay(timers);

        tracing::debug!(
            carousel = %id,
            real_count,
            slides_per_view = carousel.slides_per_view(),
            dots = carousel.indicators.len(),
            autoplay = ?carousel.autoplay.interval(),
            "carousel mounted"
        );
        Ok(carousel)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> CarouselId {
        self.id
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn track(&self) -> ElementId {
        self.track
    }

    /// The augmented sequence, clones included.
    pub fn slides(&self) -> &[ElementId] {
        &self.slides
    }

    pub fn real_count(&self) -> usize {
        self.real_count
    }

    pub fn augmented_len(&self) -> usize {
        self.slides.len()
    }

    pub fn current_index(&self) -> i64 {
        self.current_index.get()
    }

    /// Reactive handle on the current index.
    pub fn index_signal(&self) -> Signal<i64> {
        self.current_index.clone()
    }

    pub fn slides_per_view(&self) -> usize {
        self.slides_per_view.get()
    }

    /// Reactive handle on the visible slide count.
    pub fn slides_per_view_signal(&self) -> Signal<usize> {
        self.slides_per_view.clone()
    }

    pub fn boundary(&self) -> BoundaryState {
        BoundaryState::classify(self.current_index(), self.real_count)
    }

    pub fn indicators(&self) -> &IndicatorSet {
        &self.indicators
    }

    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.active()
    }

    pub fn prev_button(&self) -> Option<ElementId> {
        self.prev_btn
    }

    pub fn next_button(&self) -> Option<ElementId> {
        self.next_btn
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Offset of the live drag, zero when idle.
    pub fn drag_offset(&self) -> f64 {
        self.drag.session().map(DragSession::offset).unwrap_or(0.0)
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Pixel width of one index step.
    pub fn step_width<D: Dom>(&self, dom: &D) -> f64 {
        step_width(dom.client_width(self.track), self.slides_per_view())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move to augmented index `target` with a transition.
    ///
    /// Any integer is accepted; out-of-range indices are folded back when
    /// the transition ends.
    pub fn go_to_slide<D: Dom>(&mut self, dom: &mut D, target: i64) {
        tracing::trace!(
            carousel = %self.id,
            from = self.current_index(),
            to = target,
            "go to slide"
        );
        self.current_index.set(target);
        self.set_position(dom, true);
        self.update_controls(dom);
    }

    pub fn next<D: Dom>(&mut self, dom: &mut D) {
        self.go_to_slide(dom, self.current_index() + 1);
    }

    pub fn prev<D: Dom>(&mut self, dom: &mut D) {
        self.go_to_slide(dom, self.current_index() - 1);
    }

    /// Which control, if any, `target` belongs to.
    pub fn control_for<D: Dom>(&self, dom: &D, target: ElementId) -> Option<Control> {
        if self.prev_btn.is_some_and(|btn| dom.contains(btn, target)) {
            return Some(Control::Prev);
        }
        if self.next_btn.is_some_and(|btn| dom.contains(btn, target)) {
            return Some(Control::Next);
        }
        self.indicators
            .position(dom, target)
            .filter(|dot| *dot < self.real_count)
            .map(Control::Dot)
    }

    pub fn activate<D: Dom>(&mut self, dom: &mut D, control: Control) {
        match control {
            Control::Prev => self.prev(dom),
            Control::Next => self.next(dom),
            Control::Dot(dot) => self.go_to_slide(dom, dot as i64 + 1),
        }
    }

    fn set_position<D: Dom>(&self, dom: &mut D, animate: bool) {
        let transition = if animate { Transition::slide() } else { Transition::None };
        dom.set_transition(self.track, transition);
        self.apply_translate(dom);
    }

    /// Base offset of the current index plus any live drag.
    fn apply_translate<D: Dom>(&self, dom: &mut D) {
        let offset = track_offset(self.current_index(), self.step_width(dom)) + self.drag_offset();
        dom.set_translate_x(self.track, offset);
    }

    fn update_controls<D: Dom>(&mut self, dom: &mut D) {
        let index = self.current_index();
        self.indicators.sync(dom, index, self.real_count);
    }

    // =========================================================================
    // Loop wrap
    // =========================================================================

    /// Snap off a clone after the track's transition settles.
    ///
    /// Returns the index snapped to, if any.
    pub fn handle_transition_end<D: Dom>(&mut self, dom: &mut D) -> Option<i64> {
        let from = self.current_index();
        let snap = BoundaryState::correction(from, self.real_count)?;
        self.current_index.set(snap);
        self.set_position(dom, false);
        self.update_controls(dom);
        tracing::debug!(carousel = %self.id, from, to = snap, "loop wrap");
        Some(snap)
    }

    // =========================================================================
    // Responsive
    // =========================================================================

    /// Re-evaluate breakpoints against the current viewport width.
    pub fn update_responsive<D: Dom>(&mut self, dom: &D) -> usize {
        let count = self.breakpoints.resolve(dom.viewport_width());
        if count != self.slides_per_view() {
            self.slides_per_view.set(count);
        }
        count
    }

    /// Viewport resized: restart the debounce window.
    pub fn on_resize(&mut self, timers: &mut Scheduler<TimerTask>) {
        let restarted = self.resize.is_pending();
        self.resize.call(timers, TimerTask::Resize(self.id));
        tracing::trace!(carousel = %self.id, restarted, "resize debounce");
    }

    /// Debounce window elapsed. Returns false for stale timers.
    pub fn on_resize_timer<D: Dom>(&mut self, dom: &mut D, timer: TimerId) -> bool {
        if !self.resize.fired(timer) {
            return false;
        }
        let count = self.update_responsive(dom);
        self.set_position(dom, false);
        tracing::trace!(
            carousel = %self.id,
            viewport = dom.viewport_width(),
            slides_per_view = count,
            "responsive recompute"
        );
        true
    }

    // =========================================================================
    // Autoplay
    // =========================================================================

    pub fn start_autoplay(&mut self, timers: &mut Scheduler<TimerTask>) -> bool {
        self.autoplay.start(timers, TimerTask::Autoplay(self.id))
    }

    pub fn stop_autoplay(&mut self, timers: &mut Scheduler<TimerTask>) {
        self.autoplay.stop(timers);
    }

    /// Autoplay interval fired.
    pub fn on_autoplay_tick<D: Dom>(&mut self, dom: &mut D, timer: TimerId) {
        if self.autoplay.owns(timer) {
            self.next(dom);
        }
    }

    /// Pointer is now inside (`true`) or outside the carousel root.
    pub fn set_hovered(&mut self, inside: bool, timers: &mut Scheduler<TimerTask>) {
        if inside == self.hovered {
            return;
        }
        self.hovered = inside;
        if inside {
            self.stop_autoplay(timers);
        } else {
            self.start_autoplay(timers);
        }
    }

    // =========================================================================
    // Drag
    // =========================================================================

    pub fn track_contains<D: Dom>(&self, dom: &D, target: ElementId) -> bool {
        dom.contains(self.track, target)
    }

    /// Begin a gesture at page coordinate `x`.
    ///
    /// A session that never saw its end event is torn down first.
    pub fn drag_start<D: Dom>(
        &mut self,
        dom: &mut D,
        timers: &mut Scheduler<TimerTask>,
        source: PointerSource,
        x: f64,
    ) {
        let listeners = ListenerKinds::DRAG
            .iter()
            .map(|kind| dom.add_document_listener(kind, self.id))
            .collect();
        if let Some(stale) = self.drag.begin(DragSession::new(source, x, listeners)) {
            release_listeners(dom, stale);
        }

        dom.set_cursor(self.track, Cursor::Grabbing);
        self.stop_autoplay(timers);
        dom.set_transition(self.track, Transition::None);
    }

    /// Follow the pointer. Ignored when no gesture is live.
    pub fn drag_move<D: Dom>(&mut self, dom: &mut D, x: f64) {
        let Some(session) = self.drag.session_mut() else {
            return;
        };
        session.update(x);
        self.apply_translate(dom);
    }

    /// Release: commit one step past the threshold, otherwise settle back.
    pub fn drag_end<D: Dom>(
        &mut self,
        dom: &mut D,
        timers: &mut Scheduler<TimerTask>,
    ) -> Option<DragOutcome> {
        self.finish_drag(dom, timers, true)
    }

    /// Abort: settle back on the current slide without committing.
    pub fn drag_cancel<D: Dom>(
        &mut self,
        dom: &mut D,
        timers: &mut Scheduler<TimerTask>,
    ) -> Option<DragOutcome> {
        self.finish_drag(dom, timers, false)
    }

    fn finish_drag<D: Dom>(
        &mut self,
        dom: &mut D,
        timers: &mut Scheduler<TimerTask>,
        commit: bool,
    ) -> Option<DragOutcome> {
        let session = self.drag.finish()?;
        let outcome = if commit {
            session.outcome(self.step_width(dom))
        } else {
            DragOutcome::Snap
        };
        tracing::debug!(
            carousel = %self.id,
            source = ?session.source(),
            start = session.start(),
            offset = session.offset(),
            ?outcome,
            "drag finished"
        );
        release_listeners(dom, session);

        dom.set_cursor(self.track, Cursor::Grab);
        self.go_to_slide(dom, self.current_index() + outcome.step());
        self.start_autoplay(timers);
        Some(outcome)
    }
}

fn release_listeners<D: Dom>(dom: &mut D, session: DragSession) {
    for id in session.into_listeners() {
        dom.remove_document_listener(id);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;
    use crate::state::indicators::ACTIVE_CLASS;

    const TRACK_WIDTH: f64 = 900.0;

    fn build_markup(dom: &mut MemoryDom, slides: usize) -> ElementId {
        let body = dom.document_root();
        let root = dom.build(body, "section.carousel");
        let track = dom.build(root, "div.track");
        dom.set_width(track, TRACK_WIDTH);
        for i in 0..slides {
            let slide = dom.build(track, "div.slide");
            dom.set_text(slide, &format!("slide {}", i + 1));
        }
        dom.build(root, "button#prev");
        dom.build(root, "button#next");
        dom.build(root, "div.dots");
        track
    }

    fn config() -> CarouselConfig {
        CarouselConfig::new(".carousel", ".track", ".slide")
            .with_buttons("#prev", "#next")
            .with_dots(".dots", "dot")
    }

    fn setup_with(
        slides: usize,
        config: CarouselConfig,
    ) -> (MemoryDom, Scheduler<TimerTask>, Carousel) {
        let mut dom = MemoryDom::new(500);
        build_markup(&mut dom, slides);
        let mut timers = Scheduler::new();
        let carousel = Carousel::mount(CarouselId(0), &config, &mut dom, &mut timers).unwrap();
        (dom, timers, carousel)
    }

    fn setup(slides: usize) -> (MemoryDom, Scheduler<TimerTask>, Carousel) {
        setup_with(slides, config())
    }

    #[test]
    fn test_mount_augments_sequence() {
        for n in 1..=5 {
            let (dom, _, carousel) = setup(n);
            assert_eq!(carousel.augmented_len(), n + 2);
            assert_eq!(carousel.real_count(), n);

            let slides = carousel.slides();
            assert_eq!(dom.text(slides[0]), format!("slide {n}"));
            assert_eq!(dom.text(slides[n + 1]), "slide 1");
            for i in 1..=n {
                assert_eq!(dom.text(slides[i]), format!("slide {i}"));
            }
            assert_eq!(dom.children(carousel.track()), slides.to_vec());
        }
    }

    #[test]
    fn test_mount_positions_without_transition() {
        let (dom, timers, carousel) = setup(3);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.slides_per_view(), 1);
        assert_eq!(dom.translate_x(carousel.track()), -TRACK_WIDTH);
        assert_eq!(dom.transition(carousel.track()), Transition::None);
        assert_eq!(dom.cursor(carousel.track()), Cursor::Grab);
        assert_eq!(carousel.active_indicator(), Some(0));
        assert!(!carousel.is_autoplaying());
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn test_mount_missing_targets() {
        let mut dom = MemoryDom::new(500);
        let track = build_markup(&mut dom, 3);
        let mut timers = Scheduler::new();

        let missing_root = CarouselConfig::new(".nope", ".track", ".slide");
        let err = Carousel::mount(CarouselId(0), &missing_root, &mut dom, &mut timers).err();
        assert!(matches!(
            err,
            Some(CarouselError::MissingTarget { ref selector }) if selector == ".nope"
        ));

        let missing_track = CarouselConfig::new(".carousel", ".rail", ".slide");
        assert!(Carousel::mount(CarouselId(0), &missing_track, &mut dom, &mut timers).is_err());

        let no_slides = CarouselConfig::new(".carousel", ".track", ".card");
        let err = Carousel::mount(CarouselId(0), &no_slides, &mut dom, &mut timers).err();
        assert!(matches!(err, Some(CarouselError::EmptySlides { .. })));

        // Nothing was cloned
        assert_eq!(dom.children(track).len(), 3);
    }

    #[test]
    fn test_generated_dots() {
        let (dom, _, carousel) = setup(4);
        let dots = carousel.indicators().dots();
        assert_eq!(dots.len(), 4);
        assert!(dom.has_class(dots[0], "dot"));
        assert!(dom.has_class(dots[0], ACTIVE_CLASS));
        assert!(!dom.has_class(dots[1], ACTIVE_CLASS));
        assert_eq!(dom.attribute(dots[3], "aria-label"), Some("Go to slide 4"));
    }

    #[test]
    fn test_existing_dots_adopted_when_not_generated() {
        let mut dom = MemoryDom::new(500);
        build_markup(&mut dom, 3);
        let body = dom.document_root();
        let dots = dom.query(body, ".dots").unwrap();
        let first = dom.build(dots, "span.pip");
        dom.build(dots, "span.pip");
        dom.build(dots, "span.pip");

        let config = CarouselConfig::new(".carousel", ".track", ".slide").with_dots(".dots", "dot");
        let config = CarouselConfig {
            generate_dots: false,
            ..config
        };
        let mut timers = Scheduler::new();
        let carousel = Carousel::mount(CarouselId(0), &config, &mut dom, &mut timers).unwrap();
        assert_eq!(carousel.indicators().dots()[0], first);
        assert!(dom.has_class(first, ACTIVE_CLASS));
    }

    #[test]
    fn test_go_to_slide_animates_and_syncs() {
        let (mut dom, _, mut carousel) = setup(3);
        carousel.go_to_slide(&mut dom, 3);
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(dom.translate_x(carousel.track()), -3.0 * TRACK_WIDTH);
        assert!(dom.transition(carousel.track()).is_animated());
        assert_eq!(carousel.active_indicator(), Some(2));
    }

    #[test]
    fn test_head_clone_wraps_to_first() {
        let (mut dom, _, mut carousel) = setup(3);
        carousel.go_to_slide(&mut dom, 3);
        carousel.next(&mut dom);
        assert_eq!(carousel.current_index(), 4);
        assert_eq!(carousel.boundary(), BoundaryState::AtHeadClone);
        // Wrap-consistent before correction
        assert_eq!(carousel.active_indicator(), Some(0));

        assert_eq!(carousel.handle_transition_end(&mut dom), Some(1));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(dom.transition(carousel.track()), Transition::None);
        assert_eq!(dom.translate_x(carousel.track()), -TRACK_WIDTH);
    }

    #[test]
    fn test_tail_clone_wraps_to_last() {
        let (mut dom, _, mut carousel) = setup(3);
        carousel.prev(&mut dom);
        assert_eq!(carousel.boundary(), BoundaryState::AtTailClone);
        assert_eq!(carousel.active_indicator(), Some(2));

        assert_eq!(carousel.handle_transition_end(&mut dom), Some(3));
        assert_eq!(dom.translate_x(carousel.track()), -3.0 * TRACK_WIDTH);
        assert_eq!(carousel.active_indicator(), Some(2));
    }

    #[test]
    fn test_far_jump_folds_on_settle() {
        let (mut dom, _, mut carousel) = setup(3);
        carousel.go_to_slide(&mut dom, 6);
        assert_eq!(carousel.handle_transition_end(&mut dom), Some(3));
        carousel.go_to_slide(&mut dom, -2);
        assert_eq!(carousel.handle_transition_end(&mut dom), Some(1));
    }

    #[test]
    fn test_within_bounds_no_snap() {
        let (mut dom, _, mut carousel) = setup(3);
        carousel.next(&mut dom);
        assert_eq!(carousel.handle_transition_end(&mut dom), None);
        assert_eq!(carousel.current_index(), 2);
        assert!(dom.transition(carousel.track()).is_animated());
    }

    #[test]
    fn test_drag_past_threshold_advances() {
        let (mut dom, mut timers, mut carousel) = setup(3);
        let track = carousel.track();

        carousel.drag_start(&mut dom, &mut timers, PointerSource::Mouse, 500.0);
        assert!(carousel.is_dragging());
        assert_eq!(dom.listener_count(), 4);
        assert_eq!(dom.cursor(track), Cursor::Grabbing);
        assert_eq!(dom.transition(track), Transition::None);

        carousel.drag_move(&mut dom, 200.0);
        assert_eq!(carousel.drag_offset(), -300.0);
        assert_eq!(dom.translate_x(track), -TRACK_WIDTH - 300.0);

        assert_eq!(carousel.drag_end(&mut dom, &mut timers), Some(DragOutcome::Forward));
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(dom.listener_count(), 0);
        assert_eq!(dom.cursor(track), Cursor::Grab);
        assert!(dom.transition(track).is_animated());
        assert_eq!(dom.translate_x(track), -2.0 * TRACK_WIDTH);
    }

    #[test]
    fn test_drag_below_threshold_returns() {
        let (mut dom, mut timers, mut carousel) = setup(3);
        carousel.drag_start(&mut dom, &mut timers, PointerSource::Touch, 500.0);
        carousel.drag_move(&mut dom, 400.0);
        assert_eq!(carousel.drag_end(&mut dom, &mut timers), Some(DragOutcome::Snap));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(dom.translate_x(carousel.track()), -TRACK_WIDTH);
        assert_eq!(carousel.drag_offset(), 0.0);
    }

    #[test]
    fn test_drag_right_goes_back() {
        let (mut dom, mut timers, mut carousel) = setup(3);
        carousel.drag_start(&mut dom, &mut timers, PointerSource::Mouse, 100.0);
        carousel.drag_move(&mut dom, 400.0);
        assert_eq!(carousel.drag_end(&mut dom, &mut timers), Some(DragOutcome::Backward));
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.handle_transition_end(&mut dom), Some(3));
    }

    #[test]
    fn test_drag_cancel_never_commits() {
        let (mut dom, mut timers, mut carousel) = setup(3);
        carousel.drag_start(&mut dom, &mut timers, PointerSource::Touch, 500.0);
        carousel.drag_move(&mut dom, 0.0);
        assert_eq!(carousel.drag_cancel(&mut dom, &mut timers), Some(DragOutcome::Snap));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(dom.listener_count(), 0);
    }

    #[test]
    fn test_restarted_drag_releases_stale_listeners() {
        let (mut dom, mut timers, mut carousel) = setup(3);
        carousel.drag_start(&mut dom, &mut timers, PointerSource::Mouse, 10.0);
        carousel.drag_start(&mut dom, &mut timers, PointerSource::Mouse, 20.0);
        assert_eq!(dom.listener_count(), 4);
        carousel.drag_end(&mut dom, &mut timers);
        assert_eq!(dom.listener_count(), 0);
    }

    #[test]
    fn test_end_without_drag_is_ignored() {
        let (mut dom, mut timers, mut carousel) = setup(3);
        carousel.drag_move(&mut dom, 50.0);
        assert_eq!(dom.translate_x(carousel.track()), -TRACK_WIDTH);
        assert_eq!(carousel.drag_end(&mut dom, &mut timers), None);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_autoplay_suspended_by_drag() {
        let config = config().with_auto_play(Duration::from_millis(1000));
        let (mut dom, mut timers, mut carousel) = setup_with(3, config);
        assert!(carousel.is_autoplaying());
        assert!(carousel.start_autoplay(&mut timers));
        assert_eq!(timers.active_count(), 1);

        carousel.drag_start(&mut dom, &mut timers, PointerSource::Mouse, 0.0);
        assert!(!carousel.is_autoplaying());
        assert_eq!(timers.active_count(), 0);

        carousel.drag_end(&mut dom, &mut timers);
        assert!(carousel.is_autoplaying());
        assert_eq!(timers.active_count(), 1);
    }

    #[test]
    fn test_hover_pauses_autoplay() {
        let config = config().with_auto_play(Duration::from_millis(1000));
        let (_, mut timers, mut carousel) = setup_with(3, config);

        carousel.set_hovered(true, &mut timers);
        carousel.set_hovered(true, &mut timers);
        assert!(!carousel.is_autoplaying());

        carousel.set_hovered(false, &mut timers);
        assert!(carousel.is_autoplaying());
        assert_eq!(timers.active_count(), 1);
    }

    #[test]
    fn test_autoplay_tick_advances() {
        let config = config().with_auto_play(Duration::from_millis(1000));
        let (mut dom, mut timers, mut carousel) = setup_with(3, config);
        let (timer, task) = timers.pop_due(Duration::from_millis(1000)).unwrap();
        assert_eq!(task, TimerTask::Autoplay(CarouselId(0)));
        carousel.on_autoplay_tick(&mut dom, timer);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_responsive_breakpoints() {
        let config = config().with_breakpoint(768, 2).with_breakpoint(1024, 3);
        let (mut dom, _, mut carousel) = setup_with(3, config);
        assert_eq!(carousel.slides_per_view(), 1);

        for (width, expected) in [(1200, 3), (800, 2), (500, 1)] {
            dom.resize_viewport(width);
            assert_eq!(carousel.update_responsive(&dom), expected);
            assert_eq!(carousel.slides_per_view_signal().get(), expected);
        }
    }

    #[test]
    fn test_resize_timer_repositions_without_transition() {
        let config = config().with_breakpoint(768, 3);
        let (mut dom, mut timers, mut carousel) = setup_with(3, config);
        carousel.next(&mut dom);

        dom.resize_viewport(1000);
        carousel.on_resize(&mut timers);
        let (timer, task) = timers.pop_due(RESIZE_DEBOUNCE).unwrap();
        assert_eq!(task, TimerTask::Resize(CarouselId(0)));
        assert!(carousel.on_resize_timer(&mut dom, timer));
        assert!(!carousel.on_resize_timer(&mut dom, timer));

        assert_eq!(carousel.slides_per_view(), 3);
        assert_eq!(dom.transition(carousel.track()), Transition::None);
        assert_eq!(dom.translate_x(carousel.track()), -2.0 * TRACK_WIDTH / 3.0);
    }

    #[test]
    fn test_controls() {
        let (mut dom, _, mut carousel) = setup(3);
        let prev = carousel.prev_button().unwrap();
        let next = carousel.next_button().unwrap();
        let dot = carousel.indicators().dots()[2];

        assert_eq!(carousel.control_for(&dom, prev), Some(Control::Prev));
        assert_eq!(carousel.control_for(&dom, next), Some(Control::Next));
        assert_eq!(carousel.control_for(&dom, dot), Some(Control::Dot(2)));
        assert_eq!(carousel.control_for(&dom, carousel.track()), None);

        carousel.activate(&mut dom, Control::Dot(2));
        assert_eq!(carousel.current_index(), 3);
        carousel.activate(&mut dom, Control::Prev);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_index_signal_follows_navigation() {
        let (mut dom, _, mut carousel) = setup(3);
        let index = carousel.index_signal();
        carousel.next(&mut dom);
        assert_eq!(index.get(), 2);
        carousel.go_to_slide(&mut dom, 4);
        carousel.handle_transition_end(&mut dom);
        assert_eq!(index.get(), 1);
    }
}
