//! Pointer tracking: gates the pointer stream and emits draw events.

use crate::draw::{Color, DrawEvent, PaintContext, Painter, Point};

use super::tool::ToolState;

/// Raw pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Placement of the canvas within the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceBounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open hit test: the right and bottom edges are outside.
    pub fn contains(&self, sample: PointerSample) -> bool {
        sample.x >= self.x
            && sample.y >= self.y
            && sample.x < self.x + self.width
            && sample.y < self.y + self.height
    }

    /// Translates a viewport sample into surface-local coordinates.
    pub fn to_local(&self, sample: PointerSample) -> Point {
        Point::new(sample.x - self.x, sample.y - self.y)
    }
}

/// Converts pointer down/move/up into draw events for a [`Painter`].
///
/// While active, each move paints the segment from the previous point to the
/// current one and then advances the previous point, so it always lags the
/// current point by exactly one move.
#[derive(Debug)]
pub struct PointerTracker<P: Painter> {
    painter: P,
    active: bool,
    previous: Option<Point>,
}

impl<P: Painter + Default> Default for PointerTracker<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P: Painter> PointerTracker<P> {
    pub fn new(painter: P) -> Self {
        Self {
            painter,
            active: false,
            previous: None,
        }
    }

    /// Starts a stroke. The first following move only establishes the baseline.
    pub fn activate(&mut self) {
        self.active = true;
        self.previous = None;
    }

    /// Handles a pointer move anywhere in the viewport.
    ///
    /// `bounds` must describe the canvas placement at the time of this move.
    /// Returns `true` if the painter was invoked.
    pub fn on_move(
        &mut self,
        sample: PointerSample,
        bounds: SurfaceBounds,
        ctx: &mut dyn PaintContext,
        tools: &ToolState,
    ) -> bool {
        if !self.active {
            return false;
        }

        let current = bounds.to_local(sample);
        if !current.is_finite() {
            log::trace!("Skipping pointer move with non-finite position {:?}", sample);
            return false;
        }

        self.painter.paint(
            DrawEvent {
                previous: self.previous,
                current,
                ctx,
            },
            tools,
        );
        self.previous = Some(current);
        true
    }

    /// Ends the stroke. Safe to call while already inactive.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.previous = None;
    }

    /// Fills the whole surface with `background` and drops the previous point.
    ///
    /// An in-progress stroke stays active and restarts from the next move.
    pub fn clear(&mut self, ctx: &mut dyn PaintContext, background: Color) {
        ctx.clear(background);
        self.previous = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn previous(&self) -> Option<Point> {
        self.previous
    }

    pub fn painter(&self) -> &P {
        &self.painter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::WHITE;
    use crate::draw::paint::{CommandRecorder, PaintCommand};
    use crate::input::{DrawingMode, StrokeStyle};
    use std::cell::RefCell;

    /// Painter that remembers every event it receives.
    #[derive(Default)]
    struct EventLog {
        events: RefCell<Vec<(Option<Point>, Point)>>,
    }

    impl Painter for EventLog {
        fn paint(&self, event: DrawEvent<'_>, _tools: &ToolState) {
            self.events
                .borrow_mut()
                .push((event.previous, event.current));
        }
    }

    const ORIGIN: SurfaceBounds = SurfaceBounds::new(0.0, 0.0, 550.0, 550.0);

    fn tools() -> ToolState {
        ToolState::new(DrawingMode::Line, StrokeStyle::default())
    }

    fn move_to(
        tracker: &mut PointerTracker<EventLog>,
        ctx: &mut CommandRecorder,
        x: f64,
        y: f64,
    ) -> bool {
        tracker.on_move(PointerSample::new(x, y), ORIGIN, ctx, &tools())
    }

    fn events(tracker: &PointerTracker<EventLog>) -> Vec<(Option<Point>, Point)> {
        tracker.painter().events.borrow().clone()
    }

    #[test]
    fn moves_while_inactive_never_paint() {
        let mut tracker = PointerTracker::<EventLog>::default();
        let mut ctx = CommandRecorder::default();

        for i in 0..10 {
            assert!(!move_to(&mut tracker, &mut ctx, i as f64, i as f64));
        }

        assert!(events(&tracker).is_empty());
        assert!(tracker.previous().is_none());
    }

    #[test]
    fn first_move_after_activate_has_no_previous() {
        let mut tracker = PointerTracker::<EventLog>::default();
        let mut ctx = CommandRecorder::default();

        tracker.activate();
        assert!(events(&tracker).is_empty());
        assert!(move_to(&mut tracker, &mut ctx, 4.0, 2.0));

        assert_eq!(events(&tracker), vec![(None, Point::new(4.0, 2.0))]);
    }

    #[test]
    fn previous_lags_current_by_one_move() {
        let mut tracker = PointerTracker::<EventLog>::default();
        let mut ctx = CommandRecorder::default();
        tracker.activate();

        let points = [(1.0, 1.0), (2.0, 3.0), (5.0, 8.0), (13.0, 21.0)];
        for (x, y) in points {
            move_to(&mut tracker, &mut ctx, x, y);
        }

        let log = events(&tracker);
        assert_eq!(log.len(), points.len());
        for (i, (previous, current)) in log.iter().enumerate() {
            assert_eq!(*current, Point::new(points[i].0, points[i].1));
            let expected = i.checked_sub(1).map(|j| Point::new(points[j].0, points[j].1));
            assert_eq!(*previous, expected);
        }
        assert_eq!(tracker.previous(), Some(Point::new(13.0, 21.0)));
    }

    #[test]
    fn deactivate_stops_painting_until_next_activate() {
        let mut tracker = PointerTracker::<EventLog>::default();
        let mut ctx = CommandRecorder::default();

        tracker.activate();
        move_to(&mut tracker, &mut ctx, 1.0, 1.0);
        tracker.deactivate();
        assert!(!tracker.is_active());
        assert!(tracker.previous().is_none());

        for _ in 0..5 {
            assert!(!move_to(&mut tracker, &mut ctx, 9.0, 9.0));
        }
        assert_eq!(events(&tracker).len(), 1);

        tracker.activate();
        move_to(&mut tracker, &mut ctx, 2.0, 2.0);
        assert_eq!(events(&tracker)[1], (None, Point::new(2.0, 2.0)));
    }

    #[test]
    fn deactivate_is_idempotent() {
        let mut tracker = PointerTracker::<EventLog>::default();
        tracker.deactivate();
        tracker.deactivate();
        assert!(!tracker.is_active());
        assert!(tracker.previous().is_none());
    }

    #[test]
    fn clear_resets_anchor_but_keeps_stroke_active() {
        let mut tracker = PointerTracker::<EventLog>::default();
        let mut ctx = CommandRecorder::default();

        tracker.activate();
        move_to(&mut tracker, &mut ctx, 1.0, 1.0);
        move_to(&mut tracker, &mut ctx, 2.0, 2.0);

        tracker.clear(&mut ctx, WHITE);
        assert!(tracker.is_active());
        assert_eq!(ctx.commands, vec![PaintCommand::Clear(WHITE)]);

        move_to(&mut tracker, &mut ctx, 3.0, 3.0);
        assert_eq!(events(&tracker)[2], (None, Point::new(3.0, 3.0)));
    }

    #[test]
    fn coordinates_are_relative_to_bounds_at_move_time() {
        let mut tracker = PointerTracker::<EventLog>::default();
        let mut ctx = CommandRecorder::default();
        let tools = tools();

        tracker.activate();
        let first = SurfaceBounds::new(100.0, 50.0, 550.0, 550.0);
        tracker.on_move(PointerSample::new(110.0, 70.0), first, &mut ctx, &tools);

        // Layout shifted between moves.
        let shifted = SurfaceBounds::new(80.0, 40.0, 550.0, 550.0);
        tracker.on_move(PointerSample::new(110.0, 70.0), shifted, &mut ctx, &tools);

        assert_eq!(
            events(&tracker),
            vec![
                (None, Point::new(10.0, 20.0)),
                (Some(Point::new(10.0, 20.0)), Point::new(30.0, 30.0)),
            ]
        );
    }

    #[test]
    fn non_finite_sample_is_skipped() {
        let mut tracker = PointerTracker::<EventLog>::default();
        let mut ctx = CommandRecorder::default();

        tracker.activate();
        move_to(&mut tracker, &mut ctx, 5.0, 5.0);
        assert!(!move_to(&mut tracker, &mut ctx, f64::NAN, 5.0));
        assert!(!move_to(&mut tracker, &mut ctx, 5.0, f64::INFINITY));

        assert_eq!(events(&tracker).len(), 1);
        assert_eq!(tracker.previous(), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn surface_bounds_hit_test_is_half_open() {
        let bounds = SurfaceBounds::new(10.0, 10.0, 100.0, 50.0);
        assert!(bounds.contains(PointerSample::new(10.0, 10.0)));
        assert!(bounds.contains(PointerSample::new(109.9, 59.9)));
        assert!(!bounds.contains(PointerSample::new(110.0, 30.0)));
        assert!(!bounds.contains(PointerSample::new(50.0, 60.0)));
        assert!(!bounds.contains(PointerSample::new(9.0, 30.0)));
    }
}
