//! Turns draw events into paint primitives for the selected mode.

use super::geometry::{Point, radius_between, rect_between};
use super::paint::PaintContext;
use crate::input::{DrawingMode, ToolState};
use std::f64::consts::PI;

/// One qualifying pointer move, handed to a [`Painter`].
///
/// `previous` is `None` for the first move of a stroke.
pub struct DrawEvent<'a> {
    pub previous: Option<Point>,
    pub current: Point,
    pub ctx: &'a mut dyn PaintContext,
}

/// Capability to paint a draw event with the current tool settings.
pub trait Painter {
    fn paint(&self, event: DrawEvent<'_>, tools: &ToolState);
}

/// Stateless renderer for line, rectangle and circle modes.
///
/// Every call begins a fresh path, applies the stroke style and strokes, so the
/// first call of a stroke (no previous point) strokes an empty path and leaves
/// the surface untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeRenderer;

impl Painter for ShapeRenderer {
    fn paint(&self, event: DrawEvent<'_>, tools: &ToolState) {
        let DrawEvent {
            previous,
            current,
            ctx,
        } = event;

        ctx.begin_path();
        ctx.set_line_width(tools.style.width() as f64);
        ctx.set_stroke_color(tools.style.color);

        if let Some(previous) = previous {
            match tools.mode() {
                DrawingMode::Line => trace_line(ctx, previous, current),
                DrawingMode::Rectangle => trace_rect(ctx, previous, current),
                DrawingMode::Circle => trace_circle(ctx, previous, current),
            }
        }

        ctx.stroke();
    }
}

fn trace_line(ctx: &mut dyn PaintContext, from: Point, to: Point) {
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
}

fn trace_rect(ctx: &mut dyn PaintContext, anchor: Point, opposite: Point) {
    let (x, y, w, h) = rect_between(anchor, opposite);
    ctx.rect(x, y, w, h);
}

fn trace_circle(ctx: &mut dyn PaintContext, center: Point, edge: Point) {
    ctx.arc(center.x, center.y, radius_between(center, edge), 0.0, 2.0 * PI);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLUE, RED};
    use crate::draw::paint::{CommandRecorder, PaintCommand};
    use crate::input::StrokeStyle;

    fn tools(mode: DrawingMode) -> ToolState {
        ToolState::new(mode, StrokeStyle::new(RED, 4))
    }

    fn paint(mode: DrawingMode, previous: Option<Point>, current: Point) -> CommandRecorder {
        let mut recorder = CommandRecorder::default();
        ShapeRenderer.paint(
            DrawEvent {
                previous,
                current,
                ctx: &mut recorder,
            },
            &tools(mode),
        );
        recorder
    }

    #[test]
    fn line_draws_segment_between_points() {
        let recorder = paint(
            DrawingMode::Line,
            Some(Point::new(0.0, 0.0)),
            Point::new(10.0, 0.0),
        );
        assert_eq!(
            recorder.commands,
            vec![
                PaintCommand::BeginPath,
                PaintCommand::LineWidth(4.0),
                PaintCommand::StrokeColor(RED),
                PaintCommand::MoveTo(0.0, 0.0),
                PaintCommand::LineTo(10.0, 0.0),
                PaintCommand::Stroke,
            ]
        );
    }

    #[test]
    fn no_geometry_without_previous_point() {
        for mode in DrawingMode::ALL {
            let recorder = paint(mode, None, Point::new(5.0, 5.0));
            assert!(recorder.segments().is_empty(), "{mode} emitted geometry");
            assert_eq!(recorder.commands.first(), Some(&PaintCommand::BeginPath));
            assert_eq!(recorder.commands.last(), Some(&PaintCommand::Stroke));
        }
    }

    #[test]
    fn rectangle_uses_previous_as_anchor() {
        let recorder = paint(
            DrawingMode::Rectangle,
            Some(Point::new(10.0, 10.0)),
            Point::new(30.0, 25.0),
        );
        assert_eq!(
            recorder.segments(),
            vec![PaintCommand::Rect(10.0, 10.0, 20.0, 15.0)]
        );
    }

    #[test]
    fn rectangle_keeps_negative_extents() {
        let recorder = paint(
            DrawingMode::Rectangle,
            Some(Point::new(30.0, 25.0)),
            Point::new(10.0, 10.0),
        );
        assert_eq!(
            recorder.segments(),
            vec![PaintCommand::Rect(30.0, 25.0, -20.0, -15.0)]
        );
    }

    #[test]
    fn circle_radius_is_distance_to_current() {
        let recorder = paint(
            DrawingMode::Circle,
            Some(Point::new(0.0, 0.0)),
            Point::new(3.0, 4.0),
        );
        assert_eq!(
            recorder.segments(),
            vec![PaintCommand::Arc(0.0, 0.0, 5.0, 0.0, 2.0 * PI)]
        );
    }

    #[test]
    fn style_is_read_at_call_time() {
        let mut tools = tools(DrawingMode::Line);
        let mut recorder = CommandRecorder::default();
        tools.style.color = BLUE;
        tools.style.set_width(17);

        ShapeRenderer.paint(
            DrawEvent {
                previous: Some(Point::new(1.0, 1.0)),
                current: Point::new(2.0, 2.0),
                ctx: &mut recorder,
            },
            &tools,
        );

        assert!(recorder.commands.contains(&PaintCommand::LineWidth(17.0)));
        assert!(recorder.commands.contains(&PaintCommand::StrokeColor(BLUE)));
    }
}
