//! Paint context abstraction over the raster surface.
//!
//! The renderer only ever talks to a [`PaintContext`]; the Cairo implementation
//! is what the overlay uses, and tests substitute a command recorder.

use super::color::Color;

/// Primitive path/paint operations on a drawing surface.
pub trait PaintContext {
    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);
    fn set_line_width(&mut self, width: f64);
    fn set_stroke_color(&mut self, color: Color);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Adds a rectangle sub-path; negative extents are allowed.
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Adds a circular arc sub-path, angles in radians.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64);
    /// Strokes the accumulated path with the current width and color.
    fn stroke(&mut self);
    /// Replaces every pixel of the drawable region with `color`.
    fn clear(&mut self, color: Color);
}

impl PaintContext for cairo::Context {
    fn begin_path(&mut self) {
        self.new_path();
    }

    fn set_line_width(&mut self, width: f64) {
        cairo::Context::set_line_width(self, width);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        cairo::Context::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        cairo::Context::line_to(self, x, y);
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.rectangle(x, y, width, height);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        // A bare arc would connect to the current point; start a sub-path.
        self.new_sub_path();
        cairo::Context::arc(self, cx, cy, radius, start, end);
    }

    fn stroke(&mut self) {
        if let Err(err) = cairo::Context::stroke(self) {
            log::trace!("Stroke failed: {}", err);
        }
    }

    fn clear(&mut self, color: Color) {
        let _ = self.save();
        self.new_path();
        self.set_operator(cairo::Operator::Source);
        self.set_source_rgba(color.r, color.g, color.b, color.a);
        if let Err(err) = self.paint() {
            log::warn!("Failed to clear surface: {}", err);
        }
        let _ = self.restore();
    }
}

/// A single recorded paint call.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PaintCommand {
    BeginPath,
    LineWidth(f64),
    StrokeColor(Color),
    MoveTo(f64, f64),
    LineTo(f64, f64),
    Rect(f64, f64, f64, f64),
    Arc(f64, f64, f64, f64, f64),
    Stroke,
    Clear(Color),
}

/// Paint context that records every call instead of drawing.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct CommandRecorder {
    pub commands: Vec<PaintCommand>,
}

#[cfg(test)]
impl CommandRecorder {
    /// Recorded commands that add geometry to the path.
    pub fn segments(&self) -> Vec<PaintCommand> {
        self.commands
            .iter()
            .filter(|cmd| {
                matches!(
                    cmd,
                    PaintCommand::MoveTo(..)
                        | PaintCommand::LineTo(..)
                        | PaintCommand::Rect(..)
                        | PaintCommand::Arc(..)
                )
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
impl PaintContext for CommandRecorder {
    fn begin_path(&mut self) {
        self.commands.push(PaintCommand::BeginPath);
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(PaintCommand::LineWidth(width));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(PaintCommand::StrokeColor(color));
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PaintCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PaintCommand::LineTo(x, y));
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.commands.push(PaintCommand::Rect(x, y, width, height));
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.commands
            .push(PaintCommand::Arc(cx, cy, radius, start, end));
    }

    fn stroke(&mut self) {
        self.commands.push(PaintCommand::Stroke);
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(PaintCommand::Clear(color));
    }
}
