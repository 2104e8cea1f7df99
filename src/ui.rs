/// UI rendering: canvas layout, control panel, help overlay
use crate::config::{CanvasConfig, HelpOverlayStyle, PanelPosition, PanelStyle, UiConfig};
use crate::input::{DrawingMode, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, SurfaceBounds, ToolState};

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Text rows reserved in the panel, including one spare
const PANEL_ROWS: f64 = 13.0;
/// Row height as a multiple of the panel font size
const PANEL_ROW_SCALE: f64 = 1.6;
/// Height of the width slider track
const SLIDER_TRACK_HEIGHT: f64 = 4.0;
/// Radius of the width slider knob
const SLIDER_KNOB_RADIUS: f64 = 7.0;

/// Fallback character width for monospace font estimation
const HELP_CHAR_WIDTH_ESTIMATE: f64 = 9.0;

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Placement of the canvas and control panel within the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub canvas: SurfaceBounds,
    pub panel: Option<Rect>,
}

/// Height of the control panel for the given style.
pub fn panel_height(style: &PanelStyle) -> f64 {
    style.padding * 2.0 + PANEL_ROWS * style.font_size * PANEL_ROW_SCALE
}

/// Computes where the canvas and panel go for the current viewport size.
///
/// The canvas and the panel (when shown) form one group centred in the
/// viewport, separated by the panel padding. Positions are floored to whole
/// pixels so the canvas blit stays crisp. Call this on every render and for
/// every pointer event: it depends on the live viewport size and panel
/// visibility.
pub fn compute_layout(
    viewport_width: u32,
    viewport_height: u32,
    canvas: &CanvasConfig,
    ui: &UiConfig,
    show_panel: bool,
) -> Layout {
    let vw = viewport_width as f64;
    let vh = viewport_height as f64;
    let cw = canvas.width as f64;
    let ch = canvas.height as f64;
    let canvas_y = ((vh - ch) / 2.0).floor();

    if !show_panel {
        return Layout {
            canvas: SurfaceBounds::new(((vw - cw) / 2.0).floor(), canvas_y, cw, ch),
            panel: None,
        };
    }

    let style = &ui.panel_style;
    let gap = style.padding;
    let group_x = ((vw - (style.width + gap + cw)) / 2.0).floor();
    let (panel_x, canvas_x) = match ui.panel_position {
        PanelPosition::Left => (group_x, group_x + style.width + gap),
        PanelPosition::Right => (group_x + cw + gap, group_x),
    };

    let height = panel_height(style);
    Layout {
        canvas: SurfaceBounds::new(canvas_x, canvas_y, cw, ch),
        panel: Some(Rect {
            x: panel_x,
            y: ((vh - height) / 2.0).floor(),
            width: style.width,
            height,
        }),
    }
}

/// Draws the border around the canvas.
pub fn render_canvas_border(ctx: &cairo::Context, bounds: SurfaceBounds, canvas: &CanvasConfig) {
    if canvas.border_width <= 0.0 {
        return;
    }

    let half = canvas.border_width / 2.0;
    let [r, g, b, a] = canvas.border_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(canvas.border_width);
    ctx.rectangle(
        bounds.x - half,
        bounds.y - half,
        bounds.width + canvas.border_width,
        bounds.height + canvas.border_width,
    );
    let _ = ctx.stroke();
}

/// Render the control panel: width slider, color swatch, mode selector and key hints.
///
/// While a hex color entry is open its digits replace the color name beside
/// the swatch.
pub fn render_panel(
    ctx: &cairo::Context,
    rect: Rect,
    tools: &ToolState,
    color_entry: Option<&str>,
    style: &PanelStyle,
) {
    let row = style.font_size * PANEL_ROW_SCALE;
    let left = rect.x + style.padding;
    let inner_width = rect.width - style.padding * 2.0;

    // Background and frame
    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(rect.x, rect.y, rect.width, rect.height);
    let _ = ctx.fill();

    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(1.0);
    ctx.rectangle(rect.x + 0.5, rect.y + 0.5, rect.width - 1.0, rect.height - 1.0);
    let _ = ctx.stroke();

    ctx.set_font_size(style.font_size);
    let mut y = rect.y + style.padding;
    let text_row = |ctx: &cairo::Context, text: &str, bold: bool, y: &mut f64| {
        *y += row;
        let weight = if bold {
            cairo::FontWeight::Bold
        } else {
            cairo::FontWeight::Normal
        };
        ctx.select_font_face("Sans", cairo::FontSlant::Normal, weight);
        ctx.move_to(left, *y);
        if let Err(e) = ctx.show_text(text) {
            log::warn!("Failed to draw panel text '{}': {}", text, e);
        }
    };

    // Width slider
    let width = tools.style.width();
    text_row(ctx, &format!("Width of Pen: {}px", width), true, &mut y);
    y += row / 2.0;
    let span = (MAX_STROKE_WIDTH - MIN_STROKE_WIDTH) as f64;
    let fraction = (width - MIN_STROKE_WIDTH) as f64 / span;
    ctx.rectangle(
        left,
        y - SLIDER_TRACK_HEIGHT / 2.0,
        inner_width,
        SLIDER_TRACK_HEIGHT,
    );
    let _ = ctx.fill();
    ctx.arc(
        left + fraction * inner_width,
        y,
        SLIDER_KNOB_RADIUS,
        0.0,
        2.0 * std::f64::consts::PI,
    );
    let _ = ctx.fill();
    y += row / 2.0;

    // Color swatch
    let color = tools.style.color;
    text_row(ctx, "Color", true, &mut y);
    y += row;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.rectangle(left, y - style.swatch_size, style.swatch_size, style.swatch_size);
    let _ = ctx.fill();
    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(1.0);
    ctx.rectangle(
        left + 0.5,
        y - style.swatch_size + 0.5,
        style.swatch_size - 1.0,
        style.swatch_size - 1.0,
    );
    let _ = ctx.stroke();
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    ctx.move_to(left + style.swatch_size + 8.0, y - 3.0);
    let swatch_label = match color_entry {
        Some(digits) => format!("Hex: #{}_", digits),
        None => crate::util::describe_color(&color),
    };
    let _ = ctx.show_text(&swatch_label);

    // Mode selector
    text_row(ctx, "Shape", true, &mut y);
    for (i, mode) in DrawingMode::ALL.iter().enumerate() {
        let marker = if *mode == tools.mode() { "●" } else { "○" };
        let label = format!("{} {}  {}", marker, i + 1, mode.label());
        text_row(ctx, &label, *mode == tools.mode(), &mut y);
    }

    // Key hints
    y += row;
    for hint in ["X  Clear canvas", "E  Erase", "F10  Help"] {
        text_row(ctx, hint, false, &mut y);
    }
}

/// Render help overlay showing all keybindings
pub fn render_help_overlay(
    ctx: &cairo::Context,
    style: &HelpOverlayStyle,
    screen_width: u32,
    screen_height: u32,
) {
    let help_text = [
        "━━━━━━━━━━━━━━━━━━━━━━ SKETCHPAD CONTROLS ━━━━━━━━━━━━━━━━━━━━━━",
        "",
        "  SHAPES                            PEN",
        "    1 / L         Line                +/= Scroll Up    Wider",
        "    2             Rectangle           -/_ Scroll Down  Narrower",
        "    3             Circle",
        "    Tab           Next shape          COLORS:  R G B Y O P W K",
        "",
        "  CANVAS                            WINDOW",
        "    X             Clear canvas        F10              Toggle help",
        "    E             Erase (white pen)   F12              Toggle panel",
        "    # / H         Type hex color",
        "                                      Escape/Ctrl+Q    Exit",
        "",
        "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━",
        "  Note: changing shape clears the canvas and selects the eraser",
    ];

    // Set font
    ctx.set_font_size(style.font_size);
    ctx.select_font_face(
        "Monospace",
        cairo::FontSlant::Normal,
        cairo::FontWeight::Normal,
    );

    // Find longest line for width
    let mut max_width: f64 = 0.0;
    for line in &help_text {
        let extents = match ctx.text_extents(line) {
            Ok(ext) => ext,
            Err(e) => {
                log::warn!(
                    "Failed to measure help text line '{}': {}, using fallback width",
                    line,
                    e
                );
                let fallback_width = line.chars().count() as f64 * HELP_CHAR_WIDTH_ESTIMATE;
                max_width = max_width.max(fallback_width);
                continue;
            }
        };
        max_width = max_width.max(extents.width());
    }

    let box_width = max_width + style.padding * 2.0;
    let box_height = (help_text.len() as f64) * style.line_height + style.padding * 2.0;

    // Center the box
    let box_x = (screen_width as f64 - box_width) / 2.0;
    let box_y = (screen_height as f64 - box_height) / 2.0;

    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.fill();

    let [r, g, b, a] = style.border_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(style.border_width);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.stroke();

    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    for (i, line) in help_text.iter().enumerate() {
        let text_x = box_x + style.padding;
        let text_y = box_y + style.padding + (i as f64 + 1.0) * style.line_height;

        ctx.move_to(text_x, text_y);
        let _ = ctx.show_text(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configs() -> (CanvasConfig, UiConfig) {
        (CanvasConfig::default(), UiConfig::default())
    }

    #[test]
    fn canvas_is_centred_without_panel() {
        let (canvas, ui) = configs();
        let layout = compute_layout(1150, 750, &canvas, &ui, false);

        assert_eq!(layout.canvas, SurfaceBounds::new(300.0, 100.0, 550.0, 550.0));
        assert!(layout.panel.is_none());
    }

    #[test]
    fn panel_left_pushes_canvas_right() {
        let (canvas, ui) = configs();
        // group = 240 panel + 28 gap + 550 canvas = 818
        let layout = compute_layout(1018, 750, &canvas, &ui, true);

        let panel = layout.panel.unwrap();
        assert_eq!(panel.x, 100.0);
        assert_eq!(layout.canvas.x, 100.0 + 240.0 + 28.0);
        assert_eq!(layout.canvas.y, 100.0);
    }

    #[test]
    fn panel_right_keeps_canvas_first() {
        let (canvas, mut ui) = configs();
        ui.panel_position = PanelPosition::Right;
        let layout = compute_layout(1018, 750, &canvas, &ui, true);

        assert_eq!(layout.canvas.x, 100.0);
        assert_eq!(layout.panel.unwrap().x, 100.0 + 550.0 + 28.0);
    }

    #[test]
    fn layout_follows_viewport_resize() {
        let (canvas, ui) = configs();
        let before = compute_layout(1150, 750, &canvas, &ui, true);
        let after = compute_layout(1000, 750, &canvas, &ui, true);

        assert_eq!(before.canvas.x - after.canvas.x, 75.0);
        assert_eq!(before.canvas.width, after.canvas.width);
    }

    #[test]
    fn small_viewport_places_canvas_off_origin() {
        let (canvas, ui) = configs();
        let layout = compute_layout(400, 300, &canvas, &ui, false);
        assert_eq!(layout.canvas.x, -75.0);
        assert_eq!(layout.canvas.y, -125.0);
    }
}
