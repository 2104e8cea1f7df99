use cairo::{Context, ImageSurface};
use sketchpad::config::{Config, KeybindingsConfig, PanelStyle};
use sketchpad::draw::Surface;
use sketchpad::draw::color::{BLACK, WHITE};
use sketchpad::input::{
    DrawingMode, MouseButton, PointerSample, Sketchpad, StrokeStyle, ToolState,
};
use sketchpad::ui;

fn make_sketchpad(config: &Config) -> Sketchpad {
    let action_map = KeybindingsConfig::default().build_action_map().unwrap();
    let surface = Surface::new(config.canvas.width, config.canvas.height, WHITE).unwrap();
    Sketchpad::new(
        ToolState::new(DrawingMode::Line, StrokeStyle::new(BLACK, 5)),
        surface,
        action_map,
        true,
    )
}

fn surface_with_context(width: i32, height: i32) -> (ImageSurface, Context) {
    let surface = ImageSurface::create(cairo::Format::ARgb32, width, height).unwrap();
    let ctx = Context::new(&surface).unwrap();
    (surface, ctx)
}

fn surface_has_pixels(surface: &mut ImageSurface) -> bool {
    surface
        .data()
        .map(|data| data.iter().any(|byte| *byte != 0))
        .unwrap_or(false)
}

fn pixel_at(surface: &mut ImageSurface, x: i32, y: i32) -> [u8; 4] {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y as usize * stride + x as usize * 4;
    [
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]
}

#[test]
fn render_panel_draws_into_surface() {
    let style = PanelStyle::default();
    let height = ui::panel_height(&style);
    let (mut surface, ctx) = surface_with_context(style.width as i32, height as i32 + 1);
    let tools = ToolState::new(DrawingMode::Circle, StrokeStyle::new(BLACK, 12));

    ui::render_panel(
        &ctx,
        ui::Rect {
            x: 0.0,
            y: 0.0,
            width: style.width,
            height,
        },
        &tools,
        Some("1e9"),
        &style,
    );
    drop(ctx);

    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn render_help_overlay_draws_into_surface() {
    let config = Config::default();
    let (mut surface, ctx) = surface_with_context(800, 600);

    ui::render_help_overlay(&ctx, &config.ui.help_overlay_style, 800, 600);
    drop(ctx);

    assert!(surface_has_pixels(&mut surface));
}

#[test]
fn stroke_lands_at_layout_position_in_viewport() {
    let config = Config::default();
    let (vw, vh) = (1400, 900);
    let mut pad = make_sketchpad(&config);
    let layout = ui::compute_layout(vw, vh, &config.canvas, &config.ui, pad.show_panel);
    let bounds = layout.canvas;

    let at = |x: f64, y: f64| PointerSample::new(bounds.x + x, bounds.y + y);
    pad.on_pointer_down(MouseButton::Left, at(20.0, 40.0), bounds);
    for step in 1..=6 {
        pad.on_pointer_motion(at(20.0 + step as f64 * 10.0, 40.0), bounds);
    }
    pad.on_pointer_up(MouseButton::Left);

    let (mut viewport, ctx) = surface_with_context(vw as i32, vh as i32);
    pad.surface().blit(&ctx, bounds.x, bounds.y).unwrap();
    ui::render_canvas_border(&ctx, bounds, &config.canvas);
    drop(ctx);

    let origin_x = bounds.x as i32;
    let origin_y = bounds.y as i32;
    assert_eq!(pixel_at(&mut viewport, origin_x + 50, origin_y + 40), [0, 0, 0, 255]);
    assert_eq!(
        pixel_at(&mut viewport, origin_x + 50, origin_y + 100),
        [255, 255, 255, 255]
    );
    // Outside the canvas and its border nothing was drawn.
    assert_eq!(pixel_at(&mut viewport, 2, 2), [0, 0, 0, 0]);
}

#[test]
fn hiding_the_panel_recentres_the_canvas() {
    let config = Config::default();
    let with_panel = ui::compute_layout(1400, 900, &config.canvas, &config.ui, true);
    let without_panel = ui::compute_layout(1400, 900, &config.canvas, &config.ui, false);

    assert!(with_panel.panel.is_some());
    assert!(without_panel.panel.is_none());
    assert_eq!(
        without_panel.canvas.x,
        ((1400.0 - config.canvas.width as f64) / 2.0).floor()
    );
    assert_eq!(with_panel.canvas.y, without_panel.canvas.y);
}
