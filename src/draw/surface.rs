//! Persistent raster canvas that strokes are painted onto.

use super::color::Color;
use super::paint::PaintContext;
use anyhow::{Context, Result};

/// Default canvas edge length in pixels.
pub const DEFAULT_CANVAS_SIZE: u32 = 550;

/// Fixed-size ARGB raster target.
///
/// Pixels are mutated in place by paint calls; no shapes are retained, so a
/// clear discards everything drawn so far.
pub struct Surface {
    image: cairo::ImageSurface,
    width: u32,
    height: u32,
    background: Color,
}

impl Surface {
    /// Creates a `width`×`height` surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)
            .with_context(|| format!("Failed to create {}x{} canvas surface", width, height))?;

        let surface = Self {
            image,
            width,
            height,
            background,
        };

        let mut ctx = surface.context()?;
        ctx.clear(background);
        drop(ctx);

        Ok(surface)
    }

    /// Creates a paint context targeting this surface.
    pub fn context(&self) -> Result<cairo::Context> {
        cairo::Context::new(&self.image).context("Failed to create canvas paint context")
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color the surface is reset to when cleared.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Composites the canvas onto `ctx` with its top-left corner at (`x`, `y`).
    pub fn blit(&self, ctx: &cairo::Context, x: f64, y: f64) -> Result<()> {
        ctx.save().context("Failed to save context")?;
        ctx.set_source_surface(&self.image, x, y)
            .context("Failed to set canvas as paint source")?;
        ctx.rectangle(x, y, self.width as f64, self.height as f64);
        ctx.fill().context("Failed to composite canvas")?;
        ctx.restore().context("Failed to restore context")?;
        Ok(())
    }

    /// Reads back the pixel at (`x`, `y`) as `[r, g, b, a]` bytes.
    ///
    /// Returns `None` when out of bounds or while a paint context still
    /// borrows the surface.
    pub fn pixel(&mut self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.image.flush();
        let stride = self.image.stride() as usize;
        let data = self.image.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;
        let argb = u32::from_ne_bytes(bytes);

        Some([
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
            (argb >> 24) as u8,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED, WHITE};

    #[test]
    fn new_surface_is_filled_with_background() {
        let mut surface = Surface::new(20, 10, WHITE).unwrap();
        assert_eq!(surface.width(), 20);
        assert_eq!(surface.height(), 10);
        assert_eq!(surface.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(surface.pixel(19, 9), Some([255, 255, 255, 255]));
        assert_eq!(surface.pixel(20, 0), None);
    }

    #[test]
    fn clear_replaces_all_pixels() {
        let mut surface = Surface::new(8, 8, WHITE).unwrap();
        {
            let mut ctx = surface.context().unwrap();
            ctx.clear(RED);
        }
        assert_eq!(surface.pixel(4, 4), Some([255, 0, 0, 255]));

        {
            let mut ctx = surface.context().unwrap();
            ctx.clear(BLACK);
        }
        assert_eq!(surface.pixel(7, 7), Some([0, 0, 0, 255]));
    }

    #[test]
    fn blit_copies_canvas_at_offset() {
        let canvas = Surface::new(4, 4, RED).unwrap();
        let mut target = Surface::new(10, 10, WHITE).unwrap();
        {
            let ctx = target.context().unwrap();
            canvas.blit(&ctx, 3.0, 3.0).unwrap();
        }
        assert_eq!(target.pixel(2, 2), Some([255, 255, 255, 255]));
        assert_eq!(target.pixel(3, 3), Some([255, 0, 0, 255]));
        assert_eq!(target.pixel(6, 6), Some([255, 0, 0, 255]));
        assert_eq!(target.pixel(7, 7), Some([255, 255, 255, 255]));
    }
}
