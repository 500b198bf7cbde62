//! Raster drawing surface backed by tiny-skia.
//!
//! Approximates the target panel in memory: [`LineSink::begin`] clears
//! the surface to white and each line is stroked in opaque black at
//! width 1 with round caps.
//!
//! Integer device coordinates address pixel centers, so endpoints are
//! offset by half a pixel before rasterization. `tiny-skia` handles
//! sub-pixel positioning and anti-aliasing internally.

use image::{Rgba, RgbaImage};
use tiny_skia::{Color, LineCap, Paint, PathBuilder, Pixmap, Stroke, Transform};

use kiseki_pipeline::{LineSink, Viewport};

use crate::RenderError;

/// A [`LineSink`] that strokes lines onto an RGBA pixmap.
pub struct RasterCanvas {
    pixmap: Pixmap,
}

impl RasterCanvas {
    /// Create a canvas sized to the given viewport, cleared to white.
    ///
    /// A viewport with `x_max = 239, y_max = 319` yields a 240x320
    /// pixmap.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidCanvas`] if a viewport maximum is
    /// below zero or the pixmap would exceed what tiny-skia supports.
    pub fn new(viewport: Viewport) -> Result<Self, RenderError> {
        let invalid = || RenderError::InvalidCanvas {
            x_max: viewport.x_max,
            y_max: viewport.y_max,
        };
        let width = u32::try_from(viewport.x_max.saturating_add(1)).map_err(|_| invalid())?;
        let height = u32::try_from(viewport.y_max.saturating_add(1)).map_err(|_| invalid())?;
        let mut pixmap = Pixmap::new(width, height).ok_or_else(invalid)?;
        pixmap.fill(Color::WHITE);
        Ok(Self { pixmap })
    }

    /// Pixel dimensions of the canvas.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    /// Borrow the underlying pixmap.
    #[must_use]
    pub const fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Convert the canvas into a straight-alpha [`RgbaImage`].
    ///
    /// tiny-skia stores premultiplied RGBA while `image` expects
    /// straight alpha, so each pixel is un-premultiplied during the
    /// copy.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn into_image(self) -> RgbaImage {
        let width = self.pixmap.width();
        let height = self.pixmap.height();
        let data = self.pixmap.data();
        let mut img = RgbaImage::new(width, height);
        for (i, pixel) in img.pixels_mut().enumerate() {
            let off = i * 4;
            let a = data[off + 3];
            if a == 0 {
                *pixel = Rgba([0, 0, 0, 0]);
            } else {
                // Un-premultiply: channel = premultiplied * 255 / alpha.
                let r = u16::from(data[off]) * 255 / u16::from(a);
                let g = u16::from(data[off + 1]) * 255 / u16::from(a);
                let b = u16::from(data[off + 2]) * 255 / u16::from(a);
                *pixel = Rgba([r as u8, g as u8, b as u8, a]);
            }
        }
        img
    }
}

impl LineSink for RasterCanvas {
    fn begin(&mut self) {
        self.pixmap.fill(Color::WHITE);
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let mut pb = PathBuilder::new();
        pb.move_to(x1 as f32 + 0.5, y1 as f32 + 0.5);
        pb.line_to(x2 as f32 + 0.5, y2 as f32 + 0.5);
        let Some(path) = pb.finish() else {
            return;
        };

        let stroke = Stroke {
            width: 1.0,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        let mut paint = Paint::default();
        paint.set_color_rgba8(0, 0, 0, 255);
        paint.anti_alias = true;

        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}
