//! kiseki-render: Concrete drawing surfaces for kiseki trajectories.
//!
//! Implements [`kiseki_pipeline::LineSink`] twice:
//!
//! - [`SvgCanvas`] records lines and serializes them as an SVG document.
//! - [`RasterCanvas`] strokes lines onto an in-memory pixmap for PNG
//!   output or pixel-level inspection.
//!
//! Both surfaces are sized from a [`kiseki_pipeline::Viewport`], so the
//! default viewport yields a 240x320 image matching the target panel.

pub mod raster;
pub mod svg;

pub use raster::RasterCanvas;
pub use svg::SvgCanvas;

/// Errors from constructing a drawing surface.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The viewport cannot be realized as a pixel buffer, either because
    /// a maximum is negative or because the buffer would be too large.
    #[error("viewport with x_max {x_max} and y_max {y_max} is not a drawable canvas")]
    InvalidCanvas { x_max: i32, y_max: i32 },
}
