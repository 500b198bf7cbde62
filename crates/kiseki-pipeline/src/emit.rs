//! Turning a fitted track into straight-line drawing calls.
//!
//! The pipeline never touches a device directly. Anything that can draw
//! a straight line between two device coordinates implements
//! [`LineSink`], and [`emit_lines`] walks the track pairwise over it.
//! A track with fewer than two points produces no calls at all.

use crate::types::{Track, Viewport};

/// A drawing surface that accepts straight lines in device coordinates.
pub trait LineSink {
    /// Prepare the surface for a fresh trajectory.
    ///
    /// Called once before any lines are drawn. The default does nothing;
    /// raster surfaces typically clear to the background color here.
    fn begin(&mut self) {}

    /// Draw a straight line from `(x1, y1)` to `(x2, y2)`.
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
}

/// Draw one line per consecutive pair of track points.
///
/// A track with `n` points produces exactly `n - 1` calls; empty and
/// single-point tracks produce none.
pub fn emit_lines<S: LineSink>(track: &Track, sink: &mut S) {
    for pair in track.points().windows(2) {
        let [a, b] = pair else { continue };
        sink.draw_line(a.x, a.y, b.x, b.y);
    }
}

/// Draw the rectangular border of `viewport` as four lines.
///
/// Edges are drawn left, bottom, right, top, ending where the first
/// line began.
pub fn emit_frame<S: LineSink>(viewport: Viewport, sink: &mut S) {
    let Viewport {
        x_min,
        x_max,
        y_min,
        y_max,
    } = viewport;
    sink.draw_line(x_min, y_min, x_min, y_max);
    sink.draw_line(x_min, y_max, x_max, y_max);
    sink.draw_line(x_max, y_max, x_max, y_min);
    sink.draw_line(x_max, y_min, x_min, y_min);
}
