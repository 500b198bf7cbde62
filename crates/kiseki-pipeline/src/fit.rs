//! In-place fitting of a track into the device viewport.
//!
//! Fitting is a two-stage destructive transform:
//!
//! 1. **Shift**: any axis with a negative minimum is translated so that
//!    minimum becomes 0 (each axis independently).
//! 2. **Scale**: coordinates are mapped into the viewport using a single
//!    combined span:
//!
//! ```text
//! span   = max(max_x, max_y)                            (post-shift)
//! origin = min(min_x, min_y)                            (post-shift)
//! x' = x_min + (x_max - x_min) / (span - origin) × (x - origin)
//! y' = y_max - (y_max - y_min) / (span - origin) × (y - origin)
//! ```
//!
//! Both axes share one span, so aspect ratio is preserved and the track
//! may under-fill the shorter viewport axis. The y mapping is
//! **flipped**: track space uses the mathematical convention of +y
//! pointing up, while device y grows downward.
//!
//! Shifts and spans are carried in 64-bit arithmetic, so a track
//! touching both `i32` extremes still fits. Results are rounded to the
//! nearest device pixel and clamped to the viewport edges.

use crate::bounds::bounding_box;
use crate::types::{Track, TrajectoryError, Viewport};

/// Fit a track into `viewport` in place.
///
/// After a successful call every point lies within the viewport on both
/// axes, with track-space +y mapped toward the viewport's top edge. On
/// failure the track is left unmodified.
///
/// # Errors
///
/// Returns [`TrajectoryError::EmptyTrack`] if the track has no points,
/// and [`TrajectoryError::DegenerateTrack`] if the post-shift combined
/// extent is empty (`span == origin`), as for a zero-segment track
/// sitting at the origin.
pub fn fit_to_viewport(track: &mut Track, viewport: Viewport) -> Result<(), TrajectoryError> {
    let bounds = bounding_box(track)?;

    // A shift of -i32::MIN, or a shifted maximum reaching across both
    // i32 extremes, does not fit in 32 bits; translate in i64.
    let shift_x = if bounds.min_x < 0 {
        -i64::from(bounds.min_x)
    } else {
        0
    };
    let shift_y = if bounds.min_y < 0 {
        -i64::from(bounds.min_y)
    } else {
        0
    };

    let span = (i64::from(bounds.max_x) + shift_x).max(i64::from(bounds.max_y) + shift_y);
    let origin = (i64::from(bounds.min_x) + shift_x).min(i64::from(bounds.min_y) + shift_y);
    if span == origin {
        return Err(TrajectoryError::DegenerateTrack);
    }

    let extent = to_f64(span - origin);
    let scale_x = (f64::from(viewport.x_max) - f64::from(viewport.x_min)) / extent;
    let scale_y = (f64::from(viewport.y_max) - f64::from(viewport.y_min)) / extent;
    for p in track.points_mut() {
        let tx = to_f64(i64::from(p.x) + shift_x - origin);
        let ty = to_f64(i64::from(p.y) + shift_y - origin);
        let fx = scale_x.mul_add(tx, f64::from(viewport.x_min));
        let fy = ty.mul_add(-scale_y, f64::from(viewport.y_max));
        p.x = to_device(fx, viewport.x_min, viewport.x_max);
        p.y = to_device(fy, viewport.y_min, viewport.y_max);
    }
    Ok(())
}

/// Widen to f64. Exact here: fitting magnitudes stay far below 2^53.
#[allow(clippy::cast_precision_loss)]
fn to_f64(v: i64) -> f64 {
    v as f64
}

/// Round to the nearest device pixel, clamped to the viewport edge.
#[allow(clippy::cast_possible_truncation)]
fn to_device(v: f64, lo: i32, hi: i32) -> i32 {
    v.clamp(f64::from(lo), f64::from(hi)).round() as i32
}
