//! Track bounding-box computation.

use crate::types::{Bounds, Track, TrajectoryError};

/// Compute the extremal coordinates of a track in a single linear scan.
///
/// Which point supplies an extremum is irrelevant; only the extremal
/// values matter.
///
/// # Errors
///
/// Returns [`TrajectoryError::EmptyTrack`] if the track has no points.
pub fn bounding_box(track: &Track) -> Result<Bounds, TrajectoryError> {
    let mut points = track.points().iter();
    let Some(first) = points.next() else {
        return Err(TrajectoryError::EmptyTrack);
    };

    let mut bounds = Bounds {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x,
        max_y: first.y,
    };
    for p in points {
        bounds.min_x = bounds.min_x.min(p.x);
        bounds.min_y = bounds.min_y.min(p.y);
        bounds.max_x = bounds.max_x.max(p.x);
        bounds.max_y = bounds.max_y.max(p.y);
    }
    Ok(bounds)
}
