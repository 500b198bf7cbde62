//! Dead-reckoning accumulation of heading segments into a track.
//!
//! Each heading segment is converted to a Cartesian displacement
//! ([`crate::polar`]) and added to the previous absolute position,
//! starting from the origin. A log of `n` segments therefore produces
//! a track of `n + 1` points with `track[0] == (0, 0)`.

use crate::polar;
use crate::types::{Point, PolarSegment, Track, TrajectoryError};

/// Accumulate heading segments into an absolute track.
///
/// The returned track starts at the origin and has exactly
/// `segments.len() + 1` points. `max_segments` is the capacity of one
/// drawing operation, configured via
/// [`crate::types::TrajectoryConfig::max_segments`].
///
/// Positions accumulate in 64-bit arithmetic, so long logs fail cleanly
/// instead of wrapping when they walk past the `i32` coordinate range.
///
/// Pure function of its input; each call allocates its own buffer.
///
/// # Errors
///
/// Returns [`TrajectoryError::CapacityExceeded`] when more segments
/// are supplied than `max_segments`, and
/// [`TrajectoryError::CoordinateOverflow`] when a segment's endpoint
/// cannot be stored as an `i32` point.
pub fn reckon_track(
    segments: &[PolarSegment],
    max_segments: usize,
) -> Result<Track, TrajectoryError> {
    if segments.len() > max_segments {
        return Err(TrajectoryError::CapacityExceeded {
            segments: segments.len(),
            max_segments,
        });
    }

    let mut points = Vec::with_capacity(segments.len() + 1);
    points.push(Point::new(0, 0));
    let (mut x, mut y) = (0_i64, 0_i64);
    for (index, segment) in segments.iter().enumerate() {
        x += i64::from(polar::dx(segment.heading_deg, segment.steps));
        y += i64::from(polar::dy(segment.heading_deg, segment.steps));
        let (Ok(px), Ok(py)) = (i32::try_from(x), i32::try_from(y)) else {
            return Err(TrajectoryError::CoordinateOverflow { segment: index + 1 });
        };
        points.push(Point::new(px, py));
    }
    Ok(Track::new(points))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::TrajectoryConfig;

    #[test]
    fn track_has_one_more_point_than_segments() {
        for n in [0usize, 1, 2, 7] {
            let segments = vec![PolarSegment::new(90.0, 1); n];
            let track = reckon_track(&segments, 16).unwrap();
            assert_eq!(track.len(), n + 1, "track length for {n} segments");
        }
    }

    #[test]
    fn track_starts_at_origin() {
        let segments = [PolarSegment::new(215.0, 9), PolarSegment::new(10.0, 3)];
        let track = reckon_track(&segments, 8).unwrap();
        assert_eq!(track.first(), Some(&Point::new(0, 0)));
    }

    #[test]
    fn zero_segments_yield_origin_only() {
        let track = reckon_track(&[], 8).unwrap();
        assert_eq!(track.points(), &[Point::new(0, 0)]);
    }

    #[test]
    fn accumulates_displacements() {
        // 5 steps at heading 0 moves to (-5, 0); 5 steps at heading 90
        // then moves up to (-5, 5).
        let segments = [PolarSegment::new(0.0, 5), PolarSegment::new(90.0, 5)];
        let track = reckon_track(&segments, 8).unwrap();
        assert_eq!(
            track.points(),
            &[Point::new(0, 0), Point::new(-5, 0), Point::new(-5, 5)],
        );
    }

    #[test]
    fn out_and_back_returns_to_origin() {
        let segments = [PolarSegment::new(40.0, 12), PolarSegment::new(40.0, -12)];
        let track = reckon_track(&segments, 8).unwrap();
        assert_eq!(track.last(), Some(&Point::new(0, 0)));
    }

    #[test]
    fn capacity_boundary_succeeds() {
        let segments = vec![PolarSegment::new(0.0, 1); 3];
        let track = reckon_track(&segments, 3).unwrap();
        assert_eq!(track.len(), 4);
    }

    #[test]
    fn capacity_exceeded_fails() {
        let segments = vec![PolarSegment::new(0.0, 1); 4];
        let err = reckon_track(&segments, 3).unwrap_err();
        assert_eq!(
            err,
            TrajectoryError::CapacityExceeded {
                segments: 4,
                max_segments: 3,
            },
        );
    }

    #[test]
    fn accumulation_past_i32_range_is_rejected() {
        // Two maximal east legs: the second endpoint lands past
        // i32::MAX and cannot be stored as a point.
        let east = PolarSegment::new(180.0, 2_000_000_000);
        let err = reckon_track(&[east, east], 8).unwrap_err();
        assert_eq!(err, TrajectoryError::CoordinateOverflow { segment: 2 });
    }

    #[test]
    fn accumulation_within_i32_range_succeeds() {
        let east = PolarSegment::new(180.0, 1_000_000_000);
        let west = PolarSegment::new(0.0, 1_000_000_000);
        let track = reckon_track(&[east, east, west], 8).unwrap();
        assert_eq!(track.last(), Some(&Point::new(1_000_000_000, 0)));
    }

    #[test]
    fn default_capacity_accepts_exactly_default_max() {
        let max = TrajectoryConfig::DEFAULT_MAX_SEGMENTS;
        let segments = vec![PolarSegment::new(180.0, 1); max];
        assert!(reckon_track(&segments, max).is_ok());
        let segments = vec![PolarSegment::new(180.0, 1); max + 1];
        assert!(reckon_track(&segments, max).is_err());
    }
}
