//! Shared types for the kiseki trajectory pipeline.

use serde::{Deserialize, Serialize};

/// A single directed move in a heading log: a polar vector of
/// `steps` steps along `heading_deg`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarSegment {
    /// Heading angle in degrees. Any real value is accepted (no
    /// normalization into `[0, 360)`); see [`crate::polar`] for the
    /// direction convention.
    pub heading_deg: f64,

    /// Step count along the heading. Negative values reverse the
    /// direction.
    pub steps: i32,
}

impl PolarSegment {
    /// Create a new segment.
    #[must_use]
    pub const fn new(heading_deg: f64, steps: i32) -> Self {
        Self { heading_deg, steps }
    }
}

/// A 2D point with integer coordinates.
///
/// Carries either an absolute track coordinate (Cartesian convention,
/// +y visually up) or a device coordinate (screen convention, +y grows
/// downward) depending on pipeline stage. The two frames share a shape
/// but must not be mixed; [`crate::fit::fit_to_viewport`] is the only
/// crossing point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position.
    pub x: i32,
    /// Vertical position.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An ordered sequence of connected track points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track(Vec<Point>);

impl Track {
    /// Create a new track from a vector of points.
    #[must_use]
    pub const fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// Returns `true` if the track has no points.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of points in the track.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point> {
        self.0.first()
    }

    /// Returns the last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point> {
        self.0.last()
    }

    /// Returns a slice of all points.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consumes the track and returns the underlying vector of points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }

    /// Mutable access for the in-place fitting stage.
    pub(crate) fn points_mut(&mut self) -> &mut [Point] {
        &mut self.0
    }
}

/// Extremal coordinates of a track.
///
/// Derived data: recomputed per drawing operation and never kept alive
/// independently of the track it describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Smallest x over the track.
    pub min_x: i32,
    /// Smallest y over the track.
    pub min_y: i32,
    /// Largest x over the track.
    pub max_x: i32,
    /// Largest y over the track.
    pub max_y: i32,
}

/// The device-space rectangle trajectories are scaled into.
///
/// Coordinates are inclusive device pixel positions with y growing
/// downward. Fields are public and unvalidated; callers are expected
/// to supply `x_min <= x_max` and `y_min <= y_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Left edge.
    pub x_min: i32,
    /// Right edge.
    pub x_max: i32,
    /// Top edge.
    pub y_min: i32,
    /// Bottom edge.
    pub y_max: i32,
}

impl Viewport {
    /// Width in pixels of the default portrait TFT panel.
    pub const DEFAULT_WIDTH: i32 = 240;

    /// Height in pixels of the default portrait TFT panel.
    pub const DEFAULT_HEIGHT: i32 = 320;

    /// Create a new viewport.
    #[must_use]
    pub const fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

impl Default for Viewport {
    /// The full screen of the default panel, zero-based.
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_WIDTH - 1, 0, Self::DEFAULT_HEIGHT - 1)
    }
}

/// Configuration for a trajectory drawing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryConfig {
    /// Device rectangle the fitted track must land in.
    pub viewport: Viewport,

    /// Maximum number of heading segments accepted per drawing.
    /// The track buffer holds `max_segments + 1` points (the leading
    /// implicit origin plus one point per segment).
    pub max_segments: usize,
}

impl TrajectoryConfig {
    /// Default segment capacity per drawing operation.
    pub const DEFAULT_MAX_SEGMENTS: usize = 100;
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            max_segments: Self::DEFAULT_MAX_SEGMENTS,
        }
    }
}

/// Errors that can occur while building or fitting a trajectory.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrajectoryError {
    /// More heading segments were supplied than the configured capacity.
    #[error("trajectory has {segments} segments but capacity allows {max_segments}")]
    CapacityExceeded {
        /// Number of segments supplied by the caller.
        segments: usize,
        /// Configured capacity in segments.
        max_segments: usize,
    },

    /// A segment's accumulated endpoint left the representable
    /// coordinate range.
    #[error("segment {segment} moves the track outside the representable coordinate range")]
    CoordinateOverflow {
        /// 1-based index of the offending segment.
        segment: usize,
    },

    /// A bounding box was requested for a track with no points.
    #[error("cannot compute the bounds of an empty track")]
    EmptyTrack,

    /// The track's combined extent is zero, so the scaling denominator
    /// would be zero.
    #[error("track extent is degenerate; cannot scale onto the viewport")]
    DegenerateTrack,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // --- PolarSegment tests ---

    #[test]
    fn polar_segment_new() {
        let seg = PolarSegment::new(45.0, 5);
        assert!((seg.heading_deg - 45.0).abs() < f64::EPSILON);
        assert_eq!(seg.steps, 5);
    }

    #[test]
    fn polar_segment_copy() {
        let seg = PolarSegment::new(90.0, 3);
        let seg2 = seg; // Copy
        assert_eq!(seg, seg2);
    }

    // --- Point tests ---

    #[test]
    fn point_new() {
        let p = Point::new(3, -4);
        assert_eq!(p.x, 3);
        assert_eq!(p.y, -4);
    }

    #[test]
    fn point_equality() {
        assert_eq!(Point::new(1, 2), Point::new(1, 2));
        assert_ne!(Point::new(1, 2), Point::new(1, 3));
    }

    // --- Track tests ---

    #[test]
    fn track_new_and_len() {
        let track = Track::new(vec![Point::new(0, 0), Point::new(1, 1)]);
        assert_eq!(track.len(), 2);
        assert!(!track.is_empty());
    }

    #[test]
    fn track_empty() {
        let track = Track::new(vec![]);
        assert!(track.is_empty());
        assert_eq!(track.len(), 0);
        assert!(track.first().is_none());
        assert!(track.last().is_none());
    }

    #[test]
    fn track_first_and_last() {
        let track = Track::new(vec![Point::new(1, 2), Point::new(3, 4), Point::new(5, 6)]);
        assert_eq!(track.first(), Some(&Point::new(1, 2)));
        assert_eq!(track.last(), Some(&Point::new(5, 6)));
    }

    #[test]
    fn track_points_returns_all() {
        let points = vec![Point::new(0, 0), Point::new(1, 1)];
        let track = Track::new(points.clone());
        assert_eq!(track.points(), &points);
    }

    #[test]
    fn track_into_points_returns_owned_vec() {
        let points = vec![Point::new(0, 0), Point::new(1, 1)];
        let track = Track::new(points.clone());
        assert_eq!(track.into_points(), points);
    }

    // --- Viewport tests ---

    #[test]
    fn viewport_default_is_240x320_panel() {
        let viewport = Viewport::default();
        assert_eq!(viewport, Viewport::new(0, 239, 0, 319));
        assert_eq!(viewport.x_max + 1, Viewport::DEFAULT_WIDTH);
        assert_eq!(viewport.y_max + 1, Viewport::DEFAULT_HEIGHT);
    }

    // --- TrajectoryConfig tests ---

    #[test]
    fn config_defaults() {
        let config = TrajectoryConfig::default();
        assert_eq!(config.viewport, Viewport::default());
        assert_eq!(
            config.max_segments,
            TrajectoryConfig::DEFAULT_MAX_SEGMENTS
        );
    }

    // --- TrajectoryError tests ---

    #[test]
    fn error_capacity_exceeded_display() {
        let err = TrajectoryError::CapacityExceeded {
            segments: 101,
            max_segments: 100,
        };
        assert_eq!(
            err.to_string(),
            "trajectory has 101 segments but capacity allows 100",
        );
    }

    #[test]
    fn error_coordinate_overflow_display() {
        let err = TrajectoryError::CoordinateOverflow { segment: 7 };
        assert_eq!(
            err.to_string(),
            "segment 7 moves the track outside the representable coordinate range",
        );
    }

    #[test]
    fn error_empty_track_display() {
        let err = TrajectoryError::EmptyTrack;
        assert_eq!(err.to_string(), "cannot compute the bounds of an empty track");
    }

    #[test]
    fn error_degenerate_track_display() {
        let err = TrajectoryError::DegenerateTrack;
        assert_eq!(
            err.to_string(),
            "track extent is degenerate; cannot scale onto the viewport",
        );
    }

    // --- Serde round-trip tests ---

    #[test]
    fn polar_segment_serde_round_trip() {
        let seg = PolarSegment::new(135.0, -7);
        let json = serde_json::to_string(&seg).unwrap();
        let deserialized: PolarSegment = serde_json::from_str(&json).unwrap();
        assert_eq!(seg, deserialized);
    }

    #[test]
    fn point_serde_round_trip() {
        let p = Point::new(-5, 12);
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }

    #[test]
    fn track_serde_round_trip() {
        let track = Track::new(vec![Point::new(0, 0), Point::new(-5, 0), Point::new(-5, 5)]);
        let json = serde_json::to_string(&track).unwrap();
        let deserialized: Track = serde_json::from_str(&json).unwrap();
        assert_eq!(track, deserialized);
    }

    #[test]
    fn viewport_serde_round_trip() {
        let viewport = Viewport::new(10, 229, 10, 309);
        let json = serde_json::to_string(&viewport).unwrap();
        let deserialized: Viewport = serde_json::from_str(&json).unwrap();
        assert_eq!(viewport, deserialized);
    }

    #[test]
    fn config_serde_round_trip() {
        let config = TrajectoryConfig {
            viewport: Viewport::new(0, 99, 0, 99),
            max_segments: 32,
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TrajectoryConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
