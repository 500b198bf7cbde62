//! kiseki-pipeline: Pure dead-reckoning trajectory pipeline (sans-IO).
//!
//! Converts polar heading logs into device-space line drawings through:
//! polar conversion -> dead reckoning -> bounding box -> viewport
//! fitting -> line emission.
//!
//! This crate has **no device or I/O dependencies** -- it operates on
//! in-memory segment slices and draws through the [`LineSink`] trait.
//! Concrete canvases (SVG, raster) live in `kiseki-render`.

pub mod bounds;
pub mod emit;
pub mod fit;
pub mod polar;
pub mod reckon;
pub mod types;

pub use emit::{LineSink, emit_frame, emit_lines};
pub use types::{
    Bounds, Point, PolarSegment, Track, TrajectoryConfig, TrajectoryError, Viewport,
};

/// Convert a polar heading log into line drawing calls on `sink`.
///
/// On failure no drawing happens at all: the sink is first touched (via
/// [`LineSink::begin`]) only after every geometry stage has succeeded.
/// Returns the fitted track so callers can inspect or serialize the
/// device-space coordinates that were drawn.
///
/// # Pipeline steps
///
/// 1. Dead reckoning: accumulate polar displacements from the origin
/// 2. Viewport fitting: shift, scale, and y-flip into `config.viewport`
/// 3. Surface preparation ([`LineSink::begin`])
/// 4. Line emission, one line per consecutive point pair
///
/// # Errors
///
/// Returns [`TrajectoryError::CapacityExceeded`] if the log has more
/// segments than `config.max_segments`.
/// Returns [`TrajectoryError::CoordinateOverflow`] if accumulation
/// walks outside the `i32` coordinate range.
/// Returns [`TrajectoryError::DegenerateTrack`] if the reckoned track
/// has no drawable extent, as for an empty log.
pub fn draw_trajectory<S: LineSink>(
    segments: &[PolarSegment],
    config: &TrajectoryConfig,
    sink: &mut S,
) -> Result<Track, TrajectoryError> {
    // 1. Dead reckoning from the origin.
    let mut track = reckon::reckon_track(segments, config.max_segments)?;

    // 2. Fit into the viewport (shift, scale, y flip).
    fit::fit_to_viewport(&mut track, config.viewport)?;

    // 3. Surface preparation; no sink call happens before this point.
    sink.begin();

    // 4. One line per consecutive pair.
    emit::emit_lines(&track, sink);

    Ok(track)
}
