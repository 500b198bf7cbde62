//! Polar heading to Cartesian displacement conversion.
//!
//! A heading segment is a polar vector: an angle in degrees plus a step
//! count. The conversion to an integer Cartesian displacement is:
//!
//! ```text
//! dx = steps × cos((180 - heading) × π/180)
//! dy = steps × sin((180 - heading) × π/180)
//! ```
//!
//! The `180 -` term anchors heading 0 on the **negative-x** axis, with
//! headings growing clockwise when +y points up:
//!
//! - heading 0°   → (-steps, 0)
//! - heading 90°  → (0, +steps)
//! - heading 180° → (+steps, 0)
//! - heading 270° → (0, -steps)
//!
//! Recorded heading logs assume this convention, so it is preserved
//! exactly. Angles are accepted as-is; values outside `[0, 360)` wrap
//! through the trig functions.
//!
//! Displacement components round half **away from zero** (`2.5 → 3`,
//! `-2.5 → -3`) rather than to even or toward zero.

/// Horizontal displacement of a heading segment.
///
/// `steps` may be negative to reverse the direction. A step count of
/// zero always yields zero.
#[must_use]
pub fn dx(heading_deg: f64, steps: i32) -> i32 {
    round_half_away_from_zero(f64::from(steps) * (180.0 - heading_deg).to_radians().cos())
}

/// Vertical displacement of a heading segment.
///
/// `steps` may be negative to reverse the direction. A step count of
/// zero always yields zero.
#[must_use]
pub fn dy(heading_deg: f64, steps: i32) -> i32 {
    round_half_away_from_zero(f64::from(steps) * (180.0 - heading_deg).to_radians().sin())
}

/// Round half away from zero: `floor(v + 0.5)` for non-negative values,
/// `ceil(v - 0.5)` for negative ones.
#[allow(clippy::cast_possible_truncation)]
fn round_half_away_from_zero(v: f64) -> i32 {
    if v < 0.0 {
        (v - 0.5).ceil() as i32
    } else {
        (v + 0.5).floor() as i32
    }
}
