//! Wheel-of-fortune rotation planning
//!
//! Pure math: segment layout angles for rendering and a spin plan that
//! overshoots the winning segment, then eases back onto it. Any timing
//! that eventually comes to rest on the winning index is acceptable;
//! these constants reproduce the site widget's feel.

use rand::Rng;

/// Full turns taken before the wheel settles
pub const FULL_TURNS: f64 = 5.0;
/// Main spin duration, seconds
pub const SPIN_SECS: f64 = 4.0;
/// Correction (ease-back) duration bounds, seconds
pub const MIN_CORRECTION_SECS: f64 = 0.8;
pub const MAX_CORRECTION_SECS: f64 = 4.0;
/// Overshoot is drawn uniformly from [-MAX, MAX] degrees
pub const MAX_OVERSHOOT_DEG: i32 = 200;

/// Angular size of one segment
pub fn segment_angle(segment_count: usize) -> f64 {
    360.0 / segment_count as f64
}

/// Render angles for one wheel segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLayout {
    /// Counter-rotation applied to the segment content
    pub base: f64,
    /// Decorative offsets used by the two alternate sprite angles
    pub offset_primary: f64,
    pub offset_secondary: f64,
    /// Rotation placing the segment on the wheel face
    pub placement: f64,
}

pub fn segment_layout(segment_count: usize, index: usize) -> SegmentLayout {
    let step = segment_angle(segment_count);
    let base = -step * index as f64;
    SegmentLayout {
        base,
        offset_primary: base + 160.0,
        offset_secondary: base + 52.0,
        placement: step * index as f64,
    }
}

/// Rotation that parks the pointer on the winning segment
pub fn final_rotation(segment_count: usize, winning_index: usize) -> f64 {
    360.0 * FULL_TURNS - segment_angle(segment_count) * winning_index as f64
}

/// One planned spin: overshoot past the target, then correct back
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub final_rotation: f64,
    /// Degrees past (or short of) the target on the first pass
    pub overshoot: f64,
    /// Rotation reached at the end of the main spin
    pub overshoot_rotation: f64,
    pub spin_secs: f64,
    /// Scales with the overshoot magnitude, so larger misses take
    /// longer to walk back
    pub correction_secs: f64,
}

impl SpinPlan {
    pub fn total_secs(&self) -> f64 {
        self.spin_secs + self.correction_secs
    }
}

pub fn plan_spin<R: Rng>(segment_count: usize, winning_index: usize, rng: &mut R) -> SpinPlan {
    let final_rotation = final_rotation(segment_count, winning_index);
    let overshoot = rng.gen_range(-MAX_OVERSHOOT_DEG..=MAX_OVERSHOOT_DEG) as f64;
    let correction_secs = MIN_CORRECTION_SECS
        + (overshoot.abs() / MAX_OVERSHOOT_DEG as f64)
            * (MAX_CORRECTION_SECS - MIN_CORRECTION_SECS);
    SpinPlan {
        final_rotation,
        overshoot,
        overshoot_rotation: final_rotation + overshoot,
        spin_secs: SPIN_SECS,
        correction_secs,
    }
}
