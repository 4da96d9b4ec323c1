//! Gesture thresholds used by the drag engine.
//!
//! These values are in layout pixels (and pixels per second for
//! velocities). They are product behavior: changing them changes how a
//! release is interpreted.

/// Maximum horizontal travel between pointer-down and pointer-up for the
/// pair to count as a tap.
pub const MIN_SLIDING_DISTANCE_ON_CLICK: f32 = 10.0;

/// External drawer offset above which the panel stops accepting touch and
/// a maximized panel is minimized.
pub const MIN_SLIDE_OFFSET: f32 = 0.1;

/// Horizontal release velocity that closes the panel regardless of position.
pub const X_MIN_VELOCITY: f32 = 1_500.0;

/// Vertical release velocity that docks the panel regardless of position.
pub const Y_MIN_VELOCITY: f32 = 1_000.0;

/// Horizontal step a minimized panel needs before it starts following the
/// pointer sideways.
pub const MINIMUM_DX_FOR_HORIZONTAL_DRAG: i32 = 5;

/// Vertical step a minimized panel needs before it leaves the bottom edge.
pub const MINIMUM_DY_FOR_VERTICAL_DRAG: i32 = 15;

/// Background opacity at the maximized position; it fades linearly to 0.
pub const BACKGROUND_ALPHA_RANGE: f32 = 100.0;

pub(crate) const SLIDE_TOP: f32 = 0.0;
pub(crate) const SLIDE_BOTTOM: f32 = 1.0;
