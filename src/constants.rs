/// Effect tuning constants.
///
/// These express intended behavior (thresholds, margins, timer durations)
/// and keep magic numbers out of the wiring code.
// Reveal
pub const REVEAL_THRESHOLD: f64 = 0.2; // fraction of the element that must be in view

// Parallax
pub const PARALLAX_DEFAULT_SPEED: f32 = 0.2; // used when data-speed is absent or unparsable

// Tilt
pub const TILT_PERSPECTIVE_PX: i32 = 1000;
pub const TILT_ANGLE_DIVISOR: f64 = 10.0; // degrees = (percent - 50) / divisor
pub const TILT_LIFT_PX: i32 = 6; // upward translation while tilted

// Ripple
pub const RIPPLE_LIFETIME_MS: i32 = 600; // must match the ripple CSS animation

// Section tracking
pub const SECTION_LOOKAHEAD_PX: f64 = 200.0; // a section counts as current this far early

// Cursor trail
pub const TRAIL_MIN_VIEWPORT_PX: f64 = 768.0; // no trail on narrow viewports
pub const TRAIL_DOT_COUNT: usize = 8;
pub const TRAIL_FOLLOW: f32 = 0.35; // per-link chase factor, per frame

// Load fade-in
pub const FADE_DELAY_MS: i32 = 100;
pub const FADE_DURATION_SEC: f32 = 0.6;
