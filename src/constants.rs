/// Visual tuning constants for the web frontend.
///
/// These constants express intended behavior (fixed canvas size, ring easing
/// endpoints) and keep magic numbers out of the draw code.
// Fixed logical canvas size; the diagonal (~1322 px) anchors the pulse bound
pub const CANVAS_WIDTH: u32 = 1152;
pub const CANVAS_HEIGHT: u32 = 648;

// Expanding ring easing: alpha fades and stroke thickens as the ring grows
pub const RING_ALPHA_START: f64 = 0.6;
pub const RING_ALPHA_END: f64 = 0.12;
pub const RING_WIDTH_START: f64 = 2.0;
pub const RING_WIDTH_END: f64 = 32.0;

// Decorative pulsing marker in the corner (cosmetic, independent of pulses)
pub const IDLE_MARKER_X: f64 = 50.0;
pub const IDLE_MARKER_Y: f64 = 100.0;
pub const IDLE_MARKER_MAX_RADIUS: f64 = 20.0;
pub const IDLE_MARKER_RATE: f64 = 0.05; // radians per frame

// Crystal styling
pub const CRYSTAL_GLOW_BLUR: f64 = 24.0; // shadow blur when activated
pub const CRYSTAL_MUTED_ALPHA: f64 = 0.55;
