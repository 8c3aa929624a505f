// Simulation tuning constants shared by the pure core and the web frontend.

// Pulse geometry and timing
pub const PULSE_START_RADIUS: f32 = 32.0; // px, radius at the instant of the click
pub const PULSE_TRAVERSAL_SEC: f32 = 2.5; // ring crosses the full canvas diagonal in this time

// Crystal sizing
pub const CRYSTAL_BASE_RADIUS: f32 = 8.0; // px, multiplied by the per-crystal scale
pub const CRYSTAL_SCALE_MIN: f32 = 1.0;
pub const CRYSTAL_SCALE_MAX: f32 = 32.0;

// Tone envelope mapping: higher tones ring shorter, clamped to a floor
pub const TONE_BASE_DURATION_SEC: f32 = 0.8;
pub const TONE_MIN_DURATION_SEC: f32 = 0.2;
pub const TONE_DURATION_HZ_DIVISOR: f32 = 2000.0;
