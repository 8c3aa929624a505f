use fnv::FnvHashSet;
use glam::Vec2;
use smallvec::SmallVec;

use super::constants::*;

/// Stable identity of a placed crystal.
///
/// Activation state is keyed by id rather than by position in the crystal
/// list, so removing or reordering crystals cannot re-trigger or silence the
/// wrong one mid-pulse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrystalId(pub u32);

/// A placed, tone-bearing object in the garden. Immutable once placed.
#[derive(Clone, Debug)]
pub struct Crystal {
    pub id: CrystalId,
    pub position: Vec2,
    /// Multiplier on `CRYSTAL_BASE_RADIUS`, clamped to [1, 32] at creation.
    pub scale: f32,
    /// CSS color used for fill and for the activated glow.
    pub color: String,
    pub tone_hz: f32,
    /// Source image identifier; `None` renders a tinted circle instead.
    pub sprite: Option<String>,
}

/// Host-supplied description of a crystal about to be placed.
#[derive(Clone, Debug)]
pub struct CrystalSpec {
    pub position: Vec2,
    pub scale: f32,
    pub color: String,
    pub tone_hz: f32,
    pub sprite: Option<String>,
}

/// The ordered crystal collection plus the per-pulse activation set.
#[derive(Debug, Default)]
pub struct Scene {
    crystals: Vec<Crystal>,
    activated: FnvHashSet<CrystalId>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a crystal, clamping its scale into the supported range.
    /// Returns the stable id assigned to it.
    pub fn add_crystal(&mut self, spec: CrystalSpec) -> CrystalId {
        let id = CrystalId(self.next_id);
        self.next_id += 1;
        self.crystals.push(Crystal {
            id,
            position: spec.position,
            scale: spec.scale.clamp(CRYSTAL_SCALE_MIN, CRYSTAL_SCALE_MAX),
            color: spec.color,
            tone_hz: spec.tone_hz,
            sprite: spec.sprite,
        });
        id
    }

    /// Remove a crystal by id. Also forgets any activation recorded for it.
    pub fn remove_crystal(&mut self, id: CrystalId) -> bool {
        let before = self.crystals.len();
        self.crystals.retain(|c| c.id != id);
        self.activated.remove(&id);
        self.crystals.len() != before
    }

    pub fn clear(&mut self) {
        self.crystals.clear();
        self.activated.clear();
    }

    pub fn crystals(&self) -> &[Crystal] {
        &self.crystals
    }

    pub fn crystal(&self, id: CrystalId) -> Option<&Crystal> {
        self.crystals.iter().find(|c| c.id == id)
    }

    pub fn activated(&self) -> &FnvHashSet<CrystalId> {
        &self.activated
    }

    pub fn is_activated(&self, id: CrystalId) -> bool {
        self.activated.contains(&id)
    }

    pub fn mark_activated(&mut self, id: CrystalId) {
        self.activated.insert(id);
    }

    /// Called exactly when a new pulse starts: every crystal becomes eligible
    /// to fire again.
    pub fn reset_activations(&mut self) {
        self.activated.clear();
    }
}

/// Snapshot of one frame of pulse growth, handed to crossing detection.
#[derive(Clone, Copy, Debug)]
pub struct PulseFrame {
    pub origin: Vec2,
    pub old_radius: f32,
    pub new_radius: f32,
}

#[derive(Clone, Copy, Debug)]
struct Pulse {
    origin: Vec2,
    radius: f32,
    last_timestamp_sec: f64,
}

/// Owns the at-most-one expanding ring and advances it per frame.
///
/// Growth is frame-rate independent: the radius advances by
/// `velocity * elapsed_seconds`, so dropped frames change spatial smoothness
/// but not real-time speed. The velocity is anchored so a pulse always crosses
/// the full canvas diagonal in `PULSE_TRAVERSAL_SEC` regardless of canvas
/// size.
#[derive(Debug)]
pub struct PulseSimulator {
    active: Option<Pulse>,
    max_radius: f32,
    velocity: f32,
}

impl PulseSimulator {
    pub fn new(canvas_width: f32, canvas_height: f32) -> Self {
        let max_radius = canvas_width.hypot(canvas_height);
        Self {
            active: None,
            max_radius,
            velocity: max_radius / PULSE_TRAVERSAL_SEC,
        }
    }

    /// Start a pulse at `origin`, replacing any in-flight one. The caller is
    /// responsible for resetting the scene's activation set at the same time.
    pub fn start_pulse(&mut self, origin: Vec2, timestamp_sec: f64) {
        self.active = Some(Pulse {
            origin,
            radius: PULSE_START_RADIUS,
            last_timestamp_sec: timestamp_sec,
        });
    }

    /// Advance the pulse to `timestamp_sec`.
    ///
    /// Returns the frame snapshot for crossing detection, or `None` when no
    /// pulse is active. When the new radius reaches `max_radius` the pulse is
    /// cleared, but the terminal frame is still returned so crystals lying at
    /// the very edge (distance == `max_radius`) get their crossing.
    pub fn advance(&mut self, timestamp_sec: f64) -> Option<PulseFrame> {
        let pulse = self.active.as_mut()?;
        let dt = (timestamp_sec - pulse.last_timestamp_sec).max(0.0) as f32;
        let new_radius = pulse.radius + self.velocity * dt;
        let frame = PulseFrame {
            origin: pulse.origin,
            old_radius: pulse.radius,
            new_radius,
        };
        if new_radius >= self.max_radius {
            self.active = None;
        } else {
            pulse.radius = new_radius;
            pulse.last_timestamp_sec = timestamp_sec;
        }
        Some(frame)
    }

    /// Drop any active pulse. Safe to call when none is active.
    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn current_radius(&self) -> Option<f32> {
        self.active.map(|p| p.radius)
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }
}

/// Find crystals the ring's leading edge swept past during this frame.
///
/// A crystal at distance `d` from the origin fires iff
/// `old_radius < d <= new_radius` and it has not already fired this pulse.
/// The half-open interval means consecutive frames partition the radius axis:
/// each crystal is detected in exactly one frame and never twice. If a single
/// frame advance happens to sweep past several closely spaced crystals (a
/// severe frame drop), all of them fire in that frame; the interval test
/// cannot skip one.
pub fn detect_crossings(
    frame: &PulseFrame,
    crystals: &[Crystal],
    activated: &FnvHashSet<CrystalId>,
) -> SmallVec<[CrystalId; 4]> {
    let mut fired = SmallVec::new();
    for crystal in crystals {
        if activated.contains(&crystal.id) {
            continue;
        }
        let d = crystal.position.distance(frame.origin);
        if frame.old_radius < d && d <= frame.new_radius {
            fired.push(crystal.id);
        }
    }
    fired
}

/// Audible length of a tone at the given frequency. Higher tones ring
/// shorter, down to a floor so they stay perceptible.
pub fn tone_duration_sec(frequency_hz: f32) -> f32 {
    (TONE_BASE_DURATION_SEC - frequency_hz / TONE_DURATION_HZ_DIVISOR).max(TONE_MIN_DURATION_SEC)
}
