//! # Animation Values
//!
//! The two tap animations are timed scalar sequences, not a physics
//! simulation. An [`AnimValue`] owns at most one running [`Sequence`] and is
//! sampled by the render loop as a pure function of elapsed time.
//!
//! Retriggering replaces the running sequence in place (last write wins).
//! There is no queue and no cancellation token; a new tap that lands before
//! the previous sequence finished simply supersedes it from the sampled
//! value onward.
//!
//! The keyframes:
//!
//! - `tilt`: every tap, ease-out to 1.0 over 180 ms, then linear back to
//!   0.0 over 150 ms. Drives the cigarette's rotation offset off its 90°
//!   baseline.
//! - `drop`: every even puff, snapped to 0.0 and run linear to 1.0 over
//!   400 ms, then linear to 0.0 over 10 ms. Drives the ash chunk's opacity,
//!   fall distance, and scale.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOutQuad,
}

impl Easing {
    /// Maps normalized progress `t` in [0, 1] onto the eased curve.
    fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// One leg of a sequence: interpolate from wherever the value currently is
/// to `target` over `duration`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub target: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl Segment {
    pub fn new(target: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            target,
            duration,
            easing,
        }
    }
}

/// An ordered run of segments played back to back.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    segments: Vec<Segment>,
}

impl Sequence {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn total_duration(&self) -> Duration {
        self.segments.iter().map(|s| s.duration).sum()
    }
}

/// The tap tilt: up fast with an ease-out, back down linear.
pub fn tilt_sequence() -> Sequence {
    Sequence::new(vec![
        Segment::new(1.0, Duration::from_millis(180), Easing::EaseOutQuad),
        Segment::new(0.0, Duration::from_millis(150), Easing::Linear),
    ])
}

/// The ash chunk fall: a long linear drop, then an almost instant reset.
pub fn drop_sequence() -> Sequence {
    Sequence::new(vec![
        Segment::new(1.0, Duration::from_millis(400), Easing::Linear),
        Segment::new(0.0, Duration::from_millis(10), Easing::Linear),
    ])
}

#[derive(Clone, Debug)]
struct ActiveTween {
    from: f32,
    sequence: Sequence,
    started: Instant,
}

impl ActiveTween {
    fn sample(&self, now: Instant) -> f32 {
        let mut remaining = now.saturating_duration_since(self.started);
        let mut start_value = self.from;
        for segment in &self.sequence.segments {
            if remaining < segment.duration {
                let t = remaining.as_secs_f32() / segment.duration.as_secs_f32();
                return start_value + (segment.target - start_value) * segment.easing.apply(t);
            }
            remaining -= segment.duration;
            start_value = segment.target;
        }
        // Past the end: hold the final target until the next retrigger.
        start_value
    }

    fn finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.sequence.total_duration()
    }
}

/// A scalar animation value with replace-on-retrigger semantics.
pub struct AnimValue {
    resting: f32,
    active: Option<ActiveTween>,
}

impl AnimValue {
    pub fn new(resting: f32) -> Self {
        Self {
            resting,
            active: None,
        }
    }

    /// Drops any running sequence and pins the value.
    pub fn snap(&mut self, value: f32) {
        self.resting = value;
        self.active = None;
    }

    /// Replaces the running sequence, starting from the currently sampled
    /// value so a mid-flight retrigger has no visual discontinuity.
    pub fn retrigger(&mut self, sequence: Sequence, now: Instant) {
        let from = self.sample(now);
        self.active = Some(ActiveTween {
            from,
            sequence,
            started: now,
        });
    }

    pub fn sample(&self, now: Instant) -> f32 {
        match &self.active {
            Some(tween) => tween.sample(now),
            None => self.resting,
        }
    }

    /// True while a sequence still has time left; the render loop uses this
    /// to pick its frame rate.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.active.as_ref().is_some_and(|t| !t.finished(now))
    }
}

// ---------------------------------------------------------------------------
// Derived transforms
// ---------------------------------------------------------------------------

/// Baseline rotation of the cigarette art, degrees.
pub const CIG_BASE_ROT_DEG: f32 = 90.0;
/// Full-tilt swing off the baseline, degrees.
pub const CIG_TILT_SWING_DEG: f32 = 5.0;
/// How far the chunk falls at drop == 1.0, in layout units.
pub const CHUNK_FALL_UNITS: f32 = 120.0;

pub fn cigarette_rotation_deg(tilt: f32) -> f32 {
    CIG_BASE_ROT_DEG - CIG_TILT_SWING_DEG * tilt
}

/// Visual parameters of the falling ash chunk at a given drop value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChunkTransform {
    pub opacity: f32,
    pub translate_y: f32,
    pub scale: f32,
}

pub fn chunk_transform(drop: f32) -> ChunkTransform {
    ChunkTransform {
        opacity: drop,
        translate_y: CHUNK_FALL_UNITS * drop,
        scale: 0.8 + 0.2 * drop,
    }
}
