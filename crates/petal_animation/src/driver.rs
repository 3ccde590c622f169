//! The animation capability components animate through
//!
//! A component asks a driver to animate a scalar and later polls for the
//! value and for completion. Which driver runs underneath (frame scheduler,
//! immediate, a native bridge) is the host's choice.

use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

use crate::easing::Easing;
use crate::spring::SpringConfig;

new_key_type! {
    /// Handle to one animated track inside a driver
    pub struct AnimationId;
}

/// How a track moves toward its target
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum AnimationSpec {
    Timing { duration_ms: u32, easing: Easing },
    Spring(SpringConfig),
}

impl AnimationSpec {
    /// Timing with the default ease-out curve
    pub fn timing(duration_ms: u32) -> Self {
        AnimationSpec::Timing {
            duration_ms,
            easing: Easing::EaseOutCubic,
        }
    }

    pub fn timing_with(duration_ms: u32, easing: Easing) -> Self {
        AnimationSpec::Timing {
            duration_ms,
            easing,
        }
    }

    pub fn spring(config: SpringConfig) -> Self {
        AnimationSpec::Spring(config)
    }
}

/// `animate(from, to, spec) -> completion signal`
pub trait AnimationDriver {
    /// Start a track at `from`, moving toward `to`
    fn animate(&mut self, from: f32, to: f32, spec: AnimationSpec) -> AnimationId;

    /// Current value of a track, `None` once released
    fn value(&self, id: AnimationId) -> Option<f32>;

    /// Whether a track has reached its target. Released tracks count as
    /// complete.
    fn is_complete(&self, id: AnimationId) -> bool;

    /// Stop and release a track, returning its last value
    fn cancel(&mut self, id: AnimationId) -> Option<f32>;

    /// Advance every running track by `dt` seconds
    fn tick(&mut self, dt: f32);
}

/// Driver that completes every track the moment it is started
#[derive(Default)]
pub struct ImmediateDriver {
    tracks: SlotMap<AnimationId, f32>,
}

impl ImmediateDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracks not yet released
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }
}

impl AnimationDriver for ImmediateDriver {
    fn animate(&mut self, _from: f32, to: f32, _spec: AnimationSpec) -> AnimationId {
        self.tracks.insert(to)
    }

    fn value(&self, id: AnimationId) -> Option<f32> {
        self.tracks.get(id).copied()
    }

    fn is_complete(&self, _id: AnimationId) -> bool {
        true
    }

    fn cancel(&mut self, id: AnimationId) -> Option<f32> {
        self.tracks.remove(id)
    }

    fn tick(&mut self, _dt: f32) {}
}
