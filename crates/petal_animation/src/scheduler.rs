//! Frame scheduler driver
//!
//! Owns every running track and advances them each frame.

use std::time::Instant;

use slotmap::SlotMap;

use crate::animated::AnimatedValue;
use crate::driver::{AnimationDriver, AnimationId, AnimationSpec};

/// The animation scheduler that ticks all active tracks
pub struct AnimationScheduler {
    tracks: SlotMap<AnimationId, AnimatedValue>,
    last_frame: Instant,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            tracks: SlotMap::with_key(),
            last_frame: Instant::now(),
        }
    }

    /// Tick using wall-clock time since the previous frame
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.tick(dt);
    }

    /// Check if any track is still moving
    pub fn has_active_animations(&self) -> bool {
        self.tracks.values().any(AnimatedValue::is_animating)
    }

    /// Number of tracks not yet released
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver for AnimationScheduler {
    fn animate(&mut self, from: f32, to: f32, spec: AnimationSpec) -> AnimationId {
        let mut track = AnimatedValue::new(from);
        track.animate_to(to, spec);
        self.tracks.insert(track)
    }

    fn value(&self, id: AnimationId) -> Option<f32> {
        self.tracks.get(id).map(AnimatedValue::value)
    }

    fn is_complete(&self, id: AnimationId) -> bool {
        self.tracks.get(id).map_or(true, |track| !track.is_animating())
    }

    fn cancel(&mut self, id: AnimationId) -> Option<f32> {
        self.tracks.remove(id).map(|track| track.value())
    }

    fn tick(&mut self, dt: f32) {
        let mut active = 0usize;
        for track in self.tracks.values_mut() {
            if track.tick(dt) {
                active += 1;
            }
        }
        tracing::trace!(dt, active, "animation tick");
    }
}
