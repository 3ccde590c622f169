//! A scalar that can be animated toward a target

use crate::driver::AnimationSpec;
use crate::spring::Spring;
use crate::timing::Timing;

#[derive(Clone, Debug)]
enum Motion {
    Timing(Timing),
    Spring(Spring),
}

/// Animated scalar value.
///
/// Holds its current value at rest; while a motion is active the value is
/// read from the motion. Starting a new motion always begins at the current
/// value, which makes every animation interruptible.
#[derive(Clone, Debug)]
pub struct AnimatedValue {
    value: f32,
    motion: Option<Motion>,
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            motion: None,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Where the value is heading (current value when at rest)
    pub fn target(&self) -> f32 {
        match &self.motion {
            Some(Motion::Timing(timing)) => timing.target(),
            Some(Motion::Spring(spring)) => spring.target(),
            None => self.value,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Jump to `value`, stopping any motion
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.motion = None;
    }

    /// Start animating from the current value toward `target`.
    ///
    /// Retargeting a running spring with another spring carries its velocity.
    pub fn animate_to(&mut self, target: f32, spec: AnimationSpec) {
        let motion = match spec {
            AnimationSpec::Timing {
                duration_ms,
                easing,
            } => Motion::Timing(Timing::new(self.value, target, duration_ms, easing)),
            AnimationSpec::Spring(config) => {
                let velocity = match &self.motion {
                    Some(Motion::Spring(running)) => running.velocity(),
                    _ => 0.0,
                };
                let mut spring = Spring::new(config, self.value).with_velocity(velocity);
                spring.set_target(target);
                Motion::Spring(spring)
            }
        };
        self.motion = Some(motion);
        self.settle_if_done();
    }

    /// Advance by `dt` seconds. Returns `true` while still animating.
    pub fn tick(&mut self, dt: f32) -> bool {
        match &mut self.motion {
            Some(Motion::Timing(timing)) => {
                timing.step(dt);
                self.value = timing.value();
            }
            Some(Motion::Spring(spring)) => {
                spring.step(dt);
                self.value = spring.value();
            }
            None => return false,
        }
        self.settle_if_done();
        self.motion.is_some()
    }

    fn settle_if_done(&mut self) {
        let done = match &self.motion {
            Some(Motion::Timing(timing)) => timing.is_finished().then(|| timing.target()),
            Some(Motion::Spring(spring)) => spring.is_settled().then(|| spring.target()),
            None => None,
        };
        if let Some(target) = done {
            self.value = target;
            self.motion = None;
        }
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}
