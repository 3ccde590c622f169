//! Damped spring physics
//!
//! Semi-implicit Euler integration with fixed sub-steps, so results do not
//! depend on the frame rate the host ticks at.

use serde::{Deserialize, Serialize};

/// Integration sub-step (seconds)
const STEP: f32 = 1.0 / 240.0;

/// Spring parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from target below which the spring may settle
    pub rest_displacement: f32,
    /// Speed below which the spring may settle
    pub rest_velocity: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_displacement: 0.001,
            rest_velocity: 0.001,
        }
    }

    /// Soft, slow spring
    pub const fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    /// Quick with a small overshoot; used for dialogs popping in
    pub const fn snappy() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    /// Critically-damped feel, no visible overshoot
    pub const fn stiff() -> Self {
        Self::new(210.0, 29.0, 1.0)
    }

    /// Bouncy
    pub const fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(170.0, 26.0, 1.0)
    }
}

/// A spring animating one scalar toward a target
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    settled: bool,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            settled: true,
        }
    }

    /// Start with an initial velocity, in units per second
    pub fn with_velocity(mut self, velocity: f32) -> Self {
        self.velocity = velocity;
        self.settled = false;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Retarget; current velocity is kept so interruptions stay smooth
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
        self.settled = (self.value - target).abs() <= self.config.rest_displacement
            && self.velocity.abs() <= self.config.rest_velocity;
        if self.settled {
            self.value = target;
        }
    }

    /// Advance by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if self.settled || dt <= 0.0 {
            return;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(STEP);
            let displacement = self.value - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.value += self.velocity * h;
            remaining -= h;

            if (self.value - self.target).abs() <= self.config.rest_displacement
                && self.velocity.abs() <= self.config.rest_velocity
            {
                self.value = self.target;
                self.velocity = 0.0;
                self.settled = true;
                return;
            }
        }
    }
}
