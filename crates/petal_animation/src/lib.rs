//! Petal Animation System
//!
//! Timing curves, spring physics, and parallel transition groups.
//!
//! # Features
//!
//! - **Timing**: fixed-duration interpolation with easing curves
//! - **Springs**: damped springs with stiffness, damping, mass
//! - **Drivers**: the [`AnimationDriver`] capability components animate
//!   through; [`AnimationScheduler`] advances tracks frame by frame,
//!   [`ImmediateDriver`] jumps straight to targets (tests, reduced motion)
//! - **Parallel groups**: a transition completes when every track completes
//! - **Interruptible**: a new target restarts from the current value

pub mod animated;
pub mod driver;
pub mod easing;
pub mod parallel;
pub mod scheduler;
pub mod spring;
pub mod timing;

pub use animated::AnimatedValue;
pub use driver::{AnimationDriver, AnimationId, AnimationSpec, ImmediateDriver};
pub use easing::Easing;
pub use parallel::ParallelGroup;
pub use scheduler::AnimationScheduler;
pub use spring::{Spring, SpringConfig};
pub use timing::Timing;
