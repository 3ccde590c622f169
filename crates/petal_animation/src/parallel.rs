//! Parallel track groups
//!
//! A visibility transition runs several tracks at once (fade, scale,
//! translate). The group is complete only when every track is.

use smallvec::SmallVec;

use crate::driver::{AnimationDriver, AnimationId};

/// Set of tracks started together
#[derive(Clone, Debug, Default)]
pub struct ParallelGroup {
    tracks: SmallVec<[AnimationId; 4]>,
}

impl ParallelGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, id: AnimationId) {
        self.tracks.push(id);
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// True once every branch reports completion
    pub fn is_complete(&self, driver: &dyn AnimationDriver) -> bool {
        self.tracks.iter().all(|id| driver.is_complete(*id))
    }

    /// Release every track in the group
    pub fn cancel_all(&mut self, driver: &mut dyn AnimationDriver) {
        for id in self.tracks.drain(..) {
            driver.cancel(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::AnimationSpec;
    use crate::scheduler::AnimationScheduler;

    #[test]
    fn test_group_waits_for_slowest_branch() {
        let mut scheduler = AnimationScheduler::new();
        let mut group = ParallelGroup::new();
        group.push(scheduler.animate(0.0, 1.0, AnimationSpec::timing(100)));
        group.push(scheduler.animate(0.0, 1.0, AnimationSpec::timing(300)));

        for _ in 0..10 {
            scheduler.tick(1.0 / 60.0);
        }
        assert!(!group.is_complete(&scheduler));

        for _ in 0..20 {
            scheduler.tick(1.0 / 60.0);
        }
        assert!(group.is_complete(&scheduler));

        group.cancel_all(&mut scheduler);
        assert!(group.is_empty());
        assert_eq!(scheduler.track_count(), 0);
    }

    #[test]
    fn test_empty_group_is_complete() {
        let scheduler = AnimationScheduler::new();
        assert!(ParallelGroup::new().is_complete(&scheduler));
    }
}
