//! Motion scheduler
//!
//! Owns standalone springs and advances all of them once per frame. The
//! host rendering environment calls [`MotionScheduler::tick`] from its
//! frame callback and keeps requesting frames while [`has_active`]
//! reports motion.
//!
//! [`has_active`]: MotionScheduler::has_active

use std::time::Instant;

use slotmap::{new_key_type, SlotMap};

use crate::spring::Spring;

new_key_type! {
    /// Handle to a spring owned by a scheduler
    pub struct SpringId;
}

/// Frame-driven set of springs
pub struct MotionScheduler {
    springs: SlotMap<SpringId, Spring>,
    last_frame: Option<Instant>,
}

impl MotionScheduler {
    pub fn new() -> Self {
        Self {
            springs: SlotMap::with_key(),
            last_frame: None,
        }
    }

    /// Add a spring, returning its handle
    pub fn add(&mut self, spring: Spring) -> SpringId {
        self.springs.insert(spring)
    }

    pub fn get(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id)
    }

    pub fn get_mut(&mut self, id: SpringId) -> Option<&mut Spring> {
        self.springs.get_mut(id)
    }

    /// Remove a spring (e.g. when its owning element unmounts)
    pub fn remove(&mut self, id: SpringId) -> Option<Spring> {
        self.springs.remove(id)
    }

    /// Advance all springs by the wall-clock delta since the previous tick
    ///
    /// The first tick establishes the frame clock and advances nothing.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = match self.last_frame.replace(now) {
            Some(last) => (now - last).as_secs_f32(),
            None => return,
        };
        self.tick_dt(dt);
    }

    /// Advance all springs by an explicit delta, in seconds
    pub fn tick_dt(&mut self, dt: f32) {
        for (_, spring) in self.springs.iter_mut() {
            spring.step(dt);
        }
        tracing::trace!(
            springs = self.springs.len(),
            active = self.has_active(),
            "motion tick"
        );
    }

    /// Whether any spring is still settling
    pub fn has_active(&self) -> bool {
        self.springs.iter().any(|(_, s)| !s.is_settled())
    }

    /// Number of springs currently owned by the scheduler
    pub fn len(&self) -> usize {
        self.springs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }
}

impl Default for MotionScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpringConfig;

    #[test]
    fn ticks_all_springs() {
        let mut scheduler = MotionScheduler::new();
        let a = scheduler.add(Spring::new(SpringConfig::snappy(), 0.0));
        let b = scheduler.add(Spring::new(SpringConfig::snappy(), 0.0));

        scheduler.get_mut(a).unwrap().set_target(1.0);
        scheduler.get_mut(b).unwrap().set_target(-1.0);
        assert!(scheduler.has_active());

        for _ in 0..600 {
            scheduler.tick_dt(1.0 / 120.0);
        }

        assert!(!scheduler.has_active());
        assert_eq!(scheduler.get(a).unwrap().value(), 1.0);
        assert_eq!(scheduler.get(b).unwrap().value(), -1.0);
    }

    #[test]
    fn removed_springs_stop_ticking() {
        let mut scheduler = MotionScheduler::new();
        let id = scheduler.add(Spring::new(SpringConfig::smooth(), 0.0));
        scheduler.get_mut(id).unwrap().set_target(1.0);

        let spring = scheduler.remove(id).unwrap();
        assert!(!spring.is_settled());
        assert!(scheduler.is_empty());
        assert!(!scheduler.has_active());
        assert!(scheduler.get(id).is_none());
    }

    #[test]
    fn first_wall_clock_tick_only_arms_the_clock() {
        let mut scheduler = MotionScheduler::new();
        let id = scheduler.add(Spring::new(SpringConfig::stiff(), 0.0));
        scheduler.get_mut(id).unwrap().set_target(1.0);

        scheduler.tick();
        assert_eq!(scheduler.get(id).unwrap().value(), 0.0);
    }
}
