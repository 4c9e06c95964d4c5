//! Bounded arena of transient ripple/particle effects.
//!
//! The pool only tracks ids and lifetimes; the DOM layer owns the nodes and
//! removes one for every id the pool hands back from [`EffectPool::release`],
//! [`EffectPool::reap`], eviction or [`EffectPool::drain`]. Each id comes back
//! exactly once.

use std::collections::VecDeque;
use std::f64::consts::TAU;

use crate::config::CursorConfig;
use crate::model::Position;

const PREALLOCATE_LIMIT: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EffectKind {
    Ripple,
    /// Travel is the offset the particle drifts to over its lifetime.
    Particle { angle: f64, travel: Position },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Effect {
    pub id: EffectId,
    pub kind: EffectKind,
    pub origin: Position,
    pub created_at: f64,
    pub lifetime_ms: f64,
}

impl Effect {
    pub fn expires_at(&self) -> f64 {
        self.created_at + self.lifetime_ms
    }
}

/// Result of one pulse: the effects to draw and the older ones pushed out to make room.
#[derive(Debug, Default)]
pub struct Spawned {
    pub created: Vec<Effect>,
    pub evicted: Vec<EffectId>,
}

#[derive(Debug)]
pub struct EffectPool {
    live: VecDeque<Effect>,
    capacity: usize,
    next_id: u64,
    particle_count: usize,
    particle_radius: f64,
    ripple_ms: f64,
    particle_ms: f64,
}

impl EffectPool {
    /// A config whose capacity overflows gets an empty pool that never spawns.
    pub fn new(cfg: &CursorConfig) -> Self {
        let capacity = cfg.effect_capacity().unwrap_or(0);
        Self {
            live: VecDeque::with_capacity(capacity.min(PREALLOCATE_LIMIT)),
            capacity,
            next_id: 0,
            particle_count: cfg.particle_count,
            particle_radius: cfg.particle_radius,
            ripple_ms: cfg.ripple_duration_ms,
            particle_ms: cfg.particle_duration_ms,
        }
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn alloc(&mut self, kind: EffectKind, origin: Position, now: f64, lifetime_ms: f64) -> Effect {
        let id = EffectId(self.next_id);
        self.next_id += 1;
        let effect = Effect { id, kind, origin, created_at: now, lifetime_ms };
        self.live.push_back(effect);
        effect
    }

    /// One ripple plus `particle_count` particles spread evenly around a full turn.
    pub fn spawn_pulse(&mut self, origin: Position, now: f64) -> Spawned {
        if self.capacity == 0 {
            return Spawned::default();
        }
        let needed = self.particle_count.saturating_add(1).min(self.capacity);
        let mut evicted = Vec::new();
        while self.live.len() + needed > self.capacity {
            match self.live.pop_front() {
                Some(old) => evicted.push(old.id),
                None => break,
            }
        }

        let mut created = Vec::with_capacity(needed);
        created.push(self.alloc(EffectKind::Ripple, origin, now, self.ripple_ms));
        for i in 0..needed - 1 {
            let angle = i as f64 * TAU / self.particle_count as f64;
            let travel = Position::new(angle.cos(), angle.sin()) * self.particle_radius;
            let kind = EffectKind::Particle { angle, travel };
            created.push(self.alloc(kind, origin, now, self.particle_ms));
        }
        Spawned { created, evicted }
    }

    /// Returns true only the first time an id is released.
    pub fn release(&mut self, id: EffectId) -> bool {
        match self.live.iter().position(|e| e.id == id) {
            Some(idx) => {
                self.live.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Removes every effect whose lifetime has run out.
    pub fn reap(&mut self, now: f64) -> Vec<EffectId> {
        let mut expired = Vec::new();
        self.live.retain(|e| {
            if now >= e.expires_at() {
                expired.push(e.id);
                false
            } else {
                true
            }
        });
        expired
    }

    pub fn drain(&mut self) -> Vec<EffectId> {
        self.live.drain(..).map(|e| e.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn pool() -> EffectPool {
        EffectPool::new(&CursorConfig::default())
    }

    #[test]
    fn pulse_has_ripple_and_even_particles() {
        let mut p = pool();
        let s = p.spawn_pulse(Position::new(100.0, 100.0), 0.0);
        assert!(s.evicted.is_empty());
        assert_eq!(s.created.len(), 13);
        assert_eq!(s.created[0].kind, EffectKind::Ripple);
        let EffectKind::Particle { angle, travel } = s.created[5].kind else {
            panic!("expected particle");
        };
        // particle 4 of 12 sits a third of the way round
        assert!((angle - TAU / 3.0).abs() < 1e-9);
        assert!((travel.x - 50.0 * angle.cos()).abs() < 1e-9);
        assert!((travel.y - 50.0 * angle.sin()).abs() < 1e-9);
        assert!(s.created.iter().all(|e| e.origin == Position::new(100.0, 100.0)));
    }

    #[test]
    fn release_is_idempotent() {
        let mut p = pool();
        let s = p.spawn_pulse(Position::default(), 0.0);
        let id = s.created[3].id;
        assert!(p.release(id));
        assert!(!p.release(id));
        assert_eq!(p.len(), 12);
    }

    #[test]
    fn reap_removes_only_expired() {
        let mut p = pool();
        p.spawn_pulse(Position::default(), 0.0);
        p.spawn_pulse(Position::default(), 500.0);
        assert!(p.reap(799.0).is_empty());
        assert_eq!(p.reap(800.0).len(), 13);
        assert_eq!(p.len(), 13);
        assert_eq!(p.reap(1300.0).len(), 13);
        assert!(p.is_empty());
    }

    #[test]
    fn full_pool_evicts_oldest() {
        let mut p = pool();
        let first = p.spawn_pulse(Position::default(), 0.0);
        for i in 1..8 {
            assert!(p.spawn_pulse(Position::default(), i as f64).evicted.is_empty());
        }
        let ninth = p.spawn_pulse(Position::default(), 8.0);
        let first_ids: Vec<_> = first.created.iter().map(|e| e.id).collect();
        assert_eq!(ninth.evicted, first_ids);
        assert_eq!(p.len(), p.capacity());
    }

    #[test]
    fn drain_returns_everything_once() {
        let mut p = pool();
        p.spawn_pulse(Position::default(), 0.0);
        assert_eq!(p.drain().len(), 13);
        assert!(p.drain().is_empty());
    }

    #[test]
    fn zero_capacity_spawns_nothing() {
        let cfg = CursorConfig { max_concurrent_pulses: 0, ..Default::default() };
        let mut p = EffectPool::new(&cfg);
        let s = p.spawn_pulse(Position::default(), 0.0);
        assert!(s.created.is_empty() && s.evicted.is_empty());
        assert!(p.is_empty());
    }

    #[test]
    fn overflowing_capacity_does_not_allocate() {
        let cfg = CursorConfig { max_concurrent_pulses: usize::MAX / 2, ..Default::default() };
        let p = EffectPool::new(&cfg);
        assert_eq!(p.capacity(), 0);
    }

    proptest! {
        #[test]
        fn live_count_is_bounded_and_every_id_returns_once(
            gaps in prop::collection::vec(0.0f64..120.0, 1..120),
        ) {
            let mut p = pool();
            let mut handed_out = std::collections::HashSet::new();
            let mut returned = std::collections::HashSet::new();
            let mut now = 0.0;
            for gap in gaps {
                now += gap;
                for id in p.reap(now) {
                    prop_assert!(returned.insert(id));
                }
                let s = p.spawn_pulse(Position::default(), now);
                for id in s.evicted {
                    prop_assert!(returned.insert(id));
                }
                for e in s.created {
                    handed_out.insert(e.id);
                }
                prop_assert!(p.len() <= p.capacity());
            }
            // Nothing outlives its lifetime.
            now += 800.0;
            for id in p.reap(now) {
                prop_assert!(returned.insert(id));
            }
            prop_assert!(p.is_empty());
            prop_assert_eq!(handed_out, returned);
        }
    }
}
