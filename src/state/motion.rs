// Smoothed cursor position plus the fixed-length trail behind it
use std::collections::VecDeque;

use crate::model::Position;

#[derive(Debug, Clone)]
pub struct Motion {
    pub current: Position,
    pub target: Position,
    trail: VecDeque<Position>,
    trail_len: usize,
    lerp: f64,
    trail_interval_ms: f64,
    last_trail_update: f64,
    started: bool,
}

impl Motion {
    pub fn new(trail_len: usize, lerp: f64, trail_interval_ms: f64) -> Self {
        Self {
            current: Position::default(),
            target: Position::default(),
            trail: VecDeque::with_capacity(trail_len),
            trail_len,
            lerp,
            trail_interval_ms,
            last_trail_update: f64::NEG_INFINITY,
            started: false,
        }
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Seeds position and every trail slot at the first known pointer
    /// position so nothing sweeps in from the viewport origin.
    pub fn start_at(&mut self, at: Position) {
        self.current = at;
        self.target = at;
        self.trail.clear();
        self.trail.extend(std::iter::repeat_n(at, self.trail_len));
        self.started = true;
    }

    pub fn set_target(&mut self, target: Position) {
        if !self.started {
            self.start_at(target);
        }
        self.target = target;
    }

    /// Advances one animation frame.
    pub fn tick(&mut self, now: f64) {
        if !self.started {
            return;
        }
        self.current = self.current.lerp(self.target, self.lerp);
        if now - self.last_trail_update > self.trail_interval_ms {
            self.trail.push_front(self.current);
            self.trail.truncate(self.trail_len);
            self.last_trail_update = now;
        }
    }

    /// Most recent first.
    pub fn trail(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.trail.iter().copied()
    }

    pub fn trail_len(&self) -> usize {
        self.trail.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn trail_is_seeded_at_first_position() {
        let mut m = Motion::new(5, 0.2, 10.0);
        assert_eq!(m.trail_len(), 0);
        m.set_target(Position::new(30.0, 40.0));
        assert_eq!(m.trail_len(), 5);
        assert!(m.trail().all(|p| p == Position::new(30.0, 40.0)));
        assert_eq!(m.current, Position::new(30.0, 40.0));
    }

    #[test]
    fn converges_and_stays() {
        let mut m = Motion::new(4, 0.12, 10.0);
        m.set_target(Position::new(0.0, 0.0));
        let p = Position::new(500.0, -200.0);
        m.set_target(p);
        let mut now = 0.0;
        for _ in 0..400 {
            now += 16.0;
            m.tick(now);
        }
        assert!(m.current.distance(p) < 1e-6);
        for _ in 0..50 {
            now += 16.0;
            m.tick(now);
            assert!(m.current.distance(p) < 1e-6);
        }
        assert!(m.trail().all(|t| t.distance(p) < 1e-6));
    }

    #[test]
    fn trail_gate_limits_pushes() {
        let mut m = Motion::new(3, 0.5, 10.0);
        m.set_target(Position::new(0.0, 0.0));
        m.set_target(Position::new(100.0, 0.0));
        m.tick(100.0);
        let head = m.trail().next();
        // Inside the gate: position moves, trail head does not.
        m.tick(105.0);
        assert_eq!(m.trail().next(), head);
        m.tick(111.0);
        assert_ne!(m.trail().next(), head);
    }

    #[test]
    fn tick_before_start_is_inert() {
        let mut m = Motion::new(3, 0.5, 10.0);
        m.tick(16.0);
        assert!(!m.started());
        assert_eq!(m.trail_len(), 0);
    }

    proptest! {
        #[test]
        fn trail_length_is_constant(
            samples in prop::collection::vec((-1e4f64..1e4, -1e4f64..1e4, 0.0f64..50.0), 1..200),
            trail_len in 1usize..20,
        ) {
            let mut m = Motion::new(trail_len, 0.12, 10.0);
            let mut now = 0.0;
            for (x, y, dt) in samples {
                m.set_target(Position::new(x, y));
                now += dt;
                m.tick(now);
                prop_assert_eq!(m.trail_len(), trail_len);
            }
        }
    }
}
