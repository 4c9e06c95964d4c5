// Leading-edge rate limiter with a single overwrite slot
#[derive(Debug, Clone)]
pub struct Throttle<T> {
    interval_ms: f64,
    last_fire: f64,
    pending: Option<T>,
}

impl<T> Throttle<T> {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_fire: f64::NEG_INFINITY,
            pending: None,
        }
    }

    /// Returns the sample if the window is open. Otherwise it replaces whatever
    /// was pending; older samples inside one window are dropped.
    pub fn offer(&mut self, now: f64, sample: T) -> Option<T> {
        if now - self.last_fire >= self.interval_ms {
            self.last_fire = now;
            self.pending = None;
            Some(sample)
        } else {
            self.pending = Some(sample);
            None
        }
    }

    /// Releases the pending sample once its window has elapsed.
    pub fn flush(&mut self, now: f64) -> Option<T> {
        if self.pending.is_some() && now - self.last_fire >= self.interval_ms {
            self.last_fire = now;
            self.pending.take()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_passes() {
        let mut t = Throttle::new(16.0);
        assert_eq!(t.offer(0.0, 1), Some(1));
    }

    #[test]
    fn burst_keeps_only_latest() {
        let mut t = Throttle::new(16.0);
        assert_eq!(t.offer(0.0, 1), Some(1));
        assert_eq!(t.offer(4.0, 2), None);
        assert_eq!(t.offer(8.0, 3), None);
        assert_eq!(t.flush(10.0), None);
        assert_eq!(t.flush(16.0), Some(3));
        assert_eq!(t.flush(40.0), None);
    }

    #[test]
    fn at_most_one_sample_per_window() {
        let mut t = Throttle::new(16.0);
        let mut fired = 0;
        for i in 0..160 {
            let now = i as f64;
            if t.offer(now, i).is_some() {
                fired += 1;
            }
            if t.flush(now).is_some() {
                fired += 1;
            }
        }
        assert_eq!(fired, 10);
    }

    #[test]
    fn clear_drops_pending() {
        let mut t = Throttle::new(16.0);
        t.offer(0.0, 'a');
        t.offer(1.0, 'b');
        t.clear();
        assert_eq!(t.flush(100.0), None);
    }
}
