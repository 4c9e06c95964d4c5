// Tap vs scroll disambiguation for single-finger touches
use crate::model::Position;

#[derive(Default, Debug, Clone)]
pub struct TouchGesture {
    pub start: Option<Position>,
    pub active: bool,
}

impl TouchGesture {
    /// `touches` is the number of contacts currently down.
    pub fn start(&mut self, touches: u32, at: Option<Position>) {
        match (touches, at) {
            (1, Some(p)) => {
                self.start = Some(p);
                self.active = true;
            }
            _ => self.cancel(),
        }
    }

    /// Once the finger has travelled `threshold` on either axis the gesture is a
    /// scroll for the rest of the sequence.
    pub fn moved(&mut self, touches: u32, at: Option<Position>, threshold: f64) {
        if !self.active {
            return;
        }
        if touches > 1 {
            self.cancel();
            return;
        }
        if let (Some(start), Some(p)) = (self.start, at) {
            if (p.x - start.x).abs() >= threshold || (p.y - start.y).abs() >= threshold {
                self.active = false;
            }
        }
    }

    /// Returns the tap location when the sequence qualifies as a tap.
    pub fn end(&mut self, at: Option<Position>, threshold: f64) -> Option<Position> {
        let start = self.start.take();
        let was_active = std::mem::replace(&mut self.active, false);
        let (start, end) = (start?, at?);
        if was_active && start.distance(end) < threshold {
            Some(end)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: f64 = 8.0;

    fn p(x: f64, y: f64) -> Option<Position> {
        Some(Position::new(x, y))
    }

    #[test]
    fn still_finger_is_a_tap() {
        let mut g = TouchGesture::default();
        g.start(1, p(10.0, 10.0));
        g.moved(1, p(12.0, 11.0), T);
        assert_eq!(g.end(p(13.0, 12.0), T), p(13.0, 12.0));
        assert!(!g.active);
    }

    #[test]
    fn swipe_is_not_a_tap_even_if_it_returns() {
        let mut g = TouchGesture::default();
        g.start(1, p(10.0, 10.0));
        g.moved(1, p(10.0, 30.0), T);
        assert!(!g.active);
        g.moved(1, p(10.0, 10.0), T);
        assert!(!g.active);
        assert_eq!(g.end(p(10.0, 10.0), T), None);
    }

    #[test]
    fn threshold_on_single_axis() {
        let mut g = TouchGesture::default();
        g.start(1, p(0.0, 0.0));
        g.moved(1, p(8.0, 0.0), T);
        assert_eq!(g.end(p(0.0, 0.0), T), None);
    }

    #[test]
    fn end_displacement_without_moves_counts() {
        let mut g = TouchGesture::default();
        g.start(1, p(0.0, 0.0));
        assert_eq!(g.end(p(6.0, 6.0), T), None);
        g.start(1, p(0.0, 0.0));
        assert_eq!(g.end(p(3.0, 3.0), T), p(3.0, 3.0));
    }

    #[test]
    fn multi_touch_is_ignored() {
        let mut g = TouchGesture::default();
        g.start(2, p(0.0, 0.0));
        assert_eq!(g.end(p(0.0, 0.0), T), None);

        g.start(1, p(0.0, 0.0));
        g.moved(2, p(0.0, 0.0), T);
        assert_eq!(g.end(p(0.0, 0.0), T), None);
    }

    #[test]
    fn end_without_position_is_ignored() {
        let mut g = TouchGesture::default();
        g.start(1, p(0.0, 0.0));
        assert_eq!(g.end(None, T), None);
        assert!(g.start.is_none());
    }
}
