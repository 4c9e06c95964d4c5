// Magnetic pull toward the nearest interactive element
use crate::model::{Position, Region};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Magnet {
    pub distance: f64,
    pub strength: f64,
}

impl Magnet {
    /// Biases `pointer` toward the center of the closest region whose center lies
    /// strictly inside `distance`. The pull falls off linearly to zero at the
    /// boundary and tops out at `strength` of the gap, so the center is never reached.
    /// Ties keep the first region in iteration (document) order.
    pub fn resolve<I>(&self, pointer: Position, regions: I) -> Position
    where
        I: IntoIterator<Item = Region>,
    {
        let mut best: Option<(f64, Position)> = None;
        for region in regions {
            if !region.is_usable() {
                continue;
            }
            let center = region.center();
            let d = pointer.distance(center);
            if d >= self.distance {
                continue;
            }
            if best.is_none_or(|(bd, _)| d < bd) {
                best = Some((d, center));
            }
        }
        match best {
            Some((d, center)) => {
                let pull = (1.0 - d / self.distance) * self.strength;
                pointer + (center - pointer) * pull
            }
            None => pointer,
        }
    }
}
