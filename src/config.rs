use crate::error::{CursorError, Result};

pub const TRAIL_COUNT: usize = 12;
pub const TRAIL_UPDATE_INTERVAL_MS: f64 = 10.0;
pub const MOVE_THROTTLE_MS: f64 = 16.0;
pub const MAGNET_STRENGTH: f64 = 0.25;
pub const MAGNET_DISTANCE: f64 = 100.0;
pub const CURSOR_LERP: f64 = 0.12;
pub const RIPPLE_DURATION_MS: f64 = 800.0;
pub const PARTICLE_COUNT: usize = 12;
pub const PARTICLE_RADIUS: f64 = 50.0;
pub const PARTICLE_DURATION_MS: f64 = 800.0;
pub const MAX_CONCURRENT_PULSES: usize = 8;
pub const TAP_THRESHOLD: f64 = 8.0;
pub const TAP_RELEASE_MS: f64 = 200.0;
/// Mouse presses this soon after a touch ends are the browser's compatibility
/// events for that touch.
pub const COMPAT_MOUSE_WINDOW_MS: f64 = 500.0;

/// Upper bounds accepted by [`CursorConfig::validate`].
pub const MAX_TRAIL_COUNT: usize = 64;
pub const MAX_PARTICLE_COUNT: usize = 64;
pub const MAX_PULSES: usize = 64;

/// Tuning for the cursor layer. The page mounts it with `Default`.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    pub trail_count: usize,
    pub trail_update_interval_ms: f64,
    pub move_throttle_ms: f64,
    pub magnet_strength: f64,
    pub magnet_distance: f64,
    pub lerp: f64,
    pub ripple_duration_ms: f64,
    pub particle_count: usize,
    pub particle_radius: f64,
    pub particle_duration_ms: f64,
    pub max_concurrent_pulses: usize,
    pub tap_threshold: f64,
    pub tap_release_ms: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            trail_count: TRAIL_COUNT,
            trail_update_interval_ms: TRAIL_UPDATE_INTERVAL_MS,
            move_throttle_ms: MOVE_THROTTLE_MS,
            magnet_strength: MAGNET_STRENGTH,
            magnet_distance: MAGNET_DISTANCE,
            lerp: CURSOR_LERP,
            ripple_duration_ms: RIPPLE_DURATION_MS,
            particle_count: PARTICLE_COUNT,
            particle_radius: PARTICLE_RADIUS,
            particle_duration_ms: PARTICLE_DURATION_MS,
            max_concurrent_pulses: MAX_CONCURRENT_PULSES,
            tap_threshold: TAP_THRESHOLD,
            tap_release_ms: TAP_RELEASE_MS,
        }
    }
}

impl CursorConfig {
    /// Slots needed to hold every live effect of `max_concurrent_pulses`
    /// bursts, or `None` if that does not fit in a `usize`.
    pub fn effect_capacity(&self) -> Option<usize> {
        self.particle_count
            .checked_add(1)?
            .checked_mul(self.max_concurrent_pulses)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |field, reason| Err(CursorError::InvalidConfig { field, reason });
        let durations = [
            ("trail_update_interval_ms", self.trail_update_interval_ms),
            ("move_throttle_ms", self.move_throttle_ms),
            ("ripple_duration_ms", self.ripple_duration_ms),
            ("particle_duration_ms", self.particle_duration_ms),
            ("tap_release_ms", self.tap_release_ms),
            ("particle_radius", self.particle_radius),
        ];
        for (field, v) in durations {
            if !v.is_finite() || v < 0.0 {
                return invalid(field, "must be finite and non-negative");
            }
        }
        let counts = [
            ("trail_count", self.trail_count, MAX_TRAIL_COUNT),
            ("particle_count", self.particle_count, MAX_PARTICLE_COUNT),
            ("max_concurrent_pulses", self.max_concurrent_pulses, MAX_PULSES),
        ];
        for (field, n, max) in counts {
            if n == 0 {
                return invalid(field, "must be at least 1");
            }
            if n > max {
                return invalid(field, "too large");
            }
        }
        if !(self.lerp > 0.0 && self.lerp <= 1.0) {
            return invalid("lerp", "must be in (0, 1]");
        }
        if !(0.0..=1.0).contains(&self.magnet_strength) {
            return invalid("magnet_strength", "must be in [0, 1]");
        }
        if !(self.magnet_distance.is_finite() && self.magnet_distance > 0.0) {
            return invalid("magnet_distance", "must be positive");
        }
        if !(self.tap_threshold.is_finite() && self.tap_threshold > 0.0) {
            return invalid("tap_threshold", "must be positive");
        }
        Ok(())
    }

    /// Returns `self` when valid, otherwise logs and falls back to the defaults.
    pub fn or_default_if_invalid(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                tracing::warn!(error = %e, "using default cursor config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(CursorConfig::default().validate().is_ok());
        assert_eq!(CursorConfig::default().effect_capacity(), Some(13 * 8));
    }

    #[test]
    fn rejects_out_of_range_lerp() {
        let cfg = CursorConfig { lerp: 0.0, ..Default::default() };
        assert!(matches!(
            cfg.validate(),
            Err(CursorError::InvalidConfig { field: "lerp", .. })
        ));
        let cfg = CursorConfig { lerp: 1.5, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_empty_trail_and_nan_durations() {
        let cfg = CursorConfig { trail_count: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = CursorConfig { ripple_duration_ms: f64::NAN, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_oversized_counts() {
        let cfg = CursorConfig { max_concurrent_pulses: usize::MAX / 2, ..Default::default() };
        assert!(matches!(
            cfg.validate(),
            Err(CursorError::InvalidConfig { field: "max_concurrent_pulses", .. })
        ));
        let cfg = CursorConfig { particle_count: MAX_PARTICLE_COUNT + 1, ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = CursorConfig { trail_count: MAX_TRAIL_COUNT + 1, ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = CursorConfig {
            trail_count: MAX_TRAIL_COUNT,
            particle_count: MAX_PARTICLE_COUNT,
            max_concurrent_pulses: MAX_PULSES,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn capacity_overflow_is_none() {
        let cfg = CursorConfig { particle_count: usize::MAX, ..Default::default() };
        assert_eq!(cfg.effect_capacity(), None);
        let cfg = CursorConfig { max_concurrent_pulses: usize::MAX, ..Default::default() };
        assert_eq!(cfg.effect_capacity(), None);
    }

    #[test]
    fn invalid_config_falls_back() {
        let cfg = CursorConfig { magnet_distance: -1.0, ..Default::default() };
        assert_eq!(cfg.or_default_if_invalid(), CursorConfig::default());
    }
}
