//! Host-independent pointer controller.
//!
//! Owns every piece of cursor state and turns normalized input samples into
//! state changes plus effect spawn/release lists. The DOM layer feeds it
//! events and renders whatever it reports; nothing in here touches `web_sys`.

use crate::config::{COMPAT_MOUSE_WINDOW_MS, CursorConfig};
use crate::model::{CursorLook, CursorMode, Position, Region};

use super::effects::{EffectId, EffectPool, Spawned};
use super::magnet::Magnet;
use super::mode::{ElementInfo, classify};
use super::motion::Motion;
use super::throttle::Throttle;
use super::touch::TouchGesture;

#[derive(Debug)]
pub struct PointerController {
    cfg: CursorConfig,
    magnet: Magnet,
    motion: Motion,
    moves: Throttle<Position>,
    touch: TouchGesture,
    effects: EffectPool,
    look: CursorLook,
    /// When the last touch sequence ended, for filtering compatibility mouse events.
    last_touch_end: Option<f64>,
    /// Bumped on every tap so only the newest tap's release timer clears the press.
    tap: u64,
    attached: bool,
}

impl PointerController {
    /// An invalid `cfg` is replaced by the defaults.
    pub fn new(cfg: CursorConfig) -> Self {
        let cfg = cfg.or_default_if_invalid();
        Self {
            magnet: Magnet {
                distance: cfg.magnet_distance,
                strength: cfg.magnet_strength,
            },
            motion: Motion::new(cfg.trail_count, cfg.lerp, cfg.trail_update_interval_ms),
            moves: Throttle::new(cfg.move_throttle_ms),
            touch: TouchGesture::default(),
            effects: EffectPool::new(&cfg),
            look: CursorLook::default(),
            last_touch_end: None,
            tap: 0,
            attached: true,
            cfg,
        }
    }

    pub fn config(&self) -> &CursorConfig {
        &self.cfg
    }

    pub fn look(&self) -> CursorLook {
        self.look
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn cursor(&self) -> Position {
        self.motion.current
    }

    pub fn target(&self) -> Position {
        self.motion.target
    }

    pub fn trail(&self) -> impl ExactSizeIterator<Item = Position> + '_ {
        self.motion.trail()
    }

    pub fn live_effects(&self) -> usize {
        self.effects.len()
    }

    /// Feeds a raw mouse position. `regions` is only queried if the sample
    /// passes the throttle. Returns true on the very first movement, which is
    /// when the frame loop has to be started.
    pub fn pointer_moved<F, R>(&mut self, raw: Position, now: f64, regions: F) -> bool
    where
        F: FnOnce() -> R,
        R: IntoIterator<Item = Region>,
    {
        if !self.attached || !raw.is_finite() {
            return false;
        }
        let first = !self.motion.started();
        self.look.visible = true;
        if let Some(raw) = self.moves.offer(now, raw) {
            self.apply_target(raw, regions);
        }
        first
    }

    fn apply_target<F, R>(&mut self, raw: Position, regions: F)
    where
        F: FnOnce() -> R,
        R: IntoIterator<Item = Region>,
    {
        let target = if self.look.mode.allows_magnet() {
            self.magnet.resolve(raw, regions())
        } else {
            raw
        };
        self.motion.set_target(target);
    }

    /// One animation frame. Flushes a throttled move, advances the motion and
    /// returns the effects whose lifetime ran out.
    pub fn tick<F, R>(&mut self, now: f64, regions: F) -> Vec<EffectId>
    where
        F: FnOnce() -> R,
        R: IntoIterator<Item = Region>,
    {
        if !self.attached {
            return Vec::new();
        }
        if let Some(raw) = self.moves.flush(now) {
            self.apply_target(raw, regions);
        }
        self.motion.tick(now);
        self.effects.reap(now)
    }

    /// Re-evaluates the mode for a new element under the pointer.
    pub fn pointer_over<I>(&mut self, chain: I)
    where
        I: IntoIterator<Item = ElementInfo>,
    {
        if !self.attached {
            return;
        }
        let mode = classify(chain);
        self.look.mode = mode;
        self.look.hovering = mode == CursorMode::Pointer;
    }

    pub fn pressed(&mut self, at: Position, now: f64) -> Option<Spawned> {
        if !self.attached || !at.is_finite() {
            return None;
        }
        self.look.clicking = true;
        let spawned = self.effects.spawn_pulse(at, now);
        tracing::debug!(x = at.x, y = at.y, evicted = spawned.evicted.len(), "pulse");
        Some(spawned)
    }

    /// A real mouse press. Presses the browser synthesizes right after a touch
    /// are dropped, since the touch already spawned its own pulse.
    pub fn mouse_pressed(&mut self, at: Position, now: f64) -> Option<Spawned> {
        if let Some(ended) = self.last_touch_end {
            if (0.0..COMPAT_MOUSE_WINDOW_MS).contains(&(now - ended)) {
                return None;
            }
        }
        self.pressed(at, now)
    }

    pub fn released(&mut self) {
        if self.attached {
            self.look.clicking = false;
        }
    }

    /// Current tap generation, to hand to [`tap_released`](Self::tap_released)
    /// once `tap_release_ms` has passed.
    pub fn tap_generation(&self) -> u64 {
        self.tap
    }

    /// Ends the press of tap `generation`, unless a newer tap has happened since.
    pub fn tap_released(&mut self, generation: u64) {
        if generation == self.tap {
            self.released();
        }
    }

    pub fn touch_started(&mut self, touches: u32, at: Option<Position>) {
        if self.attached {
            self.touch.start(touches, at);
        }
    }

    pub fn touch_moved(&mut self, touches: u32, at: Option<Position>) {
        if self.attached {
            self.touch.moved(touches, at, self.cfg.tap_threshold);
        }
    }

    /// A qualifying tap presses at the lift-off point. The caller is expected
    /// to call [`tap_released`](Self::tap_released) after `tap_release_ms`.
    pub fn touch_ended(&mut self, at: Option<Position>, now: f64) -> Option<Spawned> {
        if !self.attached {
            return None;
        }
        self.last_touch_end = Some(now);
        let tap = self.touch.end(at, self.cfg.tap_threshold)?;
        self.tap += 1;
        self.pressed(tap, now)
    }

    pub fn touch_cancelled(&mut self) {
        self.touch.cancel();
    }

    pub fn left_document(&mut self) {
        if self.attached {
            self.look.visible = false;
        }
    }

    pub fn entered_document(&mut self) {
        if self.attached && self.motion.started() {
            self.look.visible = true;
        }
    }

    /// Called from an effect's own cleanup timer.
    pub fn release_effect(&mut self, id: EffectId) -> bool {
        self.effects.release(id)
    }

    /// Stops reacting to input and hands back every effect still alive.
    pub fn detach(&mut self) -> Vec<EffectId> {
        self.attached = false;
        self.moves.clear();
        self.touch.cancel();
        self.look = CursorLook::default();
        self.effects.drain()
    }
}
