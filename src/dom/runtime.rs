//! Per-mount state shared by every listener, the frame loop and the effect
//! timers. Handlers borrow it mutably for the duration of one event, then
//! [`publish`] reports look changes to Yew once the borrow has ended.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use web_sys::{Document, HtmlElement, MouseEvent, TouchEvent, Window};
use yew::Callback;

use super::effects::EffectLayer;
use super::{inspect, now_ms, regions, timer};
use crate::model::{CursorLook, Position};
use crate::state::{EffectId, PointerController, Spawned};

pub type SharedRuntime = Rc<RefCell<CursorRuntime>>;

/// Overlay nodes updated every frame. Absent on the coarse-pointer path.
pub struct Overlay {
    pub cursor: HtmlElement,
    pub trail: Vec<HtmlElement>,
}

pub struct CursorRuntime {
    ctrl: PointerController,
    window: Window,
    document: Document,
    layer: Option<EffectLayer>,
    overlay: Option<Overlay>,
    published: CursorLook,
    on_look: Callback<CursorLook>,
    this: Weak<RefCell<CursorRuntime>>,
}

impl CursorRuntime {
    pub fn new(
        ctrl: PointerController,
        window: Window,
        document: Document,
        layer: Option<EffectLayer>,
        overlay: Option<Overlay>,
        on_look: Callback<CursorLook>,
    ) -> SharedRuntime {
        Rc::new_cyclic(|this| {
            RefCell::new(Self {
                ctrl,
                window,
                document,
                layer,
                overlay,
                published: CursorLook::default(),
                on_look,
                this: this.clone(),
            })
        })
    }

    /// The look to publish, if it changed since the last call.
    fn take_look_change(&mut self) -> Option<CursorLook> {
        let look = self.ctrl.look();
        if look == self.published {
            return None;
        }
        self.published = look;
        Some(look)
    }

    /// Returns true on the first movement, when the frame loop has to start.
    pub fn mouse_moved(&mut self, e: &MouseEvent) -> bool {
        let document = &self.document;
        self.ctrl
            .pointer_moved(super::client_position(e), now_ms(), || {
                regions::interactive_regions(document)
            })
    }

    pub fn mouse_over(&mut self, e: &MouseEvent) {
        self.ctrl.pointer_over(inspect::ancestry(e.target()));
    }

    pub fn mouse_down(&mut self, e: &MouseEvent) {
        // No container to draw into: skip the spawn entirely.
        if self.layer.is_none() {
            return;
        }
        if let Some(spawned) = self.ctrl.mouse_pressed(super::client_position(e), now_ms()) {
            self.show(spawned);
        }
    }

    pub fn mouse_up(&mut self) {
        self.ctrl.released();
    }

    pub fn left_document(&mut self) {
        self.ctrl.left_document();
    }

    pub fn entered_document(&mut self) {
        self.ctrl.entered_document();
    }

    pub fn touch_started(&mut self, e: &TouchEvent) {
        let touches = e.touches();
        let at = touches.item(0).map(|t| super::touch_position(&t));
        self.ctrl.touch_started(touches.length(), at);
    }

    pub fn touch_moved(&mut self, e: &TouchEvent) {
        let touches = e.touches();
        let at = touches.item(0).map(|t| super::touch_position(&t));
        self.ctrl.touch_moved(touches.length(), at);
    }

    pub fn touch_ended(&mut self, e: &TouchEvent) {
        if self.layer.is_none() {
            self.ctrl.touch_cancelled();
            return;
        }
        let at = e.changed_touches().item(0).map(|t| super::touch_position(&t));
        let Some(spawned) = self.ctrl.touch_ended(at, now_ms()) else {
            return;
        };
        self.show(spawned);
        let weak = self.this.clone();
        let tap = self.ctrl.tap_generation();
        let release = timer::schedule_once(&self.window, self.ctrl.config().tap_release_ms, move || {
            with_runtime(&weak, |rt| rt.ctrl.tap_released(tap))
        });
        if let Err(e) = release {
            tracing::debug!(error = %e, "tap release timer failed");
            self.ctrl.released();
        }
    }

    pub fn touch_cancelled(&mut self) {
        self.ctrl.touch_cancelled();
    }

    fn show(&mut self, spawned: Spawned) {
        let Some(layer) = self.layer.as_mut() else {
            return;
        };
        for id in spawned.evicted {
            layer.remove(id);
        }
        for effect in spawned.created {
            if let Err(e) = layer.show(&effect) {
                tracing::debug!(error = %e, "effect node not created");
                self.ctrl.release_effect(effect.id);
                continue;
            }
            let weak = self.this.clone();
            let id = effect.id;
            let scheduled = timer::schedule_once(&self.window, effect.lifetime_ms, move || {
                with_runtime(&weak, |rt| rt.expire(id))
            });
            // Without a timer the per-frame sweep still reaps it.
            if let Err(e) = scheduled {
                tracing::debug!(error = %e, "effect cleanup timer failed");
            }
        }
    }

    fn expire(&mut self, id: EffectId) {
        if self.ctrl.release_effect(id) {
            if let Some(layer) = self.layer.as_mut() {
                layer.remove(id);
            }
        }
    }

    /// One animation frame: advance motion, sweep expired effects, write transforms.
    pub fn frame(&mut self) {
        let document = &self.document;
        let expired = self
            .ctrl
            .tick(now_ms(), || regions::interactive_regions(document));
        if let Some(layer) = self.layer.as_mut() {
            for id in expired {
                layer.remove(id);
            }
        }
        let Some(overlay) = &self.overlay else {
            return;
        };
        place(&overlay.cursor, self.ctrl.cursor());
        for (el, pos) in overlay.trail.iter().zip(self.ctrl.trail()) {
            place(el, pos);
        }
    }

    /// Detaches the controller and removes every live effect node.
    pub fn teardown(&mut self) {
        let leftover = self.ctrl.detach();
        if let Some(layer) = self.layer.as_mut() {
            layer.clear();
        }
        self.overlay = None;
        tracing::debug!(effects = leftover.len(), "cursor runtime torn down");
    }
}

fn place(el: &HtmlElement, pos: Position) {
    let _ = el.style().set_property(
        "transform",
        &format!("translate(-50%, -50%) translate3d({}px, {}px, 0)", pos.x, pos.y),
    );
}

/// Sends the current look to Yew if it changed. Must be called with no
/// outstanding borrow of the runtime.
pub fn publish(rt: &SharedRuntime) {
    let change = match rt.try_borrow_mut() {
        Ok(mut inner) => inner
            .take_look_change()
            .map(|look| (look, inner.on_look.clone())),
        Err(_) => None,
    };
    if let Some((look, on_look)) = change {
        on_look.emit(look);
    }
}

/// Runs `f` against a still-alive runtime from a timer callback. A torn down
/// or busy runtime is skipped.
fn with_runtime<F>(weak: &Weak<RefCell<CursorRuntime>>, f: F)
where
    F: FnOnce(&mut CursorRuntime),
{
    let Some(rt) = weak.upgrade() else {
        return;
    };
    match rt.try_borrow_mut() {
        Ok(mut inner) => f(&mut inner),
        Err(_) => return,
    }
    publish(&rt);
}
