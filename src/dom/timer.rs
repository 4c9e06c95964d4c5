// requestAnimationFrame loop and one-shot timeouts
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::error::Result;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Calls `frame` once per animation frame until dropped.
pub struct FrameLoop {
    window: Window,
    raf_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start<F>(window: &Window, mut frame: F) -> Result<Self>
    where
        F: FnMut() + 'static,
    {
        let raf_id = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        {
            // Weak self-reference so the loop dies with the FrameLoop value.
            let weak = Rc::downgrade(&callback);
            let window_loop = window.clone();
            let raf_id_loop = raf_id.clone();
            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                frame();
                let Some(cell) = weak.upgrade() else {
                    return;
                };
                let next = cell.borrow().as_ref().and_then(|cb| {
                    window_loop
                        .request_animation_frame(cb.as_ref().unchecked_ref())
                        .ok()
                });
                raf_id_loop.set(next);
            }) as Box<dyn FnMut()>));
        }
        let first = callback
            .borrow()
            .as_ref()
            .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()))
            .transpose()?;
        raf_id.set(first);
        Ok(Self {
            window: window.clone(),
            raf_id,
            callback,
        })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

/// Fire-and-forget timeout. The closure frees itself after running; callers
/// guard against running after teardown through a `Weak` handle.
pub fn schedule_once<F>(window: &Window, delay_ms: f64, f: F) -> Result<i32>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms.max(0.0).round() as i32,
    )?;
    Ok(id)
}
