//! Browser glue: everything that touches `web_sys` lives under here.

pub mod effects;
pub mod inspect;
pub mod listener;
pub mod native_pointer;
pub mod regions;
pub mod runtime;
pub mod timer;

use web_sys::{Document, HtmlElement, Window};

use crate::error::{CursorError, Result};
use crate::model::Position;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(CursorError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(CursorError::NoDocument)
}

pub fn body(document: &Document) -> Result<HtmlElement> {
    document.body().ok_or(CursorError::NoBody)
}

/// Wall-clock milliseconds. Used for every timestamp the controller sees so
/// throttle, trail gate and effect lifetimes share one clock.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Touch-first devices get the tap-only path.
pub fn prefers_coarse_pointer(window: &Window) -> bool {
    window
        .match_media("(pointer: coarse)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn client_position(e: &web_sys::MouseEvent) -> Position {
    Position::new(e.client_x() as f64, e.client_y() as f64)
}

pub fn touch_position(t: &web_sys::Touch) -> Position {
    Position::new(t.client_x() as f64, t.client_y() as f64)
}
