use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::error::{CursorError, Result};
use crate::state::{Effect, EffectId, EffectKind};

/// DOM nodes for live effects, keyed by pool id.
pub struct EffectLayer {
    document: Document,
    container: HtmlElement,
    nodes: HashMap<EffectId, HtmlElement>,
}

impl EffectLayer {
    pub fn new(document: Document, container: HtmlElement) -> Self {
        Self {
            document,
            container,
            nodes: HashMap::new(),
        }
    }

    pub fn show(&mut self, effect: &Effect) -> Result<()> {
        let el: HtmlElement = self
            .document
            .create_element("div")?
            .dyn_into()
            .map_err(|_| CursorError::Js("created div is not an HtmlElement".into()))?;
        let style = el.style();
        style.set_property("left", &format!("{}px", effect.origin.x))?;
        style.set_property("top", &format!("{}px", effect.origin.y))?;
        style.set_property("animation-duration", &format!("{}ms", effect.lifetime_ms))?;
        match effect.kind {
            EffectKind::Ripple => el.set_class_name("cursor-ripple"),
            EffectKind::Particle { travel, .. } => {
                el.set_class_name("cursor-particle");
                style.set_property("--tx", &format!("{}px", travel.x))?;
                style.set_property("--ty", &format!("{}px", travel.y))?;
            }
        }
        self.container.append_child(&el)?;
        self.nodes.insert(effect.id, el);
        Ok(())
    }

    /// Unknown ids are ignored; an already detached node is harmless.
    pub fn remove(&mut self, id: EffectId) {
        if let Some(el) = self.nodes.remove(&id) {
            el.remove();
        }
    }

    pub fn clear(&mut self) {
        for (_, el) in self.nodes.drain() {
            el.remove();
        }
    }
}
