use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::error::Result;
use crate::model::Region;
use crate::state::INTERACTIVE_SELECTOR;

/// Live bounding boxes of every interactive element, in document order.
/// A failing query degrades to no regions, which turns magnetism off.
pub fn interactive_regions(document: &Document) -> Vec<Region> {
    query(document).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "interactive region query failed");
        Vec::new()
    })
}

fn query(document: &Document) -> Result<Vec<Region>> {
    let nodes = document.query_selector_all(INTERACTIVE_SELECTOR)?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let rect = el.get_bounding_client_rect();
        out.push(Region {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        });
    }
    Ok(out)
}
