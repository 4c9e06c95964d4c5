// Element facts for the mode classifier
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement};

use crate::state::ElementInfo;

/// Lazily walks from `target` up through its ancestors.
pub fn ancestry(target: Option<EventTarget>) -> impl Iterator<Item = ElementInfo> {
    let start = target.and_then(|t| t.dyn_into::<Element>().ok());
    std::iter::successors(start, |el: &Element| el.parent_element()).map(|el| describe(&el))
}

fn describe(el: &Element) -> ElementInfo {
    let mut info = ElementInfo::tag(&el.tag_name());
    info.role = el.get_attribute("role");
    // getAttribute rather than className, which is not a string on SVG elements
    info.classes = el
        .get_attribute("class")
        .map(|c| c.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default();
    if info.tag == "input" {
        info.input_type = Some(el.get_attribute("type").unwrap_or_default().to_ascii_lowercase());
    }
    info.content_editable = el
        .dyn_ref::<HtmlElement>()
        .is_some_and(HtmlElement::is_content_editable);
    info.disabled = el.has_attribute("disabled")
        || el.get_attribute("aria-disabled").as_deref() == Some("true");
    info
}
