// Cursor mode from the element under the pointer
use crate::model::CursorMode;

/// Everything that counts as actionable, as a CSS selector for live queries.
pub const INTERACTIVE_SELECTOR: &str = "a, button, [role=\"button\"], [role=\"tab\"], .interactive, .cursor-pointer, input[type=\"submit\"], input[type=\"button\"], input[type=\"reset\"], input[type=\"image\"]";

const ACTION_INPUT_TYPES: [&str; 4] = ["submit", "button", "reset", "image"];
const TEXT_INPUT_TYPES: [&str; 13] = [
    "", "text", "email", "password", "search", "tel", "url", "number", "date",
    "datetime-local", "month", "week", "time",
];

/// The handful of element facts classification needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementInfo {
    /// Lowercase tag name.
    pub tag: String,
    pub role: Option<String>,
    pub classes: Vec<String>,
    /// Lowercase `type` attribute for `<input>`.
    pub input_type: Option<String>,
    /// Effective (inherited) content-editable state.
    pub content_editable: bool,
    /// `disabled` attribute or `aria-disabled="true"`.
    pub disabled: bool,
}

impl ElementInfo {
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    pub fn is_actionable(&self) -> bool {
        match self.tag.as_str() {
            "a" | "button" => return true,
            "input" => {
                let ty = self.input_type.as_deref().unwrap_or("");
                if ACTION_INPUT_TYPES.contains(&ty) {
                    return true;
                }
            }
            _ => {}
        }
        matches!(self.role.as_deref(), Some("button" | "tab"))
            || self.has_class("interactive")
            || self.has_class("cursor-pointer")
    }

    pub fn is_text_entry(&self) -> bool {
        match self.tag.as_str() {
            "textarea" => true,
            "input" => TEXT_INPUT_TYPES.contains(&self.input_type.as_deref().unwrap_or("")),
            _ => self.content_editable,
        }
    }
}

/// `chain` starts at the event target and walks outward through its ancestors.
pub fn classify<I>(chain: I) -> CursorMode
where
    I: IntoIterator<Item = ElementInfo>,
{
    let mut chain = chain.into_iter();
    let Some(target) = chain.next() else {
        return CursorMode::Default;
    };
    let closest_action = if target.is_actionable() {
        Some(target.clone())
    } else {
        chain.find(ElementInfo::is_actionable)
    };
    match closest_action {
        Some(el) if el.disabled => CursorMode::Disabled,
        Some(_) => CursorMode::Pointer,
        None if target.is_text_entry() && target.disabled => CursorMode::Disabled,
        None if target.is_text_entry() => CursorMode::Text,
        None => CursorMode::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(ty: &str) -> ElementInfo {
        ElementInfo {
            input_type: Some(ty.to_string()),
            ..ElementInfo::tag("input")
        }
    }

    fn with_class(tag: &str, class: &str) -> ElementInfo {
        ElementInfo {
            classes: vec![class.to_string()],
            ..ElementInfo::tag(tag)
        }
    }

    #[test]
    fn links_and_buttons_are_pointer() {
        assert_eq!(classify([ElementInfo::tag("A")]), CursorMode::Pointer);
        assert_eq!(classify([ElementInfo::tag("button")]), CursorMode::Pointer);
        assert_eq!(classify([input("submit")]), CursorMode::Pointer);
        assert_eq!(classify([with_class("div", "interactive")]), CursorMode::Pointer);
        let tab = ElementInfo {
            role: Some("tab".into()),
            ..ElementInfo::tag("div")
        };
        assert_eq!(classify([tab]), CursorMode::Pointer);
    }

    #[test]
    fn closest_actionable_ancestor_counts() {
        let chain = [
            ElementInfo::tag("span"),
            ElementInfo::tag("div"),
            ElementInfo::tag("a"),
            ElementInfo::tag("body"),
        ];
        assert_eq!(classify(chain), CursorMode::Pointer);
    }

    #[test]
    fn text_entry_fields() {
        assert_eq!(classify([input("email")]), CursorMode::Text);
        assert_eq!(classify([ElementInfo::tag("input")]), CursorMode::Text);
        assert_eq!(classify([ElementInfo::tag("textarea")]), CursorMode::Text);
        let editable = ElementInfo {
            content_editable: true,
            ..ElementInfo::tag("p")
        };
        assert_eq!(classify([editable]), CursorMode::Text);
        assert_eq!(classify([input("checkbox")]), CursorMode::Default);
    }

    #[test]
    fn date_and_time_pickers_are_text() {
        for ty in ["date", "datetime-local", "month", "week", "time"] {
            assert_eq!(classify([input(ty)]), CursorMode::Text, "{ty}");
        }
    }

    #[test]
    fn disabled_targets() {
        let button = ElementInfo {
            disabled: true,
            ..ElementInfo::tag("button")
        };
        assert_eq!(classify([ElementInfo::tag("span"), button]), CursorMode::Disabled);
        let field = ElementInfo {
            disabled: true,
            ..input("text")
        };
        assert_eq!(classify([field]), CursorMode::Disabled);
    }

    #[test]
    fn plain_content_is_default() {
        assert_eq!(classify([ElementInfo::tag("p"), ElementInfo::tag("main")]), CursorMode::Default);
        assert_eq!(classify(Vec::new()), CursorMode::Default);
    }
}
