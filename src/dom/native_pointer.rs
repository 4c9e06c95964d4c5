//! Scoped ownership of the page-wide "native pointer hidden" style.
//!
//! The first guard records whatever `body.style.cursor` was and sets it to
//! `none`; the last guard to drop puts the recorded value back. Guards are
//! counted per thread, so nested mounts cannot restore too early.

use std::cell::RefCell;

use web_sys::HtmlElement;

use crate::error::Result;

#[derive(Debug, Default)]
struct Ledger {
    owners: usize,
    previous: Option<String>,
}

impl Ledger {
    /// Returns true when this acquisition is the one that must hide the pointer.
    fn acquire(&mut self, current: impl FnOnce() -> String) -> bool {
        self.owners += 1;
        if self.owners == 1 {
            self.previous = Some(current());
            true
        } else {
            false
        }
    }

    /// Returns the value to restore when the last owner leaves.
    fn release(&mut self) -> Option<String> {
        match self.owners {
            0 => None,
            1 => {
                self.owners = 0;
                Some(self.previous.take().unwrap_or_default())
            }
            _ => {
                self.owners -= 1;
                None
            }
        }
    }
}

thread_local! {
    static LEDGER: RefCell<Ledger> = RefCell::new(Ledger::default());
}

pub struct NativePointerGuard {
    body: HtmlElement,
}

impl NativePointerGuard {
    pub fn hide(body: &HtmlElement) -> Result<Self> {
        let style = body.style();
        let first = LEDGER.with(|l| {
            l.borrow_mut()
                .acquire(|| style.get_property_value("cursor").unwrap_or_default())
        });
        if first {
            if let Err(e) = style.set_property("cursor", "none") {
                LEDGER.with(|l| l.borrow_mut().release());
                return Err(e.into());
            }
        }
        Ok(Self { body: body.clone() })
    }
}

impl Drop for NativePointerGuard {
    fn drop(&mut self) {
        let Some(previous) = LEDGER.with(|l| l.borrow_mut().release()) else {
            return;
        };
        let style = self.body.style();
        let _ = if previous.is_empty() {
            style.remove_property("cursor").map(|_| ())
        } else {
            style.set_property("cursor", &previous)
        };
        tracing::debug!(restored = %previous, "native pointer restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_owner_restores_previous() {
        let mut l = Ledger::default();
        assert!(l.acquire(|| "crosshair".into()));
        assert_eq!(l.release(), Some("crosshair".into()));
        assert_eq!(l.release(), None);
    }

    #[test]
    fn nested_owners_restore_once() {
        let mut l = Ledger::default();
        assert!(l.acquire(String::new));
        assert!(!l.acquire(|| panic!("only the first owner reads the style")));
        assert_eq!(l.release(), None);
        assert_eq!(l.release(), Some(String::new()));
    }
}
