//! Core value types for the pointer layer.
//! Everything here is plain data in viewport pixels; nothing touches the DOM.

use std::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Moves `self` toward `target` by `factor` of the remaining gap.
    pub fn lerp(self, target: Position, factor: f64) -> Position {
        self + (target - self) * factor
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Position {
    type Output = Position;
    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;
    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Position {
    type Output = Position;
    fn mul(self, k: f64) -> Position {
        Position::new(self.x * k, self.y * k)
    }
}

/// Bounding box of an interactive element, read fresh from layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn center(&self) -> Position {
        Position::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Hidden (`display:none`) elements report a zero rect; those never attract.
    pub fn is_usable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && (self.width > 0.0 || self.height > 0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorMode {
    #[default]
    Default,
    Text,
    Pointer,
    Disabled,
}

impl CursorMode {
    pub fn class(self) -> &'static str {
        match self {
            CursorMode::Default => "cursor-default",
            CursorMode::Text => "cursor-text",
            CursorMode::Pointer => "cursor-pointer",
            CursorMode::Disabled => "cursor-disabled",
        }
    }

    /// Magnetic pull is only applied outside text entry and disabled targets.
    pub fn allows_magnet(self) -> bool {
        matches!(self, CursorMode::Default | CursorMode::Pointer)
    }
}

/// What the overlay needs to pick its class list. Only changes trigger a re-render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorLook {
    pub mode: CursorMode,
    pub hovering: bool,
    pub clicking: bool,
    pub visible: bool,
}

impl CursorLook {
    pub fn classes(&self) -> String {
        let mut out = String::from("cursor");
        if self.visible {
            out.push_str(" active");
        }
        if self.hovering {
            out.push_str(" cursor-hover");
        }
        if self.clicking {
            out.push_str(" cursor-clicking");
        }
        out.push(' ');
        out.push_str(self.mode.class());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_moves_fraction_of_gap() {
        let p = Position::new(0.0, 0.0).lerp(Position::new(100.0, -50.0), 0.1);
        assert!((p.x - 10.0).abs() < 1e-9);
        assert!((p.y + 5.0).abs() < 1e-9);
    }

    #[test]
    fn region_center_and_usability() {
        let r = Region { left: 10.0, top: 20.0, width: 40.0, height: 10.0 };
        assert_eq!(r.center(), Position::new(30.0, 25.0));
        assert!(r.is_usable());
        let hidden = Region { left: 0.0, top: 0.0, width: 0.0, height: 0.0 };
        assert!(!hidden.is_usable());
        let broken = Region { left: f64::NAN, top: 0.0, width: 5.0, height: 5.0 };
        assert!(!broken.is_usable());
    }

    #[test]
    fn look_classes_carry_mode_and_flags() {
        let look = CursorLook {
            mode: CursorMode::Pointer,
            hovering: true,
            clicking: false,
            visible: true,
        };
        assert_eq!(look.classes(), "cursor active cursor-hover cursor-pointer");
        assert_eq!(CursorLook::default().classes(), "cursor cursor-default");
    }
}
