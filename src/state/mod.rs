pub mod controller;
pub mod effects;
pub mod magnet;
pub mod mode;
pub mod motion;
pub mod throttle;
pub mod touch;

pub use controller::PointerController;
pub use effects::{Effect, EffectId, EffectKind, Spawned};
pub use mode::{ElementInfo, INTERACTIVE_SELECTOR};
