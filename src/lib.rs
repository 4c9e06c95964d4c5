//! Custom animated cursor for a single-page portfolio: smoothed pointer with a
//! fading trail, magnetic pull toward links and buttons, ripple and particle
//! bursts on click or tap.

pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod model;
pub mod state;
pub mod util;
