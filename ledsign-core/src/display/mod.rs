//! Display loop
//!
//! A sign only shows something while rows are being committed, so
//! displaying a message means running a refresh loop. This module owns
//! that loop: the state machine deciding when it may run, the loop
//! bodies, and the controller tying them to a device.

pub mod controller;
pub mod refresh;
pub mod state;

#[cfg(test)]
mod mock;

pub use controller::{CurrentMessage, SignController};
pub use state::{DisplayMode, DisplayState, Event};
