//! Board-agnostic core logic for LED dot-matrix signs
//!
//! This crate contains everything between "a string and a color" and
//! "rows committed to a device":
//!
//! - Font table and built-in ASCII font
//! - Rasterizer producing per-row color matrices
//! - Fixed-size framebuffer with centering and column shifting
//! - Display state machine and the refresh-loop controller
//! - Configuration type definitions

#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod raster;

pub use config::SignConfig;
pub use display::{CurrentMessage, DisplayMode, DisplayState, SignController};
pub use error::SignError;
pub use font::{FontError, FontTable, Glyph};
pub use framebuffer::{FrameBuffer, FrameError};
pub use raster::{rasterize, DotArray, RasterError};

pub use ledsign_hal::{Color, DeviceError, LedMatrix};
