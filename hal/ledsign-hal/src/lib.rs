//! LED sign Hardware Abstraction Layer
//!
//! This crate defines the interface between the display-loop logic and
//! whatever physically drives the sign. A driver may strobe GPIO lines on
//! a Raspberry Pi, talk to a shift-register board over SPI, or just print
//! frames to a terminal.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (ledsign-daemon)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ledsign-core (raster, frame, loop)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ledsign-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  terminal     │       │  hardware     │
//! │  (drivers)    │       │  strobing     │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`matrix::LedMatrix`] - Row-at-a-time commit of color data

#![no_std]
#![deny(unsafe_code)]

pub mod color;
pub mod matrix;

// Re-export key types at crate root for convenience
pub use color::{Color, ParseColorError};
pub use matrix::{DeviceError, LedMatrix};
