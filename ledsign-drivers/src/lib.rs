//! Matrix device implementations
//!
//! This crate provides concrete implementations of the `LedMatrix` trait
//! defined in ledsign-hal:
//!
//! - Terminal matrix (renders frames as text on any `io::Write`)

#![deny(unsafe_code)]

pub mod terminal;

pub use terminal::TerminalMatrix;
