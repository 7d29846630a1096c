//! Sign configuration
//!
//! Board-agnostic settings for one sign. Loaded from TOML by the daemon
//! when the `serde` feature is enabled; every field has a default so a
//! partial file is enough.

use core::fmt;
use core::time::Duration;

use ledsign_hal::Color;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default display width (columns)
pub const DEFAULT_WIDTH: usize = 80;

/// Default display height (rows)
pub const DEFAULT_HEIGHT: usize = 8;

/// Default number of blank character widths appended to scroll sources
pub const DEFAULT_SCROLL_PADDING_CHARS: u8 = 3;

/// Sign configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SignConfig {
    /// Display width in columns
    pub width: usize,
    /// Display height in rows (must match the font)
    pub height: usize,
    /// Pause between refresh frames (µs), 0 = free-running
    pub frame_interval_us: u32,
    /// Frames committed per scroll step; higher scrolls slower
    pub scroll_frames_per_step: u16,
    /// Blank character widths appended to scrolling text
    pub scroll_padding_chars: u8,
    /// Give up waiting for the refresh loop after this long (ms)
    ///
    /// `None` blocks until the loop exits.
    pub stop_timeout_ms: Option<u32>,
    /// Color used when a request does not name one
    pub default_color: Color,
}

impl Default for SignConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frame_interval_us: 0,
            scroll_frames_per_step: 1,
            scroll_padding_chars: DEFAULT_SCROLL_PADDING_CHARS,
            stop_timeout_ms: None,
            default_color: Color::Red,
        }
    }
}

/// Configuration validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Width or height is zero
    ZeroDimension,
    /// `scroll_frames_per_step` is zero
    ZeroFramesPerStep,
    /// Display height differs from the font height
    FontHeight { display: usize, font: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDimension => f.write_str("display width and height must be non-zero"),
            ConfigError::ZeroFramesPerStep => {
                f.write_str("scroll_frames_per_step must be at least 1")
            }
            ConfigError::FontHeight { display, font } => write!(
                f,
                "display height {} does not match font height {}",
                display, font
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl SignConfig {
    /// Config for a `width` × `height` display, other fields default
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Check values that would break the display loop
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if self.scroll_frames_per_step == 0 {
            return Err(ConfigError::ZeroFramesPerStep);
        }
        Ok(())
    }

    /// Pause between frames
    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(u64::from(self.frame_interval_us))
    }

    /// Bound on `stop`, if any
    pub fn stop_timeout(&self) -> Option<Duration> {
        self.stop_timeout_ms
            .map(|ms| Duration::from_millis(u64::from(ms)))
    }
}
