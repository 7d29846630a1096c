//! Configuration loading
//!
//! Reads `sign.toml` from disk, falling back to the copy compiled into
//! the binary when the file does not exist.

pub mod loader;

use ledsign_core::SignConfig;
use log::info;
use serde::Deserialize;

pub use loader::{load, DEFAULT_CONFIG_PATH};

/// Frame pause for the terminal sign when the file asks for none (µs)
///
/// With one frame per step this scrolls 25 columns a second.
pub const TERMINAL_FRAME_INTERVAL_US: u32 = 40_000;

/// Daemon configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DaemonConfig {
    /// `[sign]` section
    pub sign: SignConfig,
}

impl DaemonConfig {
    /// Replace a free-running frame interval with terminal pacing
    ///
    /// Every changed frame is written to stdout, so an unpaced scroll
    /// floods the same stream the command replies go to.
    pub fn paced_for_terminal(mut self) -> Self {
        if self.sign.frame_interval_us == 0 {
            info!(
                "frame_interval_us is 0, pacing the terminal sign at {} us",
                TERMINAL_FRAME_INTERVAL_US
            );
            self.sign.frame_interval_us = TERMINAL_FRAME_INTERVAL_US;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_running_gets_terminal_pacing() {
        let config = DaemonConfig::default().paced_for_terminal();
        assert_eq!(config.sign.frame_interval_us, TERMINAL_FRAME_INTERVAL_US);
        assert_eq!(config.sign.width, SignConfig::default().width);
    }

    #[test]
    fn test_explicit_interval_kept() {
        let mut config = DaemonConfig::default();
        config.sign.frame_interval_us = 2_500;

        assert_eq!(config.paced_for_terminal().sign.frame_interval_us, 2_500);
    }
}
