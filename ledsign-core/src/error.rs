//! Controller error type

use core::fmt;

use ledsign_hal::DeviceError;

use crate::config::ConfigError;
use crate::framebuffer::FrameError;
use crate::raster::RasterError;

/// Errors returned by [`SignController`](crate::SignController)
///
/// Everything except `Device` and `ThreadSpawn` is a caller error that
/// leaves the controller usable. `Device` means the refresh loop died;
/// the controller is back in `Idle` when it is reported. `ThreadSpawn`
/// leaves the controller idle with its device and framebuffer intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignError {
    /// The font has no glyph for this character
    UnsupportedCharacter(char),
    /// Static content does not fit; scroll it instead
    ContentTooWide { width: usize, max: usize },
    /// A display loop is already running
    AlreadyRunning,
    /// No display loop is running
    NotRunning,
    /// The refresh loop did not exit within the configured timeout
    StopTimeout,
    /// The OS refused to start the refresh thread
    ThreadSpawn,
    /// Framebuffer misuse (height or column mismatch)
    Frame(FrameError),
    /// Device interface failure
    Device(DeviceError),
    /// Invalid configuration
    Config(ConfigError),
}

impl SignError {
    /// Check if the caller can fix this by changing the request
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, SignError::Device(_) | SignError::ThreadSpawn)
    }
}

impl fmt::Display for SignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignError::UnsupportedCharacter(ch) => {
                write!(f, "no glyph for character {:?}", ch)
            }
            SignError::ContentTooWide { width, max } => {
                write!(f, "message is {} columns wide, display has {}", width, max)
            }
            SignError::AlreadyRunning => f.write_str("a display loop is already running"),
            SignError::NotRunning => f.write_str("no display loop is running"),
            SignError::StopTimeout => f.write_str("display loop did not stop in time"),
            SignError::ThreadSpawn => f.write_str("cannot start the refresh thread"),
            SignError::Frame(e) => write!(f, "framebuffer: {}", e),
            SignError::Device(e) => write!(f, "device: {}", e),
            SignError::Config(e) => write!(f, "config: {}", e),
        }
    }
}

impl std::error::Error for SignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SignError::Frame(e) => Some(e),
            SignError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RasterError> for SignError {
    fn from(e: RasterError) -> Self {
        match e {
            RasterError::UnsupportedCharacter(ch) => SignError::UnsupportedCharacter(ch),
        }
    }
}

impl From<FrameError> for SignError {
    fn from(e: FrameError) -> Self {
        match e {
            FrameError::ContentTooWide { width, max } => SignError::ContentTooWide { width, max },
            other => SignError::Frame(other),
        }
    }
}

impl From<DeviceError> for SignError {
    fn from(e: DeviceError) -> Self {
        SignError::Device(e)
    }
}

impl From<ConfigError> for SignError {
    fn from(e: ConfigError) -> Self {
        SignError::Config(e)
    }
}
