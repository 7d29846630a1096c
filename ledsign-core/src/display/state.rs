//! Display state machine
//!
//! At most one refresh loop runs at a time. The state is a function of
//! the previous state and an event; misuse is reported instead of being
//! silently ignored.

use crate::error::SignError;

/// Kind of refresh loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Redraw a fixed framebuffer
    Static,
    /// Feed source columns in while shifting
    Scrolling,
}

/// Controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayState {
    /// No refresh loop; the device shows nothing new
    #[default]
    Idle,
    /// Static refresh loop running
    Static,
    /// Scrolling refresh loop running
    Scrolling,
}

/// Events driving the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Caller asked for a refresh loop
    Start(DisplayMode),
    /// Caller asked the loop to stop
    Stop,
    /// The loop exited on its own (device failure)
    TaskExited,
}

impl DisplayState {
    /// Check if a refresh loop is running
    pub fn is_active(&self) -> bool {
        !matches!(self, DisplayState::Idle)
    }

    /// Mode of the running loop, if any
    pub fn mode(&self) -> Option<DisplayMode> {
        match self {
            DisplayState::Idle => None,
            DisplayState::Static => Some(DisplayMode::Static),
            DisplayState::Scrolling => Some(DisplayMode::Scrolling),
        }
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Result<Self, SignError> {
        use DisplayState::*;

        match (self, event) {
            (Idle, Event::Start(DisplayMode::Static)) => Ok(Static),
            (Idle, Event::Start(DisplayMode::Scrolling)) => Ok(Scrolling),
            (Static | Scrolling, Event::Start(_)) => Err(SignError::AlreadyRunning),

            (Idle, Event::Stop) => Err(SignError::NotRunning),
            (Static | Scrolling, Event::Stop) => Ok(Idle),

            (_, Event::TaskExited) => Ok(Idle),
        }
    }
}

impl From<DisplayMode> for DisplayState {
    fn from(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Static => DisplayState::Static,
            DisplayMode::Scrolling => DisplayState::Scrolling,
        }
    }
}
