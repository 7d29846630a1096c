//! Sign service
//!
//! Wraps the controller with the request-level behavior of the control
//! surface: running loops are stopped before an update, text is reduced
//! to ASCII, and static text that does not fit scrolls instead.

use std::fmt;

use ledsign_core::{
    Color, CurrentMessage, DisplayMode, DisplayState, LedMatrix, SignConfig, SignController,
    SignError,
};
use log::{info, warn};

use crate::commands::{Command, HELP};

/// Drop everything the ASCII font cannot show
pub fn sanitize(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

/// State and message, as reported by `status`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub state: DisplayState,
    pub message: Option<CurrentMessage>,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            DisplayState::Idle => "idle",
            DisplayState::Static => "static",
            DisplayState::Scrolling => "scrolling",
        };
        match &self.message {
            Some(message) => write!(f, "{}: {} {:?}", state, message.color, message.text),
            None => f.write_str(state),
        }
    }
}

/// Owns the controller for the lifetime of the daemon
pub struct SignService<D>
where
    D: LedMatrix + Send + 'static,
{
    controller: SignController<D>,
}

impl<D> SignService<D>
where
    D: LedMatrix + Send + 'static,
{
    pub fn new(device: D, config: SignConfig) -> Result<Self, SignError> {
        Ok(Self {
            controller: SignController::new(device, config)?,
        })
    }

    /// Put `text` on the sign
    ///
    /// Returns the state the sign ends up in. Static text wider than the
    /// display is scrolled instead.
    pub fn update(
        &mut self,
        mode: DisplayMode,
        text: &str,
        color: Color,
    ) -> Result<DisplayState, SignError> {
        self.stop_if_running()?;

        let text = sanitize(text);
        let mode = match mode {
            DisplayMode::Static => match self.controller.put_static(&text, color) {
                Ok(()) => DisplayMode::Static,
                Err(SignError::ContentTooWide { width, max }) => {
                    warn!("{} columns do not fit in {}, scrolling instead", width, max);
                    self.controller.put_scrolling(&text, color)?;
                    DisplayMode::Scrolling
                }
                Err(e) => return Err(e),
            },
            DisplayMode::Scrolling => {
                self.controller.put_scrolling(&text, color)?;
                DisplayMode::Scrolling
            }
        };

        self.controller.start(mode)?;
        Ok(self.controller.state())
    }

    /// Stop any loop and blank the sign
    pub fn clear(&mut self) -> Result<(), SignError> {
        if self.controller.poll()?.is_active() {
            self.controller.stop()
        } else {
            self.controller.clear_hardware()
        }
    }

    pub fn status(&mut self) -> Result<Status, SignError> {
        let state = self.controller.poll()?;
        Ok(Status {
            state,
            message: self.controller.message().cloned(),
        })
    }

    /// Report a refresh loop that died since the last call
    pub fn poll(&mut self) -> Result<DisplayState, SignError> {
        self.controller.poll()
    }

    /// Run one command and return the reply text
    pub fn execute(&mut self, command: Command) -> Result<String, SignError> {
        match command {
            Command::Show { mode, color, text } => {
                let color = color.unwrap_or(self.controller.config().default_color);
                let state = self.update(mode, &text, color)?;
                Ok(format!("ok, {}", self.describe(state)))
            }
            Command::Clear => {
                self.clear()?;
                Ok("cleared".into())
            }
            Command::Status => Ok(self.status()?.to_string()),
            Command::Help => Ok(HELP.into()),
            Command::Quit => {
                self.stop_if_running()?;
                Ok("bye".into())
            }
        }
    }

    /// Stop the loop and hand back the device
    pub fn shutdown(self) -> Result<D, SignError> {
        info!("shutting down");
        self.controller.release()
    }

    fn describe(&self, state: DisplayState) -> String {
        Status {
            state,
            message: self.controller.message().cloned(),
        }
        .to_string()
    }

    fn stop_if_running(&mut self) -> Result<(), SignError> {
        if self.controller.poll()?.is_active() {
            self.controller.stop()?;
        }
        Ok(())
    }
}
