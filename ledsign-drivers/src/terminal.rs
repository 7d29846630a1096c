//! Terminal matrix
//!
//! Emulates a row-strobed sign on any `io::Write`. Shifted colors go
//! through a column register exactly `width` dots long; committing a row
//! copies the register onto that row. Once every row has been committed
//! the panel is drawn as text, one character per dot:
//!
//! ```text
//! ..R.RRR...
//! ..RRRR....
//! ..R.RRR...
//! ```
//!
//! A frame identical to the last one drawn is not written again, so a
//! static refresh loop prints its picture once.

use std::collections::VecDeque;
use std::io::Write;

use ledsign_hal::{Color, DeviceError, LedMatrix};
use log::{trace, warn};

/// Character drawn for one dot
pub fn dot_char(color: Color) -> char {
    match color {
        Color::Blank => '.',
        Color::Red => 'R',
        Color::Green => 'G',
        Color::Orange => 'O',
    }
}

/// Software sign writing frames to `W`
pub struct TerminalMatrix<W> {
    out: W,
    width: usize,
    height: usize,
    initialized: bool,
    /// Row drivers enabled
    lit: bool,
    /// Column shift register, first shifted dot at the front
    register: VecDeque<Color>,
    /// Latched panel contents
    panel: Vec<Vec<Color>>,
    /// Rows committed since the last drawn frame
    pending: Vec<bool>,
    last_frame: Option<String>,
    frames_written: usize,
}

impl<W: Write> TerminalMatrix<W> {
    /// Create a `width` × `height` terminal sign
    pub fn new(out: W, width: usize, height: usize) -> Self {
        Self {
            out,
            width,
            height,
            initialized: false,
            lit: false,
            register: VecDeque::from(vec![Color::Blank; width]),
            panel: vec![vec![Color::Blank; width]; height],
            pending: vec![false; height],
            last_frame: None,
            frames_written: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of frames actually written
    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Latched contents of `row`
    pub fn row(&self, row: usize) -> Option<&[Color]> {
        self.panel.get(row).map(Vec::as_slice)
    }

    /// Get the writer back
    pub fn into_inner(self) -> W {
        self.out
    }

    fn ensure_init(&self) -> Result<(), DeviceError> {
        if self.initialized {
            Ok(())
        } else {
            Err(DeviceError::NotInitialized)
        }
    }

    fn render(&self) -> String {
        let mut frame = String::with_capacity((self.width + 1) * self.height + 1);
        for row in &self.panel {
            for &color in row {
                frame.push(if self.lit { dot_char(color) } else { '.' });
            }
            frame.push('\n');
        }
        frame.push('\n');
        frame
    }

    /// Draw the panel if it changed since the last frame
    fn present(&mut self) -> Result<(), DeviceError> {
        self.pending.fill(false);

        let frame = self.render();
        if self.last_frame.as_deref() == Some(frame.as_str()) {
            return Ok(());
        }

        self.out
            .write_all(frame.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| {
                warn!("terminal write failed: {}", e);
                DeviceError::Io
            })?;

        self.frames_written += 1;
        trace!("frame {} written", self.frames_written);
        self.last_frame = Some(frame);
        Ok(())
    }
}

impl<W: Write> LedMatrix for TerminalMatrix<W> {
    fn init(&mut self) -> Result<(), DeviceError> {
        self.initialized = true;
        self.lit = false;
        self.register.iter_mut().for_each(|dot| *dot = Color::Blank);
        self.panel.iter_mut().for_each(|row| row.fill(Color::Blank));
        self.pending.fill(false);
        Ok(())
    }

    fn display_on(&mut self) -> Result<(), DeviceError> {
        self.ensure_init()?;
        self.lit = true;
        Ok(())
    }

    fn display_off(&mut self) -> Result<(), DeviceError> {
        self.ensure_init()?;
        self.lit = false;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DeviceError> {
        self.ensure_init()?;
        self.register.iter_mut().for_each(|dot| *dot = Color::Blank);
        self.panel.iter_mut().for_each(|row| row.fill(Color::Blank));
        self.present()
    }

    fn shift_color(&mut self, color: Color) -> Result<(), DeviceError> {
        self.ensure_init()?;
        if self.width == 0 {
            return Ok(());
        }
        self.register.pop_front();
        self.register.push_back(color);
        Ok(())
    }

    fn commit_row(&mut self, row: usize) -> Result<(), DeviceError> {
        self.ensure_init()?;
        let Some(latched) = self.panel.get_mut(row) else {
            return Err(DeviceError::InvalidRow);
        };

        for (dot, &color) in latched.iter_mut().zip(&self.register) {
            *dot = color;
        }
        self.lit = true;
        self.pending[row] = true;

        if self.pending.iter().all(|&done| done) {
            self.present()?;
        }
        Ok(())
    }
}
