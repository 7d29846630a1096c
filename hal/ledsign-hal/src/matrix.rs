//! LED matrix device interface
//!
//! Signs of this family are driven one row at a time: the color of every
//! dot in a row is clocked into a shift register, then the row is latched
//! and its row driver enabled. Persistence of vision does the rest, so the
//! caller has to keep committing frames for the picture to stay up.

use core::fmt;

use crate::color::Color;

/// Errors reported by a matrix device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    /// Underlying I/O (GPIO, SPI, terminal) failed
    Io,
    /// Device used before `init`
    NotInitialized,
    /// Row index outside the panel
    InvalidRow,
    /// Device went away
    Disconnected,
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::Io => f.write_str("device I/O error"),
            DeviceError::NotInitialized => f.write_str("device not initialized"),
            DeviceError::InvalidRow => f.write_str("row index out of range"),
            DeviceError::Disconnected => f.write_str("device disconnected"),
        }
    }
}

/// Row-strobed LED matrix
///
/// Implementations handle the pin/bus level details of one physical (or
/// emulated) sign.
pub trait LedMatrix {
    /// Prepare the hardware (pin directions, initial levels)
    fn init(&mut self) -> Result<(), DeviceError>;

    /// Enable the row drivers
    fn display_on(&mut self) -> Result<(), DeviceError>;

    /// Disable the row drivers, blanking the panel without losing data
    fn display_off(&mut self) -> Result<(), DeviceError>;

    /// Zero the hardware buffer so that no LED is lit
    fn clear(&mut self) -> Result<(), DeviceError>;

    /// Clock the color of one dot into the column shift register
    fn shift_color(&mut self, color: Color) -> Result<(), DeviceError>;

    /// Latch the shifted column data onto `row` and show it
    ///
    /// Latching re-enables the row drivers, so a frame that started with
    /// [`display_off`](Self::display_off) lights up again here.
    fn commit_row(&mut self, row: usize) -> Result<(), DeviceError>;
}

impl<T: LedMatrix + ?Sized> LedMatrix for &mut T {
    fn init(&mut self) -> Result<(), DeviceError> {
        (**self).init()
    }

    fn display_on(&mut self) -> Result<(), DeviceError> {
        (**self).display_on()
    }

    fn display_off(&mut self) -> Result<(), DeviceError> {
        (**self).display_off()
    }

    fn clear(&mut self) -> Result<(), DeviceError> {
        (**self).clear()
    }

    fn shift_color(&mut self, color: Color) -> Result<(), DeviceError> {
        (**self).shift_color(color)
    }

    fn commit_row(&mut self, row: usize) -> Result<(), DeviceError> {
        (**self).commit_row(row)
    }
}
