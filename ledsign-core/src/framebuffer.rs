//! In-memory framebuffer
//!
//! Mirrors what should be on the sign: `height` rows of `width` colors.
//! The dimensions are fixed when the buffer is created.

use core::fmt;

use ledsign_hal::Color;

use crate::raster::DotArray;

/// Framebuffer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Content wider than the display
    ContentTooWide { width: usize, max: usize },
    /// Content height differs from the display height
    HeightMismatch { expected: usize, actual: usize },
    /// Column index outside the display
    ColumnOutOfRange(usize),
    /// Column data length differs from the display height
    ColumnLength { expected: usize, actual: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::ContentTooWide { width, max } => {
                write!(f, "content is {} columns wide, display has {}", width, max)
            }
            FrameError::HeightMismatch { expected, actual } => {
                write!(f, "content is {} rows high, display has {}", actual, expected)
            }
            FrameError::ColumnOutOfRange(col) => write!(f, "column {} out of range", col),
            FrameError::ColumnLength { expected, actual } => {
                write!(f, "column has {} values, display has {} rows", actual, expected)
            }
        }
    }
}

impl std::error::Error for FrameError {}

/// Color framebuffer, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<Color>,
}

impl FrameBuffer {
    /// Creates a new blank framebuffer
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Color::Blank; width * height],
        }
    }

    /// Display width in columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Display height in rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sets every cell to blank
    pub fn clear(&mut self) {
        self.cells.fill(Color::Blank);
    }

    /// Check if no cell is lit
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|color| !color.is_lit())
    }

    /// Reads a pixel
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[y * self.width + x])
    }

    /// Sets a pixel
    ///
    /// Returns `true` when pixel is in bounds, `false` otherwise.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y * self.width + x] = color;
        true
    }

    /// Returns one row, left to right
    pub fn row(&self, y: usize) -> Option<&[Color]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Color]> + DoubleEndedIterator + '_ {
        (0..self.height).map(move |y| {
            let start = y * self.width;
            &self.cells[start..start + self.width]
        })
    }

    /// Center `dots` horizontally
    ///
    /// Columns left of the content are blanked, columns right of it are
    /// left as they were. Returns the left offset. On error the buffer is
    /// not touched.
    pub fn place_centered(&mut self, dots: &DotArray) -> Result<usize, FrameError> {
        if dots.width() > self.width {
            return Err(FrameError::ContentTooWide {
                width: dots.width(),
                max: self.width,
            });
        }
        if dots.height() != self.height {
            return Err(FrameError::HeightMismatch {
                expected: self.height,
                actual: dots.height(),
            });
        }

        let offset = (self.width - dots.width()) / 2;
        for (y, source) in dots.rows().enumerate() {
            let start = y * self.width;
            let row = &mut self.cells[start..start + self.width];
            row[..offset].fill(Color::Blank);
            row[offset..offset + source.len()].copy_from_slice(source);
        }

        Ok(offset)
    }

    /// Shift every row one column away from column 0
    ///
    /// The last column falls off. Column 0 is blanked rather than left
    /// holding its old value, so `width` shifts always leave an empty
    /// buffer; the caller refills column 0 before the next frame. The
    /// scrolling refresh commits columns high-to-low, so on the panel
    /// this moves content one dot to the left.
    pub fn shift_left(&mut self) {
        let width = self.width;
        if width == 0 {
            return;
        }

        for row in self.cells.chunks_exact_mut(width) {
            row.copy_within(..width - 1, 1);
            row[0] = Color::Blank;
        }
    }

    /// Overwrite column `col` with `values`, top to bottom
    pub fn set_column<I>(&mut self, col: usize, values: I) -> Result<(), FrameError>
    where
        I: IntoIterator<Item = Color>,
        I::IntoIter: ExactSizeIterator,
    {
        if col >= self.width {
            return Err(FrameError::ColumnOutOfRange(col));
        }

        let values = values.into_iter();
        if values.len() != self.height {
            return Err(FrameError::ColumnLength {
                expected: self.height,
                actual: values.len(),
            });
        }

        for (y, color) in values.enumerate() {
            self.cells[y * self.width + col] = color;
        }
        Ok(())
    }

    /// One column, top to bottom
    pub fn column(&self, col: usize) -> Option<impl ExactSizeIterator<Item = Color> + '_> {
        if col >= self.width {
            return None;
        }
        Some((0..self.height).map(move |y| self.cells[y * self.width + col]))
    }
}
