//! Text rasterizer
//!
//! Turns a string and a color into a [`DotArray`]: one row of colors per
//! font row, glyphs laid side by side in text order.

use core::fmt;

use ledsign_hal::Color;

use crate::font::{FontTable, Glyph};

/// Rasterization errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RasterError {
    /// The font has no glyph for this character
    UnsupportedCharacter(char),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::UnsupportedCharacter(ch) => {
                write!(f, "no glyph for character {:?} (U+{:04X})", ch, *ch as u32)
            }
        }
    }
}

impl std::error::Error for RasterError {}

/// Rendered text: `height` rows of equal width
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DotArray {
    width: usize,
    height: usize,
    /// Row-major cells
    cells: Vec<Color>,
}

impl DotArray {
    /// Create an all-blank dot array
    pub fn blank(height: usize, width: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Color::Blank; width * height],
        }
    }

    /// Build from explicit rows
    ///
    /// Returns `None` if the rows differ in length.
    pub fn from_rows<R: AsRef<[Color]>>(rows: &[R]) -> Option<Self> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != width) {
            return None;
        }

        Some(Self {
            width,
            height: rows.len(),
            cells: rows.iter().flat_map(|row| row.as_ref().iter().copied()).collect(),
        })
    }

    /// Width in columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if there are no columns
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// Read one cell
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// One row, left to right
    pub fn row(&self, row: usize) -> Option<&[Color]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// All rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        (0..self.height).filter_map(move |row| self.row(row))
    }

    /// One column, top to bottom
    pub fn column(&self, col: usize) -> Option<impl ExactSizeIterator<Item = Color> + '_> {
        if col >= self.width {
            return None;
        }
        Some((0..self.height).map(move |row| self.cells[row * self.width + col]))
    }

    /// Number of lit cells
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|color| color.is_lit()).count()
    }

    /// Append `columns` blank columns to every row
    pub fn pad_right(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }

        let new_width = self.width + columns;
        let mut cells = Vec::with_capacity(new_width * self.height);
        for row in 0..self.height {
            let start = row * self.width;
            cells.extend_from_slice(&self.cells[start..start + self.width]);
            cells.extend(core::iter::repeat(Color::Blank).take(columns));
        }

        self.width = new_width;
        self.cells = cells;
    }
}

/// Rasterize `text` in `color` using `font`
///
/// Fails on the first character the font cannot render; nothing is
/// silently dropped, so the output width always equals the sum of the
/// glyph widths of `text`.
pub fn rasterize(font: &FontTable, text: &str, color: Color) -> Result<DotArray, RasterError> {
    let glyphs = text
        .chars()
        .map(|ch| font.glyph(ch).ok_or(RasterError::UnsupportedCharacter(ch)))
        .collect::<Result<Vec<&Glyph>, _>>()?;

    let height = font.height();
    let width: usize = glyphs.iter().map(|glyph| glyph.width()).sum();

    let mut cells = Vec::with_capacity(width * height);
    for row in 0..height {
        for glyph in &glyphs {
            cells.extend(
                glyph
                    .row_dots(row)
                    .map(|on| if on { color } else { Color::Blank }),
            );
        }
    }

    Ok(DotArray {
        width,
        height,
        cells,
    })
}
