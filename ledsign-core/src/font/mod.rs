//! Bitmap font table
//!
//! A glyph is a stack of row bit patterns, most significant bit leftmost,
//! one pattern per display row. Widths vary per glyph and include the
//! spacing column, so rendered glyphs are simply placed side by side.

mod ascii;

use core::fmt;

use heapless::Vec;

/// Maximum glyph height (rows)
pub const MAX_GLYPH_ROWS: usize = 16;

/// Maximum glyph width (dots), bounded by the `u16` row pattern
pub const MAX_GLYPH_WIDTH: u8 = 16;

/// Number of character codes a table can hold (7-bit ASCII)
pub const TABLE_SIZE: usize = 128;

/// Errors raised while building glyphs or font tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// Glyph or font taller than `MAX_GLYPH_ROWS`
    TooManyRows,
    /// Font height of zero
    InvalidHeight,
    /// Glyph wider than `MAX_GLYPH_WIDTH`
    WidthTooLarge,
    /// A row pattern has bits set beyond the glyph width
    PatternTooWide,
    /// Glyph row count differs from the font height
    HeightMismatch { expected: usize, actual: usize },
    /// Character outside 7-bit ASCII
    NotAscii(char),
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::TooManyRows => write!(f, "glyph exceeds {} rows", MAX_GLYPH_ROWS),
            FontError::InvalidHeight => f.write_str("font height must be at least one row"),
            FontError::WidthTooLarge => write!(f, "glyph exceeds {} dots", MAX_GLYPH_WIDTH),
            FontError::PatternTooWide => f.write_str("row pattern wider than glyph"),
            FontError::HeightMismatch { expected, actual } => {
                write!(f, "glyph has {} rows, font has {}", actual, expected)
            }
            FontError::NotAscii(ch) => write!(f, "character {:?} is not ASCII", ch),
        }
    }
}

impl std::error::Error for FontError {}

/// One character bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    width: u8,
    rows: Vec<u16, MAX_GLYPH_ROWS>,
}

impl Glyph {
    /// Create a glyph from packed row patterns
    ///
    /// Bit `width - 1` of each pattern is the leftmost dot.
    pub fn new(width: u8, rows: &[u16]) -> Result<Self, FontError> {
        if width > MAX_GLYPH_WIDTH {
            return Err(FontError::WidthTooLarge);
        }
        if width < MAX_GLYPH_WIDTH && rows.iter().any(|&row| row >> width != 0) {
            return Err(FontError::PatternTooWide);
        }

        let rows = Vec::from_slice(rows).map_err(|_| FontError::TooManyRows)?;
        Ok(Self { width, rows })
    }

    /// Width in dots
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Packed row patterns
    pub fn rows(&self) -> &[u16] {
        &self.rows
    }

    /// Whether the dot at (`row`, `col`) is set
    ///
    /// Out-of-range coordinates read as unset.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        match self.rows.get(row) {
            Some(&bits) if col < self.width() => (bits >> (self.width() - 1 - col)) & 1 == 1,
            _ => false,
        }
    }

    /// Expand one row into dots, leftmost first
    pub fn row_dots(&self, row: usize) -> impl Iterator<Item = bool> + '_ {
        (0..self.width()).map(move |col| self.is_set(row, col))
    }
}

/// Character code to glyph lookup with a fixed height
#[derive(Debug, Clone)]
pub struct FontTable {
    height: usize,
    glyphs: [Option<Glyph>; TABLE_SIZE],
}

impl FontTable {
    /// Create an empty table for glyphs of `height` rows
    pub fn new(height: usize) -> Result<Self, FontError> {
        if height == 0 {
            return Err(FontError::InvalidHeight);
        }
        if height > MAX_GLYPH_ROWS {
            return Err(FontError::TooManyRows);
        }

        Ok(Self {
            height,
            glyphs: core::array::from_fn(|_| None),
        })
    }

    /// Built-in 8-row proportional font covering printable ASCII
    pub fn ascii() -> Self {
        let mut glyphs: [Option<Glyph>; TABLE_SIZE] = core::array::from_fn(|_| None);

        for (offset, (width, rows)) in ascii::GLYPHS.iter().enumerate() {
            glyphs[ascii::FIRST_CODE + offset] = Some(Glyph {
                width: *width,
                rows: rows.iter().map(|&row| u16::from(row)).collect(),
            });
        }

        Self {
            height: ascii::HEIGHT,
            glyphs,
        }
    }

    /// Add or replace the glyph for `ch`, returning the previous one
    pub fn insert(&mut self, ch: char, glyph: Glyph) -> Result<Option<Glyph>, FontError> {
        if !ch.is_ascii() {
            return Err(FontError::NotAscii(ch));
        }
        if glyph.height() != self.height {
            return Err(FontError::HeightMismatch {
                expected: self.height,
                actual: glyph.height(),
            });
        }

        Ok(self.glyphs[ch as usize].replace(glyph))
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with_glyph(mut self, ch: char, glyph: Glyph) -> Result<Self, FontError> {
        self.insert(ch, glyph)?;
        Ok(self)
    }

    /// Glyph height in rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Look up the glyph for a character
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        if ch.is_ascii() {
            self.glyphs[ch as usize].as_ref()
        } else {
            None
        }
    }

    /// Check if a character can be rendered
    pub fn contains(&self, ch: char) -> bool {
        self.glyph(ch).is_some()
    }

    /// Number of defined glyphs
    pub fn len(&self) -> usize {
        self.glyphs.iter().flatten().count()
    }

    /// Check if the table has no glyphs
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width of the space glyph, if the font has one
    pub fn space_width(&self) -> Option<usize> {
        self.glyph(' ').map(Glyph::width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_msb_is_leftmost() {
        let glyph = Glyph::new(3, &[0b100, 0b001]).unwrap();

        assert!(glyph.is_set(0, 0));
        assert!(!glyph.is_set(0, 2));
        assert!(glyph.is_set(1, 2));
        assert!(!glyph.is_set(1, 0));
        assert!(!glyph.is_set(5, 0));
        assert!(!glyph.is_set(0, 3));
    }

    #[test]
    fn test_glyph_rejects_wide_pattern() {
        assert_eq!(Glyph::new(2, &[0b100]), Err(FontError::PatternTooWide));
        assert_eq!(Glyph::new(17, &[0]), Err(FontError::WidthTooLarge));
        assert_eq!(
            Glyph::new(1, &[0; MAX_GLYPH_ROWS + 1]),
            Err(FontError::TooManyRows)
        );
        assert!(Glyph::new(16, &[0xFFFF]).is_ok());
    }

    #[test]
    fn test_table_enforces_height() {
        let mut font = FontTable::new(3).unwrap();
        let short = Glyph::new(1, &[1, 1]).unwrap();

        assert_eq!(
            font.insert('x', short),
            Err(FontError::HeightMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert!(font.is_empty());
    }

    #[test]
    fn test_table_rejects_non_ascii() {
        let mut font = FontTable::new(1).unwrap();
        let glyph = Glyph::new(1, &[1]).unwrap();

        assert_eq!(font.insert('é', glyph), Err(FontError::NotAscii('é')));
        assert!(font.glyph('é').is_none());
    }

    #[test]
    fn test_builtin_font_covers_printable_ascii() {
        let font = FontTable::ascii();

        assert_eq!(font.height(), 8);
        assert_eq!(font.len(), 95);
        for code in 0x20u8..=0x7E {
            assert!(font.contains(code as char), "missing {:?}", code as char);
        }
        assert!(!font.contains('\n'));
        assert!(!font.contains('\u{7F}'));
    }

    #[test]
    fn test_builtin_glyphs_are_valid() {
        let font = FontTable::ascii();

        for code in 0x20u8..=0x7E {
            let glyph = font.glyph(code as char).unwrap();
            assert_eq!(
                Glyph::new(glyph.width() as u8, glyph.rows()).as_ref(),
                Ok(glyph)
            );
            // Trailing spacing column is always dark
            for row in 0..glyph.height() {
                assert!(!glyph.is_set(row, glyph.width() - 1));
            }
        }
    }

    #[test]
    fn test_builtin_letter_shape() {
        let font = FontTable::ascii();
        let a = font.glyph('A').unwrap();

        assert_eq!(a.width(), 6);
        let top: std::vec::Vec<bool> = a.row_dots(0).collect();
        assert_eq!(top, [false, true, true, true, false, false]);
        assert_eq!(font.space_width(), Some(4));
    }
}
