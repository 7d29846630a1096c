//! Built-in proportional ASCII font, 8 rows
//!
//! Bodies are drawn on rows 0-6 and row 7 is left dark. Every glyph
//! carries one blank spacing column on its right.

/// Glyph width and one packed pattern per row
pub(super) type RawGlyph = (u8, [u8; HEIGHT]);

/// Font height in rows
pub(super) const HEIGHT: usize = 8;

/// Character code of the first table entry (space)
pub(super) const FIRST_CODE: usize = 0x20;

/// Build a glyph from a body `width - 1` dots wide
const fn g(width: u8, body: [u8; 7]) -> RawGlyph {
    (
        width,
        [
            body[0] << 1,
            body[1] << 1,
            body[2] << 1,
            body[3] << 1,
            body[4] << 1,
            body[5] << 1,
            body[6] << 1,
            0,
        ],
    )
}

/// Standard five-dot body
const fn w(body: [u8; 7]) -> RawGlyph {
    g(6, body)
}

#[rustfmt::skip]
pub(super) static GLYPHS: [RawGlyph; 95] = [
    g(4, [0b000, 0b000, 0b000, 0b000, 0b000, 0b000, 0b000]),           // ' '
    g(2, [0b1, 0b1, 0b1, 0b1, 0b1, 0b0, 0b1]),                         // !
    g(4, [0b101, 0b101, 0b101, 0b000, 0b000, 0b000, 0b000]),           // "
    w([0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010]), // #
    w([0b00100, 0b01111, 0b10100, 0b01110, 0b00101, 0b11110, 0b00100]), // $
    w([0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011]), // %
    w([0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101]), // &
    g(3, [0b11, 0b01, 0b10, 0b00, 0b00, 0b00, 0b00]),                  // '
    g(4, [0b001, 0b010, 0b100, 0b100, 0b100, 0b010, 0b001]),           // (
    g(4, [0b100, 0b010, 0b001, 0b001, 0b001, 0b010, 0b100]),           // )
    w([0b00000, 0b00100, 0b10101, 0b01110, 0b10101, 0b00100, 0b00000]), // *
    w([0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000]), // +
    g(3, [0b00, 0b00, 0b00, 0b00, 0b11, 0b01, 0b10]),                  // ,
    w([0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]), // -
    g(3, [0b00, 0b00, 0b00, 0b00, 0b00, 0b11, 0b11]),                  // .
    w([0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000]), // /
    w([0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]), // 0
    w([0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]), // 1
    w([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]), // 2
    w([0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]), // 3
    w([0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]), // 4
    w([0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]), // 5
    w([0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]), // 6
    w([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]), // 7
    w([0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]), // 8
    w([0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]), // 9
    g(3, [0b00, 0b11, 0b11, 0b00, 0b11, 0b11, 0b00]),                  // :
    g(3, [0b00, 0b11, 0b11, 0b00, 0b11, 0b01, 0b10]),                  // ;
    w([0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010]), // <
    w([0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000]), // =
    w([0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000]), // >
    w([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100]), // ?
    w([0b01110, 0b10001, 0b00001, 0b01101, 0b10101, 0b10101, 0b01110]), // @
    w([0b01110, 0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001]), // A
    w([0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]), // B
    w([0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]), // C
    w([0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100]), // D
    w([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]), // E
    w([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]), // F
    w([0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]), // G
    w([0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]), // H
    g(4, [0b111, 0b010, 0b010, 0b010, 0b010, 0b010, 0b111]),           // I
    w([0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]), // J
    w([0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]), // K
    w([0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]), // L
    w([0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]), // M
    w([0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001]), // N
    w([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]), // O
    w([0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]), // P
    w([0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]), // Q
    w([0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]), // R
    w([0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]), // S
    w([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]), // T
    w([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]), // U
    w([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]), // V
    w([0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010]), // W
    w([0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]), // X
    w([0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100]), // Y
    w([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]), // Z
    g(4, [0b111, 0b100, 0b100, 0b100, 0b100, 0b100, 0b111]),           // [
    w([0b00000, 0b10000, 0b01000, 0b00100, 0b00010, 0b00001, 0b00000]), // \
    g(4, [0b111, 0b001, 0b001, 0b001, 0b001, 0b001, 0b111]),           // ]
    w([0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000]), // ^
    w([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111]), // _
    g(4, [0b100, 0b010, 0b001, 0b000, 0b000, 0b000, 0b000]),           // `
    w([0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111]), // a
    w([0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110]), // b
    w([0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110]), // c
    w([0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111]), // d
    w([0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110]), // e
    w([0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000]), // f
    w([0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]), // g
    w([0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001]), // h
    g(4, [0b010, 0b000, 0b110, 0b010, 0b010, 0b010, 0b111]),           // i
    w([0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100]), // j
    w([0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010]), // k
    g(4, [0b110, 0b010, 0b010, 0b010, 0b010, 0b010, 0b111]),           // l
    w([0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001]), // m
    w([0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001]), // n
    w([0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110]), // o
    w([0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000]), // p
    w([0b00000, 0b00000, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001]), // q
    w([0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000]), // r
    w([0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110]), // s
    w([0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110]), // t
    w([0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101]), // u
    w([0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]), // v
    w([0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010]), // w
    w([0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001]), // x
    w([0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]), // y
    w([0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111]), // z
    g(4, [0b001, 0b010, 0b010, 0b100, 0b010, 0b010, 0b001]),           // {
    g(2, [0b1, 0b1, 0b1, 0b1, 0b1, 0b1, 0b1]),                         // |
    g(4, [0b100, 0b010, 0b010, 0b001, 0b010, 0b010, 0b100]),           // }
    w([0b00000, 0b00000, 0b00000, 0b01101, 0b10010, 0b00000, 0b00000]), // ~
];
