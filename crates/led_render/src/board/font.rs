use std::collections::HashMap;

use once_cell::sync::Lazy;

pub const GLYPH_ROWS: usize = 7;
pub const GLYPH_COLS: usize = 5;

/// One 5x7 dot-matrix character bitmap. Row bits are stored MSB-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: [u8; GLYPH_ROWS],
}

impl Glyph {
    pub const BLANK: Glyph = Glyph { rows: [0; GLYPH_ROWS] };

    fn from_pattern(pattern: &[&str; GLYPH_ROWS]) -> Self {
        let mut rows = [0u8; GLYPH_ROWS];
        for (row, bits) in pattern.iter().enumerate() {
            assert_eq!(bits.len(), GLYPH_COLS, "glyph row must be {GLYPH_COLS} cells");
            for (col, bit) in bits.chars().enumerate() {
                if bit == '1' {
                    rows[row] |= 1 << (GLYPH_COLS - 1 - col);
                }
            }
        }
        Self { rows }
    }

    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        row < GLYPH_ROWS && col < GLYPH_COLS && self.rows[row] & (1 << (GLYPH_COLS - 1 - col)) != 0
    }

    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|row| *row == 0)
    }
}

#[rustfmt::skip]
const PATTERNS: &[(char, [&str; GLYPH_ROWS])] = &[
    (' ', ["00000", "00000", "00000", "00000", "00000", "00000", "00000"]),
    ('A', ["01110", "10001", "11111", "10001", "10001", "10001", "10001"]),
    ('B', ["11110", "10001", "11110", "10001", "10001", "10001", "11110"]),
    ('C', ["01110", "10001", "10000", "10000", "10000", "10001", "01110"]),
    ('D', ["11110", "10001", "10001", "10001", "10001", "10001", "11110"]),
    ('E', ["11111", "10000", "11110", "10000", "10000", "10000", "11111"]),
    ('F', ["11111", "10000", "11110", "10000", "10000", "10000", "10000"]),
    ('G', ["01110", "10001", "10000", "10111", "10001", "10001", "01110"]),
    ('H', ["10001", "10001", "11111", "10001", "10001", "10001", "10001"]),
    ('I', ["01110", "00100", "00100", "00100", "00100", "00100", "01110"]),
    ('J', ["00001", "00001", "00001", "10001", "10001", "10001", "01110"]),
    ('K', ["10001", "10010", "11100", "10100", "10010", "10001", "10001"]),
    ('L', ["10000", "10000", "10000", "10000", "10000", "10000", "11111"]),
    ('M', ["10001", "11011", "10101", "10101", "10001", "10001", "10001"]),
    ('N', ["10001", "11001", "10101", "10011", "10001", "10001", "10001"]),
    ('O', ["01110", "10001", "10001", "10001", "10001", "10001", "01110"]),
    ('P', ["11110", "10001", "11110", "10000", "10000", "10000", "10000"]),
    ('Q', ["01110", "10001", "10001", "10001", "10101", "10010", "01101"]),
    ('R', ["11110", "10001", "11110", "10100", "10010", "10001", "10001"]),
    ('S', ["01111", "10000", "10000", "01110", "00001", "00001", "11110"]),
    ('T', ["11111", "00100", "00100", "00100", "00100", "00100", "00100"]),
    ('U', ["10001", "10001", "10001", "10001", "10001", "10001", "01110"]),
    ('V', ["10001", "10001", "10001", "01010", "01010", "00100", "00100"]),
    ('W', ["10001", "10001", "10101", "10101", "10101", "11011", "10001"]),
    ('X', ["10001", "01010", "00100", "00100", "00100", "01010", "10001"]),
    ('Y', ["10001", "01010", "00100", "00100", "00100", "00100", "00100"]),
    ('Z', ["11111", "00001", "00010", "00100", "01000", "10000", "11111"]),
    ('0', ["01110", "10001", "10011", "10101", "11001", "10001", "01110"]),
    ('1', ["00100", "01100", "00100", "00100", "00100", "00100", "01110"]),
    ('2', ["01110", "10001", "00001", "00110", "01000", "10000", "11111"]),
    ('3', ["11110", "00001", "01110", "00001", "00001", "00001", "11110"]),
    ('4', ["00010", "00110", "01010", "10010", "11111", "00010", "00010"]),
    ('5', ["11111", "10000", "11110", "00001", "00001", "10001", "01110"]),
    ('6', ["01110", "10000", "11110", "10001", "10001", "10001", "01110"]),
    ('7', ["11111", "00001", "00010", "00100", "01000", "01000", "01000"]),
    ('8', ["01110", "10001", "01110", "10001", "10001", "10001", "01110"]),
    ('9', ["01110", "10001", "10001", "01111", "00001", "00001", "01110"]),
];

static FONT: Lazy<HashMap<char, Glyph>> = Lazy::new(|| {
    PATTERNS.iter().map(|(ch, pattern)| (*ch, Glyph::from_pattern(pattern))).collect()
});

/// Total lookup: folds to uppercase, unknown characters resolve to the blank glyph.
pub fn glyph_for(ch: char) -> Glyph {
    FONT.get(&ch.to_ascii_uppercase()).copied().unwrap_or(Glyph::BLANK)
}
