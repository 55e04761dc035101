use super::font::{GLYPH_COLS, GLYPH_ROWS};

pub const BOARD_ROWS: usize = 4;
pub const BOARD_COLS: usize = 10;

/// Color encoded as RGB bytes.
pub type Rgb = [u8; 3];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileStyle {
    /// Padded tiles separated by gaps, with a faint border rectangle per tile.
    Bordered,
    /// Cell pitch derived directly from dot pitch; no padding, gaps or borders.
    Compact,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Diameter of a single dot in pixels.
    pub dot_size: u32,
    /// Spacing between dots within a tile.
    pub dot_gap: u32,
    /// Inner padding inside each tile around the dots (bordered style only).
    pub tile_pad: u32,
    /// Gap between tiles (bordered style only).
    pub tile_gap: u32,
    /// Outer padding around the whole board.
    pub outer_pad: u32,
    pub on_color: Rgb,
    pub off_color: Rgb,
    pub background: Rgb,
    pub gap_line: Rgb,
    pub style: TileStyle,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            dot_size: 10,
            dot_gap: 4,
            tile_pad: 6,
            tile_gap: 6,
            outer_pad: 10,
            on_color: [249, 237, 50],
            off_color: [59, 60, 61],
            background: [20, 20, 20],
            gap_line: [34, 34, 34],
            style: TileStyle::Bordered,
        }
    }
}

/// Every pixel offset on the board, derived once from a [`BoardConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGeometry {
    pub tile_inner_width: u32,
    pub tile_inner_height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    /// Horizontal distance between the origins of adjacent tiles.
    pub pitch_x: u32,
    pub pitch_y: u32,
    /// Offset from a tile origin to its first dot.
    pub dot_inset: u32,
    pub outer_pad: u32,
    pub board_width: u32,
    pub board_height: u32,
}

impl BoardGeometry {
    pub fn resolve(config: &BoardConfig) -> Self {
        let cols = GLYPH_COLS as u32;
        let rows = GLYPH_ROWS as u32;
        let tile_inner_width = cols * config.dot_size + (cols - 1) * config.dot_gap;
        let tile_inner_height = rows * config.dot_size + (rows - 1) * config.dot_gap;

        let (tile_width, tile_height, pitch_x, pitch_y, dot_inset) = match config.style {
            TileStyle::Bordered => {
                let tile_width = tile_inner_width + 2 * config.tile_pad;
                let tile_height = tile_inner_height + 2 * config.tile_pad;
                (
                    tile_width,
                    tile_height,
                    tile_width + config.tile_gap,
                    tile_height + config.tile_gap,
                    config.tile_pad,
                )
            },
            TileStyle::Compact => {
                (tile_inner_width, tile_inner_height, tile_inner_width, tile_inner_height, 0)
            },
        };

        let board_cols = BOARD_COLS as u32;
        let board_rows = BOARD_ROWS as u32;
        let (board_width, board_height) = match config.style {
            TileStyle::Bordered => (
                2 * config.outer_pad + board_cols * tile_width + (board_cols - 1) * config.tile_gap,
                2 * config.outer_pad + board_rows * tile_height + (board_rows - 1) * config.tile_gap,
            ),
            TileStyle::Compact => (
                2 * config.outer_pad + board_cols * tile_inner_width,
                2 * config.outer_pad + board_rows * tile_inner_height,
            ),
        };

        Self {
            tile_inner_width,
            tile_inner_height,
            tile_width,
            tile_height,
            pitch_x,
            pitch_y,
            dot_inset,
            outer_pad: config.outer_pad,
            board_width,
            board_height,
        }
    }

    /// Top-left pixel of the tile at (row, col).
    pub fn tile_origin(&self, row: usize, col: usize) -> (u32, u32) {
        (self.outer_pad + col as u32 * self.pitch_x, self.outer_pad + row as u32 * self.pitch_y)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bordered_defaults_match_reference_constants() {
        let geometry = BoardGeometry::resolve(&BoardConfig::default());
        assert_eq!(geometry.tile_inner_width, 5 * 10 + 4 * 4);
        assert_eq!(geometry.tile_inner_height, 7 * 10 + 6 * 4);
        assert_eq!(geometry.tile_width, 78);
        assert_eq!(geometry.tile_height, 106);
        assert_eq!(geometry.board_width, 2 * 10 + 10 * 78 + 9 * 6);
        assert_eq!(geometry.board_height, 2 * 10 + 4 * 106 + 3 * 6);
    }

    #[test]
    fn compact_omits_tile_pad_and_gap() {
        let config = BoardConfig { style: TileStyle::Compact, ..BoardConfig::default() };
        let geometry = BoardGeometry::resolve(&config);
        assert_eq!(geometry.tile_width, geometry.tile_inner_width);
        assert_eq!(geometry.pitch_x, geometry.tile_inner_width);
        assert_eq!(geometry.dot_inset, 0);
        assert_eq!(geometry.board_width, 2 * 10 + 10 * 66);
        assert_eq!(geometry.board_height, 2 * 10 + 4 * 94);
    }

    #[test]
    fn tile_origins_step_by_pitch() {
        let geometry = BoardGeometry::resolve(&BoardConfig::default());
        assert_eq!(geometry.tile_origin(0, 0), (10, 10));
        assert_eq!(geometry.tile_origin(0, 1), (10 + geometry.pitch_x, 10));
        assert_eq!(geometry.tile_origin(2, 0), (10, 10 + 2 * geometry.pitch_y));
    }

    #[test]
    fn board_size_is_monotone_in_each_parameter() {
        let base = BoardConfig::default();
        let resolved = BoardGeometry::resolve(&base);
        let grown = [
            BoardConfig { dot_size: base.dot_size + 1, ..base.clone() },
            BoardConfig { dot_gap: base.dot_gap + 1, ..base.clone() },
            BoardConfig { tile_pad: base.tile_pad + 1, ..base.clone() },
            BoardConfig { tile_gap: base.tile_gap + 1, ..base.clone() },
            BoardConfig { outer_pad: base.outer_pad + 1, ..base.clone() },
        ];
        for config in grown {
            let geometry = BoardGeometry::resolve(&config);
            assert!(geometry.board_width >= resolved.board_width);
            assert!(geometry.board_height >= resolved.board_height);
        }
    }

    #[test]
    fn zero_sizes_resolve_without_panicking() {
        let config = BoardConfig {
            dot_size: 0,
            dot_gap: 0,
            tile_pad: 0,
            tile_gap: 0,
            outer_pad: 0,
            ..BoardConfig::default()
        };
        let geometry = BoardGeometry::resolve(&config);
        assert_eq!(geometry.board_width, 0);
        assert_eq!(geometry.board_height, 0);
    }
}
