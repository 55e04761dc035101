mod board;
mod sequence;

use image::RgbImage;
use log::debug;

pub use board::font::{glyph_for, Glyph, GLYPH_COLS, GLYPH_ROWS};
pub use board::geometry::{BoardConfig, BoardGeometry, Rgb, TileStyle, BOARD_COLS, BOARD_ROWS};
pub use board::scene::Scene;
pub use sequence::encoder::encode_gif;
pub use sequence::playback::{Playback, PlaybackState};
pub use sequence::playlist::{ScenePlaylist, MAX_SCENES};
pub use sequence::series::FrameSequence;

use board::tile;

#[derive(Debug, thiserror::Error)]
pub enum LedError {
    #[error("cannot encode an animation with no frames")]
    EmptySequence,
    #[error("frame {index} is {}x{} but the sequence is {}x{}", .actual.0, .actual.1, .expected.0, .expected.1)]
    FrameSizeMismatch { index: usize, expected: (u32, u32), actual: (u32, u32) },
    #[error("failed to encode animation: {0}")]
    Encode(#[from] image::ImageError),
}

/// Rasterizes scenes into board-sized frames. Geometry is resolved once, so
/// every frame from one renderer has identical dimensions.
#[derive(Clone, Debug)]
pub struct BoardRenderer {
    config: BoardConfig,
    geometry: BoardGeometry,
}

impl BoardRenderer {
    pub fn new(config: BoardConfig) -> Self {
        let geometry = BoardGeometry::resolve(&config);
        Self { config, geometry }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Render one scene to a frame. Deterministic: the same scene and config
    /// always produce pixel-identical output.
    pub fn render_scene(&self, scene: &Scene) -> RgbImage {
        let mut canvas = RgbImage::from_pixel(
            self.geometry.board_width,
            self.geometry.board_height,
            image::Rgb(self.config.background),
        );

        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                let glyph = glyph_for(scene.char_at(row, col).unwrap_or(' '));
                let origin = self.geometry.tile_origin(row, col);
                tile::draw_tile(&mut canvas, &self.config, &self.geometry, &glyph, origin);
            }
        }

        debug!(
            "rendered scene to {}x{} frame",
            self.geometry.board_width, self.geometry.board_height
        );
        canvas
    }
}

impl Default for BoardRenderer {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
