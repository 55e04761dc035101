use image::RgbImage;

use super::font::{Glyph, GLYPH_COLS, GLYPH_ROWS};
use super::geometry::{BoardConfig, BoardGeometry, Rgb, TileStyle};

/// Draw one character tile at `origin`: 35 filled circles, plus a faint
/// border rectangle in the bordered style.
pub(crate) fn draw_tile(
    canvas: &mut RgbImage,
    config: &BoardConfig,
    geometry: &BoardGeometry,
    glyph: &Glyph,
    origin: (u32, u32),
) {
    if config.style == TileStyle::Bordered {
        stroke_tile_border(canvas, config, geometry, origin);
    }

    let dot_pitch = config.dot_size + config.dot_gap;
    for gy in 0..GLYPH_ROWS {
        for gx in 0..GLYPH_COLS {
            let color = if glyph.is_lit(gy, gx) { config.on_color } else { config.off_color };
            let x = origin.0 + geometry.dot_inset + gx as u32 * dot_pitch;
            let y = origin.1 + geometry.dot_inset + gy as u32 * dot_pitch;
            fill_dot(canvas, x, y, config.dot_size, color);
        }
    }
}

/// Fill the circle inscribed in the `diameter`-sized box at (x, y).
fn fill_dot(canvas: &mut RgbImage, x: u32, y: u32, diameter: u32, color: Rgb) {
    let radius = diameter as f32 / 2.0;
    let center_x = x as f32 + radius;
    let center_y = y as f32 + radius;
    let limit = radius * radius;

    let max_x = (x + diameter).min(canvas.width());
    let max_y = (y + diameter).min(canvas.height());
    for py in y..max_y {
        for px in x..max_x {
            let dx = px as f32 + 0.5 - center_x;
            let dy = py as f32 + 0.5 - center_y;
            if dx * dx + dy * dy <= limit {
                canvas.put_pixel(px, py, image::Rgb(color));
            }
        }
    }
}

fn stroke_tile_border(
    canvas: &mut RgbImage,
    config: &BoardConfig,
    geometry: &BoardGeometry,
    origin: (u32, u32),
) {
    let half_gap = (config.tile_gap / 2) as i64;
    let x0 = origin.0 as i64 - half_gap;
    let y0 = origin.1 as i64 - half_gap;
    let x1 = origin.0 as i64 + geometry.tile_width as i64 + half_gap;
    let y1 = origin.1 as i64 + geometry.tile_height as i64 + half_gap;

    for px in x0..=x1 {
        put_clamped(canvas, px, y0, config.gap_line);
        put_clamped(canvas, px, y1, config.gap_line);
    }
    for py in y0..=y1 {
        put_clamped(canvas, x0, py, config.gap_line);
        put_clamped(canvas, x1, py, config.gap_line);
    }
}

fn put_clamped(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, image::Rgb(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_dot_lights_center_but_not_corners() {
        let mut canvas = RgbImage::from_pixel(20, 20, image::Rgb([0, 0, 0]));
        fill_dot(&mut canvas, 5, 5, 10, [255, 255, 255]);
        assert_eq!(canvas.get_pixel(10, 10), &image::Rgb([255, 255, 255]));
        assert_eq!(canvas.get_pixel(5, 5), &image::Rgb([0, 0, 0]));
        assert_eq!(canvas.get_pixel(14, 14), &image::Rgb([0, 0, 0]));
    }

    #[test]
    fn fill_dot_clips_at_canvas_edge() {
        let mut canvas = RgbImage::from_pixel(8, 8, image::Rgb([0, 0, 0]));
        fill_dot(&mut canvas, 4, 4, 10, [255, 0, 0]);
        assert_eq!(canvas.get_pixel(7, 7), &image::Rgb([255, 0, 0]));
    }

    #[test]
    fn border_stroke_clamps_outside_canvas() {
        let mut canvas = RgbImage::from_pixel(4, 4, image::Rgb([0, 0, 0]));
        let config = BoardConfig::default();
        let geometry = BoardGeometry::resolve(&config);
        // every border line of a default-sized tile at (0, 0) falls outside a 4x4 canvas
        stroke_tile_border(&mut canvas, &config, &geometry, (0, 0));
        assert!(canvas.pixels().all(|pixel| *pixel == image::Rgb([0, 0, 0])));
    }
}
