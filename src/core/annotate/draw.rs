use crate::core::annotate::glyphs::{glyph_for, GLYPH_ADVANCE, GLYPH_WIDTH};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

/// Stamps a line of text into the buffer at (`x`, `y`), top-left anchored.
/// Characters without a glyph still advance the pen, keeping columns
/// aligned. Pixels falling outside the buffer are clipped.
pub fn stamp_text(buffer: &mut PixelBuffer, x: i32, y: i32, text: &str, colour: Colour) {
    let mut pen_x = x;

    for ch in text.chars() {
        if let Some(rows) = glyph_for(ch) {
            for (row_index, row) in rows.into_iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if (row >> (GLYPH_WIDTH - 1 - col)) & 1 != 0 {
                        buffer.put_pixel_clipped(
                            Point {
                                x: pen_x + col,
                                y: y + row_index as i32,
                            },
                            colour,
                        );
                    }
                }
            }
        }
        pen_x += GLYPH_ADVANCE;
    }
}

/// Strokes a one-pixel circle outline with the midpoint algorithm, clipping
/// against the buffer edges.
pub fn stroke_circle(buffer: &mut PixelBuffer, center: Point, radius: i32, colour: Colour) {
    if radius < 1 {
        return;
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        for (dx, dy) in [
            (x, y),
            (y, x),
            (-y, x),
            (-x, y),
            (-x, -y),
            (-y, -x),
            (y, -x),
            (x, -y),
        ] {
            buffer.put_pixel_clipped(
                Point {
                    x: center.x + dx,
                    y: center.y + dy,
                },
                colour,
            );
        }

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}
