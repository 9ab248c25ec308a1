pub const GLYPH_WIDTH: i32 = 3;
pub const GLYPH_HEIGHT: i32 = 5;
/// Horizontal pen advance: glyph width plus one column of spacing.
pub const GLYPH_ADVANCE: i32 = GLYPH_WIDTH + 1;

/// 3x5 bitmap glyphs for the characters the capture annotations emit:
/// digits, sign, decimal point, exponent marker and space. Each row is the
/// top three bits of a byte, leftmost pixel in the highest bit.
#[must_use]
pub fn glyph_for(ch: char) -> Option<[u8; 5]> {
    let rows = match ch {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        'e' => [0b010, 0b101, 0b111, 0b100, 0b011],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _ => return None,
    };

    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_the_annotation_charset() {
        for ch in "0123456789-. e".chars() {
            assert!(glyph_for(ch).is_some(), "missing glyph for {:?}", ch);
        }
    }

    #[test]
    fn test_unknown_characters_have_no_glyph() {
        assert_eq!(glyph_for('q'), None);
        assert_eq!(glyph_for('\n'), None);
    }

    #[test]
    fn test_rows_fit_the_glyph_width() {
        for ch in "0123456789-. e".chars() {
            let rows = glyph_for(ch).unwrap();
            for row in rows {
                assert_eq!(row & !0b111, 0, "glyph {:?} wider than 3 bits", ch);
            }
        }
    }

    #[test]
    fn test_formatted_annotations_only_use_covered_characters() {
        let line = format!("{:.6} {:.6}", -0.743643f64, 0.131825f64);
        let scale = format!("{:.1e}", 409600.0f64);

        for ch in line.chars().chain(scale.chars()) {
            assert!(glyph_for(ch).is_some(), "no glyph for {:?}", ch);
        }
    }
}
