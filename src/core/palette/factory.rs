use crate::core::data::colour::Colour;
use crate::core::palette::kinds::PaletteKind;
use crate::core::palette::palette::Palette;

const fn rgb(r: u8, g: u8, b: u8) -> Colour {
    Colour { r, g, b }
}

/// Fixed colour stops for each named palette. Every table has at least four
/// entries; `Cool` deliberately has six.
fn stops_for_kind(kind: PaletteKind) -> Vec<Colour> {
    match kind {
        PaletteKind::Initial => vec![
            rgb(0, 7, 100),
            rgb(32, 107, 203),
            rgb(237, 255, 255),
            rgb(255, 170, 0),
            rgb(0, 2, 0),
        ],
        PaletteKind::Original => vec![
            rgb(0, 0, 0),
            rgb(213, 67, 31),
            rgb(251, 255, 121),
            rgb(62, 223, 89),
            rgb(43, 30, 218),
            rgb(0, 255, 247),
        ],
        PaletteKind::Cool => vec![
            rgb(0, 0, 128),
            rgb(0, 64, 192),
            rgb(0, 160, 255),
            rgb(64, 224, 255),
            rgb(160, 255, 255),
            rgb(255, 255, 255),
        ],
        PaletteKind::Warm => vec![
            rgb(64, 0, 0),
            rgb(192, 32, 0),
            rgb(255, 128, 0),
            rgb(255, 224, 64),
            rgb(255, 255, 192),
        ],
        PaletteKind::Grayscale => vec![
            rgb(0, 0, 0),
            rgb(85, 85, 85),
            rgb(170, 170, 170),
            rgb(255, 255, 255),
        ],
        PaletteKind::Psychedelic => vec![
            rgb(255, 0, 255),
            rgb(0, 255, 255),
            rgb(255, 255, 0),
            rgb(255, 0, 0),
            rgb(0, 255, 0),
            rgb(0, 0, 255),
        ],
        PaletteKind::Ocean => vec![
            rgb(0, 16, 64),
            rgb(0, 64, 128),
            rgb(0, 128, 160),
            rgb(64, 192, 192),
            rgb(224, 255, 240),
        ],
        PaletteKind::Forest => vec![
            rgb(16, 32, 16),
            rgb(32, 96, 32),
            rgb(96, 160, 48),
            rgb(192, 208, 96),
            rgb(240, 240, 208),
        ],
    }
}

#[must_use]
pub fn palette_for_kind(kind: PaletteKind) -> Palette {
    // Every stop table above satisfies the length invariant.
    Palette::new(stops_for_kind(kind)).expect("built-in palette tables have at least 2 entries")
}
