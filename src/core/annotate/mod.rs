pub mod draw;
pub mod glyphs;
