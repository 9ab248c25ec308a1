use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaletteError {
    TooFewEntries { entries: usize },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewEntries { entries } => {
                write!(f, "a palette needs at least 2 entries, got {}", entries)
            }
        }
    }
}

impl Error for PaletteError {}

/// An ordered list of reference colours interpolated into a continuous
/// gradient. Immutable once built; switching palettes is value replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<Colour>,
}

impl Palette {
    pub fn new(entries: Vec<Colour>) -> Result<Self, PaletteError> {
        if entries.len() < 2 {
            return Err(PaletteError::TooFewEntries {
                entries: entries.len(),
            });
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[Colour] {
        &self.entries
    }

    /// Piecewise-linear colour for a normalized escape ratio.
    ///
    /// The ratio selects a segment with `floor(ratio * (len - 1))` and
    /// blends its endpoints with the remainder. A ratio of exactly 1.0
    /// lands on the final entry rather than overrunning the list.
    #[must_use]
    pub fn colour_for(&self, ratio: f64) -> Colour {
        let ratio = ratio.clamp(0.0, 1.0);
        let span = (self.entries.len() - 1) as f64;
        let scaled = ratio * span;
        let index = (scaled.floor() as usize).min(self.entries.len() - 1);
        let frac = scaled - index as f64;

        let from = self.entries[index];
        let to = self.entries[(index + 1).min(self.entries.len() - 1)];
        from.lerp(to, frac)
    }
}
