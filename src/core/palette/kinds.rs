#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    Initial,
    Original,
    Cool,
    Warm,
    Grayscale,
    Psychedelic,
    Ocean,
    Forest,
}

impl PaletteKind {
    pub const ALL: &'static [Self] = &[
        Self::Initial,
        Self::Original,
        Self::Cool,
        Self::Warm,
        Self::Grayscale,
        Self::Psychedelic,
        Self::Ocean,
        Self::Forest,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Original => "Original",
            Self::Cool => "Cool",
            Self::Warm => "Warm",
            Self::Grayscale => "Grayscale",
            Self::Psychedelic => "Psychedelic",
            Self::Ocean => "Ocean",
            Self::Forest => "Forest",
        }
    }
}

impl Default for PaletteKind {
    fn default() -> Self {
        Self::Initial
    }
}

impl std::fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
