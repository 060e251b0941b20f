/// Colors the snake cycles through, one step per orb eaten.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PaletteColor {
    Green,
    Blue,
    Yellow,
    Pink,
    Orange,
    Purple,
}

/// Snake colors in cycle order. Index 0 is the color of a fresh round.
pub const PALETTE: [PaletteColor; 6] = [
    PaletteColor::Green,
    PaletteColor::Blue,
    PaletteColor::Yellow,
    PaletteColor::Pink,
    PaletteColor::Orange,
    PaletteColor::Purple,
];

impl PaletteColor {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Orange => "orange",
            Self::Purple => "purple",
        }
    }

    /// Named-color RGB values as used by Tk and X11.
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Green => (0, 255, 0),
            Self::Blue => (0, 0, 255),
            Self::Yellow => (255, 255, 0),
            Self::Pink => (255, 192, 203),
            Self::Orange => (255, 165, 0),
            Self::Purple => (160, 32, 240),
        }
    }
}

/// Palette entry for `index`, wrapping around.
#[must_use]
pub fn color_for_index(index: usize) -> PaletteColor {
    PALETTE[index % PALETTE.len()]
}

/// Index of the color following `index`.
#[must_use]
pub fn next_index(index: usize) -> usize {
    (index + 1) % PALETTE.len()
}
