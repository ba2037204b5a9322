//! The fixed point palette and the color sources that pick from it.
//!
//! Every plotted point gets its own color, drawn from [`PaletteColor`]
//! through a [`ColorSource`]. The source is injected so tests can use a
//! deterministic sequence instead of a random one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::style::{Color, Style};

/// Number of colors in the palette.
pub const N_COLORS: u8 = 6;

/// Minimum number of terminal colors needed to show the palette on black.
pub const MIN_TERMINAL_COLORS: u16 = 8;

/// Foreground colors used for curve points, indexed `1..=N_COLORS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    /// Index 1.
    Red = 1,
    /// Index 2.
    Green = 2,
    /// Index 3.
    Yellow = 3,
    /// Index 4.
    Blue = 4,
    /// Index 5.
    Cyan = 5,
    /// Index 6.
    White = 6,
}

impl PaletteColor {
    /// All palette colors in index order.
    pub const ALL: [Self; N_COLORS as usize] =
        [Self::Red, Self::Green, Self::Yellow, Self::Blue, Self::Cyan, Self::White];

    /// Look up a color by its 1-based palette index.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(usize::from(i)).copied())
    }

    /// 1-based palette index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Terminal color for this palette entry.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Red => Color::Red,
            Self::Green => Color::Green,
            Self::Yellow => Color::Yellow,
            Self::Blue => Color::Blue,
            Self::Cyan => Color::Cyan,
            Self::White => Color::White,
        }
    }

    /// Foreground color on a black background.
    #[must_use]
    pub fn style(self) -> Style {
        Style::default().fg(self.color()).bg(Color::Black)
    }
}

/// Supplies one palette color per plotted point.
pub trait ColorSource {
    /// Pick the color for the next point.
    fn next_color(&mut self) -> PaletteColor;
}

impl<T: ColorSource + ?Sized> ColorSource for &mut T {
    fn next_color(&mut self) -> PaletteColor {
        (**self).next_color()
    }
}

impl<T: ColorSource + ?Sized> ColorSource for Box<T> {
    fn next_color(&mut self) -> PaletteColor {
        (**self).next_color()
    }
}

/// Uniformly random palette colors.
#[derive(Debug, Clone)]
pub struct RandomColors<R = StdRng> {
    rng: R,
}

impl RandomColors<StdRng> {
    /// Seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeded deterministically, for reproducible speckle.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Use `seed` when given, otherwise entropy.
    #[must_use]
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<R: Rng> RandomColors<R> {
    /// Wrap an existing random number generator.
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ColorSource for RandomColors<R> {
    fn next_color(&mut self) -> PaletteColor {
        let index = self.rng.gen_range(1..=N_COLORS);
        PaletteColor::from_index(index).unwrap_or(PaletteColor::White)
    }
}

/// Deterministic source that walks the palette in order and wraps.
#[derive(Debug, Clone, Default)]
pub struct CycleColors {
    next: usize,
}

impl CycleColors {
    /// Start at [`PaletteColor::Red`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColorSource for CycleColors {
    fn next_color(&mut self) -> PaletteColor {
        let color = PaletteColor::ALL[self.next % PaletteColor::ALL.len()];
        self.next = self.next.wrapping_add(1);
        color
    }
}
