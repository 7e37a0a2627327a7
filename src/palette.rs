//! The Catppuccin Mocha base palette.
//!
//! Twenty-six named colors the rest of the theme is built from. The table is
//! a `const` item; nothing can mutate it after load, and a misspelled color
//! name is a compile error rather than a runtime lookup failure.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Name of one of the 26 base palette entries.
///
/// Declaration order follows the upstream Catppuccin ordering: accents first,
/// then the text/overlay/surface ramp, then the base backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    /// Rosewater accent
    Rosewater,
    /// Flamingo accent
    Flamingo,
    /// Pink accent
    Pink,
    /// Mauve accent
    Mauve,
    /// Red accent
    Red,
    /// Maroon accent
    Maroon,
    /// Peach accent
    Peach,
    /// Yellow accent
    Yellow,
    /// Green accent
    Green,
    /// Teal accent
    Teal,
    /// Sky accent
    Sky,
    /// Sapphire accent
    Sapphire,
    /// Blue accent
    Blue,
    /// Lavender accent
    Lavender,
    /// Main text color
    Text,
    /// First subtext step
    Subtext1,
    /// Second subtext step
    Subtext0,
    /// Overlay, strongest
    Overlay2,
    /// Overlay, middle
    Overlay1,
    /// Overlay, weakest
    Overlay0,
    /// Surface, strongest
    Surface2,
    /// Surface, middle
    Surface1,
    /// Surface, weakest
    Surface0,
    /// Base background
    Base,
    /// Mantle background
    Mantle,
    /// Crust background
    Crust,
}

impl PaletteColor {
    /// All 26 palette names in declaration order.
    pub const ALL: [Self; 26] = [
        Self::Rosewater,
        Self::Flamingo,
        Self::Pink,
        Self::Mauve,
        Self::Red,
        Self::Maroon,
        Self::Peach,
        Self::Yellow,
        Self::Green,
        Self::Teal,
        Self::Sky,
        Self::Sapphire,
        Self::Blue,
        Self::Lavender,
        Self::Text,
        Self::Subtext1,
        Self::Subtext0,
        Self::Overlay2,
        Self::Overlay1,
        Self::Overlay0,
        Self::Surface2,
        Self::Surface1,
        Self::Surface0,
        Self::Base,
        Self::Mantle,
        Self::Crust,
    ];

    /// The key this entry is known by in theme files and upstream docs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rosewater => "rosewater",
            Self::Flamingo => "flamingo",
            Self::Pink => "pink",
            Self::Mauve => "mauve",
            Self::Red => "red",
            Self::Maroon => "maroon",
            Self::Peach => "peach",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Sky => "sky",
            Self::Sapphire => "sapphire",
            Self::Blue => "blue",
            Self::Lavender => "lavender",
            Self::Text => "text",
            Self::Subtext1 => "subtext1",
            Self::Subtext0 => "subtext0",
            Self::Overlay2 => "overlay2",
            Self::Overlay1 => "overlay1",
            Self::Overlay0 => "overlay0",
            Self::Surface2 => "surface2",
            Self::Surface1 => "surface1",
            Self::Surface0 => "surface0",
            Self::Base => "base",
            Self::Mantle => "mantle",
            Self::Crust => "crust",
        }
    }
}

/// The base color table with one field per palette name.
///
/// Consumers read fields directly (`Palette::MOCHA.blue`) or look entries up
/// by [`PaletteColor`] when iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Rosewater accent
    pub rosewater: Color,
    /// Flamingo accent
    pub flamingo: Color,
    /// Pink accent
    pub pink: Color,
    /// Mauve accent
    pub mauve: Color,
    /// Red accent
    pub red: Color,
    /// Maroon accent
    pub maroon: Color,
    /// Peach accent
    pub peach: Color,
    /// Yellow accent
    pub yellow: Color,
    /// Green accent
    pub green: Color,
    /// Teal accent
    pub teal: Color,
    /// Sky accent
    pub sky: Color,
    /// Sapphire accent
    pub sapphire: Color,
    /// Blue accent
    pub blue: Color,
    /// Lavender accent
    pub lavender: Color,
    /// Main text color
    pub text: Color,
    /// First subtext step
    pub subtext1: Color,
    /// Second subtext step
    pub subtext0: Color,
    /// Overlay, strongest
    pub overlay2: Color,
    /// Overlay, middle
    pub overlay1: Color,
    /// Overlay, weakest
    pub overlay0: Color,
    /// Surface, strongest
    pub surface2: Color,
    /// Surface, middle
    pub surface1: Color,
    /// Surface, weakest
    pub surface0: Color,
    /// Base background
    pub base: Color,
    /// Mantle background
    pub mantle: Color,
    /// Crust background
    pub crust: Color,
}

impl Palette {
    /// The Catppuccin Mocha palette.
    pub const MOCHA: Self = Self {
        rosewater: Color::new(0xf5, 0xe0, 0xdc),
        flamingo: Color::new(0xf2, 0xcd, 0xcd),
        pink: Color::new(0xf5, 0xc2, 0xe7),
        mauve: Color::new(0xcb, 0xa6, 0xf7),
        red: Color::new(0xf3, 0x8b, 0xa8),
        maroon: Color::new(0xeb, 0xa0, 0xac),
        peach: Color::new(0xfa, 0xb3, 0x87),
        yellow: Color::new(0xf9, 0xe2, 0xaf),
        green: Color::new(0xa6, 0xe3, 0xa1),
        teal: Color::new(0x94, 0xe2, 0xd5),
        sky: Color::new(0x89, 0xdc, 0xeb),
        sapphire: Color::new(0x74, 0xc7, 0xec),
        blue: Color::new(0x89, 0xb4, 0xfa),
        lavender: Color::new(0xb4, 0xbe, 0xfe),
        text: Color::new(0xcd, 0xd6, 0xf4),
        subtext1: Color::new(0xba, 0xc2, 0xde),
        subtext0: Color::new(0xa6, 0xad, 0xc8),
        overlay2: Color::new(0x93, 0x99, 0xb2),
        overlay1: Color::new(0x7f, 0x84, 0x9c),
        overlay0: Color::new(0x6c, 0x70, 0x86),
        surface2: Color::new(0x58, 0x5b, 0x70),
        surface1: Color::new(0x45, 0x47, 0x5a),
        surface0: Color::new(0x31, 0x32, 0x44),
        base: Color::new(0x1e, 0x1e, 0x2e),
        mantle: Color::new(0x18, 0x18, 0x25),
        crust: Color::new(0x11, 0x11, 0x1b),
    };

    /// Looks up the entry bound to a palette name.
    #[must_use]
    pub const fn get(&self, name: PaletteColor) -> Color {
        match name {
            PaletteColor::Rosewater => self.rosewater,
            PaletteColor::Flamingo => self.flamingo,
            PaletteColor::Pink => self.pink,
            PaletteColor::Mauve => self.mauve,
            PaletteColor::Red => self.red,
            PaletteColor::Maroon => self.maroon,
            PaletteColor::Peach => self.peach,
            PaletteColor::Yellow => self.yellow,
            PaletteColor::Green => self.green,
            PaletteColor::Teal => self.teal,
            PaletteColor::Sky => self.sky,
            PaletteColor::Sapphire => self.sapphire,
            PaletteColor::Blue => self.blue,
            PaletteColor::Lavender => self.lavender,
            PaletteColor::Text => self.text,
            PaletteColor::Subtext1 => self.subtext1,
            PaletteColor::Subtext0 => self.subtext0,
            PaletteColor::Overlay2 => self.overlay2,
            PaletteColor::Overlay1 => self.overlay1,
            PaletteColor::Overlay0 => self.overlay0,
            PaletteColor::Surface2 => self.surface2,
            PaletteColor::Surface1 => self.surface1,
            PaletteColor::Surface0 => self.surface0,
            PaletteColor::Base => self.base,
            PaletteColor::Mantle => self.mantle,
            PaletteColor::Crust => self.crust,
        }
    }

    /// All entries as `(name, color)` pairs in declaration order.
    #[must_use]
    pub fn entries(&self) -> [(PaletteColor, Color); 26] {
        PaletteColor::ALL.map(|name| (name, self.get(name)))
    }

    /// Returns true if any entry equals the given color.
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        PaletteColor::ALL.iter().any(|name| self.get(*name) == color)
    }
}
