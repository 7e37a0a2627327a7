//! Theme constants for the Simbar status bar.
//!
//! This crate is the single source of truth for the bar's colors and sizing:
//! the Catppuccin Mocha base palette, the semantic roles widgets actually
//! paint with, the font family, and the bar's pixel geometry. Everything is
//! `const` data; there is no theming engine and no runtime switching.
//!
//! ```
//! use simbar_theme::Theme;
//!
//! let theme = Theme::MOCHA;
//! assert_eq!(theme.colors.primary, theme.palette.blue);
//! assert_eq!(theme.layout.bar_height, 45);
//! ```

// Module declarations
pub mod color;
pub mod layout;
pub mod palette;
pub mod semantic;
pub mod theme;
pub mod typography;

// Re-export the table types at the crate root
pub use color::Color;
pub use layout::Layout;
pub use palette::{Palette, PaletteColor};
pub use semantic::{Role, SemanticColors};
pub use theme::Theme;
pub use typography::Typography;
