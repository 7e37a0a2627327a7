//! The full theme table and its one-time validation pass.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::layout::Layout;
use crate::palette::Palette;
use crate::semantic::{Role, SemanticColors};
use crate::typography::Typography;

/// The whole constants table: palette, roles, font, and geometry.
///
/// Constructed once and read everywhere; there is no setter API and the
/// default table is a `const` item, so nothing can change after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// The 26-entry base palette.
    pub palette: Palette,
    /// The 9 semantic roles resolved from the palette.
    pub colors: SemanticColors,
    /// Font settings.
    pub typography: Typography,
    /// Bar geometry and widget sizing.
    pub layout: Layout,
}

impl Theme {
    /// The Catppuccin Mocha theme the bar ships with.
    pub const MOCHA: Self = Self {
        palette: Palette::MOCHA,
        colors: SemanticColors::MOCHA,
        typography: Typography::DEFAULT,
        layout: Layout::BAR,
    };

    /// Checks the authoring invariants of the table.
    ///
    /// Every semantic role must be bound to an actual palette entry, the
    /// font family must be non-empty, and every layout field must be a
    /// positive pixel count. Intended to run once at startup so an
    /// authoring mistake fails fast instead of rendering a wrong bar.
    ///
    /// # Errors
    ///
    /// Returns a descriptive error naming the first offending role or field.
    pub fn validate(&self) -> Result<()> {
        for role in Role::ALL {
            let color = self.colors.get(role);
            if !self.palette.contains(color) {
                anyhow::bail!(
                    "semantic color '{}' ({color}) does not match any palette entry",
                    role.name()
                );
            }
        }

        if self.typography.family.is_empty() {
            anyhow::bail!("typography family must not be empty");
        }

        let fields = [
            ("barWidth", self.layout.bar_width),
            ("barHeight", self.layout.bar_height),
            ("defaultBoxSize", self.layout.default_box_size),
            ("defaultIconFontSize", self.layout.default_icon_font_size),
            ("defaultContentPadding", self.layout.default_content_padding),
            ("defaultContentFontSize", self.layout.default_content_font_size),
        ];
        for (field, value) in fields {
            if value == 0 {
                anyhow::bail!("layout field '{field}' must be a positive pixel count");
            }
        }

        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::MOCHA
    }
}
