//! Semantic color roles resolved from the base palette.
//!
//! Widgets never reference palette names directly; they ask for a role like
//! "danger" or "card". Swapping the palette only requires editing the
//! bindings in [`SemanticColors::from_palette`].

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::palette::Palette;

/// Name of one of the 9 semantic color roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Primary brand/emphasis color
    Primary,
    /// Secondary accent color
    Secondary,
    /// Success state color
    Success,
    /// Warning state color
    Warning,
    /// Error/destructive state color
    Danger,
    /// Bar background color
    Background,
    /// Widget card/box background color
    Card,
    /// Text drawn on accent-colored boxes
    Text,
    /// De-emphasized text color
    TextSecondary,
}

impl Role {
    /// All 9 roles in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Background,
        Self::Card,
        Self::Text,
        Self::TextSecondary,
    ];

    /// The key this role is known by in theme files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Background => "background",
            Self::Card => "card",
            Self::Text => "text",
            Self::TextSecondary => "textSecondary",
        }
    }
}

/// The role table with one concrete color per role.
///
/// Resolution is one-shot: each field holds a copy of a palette entry taken
/// at construction time, with no back-reference to the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticColors {
    /// Primary brand/emphasis color
    pub primary: Color,
    /// Secondary accent color
    pub secondary: Color,
    /// Success state color
    pub success: Color,
    /// Warning state color
    pub warning: Color,
    /// Error/destructive state color
    pub danger: Color,
    /// Bar background color
    pub background: Color,
    /// Widget card/box background color
    pub card: Color,
    /// Text drawn on accent-colored boxes
    pub text: Color,
    /// De-emphasized text color
    pub text_secondary: Color,
}

impl SemanticColors {
    /// The role table resolved against the Catppuccin Mocha palette.
    pub const MOCHA: Self = Self::from_palette(&Palette::MOCHA);

    /// Resolves every role against the given palette by copying values.
    #[must_use]
    pub const fn from_palette(palette: &Palette) -> Self {
        Self {
            primary: palette.blue,
            secondary: palette.mauve,
            success: palette.green,
            warning: palette.yellow,
            danger: palette.red,
            background: palette.crust,
            card: palette.surface0,
            text: palette.mantle,
            text_secondary: palette.subtext0,
        }
    }

    /// Looks up the color bound to a role.
    #[must_use]
    pub const fn get(&self, role: Role) -> Color {
        match role {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Success => self.success,
            Role::Warning => self.warning,
            Role::Danger => self.danger,
            Role::Background => self.background,
            Role::Card => self.card,
            Role::Text => self.text,
            Role::TextSecondary => self.text_secondary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteColor;

    #[test]
    fn test_mocha_bindings() {
        let colors = SemanticColors::MOCHA;
        let palette = Palette::MOCHA;
        assert_eq!(colors.primary, palette.blue);
        assert_eq!(colors.secondary, palette.mauve);
        assert_eq!(colors.success, palette.green);
        assert_eq!(colors.warning, palette.yellow);
        assert_eq!(colors.danger, palette.red);
        assert_eq!(colors.background, palette.crust);
        assert_eq!(colors.card, palette.surface0);
        assert_eq!(colors.text, palette.mantle);
        assert_eq!(colors.text_secondary, palette.subtext0);
    }

    #[test]
    fn test_primary_hex_value() {
        assert_eq!(SemanticColors::MOCHA.primary.to_hex(), "#89b4fa");
    }

    #[test]
    fn test_every_role_in_palette() {
        let colors = SemanticColors::MOCHA;
        let palette = Palette::MOCHA;
        for role in Role::ALL {
            assert!(
                palette.contains(colors.get(role)),
                "role '{}' is not bound to a palette entry",
                role.name()
            );
        }
    }

    #[test]
    fn test_copying_semantics() {
        // Resolving against a different palette must not affect an already
        // resolved table.
        let mut swapped = Palette::MOCHA;
        swapped.blue = Color::new(0, 0, 0);
        let before = SemanticColors::from_palette(&Palette::MOCHA);
        let after = SemanticColors::from_palette(&swapped);
        assert_eq!(before.primary, Palette::MOCHA.blue);
        assert_eq!(after.primary, Color::new(0, 0, 0));
    }

    #[test]
    fn test_role_names() {
        assert_eq!(Role::TextSecondary.name(), "textSecondary");
        assert_eq!(Role::Danger.name(), "danger");
        assert_eq!(Role::ALL.len(), 9);
    }

    #[test]
    fn test_get_matches_fields() {
        let colors = SemanticColors::MOCHA;
        assert_eq!(colors.get(Role::Card), colors.card);
        assert_eq!(colors.get(Role::TextSecondary), colors.text_secondary);
    }

    #[test]
    fn test_roles_reference_distinct_concerns() {
        // The state roles are bound to distinct accents.
        let colors = SemanticColors::MOCHA;
        assert_ne!(colors.success, colors.danger);
        assert_ne!(colors.warning, colors.danger);
        assert_eq!(
            colors.background,
            Palette::MOCHA.get(PaletteColor::Crust)
        );
    }
}
