//! Integration tests for the full theme table: the properties consumers
//! rely on when painting the bar.

use simbar_theme::{Color, Palette, PaletteColor, Role, SemanticColors, Theme};

#[test]
fn palette_values_are_well_formed_hex() {
    for (name, color) in Palette::MOCHA.entries() {
        let hex = color.to_hex();
        assert!(
            hex.len() == 7 && hex.starts_with('#'),
            "palette entry '{}' has malformed hex: {hex}",
            name.name()
        );
        assert!(
            u32::from_str_radix(&hex[1..], 16).is_ok(),
            "palette entry '{}' is not hex: {hex}",
            name.name()
        );
    }
}

#[test]
fn semantic_roles_resolve_into_palette() {
    let theme = Theme::MOCHA;
    for role in Role::ALL {
        let color = theme.colors.get(role);
        assert!(
            theme.palette.contains(color),
            "role '{}' resolves to {color}, which is not a palette entry",
            role.name()
        );
    }
    // The binding the widgets depend on most.
    assert_eq!(theme.colors.primary, theme.palette.blue);
    assert_eq!(theme.colors.primary.to_hex(), "#89b4fa");
}

#[test]
fn layout_and_typography_literals() {
    let theme = Theme::MOCHA;
    assert_eq!(theme.typography.family, "CodeNewRoman Nerd Font Mono");
    assert_eq!(theme.layout.bar_width, 3440);
    assert_eq!(theme.layout.bar_height, 45);
    assert_eq!(theme.layout.default_box_size, 35);
    assert_eq!(theme.layout.default_icon_font_size, 28);
    assert_eq!(theme.layout.default_content_padding, 8);
    assert_eq!(theme.layout.default_content_font_size, 16);
}

#[test]
fn json_roundtrip_is_lossless() {
    let theme = Theme::MOCHA;
    let json = serde_json::to_string_pretty(&theme).expect("serialize theme");
    let back: Theme = serde_json::from_str(&json).expect("parse theme back");
    assert_eq!(back, theme);
}

#[test]
fn json_uses_source_key_names() {
    let json = serde_json::to_value(Theme::MOCHA).expect("serialize theme");

    let palette = json.get("palette").expect("palette table");
    for name in PaletteColor::ALL {
        assert!(
            palette.get(name.name()).is_some(),
            "missing palette key '{}'",
            name.name()
        );
    }
    assert_eq!(palette["blue"], "#89b4fa");

    let colors = json.get("colors").expect("colors table");
    for role in Role::ALL {
        assert!(
            colors.get(role.name()).is_some(),
            "missing role key '{}'",
            role.name()
        );
    }
    assert_eq!(colors["textSecondary"], "#a6adc8");

    assert_eq!(json["layout"]["barWidth"], 3440);
    assert_eq!(json["typography"]["family"], "CodeNewRoman Nerd Font Mono");
}

#[test]
fn startup_validation_catches_tampered_table() {
    Theme::MOCHA.validate().expect("shipped theme must validate");

    let mut theme = Theme::MOCHA;
    theme.colors.card = Color::new(0xff, 0x00, 0xff);
    let err = theme.validate().unwrap_err().to_string();
    assert!(err.contains("card"), "error should name the role: {err}");
}

#[test]
fn palette_swap_only_touches_bindings() {
    // A future palette swap re-resolves roles without widgets changing.
    let mut latte_ish = Palette::MOCHA;
    latte_ish.blue = Color::new(0x1e, 0x66, 0xf5);
    let colors = SemanticColors::from_palette(&latte_ish);
    assert_eq!(colors.primary, latte_ish.blue);
    assert_eq!(colors.success, latte_ish.green);
}
