//! Pixel geometry for the bar and its default widget sizing.

use serde::{Deserialize, Serialize};

/// Multisample count for the bar window surface.
pub const RENDER_SAMPLES: u32 = 8;

/// Bar and widget dimensions in pixels. All literal, no derived sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Width of the bar window.
    pub bar_width: u32,
    /// Height of the bar window.
    pub bar_height: u32,
    /// Edge length of a square widget box.
    pub default_box_size: u32,
    /// Font size for icon glyphs inside a box.
    pub default_icon_font_size: u32,
    /// Inner padding of widget content areas.
    pub default_content_padding: u32,
    /// Font size for widget text content.
    pub default_content_font_size: u32,
}

impl Layout {
    /// Geometry for the bar on its target display.
    pub const BAR: Self = Self {
        bar_width: 3440,
        bar_height: 45,
        default_box_size: 35,
        default_icon_font_size: 28,
        default_content_padding: 8,
        default_content_font_size: 16,
    };
}

impl Default for Layout {
    fn default() -> Self {
        Self::BAR
    }
}
