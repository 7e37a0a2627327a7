//! Font constants for bar widgets.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Typography settings. A single font family; no fallback list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    /// Font family name used by every widget.
    pub family: Cow<'static, str>,
}

impl Typography {
    /// The bar's font.
    pub const DEFAULT: Self = Self {
        family: Cow::Borrowed("CodeNewRoman Nerd Font Mono"),
    };
}

impl Default for Typography {
    fn default() -> Self {
        Self::DEFAULT
    }
}
