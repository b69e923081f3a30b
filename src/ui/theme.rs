//! Theme management and ANSI escape sequence generation.
//!
//! The pane keeps two color schemes at once, one for light mode and one for
//! dark mode, and the list's dark mode flag picks between them. Themes are
//! TOML documents; the built-in Catppuccin variants are embedded in the
//! binary and custom ones can be loaded from files.
//!
//! # Built-in Themes
//!
//! - `catppuccin-latte`: Light theme (default light)
//! - `catppuccin-mocha`: Dark theme with warm tones (default dark)
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! input_border = "#89b4fa"
//! input_editing_border = "#cba6f7"
//! tab_active_fg = "#1e1e2e"
//! tab_active_bg = "#89b4fa"
//! checkbox_fg = "#a6e3a1"
//! completed_fg = "#6c7086"
//! empty_state_fg = "#89b4fa"
//! ```

use crate::domain::{Result, TodoError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";
pub const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_bg: Option<String>,

    /// Selected row foreground.
    pub selection_fg: String,
    /// Selected row background.
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, ages and other secondary text.
    pub text_dim: String,

    pub border: String,

    /// Input box frame while adding items.
    pub input_border: String,
    /// Input box frame and row marker while editing an item.
    pub input_editing_border: String,

    pub tab_active_fg: String,
    pub tab_active_bg: String,

    /// Checkbox of a completed item.
    pub checkbox_fg: String,
    /// Text of a completed item.
    pub completed_fg: String,

    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name. Returns `None` for unknown names.
    ///
    /// ```rust
    /// use ztodo::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-frappe").unwrap();
    /// assert_eq!(theme.name, "catppuccin-frappe");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Theme`] if the file cannot be read or its content
    /// is not a valid theme document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| TodoError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| TodoError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Parses `"#rrggbb"` (or `"rrggbb"`), falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground color sequence for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn strikethrough() -> &'static str {
        "\u{001b}[9m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default light theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the theme tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_LIGHT_THEME)
            .expect("built-in catppuccin-latte theme should always parse")
    }
}

/// The light and dark themes, selected by the display mode flag.
#[derive(Debug, Clone)]
pub struct ThemePair {
    pub light: Theme,
    pub dark: Theme,
}

impl ThemePair {
    #[must_use]
    pub const fn select(&self, dark_mode: bool) -> &Theme {
        if dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}

impl Default for ThemePair {
    /// # Panics
    ///
    /// Panics if an embedded theme fails to parse.
    fn default() -> Self {
        Self {
            light: Theme::default(),
            dark: Theme::from_name(DEFAULT_DARK_THEME)
                .expect("built-in catppuccin-mocha theme should always parse"),
        }
    }
}
