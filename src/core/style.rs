//! Per-block style configuration.
//!
//! The recognized keys are a fixed set carried on each block instead of ad
//! hoc inline strings. A theme file in the working directory can override
//! the defaults for every block kind; a missing or unreadable file falls
//! back to the built-in values.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Horizontal alignment for a block's text content.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    pub fn as_ratatui(self) -> ratatui::layout::Alignment {
        match self {
            TextAlign::Left => ratatui::layout::Alignment::Left,
            TextAlign::Center => ratatui::layout::Alignment::Center,
            TextAlign::Right => ratatui::layout::Alignment::Right,
        }
    }
}

/// The enumerated style knobs a block exposes. Colors are hex strings as
/// authored in the page document; spacing values are in character cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub background_color: String,
    pub text_color: String,
    pub padding: u16,
    pub border_radius: u16,
    pub text_align: TextAlign,
    pub gap_between_cards: u16,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            text_color: "#111827".to_string(),
            padding: 1,
            border_radius: 1,
            text_align: TextAlign::Center,
            gap_between_cards: 1,
        }
    }
}

/// Theme file shape: optional per-section overrides applied on top of the
/// built-in defaults when blocks are created.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub section: StyleConfigPatch,
    pub card: StyleConfigPatch,
}

/// Partial style override; only the keys present in the theme file apply.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfigPatch {
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub padding: Option<u16>,
    pub border_radius: Option<u16>,
    pub text_align: Option<TextAlign>,
    pub gap_between_cards: Option<u16>,
}

impl StyleConfigPatch {
    pub fn apply(&self, base: &StyleConfig) -> StyleConfig {
        StyleConfig {
            background_color: self
                .background_color
                .clone()
                .unwrap_or_else(|| base.background_color.clone()),
            text_color: self
                .text_color
                .clone()
                .unwrap_or_else(|| base.text_color.clone()),
            padding: self.padding.unwrap_or(base.padding),
            border_radius: self.border_radius.unwrap_or(base.border_radius),
            text_align: self.text_align.unwrap_or(base.text_align),
            gap_between_cards: self.gap_between_cards.unwrap_or(base.gap_between_cards),
        }
    }
}

/// File name looked up in the working directory.
pub const THEME_FILE: &str = "helpdeck_theme.toml";

/// Default theme file in the current working directory.
pub fn default_theme_path() -> Result<std::path::PathBuf> {
    let dir = std::env::current_dir().context("Failed to get current working directory")?;
    Ok(dir.join(THEME_FILE))
}

/// Theme applied to blocks created in this session.
static ACTIVE_THEME: once_cell::sync::OnceCell<Theme> = once_cell::sync::OnceCell::new();

/// Load and activate the theme file once at startup. A malformed file is
/// reported and ignored; block creation then uses the built-in styles.
pub fn init_theme(path: &Path) {
    let theme = match load_theme(path) {
        Ok(theme) => theme,
        Err(err) => {
            log::warn!("Ignoring theme file: {err}");
            Theme::default()
        }
    };
    ACTIVE_THEME.set(theme).ok();
}

fn active_theme() -> &'static Theme {
    ACTIVE_THEME.get_or_init(Theme::default)
}

/// Section style for newly created blocks: built-in defaults with the
/// active theme's `[section]` overrides applied.
pub fn section_style() -> StyleConfig {
    active_theme().section.apply(&StyleConfig::default())
}

/// Card background for newly created card-based blocks.
pub fn card_background() -> String {
    active_theme()
        .card
        .background_color
        .clone()
        .unwrap_or_else(|| "#ffffff".to_string())
}

/// Load the theme file if present. Absent file is the normal case and yields
/// the default theme; a malformed file is an error the caller may surface.
pub fn load_theme(path: &Path) -> Result<Theme> {
    if !path.exists() {
        log::debug!("No theme file at {path:?}, using built-in styles");
        return Ok(Theme::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read theme from {path:?}"))?;
    let theme: Theme = toml::from_str(&raw).context("Failed to parse theme file")?;
    log::info!("Loaded theme overrides from {path:?}");
    Ok(theme)
}

/// Parse a `#rrggbb` hex color into a terminal color. Anything else (empty
/// fields, named colors the original authored by hand) falls back to the
/// terminal default so rendering never hard-fails on a bad value.
pub fn parse_hex_color(value: &str) -> Option<ratatui::style::Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(ratatui::style::Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_applies_only_present_keys() {
        let base = StyleConfig::default();
        let patch = StyleConfigPatch {
            background_color: Some("#000000".to_string()),
            padding: Some(4),
            ..Default::default()
        };
        let merged = patch.apply(&base);
        assert_eq!(merged.background_color, "#000000");
        assert_eq!(merged.padding, 4);
        assert_eq!(merged.text_color, base.text_color);
        assert_eq!(merged.text_align, base.text_align);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(
            parse_hex_color("#2563eb"),
            Some(ratatui::style::Color::Rgb(0x25, 0x63, 0xeb))
        );
        assert_eq!(parse_hex_color("2563eb"), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn test_theme_parses_from_toml() {
        let theme: Theme = toml::from_str(
            r##"
            [section]
            background_color = "#f8fafc"
            text_align = "Left"

            [card]
            gap_between_cards = 2
            "##,
        )
        .expect("theme should parse");
        assert_eq!(theme.section.background_color.as_deref(), Some("#f8fafc"));
        assert_eq!(theme.section.text_align, Some(TextAlign::Left));
        assert_eq!(theme.card.gap_between_cards, Some(2));
    }
}
