//! Reading-room theme for dramalines
//!
//! Color palette and style helpers for the TUI: warm text on a dark
//! background, with the translation in its own color so revealed lines
//! stand apart from the original.

use ratatui::style::{Color, Modifier, Style};

/// Color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #11131a
    pub const BACKGROUND: Color = Color::Rgb(0x11, 0x13, 0x1a);

    /// Card surface: #1a1d27
    pub const SURFACE: Color = Color::Rgb(0x1a, 0x1d, 0x27);

    /// Text: #e6e2d8 (warm white)
    pub const TEXT: Color = Color::Rgb(0xe6, 0xe2, 0xd8);

    /// Dim: #6b7080
    pub const DIM: Color = Color::Rgb(0x6b, 0x70, 0x80);

    /// Primary: #7ad7c9 (teal)
    pub const PRIMARY: Color = Color::Rgb(0x7a, 0xd7, 0xc9);

    /// Accent: #f2b85c (amber)
    pub const ACCENT: Color = Color::Rgb(0xf2, 0xb8, 0x5c);

    /// Translation: #9cc7ff (soft blue)
    pub const TRANSLATION: Color = Color::Rgb(0x9c, 0xc7, 0xff);

    /// Border: #3a4052
    pub const BORDER: Color = Color::Rgb(0x3a, 0x40, 0x52);

    /// Border when focused
    pub const BORDER_FOCUSED: Color = Self::PRIMARY;

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    /// Default text style
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    /// Section titles and the episode header
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::BORDER_FOCUSED)
            .add_modifier(Modifier::BOLD)
    }

    /// Current value of a selector
    pub fn selector_value() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    /// Arrows around a selector value
    pub fn selector_arrow() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    /// Original-language line
    pub fn original() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    /// Revealed translation
    pub fn translation() -> Style {
        Style::default().fg(Self::TRANSLATION)
    }

    /// Reveal/hide hint
    pub fn hint() -> Style {
        Style::default()
            .fg(Self::DIM)
            .add_modifier(Modifier::ITALIC)
    }

    /// Card body
    pub fn card() -> Style {
        Style::default().bg(Self::SURFACE)
    }

    pub fn keybind() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::SURFACE)
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// COLOR UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Relative luminance of an sRGB color
/// Formula: https://www.w3.org/TR/WCAG20/#relativeluminancedef
pub fn relative_luminance(r: u8, g: u8, b: u8) -> f64 {
    fn channel(c: u8) -> f64 {
        let c = c as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * channel(r) + 0.7152 * channel(g) + 0.0722 * channel(b)
}

/// Contrast ratio between two colors, from 1 (same) to 21 (black/white)
pub fn contrast_ratio(fg: Color, bg: Color) -> Option<f64> {
    let (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) = (fg, bg) else {
        return None;
    };
    let l1 = relative_luminance(r1, g1, b1);
    let l2 = relative_luminance(r2, g2, b2);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    Some((lighter + 0.05) / (darker + 0.05))
}
