//! Color theme and glyphs for the Quadrature TUI.
//!
//! Uses Kanagawa Wave for the chrome by default with an optional high-contrast
//! override. Series keep their own colors so the plot reads the same in both.

use ratatui::style::{Color, Modifier, Style};

use quadrature_types::{Rgb, UiOptions, palette as series_palette};

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const GREEN: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_highlight: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub enabled: Color,
    pub peach: Color,
    high_contrast: bool,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::CYAN,
            enabled: colors::GREEN,
            peach: colors::ORANGE,
            high_contrast: false,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::Gray,
            primary: Color::White,
            accent: Color::Cyan,
            enabled: Color::Green,
            peach: Color::Yellow,
            high_contrast: true,
        }
    }

    /// Terminal color for a series.
    ///
    /// High contrast swaps the plot colors for the nearest named ANSI color,
    /// which every terminal renders legibly on black.
    #[must_use]
    pub fn series(&self, color: Rgb) -> Color {
        if !self.high_contrast {
            let Rgb(r, g, b) = color;
            return Color::Rgb(r, g, b);
        }
        match color {
            series_palette::BASE_LINE => Color::LightBlue,
            series_palette::POINT => Color::Yellow,
            series_palette::SLOPE_BOUNDS => Color::LightRed,
            series_palette::Y_BOUNDS => Color::LightGreen,
            series_palette::X_BOUNDS => Color::Red,
            series_palette::YM_BOUNDS => Color::LightCyan,
            _ => Color::White,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for the control panel.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub selected: &'static str,
    pub checked: &'static str,
    pub unchecked: &'static str,
    pub track: &'static str,
    pub fill: &'static str,
    pub thumb: &'static str,
    pub arrows_horizontal: &'static str,
    pub arrows_vertical: &'static str,
    pub sqrt: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            selected: ">",
            checked: "[x]",
            unchecked: "[ ]",
            track: "-",
            fill: "=",
            thumb: "o",
            arrows_horizontal: "<>",
            arrows_vertical: "^v",
            sqrt: "sqrt",
        }
    } else {
        Glyphs {
            selected: "▸",
            checked: "☑",
            unchecked: "☐",
            track: "─",
            fill: "━",
            thumb: "●",
            arrows_horizontal: "←→",
            arrows_vertical: "↑↓",
            sqrt: "√",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn focused(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.primary)
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn label(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn value(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border(palette: &Palette) -> Style {
        Style::default().fg(palette.bg_border)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }
}
