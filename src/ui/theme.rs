//! Palette and the small design system used by the preview.
//!
//! Typography, buttons and tags are plain functions over closed option
//! enums, mirroring the site's presentational components.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

pub const BRAND_PRIMARY: Color = Color::Rgb(0x1d, 0x4e, 0xd8);
pub const BRAND_ACCENT: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Colour role of a piece of text or a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Accent,
    Neutral,
    Muted,
    Danger,
}

/// Typographic scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextVariant {
    /// Hero and page titles.
    Display,
    Heading,
    Body,
    Caption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagShape {
    Pill,
    Square,
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Primary => BRAND_PRIMARY,
        Tone::Accent => BRAND_ACCENT,
        Tone::Neutral => HEADER_TEXT,
        Tone::Muted => MUTED_TEXT,
        Tone::Danger => STATUS_ERROR,
    }
}

pub fn text_style(variant: TextVariant, tone: Tone) -> Style {
    let style = Style::default().fg(tone_color(tone));
    match variant {
        TextVariant::Display => style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        TextVariant::Heading => style.add_modifier(Modifier::BOLD),
        TextVariant::Body => style,
        TextVariant::Caption => style.add_modifier(Modifier::DIM),
    }
}

pub fn text<'a>(content: impl Into<String>, variant: TextVariant, tone: Tone) -> Span<'a> {
    Span::styled(content.into(), text_style(variant, tone))
}

/// Filled button label; large buttons get extra horizontal padding.
pub fn button<'a>(label: &str, tone: Tone, size: ButtonSize) -> Span<'a> {
    let padding = match size {
        ButtonSize::Small => 1,
        ButtonSize::Large => 3,
    };
    let pad = " ".repeat(padding);
    Span::styled(
        format!("{pad}{label}{pad}"),
        Style::default()
            .fg(HEADER_TEXT)
            .bg(tone_color(tone))
            .add_modifier(Modifier::BOLD),
    )
}

pub fn tag<'a>(label: &str, tone: Tone, shape: TagShape) -> Span<'a> {
    let (open, close) = match shape {
        TagShape::Pill => ('(', ')'),
        TagShape::Square => ('[', ']'),
    };
    Span::styled(
        format!("{open}{label}{close}"),
        Style::default().fg(tone_color(tone)),
    )
}
