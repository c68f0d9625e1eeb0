use ratatui::style::{Color, Modifier, Style};

use tierscope_types::Tier;

/// Styles of the tier chart
pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;
    pub const INK: Color = Color::White;
    pub const MUTED: Color = Color::DarkGray;
    pub const KEY: Color = Color::Yellow;

    pub fn border() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Frame around the chart itself
    pub fn chart_border() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::INK)
    }

    pub fn text_dim() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Bar body in the tier's color
    pub fn bar(tier: Tier) -> Style {
        Style::default().fg(tier.color())
    }

    /// Count printed inside a bar, inverted over the tier color
    pub fn bar_value(tier: Tier) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(tier.color())
            .add_modifier(Modifier::BOLD)
    }

    pub fn tier_label(tier: Tier) -> Style {
        Self::bar(tier).add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Self::INK).bg(Self::MUTED)
    }

    pub fn footer_key() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::KEY)
            .add_modifier(Modifier::BOLD)
    }
}
