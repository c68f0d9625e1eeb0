use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::Layout;

/// Help overlay showing keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame) {
        let popup_area = Layout::popup(frame.area(), 40, 11);

        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "Atalhos",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Self::key_line("s", "Mostrar/ocultar resumo"),
            Self::key_line("Ctrl+l", "Redesenhar"),
            Self::key_line("?", "Mostrar/ocultar ajuda"),
            Self::key_line("Esc", "Fechar ajuda"),
            Self::key_line("q/Enter", "Fechar gráfico"),
        ];

        let help_widget = Paragraph::new(help_text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(Span::styled(
                    " Ajuda ",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
        );

        frame.render_widget(help_widget, popup_area);
    }

    fn key_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("  {key:>8}"), Style::default().fg(Color::Green)),
            Span::styled(format!("  {desc}"), Style::default().fg(Color::White)),
        ])
    }
}
