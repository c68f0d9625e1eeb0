use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::Theme;

/// Shortcuts listed in the footer, as (key, description)
const HINTS: [(&str, &str); 3] = [("s", "Resumo"), ("?", "Ajuda"), ("q/Enter", "Fechar")];

/// Bottom line of the chart screen: shortcuts on the left, event total on the right
pub struct ChartFooter {
    total: usize,
}

impl ChartFooter {
    pub fn new(total: usize) -> Self {
        Self { total }
    }

    fn shortcuts() -> Line<'static> {
        let mut spans = Vec::with_capacity(HINTS.len() * 2);
        for (key, desc) in HINTS {
            spans.push(Span::styled(format!(" {key} "), Theme::footer_key()));
            spans.push(Span::styled(format!(" {desc}  "), Theme::footer()));
        }
        Line::from(spans)
    }
}

impl Widget for ChartFooter {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Theme::footer());

        let shortcuts = Self::shortcuts();
        let used = shortcuts.width() as u16;
        buf.set_line(area.x, area.y, &shortcuts, area.width);

        // The total is dropped when the terminal is too narrow for both
        let total = format!("{} eventos ", self.total);
        let total_width = total.chars().count() as u16;
        if used + total_width < area.width {
            let x = area.x + area.width - total_width;
            buf.set_string(x, area.y, total, Theme::footer());
        }
    }
}
