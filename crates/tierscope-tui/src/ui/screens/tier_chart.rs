use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use tierscope_logs::TierCounts;
use tierscope_types::Tier;

use crate::app::ChartState;
use crate::ui::components::{ChartFooter, HelpOverlay};
use crate::ui::{Layout, Theme};

pub const CHART_TITLE: &str = "Classificação de Eventos nos Logs";
const X_LABEL: &str = "Classificação";
const Y_LABEL: &str = "Quantidade";
const BAR_GAP: u16 = 3;

/// Count plot of tiers
pub struct TierChartScreen;

impl TierChartScreen {
    pub fn render(frame: &mut Frame, state: &ChartState) {
        let (header, content, footer) = Layout::main(frame.area());

        Self::render_header(frame, header, &state.counts);

        let (chart_area, summary_area) = Layout::chart(content, state.show_summary);
        Self::render_chart(frame, chart_area, &state.counts);
        if let Some(area) = summary_area {
            Self::render_summary(frame, area, &state.counts);
        }

        frame.render_widget(ChartFooter::new(state.counts.total()), footer);

        if state.help_visible {
            HelpOverlay::render(frame);
        }
    }

    fn render_header(frame: &mut Frame, area: Rect, counts: &TierCounts) {
        let header = Paragraph::new(Line::from(vec![
            Span::styled(CHART_TITLE, Theme::title()),
            Span::styled(format!("  ({} eventos)", counts.total()), Theme::text_dim()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );
        frame.render_widget(header, area);
    }

    fn render_chart(frame: &mut Frame, area: Rect, counts: &TierCounts) {
        let bars: Vec<Bar> = counts
            .pairs()
            .into_iter()
            .map(|(tier, count)| {
                Bar::default()
                    .label(Line::from(tier.label()))
                    .value(count as u64)
                    .style(Theme::bar(tier))
                    .value_style(Theme::bar_value(tier))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::chart_border())
            .title(Line::from(format!(" {Y_LABEL} ")).left_aligned())
            .title_bottom(Line::from(format!(" {X_LABEL} ")).centered());
        let inner_width = block.inner(area).width;

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(Layout::bar_width(inner_width, bars.len() as u16, BAR_GAP))
            .bar_gap(BAR_GAP)
            .max(counts.max().max(1) as u64);

        frame.render_widget(chart, area);
    }

    fn render_summary(frame: &mut Frame, area: Rect, counts: &TierCounts) {
        let total = counts.total();
        let mut lines: Vec<Line> = counts
            .pairs()
            .into_iter()
            .map(|(tier, count)| Self::summary_line(tier, count, total))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{:<10}{total:>6}", "Total"),
            Theme::text(),
        )));

        let summary = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(Span::styled(" Resumo ", Theme::title())),
        );
        frame.render_widget(summary, area);
    }

    fn summary_line(tier: Tier, count: usize, total: usize) -> Line<'static> {
        let share = if total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / total as f64
        };
        Line::from(vec![
            Span::styled(format!("{:<10}", tier.label()), Theme::tier_label(tier)),
            Span::styled(format!("{count:>6}"), Theme::text()),
            Span::styled(format!(" {share:>5.1}%"), Theme::text_dim()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_text(state: &ChartState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal
            .draw(|frame| TierChartScreen::render(frame, state))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn counts() -> TierCounts {
        TierCounts {
            normal: 6,
            suspicious: 2,
            critical: 2,
        }
    }

    #[test]
    fn test_chart_shows_tiers_and_labels() {
        let text = render_to_text(&ChartState::new(counts()));

        assert!(text.contains(CHART_TITLE));
        assert!(text.contains("Normal"));
        assert!(text.contains("Suspeito"));
        assert!(text.contains("Crítico"));
        assert!(text.contains(Y_LABEL));
        assert!(text.contains(X_LABEL));
        assert!(text.contains("Resumo"));
        assert!(text.contains("60.0%"));
    }

    #[test]
    fn test_chart_without_summary_and_with_help() {
        let mut state = ChartState::new(counts());
        state.show_summary = false;
        state.help_visible = true;

        let text = render_to_text(&state);
        assert!(!text.contains("Total"));
        assert!(text.contains("Atalhos"));
    }

    #[test]
    fn test_empty_counts_render() {
        let text = render_to_text(&ChartState::new(TierCounts::default()));
        assert!(text.contains("0 eventos"));
    }
}
