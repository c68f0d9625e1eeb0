use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Layout helper for consistent screen layouts
pub struct Layout;

impl Layout {
    /// Create the main layout with header, content, and status bar
    pub fn main(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(1),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2])
    }

    /// Split content into the chart and an optional summary sidebar
    pub fn chart(area: Rect, show_summary: bool) -> (Rect, Option<Rect>) {
        if show_summary {
            let chunks = RatatuiLayout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Min(1),     // Chart
                    Constraint::Length(28), // Summary sidebar
                ])
                .split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        }
    }

    /// Centered popup of at most `width` x `height`
    pub fn popup(area: Rect, width: u16, height: u16) -> Rect {
        let width = width.min(area.width.saturating_sub(4));
        let height = height.min(area.height.saturating_sub(4));
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        Rect::new(x, y, width, height)
    }

    /// Bar width that fits `bars` bars separated by `gap` columns into `width`
    pub fn bar_width(width: u16, bars: u16, gap: u16) -> u16 {
        if bars == 0 {
            return 1;
        }
        let usable = width.saturating_sub(gap * bars.saturating_sub(1));
        (usable / bars).clamp(1, 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width() {
        assert_eq!(Layout::bar_width(80, 3, 4), 24);
        assert_eq!(Layout::bar_width(30, 3, 3), 8);
        assert_eq!(Layout::bar_width(2, 3, 3), 1);
    }

    #[test]
    fn test_chart_layout() {
        let area = Rect::new(0, 0, 100, 20);
        let (chart, summary) = Layout::chart(area, true);
        assert_eq!(summary.map(|s| s.width), Some(28));
        assert_eq!(chart.width, 72);

        let (chart, summary) = Layout::chart(area, false);
        assert!(summary.is_none());
        assert_eq!(chart, area);
    }
}
