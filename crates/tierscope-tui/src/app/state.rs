use tierscope_logs::TierCounts;

use crate::app::Action;

/// State of the chart viewer
#[derive(Debug)]
pub struct ChartState {
    /// Counts being charted
    pub counts: TierCounts,

    /// Show the summary panel next to the chart
    pub show_summary: bool,

    /// Help overlay visible
    pub help_visible: bool,

    /// Set once the user asks to close the chart
    pub should_quit: bool,
}

impl ChartState {
    pub fn new(counts: TierCounts) -> Self {
        Self {
            counts,
            show_summary: true,
            help_visible: false,
            should_quit: false,
        }
    }

    /// Apply an action. Returns whether the screen needs redrawing.
    pub fn apply(&mut self, action: &Action) -> bool {
        match action {
            Action::Quit => {
                // Esc and q first close the help overlay
                if self.help_visible {
                    self.help_visible = false;
                } else {
                    self.should_quit = true;
                }
            }
            Action::ToggleHelp => self.help_visible = !self.help_visible,
            Action::ToggleSummary => self.show_summary = !self.show_summary,
            Action::Render => {}
        }
        !self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_closes_help_first() {
        let mut state = ChartState::new(TierCounts::default());
        state.apply(&Action::ToggleHelp);
        assert!(state.help_visible);

        assert!(state.apply(&Action::Quit));
        assert!(!state.help_visible);
        assert!(!state.should_quit);

        assert!(!state.apply(&Action::Quit));
        assert!(state.should_quit);
    }

    #[test]
    fn test_toggle_summary() {
        let mut state = ChartState::new(TierCounts::default());
        assert!(state.show_summary);
        state.apply(&Action::ToggleSummary);
        assert!(!state.show_summary);
    }
}
