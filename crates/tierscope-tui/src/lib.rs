//! Terminal chart for tierscope
//!
//! Renders the tier counts of a classified log as a bar chart and blocks
//! until the user closes it.

pub mod app;
pub mod config;
pub mod tui;
pub mod ui;

use std::io;
use std::time::Duration;

pub use app::{Action, ChartState};
pub use config::{KeyBinding, KeyBindings, KeyContext};
pub use tui::{Event, EventHandler, Tui};
pub use ui::components::{ChartFooter, HelpOverlay};
pub use ui::screens::{CHART_TITLE, TierChartScreen};
pub use ui::{Layout, Theme};

use tierscope_logs::TierCounts;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Show the tier chart full-screen until the user closes it
pub fn show_tier_chart(counts: &TierCounts) -> io::Result<()> {
    let mut tui = Tui::new()?;
    let result = run_chart(&mut tui, ChartState::new(counts.clone()));
    tui.restore()?;
    result
}

fn run_chart(tui: &mut Tui, mut state: ChartState) -> io::Result<()> {
    let events = EventHandler::new(TICK_RATE);
    let keybindings = KeyBindings::new();

    tui.draw(|frame| TierChartScreen::render(frame, &state))?;

    while !state.should_quit {
        let action = match events.next()? {
            Event::Key(key) => keybindings.get_action(KeyContext::Chart, &key),
            Event::Resize(_, _) => Some(Action::Render),
            Event::Tick => None,
        };

        let Some(action) = action else {
            continue;
        };
        tracing::trace!(?action, "chart action");

        if state.apply(&action) {
            tui.draw(|frame| TierChartScreen::render(frame, &state))?;
        }
    }

    Ok(())
}
