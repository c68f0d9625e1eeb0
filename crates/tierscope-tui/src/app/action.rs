/// All possible actions in the chart viewer (command pattern)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    // Navigation
    Quit,

    // UI toggles
    ToggleHelp,
    ToggleSummary,

    // Render request
    Render,
}
