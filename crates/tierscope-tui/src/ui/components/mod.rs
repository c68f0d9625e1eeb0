mod footer;
mod help_overlay;

pub use footer::ChartFooter;
pub use help_overlay::HelpOverlay;
