//! GUI implementation with egui/eframe
//!
//! This module provides the desktop user interface for StressCheck using the
//! eframe framework.

mod app;
mod components;
pub mod state;
mod theme;

pub use app::StressCheckApp;
pub use state::{AppState, AssessmentPhase};
pub use theme::Theme;

use crate::config::Config;

/// Run the StressCheck application
pub fn run(config: Config) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([760.0, 520.0])
            .with_title("StressCheck"),
        ..Default::default()
    };

    eframe::run_native(
        "StressCheck",
        options,
        Box::new(|cc| Ok(Box::new(StressCheckApp::new(cc, config)))),
    )
}
