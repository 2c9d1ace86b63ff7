//! Analysis action card: the run button while editing, live progress while
//! a request is in flight.

use egui::{self, ProgressBar, RichText};

use crate::ui::state::AppState;
use crate::ui::theme::Theme;

pub struct AnalysisPanel<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> AnalysisPanel<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                if self.state.is_submitting() {
                    self.show_progress(ui);
                } else {
                    self.show_run_button(ui);
                }
            });
    }

    fn show_progress(&self, ui: &mut egui::Ui) {
        let Some(progress) = &self.state.progress else {
            return;
        };

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(progress.status_message())
                    .strong()
                    .color(self.theme.text_secondary),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{:.0}%", progress.percent()))
                        .family(egui::FontFamily::Monospace)
                        .color(self.theme.text_secondary),
                );
            });
        });

        ui.add(
            ProgressBar::new(progress.percent() / 100.0)
                .desired_height(10.0)
                .fill(self.theme.primary),
        );

        ui.label(
            RichText::new(format!(
                "Estimated time remaining: {} seconds",
                progress.seconds_remaining()
            ))
            .size(12.0)
            .color(self.theme.text_muted),
        );
    }

    fn show_run_button(&mut self, ui: &mut egui::Ui) {
        let ready = self.state.is_ready();

        let button = egui::Button::new(
            RichText::new("Run AI Stress Analysis")
                .size(17.0)
                .strong(),
        )
        .min_size(egui::Vec2::new(ui.available_width(), 48.0))
        .fill(self.theme.primary)
        .rounding(self.theme.button_rounding);

        let response = ui.add_enabled(ready, button);
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, ready, "Run analysis")
        });
        if response.clicked() {
            self.state.start_analysis();
        }

        if !ready {
            ui.label(
                RichText::new(
                    "Complete the physiological data and questionnaire to enable analysis",
                )
                .size(12.0)
                .color(self.theme.text_muted),
            );
        }
    }
}
