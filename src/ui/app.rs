//! Main application struct and eframe integration
//!
//! This module contains the StressCheckApp that implements eframe::App.

use egui::{self, CentralPanel, ProgressBar, RichText, TopBottomPanel};

use crate::api::AnalysisWorker;
use crate::config::Config;
use crate::ui::components::{
    AnalysisPanel, PhysiologicalCard, QuestionnaireCard, ResultsPanel, VoiceCard,
};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;

/// Main StressCheck application
pub struct StressCheckApp {
    /// Application state
    state: AppState,
    /// Visual theme
    theme: Theme,
}

impl StressCheckApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let theme = Theme::light();
        theme.apply(&cc.egui_ctx);

        let mut state = AppState::new();
        match AnalysisWorker::new(&config) {
            Ok(worker) => state.connect_worker(worker),
            Err(err) => {
                tracing::error!(%err, "Failed to start analysis worker");
                state.alert = Some(err.user_message());
            }
        }

        Self { state, theme }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("StressCheck")
                            .size(20.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.label(
                        RichText::new("Multimodal Stress Assessment")
                            .size(14.0)
                            .color(self.theme.text_muted),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let completion = self.state.input.completion_percent();
                        ui.label(
                            RichText::new(format!("{completion}%"))
                                .size(12.0)
                                .family(egui::FontFamily::Monospace)
                                .color(self.theme.text_muted),
                        );
                        ui.add_sized(
                            egui::Vec2::new(160.0, 8.0),
                            ProgressBar::new(completion as f32 / 100.0)
                                .fill(self.theme.secondary),
                        );
                        ui.label(
                            RichText::new("Assessment progress")
                                .size(12.0)
                                .color(self.theme.text_muted),
                        );
                    });
                });

                if !self.state.is_ready() {
                    ui.label(
                        RichText::new(
                            "Complete the physiological data and questionnaire for analysis. \
                             Voice audio is optional but recommended.",
                        )
                        .size(12.0)
                        .color(self.theme.warning),
                    );
                }
            });
    }

    fn show_content(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                ui.columns(2, |columns| {
                    egui::ScrollArea::vertical()
                        .id_salt("inputs")
                        .show(&mut columns[0], |ui| {
                            PhysiologicalCard::new(&mut self.state, &self.theme).show(ui);
                            ui.add_space(self.theme.spacing);
                            VoiceCard::new(&mut self.state, &self.theme).show(ui);
                            ui.add_space(self.theme.spacing);
                            QuestionnaireCard::new(&mut self.state, &self.theme).show(ui);
                        });

                    egui::ScrollArea::vertical()
                        .id_salt("analysis")
                        .show(&mut columns[1], |ui| {
                            AnalysisPanel::new(&mut self.state, &self.theme).show(ui);
                            ui.add_space(self.theme.spacing);
                            ResultsPanel::new(&self.state, &self.theme).show(ui);
                        });
                });
            });
    }

    /// Blocking alert window, shown until dismissed.
    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.state.alert.clone() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(RichText::new(message).color(self.theme.text_primary));
                ui.add_space(self.theme.spacing_sm);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.state.dismiss_alert();
        }
    }
}

impl eframe::App for StressCheckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain worker events and advance the simulated progress
        self.state.poll_events();

        self.show_header(ctx);
        self.show_content(ctx);
        self.show_alert(ctx);

        // Keep animating while a request is in flight or audio is playing
        if self.state.is_submitting()
            || self.state.preview.state() != crate::audio::PreviewState::Stopped
        {
            ctx.request_repaint();
        }
    }
}
