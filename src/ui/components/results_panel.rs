//! Results card: renders the stored verdict, otherwise a placeholder.

use egui::{self, RichText};
use serde_json::Value;

use crate::ui::state::AppState;
use crate::ui::theme::Theme;

pub struct ResultsPanel<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.label(
                    RichText::new("Results")
                        .size(18.0)
                        .strong()
                        .color(self.theme.text_primary),
                );
                ui.add_space(self.theme.spacing_sm);

                match &self.state.result {
                    Some(outcome) => self.show_outcome(ui, outcome),
                    None => {
                        ui.label(
                            RichText::new("Results will appear here after analysis.")
                                .color(self.theme.text_muted),
                        );
                    }
                }
            });
    }

    fn show_outcome(&self, ui: &mut egui::Ui, outcome: &crate::assessment::AnalysisOutcome) {
        let result = &outcome.result;

        if let Some(level) = result.stress_level() {
            let color = match level.to_lowercase().as_str() {
                "low" => self.theme.success,
                "moderate" => self.theme.warning,
                "high" => self.theme.error,
                _ => self.theme.text_primary,
            };
            ui.label(
                RichText::new(format!("Stress level: {level}"))
                    .size(20.0)
                    .strong()
                    .color(color),
            );
        }

        if let Some(message) = &result.message {
            ui.label(RichText::new(message).color(self.theme.text_secondary));
        }

        ui.label(
            RichText::new(format!(
                "Analyzed at {}",
                outcome.received_at.format("%Y-%m-%d %H:%M:%S UTC")
            ))
            .size(11.0)
            .color(self.theme.text_muted),
        );

        ui.add_space(self.theme.spacing_sm);

        // Scalar backend fields as a key/value grid; the schema beyond
        // `success` is owned by the backend, so render it uninterpreted.
        let scalars: Vec<(&String, &Value)> = result
            .extra
            .iter()
            .filter(|(_, v)| !v.is_object() && !v.is_array())
            .collect();
        if !scalars.is_empty() {
            egui::Grid::new("result_fields")
                .num_columns(2)
                .spacing([self.theme.spacing, 4.0])
                .show(ui, |ui| {
                    for (key, value) in scalars {
                        ui.label(
                            RichText::new(key)
                                .size(12.0)
                                .color(self.theme.text_muted),
                        );
                        ui.label(
                            RichText::new(display_value(value))
                                .size(12.0)
                                .family(egui::FontFamily::Monospace)
                                .color(self.theme.text_secondary),
                        );
                        ui.end_row();
                    }
                });
        }

        egui::CollapsingHeader::new("Raw response")
            .default_open(false)
            .show(ui, |ui| {
                let raw = serde_json::to_string_pretty(result)
                    .unwrap_or_else(|_| "<unrenderable>".to_string());
                ui.label(
                    RichText::new(raw)
                        .family(egui::FontFamily::Monospace)
                        .size(11.0),
                );
            });
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
