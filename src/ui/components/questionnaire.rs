//! DASS-21 questionnaire card

use egui::{self, RichText};

use crate::assessment::{DASS21_QUESTIONS, MAX_RATING};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;

/// Card presenting the seven stress-subscale statements with 0-3 ratings
pub struct QuestionnaireCard<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> QuestionnaireCard<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("DASS-21 Questionnaire")
                            .size(18.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    if self.state.input.has_answers() {
                        ui.label(RichText::new("✔").color(self.theme.success));
                    }
                });
                ui.label(
                    RichText::new("Rate each statement: 0 = Never, 1 = Sometimes, 2 = Often, 3 = Almost Always")
                        .size(12.0)
                        .color(self.theme.text_muted),
                );
                ui.add_space(self.theme.spacing_sm);

                for (index, question) in DASS21_QUESTIONS.iter().enumerate() {
                    egui::Frame::none()
                        .fill(self.theme.bg_primary)
                        .rounding(self.theme.button_rounding)
                        .inner_margin(self.theme.spacing_sm)
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(format!("{}. {}", index + 1, question))
                                    .color(self.theme.text_secondary),
                            );
                            ui.horizontal(|ui| {
                                for value in 0..=MAX_RATING {
                                    let selected = self.state.input.responses[index] == value;
                                    let label = ui.selectable_label(
                                        selected,
                                        RichText::new(value.to_string()).size(15.0),
                                    );
                                    label.widget_info(|| {
                                        egui::WidgetInfo::labeled(
                                            egui::WidgetType::Button,
                                            true,
                                            format!("Question {} rating {}", index + 1, value),
                                        )
                                    });
                                    if label.clicked() {
                                        self.state.input.set_rating(index, value);
                                    }
                                }
                            });
                        });
                    ui.add_space(self.theme.spacing_sm / 2.0);
                }
            });
    }
}
