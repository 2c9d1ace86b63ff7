//! Physiological data upload card

use egui::{self, RichText};

use crate::assessment::UploadedFile;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;

/// Card for picking the physiological signal file (CSV/JSON)
pub struct PhysiologicalCard<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> PhysiologicalCard<'a> {
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
                        RichText::new("Physiological Signal")
                            .size(18.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    if self.state.input.physiological.is_some() {
                        ui.label(RichText::new("✔").color(self.theme.success));
                    }
                });
                ui.label(
                    RichText::new("Upload physiological data as CSV or JSON")
                        .size(12.0)
                        .color(self.theme.text_muted),
                );
                ui.add_space(self.theme.spacing_sm);

                let pick_btn = ui.button("Choose file…");
                pick_btn.widget_info(|| {
                    egui::WidgetInfo::labeled(
                        egui::WidgetType::Button,
                        true,
                        "Choose physiological file",
                    )
                });
                if pick_btn.clicked() {
                    let picked = rfd::FileDialog::new()
                        .add_filter("Physiological data", &["csv", "json"])
                        .pick_file();
                    if let Some(path) = picked {
                        match UploadedFile::from_path(&path) {
                            Ok(file) => self.state.set_physiological(file),
                            Err(err) => self.state.alert = Some(err.user_message()),
                        }
                    }
                }

                if let Some(file) = &self.state.input.physiological {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("✔").color(self.theme.success));
                        ui.label(
                            RichText::new(format!("{} uploaded", file.name))
                                .color(self.theme.success),
                        );
                    });
                }
            });
    }
}
