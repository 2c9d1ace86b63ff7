//! Voice recording card: upload, local preview, clear

use egui::{self, RichText, Vec2};

use crate::assessment::UploadedFile;
use crate::audio::PreviewState;
use crate::ui::state::AppState;
use crate::ui::theme::Theme;

/// Card for the optional voice clip with a local preview player
pub struct VoiceCard<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> VoiceCard<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Voice Recording")
                            .size(18.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    if self.state.input.voice.is_some() {
                        ui.label(RichText::new("✔").color(self.theme.success));
                    }
                });
                ui.label(
                    RichText::new("Optional, but recommended for better accuracy")
                        .size(12.0)
                        .color(self.theme.text_muted),
                );
                ui.add_space(self.theme.spacing_sm);

                let pick_btn = ui.button("Choose audio file…");
                pick_btn.widget_info(|| {
                    egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Choose voice clip")
                });
                if pick_btn.clicked() {
                    let picked = rfd::FileDialog::new()
                        .add_filter("Audio", &["wav", "mp3", "m4a", "webm"])
                        .pick_file();
                    if let Some(path) = picked {
                        match UploadedFile::from_path(&path) {
                            Ok(file) => self.state.set_voice(file),
                            Err(err) => self.state.alert = Some(err.user_message()),
                        }
                    }
                }

                if let Some(clip) = self.state.input.voice.clone() {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("✔").color(self.theme.success));
                        ui.label(
                            RichText::new(format!("{} uploaded", clip.name))
                                .color(self.theme.success),
                        );
                    });

                    ui.add_space(self.theme.spacing_sm);
                    self.show_preview_controls(ui, &clip);
                    ui.label(
                        RichText::new("Play the clip to verify it before submitting")
                            .size(11.0)
                            .color(self.theme.text_muted),
                    );
                }
            });
    }

    fn show_preview_controls(&mut self, ui: &mut egui::Ui, clip: &UploadedFile) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing = Vec2::splat(4.0);

            let (icon, tooltip) = match self.state.preview.state() {
                PreviewState::Playing => ("⏸", "Pause"),
                _ => ("▶", "Play"),
            };
            let play_btn = ui.add(
                egui::Button::new(RichText::new(icon).size(18.0)).min_size(Vec2::splat(32.0)),
            );
            if play_btn.clicked() {
                match self.state.preview.state() {
                    PreviewState::Stopped => {
                        if let Err(err) = self.state.preview.play(clip) {
                            self.state.alert = Some(err.user_message());
                        }
                    }
                    _ => self.state.preview.toggle_pause(),
                }
            }
            play_btn.on_hover_text(tooltip);

            let stop_btn = ui.add_enabled(
                self.state.preview.state() != PreviewState::Stopped,
                egui::Button::new(RichText::new("⏹").size(18.0)).min_size(Vec2::splat(32.0)),
            );
            if stop_btn.clicked() {
                self.state.preview.stop();
            }

            let clear_btn =
                ui.add(egui::Button::new(RichText::new("✖").size(14.0).color(self.theme.error)));
            clear_btn.widget_info(|| {
                egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Clear voice clip")
            });
            if clear_btn.clicked() {
                self.state.clear_voice();
            }
        });
    }
}
