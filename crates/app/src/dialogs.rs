use crate::shell::ReaderApp;
use eframe::egui;
use std::fmt::Display;
use viewer_core::HighlightColor;

/// Error dialog state
pub(crate) struct ErrorDialogState {
    pub(crate) title: String,
    pub(crate) message: String,
}

impl ErrorDialogState {
    pub(crate) fn new(title: impl Into<String>, message: impl Display) -> Self {
        Self { title: title.into(), message: message.to_string() }
    }
}

/// Highlight colour picker state
pub(crate) struct ColorPickerState {
    color: egui::Color32,
}

impl ColorPickerState {
    pub(crate) fn new(initial: HighlightColor) -> Self {
        Self { color: egui::Color32::from_rgb(initial.r, initial.g, initial.b) }
    }

    pub(crate) fn selected(&self) -> HighlightColor {
        HighlightColor::rgb(self.color.r(), self.color.g(), self.color.b())
    }
}

impl ReaderApp {
    pub(crate) fn draw_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(error) = &self.error_dialog else {
            return;
        };

        let mut should_close = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        egui::Window::new(format!("❌ {}", error.title))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(&error.message);
                ui.add_space(12.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    if ui.button("OK").clicked() {
                        should_close = true;
                    }
                });
            });

        if should_close {
            self.error_dialog = None;
        }
    }

    pub(crate) fn draw_color_picker(&mut self, ctx: &egui::Context) {
        let Some(picker) = &mut self.color_picker else {
            return;
        };

        let mut should_close = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        let mut confirmed = false;

        egui::Window::new("Choose Highlight Color")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::color_picker::color_picker_color32(
                    ui,
                    &mut picker.color,
                    egui::color_picker::Alpha::Opaque,
                );
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        should_close = true;
                    }
                    if ui.button("OK").clicked() {
                        confirmed = true;
                        should_close = true;
                    }
                });
            });

        if should_close {
            if let Some(picker) = self.color_picker.take() {
                if confirmed {
                    self.apply_highlight(picker.selected());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_round_trips_initial_color() {
        let picker = ColorPickerState::new(HighlightColor::rgb(12, 200, 7));
        assert_eq!(picker.selected(), HighlightColor::rgb(12, 200, 7));
    }

    #[test]
    fn error_dialog_renders_message() {
        let dialog = ErrorDialogState::new("Could not open document", "boom");
        assert_eq!(dialog.title, "Could not open document");
        assert_eq!(dialog.message, "boom");
    }
}
