use crate::shell::ReaderApp;
use eframe::egui;

/// `current / total`, one-based, or dashes when nothing is loaded.
pub(crate) fn page_label(current_index: usize, page_count: usize) -> String {
    if page_count > 0 {
        format!("{} / {}", current_index + 1, page_count)
    } else {
        "— / —".to_string()
    }
}

impl ReaderApp {
    /// Central area: page navigation and the current page.
    pub(crate) fn draw_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.surface.is_loaded() {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open a PDF to get started");
                });
                return;
            }

            ui.horizontal(|ui| {
                let count = self.surface.page_count();
                let index = self.surface.current_index();

                if ui.add_enabled(index > 0, egui::Button::new("◀")).clicked() {
                    self.surface.previous();
                }
                ui.label(page_label(index, count));
                if ui.add_enabled(index + 1 < count, egui::Button::new("▶")).clicked() {
                    self.surface.next();
                }

                if let Some(name) = self.surface.source_path().and_then(|path| path.file_name()) {
                    ui.separator();
                    ui.weak(name.to_string_lossy().into_owned());
                }
            });
            ui.separator();

            egui::ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
                let Some(texture) = self.surface.current_page() else {
                    ui.weak("This document has no pages");
                    return;
                };

                // Pages are rendered at a fixed resolution; center when smaller
                // than the viewport.
                let size = texture.size_vec2();
                let available = ui.available_size();
                let padding_x = ((available.x - size.x) / 2.0).max(0.0);

                ui.horizontal(|ui| {
                    ui.add_space(padding_x);
                    ui.image(texture);
                });
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_one_based() {
        assert_eq!(page_label(0, 3), "1 / 3");
        assert_eq!(page_label(2, 3), "3 / 3");
    }

    #[test]
    fn label_without_pages_shows_dashes() {
        assert_eq!(page_label(0, 0), "— / —");
    }
}
