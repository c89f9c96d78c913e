use crate::shell::ReaderApp;
use eframe::egui;
use viewer_core::NodeId;

impl ReaderApp {
    /// Left panel: the library tree.
    pub(crate) fn draw_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("library")
            .default_width(self.config.sidebar_width)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let root = self.library.root();
                    self.draw_library_node(ui, root);
                });
            });
    }

    fn draw_library_node(&mut self, ui: &mut egui::Ui, id: NodeId) {
        let Some(label) = self.library.label(id).map(str::to_owned) else {
            return;
        };
        let children = self.library.children(id).to_vec();

        if children.is_empty() {
            let selected = self.library.selected() == Some(id);
            let response = ui.add(egui::SelectableLabel::new(
                selected,
                egui::RichText::new(label).size(14.0),
            ));
            if response.clicked() {
                self.library.select(id);
            }
            return;
        }

        egui::CollapsingHeader::new(egui::RichText::new(label).size(14.0))
            .id_salt(("library", id))
            .default_open(true)
            .show(ui, |ui| {
                for child in children {
                    self.draw_library_node(ui, child);
                }
            });
    }

    /// Right panel: the highlights tab. Highlights are never stored, so the
    /// list stays empty.
    pub(crate) fn draw_notes_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("notes")
            .default_width(self.config.notes_panel_width)
            .resizable(true)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let tab = self.notes_tab;
                    ui.selectable_value(&mut self.notes_tab, tab, tab.label());
                });
                ui.separator();

                egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                    ui.weak("No highlights yet");
                });
            });
    }
}
