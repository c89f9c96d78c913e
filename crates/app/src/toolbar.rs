use crate::shell::ReaderApp;
use eframe::egui;

const TOOLBAR_FILL: egui::Color32 = egui::Color32::from_rgb(0x33, 0x33, 0x33);
const BUTTON_FILL: egui::Color32 = egui::Color32::from_rgb(0x44, 0x44, 0x44);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ToolbarAction {
    Open,
    Highlight,
    Settings,
}

impl ToolbarAction {
    pub(crate) const ALL: [ToolbarAction; 3] =
        [ToolbarAction::Open, ToolbarAction::Highlight, ToolbarAction::Settings];

    pub(crate) fn label(&self) -> &'static str {
        match self {
            ToolbarAction::Open => "📂 Open",
            ToolbarAction::Highlight => "🖍 Highlight",
            ToolbarAction::Settings => "⚙ Settings",
        }
    }
}

impl ReaderApp {
    /// Draws the fixed top toolbar and returns the action clicked this frame.
    pub(crate) fn draw_toolbar(&mut self, ctx: &egui::Context) -> Option<ToolbarAction> {
        let mut clicked = None;

        egui::TopBottomPanel::top("toolbar")
            .resizable(false)
            .frame(egui::Frame::NONE.fill(TOOLBAR_FILL).inner_margin(5.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = 5.0;

                    for action in ToolbarAction::ALL {
                        let button = egui::Button::new(
                            egui::RichText::new(action.label()).color(egui::Color32::WHITE),
                        )
                        .fill(BUTTON_FILL);

                        if ui.add(button).clicked() {
                            clicked = Some(action);
                        }
                    }
                });
            });

        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolbar_order_is_open_highlight_settings() {
        let labels: Vec<_> = ToolbarAction::ALL.iter().map(ToolbarAction::label).collect();
        assert_eq!(labels, ["📂 Open", "🖍 Highlight", "⚙ Settings"]);
    }
}
