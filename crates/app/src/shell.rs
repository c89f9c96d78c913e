use crate::dialogs::{ColorPickerState, ErrorDialogState};
use crate::toolbar::ToolbarAction;
use eframe::egui;
use pdf_engine::{PdfEngine, RgbaImage};
use std::path::Path;
use viewer_core::{
    highlight_message, open_document, DocumentKind, HighlightColor, LibraryTree, OpenOutcome,
    ShellConfig, ViewerSurface, EPUB_PENDING_MESSAGE, SETTINGS_MESSAGE,
};

/// Tabs of the right-hand panel.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum NotesTab {
    #[default]
    Highlights,
}

impl NotesTab {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            NotesTab::Highlights => "Highlights & Notes",
        }
    }
}

pub(crate) struct ReaderApp {
    pub(crate) config: ShellConfig,
    engine: Box<dyn PdfEngine>,
    pub(crate) surface: ViewerSurface<egui::TextureHandle>,
    pub(crate) library: LibraryTree,
    pub(crate) notes_tab: NotesTab,

    // Dialogs
    pub(crate) error_dialog: Option<ErrorDialogState>,
    pub(crate) color_picker: Option<ColorPickerState>,
}

impl ReaderApp {
    pub(crate) fn new(
        _cc: &eframe::CreationContext<'_>,
        config: ShellConfig,
        engine: Box<dyn PdfEngine>,
    ) -> Self {
        Self::with_engine(config, engine)
    }

    fn with_engine(config: ShellConfig, engine: Box<dyn PdfEngine>) -> Self {
        Self {
            surface: ViewerSurface::with_render_scale(config.render_scale),
            config,
            engine,
            library: LibraryTree::placeholder(),
            notes_tab: NotesTab::default(),
            error_dialog: None,
            color_picker: None,
        }
    }

    pub(crate) fn dispatch(&mut self, ctx: &egui::Context, action: ToolbarAction) {
        match action {
            ToolbarAction::Open => self.open_document(ctx),
            ToolbarAction::Highlight => self.highlight_text(),
            ToolbarAction::Settings => self.open_settings(),
        }
    }

    fn open_document(&mut self, ctx: &egui::Context) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Open Document")
            .add_filter(DocumentKind::FILTER_NAME, &DocumentKind::filter_extensions())
            .add_filter("All Files", &["*"])
            .pick_file()
        else {
            return;
        };

        self.open_path(ctx, &path);
    }

    fn open_path(&mut self, ctx: &egui::Context, path: &Path) {
        let result = open_document(&mut self.surface, self.engine.as_mut(), path, |index, page| {
            upload_page(ctx, index, &page)
        });

        match result {
            Ok(OpenOutcome::Loaded { .. }) | Ok(OpenOutcome::Ignored) => {}
            Ok(OpenOutcome::EpubPending) => println!("{EPUB_PENDING_MESSAGE}"),
            Err(err) => {
                log::error!("{err}");
                self.error_dialog = Some(ErrorDialogState::new("Could not open document", err));
            }
        }
    }

    fn highlight_text(&mut self) {
        self.color_picker = Some(ColorPickerState::new(self.config.highlight_default));
    }

    pub(crate) fn apply_highlight(&mut self, color: HighlightColor) {
        println!("{}", highlight_message(color));
    }

    fn open_settings(&mut self) {
        println!("{SETTINGS_MESSAGE}");
    }

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if self.error_dialog.is_some() || self.color_picker.is_some() {
            return;
        }

        let (forward, back) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::PageDown),
                i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::PageUp),
            )
        });

        if forward {
            self.surface.next();
        }
        if back {
            self.surface.previous();
        }
    }
}

/// Upload a rendered page as a texture.
pub(crate) fn upload_page(
    ctx: &egui::Context,
    index: usize,
    page: &RgbaImage,
) -> egui::TextureHandle {
    ctx.load_texture(format!("page_{index}"), to_color_image(page), egui::TextureOptions::LINEAR)
}

pub(crate) fn to_color_image(page: &RgbaImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [page.width() as usize, page.height() as usize],
        page.as_raw(),
    )
}

impl eframe::App for ReaderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        if let Some(action) = self.draw_toolbar(ctx) {
            self.dispatch(ctx, action);
        }

        self.draw_sidebar(ctx);
        self.draw_notes_panel(ctx);
        self.draw_canvas(ctx);
        self.draw_error_dialog(ctx);
        self.draw_color_picker(ctx);

        if self.surface.take_redraw_request() {
            ctx.request_repaint();
        }
    }
}
