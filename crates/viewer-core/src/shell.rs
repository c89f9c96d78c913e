//! Toolbar action dispatch.
//!
//! The shell owns the dialogs; these functions decide what a chosen path or
//! colour does to the viewer surface.

use crate::error::ViewerResult;
use crate::highlight::HighlightColor;
use crate::kind::DocumentKind;
use crate::surface::ViewerSurface;
use pdf_engine::{PdfEngine, RgbaImage};
use std::path::Path;

pub const EPUB_PENDING_MESSAGE: &str = "Loading EPUB...";
pub const SETTINGS_MESSAGE: &str = "Opening settings...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A PDF replaced the surface's document.
    Loaded { page_count: usize },
    /// EPUB was chosen. There is no EPUB renderer; the surface is untouched.
    EpubPending,
    /// Unrecognised extension; the surface is untouched.
    Ignored,
}

/// Route a path returned by the open dialog.
pub fn open_document<P, E, F>(
    surface: &mut ViewerSurface<P>,
    engine: &mut E,
    path: &Path,
    convert: F,
) -> ViewerResult<OpenOutcome>
where
    E: PdfEngine + ?Sized,
    F: FnMut(usize, RgbaImage) -> P,
{
    match DocumentKind::from_path(path) {
        Some(DocumentKind::Pdf) => {
            let page_count = surface.load_with(engine, path, convert)?;
            Ok(OpenOutcome::Loaded { page_count })
        }
        Some(DocumentKind::Epub) => {
            log::info!("EPUB selected, no renderer available: {}", path.display());
            Ok(OpenOutcome::EpubPending)
        }
        None => {
            log::debug!("ignoring unsupported file: {}", path.display());
            Ok(OpenOutcome::Ignored)
        }
    }
}

pub fn highlight_message(color: HighlightColor) -> String {
    format!("Highlighting text with color: {}", color.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdf_engine::{testing::sample_pdf, LopdfEngine};
    use std::fs;

    #[test]
    fn pdf_path_loads_into_surface() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = dir.path().join("three.pdf");
        fs::write(&path, sample_pdf(3)).expect("fixture should be written");

        let mut surface: ViewerSurface = ViewerSurface::new();
        let outcome = open_document(&mut surface, &mut LopdfEngine::new(), &path, |_, page| page)
            .expect("open should succeed");

        assert_eq!(outcome, OpenOutcome::Loaded { page_count: 3 });
        assert_eq!(surface.page_count(), 3);
    }

    #[test]
    fn highlight_message_uses_hex_name() {
        assert_eq!(
            highlight_message(HighlightColor::YELLOW),
            "Highlighting text with color: #ffff00"
        );
    }
}
