//! The viewer surface: the loaded document's page bitmaps and the page cursor.

use crate::error::{ViewerError, ViewerResult};
use pdf_engine::{DocumentHandle, OpenSource, PdfEngine, RenderRequest, RgbaImage};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    Empty,
    Loaded,
}

/// Holds every page of the current document, already rendered, plus the index
/// of the page on display.
///
/// `P` is whatever the host keeps per page: plain bitmaps by default, GPU
/// textures in the desktop shell.
///
/// Invariant: `current < pages.len()` whenever `pages` is non-empty, and
/// `current == 0` otherwise.
#[derive(Debug)]
pub struct ViewerSurface<P = RgbaImage> {
    pages: Vec<P>,
    current: usize,
    state: SurfaceState,
    source: Option<PathBuf>,
    render_scale: f32,
    redraw_requested: bool,
}

impl<P> Default for ViewerSurface<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> ViewerSurface<P> {
    pub fn new() -> Self {
        Self::with_render_scale(1.0)
    }

    /// `scale` is applied to page size in points; 1.0 renders at 72 dpi.
    pub fn with_render_scale(scale: f32) -> Self {
        Self {
            pages: Vec::new(),
            current: 0,
            state: SurfaceState::Empty,
            source: None,
            render_scale: scale,
            redraw_requested: false,
        }
    }

    /// Load `path` through `engine`, rendering every page and mapping each bitmap
    /// through `convert`. Page 0 is shown afterwards.
    ///
    /// The previous document is dropped before the engine is asked for the new
    /// one, so on error the surface is left empty.
    pub fn load_with<E, F>(
        &mut self,
        engine: &mut E,
        path: &Path,
        mut convert: F,
    ) -> ViewerResult<usize>
    where
        E: PdfEngine + ?Sized,
        F: FnMut(usize, RgbaImage) -> P,
    {
        self.clear();

        let handle = engine
            .open(OpenSource::from(path))
            .map_err(|source| ViewerError::Open { path: path.to_path_buf(), source })?;

        let rendered = self.rasterize(engine, handle, &mut convert);

        if let Err(err) = engine.close(handle) {
            log::warn!("closing {} failed: {err}", path.display());
        }

        self.pages = rendered?;
        self.state = SurfaceState::Loaded;
        self.source = Some(path.to_path_buf());

        log::info!(
            "opened {} ({} pages, {} backend)",
            path.display(),
            self.pages.len(),
            engine.name()
        );

        self.show(0);
        Ok(self.pages.len())
    }

    fn rasterize<E, F>(
        &self,
        engine: &E,
        handle: DocumentHandle,
        convert: &mut F,
    ) -> ViewerResult<Vec<P>>
    where
        E: PdfEngine + ?Sized,
        F: FnMut(usize, RgbaImage) -> P,
    {
        let page_count = engine
            .page_count(handle)
            .map_err(|source| ViewerError::Render { page: 0, source })?;

        let mut pages = Vec::with_capacity(page_count as usize);
        for page_index in 0..page_count {
            let bitmap = engine
                .render_page(handle, RenderRequest { page_index, scale: self.render_scale })
                .map_err(|source| ViewerError::Render { page: page_index, source })?;
            pages.push(convert(page_index as usize, bitmap));
        }

        Ok(pages)
    }

    /// Drop the current document.
    pub fn clear(&mut self) {
        self.pages.clear();
        self.current = 0;
        self.state = SurfaceState::Empty;
        self.source = None;
        self.redraw_requested = true;
    }

    /// Show page `index`. Out-of-range indices are ignored.
    ///
    /// Returns whether the index was accepted.
    pub fn show(&mut self, index: usize) -> bool {
        if index >= self.pages.len() {
            return false;
        }

        self.current = index;
        self.redraw_requested = true;
        true
    }

    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.pages.len() {
            log::debug!("next page -> {}", self.current + 1);
            return self.show(self.current + 1);
        }
        false
    }

    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            log::debug!("previous page -> {}", self.current - 1);
            return self.show(self.current - 1);
        }
        false
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_page(&self) -> Option<&P> {
        self.pages.get(self.current)
    }

    pub fn pages(&self) -> &[P] {
        &self.pages
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == SurfaceState::Loaded
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn render_scale(&self) -> f32 {
        self.render_scale
    }

    /// Returns `true` once after any change that needs the canvas repainted.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}

impl ViewerSurface<RgbaImage> {
    /// Load `path`, keeping the rendered bitmaps as-is.
    pub fn load<E>(&mut self, engine: &mut E, path: &Path) -> ViewerResult<usize>
    where
        E: PdfEngine + ?Sized,
    {
        self.load_with(engine, path, |_, bitmap| bitmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdf_engine::{testing::sample_pdf, LopdfEngine, PdfEngineError};
    use std::fs;
    use tempfile::TempDir;

    fn write_pdf(dir: &TempDir, name: &str, pages: usize) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, sample_pdf(pages)).expect("fixture should be written");
        path
    }

    fn loaded(pages: usize) -> (TempDir, ViewerSurface) {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = write_pdf(&dir, "doc.pdf", pages);
        let mut surface: ViewerSurface = ViewerSurface::new();
        surface.load(&mut LopdfEngine::new(), &path).expect("load should succeed");
        (dir, surface)
    }

    #[test]
    fn new_surface_is_empty() {
        let surface: ViewerSurface = ViewerSurface::new();

        assert_eq!(surface.state(), SurfaceState::Empty);
        assert_eq!(surface.page_count(), 0);
        assert_eq!(surface.current_index(), 0);
        assert!(surface.current_page().is_none());
        assert!(surface.source_path().is_none());
    }

    #[test]
    fn load_shows_first_page() {
        let (_dir, mut surface) = loaded(4);

        assert!(surface.is_loaded());
        assert_eq!(surface.page_count(), 4);
        assert_eq!(surface.current_index(), 0);
        assert!(surface.current_page().is_some());
        assert!(surface.take_redraw_request());
        assert!(!surface.take_redraw_request());
    }

    #[test]
    fn show_accepts_every_valid_index() {
        let (_dir, mut surface) = loaded(5);

        for index in [3, 0, 4, 1, 2] {
            assert!(surface.show(index));
            assert_eq!(surface.current_index(), index);
        }
    }

    #[test]
    fn show_out_of_range_is_ignored() {
        let (_dir, mut surface) = loaded(2);
        surface.show(1);
        surface.take_redraw_request();

        assert!(!surface.show(2));
        assert!(!surface.show(usize::MAX));
        assert_eq!(surface.current_index(), 1);
        assert!(!surface.take_redraw_request());
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let (_dir, mut surface) = loaded(3);

        assert!(!surface.previous());
        assert_eq!(surface.current_index(), 0);

        assert!(surface.next());
        assert!(surface.next());
        assert_eq!(surface.current_index(), 2);

        assert!(!surface.next());
        assert_eq!(surface.current_index(), 2);

        assert!(surface.previous());
        assert_eq!(surface.current_index(), 1);
    }

    #[test]
    fn navigation_on_empty_surface_is_noop() {
        let mut surface: ViewerSurface = ViewerSurface::new();

        assert!(!surface.next());
        assert!(!surface.previous());
        assert!(!surface.show(0));
        assert_eq!(surface.current_index(), 0);
    }

    #[test]
    fn second_load_replaces_first() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let first = write_pdf(&dir, "first.pdf", 5);
        let second = write_pdf(&dir, "second.pdf", 2);
        let mut engine = LopdfEngine::new();
        let mut surface: ViewerSurface = ViewerSurface::new();

        surface.load(&mut engine, &first).expect("first load");
        surface.show(4);
        surface.load(&mut engine, &second).expect("second load");

        assert_eq!(surface.page_count(), 2);
        assert_eq!(surface.current_index(), 0);
        assert_eq!(surface.source_path(), Some(second.as_path()));
    }

    #[test]
    fn failed_load_leaves_surface_empty() {
        let (dir, mut surface) = loaded(3);
        let broken = dir.path().join("broken.pdf");
        fs::write(&broken, b"not a pdf at all").expect("fixture should be written");

        let err = surface.load(&mut LopdfEngine::new(), &broken).expect_err("load should fail");

        assert!(matches!(
            err,
            ViewerError::Open { ref path, source: PdfEngineError::Parse(_) } if path == &broken
        ));
        assert_eq!(surface.state(), SurfaceState::Empty);
        assert_eq!(surface.page_count(), 0);
    }

    #[test]
    fn unreadable_path_is_open_error() {
        let mut surface: ViewerSurface = ViewerSurface::new();
        let err = surface
            .load(&mut LopdfEngine::new(), Path::new("/no/such/dir/file.pdf"))
            .expect_err("missing file should fail");

        assert!(matches!(err, ViewerError::Open { source: PdfEngineError::Io(_), .. }));
        assert!(err.to_string().starts_with("failed to open /no/such/dir/file.pdf"));
    }

    #[test]
    fn zero_page_document_loads_without_a_current_page() {
        let (_dir, mut surface) = loaded(0);

        assert!(surface.is_loaded());
        assert_eq!(surface.page_count(), 0);
        assert!(surface.current_page().is_none());
        assert!(!surface.next());
    }

    #[test]
    fn load_with_maps_pages_in_order() {
        let dir = tempfile::tempdir().expect("temp dir should be created");
        let path = write_pdf(&dir, "doc.pdf", 3);
        let mut surface = ViewerSurface::with_render_scale(0.5);

        surface
            .load_with(&mut LopdfEngine::new(), &path, |index, bitmap| {
                (index, bitmap.width(), bitmap.height())
            })
            .expect("load should succeed");

        assert_eq!(surface.pages(), &[(0, 306, 396), (1, 306, 396), (2, 306, 396)]);
    }
}
