//! Page rendering seam.
//!
//! The viewer never parses PDF itself. It talks to a [`PdfEngine`], which opens a
//! document, reports its geometry and rasterizes pages into RGBA bitmaps.

use image::{ImageBuffer, Rgba};
use lopdf::{Document, Object, ObjectId};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub type RgbaImage = ImageBuffer<Rgba<u8>, Vec<u8>>;

/// US Letter, used when a page carries no usable MediaBox.
const LETTER: PageSize = PageSize { width_pt: 612.0, height_pt: 792.0 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentHandle(u64);

impl DocumentHandle {
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

impl PageSize {
    /// Pixel dimensions of this page rendered at `scale` (1.0 = 72 dpi).
    pub fn pixels_at(self, scale: f32) -> (u32, u32) {
        let scale = if scale <= 0.0 { 1.0 } else { scale };
        let width = (self.width_pt * scale).round().max(1.0) as u32;
        let height = (self.height_pt * scale).round().max(1.0) as u32;
        (width, height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderRequest {
    pub page_index: u32,
    pub scale: f32,
}

impl Default for RenderRequest {
    fn default() -> Self {
        Self { page_index: 0, scale: 1.0 }
    }
}

#[derive(Debug, Clone)]
pub enum OpenSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl From<PathBuf> for OpenSource {
    fn from(value: PathBuf) -> Self {
        Self::Path(value)
    }
}

impl From<&Path> for OpenSource {
    fn from(value: &Path) -> Self {
        Self::Path(value.to_path_buf())
    }
}

impl From<Vec<u8>> for OpenSource {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PdfEngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF parse error: {0}")]
    Parse(#[from] lopdf::Error),
    #[error("invalid handle {0}")]
    InvalidHandle(u64),
    #[error("page {page} out of range (page_count={page_count})")]
    PageOutOfRange { page: u32, page_count: u32 },
    #[error("encrypted PDFs are not supported")]
    EncryptedUnsupported,
    #[error("backend error: {0}")]
    Backend(String),
}

/// An external document renderer.
///
/// Handles stay valid until [`PdfEngine::close`] is called for them.
pub trait PdfEngine {
    fn open(&mut self, source: OpenSource) -> Result<DocumentHandle, PdfEngineError>;
    fn page_count(&self, handle: DocumentHandle) -> Result<u32, PdfEngineError>;
    fn page_size(
        &self,
        handle: DocumentHandle,
        page_index: u32,
    ) -> Result<PageSize, PdfEngineError>;
    fn render_page(
        &self,
        handle: DocumentHandle,
        request: RenderRequest,
    ) -> Result<RgbaImage, PdfEngineError>;
    fn close(&mut self, handle: DocumentHandle) -> Result<(), PdfEngineError>;

    /// Short backend name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Guards `Parent` walks against malformed, cyclic page trees.
const MAX_TREE_DEPTH: usize = 32;

fn box_size(array: &[Object]) -> Option<PageSize> {
    if array.len() != 4 {
        return None;
    }
    let x0 = array[0].as_float().ok()?;
    let y0 = array[1].as_float().ok()?;
    let x1 = array[2].as_float().ok()?;
    let y1 = array[3].as_float().ok()?;
    Some(PageSize { width_pt: (x1 - x0).abs(), height_pt: (y1 - y0).abs() })
}

/// The MediaBox that applies to a page: its own, or the nearest one on its
/// `/Pages` ancestors. Indirect boxes are resolved.
fn media_box(doc: &Document, page_id: ObjectId) -> Option<PageSize> {
    let mut node = doc.get_dictionary(page_id).ok()?;

    for _ in 0..MAX_TREE_DEPTH {
        if let Ok(object) = node.get(b"MediaBox") {
            let object = match object {
                Object::Reference(id) => doc.get_object(*id).ok()?,
                direct => direct,
            };
            return box_size(object.as_array().ok()?);
        }

        let parent = node.get(b"Parent").ok()?.as_reference().ok()?;
        node = doc.get_dictionary(parent).ok()?;
    }

    None
}

#[derive(Debug, Clone)]
struct DocumentRecord {
    #[cfg_attr(not(feature = "pdfium"), allow(dead_code))]
    bytes: Vec<u8>,
    page_sizes: Vec<PageSize>,
}

/// Geometry-only backend.
///
/// Reads page boxes with `lopdf` and paints blank page-sized bitmaps with a thin
/// border. Used when no rasterizing backend can be bound.
#[derive(Debug, Default)]
pub struct LopdfEngine {
    next_handle: u64,
    docs: HashMap<DocumentHandle, DocumentRecord>,
}

impl LopdfEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_source(source: OpenSource) -> Result<Vec<u8>, PdfEngineError> {
        match source {
            OpenSource::Path(path) => Ok(fs::read(path)?),
            OpenSource::Bytes(bytes) => Ok(bytes),
        }
    }

    fn parse_sizes(bytes: &[u8]) -> Result<Vec<PageSize>, PdfEngineError> {
        let doc = Document::load_mem(bytes)?;
        Self::page_sizes(&doc)
    }

    fn page_sizes(doc: &Document) -> Result<Vec<PageSize>, PdfEngineError> {
        // `is_encrypted` only sees indirect `/Encrypt` dictionaries.
        if doc.trailer.has(b"Encrypt") {
            return Err(PdfEngineError::EncryptedUnsupported);
        }

        let pages = doc.get_pages();
        let mut sizes = Vec::with_capacity(pages.len());

        for (_, object_id) in pages {
            let size = media_box(doc, object_id).unwrap_or_else(|| {
                log::debug!("page {object_id:?} has no usable MediaBox, assuming US Letter");
                LETTER
            });
            sizes.push(size);
        }

        Ok(sizes)
    }

    fn insert(&mut self, record: DocumentRecord) -> DocumentHandle {
        self.next_handle += 1;
        let handle = DocumentHandle(self.next_handle);
        self.docs.insert(handle, record);
        handle
    }

    fn record(&self, handle: DocumentHandle) -> Result<&DocumentRecord, PdfEngineError> {
        self.docs.get(&handle).ok_or(PdfEngineError::InvalidHandle(handle.raw()))
    }
}

impl PdfEngine for LopdfEngine {
    fn open(&mut self, source: OpenSource) -> Result<DocumentHandle, PdfEngineError> {
        let bytes = Self::read_source(source)?;
        let page_sizes = Self::parse_sizes(&bytes)?;

        Ok(self.insert(DocumentRecord { bytes, page_sizes }))
    }

    fn page_count(&self, handle: DocumentHandle) -> Result<u32, PdfEngineError> {
        Ok(self.record(handle)?.page_sizes.len() as u32)
    }

    fn page_size(
        &self,
        handle: DocumentHandle,
        page_index: u32,
    ) -> Result<PageSize, PdfEngineError> {
        let record = self.record(handle)?;
        record.page_sizes.get(page_index as usize).copied().ok_or(PdfEngineError::PageOutOfRange {
            page: page_index,
            page_count: record.page_sizes.len() as u32,
        })
    }

    fn render_page(
        &self,
        handle: DocumentHandle,
        request: RenderRequest,
    ) -> Result<RgbaImage, PdfEngineError> {
        let (width, height) = self.page_size(handle, request.page_index)?.pixels_at(request.scale);

        let mut image = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));

        if width >= 4 && height >= 4 {
            for x in 0..width {
                image.put_pixel(x, 0, Rgba([220, 220, 220, 255]));
                image.put_pixel(x, height - 1, Rgba([220, 220, 220, 255]));
            }
            for y in 0..height {
                image.put_pixel(0, y, Rgba([220, 220, 220, 255]));
                image.put_pixel(width - 1, y, Rgba([220, 220, 220, 255]));
            }
        }

        Ok(image)
    }

    fn close(&mut self, handle: DocumentHandle) -> Result<(), PdfEngineError> {
        self.docs.remove(&handle).map(|_| ()).ok_or(PdfEngineError::InvalidHandle(handle.raw()))
    }

    fn name(&self) -> &'static str {
        "lopdf"
    }
}

#[cfg(feature = "pdfium")]
pub mod pdfium_backend {
    //! Rasterizing backend on top of the PDFium shared library.

    use super::*;
    use pdfium_render::prelude::*;

    /// Renders pages with PDFium. Geometry and handle bookkeeping are shared with
    /// [`LopdfEngine`]; the document is re-opened from its bytes per render call so
    /// no PDFium object outlives a single method.
    pub struct PdfiumEngine {
        pdfium: Pdfium,
        inner: LopdfEngine,
    }

    impl PdfiumEngine {
        /// Bind PDFium.
        ///
        /// Search order:
        /// 1. Executable's directory (app bundles ship the library next to the binary)
        /// 2. Current working directory
        /// 3. System library paths
        pub fn bind() -> Result<Self, PdfEngineError> {
            let exe_dir = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()));

            if let Some(ref dir) = exe_dir {
                if let Ok(bindings) =
                    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
                {
                    return Ok(Self { pdfium: Pdfium::new(bindings), inner: LopdfEngine::new() });
                }
            }

            let bindings =
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
                    .or_else(|_| Pdfium::bind_to_system_library())
                    .map_err(|err| {
                        PdfEngineError::Backend(format!("failed to bind pdfium library: {err}"))
                    })?;

            Ok(Self { pdfium: Pdfium::new(bindings), inner: LopdfEngine::new() })
        }
    }

    impl PdfEngine for PdfiumEngine {
        fn open(&mut self, source: OpenSource) -> Result<DocumentHandle, PdfEngineError> {
            let bytes = LopdfEngine::read_source(source)?;

            // PDFium is the authority on validity; lopdf only supplies page boxes.
            let page_sizes = {
                let document = self
                    .pdfium
                    .load_pdf_from_byte_slice(&bytes, None)
                    .map_err(|err| PdfEngineError::Backend(err.to_string()))?;
                document
                    .pages()
                    .iter()
                    .map(|page| PageSize {
                        width_pt: page.width().value,
                        height_pt: page.height().value,
                    })
                    .collect()
            };

            Ok(self.inner.insert(DocumentRecord { bytes, page_sizes }))
        }

        fn page_count(&self, handle: DocumentHandle) -> Result<u32, PdfEngineError> {
            self.inner.page_count(handle)
        }

        fn page_size(
            &self,
            handle: DocumentHandle,
            page_index: u32,
        ) -> Result<PageSize, PdfEngineError> {
            self.inner.page_size(handle, page_index)
        }

        fn render_page(
            &self,
            handle: DocumentHandle,
            request: RenderRequest,
        ) -> Result<RgbaImage, PdfEngineError> {
            let page_count = self.inner.page_count(handle)?;
            let (width, height) =
                self.inner.page_size(handle, request.page_index)?.pixels_at(request.scale);
            let record = self.inner.record(handle)?;

            let document = self
                .pdfium
                .load_pdf_from_byte_slice(&record.bytes, None)
                .map_err(|err| PdfEngineError::Backend(err.to_string()))?;

            let index = request
                .page_index
                .try_into()
                .map_err(|_| PdfEngineError::PageOutOfRange { page: request.page_index, page_count })?;
            let page = document
                .pages()
                .get(index)
                .map_err(|_| PdfEngineError::PageOutOfRange { page: request.page_index, page_count })?;

            let config = PdfRenderConfig::new()
                .set_target_width(width as i32)
                .set_target_height(height as i32);

            let bitmap = page
                .render_with_config(&config)
                .map_err(|err| PdfEngineError::Backend(err.to_string()))?;

            RgbaImage::from_raw(width, height, bitmap.as_rgba_bytes().to_vec()).ok_or_else(|| {
                PdfEngineError::Backend(format!(
                    "bitmap for page {} does not match {width}x{height}",
                    request.page_index
                ))
            })
        }

        fn close(&mut self, handle: DocumentHandle) -> Result<(), PdfEngineError> {
            self.inner.close(handle)
        }

        fn name(&self) -> &'static str {
            "pdfium"
        }
    }
}

/// Pick the best engine available at runtime.
///
/// With the `pdfium` feature this tries to bind PDFium and falls back to
/// [`LopdfEngine`] when the shared library cannot be found.
pub fn default_engine() -> Box<dyn PdfEngine> {
    #[cfg(feature = "pdfium")]
    {
        match pdfium_backend::PdfiumEngine::bind() {
            Ok(engine) => return Box::new(engine),
            Err(err) => log::warn!("{err}; pages will render blank"),
        }
    }

    Box::new(LopdfEngine::new())
}
