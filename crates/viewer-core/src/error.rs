use pdf_engine::PdfEngineError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: PdfEngineError,
    },
    #[error("failed to render page {page}: {source}")]
    Render {
        page: u32,
        #[source]
        source: PdfEngineError,
    },
}

pub type ViewerResult<T> = Result<T, ViewerError>;
