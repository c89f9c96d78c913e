//! Modern Reader core
//!
//! Toolkit-independent state for the reader shell: the viewer surface holding
//! rendered pages, open-file dispatch, and the placeholder shell actions.

pub mod config;
pub mod error;
pub mod highlight;
pub mod kind;
pub mod library;
pub mod shell;
pub mod surface;

pub use config::ShellConfig;
pub use error::{ViewerError, ViewerResult};
pub use highlight::HighlightColor;
pub use kind::DocumentKind;
pub use library::{LibraryNode, LibraryTree, NodeId};
pub use shell::{
    highlight_message, open_document, OpenOutcome, EPUB_PENDING_MESSAGE, SETTINGS_MESSAGE,
};
pub use surface::{SurfaceState, ViewerSurface};
