use std::path::Path;

/// Document formats the open dialog offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Epub,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Epub, DocumentKind::Pdf];

    /// Filter label shown in the open dialog.
    pub const FILTER_NAME: &'static str = "EPUB/PDF Files";

    /// Classify `path` by its final extension. Matching is case-sensitive.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "pdf" => Some(DocumentKind::Pdf),
            "epub" => Some(DocumentKind::Epub),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Epub => "epub",
        }
    }

    /// Extensions for the dialog filter, in display order.
    pub fn filter_extensions() -> [&'static str; 2] {
        Self::ALL.map(Self::extension)
    }
}
