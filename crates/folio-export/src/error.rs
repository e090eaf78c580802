use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no rows to render: the reviewer name cannot be derived")]
    EmptyInput,

    #[error("logo not found: {}", path.display())]
    AssetNotFound { path: PathBuf },

    #[error("logo could not be read: {}: {source}", path.display())]
    AssetUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("logo could not be decoded: {0}")]
    Logo(#[from] image::ImageError),

    #[error("PDF generation failed: {0}")]
    Pdf(#[from] lopdf::Error),
}
