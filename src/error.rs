use std::path::PathBuf;

pub type SizeGraphResult<T> = Result<T, SizeGraphError>;

#[derive(Debug, thiserror::Error)]
pub enum SizeGraphError {
    #[error("no frame number in filename: {filename}")]
    NoFrameNumber { filename: String },

    #[error("directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
