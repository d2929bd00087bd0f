use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FileOpsError>;

#[derive(Error, Debug)]
pub enum FileOpsError {
    #[error("Access denied: path is outside the allowed roots: {path}")]
    AccessDenied { path: String },

    #[error("Path does not exist: {path}")]
    NotFound { path: String },

    #[error("Not a file: {path}")]
    NotAFile { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Cannot decode {path} as '{encoding}': {message}")]
    DecodeError {
        path: String,
        encoding: String,
        message: String,
    },

    #[error("Cannot encode content for {path} as '{encoding}': {message}")]
    EncodeError {
        path: String,
        encoding: String,
        message: String,
    },

    #[error("Permission denied: {path}")]
    PermissionDenied {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create directory {path}: {source}")]
    DirectoryCreateError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Parent directory does not exist: {path}")]
    ParentMissing { path: String },

    #[error("Write failed for {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid file name pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Filesystem error at {path}: {source}")]
    OsFailure {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl FileOpsError {
    /// Stable snake_case identifier for the error class.
    pub fn code(&self) -> &'static str {
        match self {
            Self::AccessDenied { .. } => "access_denied",
            Self::NotFound { .. } => "not_found",
            Self::NotAFile { .. } => "not_a_file",
            Self::NotADirectory { .. } => "not_a_directory",
            Self::DecodeError { .. } => "decode_error",
            Self::EncodeError { .. } => "encode_error",
            Self::PermissionDenied { .. } => "permission_denied",
            Self::DirectoryCreateError { .. } => "directory_create_error",
            Self::ParentMissing { .. } => "parent_missing",
            Self::WriteError { .. } => "write_error",
            Self::InvalidPattern { .. } => "invalid_pattern",
            Self::OsFailure { .. } => "os_failure",
        }
    }

    /// Maps an I/O error from a read-side operation (stat, open, read, list).
    pub(crate) fn from_io(path: &str, source: io::Error) -> Self {
        let path = path.to_string();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::OsFailure { path, source },
        }
    }

    /// Maps an I/O error from the final file write.
    pub(crate) fn from_write_io(path: &str, source: io::Error) -> Self {
        let path = path.to_string();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::WriteError { path, source },
        }
    }
}
