use std::fs;

use fileops_protocol::ReadResult;

use crate::encoding::TextCodec;
use crate::error::{FileOpsError, Result};
use crate::lines::count_lines;
use crate::FileOps;

impl FileOps {
    /// Reads a whole file as text.
    ///
    /// Malformed byte sequences are replaced with U+FFFD; only an unknown encoding label fails
    /// the decode.
    pub fn read_file(&self, path: &str, encoding: &str) -> Result<ReadResult> {
        let resolved = self.authorize(path)?;

        let meta = fs::metadata(&resolved).map_err(|err| FileOpsError::from_io(path, err))?;
        if !meta.is_file() {
            return Err(FileOpsError::NotAFile {
                path: path.to_string(),
            });
        }

        let codec = TextCodec::for_label(encoding).ok_or_else(|| FileOpsError::DecodeError {
            path: path.to_string(),
            encoding: encoding.to_string(),
            message: "unsupported encoding".to_string(),
        })?;

        let bytes = fs::read(&resolved).map_err(|err| FileOpsError::from_io(path, err))?;
        let content = codec.decode(&bytes);
        log::debug!(
            "read {} ({} bytes, {})",
            resolved.display(),
            bytes.len(),
            codec.name()
        );

        Ok(ReadResult {
            path: resolved.display().to_string(),
            name: resolved
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            size: bytes.len() as u64,
            encoding: encoding.to_string(),
            line_count: count_lines(&content),
            content,
        })
    }
}
