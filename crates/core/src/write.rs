use std::fs;

use fileops_protocol::WriteResult;

use crate::encoding::TextCodec;
use crate::error::{FileOpsError, Result};
use crate::FileOps;

impl FileOps {
    /// Overwrites (or creates) a file with `content` encoded as `encoding`.
    ///
    /// No atomic rename and no rollback: a failed write may leave a truncated file, and
    /// directories created for it stay in place.
    pub fn write_file(
        &self,
        path: &str,
        content: &str,
        encoding: &str,
        create_dirs: bool,
    ) -> Result<WriteResult> {
        let target = self.authorize(path)?;
        let Some(parent) = target.parent() else {
            return Err(FileOpsError::ParentMissing {
                path: target.display().to_string(),
            });
        };

        if create_dirs && !parent.is_dir() {
            fs::create_dir_all(parent).map_err(|source| FileOpsError::DirectoryCreateError {
                path: parent.display().to_string(),
                source,
            })?;
            log::debug!("created directories {}", parent.display());
        }

        if !parent.is_dir() {
            return Err(FileOpsError::ParentMissing {
                path: parent.display().to_string(),
            });
        }

        let codec = TextCodec::for_label(encoding).ok_or_else(|| FileOpsError::EncodeError {
            path: path.to_string(),
            encoding: encoding.to_string(),
            message: "unsupported encoding".to_string(),
        })?;
        let bytes = codec
            .encode(content)
            .map_err(|message| FileOpsError::EncodeError {
                path: path.to_string(),
                encoding: encoding.to_string(),
                message,
            })?;

        fs::write(&target, &bytes).map_err(|err| FileOpsError::from_write_io(path, err))?;
        log::debug!("wrote {} ({} bytes)", target.display(), bytes.len());

        Ok(WriteResult {
            success: true,
            path: target.display().to_string(),
            bytes_written: bytes.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{AllowedRoots, Config, FileOps};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn ops_for(root: &std::path::Path) -> FileOps {
        FileOps::new(Config::new(AllowedRoots::new([root])))
    }

    #[test]
    fn writes_and_reports_encoded_length() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("test.txt");

        let result = ops_for(tmp.path())
            .write_file(&file.to_string_lossy(), "Hello, MCP!\nLine two.", "utf-8", false)
            .unwrap();
        assert!(result.success);
        assert_eq!(result.bytes_written, 21);
        assert_eq!(fs::read_to_string(&file).unwrap(), "Hello, MCP!\nLine two.");
    }

    #[test]
    fn overwrites_existing_content_fully() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("over.txt");
        fs::write(&file, "a much longer original body").unwrap();

        ops_for(tmp.path())
            .write_file(&file.to_string_lossy(), "short", "utf-8", false)
            .unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "short");
    }

    #[test]
    fn bytes_written_counts_multibyte_encodings() {
        let tmp = tempdir().unwrap();
        let ops = ops_for(tmp.path());

        let utf8 = ops
            .write_file(&tmp.path().join("u8.txt").to_string_lossy(), "日本", "utf-8", false)
            .unwrap();
        assert_eq!(utf8.bytes_written, 6);

        let utf16 = ops
            .write_file(&tmp.path().join("u16.txt").to_string_lossy(), "日本", "utf-16le", false)
            .unwrap();
        assert_eq!(utf16.bytes_written, 4);
        assert_eq!(fs::read(tmp.path().join("u16.txt")).unwrap().len(), 4);
    }

    #[test]
    fn creates_parent_chain_only_when_asked() {
        let tmp = tempdir().unwrap();
        let ops = ops_for(tmp.path());
        let nested = tmp.path().join("a/b/c/nested.txt");

        let err = ops
            .write_file(&nested.to_string_lossy(), "x", "utf-8", false)
            .unwrap_err();
        assert_eq!(err.code(), "parent_missing");
        assert!(!tmp.path().join("a").exists());

        let ok = ops
            .write_file(&nested.to_string_lossy(), "nested content", "utf-8", true)
            .unwrap();
        assert!(ok.success);
        assert_eq!(fs::read_to_string(&nested).unwrap(), "nested content");
    }

    #[test]
    fn file_in_parent_chain_is_a_directory_create_error() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("blocker"), "file").unwrap();

        let err = ops_for(tmp.path())
            .write_file(
                &tmp.path().join("blocker/sub/leaf.txt").to_string_lossy(),
                "x",
                "utf-8",
                true,
            )
            .unwrap_err();
        assert_eq!(err.code(), "directory_create_error");
    }

    #[test]
    fn writing_outside_roots_is_denied_without_side_effects() {
        let tmp = tempdir().unwrap();
        let inner = tmp.path().join("inner");
        fs::create_dir_all(&inner).unwrap();

        let escaped = inner.join("../escaped/file.txt");
        let err = ops_for(&inner)
            .write_file(&escaped.to_string_lossy(), "x", "utf-8", true)
            .unwrap_err();
        assert_eq!(err.code(), "access_denied");
        assert!(!tmp.path().join("escaped").exists());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_cannot_redirect_a_write_outside() {
        let tmp = tempdir().unwrap();
        let inner = tmp.path().join("inner");
        let outer = tmp.path().join("outer");
        fs::create_dir_all(&inner).unwrap();
        fs::create_dir_all(&outer).unwrap();
        std::os::unix::fs::symlink(outer.join("pwned.txt"), inner.join("link")).unwrap();

        let err = ops_for(&inner)
            .write_file(&inner.join("link").to_string_lossy(), "x", "utf-8", true)
            .unwrap_err();
        assert_eq!(err.code(), "access_denied");
        assert!(!outer.join("pwned.txt").exists());
    }

    #[test]
    fn unmappable_content_is_an_encode_error() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("latin.txt");

        let err = ops_for(tmp.path())
            .write_file(&file.to_string_lossy(), "日本", "latin1", false)
            .unwrap_err();
        assert_eq!(err.code(), "encode_error");
        assert!(!file.exists());
    }

    #[test]
    fn writing_onto_a_directory_is_a_write_error() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("dir")).unwrap();

        let err = ops_for(tmp.path())
            .write_file(&tmp.path().join("dir").to_string_lossy(), "x", "utf-8", false)
            .unwrap_err();
        assert_eq!(err.code(), "write_error");
    }
}
