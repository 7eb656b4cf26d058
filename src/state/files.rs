//! File picker selection

use super::draft::SelectedFile;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extensions advertised by the picker
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "jpg", "jpeg", "png", "doc", "docx"];

/// Fallback MIME type for unrecognised extensions
const UNKNOWN_MIME: &str = "application/octet-stream";

/// Why a path could not be selected
#[derive(Debug, thiserror::Error)]
pub enum FileSelectError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Resolves picker input into a [`SelectedFile`]
#[derive(Debug, Clone, Default)]
pub struct FilePicker {
    base_dir: Option<PathBuf>,
}

impl FilePicker {
    /// Relative paths resolve against `base_dir` when given, else the
    /// working directory
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    /// Hint line listing the accepted extensions
    pub fn accept_hint() -> String {
        ACCEPTED_EXTENSIONS
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn resolve(&self, input: &str) -> PathBuf {
        let path = Path::new(input);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Select the file named by `input`. Blank input means the picker was
    /// dismissed without a choice and yields `Ok(None)`.
    pub fn select(&self, input: &str) -> Result<Option<SelectedFile>, FileSelectError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        let path = self.resolve(input);
        let metadata = fs::metadata(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                FileSelectError::NotFound(path.clone())
            } else {
                FileSelectError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        if !metadata.is_file() {
            return Err(FileSelectError::NotAFile(path));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.to_string());
        let mime_type = mime_type_for(&path).to_string();

        tracing::debug!(name = %name, size = metadata.len(), mime = %mime_type, "File selected");

        Ok(Some(SelectedFile {
            name,
            size: metadata.len(),
            mime_type,
        }))
    }
}

/// MIME type reported for a path, derived from its extension
pub fn mime_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        "gif" => "image/gif",
        "zip" => "application/zip",
        _ => UNKNOWN_MIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, bytes: usize) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&vec![0u8; bytes]).unwrap();
        path
    }

    mod mime {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_known_extensions() {
            assert_eq!(mime_type_for(Path::new("a.pdf")), "application/pdf");
            assert_eq!(mime_type_for(Path::new("a.JPG")), "image/jpeg");
            assert_eq!(mime_type_for(Path::new("a.jpeg")), "image/jpeg");
            assert_eq!(mime_type_for(Path::new("a.doc")), "application/msword");
            assert_eq!(mime_type_for(Path::new("notes.txt")), "text/plain");
        }

        #[test]
        fn test_unknown_extension_falls_back() {
            assert_eq!(mime_type_for(Path::new("a.xyz")), UNKNOWN_MIME);
            assert_eq!(mime_type_for(Path::new("Makefile")), UNKNOWN_MIME);
        }

        #[test]
        fn test_accept_hint_lists_all_extensions() {
            assert_eq!(
                FilePicker::accept_hint(),
                ".pdf .jpg .jpeg .png .doc .docx"
            );
        }
    }

    mod select {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_blank_input_selects_nothing() {
            let picker = FilePicker::default();
            assert!(picker.select("   ").unwrap().is_none());
        }

        #[test]
        fn test_selects_existing_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = write_file(dir.path(), "resume.pdf", 2048);
            let picker = FilePicker::default();

            let file = picker.select(path.to_str().unwrap()).unwrap().unwrap();
            assert_eq!(
                file,
                SelectedFile {
                    name: "resume.pdf".to_string(),
                    size: 2048,
                    mime_type: "application/pdf".to_string(),
                }
            );
        }

        #[test]
        fn test_relative_path_uses_base_dir() {
            let dir = tempfile::tempdir().unwrap();
            write_file(dir.path(), "photo.png", 10);
            let picker = FilePicker::new(Some(dir.path().to_path_buf()));

            let file = picker.select("photo.png").unwrap().unwrap();
            assert_eq!(file.mime_type, "image/png");
            assert_eq!(file.size, 10);
        }

        #[test]
        fn test_missing_file_is_not_found() {
            let dir = tempfile::tempdir().unwrap();
            let picker = FilePicker::new(Some(dir.path().to_path_buf()));
            let err = picker.select("missing.pdf").unwrap_err();
            assert!(matches!(err, FileSelectError::NotFound(_)));
            assert!(err.to_string().starts_with("File not found"));
        }

        #[test]
        fn test_directory_is_rejected() {
            let dir = tempfile::tempdir().unwrap();
            let picker = FilePicker::default();
            let err = picker.select(dir.path().to_str().unwrap()).unwrap_err();
            assert!(matches!(err, FileSelectError::NotAFile(_)));
        }
    }
}
