//! Local site directory source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{ContentError, ContentSource};

/// Reads resources from a directory laid out like the served site.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ContentSource for DirSource {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, ContentError> {
        let full = self.root.join(path.trim_start_matches('/'));
        tokio::fs::read(&full)
            .await
            .map_err(|e| ContentError::Io {
                path: full,
                source: e,
            })
    }

    fn location(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_reads_relative_resource() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("static")).unwrap();
        std::fs::write(dir.path().join("static/team.json"), br#"{"organizers":[]}"#).unwrap();

        let source = DirSource::new(dir.path());
        let bytes = source.fetch("static/team.json").await.unwrap();
        assert_eq!(bytes, br#"{"organizers":[]}"#);

        // Leading slash still resolves inside the site root
        let bytes = source.fetch("/static/team.json").await.unwrap();
        assert_eq!(bytes, br#"{"organizers":[]}"#);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let source = DirSource::new(dir.path());
        let err = source.fetch("static/schedule.json").await.unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }
}
