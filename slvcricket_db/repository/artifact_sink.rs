use std::{fs, path::PathBuf};

use slvcricket_app::{export::Artifact, repository::ArtifactSink};
use slvcricket_types::errors::ExportError;

use crate::atomic_write::write_atomically;

/// Writes export artifacts as files into a directory, replacing any
/// previous export with the same name.
#[derive(Debug, Clone)]
pub struct DirectoryArtifactSink {
    dir: PathBuf,
}

impl DirectoryArtifactSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, artifact: &Artifact) -> PathBuf {
        self.dir.join(&artifact.filename)
    }
}

impl ArtifactSink for DirectoryArtifactSink {
    fn deliver(&self, artifact: &Artifact) -> Result<(), ExportError> {
        if self.dir.exists() && !self.dir.is_dir() {
            return Err(ExportError::NotADirectory(self.dir.clone()));
        }
        if artifact.filename.contains(['/', '\\']) || artifact.filename.starts_with('.') {
            return Err(ExportError::Rejected(artifact.filename.clone()));
        }
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(artifact);
        write_atomically(&path, artifact.contents.as_bytes())?;

        tracing::debug!(
            path = %path.display(),
            media_type = artifact.media_type,
            bytes = artifact.contents.len(),
            "Delivered export"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use slvcricket_app::export::EXPORT_MEDIA_TYPE;
    use tempfile::TempDir;

    use super::*;

    fn artifact(filename: &str, contents: &str) -> Artifact {
        Artifact {
            filename: filename.to_string(),
            media_type: EXPORT_MEDIA_TYPE,
            contents: contents.to_string(),
        }
    }

    #[test]
    fn test_deliver_writes_file() {
        let dir = TempDir::new().unwrap();
        let sink = DirectoryArtifactSink::new(dir.path().join("exports"));
        let export = artifact("slvCricket_match_2025-02-14.json", "{\n  \"players\": []\n}");

        sink.deliver(&export).unwrap();

        let written = fs::read_to_string(sink.path_for(&export)).unwrap();
        assert_eq!(written, export.contents);
        assert_eq!(fs::read_dir(dir.path().join("exports")).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_delivery_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("slvCricket_match_2025-02-14.json")).unwrap();
        let sink = DirectoryArtifactSink::new(dir.path());

        let err = sink
            .deliver(&artifact("slvCricket_match_2025-02-14.json", "{}"))
            .unwrap_err();

        assert!(matches!(err, ExportError::Io(_)));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_deliver_replaces_same_day_export() {
        let dir = TempDir::new().unwrap();
        let sink = DirectoryArtifactSink::new(dir.path());

        sink.deliver(&artifact("slvCricket_match_2025-02-14.json", "first"))
            .unwrap();
        sink.deliver(&artifact("slvCricket_match_2025-02-14.json", "second"))
            .unwrap();

        let written =
            fs::read_to_string(dir.path().join("slvCricket_match_2025-02-14.json")).unwrap();
        assert_eq!(written, "second");
    }

    #[test]
    fn test_deliver_into_a_file_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "x").unwrap();

        let err = DirectoryArtifactSink::new(&blocker)
            .deliver(&artifact("slvCricket_match_2025-02-14.json", "{}"))
            .unwrap_err();
        assert!(matches!(err, ExportError::NotADirectory(path) if path == blocker));
    }

    #[test]
    fn test_deliver_rejects_path_like_names() {
        let dir = TempDir::new().unwrap();
        let err = DirectoryArtifactSink::new(dir.path())
            .deliver(&artifact("../escape.json", "{}"))
            .unwrap_err();
        assert!(matches!(err, ExportError::Rejected(_)));
    }
}
