use slvcricket_types::errors::ExportError;

use crate::export::Artifact;

/// Host side destination for exported artifacts (a download, a file...).
pub trait ArtifactSink: Send + Sync {
    fn deliver(&self, artifact: &Artifact) -> Result<(), ExportError>;
}
