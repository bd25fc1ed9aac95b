mod artifact_sink;
mod match_repository;

pub use artifact_sink::DirectoryArtifactSink;
pub use match_repository::LocalStorageMatchRepository;
