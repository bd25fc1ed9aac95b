mod artifact_sink;
mod match_repository;

pub use artifact_sink::ArtifactSink;
pub use match_repository::MatchRepository;
