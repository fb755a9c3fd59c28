#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read profile file at {path:?}.")]
	ReadProfile { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse profile file at {path:?}.")]
	ParseProfile { path: std::path::PathBuf, source: serde_json::Error },
	#[error("Failed to write profile file at {path:?}.")]
	WriteProfile { path: std::path::PathBuf, source: std::io::Error },
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
	#[error("Malformed note payload: {0}")]
	Payload(String),
	#[error(transparent)]
	Qdrant(#[from] Box<qdrant_client::QdrantError>),
}
impl From<qdrant_client::QdrantError> for Error {
	fn from(err: qdrant_client::QdrantError) -> Self {
		Self::Qdrant(Box::new(err))
	}
}
