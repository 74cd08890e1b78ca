use crate::options::ManifestOptionsError;
use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("route node '{context_key}' has unsupported kind '{kind}'")]
    UnsupportedRouteKind { kind: String, context_key: String },
    #[error("route tree could not be decoded: {source}")]
    TreeDecode { source: serde_json::Error },
    #[error("manifest could not be encoded: {source}")]
    Encode { source: serde_json::Error },
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Options(#[from] ManifestOptionsError),
}

pub type ManifestResult<T> = Result<T, ManifestError>;
