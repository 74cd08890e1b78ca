use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_PARAM_NAME_LEN: usize = 30;
pub const DEFAULT_NOT_FOUND_SEGMENT: &str = "+not-found";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestOptions {
    pub max_param_name_len: usize,
    pub validate_patterns: bool,
    /// Stripped from API file identifiers only, e.g. `pages/api`.
    pub source_roots: Vec<String>,
    pub not_found_segment: String,
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            max_param_name_len: DEFAULT_MAX_PARAM_NAME_LEN,
            validate_patterns: true,
            source_roots: Vec::new(),
            not_found_segment: DEFAULT_NOT_FOUND_SEGMENT.to_string(),
        }
    }
}

impl ManifestOptions {
    pub fn builder() -> ManifestOptionsBuilder {
        ManifestOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), ManifestOptionsError> {
        if self.max_param_name_len == 0 {
            return Err(ManifestOptionsError::MaxParamNameLenInvalid {
                provided: self.max_param_name_len,
            });
        }
        if self.not_found_segment.is_empty() || self.not_found_segment.contains('/') {
            return Err(ManifestOptionsError::NotFoundSegmentInvalid {
                provided: self.not_found_segment.clone(),
            });
        }
        if let Some(root) = self
            .source_roots
            .iter()
            .find(|root| root.trim_matches('/').is_empty())
        {
            return Err(ManifestOptionsError::EmptySourceRoot {
                provided: root.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct ManifestOptionsBuilder {
    options: ManifestOptions,
}

impl ManifestOptionsBuilder {
    pub fn max_param_name_len(mut self, value: usize) -> Self {
        self.options.max_param_name_len = value;
        self
    }

    pub fn validate_patterns(mut self, value: bool) -> Self {
        self.options.validate_patterns = value;
        self
    }

    pub fn source_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.source_roots = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn source_root<S: Into<String>>(mut self, root: S) -> Self {
        self.options.source_roots.push(root.into());
        self
    }

    pub fn not_found_segment<S: Into<String>>(mut self, segment: S) -> Self {
        self.options.not_found_segment = segment.into();
        self
    }

    pub fn build(self) -> Result<ManifestOptions, ManifestOptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestOptionsError {
    #[error("max_param_name_len must be at least 1 (got {provided})")]
    MaxParamNameLenInvalid { provided: usize },
    #[error("not-found segment must be a single non-empty segment (got '{provided}')")]
    NotFoundSegmentInvalid { provided: String },
    #[error("source root '{provided}' is empty")]
    EmptySourceRoot { provided: String },
}
