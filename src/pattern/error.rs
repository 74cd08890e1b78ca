use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("generated pattern '{pattern}' for '{file}' is rejected by the regex engine: {error}")]
    RegexInvalid {
        pattern: String,
        file: String,
        error: String,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
