use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Override names/values length mismatch: {names} names vs {values} values")]
    LengthMismatch { names: usize, values: usize },

    #[error("Override at index {index} has an empty name")]
    EmptyName { index: usize },
}
