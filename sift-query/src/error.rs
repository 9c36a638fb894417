use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown cut policy {0:?} (expected `default` or `none`)")]
    UnknownCutPolicy(String),

    #[error("{var}: allow-list entry {index} is empty")]
    EmptyAllowedName { var: String, index: usize },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
