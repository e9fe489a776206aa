use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid game snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

impl From<&str> for PanelError {
    fn from(error: &str) -> Self {
        PanelError::InvalidSnapshot(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PanelError>;
