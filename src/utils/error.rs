use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModalError {
    #[error("unknown modal position '{0}' (expected 'center' or 'bottom')")]
    UnknownPosition(String),

    #[error("unknown modal size '{0}' (expected 'small', 'medium' or 'large')")]
    UnknownSize(String),

    #[error("modal title must not be empty")]
    EmptyTitle,

    #[error("could not find config directory")]
    NoConfigDir,

    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ModalError>;
