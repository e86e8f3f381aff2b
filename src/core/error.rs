use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetError {
    #[error("Pet not found: {0}")]
    PetNotFound(String),

    #[error("Duplicate pet name: {0}")]
    DuplicatePet(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PetError>;
