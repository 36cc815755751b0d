use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlDecode(#[from] toml::de::Error),

    #[error("Config write error: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("Pointer {pointer_id} is not captured")]
    PointerNotCaptured { pointer_id: i64 },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
