use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("could not read manifest: {0}")]
    Csv(#[from] csv::Error),

    #[error("manifest has {found} columns, expected at least {required}")]
    MissingColumns { found: usize, required: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not load image: {0}")]
    Image(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
