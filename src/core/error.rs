use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryRunnerError {
    #[error("Unsupported query runner: {0}")]
    UnsupportedRunner(String),

    #[error("Duplicate query runner: {0}")]
    DuplicateRunner(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl QueryRunnerError {
    pub fn unsupported<S: Into<String>>(name: S) -> Self {
        Self::UnsupportedRunner(name.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}

pub type QueryRunnerResult<T> = Result<T, QueryRunnerError>;
