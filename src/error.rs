use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid syntax: {text}")]
    Syntax { text: String },
    #[error("invalid address: {text} (expected <goal>.<rule>)")]
    Address { text: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
