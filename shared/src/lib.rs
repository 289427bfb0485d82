// shared/src/lib.rs

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("transport: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    UnexpectedStatus(u16),
    #[error("decode: {0}")]
    Decode(String),
    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;
