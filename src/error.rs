use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Cannot render an unbound expression")]
    InvalidState,
    #[error("Text sink rejected a write")]
    Sink(#[from] fmt::Error),
    #[error("Empty vehicle surrogate")]
    EmptySurrogate,
    #[error("Array subscript {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
