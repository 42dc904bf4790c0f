use std::io;

use thiserror::Error;

use libris_core::DomainError;

#[derive(Debug, Error)]
pub enum CliError {
    /// Standard input reached end-of-file while a prompt was waiting.
    #[error("input closed")]
    InputClosed,

    #[error("console io: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
