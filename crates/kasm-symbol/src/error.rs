/// Error type of this crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// File open/read error.
    #[error("{0}: {1}")]
    File(std::path::PathBuf, std::io::Error),

    /// Malformed symbol record.
    #[error("line {line}: {kind}")]
    Syntax {
        /// Line of the record (1-based).
        line: usize,

        /// What is wrong with the record.
        kind: ParseErrorKind,
    },
}

/// Reason a symbol record couldn't be parsed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The record has a label but no address.
    #[error("missing address for label `{0}`")]
    MissingAddress(String),

    /// The label contains forbidden characters.
    #[error("invalid label `{0}`")]
    InvalidLabel(String),

    /// The address is not a valid unsigned 32-bit integer.
    #[error("invalid address `{0}`")]
    InvalidAddress(String),

    /// The record has more than two fields.
    #[error("unexpected token `{0}`")]
    TrailingToken(String),
}

/// Result type of this crate.
pub type Result<T> = core::result::Result<T, Error>;
