//! UCI protocol errors.

/// Errors that can occur during UCI protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum UciError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN {fen:?}: {reason}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A move string in the `position` command could not be parsed or
    /// has no piece on its origin square.
    #[error("invalid move: {uci_move}")]
    InvalidMove {
        /// The UCI move string that failed to parse.
        uci_move: String,
    },

    /// A `go` parameter was given without a value.
    #[error("missing value for go parameter {param}")]
    MissingGoValue { param: String },

    /// A `go` parameter value could not be parsed.
    #[error("invalid value {value:?} for go parameter {param}")]
    InvalidGoValue { param: String, value: String },

    /// `setoption` without `name <id>`.
    #[error("setoption is missing an option name")]
    MissingOptionName,

    /// `setoption` named an option this engine does not have.
    #[error("unknown option: {name}")]
    UnknownOption { name: String },

    /// `setoption` value is missing, malformed or out of range.
    #[error("invalid value {value:?} for option {name}")]
    InvalidOptionValue { name: String, value: String },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
