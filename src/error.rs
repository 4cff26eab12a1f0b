//! Error handling for the huffpack library
//!
//! A single error enum covers the whole pipeline, from tree construction
//! through decoding and container I/O. All variants are unrecoverable at the
//! point of detection and are surfaced to the immediate caller; whether to
//! abort or retry with different input is the caller's decision.

use thiserror::Error;

/// Main error type for the huffpack library
#[derive(Error, Debug)]
pub enum HuffError {
    /// Building a tree or code table from an empty frequency map
    #[error("empty input: cannot build a Huffman tree from no symbols")]
    EmptyInput,

    /// Extracting from an empty priority heap
    ///
    /// If this ever surfaces to a caller it indicates an internal invariant
    /// violation in the tree builder.
    #[error("empty heap: extract_min called on an empty node heap")]
    EmptyHeap,

    /// Encoding a symbol that is absent from the code table
    #[error("unknown symbol: byte 0x{symbol:02x} is not in the code table")]
    UnknownSymbol {
        /// The byte that had no code assigned
        symbol: u8,
    },

    /// A decode traversal that does not terminate on a codeword boundary
    #[error("malformed stream: {message}")]
    MalformedStream {
        /// Description of where the traversal went wrong
        message: String,
    },

    /// Corrupt or truncated container data, or invalid packing metadata
    #[error("invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },

    /// I/O related errors from the stream layer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HuffError {
    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create a malformed stream error
    pub fn malformed_stream<S: Into<String>>(message: S) -> Self {
        Self::MalformedStream {
            message: message.into(),
        }
    }

    /// Create an unknown symbol error
    pub fn unknown_symbol(symbol: u8) -> Self {
        Self::UnknownSymbol { symbol }
    }
}

/// Result type alias for huffpack operations
pub type Result<T> = std::result::Result<T, HuffError>;
