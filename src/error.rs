//! Error types for Soundex classification and encoding.

use thiserror::Error;

/// Errors that can occur while classifying characters or encoding names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SoundexError {
    /// The character has no digit and is not one of the dropped letters.
    ///
    /// Digits, punctuation, whitespace and non-ASCII letters all fall here.
    /// [`crate::encode`] absorbs this internally and never returns it.
    #[error("Unclassified character {0:?}: no Soundex code found")]
    UnclassifiedCharacter(char),

    /// A whole string could not be turned into a code.
    ///
    /// Reserved: the encoding algorithm accepts every input, including the
    /// empty string.
    #[error("Cannot build a Soundex code from {0:?}")]
    EncodingFailed(String),
}

/// A specialized `Result` type for Soundex operations.
pub type Result<T> = std::result::Result<T, SoundexError>;
