//! # soundex
//!
//! Soundex phonetic codes for approximate name matching.
//!
//! A Soundex code is the first letter of a name followed by three digits that
//! group consonants by how they are pronounced. Names that sound alike in
//! English tend to share a code, so comparing codes finds likely spelling
//! variants of the same name.
//!
//! ## Example
//!
//! ```rust
//! use soundex::prelude::*;
//!
//! assert_eq!(encode("Tymczak").unwrap(), "T522");
//! assert!(sounds_like("Robert", "Rupert").unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod encoder;
pub mod error;

mod properties;

/// CLI interface and utilities
#[cfg(feature = "cli")]
#[allow(missing_docs)]
pub mod cli;

pub use classify::{classify, Class};
pub use encoder::{encode, sounds_like, CODE_LEN};
pub use error::{Result, SoundexError};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::classify::{classify, Class};
    pub use crate::encoder::{encode, sounds_like, CODE_LEN};
    pub use crate::error::{Result, SoundexError};
}
