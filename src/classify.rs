//! Letter classes for Soundex encoding.
//!
//! Every ASCII letter falls into exactly one [`Class`]:
//!
//! | Class                  | Letters                    |
//! |------------------------|----------------------------|
//! | `Coded(1)`             | B F P V                    |
//! | `Coded(2)`             | C G J K Q S X Z            |
//! | `Coded(3)`             | D T                        |
//! | `Coded(4)`             | L                          |
//! | `Coded(5)`             | M N                        |
//! | `Coded(6)`             | R                          |
//! | `Separator`            | A E I O U Y                |
//! | `Transparent`          | H W                        |
//!
//! Classification is case-insensitive. Anything else (digits, punctuation,
//! whitespace, non-ASCII) is rejected with
//! [`SoundexError::UnclassifiedCharacter`].

use tracing::trace;

use crate::error::{Result, SoundexError};

// ============================================================================
// Class
// ============================================================================

/// The Soundex class of a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// A consonant contributing a digit in `1..=6`.
    Coded(u8),
    /// A vowel or `Y`. Contributes nothing and separates equal digits.
    Separator,
    /// `H` or `W`. Contributes nothing and is looked through when collapsing
    /// adjacent equal digits.
    Transparent,
}

impl Class {
    /// The code digit for this class, `'1'..='6'`, or `None` for the dropped
    /// classes.
    #[inline]
    pub fn digit(self) -> Option<char> {
        match self {
            Class::Coded(d) => Some(char::from(b'0' + d)),
            Class::Separator | Class::Transparent => None,
        }
    }
}

// ============================================================================
// Classification table
// ============================================================================

/// Indexed by `letter - b'A'`.
static TABLE: [Class; 26] = [
    Class::Separator,   // A
    Class::Coded(1),    // B
    Class::Coded(2),    // C
    Class::Coded(3),    // D
    Class::Separator,   // E
    Class::Coded(1),    // F
    Class::Coded(2),    // G
    Class::Transparent, // H
    Class::Separator,   // I
    Class::Coded(2),    // J
    Class::Coded(2),    // K
    Class::Coded(4),    // L
    Class::Coded(5),    // M
    Class::Coded(5),    // N
    Class::Separator,   // O
    Class::Coded(1),    // P
    Class::Coded(2),    // Q
    Class::Coded(6),    // R
    Class::Coded(2),    // S
    Class::Coded(3),    // T
    Class::Separator,   // U
    Class::Coded(1),    // V
    Class::Transparent, // W
    Class::Coded(2),    // X
    Class::Separator,   // Y
    Class::Coded(2),    // Z
];

/// Classify a single character.
///
/// # Errors
///
/// Returns [`SoundexError::UnclassifiedCharacter`] when `c` is not an ASCII
/// letter.
///
/// # Examples
///
/// ```rust
/// use soundex::{classify, Class};
///
/// assert_eq!(classify('p').unwrap().digit(), Some('1'));
/// assert_eq!(classify('Y').unwrap(), Class::Separator);
/// assert!(classify('-').is_err());
/// ```
pub fn classify(c: char) -> Result<Class> {
    if c.is_ascii_alphabetic() {
        let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
        Ok(TABLE[index])
    } else {
        Err(SoundexError::UnclassifiedCharacter(c))
    }
}

/// Returns true for `H` and `W` in either case.
#[inline]
pub fn is_transparent(c: char) -> bool {
    matches!(classify(c), Ok(Class::Transparent))
}

/// Returns true when both characters are coded letters with the same digit.
///
/// Dropped letters never match anything. A classification failure on either
/// side counts as a mismatch.
pub fn same_code(a: char, b: char) -> bool {
    match (classify(a), classify(b)) {
        (Ok(x), Ok(y)) => match (x.digit(), y.digit()) {
            (Some(dx), Some(dy)) => dx == dy,
            _ => false,
        },
        (Err(err), _) | (_, Err(err)) => {
            trace!(%err, "unclassified character in comparison, no collapse");
            false
        }
    }
}
