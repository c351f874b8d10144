//! Soundex encoding.
//!
//! [`encode`] walks the input once, left to right. At each position it first
//! collapses the following character if it codes to the same digit, then
//! emits:
//!
//! - the first surviving character verbatim (uppercased),
//! - the digit of every later coded letter,
//! - nothing for dropped letters or unclassified characters,
//!
//! and stops after [`CODE_LEN`] characters. Short codes are padded with `'0'`.
//!
//! The collapse looks through `H` and `W`: in `"Ashcraft"` the `c` after `sh`
//! is removed because `s` and `c` share digit `2`. A removed character is gone
//! for the rest of the walk, and the walk never revisits earlier positions, so
//! a run like `"bbb"` only loses its second letter.

use tracing::debug;

use crate::classify::{classify, is_transparent, same_code, Class};
use crate::error::Result;

/// Length of every code produced by [`encode`]: one letter and three digits.
pub const CODE_LEN: usize = 4;

/// Padding used when fewer than three digits were produced.
const PAD: char = '0';

/// Compute the Soundex code of `input`.
///
/// Never fails in practice; the `Result` mirrors [`classify`]. The empty
/// string encodes to `"0000"`.
///
/// # Examples
///
/// ```rust
/// use soundex::encode;
///
/// assert_eq!(encode("Robert").unwrap(), "R163");
/// assert_eq!(encode("Ashcraft").unwrap(), "A261");
/// assert_eq!(encode("").unwrap(), "0000");
/// ```
pub fn encode(input: &str) -> Result<String> {
    let mut chars: Vec<char> = input.chars().collect();
    let mut code = String::with_capacity(CODE_LEN);
    let mut emitted = 0;

    let mut i = 0;
    while i < chars.len() {
        collapse_at(&mut chars, i);
        if emitted == CODE_LEN {
            break;
        }

        let c = chars[i];
        if emitted == 0 {
            code.push(uppercase_single(c));
            emitted += 1;
        } else if let Some(digit) = classify(c).ok().and_then(Class::digit) {
            code.push(digit);
            emitted += 1;
        }
        i += 1;
    }

    while emitted < CODE_LEN {
        code.push(PAD);
        emitted += 1;
    }

    debug!(input, code = %code, "encoded");
    Ok(code)
}

/// Returns true when `a` and `b` have the same Soundex code.
///
/// ```rust
/// use soundex::sounds_like;
///
/// assert!(sounds_like("Robert", "Rupert").unwrap());
/// assert!(!sounds_like("Robert", "Rubin").unwrap());
/// ```
pub fn sounds_like(a: &str, b: &str) -> Result<bool> {
    Ok(encode(a)? == encode(b)?)
}

/// Uppercase `c` when its uppercase form is a single `char`, else keep it.
fn uppercase_single(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Remove the character after position `i` if it repeats the digit at `i`.
///
/// When the next character is `H` or `W` and another character follows it,
/// that later character is compared instead.
fn collapse_at(chars: &mut Vec<char>, i: usize) {
    let current = chars[i];
    let next = chars.get(i + 1).copied();
    let after = chars.get(i + 2).copied();
    match (next, after) {
        (Some(next), Some(after)) if is_transparent(next) => {
            if same_code(current, after) {
                chars.remove(i + 2);
            }
        }
        (Some(next), _) => {
            if same_code(current, next) {
                chars.remove(i + 1);
            }
        }
        (None, _) => {}
    }
}
