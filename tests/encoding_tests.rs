//! Integration tests for the public encoding API.

use soundex::prelude::*;

#[test]
fn test_homophones_share_a_code() {
    let pairs = [
        ("Robert", "Rupert"),
        ("Smith", "Smyth"),
        ("Ashcraft", "Ashcroft"),
        ("Tymczak", "tymczak"),
    ];
    for (a, b) in pairs {
        assert_eq!(
            encode(a).unwrap(),
            encode(b).unwrap(),
            "{} and {} should share a code",
            a,
            b
        );
        assert!(sounds_like(a, b).unwrap());
    }
}

#[test]
fn test_reference_codes() {
    let cases = [
        ("Pfister", "P236"),
        ("husobee", "H210"),
        ("Tymczak", "T522"),
        ("Ashcraft", "A261"),
    ];
    for (name, expected) in cases {
        assert_eq!(encode(name).unwrap(), expected, "encoding {}", name);
    }
}

#[test]
fn test_letter_input_is_fixed_width() {
    for name in ["A", "Li", "Lee", "Euler", "Gauss", "Hilbert", "Knuth", "Abcdefghijklmnop"] {
        assert_eq!(encode(name).unwrap().len(), CODE_LEN, "encoding {}", name);
    }
}

#[test]
fn test_repeated_calls_agree() {
    for name in ["Robert", "", "O'Hara", "Wolfe"] {
        assert_eq!(encode(name).unwrap(), encode(name).unwrap());
    }
}

#[test]
fn test_empty_input_is_all_padding() {
    assert_eq!(encode("").unwrap(), "0000");
}

#[test]
fn test_single_letter_boundary() {
    assert_eq!(encode("q").unwrap(), "Q000");
    assert_eq!(encode("Y").unwrap(), "Y000");
}

#[test]
fn test_classify_rejects_non_letters() {
    assert_eq!(
        classify('3'),
        Err(SoundexError::UnclassifiedCharacter('3'))
    );
    assert_eq!(classify('z').unwrap(), Class::Coded(2));
}

#[test]
fn test_encode_absorbs_unclassified_characters() {
    // Punctuation and spaces inside a name never surface as errors.
    assert_eq!(encode("Mc Donald").unwrap(), encode("McDonald").unwrap());
    assert!(encode("!!!").is_ok());
}
