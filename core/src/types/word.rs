use nutype::nutype;

/// A vocabulary word over the restricted alphabet (lowercase ASCII letters
/// and digits).
///
/// Construction applies the sanitize policy: lowercase the input, then strip
/// every character outside the alphabet. A word that sanitizes to the empty
/// string is rejected.
#[nutype(
    new_unchecked,
    sanitize(lowercase, with = strip_outside_alphabet),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
    )
)]
pub struct Word(String);

pub(crate) fn in_alphabet(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

fn strip_outside_alphabet(s: String) -> String {
    s.chars().filter(|c| in_alphabet(*c)).collect()
}
