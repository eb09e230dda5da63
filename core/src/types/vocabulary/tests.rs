use super::*;

#[test]
fn counts_repeated_tokens() {
    let vocabulary = Vocabulary::from_tokens(["cat", "cat", "car"]);

    assert_eq!(vocabulary.get("cat"), Some(2));
    assert_eq!(vocabulary.get("car"), Some(1));
    assert_eq!(vocabulary.len(), 2);
    assert_eq!(vocabulary.total(), 3);
}

#[test]
fn sanitizes_case_and_punctuation() {
    let vocabulary = Vocabulary::from_tokens(["Cat", "cAT", "don't"]);

    assert_eq!(vocabulary.get("cat"), Some(2));
    assert_eq!(vocabulary.get("dont"), Some(1));
}

#[test]
fn rejects_disallowed_leading_character() {
    let mut vocabulary = Vocabulary::new();

    assert_eq!(
        vocabulary.add_token("'tis"),
        Err(InvalidWordError::DisallowedLeadingChar('\''))
    );
    assert_eq!(
        vocabulary.add_token("--dash"),
        Err(InvalidWordError::DisallowedLeadingChar('-'))
    );
    assert!(vocabulary.is_empty());
}

#[test]
fn rejects_empty_and_all_stripped_tokens() {
    let mut vocabulary = Vocabulary::new();

    assert_eq!(vocabulary.add_token(""), Err(InvalidWordError::Empty));
    assert!(vocabulary.is_empty());
}

#[test]
fn skips_invalid_tokens_without_aborting() {
    let vocabulary = Vocabulary::from_tokens(["cat", "!bang", "", "dog"]);

    assert_eq!(vocabulary.get("cat"), Some(1));
    assert_eq!(vocabulary.get("dog"), Some(1));
    assert_eq!(vocabulary.len(), 2);
}

#[test]
fn digits_are_part_of_the_alphabet() {
    let vocabulary = Vocabulary::from_tokens(["42", "4th"]);

    assert_eq!(vocabulary.get("42"), Some(1));
    assert_eq!(vocabulary.get("4th"), Some(1));
}

#[test]
fn add_accumulates_counts() {
    let mut vocabulary = Vocabulary::new();
    let word = Word::try_from("a").unwrap();

    vocabulary.add(word.clone(), 3);
    vocabulary.add(word, 2);

    assert_eq!(vocabulary.get("a"), Some(5));
}
