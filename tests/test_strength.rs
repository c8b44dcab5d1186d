use ciphergen::passgen::{CharacterClass, CharacterClassSelection};
use ciphergen::strength::*;

#[test]
fn test_score_all_classes_length_16() {
    let score = score(&CharacterClassSelection::all(), 16);
    assert_eq!(score.value(), 3);
}

#[test]
fn test_score_lowercase_only_length_8() {
    let selection = CharacterClassSelection::only(CharacterClass::Lowercase);
    assert_eq!(score(&selection, 8).value(), 1);
}

#[test]
fn test_score_without_lowercase_length_24() {
    let selection = CharacterClassSelection::all().with(CharacterClass::Lowercase, false);
    assert_eq!(score(&selection, 24).value(), 4);
}

#[test]
fn test_lowercase_does_not_count_toward_class_bonus() {
    let selection = CharacterClassSelection::only(CharacterClass::Lowercase)
        .with(CharacterClass::Digits, true);
    assert_eq!(score(&selection, 8).value(), 1);

    let selection = CharacterClassSelection::only(CharacterClass::Uppercase)
        .with(CharacterClass::Digits, true);
    assert_eq!(score(&selection, 8).value(), 2);
}

#[test]
fn test_length_thresholds() {
    let selection = CharacterClassSelection::only(CharacterClass::Symbols);
    assert_eq!(score(&selection, 11).value(), 1);
    assert_eq!(score(&selection, 12).value(), 2);
    assert_eq!(score(&selection, 19).value(), 2);
    assert_eq!(score(&selection, 20).value(), 3);
}

#[test]
fn test_long_password_needs_symbols_for_top_bonus() {
    let selection = CharacterClassSelection::all().with(CharacterClass::Symbols, false);
    assert_eq!(score(&selection, 64).value(), 3);
}

#[test]
fn test_score_is_deterministic_and_bounded() {
    for bits in 0u8..16 {
        let selection = CharacterClassSelection {
            uppercase: bits & 1 != 0,
            lowercase: bits & 2 != 0,
            digits: bits & 4 != 0,
            symbols: bits & 8 != 0,
        };
        for length in 0..=64 {
            let first = score(&selection, length);
            assert_eq!(first, score(&selection, length));
            assert!((StrengthScore::MIN..=StrengthScore::MAX).contains(&first.value()));
        }
    }
}

#[test]
fn test_assess_weak_password() {
    let assessment = assess_password("password");
    assert_eq!(assessment.score, 0);
    assert!(!assessment.suggestions.is_empty());
}

#[test]
fn test_assess_strong_password() {
    let assessment = assess_password("t9#Vq!2xLm@8Rz$Kw&4Pj");
    assert!(assessment.score >= 3);
    assert!(assessment.guesses_log10 > 10.0);
}
