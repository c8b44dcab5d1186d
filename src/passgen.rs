//   ____ _       _               ____
//  / ___(_)_ __ | |__   ___ _ __/ ___| ___ _ __
// | |   | | '_ \| '_ \ / _ \ '__| |  _ / _ \ '_ \
// | |___| | |_) | | | |  __/ |  | |_| |  __/ | | |
//  \____|_| .__/|_| |_|\___|_|   \____|\___|_| |_|
//         |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest length the front end offers.
pub const MIN_LENGTH: usize = 8;
/// Longest length the front end offers.
pub const MAX_LENGTH: usize = 64;
pub const DEFAULT_LENGTH: usize = 16;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
/// The 32 ASCII punctuation characters, in code point order.
const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PassGenError {
    #[error("At least one character set must be included")]
    EmptyPool,
    #[error("Password length must be a positive number")]
    InvalidLength,
}

/// A named group of characters that can be switched on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Declaration order, which is also the pool order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn charset(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Digits => "digits",
            CharacterClass::Symbols => "symbols",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Snapshot of which character classes are eligible for sampling.
///
/// The front end builds one of these from its current options before every
/// call; nothing in the library holds on to it. Fields left out of a
/// serialized selection are treated as enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterClassSelection {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for CharacterClassSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl CharacterClassSelection {
    pub const fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
        }
    }

    pub fn only(class: CharacterClass) -> Self {
        Self::none().with(class, true)
    }

    /// Returns a copy with `class` switched to `enabled`.
    pub fn with(mut self, class: CharacterClass, enabled: bool) -> Self {
        match class {
            CharacterClass::Uppercase => self.uppercase = enabled,
            CharacterClass::Lowercase => self.lowercase = enabled,
            CharacterClass::Digits => self.digits = enabled,
            CharacterClass::Symbols => self.symbols = enabled,
        }
        self
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digits => self.digits,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn enabled_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.is_enabled(*class))
    }

    pub fn is_empty(&self) -> bool {
        self.enabled_classes().next().is_none()
    }
}

/// Characters eligible for sampling, concatenated in class declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    pub fn new(selection: &CharacterClassSelection) -> Result<Self, PassGenError> {
        let chars: Vec<char> = selection
            .enabled_classes()
            .flat_map(|class| class.charset().chars())
            .collect();

        if chars.is_empty() {
            return Err(PassGenError::EmptyPool);
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; an empty pool cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    fn sample<R>(&self, length: usize, rng: &mut R) -> String
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        // Pool is never empty, so the range is never empty.
        (0..length)
            .map(|_| self.chars[rng.gen_range(0..self.chars.len())])
            .collect()
    }
}

/// A freshly generated password. Read-only once built.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Keep the secret out of `{:?}` output and therefore out of logs.
impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GeneratedPassword").field(&"***").finish()
    }
}

/// Clamps a requested length into `[MIN_LENGTH, MAX_LENGTH]`.
pub fn clamp_length(length: usize) -> usize {
    length.clamp(MIN_LENGTH, MAX_LENGTH)
}

/// Generates a password from the OS random source.
///
/// Every character is drawn independently and uniformly, with replacement,
/// from the pool implied by `selection`.
///
/// # Errors
/// * [`PassGenError::EmptyPool`] when no class is enabled.
/// * [`PassGenError::InvalidLength`] when `length` is zero.
pub fn generate(
    selection: &CharacterClassSelection,
    length: usize,
) -> Result<GeneratedPassword, PassGenError> {
    let mut rng = OsRng;
    generate_with(selection, length, &mut rng)
}

/// Same as [`generate`], drawing from `rng`.
///
/// The `CryptoRng` bound keeps general-purpose generators out.
pub fn generate_with<R>(
    selection: &CharacterClassSelection,
    length: usize,
    rng: &mut R,
) -> Result<GeneratedPassword, PassGenError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let pool = CharacterPool::new(selection)?;
    if length == 0 {
        return Err(PassGenError::InvalidLength);
    }

    tracing::debug!(pool_size = pool.len(), length, "generating password");
    Ok(GeneratedPassword(pool.sample(length, rng)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_sizes() {
        assert_eq!(CharacterClass::Uppercase.charset().len(), 26);
        assert_eq!(CharacterClass::Lowercase.charset().len(), 26);
        assert_eq!(CharacterClass::Digits.charset().len(), 10);
        assert_eq!(CharacterClass::Symbols.charset().len(), 32);
    }

    #[test]
    fn test_symbols_are_ascii_punctuation() {
        let expected: String = (0u8..=127)
            .map(char::from)
            .filter(|c| c.is_ascii_punctuation())
            .collect();
        assert_eq!(SYMBOLS, expected);
    }

    #[test]
    fn test_pool_keeps_declaration_order() {
        let pool = CharacterPool::new(&CharacterClassSelection::all()).unwrap();
        let joined: String = pool.chars().iter().collect();
        assert_eq!(joined, format!("{UPPERCASE}{LOWERCASE}{DIGITS}{SYMBOLS}"));
        assert_eq!(pool.len(), 94);
    }

    #[test]
    fn test_pool_rejects_empty_selection() {
        let result = CharacterPool::new(&CharacterClassSelection::none());
        assert_eq!(result, Err(PassGenError::EmptyPool));
    }

    #[test]
    fn test_selection_builder() {
        let selection = CharacterClassSelection::only(CharacterClass::Digits)
            .with(CharacterClass::Uppercase, true);
        let classes: Vec<_> = selection.enabled_classes().collect();
        assert_eq!(classes, vec![CharacterClass::Uppercase, CharacterClass::Digits]);
        assert!(!selection.is_empty());
        assert!(CharacterClassSelection::none().is_empty());
    }

    #[test]
    fn test_sample_always_yields_requested_length() {
        let pool = CharacterPool::new(&CharacterClassSelection::only(CharacterClass::Digits)).unwrap();
        let mut rng = OsRng;
        for length in [1, 7, MAX_LENGTH, 1000] {
            let sampled = pool.sample(length, &mut rng);
            assert_eq!(sampled.chars().count(), length);
            assert!(sampled.chars().all(|c| pool.contains(c)));
        }
    }

    #[test]
    fn test_default_selection_enables_everything() {
        assert_eq!(CharacterClassSelection::default(), CharacterClassSelection::all());
    }

    #[test]
    fn test_debug_hides_password() {
        let password = generate(&CharacterClassSelection::all(), 16).unwrap();
        let debug = format!("{:?}", password);
        assert!(!debug.contains(password.as_str()));
    }

    #[test]
    fn test_clamp_length() {
        assert_eq!(clamp_length(0), MIN_LENGTH);
        assert_eq!(clamp_length(30), 30);
        assert_eq!(clamp_length(1000), MAX_LENGTH);
    }
}
