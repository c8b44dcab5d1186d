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
// Strength scoring

use std::fmt;

use serde::Serialize;
use zxcvbn::{Score, zxcvbn};

use crate::passgen::CharacterClassSelection;

/// Advisory strength of a generated password, from 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Weak",
            2 => "Fair",
            3 => "Good",
            _ => "Strong",
        }
    }

    /// Share of the strength bar to fill.
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / f32::from(Self::MAX)
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.label(), self.0, Self::MAX)
    }
}

/// Scores a selection and length.
///
/// Looks only at the options, never at the generated characters. Lowercase
/// does not count toward the class bonus.
pub fn score(selection: &CharacterClassSelection, length: usize) -> StrengthScore {
    let mut score = StrengthScore::MIN;

    if length >= 12 {
        score += 1;
    }

    let counted = [selection.uppercase, selection.digits, selection.symbols]
        .iter()
        .filter(|&&enabled| enabled)
        .count();
    if counted >= 2 {
        score += 1;
    }

    if length >= 20 && selection.symbols {
        score += 1;
    }

    StrengthScore(score)
}

/// zxcvbn estimate for an arbitrary password.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub score: u8,
    pub rating: &'static str,
    pub guesses_log10: f64,
    pub suggestions: Vec<String>,
}

pub fn assess_password(password: &str) -> Assessment {
    let estimate = zxcvbn(password, &[]);
    let suggestions = estimate.feedback().map_or_else(Vec::new, |f| {
        f.suggestions().iter().map(|s| s.to_string()).collect()
    });

    let (score, rating) = match estimate.score() {
        Score::Zero => (0, "Very weak"),
        Score::One => (1, "Weak"),
        Score::Two => (2, "Medium"),
        Score::Three => (3, "Strong"),
        Score::Four => (4, "Very strong"),
        _ => (0, "Unknown"),
    };

    Assessment {
        score,
        rating,
        guesses_log10: estimate.guesses_log10(),
        suggestions,
    }
}
