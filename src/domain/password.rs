//! Password recipes and strength rating

use crate::domain::random::RandomSource;
use crate::error::{Result, ToolbeltError};
use std::fmt;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const WORD_LIST: [&str; 12] = [
    "correct",
    "horse",
    "battery",
    "staple",
    "apple",
    "banana",
    "cherry",
    "date",
    "elderberry",
    "fig",
    "grape",
    "honeydew",
];

/// Which character classes a standard password draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charsets {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub special: bool,
}

impl Charsets {
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            special: true,
        }
    }

    fn is_complete(&self) -> bool {
        self.uppercase && self.lowercase && self.digits && self.special
    }

    /// Concatenated alphabet, in upper/lower/digit/special order
    pub fn alphabet(&self) -> Vec<char> {
        let mut chars = String::new();
        if self.uppercase {
            chars.push_str(UPPERCASE);
        }
        if self.lowercase {
            chars.push_str(LOWERCASE);
        }
        if self.digits {
            chars.push_str(DIGITS);
        }
        if self.special {
            chars.push_str(SPECIAL);
        }
        chars.chars().collect()
    }
}

impl Default for Charsets {
    fn default() -> Self {
        Self::all()
    }
}

/// How to build a password
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipe {
    Standard { length: usize, charsets: Charsets },
    Xkcd { words: usize },
    Pin { length: usize },
    Phrase { phrase: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Strong,
    Moderate,
    Weak,
}

impl Strength {
    pub fn advice(&self) -> &'static str {
        match self {
            Strength::Strong => "Good job!",
            Strength::Moderate => {
                "Consider using a longer PIN or a different algorithm for sensitive accounts."
            }
            Strength::Weak => "Consider increasing length or complexity.",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::Strong => "Strong",
            Strength::Moderate => "Moderate",
            Strength::Weak => "Weak",
        };
        f.write_str(label)
    }
}

impl Recipe {
    /// Build a password. Phrase transformation is deterministic and does not
    /// touch the random source.
    pub fn generate<R: RandomSource>(&self, rng: &mut R) -> Result<String> {
        match self {
            Recipe::Standard { length, charsets } => {
                require_positive("length", *length)?;
                let alphabet = charsets.alphabet();
                if alphabet.is_empty() {
                    return Err(ToolbeltError::InvalidInput(
                        "select at least one character set".to_string(),
                    ));
                }
                (0..*length).map(|_| rng.pick(&alphabet).copied()).collect()
            }
            Recipe::Xkcd { words } => {
                require_positive("words", *words)?;
                let picked = (0..*words)
                    .map(|_| rng.pick(&WORD_LIST).copied())
                    .collect::<Result<Vec<&str>>>()?;
                Ok(picked.join("-"))
            }
            Recipe::Pin { length } => {
                require_positive("length", *length)?;
                let digits: Vec<char> = DIGITS.chars().collect();
                (0..*length).map(|_| rng.pick(&digits).copied()).collect()
            }
            Recipe::Phrase { phrase } => {
                if phrase.is_empty() {
                    return Err(ToolbeltError::InvalidInput(
                        "please enter a phrase".to_string(),
                    ));
                }
                Ok(transform_phrase(phrase))
            }
        }
    }

    /// Rate a password produced by this recipe
    pub fn strength(&self, password: &str) -> Strength {
        match self {
            Recipe::Standard { length, charsets } if *length >= 12 && charsets.is_complete() => {
                Strength::Strong
            }
            Recipe::Xkcd { words } if *words >= 4 => Strength::Strong,
            Recipe::Pin { length } if *length >= 6 => Strength::Moderate,
            Recipe::Phrase { .. } if password.chars().count() >= 12 => Strength::Strong,
            _ => Strength::Weak,
        }
    }
}

fn require_positive(what: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(ToolbeltError::InvalidInput(format!(
            "{} must be greater than zero",
            what
        )));
    }
    Ok(())
}

/// Leetspeak substitution, case-insensitive on the lookup
pub fn transform_phrase(phrase: &str) -> String {
    phrase
        .chars()
        .map(|c| match c.to_ascii_lowercase() {
            'a' => '@',
            'e' => '3',
            'i' | 'l' => '1',
            'o' => '0',
            's' => '$',
            't' => '7',
            'b' => '8',
            'g' => '9',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::random::ScriptedRandom;

    #[test]
    fn test_transform_phrase() {
        assert_eq!(transform_phrase("Big Tables"), "819 7@813$");
        assert_eq!(transform_phrase("xyz 123"), "xyz 123");
    }

    #[test]
    fn test_standard_uses_selected_alphabet() {
        let recipe = Recipe::Standard {
            length: 16,
            charsets: Charsets {
                uppercase: false,
                lowercase: false,
                digits: true,
                special: false,
            },
        };
        let mut rng = ScriptedRandom::new((0..16).collect());
        let password = recipe.generate(&mut rng).unwrap();
        assert_eq!(password.len(), 16);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
        assert!(password.starts_with("0123456789012345"));
    }

    #[test]
    fn test_standard_requires_a_charset() {
        let recipe = Recipe::Standard {
            length: 8,
            charsets: Charsets {
                uppercase: false,
                lowercase: false,
                digits: false,
                special: false,
            },
        };
        let mut rng = ScriptedRandom::new(vec![0]);
        assert!(recipe.generate(&mut rng).is_err());
    }

    #[test]
    fn test_xkcd_joins_words() {
        let recipe = Recipe::Xkcd { words: 4 };
        let mut rng = ScriptedRandom::new(vec![0, 1, 2, 3]);
        assert_eq!(
            recipe.generate(&mut rng).unwrap(),
            "correct-horse-battery-staple"
        );
    }

    #[test]
    fn test_pin_is_digits() {
        let recipe = Recipe::Pin { length: 6 };
        let mut rng = ScriptedRandom::new(vec![9, 8, 7]);
        assert_eq!(recipe.generate(&mut rng).unwrap(), "987987");
    }

    #[test]
    fn test_zero_length_rejected() {
        let mut rng = ScriptedRandom::new(vec![0]);
        assert!(Recipe::Pin { length: 0 }.generate(&mut rng).is_err());
        assert!(Recipe::Xkcd { words: 0 }.generate(&mut rng).is_err());
    }

    #[test]
    fn test_strength_rules() {
        let strong = Recipe::Standard {
            length: 12,
            charsets: Charsets::all(),
        };
        assert_eq!(strong.strength("x"), Strength::Strong);

        let short = Recipe::Standard {
            length: 11,
            charsets: Charsets::all(),
        };
        assert_eq!(short.strength("x"), Strength::Weak);

        assert_eq!(Recipe::Xkcd { words: 4 }.strength(""), Strength::Strong);
        assert_eq!(Recipe::Xkcd { words: 3 }.strength(""), Strength::Weak);
        assert_eq!(Recipe::Pin { length: 6 }.strength(""), Strength::Moderate);
        assert_eq!(Recipe::Pin { length: 4 }.strength(""), Strength::Weak);

        let phrase = Recipe::Phrase {
            phrase: "ignored".to_string(),
        };
        assert_eq!(phrase.strength("twelve chars"), Strength::Strong);
        assert_eq!(phrase.strength("short"), Strength::Weak);
    }
}
