// src/generators/charset.rs
use serde::{Deserialize, Serialize};

/// A named set of interchangeable characters a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Lower,
    Upper,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Iteration order used when laying out required characters.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// Characters that are always eligible for this class.
    pub fn safe_characters(self) -> &'static str {
        match self {
            CharacterClass::Lower => "abcdefghjkmnpqrstuvwxyz",
            CharacterClass::Upper => "ABCDEFGHJKMNPQRSTUVWXYZ",
            CharacterClass::Digit => "23456789",
            CharacterClass::Symbol => "!@#$%^&*",
        }
    }

    /// Visually confusable characters, only eligible when ambiguity avoidance is off.
    /// Symbols have none.
    pub fn ambiguous_characters(self) -> &'static str {
        match self {
            CharacterClass::Lower => "ilo",
            CharacterClass::Upper => "ILO",
            CharacterClass::Digit => "10",
            CharacterClass::Symbol => "",
        }
    }

    pub fn index(self) -> usize {
        match self {
            CharacterClass::Lower => 0,
            CharacterClass::Upper => 1,
            CharacterClass::Digit => 2,
            CharacterClass::Symbol => 3,
        }
    }

    /// Unshuffled character pool for this class.
    pub fn pool(self, avoid_ambiguous: bool) -> Vec<char> {
        let mut chars: Vec<char> = self.safe_characters().chars().collect();
        if !avoid_ambiguous {
            chars.extend(self.ambiguous_characters().chars());
        }
        chars
    }

    pub fn contains(self, c: char, avoid_ambiguous: bool) -> bool {
        self.safe_characters().contains(c)
            || (!avoid_ambiguous && self.ambiguous_characters().contains(c))
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharacterClass::Lower => write!(f, "lowercase"),
            CharacterClass::Upper => write!(f, "uppercase"),
            CharacterClass::Digit => write!(f, "digit"),
            CharacterClass::Symbol => write!(f, "symbol"),
        }
    }
}
