// src/models.rs
use serde::{Deserialize, Serialize};

use crate::generators::CharacterClass;

pub const DEFAULT_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 256;

// Out-of-range minimums fall back to this count, mirroring the length default.
const NEGATIVE_MINIMUM_FALLBACK: usize = 8;

// Password generation policy.
//
// Fields are private so every value goes through the clamping setters below;
// nothing is clamped later at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordPolicy {
    length: usize,
    use_lowercase: bool,
    use_uppercase: bool,
    use_digits: bool,
    use_symbols: bool,
    min_lowercase: usize,
    min_uppercase: usize,
    min_digits: usize,
    min_symbols: usize,
    avoid_ambiguous: bool,
    force_every_used_class: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            use_lowercase: false,
            use_uppercase: false,
            use_digits: false,
            use_symbols: false,
            min_lowercase: 0,
            min_uppercase: 0,
            min_digits: 0,
            min_symbols: 0,
            avoid_ambiguous: false,
            force_every_used_class: false,
        }
    }
}

fn clamp_length(length: i32) -> usize {
    if length <= 0 {
        DEFAULT_PASSWORD_LENGTH
    } else {
        (length as usize).min(MAX_PASSWORD_LENGTH)
    }
}

// Negative input becomes 8 rather than 0. Suspect, but kept so existing
// callers see the same passwords.
fn clamp_minimum(count: i32) -> usize {
    if count < 0 {
        NEGATIVE_MINIMUM_FALLBACK
    } else {
        (count as usize).min(MAX_PASSWORD_LENGTH)
    }
}

impl PasswordPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// 8 characters of letters and digits with at least one digit, no
    /// ambiguous characters and every selected class represented.
    pub fn recommended() -> Self {
        Self::new()
            .with_length(8)
            .with_lowercase(true)
            .with_uppercase(true)
            .with_digits(true)
            .with_symbols(false)
            .with_min_lowercase(0)
            .with_min_uppercase(0)
            .with_min_digits(1)
            .with_min_symbols(0)
            .with_avoid_ambiguous(true)
            .with_force_every_used_class(true)
    }

    /// Values `<= 0` become 8, values above 256 become 256.
    pub fn with_length(mut self, length: i32) -> Self {
        self.length = clamp_length(length);
        self
    }

    pub fn with_lowercase(mut self, enabled: bool) -> Self {
        self.use_lowercase = enabled;
        self
    }

    pub fn with_uppercase(mut self, enabled: bool) -> Self {
        self.use_uppercase = enabled;
        self
    }

    pub fn with_digits(mut self, enabled: bool) -> Self {
        self.use_digits = enabled;
        self
    }

    pub fn with_symbols(mut self, enabled: bool) -> Self {
        self.use_symbols = enabled;
        self
    }

    pub fn with_min_lowercase(mut self, count: i32) -> Self {
        self.min_lowercase = clamp_minimum(count);
        self
    }

    pub fn with_min_uppercase(mut self, count: i32) -> Self {
        self.min_uppercase = clamp_minimum(count);
        self
    }

    pub fn with_min_digits(mut self, count: i32) -> Self {
        self.min_digits = clamp_minimum(count);
        self
    }

    pub fn with_min_symbols(mut self, count: i32) -> Self {
        self.min_symbols = clamp_minimum(count);
        self
    }

    pub fn with_avoid_ambiguous(mut self, enabled: bool) -> Self {
        self.avoid_ambiguous = enabled;
        self
    }

    pub fn with_force_every_used_class(mut self, enabled: bool) -> Self {
        self.force_every_used_class = enabled;
        self
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn avoid_ambiguous(&self) -> bool {
        self.avoid_ambiguous
    }

    pub fn force_every_used_class(&self) -> bool {
        self.force_every_used_class
    }

    pub fn uses(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lower => self.use_lowercase,
            CharacterClass::Upper => self.use_uppercase,
            CharacterClass::Digit => self.use_digits,
            CharacterClass::Symbol => self.use_symbols,
        }
    }

    pub fn minimum(&self, class: CharacterClass) -> usize {
        match class {
            CharacterClass::Lower => self.min_lowercase,
            CharacterClass::Upper => self.min_uppercase,
            CharacterClass::Digit => self.min_digits,
            CharacterClass::Symbol => self.min_symbols,
        }
    }

    /// Classes enabled in this policy, in catalog order.
    pub fn used_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(|class| self.uses(*class))
    }

    /// Sum of the minimum counts of the enabled classes.
    pub fn required_total(&self) -> usize {
        self.used_classes().map(|class| self.minimum(class)).sum()
    }

    /// Copy of this policy where every enabled class with a zero minimum
    /// requires one character. Other minimums are left as they are.
    pub(crate) fn with_forced_minimums(&self) -> Self {
        let mut forced = self.clone();
        for class in CharacterClass::ALL {
            if !forced.uses(class) || forced.minimum(class) > 0 {
                continue;
            }
            match class {
                CharacterClass::Lower => forced.min_lowercase = 1,
                CharacterClass::Upper => forced.min_uppercase = 1,
                CharacterClass::Digit => forced.min_digits = 1,
                CharacterClass::Symbol => forced.min_symbols = 1,
            }
        }
        forced
    }
}

/// Discrete strength label derived from a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Complexity {
    TooWeak,
    Weak,
    Good,
    Strong,
    VeryStrong,
}

impl Complexity {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=19 => Complexity::TooWeak,
            20..=39 => Complexity::Weak,
            40..=59 => Complexity::Good,
            60..=79 => Complexity::Strong,
            _ => Complexity::VeryStrong,
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Complexity::TooWeak => write!(f, "Too Weak"),
            Complexity::Weak => write!(f, "Weak"),
            Complexity::Good => write!(f, "Good"),
            Complexity::Strong => write!(f, "Strong"),
            Complexity::VeryStrong => write!(f, "Very Strong"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub tier: Complexity,
}

impl ScoreResult {
    pub fn new(score: u8) -> Self {
        let score = score.min(100);
        Self {
            score,
            tier: Complexity::from_score(score),
        }
    }
}

// Output of a single generation, as printed by the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: Option<ScoreResult>,
}
