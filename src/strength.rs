// src/strength.rs
//
// Heuristic password meter, after the passwordmeter.com formula. Every
// counter below feeds the final score, so the arithmetic (integer division,
// incremental repeat renormalisation) is kept exactly as the formula defines it.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Complexity, ScoreResult};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    #[error("Password cannot be empty")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, ScoreError>;

const ALPHAS: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMERICS: &str = "01234567890";
const SYMBOLS: &str = ")!@#$%^&*()";

const MIN_PASSWORD_LENGTH: i64 = 8;

const MULTIPLIER_LENGTH: i64 = 4;
const MULTIPLIER_NUMBER: i64 = 4;
const MULTIPLIER_SYMBOL: i64 = 6;
const MULTIPLIER_MID_CHAR: i64 = 2;
const MULTIPLIER_CONSECUTIVE: i64 = 2;
const MULTIPLIER_SEQUENTIAL: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharKind {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharKind {
    // [A-Z], [a-z], [0-9], [^A-Za-z0-9_]; underscore belongs to none.
    fn of(c: char) -> Option<Self> {
        match c {
            'A'..='Z' => Some(CharKind::Upper),
            'a'..='z' => Some(CharKind::Lower),
            '0'..='9' => Some(CharKind::Digit),
            '_' => None,
            _ => Some(CharKind::Symbol),
        }
    }

    fn slot(self) -> usize {
        match self {
            CharKind::Upper => 0,
            CharKind::Lower => 1,
            CharKind::Digit => 2,
            CharKind::Symbol => 3,
        }
    }
}

// Same set as the regex class \s: space, \t, \n, \x0B, \x0C, \r.
fn is_pattern_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Every intermediate counter of a strength check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub length: usize,
    pub uppercase: usize,
    pub lowercase: usize,
    pub digits: usize,
    pub symbols: usize,
    pub middle_digits_or_symbols: usize,
    pub letters_only: bool,
    pub digits_only: bool,
    pub repeated_characters: usize,
    pub repeat_penalty: i64,
    pub consecutive_uppercase: usize,
    pub consecutive_lowercase: usize,
    pub consecutive_digits: usize,
    pub consecutive_symbols: usize,
    pub consecutive_same_type: usize,
    pub sequential_letters: usize,
    pub sequential_digits: usize,
    pub sequential_symbols: usize,
    pub requirements_met: usize,
    pub score: u8,
    pub tier: Complexity,
}

impl StrengthReport {
    pub fn result(&self) -> ScoreResult {
        ScoreResult::new(self.score)
    }
}

/// Scores `password` on a 0-100 scale.
pub fn score(password: &str) -> Result<ScoreResult> {
    analyze(password).map(|report| report.result())
}

/// Runs the full strength check and returns every counter alongside the score.
pub fn analyze(password: &str) -> Result<StrengthReport> {
    if password.is_empty() {
        return Err(ScoreError::EmptyInput);
    }

    let length = password.chars().count() as i64;
    let chars: Vec<char> = password.chars().filter(|c| !is_pattern_whitespace(*c)).collect();
    let n = chars.len() as i64;

    let mut counts = [0usize; 4];
    let mut consecutive = [0usize; 4];
    let mut last_seen: [Option<usize>; 4] = [None; 4];
    let mut consecutive_same_type = 0;
    let mut mid_chars = 0;
    let mut repeated_chars: i64 = 0;
    let mut repeat_increment: f64 = 0.0;

    for (a, &c) in chars.iter().enumerate() {
        if let Some(kind) = CharKind::of(c) {
            let slot = kind.slot();
            if a > 0 && last_seen[slot] == Some(a - 1) {
                consecutive[slot] += 1;
                consecutive_same_type += 1;
            }
            last_seen[slot] = Some(a);
            counts[slot] += 1;

            if matches!(kind, CharKind::Digit | CharKind::Symbol) && a > 0 && (a as i64) < n - 1 {
                mid_chars += 1;
            }
        }

        // Closer duplicates cost more: each adds n / distance.
        let mut char_exists = false;
        for (b, &other) in chars.iter().enumerate() {
            if other == c && a != b {
                char_exists = true;
                repeat_increment += (n / (b as i64 - a as i64)).abs() as f64;
            }
        }

        if char_exists {
            repeated_chars += 1;
            let unique_chars = n - repeated_chars;
            repeat_increment = if unique_chars > 0 {
                (repeat_increment / unique_chars as f64).ceil()
            } else {
                repeat_increment.ceil()
            };
        }
    }

    let lowered = password.to_lowercase();
    let sequential_letters = count_sequences(&lowered, ALPHAS, 23);
    let sequential_digits = count_sequences(&lowered, NUMERICS, 8);
    let sequential_symbols = count_sequences(&lowered, SYMBOLS, 8);

    let [upper, lower, digits, symbols] = counts.map(|count| count as i64);
    let [consecutive_upper, consecutive_lower, consecutive_digits, _] =
        consecutive.map(|count| count as i64);

    let mut score = length * MULTIPLIER_LENGTH;

    if upper > 0 && upper < length {
        score += (length - upper) * 2;
    }
    if lower > 0 && lower < length {
        score += (length - lower) * 2;
    }
    if digits > 0 && digits < length {
        score += digits * MULTIPLIER_NUMBER;
    }
    if symbols > 0 {
        score += symbols * MULTIPLIER_SYMBOL;
    }
    if mid_chars > 0 {
        score += mid_chars as i64 * MULTIPLIER_MID_CHAR;
    }

    let letters_only = (lower > 0 || upper > 0) && symbols == 0 && digits == 0;
    if letters_only {
        score -= length;
    }
    let digits_only = lower == 0 && upper == 0 && symbols == 0 && digits > 0;
    if digits_only {
        score -= length;
    }
    if repeated_chars > 0 {
        // truncates toward zero
        score = (score as f64 - repeat_increment) as i64;
    }
    score -= consecutive_upper * MULTIPLIER_CONSECUTIVE;
    score -= consecutive_lower * MULTIPLIER_CONSECUTIVE;
    score -= consecutive_digits * MULTIPLIER_CONSECUTIVE;
    score -= sequential_letters as i64 * MULTIPLIER_SEQUENTIAL;
    score -= sequential_digits as i64 * MULTIPLIER_SEQUENTIAL;
    score -= sequential_symbols as i64 * MULTIPLIER_SEQUENTIAL;

    let requirements_met = [
        length >= MIN_PASSWORD_LENGTH,
        upper >= 1,
        lower >= 1,
        digits >= 1,
        symbols >= 1,
    ]
    .iter()
    .filter(|met| **met)
    .count();

    let minimum_requirements = if length >= MIN_PASSWORD_LENGTH { 3 } else { 4 };
    if requirements_met > minimum_requirements {
        score += requirements_met as i64 * 2;
    }

    let score = score.clamp(0, 100) as u8;

    Ok(StrengthReport {
        length: length as usize,
        uppercase: counts[0],
        lowercase: counts[1],
        digits: counts[2],
        symbols: counts[3],
        middle_digits_or_symbols: mid_chars,
        letters_only,
        digits_only,
        repeated_characters: repeated_chars as usize,
        repeat_penalty: repeat_increment as i64,
        consecutive_uppercase: consecutive[0],
        consecutive_lowercase: consecutive[1],
        consecutive_digits: consecutive[2],
        consecutive_symbols: consecutive[3],
        consecutive_same_type,
        sequential_letters,
        sequential_digits,
        sequential_symbols,
        requirements_met,
        score,
        tier: Complexity::from_score(score),
    })
}

// Counts the 3-character windows of `alphabet`, among the first `windows`,
// that appear in `haystack` forwards or backwards.
fn count_sequences(haystack: &str, alphabet: &str, windows: usize) -> usize {
    (0..windows)
        .filter(|&start| {
            let forward = &alphabet[start..start + 3];
            let reverse: String = forward.chars().rev().collect();
            haystack.contains(forward) || haystack.contains(reverse.as_str())
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score_of(password: &str) -> u8 {
        score(password).unwrap().score
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(score(""), Err(ScoreError::EmptyInput));
        assert_eq!(ScoreError::EmptyInput.to_string(), "Password cannot be empty");
    }

    #[test]
    fn test_reference_scores() {
        assert_eq!(score_of("a"), 3);
        assert_eq!(score_of("password"), 8);
        assert_eq!(score_of("qwertyui"), 10);
        assert_eq!(score_of("Password1"), 54);
        assert_eq!(score_of("P@ssw0rd!"), 82);
        assert_eq!(score_of("abc123"), 32);
        assert_eq!(score_of("aA1!"), 40);
        assert_eq!(score_of("!@#"), 29);
        assert_eq!(score_of("12345678"), 4);
        assert_eq!(score_of("9fK#2mQ!x7Lp"), 100);
        assert_eq!(score_of("correct horse battery staple"), 40);
    }

    #[test]
    fn test_tiers_follow_scores() {
        assert_eq!(score("password").unwrap().tier, Complexity::TooWeak);
        assert_eq!(score("abc123").unwrap().tier, Complexity::Weak);
        assert_eq!(score("Password1").unwrap().tier, Complexity::Good);
        assert_eq!(score("P@ssw0rd!").unwrap().tier, Complexity::VeryStrong);
    }

    #[test]
    fn test_repeat_penalty_is_renormalised_per_index() {
        let report = analyze("aaaaaaaa").unwrap();
        assert_eq!(report.repeated_characters, 8);
        assert_eq!(report.repeat_penalty, 67);
        assert_eq!(report.score, 0);

        let report = analyze("mississippi").unwrap();
        assert_eq!(report.repeated_characters, 10);
        assert_eq!(report.repeat_penalty, 13);

        let report = analyze("abab").unwrap();
        assert_eq!(report.repeated_characters, 4);
        assert_eq!(report.repeat_penalty, 6);
    }

    #[test]
    fn test_repeated_character_scores_below_distinct_characters() {
        assert!(score_of("kkkkkkkk") < score_of("kqmzhwrt"));
        assert!(score_of("77777777") < score_of("72958364"));
    }

    #[test]
    fn test_whitespace_counts_toward_length_only() {
        // three spaces: no characters to analyse, but length 3 still scores 12
        let report = analyze("   ").unwrap();
        assert_eq!(report.length, 3);
        assert_eq!(report.uppercase + report.lowercase + report.digits + report.symbols, 0);
        assert_eq!(report.score, 12);
    }

    #[test]
    fn test_underscore_belongs_to_no_class() {
        let report = analyze("____").unwrap();
        assert_eq!(report.symbols, 0);
        assert_eq!(report.repeated_characters, 4);
        assert_eq!(report.score, 0);

        // breaks the lowercase run without counting as anything
        let report = analyze("ab_cd").unwrap();
        assert_eq!(report.lowercase, 4);
        assert_eq!(report.consecutive_lowercase, 2);
        assert_eq!(report.score, 13);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        let report = analyze("é").unwrap();
        assert_eq!(report.symbols, 1);
        assert_eq!(report.score, 10);
    }

    #[test]
    fn test_spread_out_repeats_cost_little() {
        let report = analyze("Zz9@Zz9@").unwrap();
        assert_eq!(report.repeated_characters, 8);
        assert_eq!(report.repeat_penalty, 6);
        assert_eq!(report.score, 86);
    }

    #[test]
    fn test_sequences_forward_and_reverse() {
        let report = analyze("abcdefgh").unwrap();
        assert_eq!(report.sequential_letters, 6);
        assert_eq!(report.consecutive_lowercase, 7);

        let report = analyze("CBA").unwrap();
        assert_eq!(report.sequential_letters, 1);

        let report = analyze("!@#").unwrap();
        assert_eq!(report.sequential_symbols, 1);
        assert_eq!(report.consecutive_symbols, 2);
        assert_eq!(report.middle_digits_or_symbols, 1);
    }

    #[test]
    fn test_last_alphabet_window_is_not_scanned() {
        // only 23 windows are checked, so "xyz" is never a sequence
        assert_eq!(analyze("zyx").unwrap().sequential_letters, 0);
        assert_eq!(score_of("zyx"), 5);
    }

    #[test]
    fn test_requirements_bonus() {
        let report = analyze("Hello World 2024").unwrap();
        assert_eq!(report.requirements_met, 4);
        assert_eq!(report.score, 100);

        let report = analyze("aA1!").unwrap();
        assert_eq!(report.requirements_met, 4);
    }
}
