// src/generators/password.rs
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

use super::plan::{GenerationPlan, PlanToken};
use crate::models::{PasswordPolicy, ScoreResult};
use crate::strength::{self, ScoreError};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("At least one character set should be selected.")]
    NoCharacterClassSelected,

    #[error("Password length should be greater than sum of minimum character counts.")]
    MinimumsExceedLength,
}

pub type Result<T> = std::result::Result<T, ValidationError>;

/// Checks that a policy can produce a password at all.
pub fn validate(policy: &PasswordPolicy) -> Result<()> {
    if policy.used_classes().next().is_none() {
        return Err(ValidationError::NoCharacterClassSelected);
    }

    if policy.required_total() > policy.length() {
        return Err(ValidationError::MinimumsExceedLength);
    }

    Ok(())
}

// Shuffled character pools, one per class plus the combined pool for `Any`.
struct CharacterPools {
    by_class: [Vec<char>; 4],
    any: Vec<char>,
}

impl CharacterPools {
    fn build<R: Rng + ?Sized>(policy: &PasswordPolicy, rng: &mut R) -> Self {
        let mut by_class: [Vec<char>; 4] = Default::default();
        let mut any = Vec::new();

        for class in policy.used_classes() {
            let mut pool = class.pool(policy.avoid_ambiguous());
            pool.shuffle(rng);
            any.extend_from_slice(&pool);
            by_class[class.index()] = pool;
        }
        any.shuffle(rng);

        Self { by_class, any }
    }

    fn for_token(&self, token: PlanToken) -> &[char] {
        match token {
            PlanToken::Class(class) => &self.by_class[class.index()],
            PlanToken::Any => &self.any,
        }
    }
}

/// Generates a password satisfying `policy`, drawing all randomness from `rng`.
///
/// When the policy forces every used class, classes with a zero minimum are
/// treated as requiring one character. The caller's policy is not modified.
pub fn generate<R>(policy: &PasswordPolicy, rng: &mut R) -> Result<String>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let policy = if policy.force_every_used_class() {
        policy.with_forced_minimums()
    } else {
        policy.clone()
    };

    if let Err(e) = validate(&policy) {
        log::warn!("Rejected password policy: {}", e);
        return Err(e);
    }

    let pools = CharacterPools::build(&policy, rng);
    let mut plan = GenerationPlan::build(&policy);
    plan.shuffle(rng);

    log::debug!(
        "Generating {} characters: {} required, {} from a pool of {}",
        plan.len(),
        policy.required_total(),
        plan.len() - policy.required_total(),
        pools.any.len()
    );

    let password = plan
        .tokens()
        .iter()
        .map(|token| {
            let pool = pools.for_token(*token);
            pool[rng.gen_range(0..pool.len())]
        })
        .collect();

    Ok(password)
}

/// Password generator owning its random source.
pub struct PasswordGenerator<R = OsRng> {
    rng: R,
}

impl PasswordGenerator<OsRng> {
    pub fn new() -> Self {
        PasswordGenerator { rng: OsRng }
    }
}

impl Default for PasswordGenerator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> PasswordGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        PasswordGenerator { rng }
    }

    pub fn generate_password(&mut self, policy: &PasswordPolicy) -> Result<String> {
        generate(policy, &mut self.rng)
    }

    pub fn analyze_password_strength(&self, password: &str) -> std::result::Result<ScoreResult, ScoreError> {
        strength::score(password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::CharacterClass;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn rng() -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(0x5eed)
    }

    fn count_class(password: &str, class: CharacterClass) -> usize {
        password.chars().filter(|c| class.contains(*c, false)).count()
    }

    #[test]
    fn test_validate_requires_a_class() {
        let policy = PasswordPolicy::new().with_length(8);
        assert_eq!(validate(&policy), Err(ValidationError::NoCharacterClassSelected));
    }

    #[test]
    fn test_validate_rejects_minimums_over_length() {
        let policy = PasswordPolicy::new()
            .with_length(8)
            .with_digits(true)
            .with_min_digits(12);
        assert_eq!(validate(&policy), Err(ValidationError::MinimumsExceedLength));
    }

    #[test]
    fn test_validate_accepts_minimums_equal_to_length() {
        let policy = PasswordPolicy::new()
            .with_length(6)
            .with_lowercase(true)
            .with_symbols(true)
            .with_min_lowercase(3)
            .with_min_symbols(3);
        assert_eq!(validate(&policy), Ok(()));
    }

    #[test]
    fn test_error_messages_are_fixed() {
        assert_eq!(
            ValidationError::NoCharacterClassSelected.to_string(),
            "At least one character set should be selected."
        );
        assert_eq!(
            ValidationError::MinimumsExceedLength.to_string(),
            "Password length should be greater than sum of minimum character counts."
        );
    }

    #[test]
    fn test_generate_propagates_validation_error() {
        let policy = PasswordPolicy::new().with_length(12);
        assert_eq!(
            generate(&policy, &mut rng()),
            Err(ValidationError::NoCharacterClassSelected)
        );
    }

    #[test]
    fn test_forcing_can_push_minimums_over_length() {
        // two classes forced to one character each cannot fit in one position
        let policy = PasswordPolicy::new()
            .with_length(1)
            .with_lowercase(true)
            .with_uppercase(true)
            .with_force_every_used_class(true);

        assert_eq!(validate(&policy), Ok(()));
        assert_eq!(
            generate(&policy, &mut rng()),
            Err(ValidationError::MinimumsExceedLength)
        );
    }

    #[test]
    fn test_generate_meets_minimums() {
        let policy = PasswordPolicy::new()
            .with_length(20)
            .with_lowercase(true)
            .with_uppercase(true)
            .with_digits(true)
            .with_symbols(true)
            .with_min_lowercase(2)
            .with_min_uppercase(3)
            .with_min_digits(4)
            .with_min_symbols(5);

        let mut rng = rng();
        for _ in 0..50 {
            let password = generate(&policy, &mut rng).unwrap();
            assert_eq!(password.chars().count(), 20);
            assert!(count_class(&password, CharacterClass::Lower) >= 2);
            assert!(count_class(&password, CharacterClass::Upper) >= 3);
            assert!(count_class(&password, CharacterClass::Digit) >= 4);
            assert!(count_class(&password, CharacterClass::Symbol) >= 5);
        }
    }

    #[test]
    fn test_forced_classes_all_appear() {
        let policy = PasswordPolicy::new()
            .with_length(4)
            .with_lowercase(true)
            .with_uppercase(true)
            .with_digits(true)
            .with_symbols(true)
            .with_force_every_used_class(true);

        let mut rng = rng();
        for _ in 0..50 {
            let password = generate(&policy, &mut rng).unwrap();
            for class in CharacterClass::ALL {
                assert_eq!(count_class(&password, class), 1, "{} in {}", class, password);
            }
        }
    }

    #[test]
    fn test_unused_classes_never_appear() {
        let policy = PasswordPolicy::new().with_length(64).with_uppercase(true);

        let password = generate(&policy, &mut rng()).unwrap();
        assert!(password.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_ambiguous_characters_appear_when_allowed() {
        let policy = PasswordPolicy::new()
            .with_length(256)
            .with_digits(true)
            .with_avoid_ambiguous(false);

        let password = generate(&policy, &mut rng()).unwrap();
        // 256 draws from 10 digits leave essentially no chance of missing both
        assert!(password.contains('0') || password.contains('1'));
    }

    #[test]
    fn test_same_seed_same_password() {
        let policy = PasswordPolicy::recommended().with_length(24);

        let a = generate(&policy, &mut ChaCha20Rng::seed_from_u64(42)).unwrap();
        let b = generate(&policy, &mut ChaCha20Rng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generator_struct_uses_injected_rng() {
        let mut generator = PasswordGenerator::with_rng(rng());
        let password = generator
            .generate_password(&PasswordPolicy::recommended())
            .unwrap();
        assert_eq!(password.len(), 8);
        assert!(generator.analyze_password_strength(&password).is_ok());
    }
}
