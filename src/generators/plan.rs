// src/generators/plan.rs
use rand::seq::SliceRandom;
use rand::Rng;

use super::CharacterClass;
use crate::models::PasswordPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanToken {
    Class(CharacterClass),
    Any,
}

/// Which pool each position of the password is drawn from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    tokens: Vec<PlanToken>,
}

impl GenerationPlan {
    /// Required tokens in catalog order, then `Any` up to the policy length.
    /// The policy must already be validated.
    pub fn build(policy: &PasswordPolicy) -> Self {
        let mut tokens = Vec::with_capacity(policy.length());

        for class in policy.used_classes() {
            tokens.extend(std::iter::repeat(PlanToken::Class(class)).take(policy.minimum(class)));
        }

        if tokens.len() < policy.length() {
            tokens.resize(policy.length(), PlanToken::Any);
        }

        Self { tokens }
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tokens.shuffle(rng);
    }

    pub fn tokens(&self) -> &[PlanToken] {
        &self.tokens
    }

    pub(crate) fn len(&self) -> usize {
        self.tokens.len()
    }
}
