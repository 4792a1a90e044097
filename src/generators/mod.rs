// src/generators/mod.rs
mod charset;
mod plan;
mod password;

pub use charset::CharacterClass;
pub use plan::{GenerationPlan, PlanToken};
pub use password::{generate, validate, PasswordGenerator, ValidationError};
