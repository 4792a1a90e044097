// src/lib.rs
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod strength;

pub use generators::{generate, validate, CharacterClass, PasswordGenerator, ValidationError};
pub use models::{Complexity, PasswordPolicy, ScoreResult};
pub use strength::{analyze, score, ScoreError, StrengthReport};
