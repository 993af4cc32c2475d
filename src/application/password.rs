//! Password generator use case

use crate::domain::password::{Recipe, Strength};
use crate::domain::RandomSource;
use crate::error::Result;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: Strength,
}

/// Build a password from a recipe and rate it
pub fn generate<R: RandomSource>(recipe: &Recipe, rng: &mut R) -> Result<GeneratedPassword> {
    let password = recipe.generate(rng)?;
    let strength = recipe.strength(&password);
    // Never log the password itself.
    debug!(?strength, chars = password.chars().count(), "password generated");
    Ok(GeneratedPassword { password, strength })
}
