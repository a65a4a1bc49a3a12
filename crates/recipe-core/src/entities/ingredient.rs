//! Ingredient lines of a recipe

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One ingredient line: how much of what, in which unit.
///
/// Ingredient and unit names are shared dictionaries; a recipe only stores
/// its lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub unit: String,
    pub amount: i32,
}

impl RecipeIngredient {
    pub const MAX_NAME_LENGTH: usize = 100;
    pub const MAX_UNIT_LENGTH: usize = 30;
    pub const MIN_AMOUNT: i32 = 1;
    pub const MAX_AMOUNT: i32 = 1000;

    pub fn new(name: impl Into<String>, unit: impl Into<String>, amount: i32) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            amount,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let name_len = self.name.trim().chars().count();
        if name_len == 0 || name_len > Self::MAX_NAME_LENGTH {
            return Err(DomainError::ValidationError(format!(
                "ingredient name must be 1-{} characters",
                Self::MAX_NAME_LENGTH
            )));
        }
        let unit_len = self.unit.trim().chars().count();
        if unit_len == 0 || unit_len > Self::MAX_UNIT_LENGTH {
            return Err(DomainError::ValidationError(format!(
                "ingredient unit must be 1-{} characters",
                Self::MAX_UNIT_LENGTH
            )));
        }
        if !(Self::MIN_AMOUNT..=Self::MAX_AMOUNT).contains(&self.amount) {
            return Err(DomainError::ValidationError(format!(
                "ingredient amount must be between {} and {}",
                Self::MIN_AMOUNT,
                Self::MAX_AMOUNT
            )));
        }
        Ok(())
    }

    /// Trimmed copy, the form stored in the dictionaries
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            unit: self.unit.trim().to_string(),
            amount: self.amount,
        }
    }
}

/// Validate a full ingredient list: every line on its own, and no ingredient
/// named twice (case-insensitive).
pub fn validate_ingredients(ingredients: &[RecipeIngredient]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(ingredients.len());
    for ingredient in ingredients {
        ingredient.validate()?;
        if !seen.insert(ingredient.name.trim().to_lowercase()) {
            return Err(DomainError::ValidationError(format!(
                "ingredient {} is listed twice",
                ingredient.name.trim()
            )));
        }
    }
    Ok(())
}
