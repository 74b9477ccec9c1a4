use crate::error::ContractError;
use crate::types::Ingredient;
use soroban_sdk::{String, Vec};

pub const MAX_NAME_LEN: u32 = 100;
pub const MAX_PAGE_SIZE: u32 = 100;

pub fn validate_name(name: &String) -> Result<(), ContractError> {
    if name.len() == 0 || name.len() > MAX_NAME_LEN {
        return Err(ContractError::InvalidName);
    }
    Ok(())
}

/// Every ingredient needs a name and a composition in 1..=100 percent,
/// and the whole formulation may not exceed 100 percent.
pub fn validate_ingredients(ingredients: &Vec<Ingredient>) -> Result<(), ContractError> {
    if ingredients.is_empty() {
        return Err(ContractError::InvalidIngredient);
    }

    let mut total: u32 = 0;
    for ingredient in ingredients.iter() {
        if ingredient.name.len() == 0 || ingredient.name.len() > MAX_NAME_LEN {
            return Err(ContractError::InvalidIngredient);
        }
        if ingredient.composition == 0 || ingredient.composition > 100 {
            return Err(ContractError::InvalidIngredient);
        }
        total += ingredient.composition;
        if total > 100 {
            return Err(ContractError::InvalidIngredient);
        }
    }

    Ok(())
}

pub fn page_limit(limit: u32) -> Result<u32, ContractError> {
    if limit == 0 {
        return Err(ContractError::InvalidInput);
    }
    Ok(limit.min(MAX_PAGE_SIZE))
}
