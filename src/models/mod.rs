//! Data models
//!
//! Serializable structs for recipe templates and their scaled form.

mod featured;
mod recipe;

pub use featured::FeaturedRecipe;
pub use recipe::{Ingredient, RecipeTemplate, ScaledIngredient, ScaledRecipe, UnitSystem};
