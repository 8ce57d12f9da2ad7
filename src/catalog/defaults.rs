//! Built-in recipe templates and featured recipes

use crate::models::{FeaturedRecipe, Ingredient, RecipeTemplate};

pub fn templates() -> Vec<RecipeTemplate> {
    vec![
        RecipeTemplate {
            id: "cookies".to_string(),
            name: "Cozy Cookies".to_string(),
            base_servings: 24,
            ingredients: vec![
                Ingredient::new("Butter", 1.0, "cup", 227.0, "g"),
                Ingredient::new("Sugar", 1.0, "cup", 200.0, "g"),
                Ingredient::new("Eggs", 2.0, "large", 2.0, "eggs"),
                Ingredient::new("Flour", 2.25, "cups", 270.0, "g"),
                Ingredient::new("Baking Soda", 1.0, "tsp", 5.0, "g"),
                Ingredient::new("Vanilla", 1.0, "tsp", 5.0, "ml"),
            ],
        },
        RecipeTemplate {
            id: "cake".to_string(),
            name: "Soft Vanilla Cake".to_string(),
            base_servings: 12,
            ingredients: vec![
                Ingredient::new("Flour", 2.0, "cups", 240.0, "g"),
                Ingredient::new("Sugar", 1.5, "cups", 300.0, "g"),
                Ingredient::new("Butter", 0.5, "cup", 113.0, "g"),
                Ingredient::new("Eggs", 2.0, "large", 2.0, "eggs"),
                Ingredient::new("Milk", 1.0, "cup", 240.0, "ml"),
            ],
        },
        RecipeTemplate {
            id: "bread".to_string(),
            name: "Everyday Bread".to_string(),
            base_servings: 12,
            ingredients: vec![
                Ingredient::new("Flour", 3.0, "cups", 360.0, "g"),
                Ingredient::new("Warm Water", 1.0, "cup", 240.0, "ml"),
                Ingredient::new("Sugar", 2.0, "tbsp", 25.0, "g"),
                Ingredient::new("Oil", 2.0, "tbsp", 30.0, "ml"),
                Ingredient::new("Yeast", 1.0, "tbsp", 9.0, "g"),
            ],
        },
    ]
}

pub fn featured() -> Vec<FeaturedRecipe> {
    vec![
        FeaturedRecipe::new(
            "Cinnamon Swirl Coffee Cake",
            "Perfect with a cozy mug of tea. Use the converter to halve or double it.",
        ),
        FeaturedRecipe::new(
            "Herbed Buttermilk Biscuits",
            "Great for testing your oven temp conversions and butter measurements.",
        ),
        FeaturedRecipe::new(
            "One-Bowl Brownies",
            "Experiment with metric vs US cups using the weight conversions.",
        ),
        FeaturedRecipe::new(
            "Creamy Mushroom Pasta",
            "Use the liquid conversions to adjust cream and stock measurements.",
        ),
    ]
}
