//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{NewIngredient, NewRecipe, RecipeId};
use crate::domain::ports::Activity;

/// A new recipe with the given name
pub fn new_recipe(name: &str) -> NewRecipe {
    NewRecipe {
        name: name.to_string(),
        calories: 120,
        description: None,
    }
}

/// A new ingredient with the given name under `recipe_id`
pub fn new_ingredient(name: &str, recipe_id: RecipeId) -> NewIngredient {
    NewIngredient {
        name: name.to_string(),
        price: 0.5,
        quantity: Some(1),
        description: None,
        recipe_id,
    }
}

/// A sample activity as the activity API would return it
pub fn test_activity() -> Activity {
    Activity {
        activity: "Learn to bake bread".to_string(),
        kind: "cooking".to_string(),
        participants: 1,
        price: 0.2,
        link: String::new(),
        key: "1234567".to_string(),
        accessibility: 0.3,
    }
}
