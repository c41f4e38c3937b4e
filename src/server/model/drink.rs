//! Drink domain models.

use crate::model::drink::{DrinkDto, NameDto, RecipeDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Drink {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub ingredients: Vec<String>,
    pub instructions: Option<String>,
}

impl Drink {
    /// Converts an entity model to a drink domain model at the repository boundary.
    ///
    /// Ingredients are stored as a JSON array of strings; any other JSON shape is
    /// logged and yields an empty ingredient list.
    pub fn from_entity(entity: entity::drink::Model) -> Self {
        let ingredients = serde_json::from_value(entity.ingredients).unwrap_or_else(|e| {
            tracing::warn!("Drink {} has malformed ingredients: {}", entity.id, e);
            Vec::new()
        });

        Self {
            id: entity.id,
            name: entity.name,
            category: entity.category,
            ingredients,
            instructions: entity.instructions,
        }
    }

    pub fn into_dto(self) -> DrinkDto {
        DrinkDto {
            id: self.id,
            name: self.name,
            category: self.category,
            recipe: RecipeDto {
                ingredients: self.ingredients,
                instructions: self.instructions,
            },
        }
    }
}

/// Id and display name of a drink or restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedItem {
    pub id: i32,
    pub name: String,
}

impl NamedItem {
    pub fn into_dto(self) -> NameDto {
        NameDto {
            id: self.id,
            name: self.name,
        }
    }
}
