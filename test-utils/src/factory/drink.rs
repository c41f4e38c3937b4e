//! Drink factory for creating test drink entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drinks with customizable fields.
pub struct DrinkFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    category: String,
    ingredients: Vec<String>,
    instructions: Option<String>,
}

impl<'a> DrinkFactory<'a> {
    /// Creates a new DrinkFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Drink {id}"`
    /// - category: `"Cocktail"`
    /// - ingredients: empty
    /// - instructions: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Drink {}", id),
            category: "Cocktail".to_string(),
            ingredients: Vec::new(),
            instructions: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn ingredients(mut self, ingredients: &[&str]) -> Self {
        self.ingredients = ingredients.iter().map(|i| i.to_string()).collect();
        self
    }

    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Builds and inserts the drink entity into the database.
    pub async fn build(self) -> Result<entity::drink::Model, DbErr> {
        entity::drink::ActiveModel {
            name: ActiveValue::Set(self.name),
            category: ActiveValue::Set(self.category),
            ingredients: ActiveValue::Set(serde_json::json!(self.ingredients)),
            instructions: ActiveValue::Set(self.instructions),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a drink with default values.
pub async fn create_drink(db: &DatabaseConnection) -> Result<entity::drink::Model, DbErr> {
    DrinkFactory::new(db).build().await
}
