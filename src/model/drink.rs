use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
    pub ingredients: Vec<String>,
    pub instructions: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DrinkDto {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub recipe: RecipeDto,
}

/// Id and name projection used by the `allDrinks` and `allRestaurants` listings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct NameDto {
    pub id: i32,
    pub name: String,
}
