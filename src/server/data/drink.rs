//! Drink data repository.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

use crate::server::{
    data::contains_folded,
    model::drink::{Drink, NamedItem},
};

pub struct DrinkRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DrinkRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, drink_id: i32) -> Result<Option<Drink>, DbErr> {
        let entity = entity::prelude::Drink::find_by_id(drink_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Drink::from_entity))
    }

    /// Fetches the names of several drinks at once, keyed by id.
    pub async fn names_by_ids(&self, drink_ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if drink_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, String)> = entity::prelude::Drink::find()
            .select_only()
            .column(entity::drink::Column::Id)
            .column(entity::drink::Column::Name)
            .filter(entity::drink::Column::Id.is_in(drink_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }

    /// Resolves drink names to ids.
    ///
    /// Names with no exact match are absent from the returned map.
    pub async fn ids_by_names(&self, names: &[String]) -> Result<HashMap<String, i32>, DbErr> {
        if names.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, String)> = entity::prelude::Drink::find()
            .select_only()
            .column(entity::drink::Column::Id)
            .column(entity::drink::Column::Name)
            .filter(entity::drink::Column::Name.is_in(names.iter().cloned()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|(id, name)| (name, id)).collect())
    }

    /// Case-insensitive literal substring search over drink name or category.
    pub async fn search(&self, query: &str) -> Result<Vec<Drink>, DbErr> {
        let folded = query.to_lowercase();

        let entities = entity::prelude::Drink::find()
            .order_by_asc(entity::drink::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .filter(|d| {
                contains_folded(&d.name, &folded) || contains_folded(&d.category, &folded)
            })
            .map(Drink::from_entity)
            .collect())
    }

    /// Every drink as an id and name, ordered by name.
    pub async fn all_names(&self) -> Result<Vec<NamedItem>, DbErr> {
        let rows: Vec<(i32, String)> = entity::prelude::Drink::find()
            .select_only()
            .column(entity::drink::Column::Id)
            .column(entity::drink::Column::Name)
            .order_by_asc(entity::drink::Column::Name)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| NamedItem { id, name })
            .collect())
    }

    /// Drinks served at a restaurant, ordered by name.
    pub async fn find_by_restaurant(&self, restaurant_id: i32) -> Result<Vec<Drink>, DbErr> {
        let entities = entity::prelude::Drink::find()
            .join_rev(
                JoinType::InnerJoin,
                entity::restaurant_drink::Relation::Drink.def(),
            )
            .filter(entity::restaurant_drink::Column::RestaurantId.eq(restaurant_id))
            .order_by_asc(entity::drink::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Drink::from_entity).collect())
    }
}
