//! Restaurant data repository.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::contains_folded,
    model::{drink::NamedItem, restaurant::Restaurant},
};

pub struct RestaurantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RestaurantRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, restaurant_id: i32) -> Result<Option<Restaurant>, DbErr> {
        let entity = entity::prelude::Restaurant::find_by_id(restaurant_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Restaurant::from_entity))
    }

    /// Finds a restaurant by its exact, unique name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Restaurant>, DbErr> {
        let entity = entity::prelude::Restaurant::find()
            .filter(entity::restaurant::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Restaurant::from_entity))
    }

    /// Fetches the names of several restaurants at once, keyed by id.
    pub async fn names_by_ids(
        &self,
        restaurant_ids: &[i32],
    ) -> Result<HashMap<i32, String>, DbErr> {
        if restaurant_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, String)> = entity::prelude::Restaurant::find()
            .select_only()
            .column(entity::restaurant::Column::Id)
            .column(entity::restaurant::Column::Name)
            .filter(entity::restaurant::Column::Id.is_in(restaurant_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }

    /// Resolves restaurant names to ids.
    ///
    /// Names with no exact match are absent from the returned map.
    pub async fn ids_by_names(&self, names: &[String]) -> Result<HashMap<String, i32>, DbErr> {
        if names.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, String)> = entity::prelude::Restaurant::find()
            .select_only()
            .column(entity::restaurant::Column::Id)
            .column(entity::restaurant::Column::Name)
            .filter(entity::restaurant::Column::Name.is_in(names.iter().cloned()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|(id, name)| (name, id)).collect())
    }

    /// Case-insensitive literal substring search over restaurant names.
    pub async fn search(&self, query: &str) -> Result<Vec<Restaurant>, DbErr> {
        let folded = query.to_lowercase();

        let entities = entity::prelude::Restaurant::find()
            .order_by_asc(entity::restaurant::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .filter(|r| contains_folded(&r.name, &folded))
            .map(Restaurant::from_entity)
            .collect())
    }

    /// Every restaurant as an id and name, ordered by name.
    pub async fn all_names(&self) -> Result<Vec<NamedItem>, DbErr> {
        let rows: Vec<(i32, String)> = entity::prelude::Restaurant::find()
            .select_only()
            .column(entity::restaurant::Column::Id)
            .column(entity::restaurant::Column::Name)
            .order_by_asc(entity::restaurant::Column::Name)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(id, name)| NamedItem { id, name })
            .collect())
    }

    /// Every restaurant with its coordinates.
    pub async fn get_all(&self) -> Result<Vec<Restaurant>, DbErr> {
        let entities = entity::prelude::Restaurant::find()
            .order_by_asc(entity::restaurant::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Restaurant::from_entity).collect())
    }
}
