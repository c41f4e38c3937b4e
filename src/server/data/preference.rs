//! Drink and restaurant preference lists of a user.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::user::Preferences;

pub struct PreferenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PreferenceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Loads both preference lists as names, each in the order the user listed them.
    pub async fn get_names(&self, user_id: i32) -> Result<Preferences, DbErr> {
        let drinks = entity::prelude::Drink::find()
            .join_rev(
                JoinType::InnerJoin,
                entity::user_drink_preference::Relation::Drink.def(),
            )
            .filter(entity::user_drink_preference::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_drink_preference::Column::Position)
            .all(self.db)
            .await?;

        let restaurants = entity::prelude::Restaurant::find()
            .join_rev(
                JoinType::InnerJoin,
                entity::user_restaurant_preference::Relation::Restaurant.def(),
            )
            .filter(entity::user_restaurant_preference::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_restaurant_preference::Column::Position)
            .all(self.db)
            .await?;

        Ok(Preferences {
            drink: drinks.into_iter().map(|d| d.name).collect(),
            restaurant: restaurants.into_iter().map(|r| r.name).collect(),
        })
    }

    /// Replaces the user's drink preferences with `drink_ids`, in order.
    ///
    /// `drink_ids` must not contain duplicates.
    pub async fn replace_drinks(&self, user_id: i32, drink_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::UserDrinkPreference::delete_many()
            .filter(entity::user_drink_preference::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        if drink_ids.is_empty() {
            return Ok(());
        }

        let rows = drink_ids
            .iter()
            .enumerate()
            .map(|(position, drink_id)| entity::user_drink_preference::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                drink_id: ActiveValue::Set(*drink_id),
                position: ActiveValue::Set(position as i32),
            });

        entity::prelude::UserDrinkPreference::insert_many(rows)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Replaces the user's restaurant preferences with `restaurant_ids`, in order.
    ///
    /// `restaurant_ids` must not contain duplicates.
    pub async fn replace_restaurants(
        &self,
        user_id: i32,
        restaurant_ids: &[i32],
    ) -> Result<(), DbErr> {
        entity::prelude::UserRestaurantPreference::delete_many()
            .filter(entity::user_restaurant_preference::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        if restaurant_ids.is_empty() {
            return Ok(());
        }

        let rows = restaurant_ids
            .iter()
            .enumerate()
            .map(
                |(position, restaurant_id)| entity::user_restaurant_preference::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    restaurant_id: ActiveValue::Set(*restaurant_id),
                    position: ActiveValue::Set(position as i32),
                },
            );

        entity::prelude::UserRestaurantPreference::insert_many(rows)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}
