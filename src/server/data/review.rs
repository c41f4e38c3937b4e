//! Review data repository.
//!
//! Reads return fully populated `Review` domain models: authors, drink names and
//! restaurant names are resolved with one batch lookup each rather than per row.

use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    data::{drink::DrinkRepository, restaurant::RestaurantRepository, user::UserRepository},
    model::review::{CreateReviewParam, Review, ReviewTarget},
};

pub struct ReviewRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a review row.
    ///
    /// # Arguments
    /// - `param` - Validated review values
    /// - `photo_url` - Public URL of an already stored photo, if any
    ///
    /// # Returns
    /// - `Ok(entity::review::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateReviewParam,
        photo_url: Option<String>,
    ) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            drink_id: ActiveValue::Set(param.target.drink_id()),
            restaurant_id: ActiveValue::Set(param.target.restaurant_id()),
            rating: ActiveValue::Set(param.rating),
            comment: ActiveValue::Set(param.comment),
            impairment_level: ActiveValue::Set(param.impairment_level),
            photo_url: ActiveValue::Set(photo_url),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Checks whether the author already posted the same comment about the same target.
    pub async fn exists_duplicate(
        &self,
        user_id: i32,
        target: ReviewTarget,
        comment: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Review::find()
            .filter(entity::review::Column::UserId.eq(user_id))
            .filter(target_filter(target))
            .filter(entity::review::Column::Comment.eq(comment))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Every review, newest first.
    pub async fn get_all(&self) -> Result<Vec<Review>, DbErr> {
        self.fetch(entity::prelude::Review::find()).await
    }

    /// Reviews of one drink, or of any drink when `drink_id` is `None`, newest first.
    pub async fn get_by_drink(&self, drink_id: Option<i32>) -> Result<Vec<Review>, DbErr> {
        let query = match drink_id {
            Some(drink_id) => entity::prelude::Review::find()
                .filter(entity::review::Column::DrinkId.eq(drink_id)),
            None => entity::prelude::Review::find()
                .filter(entity::review::Column::DrinkId.is_not_null()),
        };

        self.fetch(query).await
    }

    /// Reviews of one restaurant, or of any restaurant when `restaurant_id` is `None`,
    /// newest first.
    pub async fn get_by_restaurant(
        &self,
        restaurant_id: Option<i32>,
    ) -> Result<Vec<Review>, DbErr> {
        let query = match restaurant_id {
            Some(restaurant_id) => entity::prelude::Review::find()
                .filter(entity::review::Column::RestaurantId.eq(restaurant_id)),
            None => entity::prelude::Review::find()
                .filter(entity::review::Column::RestaurantId.is_not_null()),
        };

        self.fetch(query).await
    }

    /// Reviews written by one user, newest first.
    pub async fn get_by_author(&self, user_id: i32) -> Result<Vec<Review>, DbErr> {
        self.fetch(
            entity::prelude::Review::find().filter(entity::review::Column::UserId.eq(user_id)),
        )
        .await
    }

    /// Reviews written by any of the given users, newest first.
    pub async fn get_by_authors(&self, user_ids: &[i32]) -> Result<Vec<Review>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        self.fetch(
            entity::prelude::Review::find()
                .filter(entity::review::Column::UserId.is_in(user_ids.iter().copied())),
        )
        .await
    }

    /// Loads one review by id with its author and target resolved.
    pub async fn find_by_id(&self, review_id: i32) -> Result<Option<Review>, DbErr> {
        let reviews = self
            .fetch(entity::prelude::Review::find_by_id(review_id))
            .await?;

        Ok(reviews.into_iter().next())
    }

    /// Drink ids ranked by number of reviews, ties broken by drink id.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of drinks returned
    ///
    /// # Returns
    /// - `Ok(Vec<(i32, i64)>)` - `(drink_id, review_count)` pairs, highest count first
    /// - `Err(DbErr)` - Database error during the aggregate query
    pub async fn most_reviewed_drinks(&self, limit: u64) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::DrinkId)
            .column_as(
                Expr::expr(Func::count(Expr::col((
                    entity::review::Entity,
                    entity::review::Column::Id,
                )))),
                "total_reviews",
            )
            .filter(entity::review::Column::DrinkId.is_not_null())
            .group_by(entity::review::Column::DrinkId)
            .order_by_desc(Expr::cust("total_reviews"))
            .order_by_asc(entity::review::Column::DrinkId)
            .limit(limit)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Average rating and number of reviews for a restaurant.
    ///
    /// # Returns
    /// - `Ok((Some(avg), n))` - Unrounded mean over `n > 0` reviews
    /// - `Ok((None, 0))` - No reviews
    /// - `Err(DbErr)` - Database error during the aggregate query
    pub async fn restaurant_rating(&self, restaurant_id: i32) -> Result<(Option<f64>, u64), DbErr> {
        let row: Option<(Option<f64>, i64)> = entity::prelude::Review::find()
            .select_only()
            .column_as(
                Expr::expr(Func::avg(Expr::col((
                    entity::review::Entity,
                    entity::review::Column::Rating,
                )))),
                "average_rating",
            )
            .column_as(
                Expr::expr(Func::count(Expr::col((
                    entity::review::Entity,
                    entity::review::Column::Id,
                )))),
                "total_reviews",
            )
            .filter(entity::review::Column::RestaurantId.eq(restaurant_id))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(match row {
            Some((average, total)) if total > 0 => (average, total as u64),
            _ => (None, 0),
        })
    }

    /// Runs a review query newest first and populates the results.
    async fn fetch(&self, query: Select<entity::review::Entity>) -> Result<Vec<Review>, DbErr> {
        let entities = query
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .all(self.db)
            .await?;

        self.populate(entities).await
    }

    /// Resolves authors, drink names and restaurant names for a batch of rows.
    ///
    /// Rows whose author cannot be found are dropped. Input order is preserved.
    pub async fn populate(&self, entities: Vec<entity::review::Model>) -> Result<Vec<Review>, DbErr> {
        let mut author_ids: Vec<i32> = entities.iter().map(|e| e.user_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let drink_ids: Vec<i32> = entities.iter().filter_map(|e| e.drink_id).collect();
        let restaurant_ids: Vec<i32> = entities.iter().filter_map(|e| e.restaurant_id).collect();

        let authors = UserRepository::new(self.db).find_by_ids(&author_ids).await?;
        let drink_names = DrinkRepository::new(self.db)
            .names_by_ids(&drink_ids)
            .await?;
        let restaurant_names = RestaurantRepository::new(self.db)
            .names_by_ids(&restaurant_ids)
            .await?;

        Ok(entities
            .into_iter()
            .filter_map(|e| Review::from_entity(e, &authors, &drink_names, &restaurant_names))
            .collect())
    }
}

fn target_filter(target: ReviewTarget) -> sea_orm::Condition {
    match target {
        ReviewTarget::Drink(drink_id) => sea_orm::Condition::all()
            .add(entity::review::Column::DrinkId.eq(drink_id)),
        ReviewTarget::Restaurant(restaurant_id) => sea_orm::Condition::all()
            .add(entity::review::Column::RestaurantId.eq(restaurant_id)),
    }
}
