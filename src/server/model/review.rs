//! Review domain models and parameters.
//!
//! A review targets exactly one drink or one restaurant, modelled by
//! `ReviewTarget`. Reviews are immutable once created.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::{
    model::{
        review::{
            DrinkReviewCountDto, MostReviewedDrinkDto, ReviewAuthorDto, ReviewDto,
        },
        user::ProfileReviewDto,
    },
    server::{error::AppError, model::user::User},
};

/// Lowest accepted rating and impairment level.
pub const MIN_SCORE: i32 = 1;
/// Highest accepted rating and impairment level.
pub const MAX_SCORE: i32 = 5;

/// What a review is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewTarget {
    Drink(i32),
    Restaurant(i32),
}

impl ReviewTarget {
    /// Builds a target from the two optional ids of a request.
    ///
    /// # Returns
    /// - `Ok(ReviewTarget)` - Exactly one id was provided
    /// - `Err(AppError::BadRequest)` - Both ids or neither were provided
    pub fn from_ids(drink_id: Option<i32>, restaurant_id: Option<i32>) -> Result<Self, AppError> {
        match (drink_id, restaurant_id) {
            (Some(drink_id), None) => Ok(Self::Drink(drink_id)),
            (None, Some(restaurant_id)) => Ok(Self::Restaurant(restaurant_id)),
            (Some(_), Some(_)) => Err(AppError::BadRequest(
                "A review must target either a drink or a restaurant, not both".to_string(),
            )),
            (None, None) => Err(AppError::BadRequest(
                "A review must target a drink or a restaurant".to_string(),
            )),
        }
    }

    pub fn drink_id(&self) -> Option<i32> {
        match self {
            Self::Drink(id) => Some(*id),
            Self::Restaurant(_) => None,
        }
    }

    pub fn restaurant_id(&self) -> Option<i32> {
        match self {
            Self::Drink(_) => None,
            Self::Restaurant(id) => Some(*id),
        }
    }

    /// Rebuilds the target from a stored row.
    ///
    /// Rows always carry exactly one id; should both be present the drink wins.
    pub fn from_entity(entity: &entity::review::Model) -> Option<Self> {
        match (entity.drink_id, entity.restaurant_id) {
            (Some(drink_id), _) => Some(Self::Drink(drink_id)),
            (None, Some(restaurant_id)) => Some(Self::Restaurant(restaurant_id)),
            (None, None) => None,
        }
    }
}

/// Author reference carried on every review.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewAuthor {
    pub id: i32,
    pub username: String,
}

/// Review with its author and target names resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub author: ReviewAuthor,
    pub target: ReviewTarget,
    /// Name of the reviewed drink, when the target is a drink.
    pub drink_name: Option<String>,
    /// Name of the reviewed restaurant, when the target is a restaurant.
    pub restaurant_name: Option<String>,
    pub rating: i32,
    pub comment: String,
    pub impairment_level: Option<i32>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Converts an entity model to a review using pre-fetched lookups.
    ///
    /// # Arguments
    /// - `entity` - Stored review row
    /// - `authors` - Users keyed by id
    /// - `drink_names` - Drink names keyed by id
    /// - `restaurant_names` - Restaurant names keyed by id
    ///
    /// # Returns
    /// - `Some(Review)` - Review with author and target resolved
    /// - `None` - Row has no target or its author is missing
    pub fn from_entity(
        entity: entity::review::Model,
        authors: &HashMap<i32, User>,
        drink_names: &HashMap<i32, String>,
        restaurant_names: &HashMap<i32, String>,
    ) -> Option<Self> {
        let target = ReviewTarget::from_entity(&entity)?;
        let author = authors.get(&entity.user_id)?;

        Some(Self {
            id: entity.id,
            author: ReviewAuthor {
                id: author.id,
                username: author.username.clone(),
            },
            drink_name: target
                .drink_id()
                .and_then(|id| drink_names.get(&id).cloned()),
            restaurant_name: target
                .restaurant_id()
                .and_then(|id| restaurant_names.get(&id).cloned()),
            target,
            rating: entity.rating,
            comment: entity.comment,
            impairment_level: entity.impairment_level,
            photo_url: entity.photo_url,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            user: ReviewAuthorDto {
                id: self.author.id,
                username: self.author.username,
            },
            drink_id: self.target.drink_id(),
            drink_name: self.drink_name,
            restaurant_id: self.target.restaurant_id(),
            restaurant_name: self.restaurant_name,
            rating: self.rating,
            comment: self.comment,
            impairment_level: self.impairment_level,
            photo_url: self.photo_url,
            timestamp: self.created_at,
        }
    }

    /// Converts to the reduced shape listed on the author's own profile.
    pub fn into_profile_dto(self) -> ProfileReviewDto {
        ProfileReviewDto {
            id: self.id,
            drink_name: self.drink_name,
            restaurant_name: self.restaurant_name,
            rating: self.rating,
            comment: self.comment,
            impairment_level: self.impairment_level,
            photo_url: self.photo_url,
            timestamp: self.created_at,
        }
    }
}

/// Raw review fields as submitted in a multipart form, before validation.
#[derive(Debug, Clone, Default)]
pub struct ReviewForm {
    pub user_id: Option<i32>,
    pub drink_id: Option<i32>,
    pub restaurant_id: Option<i32>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub impairment_level: Option<i32>,
}

/// Validated review values ready for persistence.
#[derive(Debug, Clone)]
pub struct CreateReviewParam {
    pub user_id: i32,
    pub target: ReviewTarget,
    pub rating: i32,
    pub comment: String,
    pub impairment_level: Option<i32>,
}

impl CreateReviewParam {
    /// Validates a submitted form.
    ///
    /// # Returns
    /// - `Ok(CreateReviewParam)` - Author present, exactly one target, scores in range
    /// - `Err(AppError::BadRequest)` - Any of the above is violated
    pub fn from_form(form: ReviewForm) -> Result<Self, AppError> {
        let user_id = form
            .user_id
            .ok_or_else(|| AppError::BadRequest("user_id is required".to_string()))?;
        let target = ReviewTarget::from_ids(form.drink_id, form.restaurant_id)?;
        let rating = form
            .rating
            .ok_or_else(|| AppError::BadRequest("rating is required".to_string()))?;

        if !(MIN_SCORE..=MAX_SCORE).contains(&rating) {
            return Err(AppError::BadRequest(format!(
                "rating must be between {} and {}",
                MIN_SCORE, MAX_SCORE
            )));
        }

        if let Some(level) = form.impairment_level {
            if !(MIN_SCORE..=MAX_SCORE).contains(&level) {
                return Err(AppError::BadRequest(format!(
                    "impairment_level must be between {} and {}",
                    MIN_SCORE, MAX_SCORE
                )));
            }
        }

        Ok(Self {
            user_id,
            target,
            rating,
            comment: form.comment.unwrap_or_default(),
            impairment_level: form.impairment_level,
        })
    }
}

/// A drink and the number of reviews it has received.
#[derive(Debug, Clone, PartialEq)]
pub struct DrinkReviewCount {
    pub drink_id: i32,
    pub name: String,
    pub total_reviews: u64,
}

impl DrinkReviewCount {
    pub fn into_dto(self) -> MostReviewedDrinkDto {
        MostReviewedDrinkDto {
            drink: DrinkReviewCountDto {
                name: self.name,
                total_reviews: self.total_reviews,
            },
        }
    }
}
