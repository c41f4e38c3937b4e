//! Review business logic.
//!
//! Creation validates the author, the target, and duplicates before touching the
//! upload directory, then writes the review and the followers' notifications in one
//! transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        drink::DrinkRepository, follow::FollowRepository, notification::NotificationRepository,
        restaurant::RestaurantRepository, review::ReviewRepository, user::UserRepository,
    },
    error::{internal::InternalError, AppError},
    model::{
        notification::{ActivityType, CreateNotificationParam},
        review::{CreateReviewParam, DrinkReviewCount, Review, ReviewTarget},
    },
    service::upload::{PhotoUpload, UploadService},
};

/// Number of drinks listed by `most_reviewed_drinks`.
pub const MOST_REVIEWED_LIMIT: u64 = 5;

pub struct ReviewService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a review, storing its optional photo first.
    ///
    /// The stored photo is deleted again if the review cannot be written.
    ///
    /// # Arguments
    /// - `param` - Validated review values
    /// - `photo` - Optional uploaded image
    /// - `uploads` - Storage for the image
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review, populated
    /// - `Err(AppError::BadRequest)` - Unknown author or target, or a duplicate review
    /// - `Err(AppError::IoErr)` - Writing the photo failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        param: CreateReviewParam,
        photo: Option<PhotoUpload>,
        uploads: &UploadService,
    ) -> Result<Review, AppError> {
        if UserRepository::new(self.db)
            .find_by_id(param.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest("User not found".to_string()));
        }

        self.require_target(param.target).await?;

        if ReviewRepository::new(self.db)
            .exists_duplicate(param.user_id, param.target, &param.comment)
            .await?
        {
            return Err(AppError::BadRequest(
                "You have already posted this review".to_string(),
            ));
        }

        let photo_url = match photo {
            Some(photo) => Some(uploads.save(photo).await?),
            None => None,
        };

        let author_id = param.user_id;

        let created = match self.insert_and_notify(param, photo_url.clone()).await {
            Ok(created) => created,
            Err(e) => {
                if let Some(url) = photo_url {
                    uploads.remove(&url).await;
                }
                return Err(e);
            }
        };

        tracing::info!("User {} created review {}", author_id, created.id);

        ReviewRepository::new(self.db)
            .find_by_id(created.id)
            .await?
            .ok_or_else(|| {
                InternalError::MissingAfterInsert {
                    table: "review",
                    id: created.id,
                }
                .into()
            })
    }

    /// Inserts the review and one notification per follower of the author in one transaction.
    async fn insert_and_notify(
        &self,
        param: CreateReviewParam,
        photo_url: Option<String>,
    ) -> Result<entity::review::Model, AppError> {
        let author_id = param.user_id;
        let target = param.target;

        let txn = self.db.begin().await?;

        let created = ReviewRepository::new(&txn).create(param, photo_url).await?;

        let followers = FollowRepository::new(&txn).follower_ids(author_id).await?;
        let notifications = followers
            .into_iter()
            .map(|recipient_id| CreateNotificationParam {
                recipient_id,
                actor_id: author_id,
                activity_type: ActivityType::Review,
                drink_id: target.drink_id(),
                restaurant_id: target.restaurant_id(),
            })
            .collect();
        NotificationRepository::new(&txn)
            .create_many(notifications)
            .await?;

        txn.commit().await?;

        Ok(created)
    }

    /// Every review, newest first.
    pub async fn get_all(&self) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).get_all().await?)
    }

    /// Reviews of one drink, or of every drink when `drink_id` is `None`.
    pub async fn get_by_drink(&self, drink_id: Option<i32>) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db).get_by_drink(drink_id).await?)
    }

    /// Reviews of one restaurant, or of every restaurant when `restaurant_id` is `None`.
    pub async fn get_by_restaurant(
        &self,
        restaurant_id: Option<i32>,
    ) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db)
            .get_by_restaurant(restaurant_id)
            .await?)
    }

    /// The five drinks with the most reviews, ties broken by drink id.
    pub async fn most_reviewed_drinks(&self) -> Result<Vec<DrinkReviewCount>, AppError> {
        let counts = ReviewRepository::new(self.db)
            .most_reviewed_drinks(MOST_REVIEWED_LIMIT)
            .await?;

        let ids: Vec<i32> = counts.iter().map(|(id, _)| *id).collect();
        let names = DrinkRepository::new(self.db).names_by_ids(&ids).await?;

        Ok(counts
            .into_iter()
            .filter_map(|(drink_id, total)| {
                names.get(&drink_id).map(|name| DrinkReviewCount {
                    drink_id,
                    name: name.clone(),
                    total_reviews: total as u64,
                })
            })
            .collect())
    }

    async fn require_target(&self, target: ReviewTarget) -> Result<(), AppError> {
        let exists = match target {
            ReviewTarget::Drink(drink_id) => DrinkRepository::new(self.db)
                .find_by_id(drink_id)
                .await?
                .is_some(),
            ReviewTarget::Restaurant(restaurant_id) => RestaurantRepository::new(self.db)
                .find_by_id(restaurant_id)
                .await?
                .is_some(),
        };

        if !exists {
            let message = match target {
                ReviewTarget::Drink(_) => "Drink not found",
                ReviewTarget::Restaurant(_) => "Restaurant not found",
            };
            return Err(AppError::BadRequest(message.to_string()));
        }

        Ok(())
    }
}
