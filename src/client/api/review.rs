use reqwest::multipart::{Form, Part};

use crate::{
    client::{
        api::{
            helper::{parse_response, send_request},
            ApiClient,
        },
        model::{error::ApiError, session::ClientSession},
    },
    model::review::{CreateReviewResponseDto, MostReviewedDrinkDto, ReviewDto},
};

/// A new review as sent by `ApiClient::create_review`.
///
/// Set exactly one of `drink_id` and `restaurant_id`.
#[derive(Clone, Debug, Default)]
pub struct ReviewUpload {
    pub drink_id: Option<i32>,
    pub restaurant_id: Option<i32>,
    pub rating: i32,
    pub comment: String,
    pub impairment_level: Option<i32>,
    /// File name and bytes of an optional photo.
    pub photo: Option<(String, Vec<u8>)>,
}

impl ReviewUpload {
    fn into_form(self, user_id: i32) -> Form {
        let mut form = Form::new()
            .text("user_id", user_id.to_string())
            .text("rating", self.rating.to_string())
            .text("comment", self.comment);

        if let Some(drink_id) = self.drink_id {
            form = form.text("drink_id", drink_id.to_string());
        }
        if let Some(restaurant_id) = self.restaurant_id {
            form = form.text("restaurant_id", restaurant_id.to_string());
        }
        if let Some(level) = self.impairment_level {
            form = form.text("impairment_level", level.to_string());
        }
        if let Some((file_name, bytes)) = self.photo {
            form = form.part("photo", Part::bytes(bytes).file_name(file_name));
        }

        form
    }
}

impl ApiClient {
    /// Posts a review as the session user.
    pub async fn create_review(
        &self,
        session: &ClientSession,
        review: ReviewUpload,
    ) -> Result<CreateReviewResponseDto, ApiError> {
        let request = Self::authorized(self.post("/reviews")?, session)
            .multipart(review.into_form(session.user_id));
        let response = send_request(request).await?;
        parse_response(response).await
    }

    pub async fn get_reviews(&self) -> Result<Vec<ReviewDto>, ApiError> {
        let response = send_request(self.get("/reviews")?).await?;
        parse_response(response).await
    }

    /// Reviews of one drink, or of every drink when `drink_id` is `None`.
    pub async fn get_drink_reviews(&self, drink_id: Option<i32>) -> Result<Vec<ReviewDto>, ApiError> {
        let mut request = self.get("/reviews/drink")?;
        if let Some(drink_id) = drink_id {
            request = request.query(&[("drinkId", drink_id)]);
        }

        let response = send_request(request).await?;
        parse_response(response).await
    }

    pub async fn get_restaurant_reviews(&self) -> Result<Vec<ReviewDto>, ApiError> {
        let response = send_request(self.get("/reviews/restaurant")?).await?;
        parse_response(response).await
    }

    pub async fn get_reviews_by_restaurant(
        &self,
        restaurant_id: i32,
    ) -> Result<Vec<ReviewDto>, ApiError> {
        let url = format!("/reviews/restaurant/{}", restaurant_id);
        let response = send_request(self.get(&url)?).await?;
        parse_response(response).await
    }

    pub async fn get_most_reviewed_drinks(&self) -> Result<Vec<MostReviewedDrinkDto>, ApiError> {
        let response = send_request(self.get("/reviews/mostReviewedDrinks")?).await?;
        parse_response(response).await
    }
}
