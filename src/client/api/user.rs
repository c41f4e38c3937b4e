use crate::{
    client::{
        api::{
            helper::{parse_response, send_request},
            ApiClient,
        },
        model::{error::ApiError, session::ClientSession},
    },
    model::{
        api::MessageDto,
        review::ReviewDto,
        user::{FollowDto, ProfileDto, TopUserDto, UpdateProfileDto, UserSummaryDto},
    },
};

impl ApiClient {
    pub async fn get_top_users(&self) -> Result<Vec<TopUserDto>, ApiError> {
        let response = send_request(self.get("/users/topUsers")?).await?;
        parse_response(response).await
    }

    pub async fn get_profile(&self, user_id: i32) -> Result<ProfileDto, ApiError> {
        let url = format!("/users/{}", user_id);
        let response = send_request(self.get(&url)?).await?;
        parse_response(response).await
    }

    /// Updates the session user's own profile.
    pub async fn update_profile(
        &self,
        session: &ClientSession,
        update: &UpdateProfileDto,
    ) -> Result<ProfileDto, ApiError> {
        let url = format!("/users/{}", session.user_id);
        let request = Self::authorized(self.put(&url)?, session).json(update);
        let response = send_request(request).await?;
        parse_response(response).await
    }

    pub async fn follow(
        &self,
        session: &ClientSession,
        target_id: i32,
    ) -> Result<MessageDto, ApiError> {
        let url = format!("/users/{}/follow", session.user_id);
        let request = Self::authorized(self.post(&url)?, session).json(&FollowDto { target_id });
        let response = send_request(request).await?;
        parse_response(response).await
    }

    pub async fn unfollow(
        &self,
        session: &ClientSession,
        target_id: i32,
    ) -> Result<MessageDto, ApiError> {
        let url = format!("/users/{}/unfollow", session.user_id);
        let request = Self::authorized(self.post(&url)?, session).json(&FollowDto { target_id });
        let response = send_request(request).await?;
        parse_response(response).await
    }

    pub async fn get_followers(&self, user_id: i32) -> Result<Vec<UserSummaryDto>, ApiError> {
        let url = format!("/users/{}/followers", user_id);
        let response = send_request(self.get(&url)?).await?;
        parse_response(response).await
    }

    pub async fn get_following(&self, user_id: i32) -> Result<Vec<UserSummaryDto>, ApiError> {
        let url = format!("/users/{}/following", user_id);
        let response = send_request(self.get(&url)?).await?;
        parse_response(response).await
    }

    pub async fn get_following_reviews(&self, user_id: i32) -> Result<Vec<ReviewDto>, ApiError> {
        let url = format!("/users/{}/following/reviews", user_id);
        let response = send_request(self.get(&url)?).await?;
        parse_response(response).await
    }
}
