use crate::{
    client::{
        api::{
            helper::{parse_response, send_request},
            ApiClient,
        },
        model::error::ApiError,
    },
    model::{
        drink::{DrinkDto, NameDto},
        restaurant::RestaurantDto,
        user::UserSummaryDto,
    },
};

impl ApiClient {
    pub async fn search_drinks(&self, query: &str) -> Result<Vec<DrinkDto>, ApiError> {
        let request = self.get("/search/drinks")?.query(&[("query", query)]);
        let response = send_request(request).await?;
        parse_response(response).await
    }

    pub async fn search_restaurants(&self, query: &str) -> Result<Vec<RestaurantDto>, ApiError> {
        let request = self.get("/search/restaurants")?.query(&[("query", query)]);
        let response = send_request(request).await?;
        parse_response(response).await
    }

    pub async fn search_users(&self, username: &str) -> Result<Vec<UserSummaryDto>, ApiError> {
        let request = self.get("/search/users")?.query(&[("username", username)]);
        let response = send_request(request).await?;
        parse_response(response).await
    }

    pub async fn get_all_drinks(&self) -> Result<Vec<NameDto>, ApiError> {
        let response = send_request(self.get("/search/allDrinks")?).await?;
        parse_response(response).await
    }

    pub async fn get_all_restaurants(&self) -> Result<Vec<NameDto>, ApiError> {
        let response = send_request(self.get("/search/allRestaurants")?).await?;
        parse_response(response).await
    }
}
