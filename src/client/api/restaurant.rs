use crate::{
    client::{
        api::{
            helper::{parse_response, send_request},
            ApiClient,
        },
        model::error::ApiError,
    },
    model::restaurant::{NearbyRestaurantDto, RestaurantDetailDto},
};

impl ApiClient {
    pub async fn get_restaurant_by_name(
        &self,
        name: &str,
    ) -> Result<RestaurantDetailDto, ApiError> {
        let mut url = self.url("/restaurants/name/")?;
        url.path_segments_mut()
            .map_err(|_| ApiError::local("Base URL cannot carry a path"))?
            .pop_if_empty()
            .push(name);

        let response = send_request(self.http.get(url)).await?;
        parse_response(response).await
    }

    /// Restaurants within `radius_km` (server default 5 km) of a point, nearest first.
    pub async fn get_nearby_restaurants(
        &self,
        longitude: f64,
        latitude: f64,
        radius_km: Option<f64>,
    ) -> Result<Vec<NearbyRestaurantDto>, ApiError> {
        let mut request = self.get("/restaurants/nearby")?.query(&[
            ("longitude", longitude.to_string()),
            ("latitude", latitude.to_string()),
        ]);
        if let Some(radius_km) = radius_km {
            request = request.query(&[("radiusKm", radius_km.to_string())]);
        }

        let response = send_request(request).await?;
        parse_response(response).await
    }
}
