use axum::{
    routing::{get, post},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::server::{
    controller::{
        auth::{login, register},
        index::health,
        notification::{get_notifications, mark_notifications_read},
        restaurant::{get_nearby_restaurants, get_restaurant_by_name},
        review::{
            create_review, get_drink_reviews, get_most_reviewed_drinks, get_restaurant_reviews,
            get_reviews, get_reviews_by_restaurant,
        },
        search::{
            get_all_drinks, get_all_restaurants, search_drinks, search_restaurants, search_users,
        },
        user::{
            follow, get_followers, get_following, get_following_reviews, get_profile,
            get_top_users, unfollow, update_profile,
        },
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/users/topUsers", get(get_top_users))
        .route("/users/{id}", get(get_profile).put(update_profile))
        .route("/users/{id}/follow", post(follow))
        .route("/users/{id}/unfollow", post(unfollow))
        .route("/users/{id}/followers", get(get_followers))
        .route("/users/{id}/following", get(get_following))
        .route("/users/{id}/following/reviews", get(get_following_reviews))
        .route("/users/{id}/notifications", get(get_notifications))
        .route(
            "/users/{id}/notifications/read",
            post(mark_notifications_read),
        )
        .route("/reviews", get(get_reviews).post(create_review))
        .route("/reviews/drink", get(get_drink_reviews))
        .route("/reviews/restaurant", get(get_restaurant_reviews))
        .route("/reviews/restaurant/{id}", get(get_reviews_by_restaurant))
        .route("/reviews/mostReviewedDrinks", get(get_most_reviewed_drinks))
        .route("/search/drinks", get(search_drinks))
        .route("/search/restaurants", get(search_restaurants))
        .route("/search/users", get(search_users))
        .route("/search/allDrinks", get(get_all_drinks))
        .route("/search/allRestaurants", get(get_all_restaurants))
        .route("/restaurants/name/{name}", get(get_restaurant_by_name))
        .route("/restaurants/nearby", get(get_nearby_restaurants))
}

/// Registers the bearer token scheme referenced by the acting endpoints.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// OpenAPI document served at `/api/docs`.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Tippsy API",
        description = "Drink and restaurant reviews with a follow graph."
    ),
    paths(
        crate::server::controller::index::health,
        crate::server::controller::auth::register,
        crate::server::controller::auth::login,
        crate::server::controller::user::get_top_users,
        crate::server::controller::user::get_profile,
        crate::server::controller::user::update_profile,
        crate::server::controller::user::follow,
        crate::server::controller::user::unfollow,
        crate::server::controller::user::get_followers,
        crate::server::controller::user::get_following,
        crate::server::controller::user::get_following_reviews,
        crate::server::controller::notification::get_notifications,
        crate::server::controller::notification::mark_notifications_read,
        crate::server::controller::review::create_review,
        crate::server::controller::review::get_reviews,
        crate::server::controller::review::get_drink_reviews,
        crate::server::controller::review::get_restaurant_reviews,
        crate::server::controller::review::get_reviews_by_restaurant,
        crate::server::controller::review::get_most_reviewed_drinks,
        crate::server::controller::search::search_drinks,
        crate::server::controller::search::search_restaurants,
        crate::server::controller::search::search_users,
        crate::server::controller::search::get_all_drinks,
        crate::server::controller::search::get_all_restaurants,
        crate::server::controller::restaurant::get_restaurant_by_name,
        crate::server::controller::restaurant::get_nearby_restaurants,
    ),
    tags(
        (name = "index", description = "Liveness"),
        (name = "auth", description = "Registration and login"),
        (name = "user", description = "Profiles and the follow graph"),
        (name = "notification", description = "Follow and review notifications"),
        (name = "review", description = "Drink and restaurant reviews"),
        (name = "search", description = "Catalogue and user search"),
        (name = "restaurant", description = "Restaurant pages and proximity search")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that every routed endpoint is described in the OpenAPI document.
    ///
    /// Expected: Each documented path is present and the bearer scheme is registered
    #[test]
    fn documents_all_routes() {
        let doc = ApiDoc::openapi();

        for path in [
            "/",
            "/auth/register",
            "/auth/login",
            "/users/topUsers",
            "/users/{id}",
            "/users/{id}/follow",
            "/users/{id}/unfollow",
            "/users/{id}/followers",
            "/users/{id}/following",
            "/users/{id}/following/reviews",
            "/users/{id}/notifications",
            "/users/{id}/notifications/read",
            "/reviews",
            "/reviews/drink",
            "/reviews/restaurant",
            "/reviews/restaurant/{id}",
            "/reviews/mostReviewedDrinks",
            "/search/drinks",
            "/search/restaurants",
            "/search/users",
            "/search/allDrinks",
            "/search/allRestaurants",
            "/restaurants/name/{name}",
            "/restaurants/nearby",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }

        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer"));
    }
}
