pub use super::drink::Entity as Drink;
pub use super::notification::Entity as Notification;
pub use super::restaurant::Entity as Restaurant;
pub use super::restaurant_drink::Entity as RestaurantDrink;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
pub use super::user_drink_preference::Entity as UserDrinkPreference;
pub use super::user_follow::Entity as UserFollow;
pub use super::user_restaurant_preference::Entity as UserRestaurantPreference;
