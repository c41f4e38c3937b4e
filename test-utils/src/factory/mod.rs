//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let drink = factory::create_drink(&db).await?;
//! let review = factory::review::ReviewFactory::for_drink(&db, user.id, drink.id)
//!     .rating(4)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `drink` - Create drink entities
//! - `restaurant` - Create restaurant entities (optionally serving drinks)
//! - `review` - Create drink or restaurant reviews
//! - `follow` - Create follow edges between users
//! - `helpers` - Unique id generation and multi-row conveniences

pub mod drink;
pub mod follow;
pub mod helpers;
pub mod restaurant;
pub mod review;
pub mod user;

pub use drink::create_drink;
pub use follow::create_follow;
pub use restaurant::create_restaurant;
pub use review::{create_drink_review, create_restaurant_review};
pub use user::create_user;
