//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates `count` reviews of a drink, each by the given author with a distinct comment.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Author of every review
/// - `drink_id` - Drink being reviewed
/// - `count` - Number of reviews to create
///
/// # Returns
/// - `Ok(Vec<entity::review::Model>)` - Created reviews in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_drink_reviews(
    db: &DatabaseConnection,
    user_id: i32,
    drink_id: i32,
    count: usize,
) -> Result<Vec<entity::review::Model>, DbErr> {
    let mut reviews = Vec::with_capacity(count);
    for _ in 0..count {
        reviews.push(crate::factory::create_drink_review(db, user_id, drink_id).await?);
    }
    Ok(reviews)
}
