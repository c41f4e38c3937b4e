//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! aggregate in the application. Repositories use SeaORM entity models internally and
//! return domain models to keep the service layer independent of the schema.
//!
//! Repositories are generic over `ConnectionTrait` so that services can run several
//! of them against one `DatabaseTransaction`.

pub mod drink;
pub mod follow;
pub mod notification;
pub mod preference;
pub mod restaurant;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;

/// Case-insensitive literal substring match using Unicode case folding.
///
/// SQLite `lower()` and `LIKE` only fold ASCII, so catalogue and username search
/// compare folded strings here instead.
pub(crate) fn contains_folded(text: &str, folded_query: &str) -> bool {
    text.to_lowercase().contains(folded_query)
}
