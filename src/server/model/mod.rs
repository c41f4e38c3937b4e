//! Domain models and operation-specific parameter types.
//!
//! Domain models are produced by the data layer from SeaORM entities and converted
//! into DTOs by controllers. Parameter types carry validated input from controllers
//! into services.

pub mod drink;
pub mod notification;
pub mod restaurant;
pub mod review;
pub mod user;
