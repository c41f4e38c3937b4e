//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-write operations in one transaction

pub mod auth;
pub mod follow;
pub mod notification;
pub mod restaurant;
pub mod review;
pub mod search;
pub mod token;
pub mod upload;
pub mod user;

#[cfg(test)]
mod test;
