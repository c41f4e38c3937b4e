//! HTTP request handlers.
//!
//! Controllers parse requests, enforce bearer-token requirements, call services,
//! and convert domain models into DTOs. Each module declares a tag used to group
//! its endpoints in the OpenAPI document.

pub mod auth;
pub mod index;
pub mod notification;
pub mod restaurant;
pub mod review;
pub mod search;
pub mod user;
