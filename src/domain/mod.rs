//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod location;
pub mod user;
pub mod validation;

pub use location::{GeoLocation, NewUserLocation, UserLocation};
pub use user::{CreateUser, UpdateUser, User, UserResponse};
