//! Route handlers organized by resource

pub mod health;
pub mod properties;
pub mod reservations;
pub mod users;
