//! Domain models
//!
//! Request inputs that carry rules (limits) are validated on construction.
//! Invalid input returns ValidationError, not panic.

pub mod criteria;
pub mod limit;
pub mod property;
pub mod user;
pub mod validation;

pub use criteria::PropertyCriteria;
pub use limit::{ResultLimit, DEFAULT_LIMIT, MAX_LIMIT};
pub use property::{NewProperty, Property, PropertyRow, ReservationRow};
pub use user::{NewUser, User};
pub use validation::ValidationError;
