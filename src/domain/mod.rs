//! Domain value objects.
//!
//! Value types that normalize raw contact data at construction time, so the
//! record model only ever holds canonical values.

pub mod phone;

pub use phone::{PhoneNumber, DEFAULT_PHONE_TYPE, PHONE_PREFIX};
