//! Data models for parsed contacts.
//!
//! This module contains the structured record that classified vCard lines
//! are accumulated into, and that is serialized back to text.

pub mod contact;

pub use contact::ContactRecord;
