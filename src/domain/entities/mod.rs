//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewMapping`] is what a caller asks the store to commit, [`Mapping`] is what
//! the store hands back.

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
