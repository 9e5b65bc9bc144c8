//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating store calls,
//! code generation and validation. Services consume the domain traits and
//! provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shortening_service::ShorteningService`] - Collision-safe mapping creation
//! - [`services::resolution_service::ResolutionService`] - Code to target lookup

pub mod services;
