//! Domain layer containing business entities and seam traits.
//!
//! This module has no dependencies on infrastructure or presentation layers.
//! It defines the persisted entity and the two contracts the application layer
//! is built on.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Persistence contract ([`repositories::MappingStore`])
//! - [`code_generator`] - Short code generation contract
//!
//! # Creation Flow
//!
//! 1. [`crate::application::services::ShorteningService`] asks a
//!    [`code_generator::CodeGenerator`] for a candidate
//! 2. The candidate is committed with [`repositories::MappingStore::create_if_absent`]
//! 3. On [`repositories::CreateOutcome::AlreadyExists`] a fresh candidate is drawn

pub mod code_generator;
pub mod entities;
pub mod repositories;
