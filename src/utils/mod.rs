//! Utility functions for code generation and URL checks.
//!
//! - [`code_generator`] - Random short code generation and format checks
//! - [`url_validator`] - Target URL well-formedness

pub mod code_generator;
pub mod url_validator;
