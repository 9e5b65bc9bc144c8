//! Short code generation contract.

/// Errors raised while producing a candidate code.
#[derive(Debug, thiserror::Error)]
pub enum CodeGenError {
    /// The operating system entropy source is unavailable. Not retryable.
    #[error("entropy source unavailable: {0}")]
    Entropy(String),
}

/// Produces candidate short codes.
///
/// Generation is stateless and knows nothing about existing mappings.
/// Collision avoidance belongs to the caller, see
/// [`crate::application::services::ShorteningService`].
///
/// The production implementation is
/// [`crate::utils::code_generator::RandomCodeGenerator`].
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a fresh candidate code.
    fn generate(&self) -> Result<String, CodeGenError>;
}
