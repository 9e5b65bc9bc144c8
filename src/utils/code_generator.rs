//! Short code generation and format checks.
//!
//! Provides cryptographically secure random code generation over a base-62
//! alphabet and the structural check applied to codes on the resolve path.

use crate::domain::code_generator::{CodeGenError, CodeGenerator};
use regex::Regex;
use std::sync::LazyLock;

/// Alphabet codes are drawn from (`0-9A-Za-z`).
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Default code length.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Bounds accepted for a configured code length.
pub const MIN_CODE_LENGTH: usize = 4;
pub const MAX_CODE_LENGTH: usize = 32;

/// Longest code the resolve path will look up.
pub const MAX_LOOKUP_LENGTH: usize = 64;

/// Largest multiple of the alphabet size that fits in a byte.
/// Bytes at or above it are rejected so every symbol is equally likely.
const REJECTION_THRESHOLD: u8 = (256 - 256 % ALPHABET.len()) as u8;

/// Codes that would be shadowed by static routes.
const RESERVED_CODES: &[&str] = &["health", "api"];

/// Compiled regex for structurally valid codes.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z]+$").expect("code regex is valid"));

/// Generates random codes from the operating system CSPRNG.
///
/// Uses `getrandom` for entropy and maps bytes onto [`ALPHABET`] with
/// rejection sampling.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    /// Creates a generator producing codes of `length` characters.
    ///
    /// `length` is validated by [`crate::config::Config::validate`]; values
    /// outside `MIN_CODE_LENGTH..=MAX_CODE_LENGTH` are clamped.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(MIN_CODE_LENGTH, MAX_CODE_LENGTH),
        }
    }

    /// Returns the configured code length.
    pub fn length(&self) -> usize {
        self.length
    }

    fn draw(&self) -> Result<String, CodeGenError> {
        let mut code = String::with_capacity(self.length);
        let mut buffer = [0u8; 2 * MAX_CODE_LENGTH];

        while code.len() < self.length {
            getrandom::fill(&mut buffer).map_err(|e| CodeGenError::Entropy(e.to_string()))?;

            for &byte in buffer.iter().filter(|&&b| b < REJECTION_THRESHOLD) {
                if code.len() == self.length {
                    break;
                }
                code.push(ALPHABET[byte as usize % ALPHABET.len()] as char);
            }
        }

        Ok(code)
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> Result<String, CodeGenError> {
        loop {
            let code = self.draw()?;
            if !is_reserved(&code) {
                return Ok(code);
            }
        }
    }
}

/// Returns true if `code` collides with a static route name.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.iter().any(|r| r.eq_ignore_ascii_case(code))
}

/// Returns true if `code` could have been produced by a generator.
///
/// Length is only bounded from above so codes minted under an earlier
/// `CODE_LENGTH` setting stay resolvable.
pub fn is_well_formed(code: &str) -> bool {
    !code.is_empty() && code.len() <= MAX_LOOKUP_LENGTH && CODE_REGEX.is_match(code)
}
