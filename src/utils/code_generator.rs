//! Short code generation.
//!
//! Codes are drawn uniformly at random from a 62-symbol alphabet. The
//! generator keeps no history; uniqueness is enforced by the persistence
//! layer and collisions are retried by the registry.

use rand::Rng;

/// Symbols a generated short code may contain.
pub const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of a generated short code.
pub const CODE_LENGTH: usize = 7;

/// Produces candidate short codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a fresh candidate code. Successive calls are independent.
    fn generate(&self) -> String;
}

/// Uniform random generator over [`ALPHABET`].
#[derive(Debug, Clone, Copy)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    /// Creates a generator producing codes of `length` symbols.
    pub fn with_length(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::with_length(CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Returns true if `code` has the shape of a generated short code.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_code("aZ09xYq"));
/// assert!(!is_valid_code("short"));
/// assert!(!is_valid_code("bad-cod"));
/// ```
pub fn is_valid_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}
