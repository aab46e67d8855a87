//! Utility functions for code generation, URL processing, and request handling.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_normalizer`] - URL validation and canonicalization
//! - [`request_base`] - Public base address from request headers
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
pub mod request_base;
pub mod url_normalizer;
