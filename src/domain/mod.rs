//! Domain layer containing business entities and collaborator contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Persistence trait definitions
//! - [`errors`] - Registry and repository error taxonomy
//! - [`clock`] - Injected time source
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business logic lives in [`crate::application::services`].

pub mod clock;
pub mod entities;
pub mod errors;
pub mod repositories;
