//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by coordinating the injected
//! collaborators (repository, code generator, clock) and provide a clean API
//! for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
