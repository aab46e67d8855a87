//! Core domain entities.
//!
//! - [`Link`] - A persisted short code to long URL mapping
//! - [`NewLink`] - Insert payload for a link
//! - [`LinkStatus`] - Read-time derived status of a link

pub mod link;

pub use link::{Link, LinkStatus, NewLink};
