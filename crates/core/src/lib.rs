//! Domain primitives shared across the waypost backend.
//!
//! This crate is I/O free: type aliases, the domain error taxonomy, and
//! the ownership policy used by every user-scoped resource.

pub mod authz;
pub mod error;
pub mod types;
