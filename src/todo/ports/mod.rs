//! Port contracts for todo storage.
//!
//! Ports define infrastructure-agnostic interfaces used by todo services.

pub mod repository;

pub use repository::TodoRepository;
