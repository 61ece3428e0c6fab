//! Todddo: validated, concurrency-safe todo storage.
//!
//! This crate provides the core of a todo application: a service that
//! validates task text and reports named errors, backed by a repository that
//! assigns identifiers and stores records safely under concurrent callers.
//! Transport concerns (routing, payload encoding, status codes) live in the
//! boundary layer that depends on this crate.
//!
//! # Architecture
//!
//! Todddo follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`todo`]: Todo records, storage and the validating service
//! - [`telemetry`]: Logging configuration and subscriber installation

pub mod telemetry;
pub mod todo;
