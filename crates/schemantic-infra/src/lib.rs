//! Infrastructure layer for Schemantic.
//!
//! Contains implementations of the traits defined in `schemantic-core`:
//! PostgreSQL `information_schema` catalog access, fastembed-based local
//! embedding generation, and LanceDB vector index persistence.

pub mod config;
pub mod postgres;
pub mod vector;
