//! Shared domain types for Schemantic.
//!
//! This crate contains the core domain types used across the Schemantic
//! pipeline: catalog tables and columns, schema documents, index entries,
//! configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
