//! # upkeep-core
//!
//! Core types, ID generation, and error types for Upkeep.
//!
//! This crate provides the foundational types shared across all Upkeep crates:
//! - Entity structs for planned maintenance and inspections (schedules,
//!   checklist templates, inspection runs)
//! - Closed enums for recurrence rules, response types, and run status, with
//!   state machine transitions
//! - ID prefix constants and generation
//! - Cross-cutting error types
//! - Audit entries and their detail payloads
//! - CLI response types

pub mod audit_detail;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
