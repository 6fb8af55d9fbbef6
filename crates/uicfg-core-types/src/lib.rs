//! Core types shared across uicfg facilities
//!
//! This crate provides foundational types used by both error handling
//! and logging facilities:
//!
//! - **Correlation types**: RequestId for tagging transport requests
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
