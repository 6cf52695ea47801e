//! Infrastructure layer for external integrations.
//!
//! Implements the domain-layer contracts against concrete backends:
//!
//! - [`persistence`] - URL repository implementations (PostgreSQL, in-memory)
//! - [`storage`] - blob store implementations (hosted REST API, in-memory)

pub mod persistence;
pub mod storage;
