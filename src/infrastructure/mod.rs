//! Infrastructure layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL repository implementations

pub mod persistence;
