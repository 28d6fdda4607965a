//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - The document store
//! - AI enhancement requests
//! - Saving
//! - Server-side load/reset/health check

pub mod enhance;
pub mod remote;
pub mod save;
pub mod store;
