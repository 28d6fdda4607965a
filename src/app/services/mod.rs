//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Backend API client
//! - JSON export/import
//! - Upload handling

pub mod api;
pub mod export;
#[cfg(test)]
pub mod mock;
pub mod upload;
