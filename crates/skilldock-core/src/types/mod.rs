//! Core data types for the Skilldock catalog.
//!
//! This module provides the fundamental types used throughout Skilldock:
//! - Plugin and Skill catalog item structures
//! - PaginatedResponse for page-oriented registry results
//! - ClientKind for the coding clients that can install a skill

pub mod client;
pub mod page;
pub mod plugin;
pub mod skill;

// Re-export all public types
pub use client::ClientKind;
pub use page::PaginatedResponse;
pub use plugin::Plugin;
pub use skill::{DownloadInfo, Skill};
