//! # skilldock-core
//!
//! Core types and utilities shared across all Skilldock crates.
//!
//! This crate provides:
//! - Plugin and Skill catalog item types with their wire-stable field names
//! - PaginatedResponse for page-oriented registry results
//! - ClientKind and install-command construction for supported coding clients
//! - DockError enum for unified error handling
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types (Plugin, Skill, PaginatedResponse, ClientKind)
//! - `error`: Error types and result aliases
//! - `install`: Install-command string construction

pub mod error;
pub mod install;
pub mod types;

// Re-export commonly used types
pub use error::{DockError, DockResult};
pub use install::{plugin_install_command, skill_install_command, PackageManager};
pub use types::{ClientKind, DownloadInfo, PaginatedResponse, Plugin, Skill};
