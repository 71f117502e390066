//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`cells`] - Cells covering a viewport
//! - [`config`] - Configuration management (get, set, list, path, init)
//! - [`decode`] - Cell code to bounds
//! - [`encode`] - Coordinate to cell code
//! - [`providers`] - Tile provider catalog
//! - [`render`] - One overlay recompute for a viewport

pub mod cells;
pub mod common;
pub mod config;
pub mod decode;
pub mod encode;
pub mod providers;
pub mod render;
