//! Configuration for the overlay engine and the `geocell` CLI.
//!
//! Two layers:
//!
//! - [`OverlayConfig`] is the runtime value the renderer is built from.
//! - [`ConfigFile`] is the on-disk `~/.geocell/config.ini`, which also holds
//!   map defaults, the seed active set and logging paths.
//!
//! # Example
//!
//! ```
//! use geocell::config::OverlayConfig;
//! use geocell::grid::CoverageStrategy;
//!
//! let config = OverlayConfig::new()
//!     .with_max_cells(5000)
//!     .with_coverage(CoverageStrategy::Exact);
//! assert_eq!(config.precision(), 8);
//! assert_eq!(config.max_cells(), 5000);
//! ```

mod defaults;
mod file;
mod keys;
mod overlay;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use overlay::OverlayConfig;
pub use settings::{ActiveSettings, ConfigFile, LoggingSettings, MapSettings, OverlaySettings};
