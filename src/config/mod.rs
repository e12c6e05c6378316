//! Configuration loading for the roster service.
//!
//! The service reads `service.yaml` from a configuration directory. It holds
//! the server bind address and an optional list of seed employees.
//!
//! # Example
//!
//! ```no_run
//! use roster_service::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Seed employees: {}", config.seed().len());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{ServerConfig, ServiceConfig};
