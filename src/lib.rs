pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::storage::LocalStorage;
pub use config::GatewayConfig;
pub use core::{etl::EtlEngine, pipeline::JoinPipeline};
pub use server::{start_http_server, HttpState};
pub use utils::error::{CsvGenerationError, EtlError, FetchError, Result};
