pub mod app_config;
pub mod config;
pub mod outcome;
pub mod records;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use outcome::{RunOutcome, RunStatus};
pub use records::{FlatRecord, PriceValue, FLAT_RECORD_COLUMNS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
