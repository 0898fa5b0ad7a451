pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use domain::clock::Clock;
pub use domain::ports::{FixedTimeSource, LocalTime, SystemTimeSource, TimeSource};
pub use domain::shop::{ClockShop, LINE_SEPARATOR};
pub use utils::error::{ClockError, Result};
