pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::{MemoryAnnouncer, StdoutAnnouncer};
pub use app::MemoryTaskExecutor;
pub use self::core::boost::{default_sequence, neuro_boost_sequence};
pub use self::core::sequence::{SequenceRunner, Step};
pub use utils::error::{BoostError, Result};
