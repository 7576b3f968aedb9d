pub mod config;

pub use config::CollectorConfigBuilder;
