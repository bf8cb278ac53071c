pub mod toml_config;

pub use toml_config::{CalendarConfig, PriorityConfig, SlaConfig};
