pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::SlaConfig;
pub use crate::core::deadline::compute_deadline;
pub use crate::core::sla::SlaEngine;
pub use crate::domain::calendar::BusinessCalendar;
pub use crate::domain::model::{Priority, PriorityBudgets, SlaOutcome};
pub use crate::utils::error::{Result, SlaError};
