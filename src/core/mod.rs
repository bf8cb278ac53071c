pub mod deadline;
pub mod sla;

pub use deadline::compute_deadline;
pub use sla::SlaEngine;

pub use crate::domain::calendar::BusinessCalendar;
pub use crate::domain::model::{Priority, PriorityBudgets, SlaOutcome};
pub use crate::utils::error::Result;
