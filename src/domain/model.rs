use serde::{Deserialize, Serialize};

/// Ticket priority. Each level maps to a working-hour budget supplied by
/// configuration; the calculator itself only ever sees the resolved hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

/// Working-hour budgets per priority level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityBudgets {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
    pub critical: f64,
}

impl PriorityBudgets {
    pub fn hours_for(&self, priority: Priority) -> f64 {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
            Priority::Critical => self.critical,
        }
    }
}

/// Whether a ticket met its persisted SLA deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlaOutcome {
    Compliant,
    Overdue,
}
