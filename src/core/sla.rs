use crate::core::deadline::compute_deadline;
use crate::domain::calendar::BusinessCalendar;
use crate::domain::model::{Priority, PriorityBudgets, SlaOutcome};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

/// Thin lifecycle seam over the deadline calculator: resolves a ticket
/// priority to its configured hour budget, computes the deadline once per
/// SLA-relevant event, and later classifies persisted deadlines as compliant
/// or overdue by plain instant comparison.
pub struct SlaEngine {
    calendar: BusinessCalendar,
    budgets: PriorityBudgets,
}

impl SlaEngine {
    pub fn new(calendar: BusinessCalendar, budgets: PriorityBudgets) -> Self {
        Self { calendar, budgets }
    }

    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }

    /// Computes the resolution deadline for a ticket created (or re-prioritized)
    /// at `created_at`. The caller persists the result on the ticket.
    pub fn deadline_for(
        &self,
        created_at: DateTime<Utc>,
        priority: Priority,
    ) -> Result<DateTime<Utc>> {
        let hours = self.budgets.hours_for(priority);
        tracing::debug!(?priority, hours, %created_at, "computing SLA deadline");

        let deadline = compute_deadline(created_at, hours, &self.calendar)?;

        tracing::info!(?priority, %created_at, %deadline, "SLA deadline computed");
        Ok(deadline)
    }

    /// Classifies a persisted deadline. An open ticket is judged against
    /// `now`; a resolved one against its resolution instant. Resolution
    /// exactly at the deadline still counts as compliant.
    pub fn outcome(
        &self,
        deadline: DateTime<Utc>,
        resolved_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> SlaOutcome {
        let reference = resolved_at.unwrap_or(now);
        if reference > deadline {
            SlaOutcome::Overdue
        } else {
            SlaOutcome::Compliant
        }
    }

    /// Fraction of compliant outcomes, the figure reporting dashboards show
    /// as the SLA compliance percentage. An empty slice counts as fully
    /// compliant.
    pub fn compliance_rate(outcomes: &[SlaOutcome]) -> f64 {
        if outcomes.is_empty() {
            return 1.0;
        }
        let compliant = outcomes
            .iter()
            .filter(|o| **o == SlaOutcome::Compliant)
            .count();
        compliant as f64 / outcomes.len() as f64
    }
}
