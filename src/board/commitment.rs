//! Commitment notices for scheduled runs.
//!
//! After a placement is confirmed, the planner commits to a completion
//! date and the stakeholders are notified. This module assembles that
//! notice as plain data; delivering it is the caller's concern.

use serde::{Deserialize, Serialize};

use crate::models::{Placement, ProductOrder};

/// A stakeholder notification for a committed schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentNotice {
    /// Roles to notify.
    pub recipients: Vec<String>,
    /// Notification body.
    pub message: String,
}

impl CommitmentNotice {
    /// Builds the notice for a committed placement.
    ///
    /// Recipients default to the supply chain and production
    /// supervision roles.
    pub fn for_placement(
        placement: &Placement<ProductOrder>,
        lane_name: &str,
        committed_date: &str,
    ) -> Self {
        let order = &placement.payload;
        let message = format!(
            "Production request #{} has been scheduled for completion on {}.\n\
             Product: {}\n\
             Quantity: {}\n\
             Line: {}",
            placement.task_id, committed_date, order.product, order.quantity, lane_name
        );
        Self {
            recipients: vec![
                "Supply Chain Manager".to_string(),
                "Production Supervisor".to_string(),
            ],
            message,
        }
    }

    /// Adds a recipient role.
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipients.push(recipient.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn sample_placement() -> Placement<ProductOrder> {
        Placement {
            task_id: "PR-LSP-2024-002".to_string(),
            lane_id: "line1".to_string(),
            start_hour: 8,
            duration_hours: 6,
            payload: ProductOrder::new("Lisinopril 10mg Tablets")
                .with_quantity(500_000)
                .with_priority(Priority::Critical)
                .with_due_date("2024-03-28"),
        }
    }

    #[test]
    fn test_notice_contents() {
        let notice =
            CommitmentNotice::for_placement(&sample_placement(), "Production Line 1", "2024-03-21");

        assert_eq!(notice.recipients.len(), 2);
        assert!(notice.message.contains("PR-LSP-2024-002"));
        assert!(notice.message.contains("2024-03-21"));
        assert!(notice.message.contains("Lisinopril 10mg Tablets"));
        assert!(notice.message.contains("500000"));
        assert!(notice.message.contains("Production Line 1"));
    }

    #[test]
    fn test_extra_recipient() {
        let notice =
            CommitmentNotice::for_placement(&sample_placement(), "Production Line 1", "2024-03-21")
                .with_recipient("QA Lead");
        assert_eq!(notice.recipients.last().map(String::as_str), Some("QA Lead"));
    }
}
