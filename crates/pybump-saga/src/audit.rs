/// Status of a step in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StepStatus {
    Executed,
    Failed,
    Compensated,
    CompensationFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub name: String,
    pub status: StepStatus,
    /// Set once the step has executed successfully.
    pub compensation_description: Option<String>,
}

/// Ordered record of what a saga run did, including rollback.
#[derive(Debug, Default)]
pub struct SagaAuditLog {
    records: Vec<StepRecord>,
}

impl SagaAuditLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_executed(&mut self, name: &str, compensation_description: String) {
        self.records.push(StepRecord {
            name: name.to_string(),
            status: StepStatus::Executed,
            compensation_description: Some(compensation_description),
        });
    }

    pub(crate) fn record_failed(&mut self, name: &str) {
        self.records.push(StepRecord {
            name: name.to_string(),
            status: StepStatus::Failed,
            compensation_description: None,
        });
    }

    pub(crate) fn record_compensated(&mut self, index: usize) {
        self.set_status(index, StepStatus::Compensated);
    }

    pub(crate) fn record_compensation_failed(&mut self, index: usize) {
        self.set_status(index, StepStatus::CompensationFailed);
    }

    fn set_status(&mut self, index: usize, status: StepStatus) {
        if let Some(record) = self.records.get_mut(index) {
            record.status = status;
        }
    }

    #[must_use]
    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    /// Names of steps with the given status, in execution order.
    pub fn steps_with_status(&self, status: StepStatus) -> impl Iterator<Item = &str> {
        self.records
            .iter()
            .filter(move |record| record.status == status)
            .map(|record| record.name.as_str())
    }

    /// One line per step, prefixed with a status marker.
    #[must_use]
    pub fn summary(&self) -> String {
        self.records
            .iter()
            .map(|record| {
                let marker = match record.status {
                    StepStatus::Executed => "ok",
                    StepStatus::Failed => "FAILED",
                    StepStatus::Compensated => "undone",
                    StepStatus::CompensationFailed => "UNDO FAILED",
                };
                format!("[{marker}] {}", record.name)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
