/// Job-application modal. Only two states exist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open { job_title: String, job_id: String },
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }
}

/// Submit control state across one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// Dispatch in flight for `ticket`.
    Pending { ticket: u64 },
    /// Dispatch succeeded; waiting for the modal to close.
    Succeeded,
}

impl SubmitStatus {
    pub fn is_busy(self) -> bool {
        self != SubmitStatus::Idle
    }
}
