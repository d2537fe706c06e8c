use crate::{Sent, SubmissionError};

/// Identifies one run of a timer. The host hands out a fresh token per start.
pub type TimerToken = u64;
pub type Ticket = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    TimerFired(TimerToken),
    DispatchSettled {
        ticket: Ticket,
        result: Result<Sent, SubmissionError>,
    },
}
