use serde::{Deserialize, Serialize};

use crate::{
    ContactField, ElementId, FieldName, ObservedTarget, PageLayout, Rect, ResumeFile, Timer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Tab,
    Enter,
    Space,
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Host clock; milliseconds since page load.
    Tick { now_ms: u64 },
    /// Page finished loading and reported its layout.
    PageLoaded(PageLayout),
    Scrolled { y: f64 },
    /// Click on an in-page link (`href` starts with `#`).
    AnchorClicked { href: String },
    MobileMenuToggled,
    BackToTopClicked,
    /// An observed element crossed into the viewport.
    ViewportEntered { target: ObservedTarget, ratio: f64 },
    AnimationFrame,
    TimerFired(Timer),
    /// "Apply" on a job listing.
    ApplyClicked { job_title: String, job_id: String },
    ModalBackdropClicked,
    ModalCloseClicked,
    KeyPressed(Key),
    /// Key pressed while a dropdown trigger has focus.
    DropdownKeyPressed { dropdown: ElementId, key: Key },
    PointerDown,
    FieldEdited { field: FieldName, value: String },
    /// Native picker change; `None` when the selection was cleared.
    ResumeSelected(Option<ResumeFile>),
    ResumeDragEntered,
    ResumeDragLeft,
    ResumeDropped(Vec<ResumeFile>),
    ApplicationSubmitted,
    /// Dispatch finished; the error text is only for display decisions.
    SubmissionSettled {
        ticket: u64,
        result: Result<(), String>,
    },
    ContactFieldEdited { field: ContactField, value: String },
    ContactSubmitted,
    FilterSelected { button: ElementId, filter: String },
    CardPointerMoved {
        card: ElementId,
        rect: Rect,
        x: f64,
        y: f64,
    },
    CardPointerLeft { card: ElementId },
    PrintStarted,
    PrintFinished,
    /// Fallback for unmapped page events.
    NoOp,
}
