use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ApplicationForm, ContactForm, ElementId, GroupId, NotificationId, ResumeFile};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Starts `timer`, replacing any pending run of the same timer.
    StartTimer { timer: Timer, after: Duration },
    CancelTimer { timer: Timer },
    RequestAnimationFrame,
    ScrollTo { top: f64, smooth: bool },
    SubmitApplication {
        ticket: u64,
        form: ApplicationForm,
        resume: ResumeFile,
    },
    SendContactMail(ContactForm),
    Unobserve(ObservedTarget),
}

/// Every delayed action the page schedules. Firings come back as
/// `Msg::TimerFired`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Timer {
    NotificationExit(NotificationId),
    NotificationRemove(NotificationId),
    ModalClose,
    ContactMail,
    CounterStart { group: GroupId, index: usize },
    InitialReveal,
    BodyLoaded,
    Parallax,
    DeepLinkScroll,
    DeepLinkHighlightEnd,
    FilterSettle(ElementId),
}

/// Element watched by a viewport-intersection observer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservedTarget {
    Reveal(ElementId),
    StatGroup(GroupId),
    LazyImage(ElementId),
}
