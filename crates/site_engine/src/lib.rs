//! Site engine: timers and mail dispatch, run off the UI thread.
mod dispatch;
mod engine;
mod mail;
mod types;

pub use dispatch::{
    ChannelLauncher, Dispatcher, LaunchError, MailLauncher, MailtoDispatcher, Sent,
    SubmissionError,
};
pub use engine::EngineHandle;
pub use mail::{
    encode_uri_component, mailto_uri, ApplicationMail, ContactMail, MailSettings, OutgoingMail,
    DEFAULT_RECIPIENT,
};
pub use types::{EngineEvent, Ticket, TimerToken};
