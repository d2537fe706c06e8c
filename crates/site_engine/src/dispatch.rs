use std::sync::mpsc;

use thiserror::Error;
use url::Url;

use crate::mail::{mailto_uri, MailSettings, OutgoingMail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sent {
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    #[error("mail client unavailable")]
    Unavailable,
    #[error("launch rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("could not open mail client: {0}")]
    Launch(#[from] LaunchError),
    #[error("invalid mailto uri: {0}")]
    InvalidUri(String),
}

/// Hands a composed URI to whatever opens the user's mail client.
pub trait MailLauncher: Send + Sync {
    fn launch(&self, uri: &Url) -> Result<(), LaunchError>;
}

/// Forwards URIs to the UI thread, which performs the navigation when it
/// next drains the channel.
pub struct ChannelLauncher {
    tx: mpsc::Sender<String>,
}

impl ChannelLauncher {
    pub fn new(tx: mpsc::Sender<String>) -> Self {
        Self { tx }
    }
}

impl MailLauncher for ChannelLauncher {
    fn launch(&self, uri: &Url) -> Result<(), LaunchError> {
        self.tx
            .send(uri.to_string())
            .map_err(|_| LaunchError::Unavailable)
    }
}

#[async_trait::async_trait]
pub trait Dispatcher: Send + Sync {
    async fn submit(&self, mail: &OutgoingMail) -> Result<Sent, SubmissionError>;
}

pub struct MailtoDispatcher<L> {
    settings: MailSettings,
    launcher: L,
}

impl<L: MailLauncher> MailtoDispatcher<L> {
    pub fn new(settings: MailSettings, launcher: L) -> Self {
        Self { settings, launcher }
    }
}

#[async_trait::async_trait]
impl<L: MailLauncher> Dispatcher for MailtoDispatcher<L> {
    async fn submit(&self, mail: &OutgoingMail) -> Result<Sent, SubmissionError> {
        let uri = mailto_uri(&self.settings.recipient, mail)?;
        site_logging::site_debug!("launching {} mail ({} bytes)", mail.kind(), uri.as_str().len());
        self.launcher.launch(&uri)?;

        tokio::time::sleep(self.settings.settle_delay).await;
        Ok(Sent {
            uri: uri.to_string(),
        })
    }
}
