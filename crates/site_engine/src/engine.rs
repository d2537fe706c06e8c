use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use site_logging::{site_debug, site_error, site_info};
use tokio_util::sync::CancellationToken;

use crate::dispatch::{ChannelLauncher, Dispatcher, MailtoDispatcher};
use crate::{EngineEvent, MailSettings, OutgoingMail, Ticket, TimerToken};

enum EngineCommand {
    StartTimer { token: TimerToken, after: Duration },
    CancelTimer { token: TimerToken },
    Dispatch { ticket: Ticket, mail: OutgoingMail },
}

type TimerTable = Arc<Mutex<HashMap<TimerToken, CancellationToken>>>;

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    /// Engine whose mail launches are forwarded to `launch_tx`; the UI thread
    /// drains the receiving end and performs the navigation.
    pub fn new(settings: MailSettings, launch_tx: mpsc::Sender<String>) -> Self {
        Self::with_dispatcher(Arc::new(MailtoDispatcher::new(
            settings,
            ChannelLauncher::new(launch_tx),
        )))
    }

    pub fn with_dispatcher(dispatcher: Arc<dyn Dispatcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    site_error!("engine runtime failed to start: {err}");
                    return;
                }
            };
            let timers: TimerTable = Arc::default();
            while let Ok(command) = cmd_rx.recv() {
                handle_command(
                    &runtime,
                    &timers,
                    dispatcher.clone(),
                    command,
                    event_tx.clone(),
                );
            }
            site_debug!("engine command channel closed");
        });

        Self { cmd_tx, event_rx }
    }

    /// Starts a timer; an earlier run under the same token is cancelled.
    pub fn start_timer(&self, token: TimerToken, after: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::StartTimer { token, after });
    }

    pub fn cancel_timer(&self, token: TimerToken) {
        let _ = self.cmd_tx.send(EngineCommand::CancelTimer { token });
    }

    pub fn dispatch(&self, ticket: Ticket, mail: OutgoingMail) {
        let _ = self.cmd_tx.send(EngineCommand::Dispatch { ticket, mail });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

fn handle_command(
    runtime: &tokio::runtime::Runtime,
    timers: &TimerTable,
    dispatcher: Arc<dyn Dispatcher>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::StartTimer { token, after } => {
            let cancel = CancellationToken::new();
            if let Some(previous) = lock(timers).insert(token, cancel.clone()) {
                previous.cancel();
            }
            let timers = timers.clone();
            runtime.spawn(async move {
                if cancel
                    .run_until_cancelled(tokio::time::sleep(after))
                    .await
                    .is_none()
                {
                    return;
                }
                {
                    // Replacement and cancellation both happen under this
                    // lock, so an uncancelled run still owns its entry.
                    let mut table = lock(&timers);
                    if cancel.is_cancelled() {
                        return;
                    }
                    table.remove(&token);
                }
                let _ = event_tx.send(EngineEvent::TimerFired(token));
            });
        }
        EngineCommand::CancelTimer { token } => {
            if let Some(cancel) = lock(timers).remove(&token) {
                cancel.cancel();
                site_debug!("timer {token} cancelled");
            }
        }
        EngineCommand::Dispatch { ticket, mail } => {
            site_info!("dispatching {} mail for ticket {ticket}", mail.kind());
            runtime.spawn(async move {
                let result = dispatcher.submit(&mail).await;
                let _ = event_tx.send(EngineEvent::DispatchSettled { ticket, result });
            });
        }
    }
}

fn lock(
    timers: &TimerTable,
) -> std::sync::MutexGuard<'_, HashMap<TimerToken, CancellationToken>> {
    timers
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
