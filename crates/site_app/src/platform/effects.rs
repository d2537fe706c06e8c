use std::collections::HashMap;
use std::sync::mpsc;
use std::time::Duration;

use site_core::{ApplicationForm, ContactForm, Effect, Msg, Timer};
use site_engine::{
    ApplicationMail, ContactMail, EngineEvent, EngineHandle, MailSettings, OutgoingMail, Ticket,
    TimerToken,
};
use site_logging::{site_debug, site_error, site_info};

use super::page::{Page, PageCommand};

/// Maps core timers onto engine tokens. Every start gets a fresh token, so a
/// firing whose token is no longer registered is stale.
#[derive(Debug, Default)]
pub struct TimerRegistry {
    next_token: TimerToken,
    active: HashMap<Timer, TimerToken>,
    by_token: HashMap<TimerToken, Timer>,
}

impl TimerRegistry {
    /// Registers a new run of `timer`. Returns the new token and the token of
    /// the run it replaces, if any.
    pub fn start(&mut self, timer: Timer) -> (TimerToken, Option<TimerToken>) {
        self.next_token += 1;
        let token = self.next_token;
        let replaced = self.active.insert(timer.clone(), token);
        if let Some(old) = replaced {
            self.by_token.remove(&old);
        }
        self.by_token.insert(token, timer);
        (token, replaced)
    }

    pub fn cancel(&mut self, timer: &Timer) -> Option<TimerToken> {
        let token = self.active.remove(timer)?;
        self.by_token.remove(&token);
        Some(token)
    }

    pub fn fired(&mut self, token: TimerToken) -> Option<Timer> {
        let timer = self.by_token.remove(&token)?;
        self.active.remove(&timer);
        Some(timer)
    }

    pub fn pending(&self) -> usize {
        self.active.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Application(u64),
    Contact,
}

pub struct EffectRunner {
    engine: EngineHandle,
    launch_rx: mpsc::Receiver<String>,
    timers: TimerRegistry,
    next_ticket: Ticket,
    in_flight: HashMap<Ticket, Origin>,
}

impl EffectRunner {
    pub fn new(mail: MailSettings) -> Self {
        let (launch_tx, launch_rx) = mpsc::channel();
        Self {
            engine: EngineHandle::new(mail, launch_tx),
            launch_rx,
            timers: TimerRegistry::default(),
            next_ticket: 0,
            in_flight: HashMap::new(),
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>, page: &mut dyn Page) {
        for effect in effects {
            match effect {
                Effect::StartTimer { timer, after } => {
                    site_debug!("StartTimer {:?} after {:?}", timer, after);
                    let (token, replaced) = self.timers.start(timer);
                    if let Some(old) = replaced {
                        self.engine.cancel_timer(old);
                    }
                    self.engine.start_timer(token, after);
                }
                Effect::CancelTimer { timer } => {
                    if let Some(token) = self.timers.cancel(&timer) {
                        site_debug!("CancelTimer {:?}", timer);
                        self.engine.cancel_timer(token);
                    }
                }
                Effect::RequestAnimationFrame => page.apply(PageCommand::RequestAnimationFrame),
                Effect::ScrollTo { top, smooth } => page.apply(PageCommand::ScrollTo { top, smooth }),
                Effect::Unobserve(target) => page.apply(PageCommand::Unobserve(target)),
                Effect::SubmitApplication {
                    ticket,
                    form,
                    resume,
                } => {
                    // Only the file name travels; the body tells the
                    // recipient to expect the file separately.
                    site_info!(
                        "SubmitApplication ticket={} position={:?} resume={:?} ({} bytes, not attached)",
                        ticket,
                        form.job_position,
                        resume.name,
                        resume.size_bytes
                    );
                    let mail = OutgoingMail::Application(application_mail(form));
                    self.dispatch(Origin::Application(ticket), mail);
                }
                Effect::SendContactMail(contact) => {
                    site_info!("SendContactMail subject={:?}", contact.subject);
                    self.dispatch(Origin::Contact, OutgoingMail::Contact(contact_mail(contact)));
                }
            }
        }
    }

    fn dispatch(&mut self, origin: Origin, mail: OutgoingMail) {
        self.next_ticket += 1;
        self.in_flight.insert(self.next_ticket, origin);
        self.engine.dispatch(self.next_ticket, mail);
    }

    /// Drains everything the engine produced so far. Launched mail URIs are
    /// navigated on `page`; the rest come back as messages.
    pub fn poll(&mut self, page: &mut dyn Page) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            self.forward_launches(page);
            msgs.extend(self.map_event(event));
        }
        self.forward_launches(page);
        msgs
    }

    /// Blocks up to `timeout` for the next engine event.
    pub fn wait(&mut self, timeout: Duration, page: &mut dyn Page) -> Vec<Msg> {
        let mut msgs = Vec::new();
        if let Some(event) = self.engine.recv_timeout(timeout) {
            self.forward_launches(page);
            msgs.extend(self.map_event(event));
        }
        msgs.extend(self.poll(page));
        msgs
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    fn forward_launches(&self, page: &mut dyn Page) {
        while let Ok(uri) = self.launch_rx.try_recv() {
            site_debug!("Navigate to mail client ({} bytes)", uri.len());
            page.apply(PageCommand::Navigate { uri });
        }
    }

    fn map_event(&mut self, event: EngineEvent) -> Option<Msg> {
        match event {
            EngineEvent::TimerFired(token) => self.timers.fired(token).map(Msg::TimerFired),
            EngineEvent::DispatchSettled { ticket, result } => {
                let origin = self.in_flight.remove(&ticket)?;
                if let Err(err) = &result {
                    site_error!("Submission {:?} failed: {}", origin, err);
                }
                match origin {
                    Origin::Application(ticket) => Some(Msg::SubmissionSettled {
                        ticket,
                        result: result.map(|_| ()).map_err(|err| err.to_string()),
                    }),
                    Origin::Contact => None,
                }
            }
        }
    }
}

fn application_mail(form: ApplicationForm) -> ApplicationMail {
    ApplicationMail {
        job_position: form.job_position,
        full_name: form.full_name,
        email: form.email,
        phone: form.phone,
        linkedin: form.linkedin,
        citizenship: form.citizenship,
        experience: form.experience,
        education: form.education,
        certifications: form.certifications,
        cover_letter: form.cover_letter,
    }
}

fn contact_mail(contact: ContactForm) -> ContactMail {
    ContactMail {
        name: contact.name,
        email: contact.email,
        subject: contact.subject,
        message: contact.message,
    }
}
