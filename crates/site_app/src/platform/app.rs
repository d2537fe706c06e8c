use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use site_core::{update, ContactField, FieldName, Key, Msg, SiteState, SiteViewModel};
use site_logging::{site_debug, site_trace};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::page::{Page, PageEvent};
use super::ui;
use super::ui::constants::*;

/// Frame pacing used when the page asks for animation frames.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Milliseconds since the page was opened, for notification timestamps.
struct PageClock {
    origin: DateTime<Utc>,
}

impl PageClock {
    fn start() -> Self {
        Self { origin: Utc::now() }
    }

    fn now_ms(&self) -> u64 {
        (Utc::now() - self.origin).num_milliseconds().max(0) as u64
    }
}

/// Drives one page: events in, `update`, effects out, render on change.
pub struct App<P: Page> {
    state: SiteState,
    page: P,
    runner: EffectRunner,
    clock: PageClock,
    last_view: Option<SiteViewModel>,
    frame: u64,
}

impl<P: Page> App<P> {
    pub fn new(config: AppConfig, mut page: P) -> Self {
        for command in ui::layout::initial_commands(&config.site) {
            page.apply(command);
        }
        let mut app = Self {
            state: SiteState::with_settings(config.site),
            page,
            runner: EffectRunner::new(config.mail),
            clock: PageClock::start(),
            last_view: None,
            frame: 0,
        };
        app.render();
        app
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn state(&self) -> &SiteState {
        &self.state
    }

    pub fn handle_event(&mut self, event: PageEvent) {
        if matches!(event, PageEvent::AnimationFrame) {
            self.frame += 1;
            site_logging::set_frame(self.frame);
        }
        site_trace!("[frame {}] page event {:?}", site_logging::current_frame(), event);
        if let Some(msg) = map_event(event) {
            self.dispatch(Msg::Tick {
                now_ms: self.clock.now_ms(),
            });
            self.dispatch(msg);
        }
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let dirty = state.consume_dirty();
        self.state = state;

        if !effects.is_empty() {
            site_debug!("running {} effect(s)", effects.len());
        }
        self.runner.run(effects, &mut self.page);
        if dirty {
            self.render();
        }
    }

    /// Handles whatever the engine has produced without blocking.
    pub fn pump(&mut self) {
        for msg in self.runner.poll(&mut self.page) {
            self.dispatch(msg);
        }
    }

    /// Runs the page for `duration` of wall time: engine events are handled
    /// as they arrive and requested animation frames are delivered.
    pub fn run_for(&mut self, duration: Duration) {
        let deadline = Instant::now() + duration;
        loop {
            if self.page.take_frame_request() {
                self.handle_event(PageEvent::AnimationFrame);
            }
            let Some(left) = deadline.checked_duration_since(Instant::now()) else {
                break;
            };
            if left.is_zero() {
                break;
            }
            for msg in self.runner.wait(left.min(FRAME_INTERVAL), &mut self.page) {
                self.dispatch(msg);
            }
        }
        self.pump();
    }

    /// Whether any timer or dispatch is still outstanding.
    pub fn is_idle(&self) -> bool {
        self.runner.pending_timers() == 0 && self.runner.in_flight() == 0
    }

    fn render(&mut self) {
        let view = self.state.view();
        for command in ui::render::render(&view, self.last_view.as_ref()) {
            self.page.apply(command);
        }
        self.last_view = Some(view);
    }
}

/// One page event to at most one message.
pub fn map_event(event: PageEvent) -> Option<Msg> {
    let msg = match event {
        PageEvent::Loaded(layout) => Msg::PageLoaded(layout),
        PageEvent::Scroll { y } => Msg::Scrolled { y },
        PageEvent::Click { element } => match element.as_str() {
            MOBILE_MENU_TOGGLE => Msg::MobileMenuToggled,
            BACK_TO_TOP => Msg::BackToTopClicked,
            MODAL => Msg::ModalBackdropClicked,
            MODAL_CLOSE => Msg::ModalCloseClicked,
            _ => return None,
        },
        PageEvent::LinkClick { href } => Msg::AnchorClicked { href },
        PageEvent::ApplyClick { job_title, job_id } => Msg::ApplyClicked { job_title, job_id },
        PageEvent::FilterClick { element, filter } => Msg::FilterSelected {
            button: element,
            filter,
        },
        PageEvent::KeyDown {
            key,
            target: Some(dropdown),
        } if matches!(key, Key::Enter | Key::Space) => Msg::DropdownKeyPressed { dropdown, key },
        PageEvent::KeyDown { key, .. } => Msg::KeyPressed(key),
        PageEvent::PointerDown => Msg::PointerDown,
        PageEvent::Input { form, field, value } => match form.as_str() {
            APPLICATION_FORM => Msg::FieldEdited {
                field: FieldName::from_key(&field)?,
                value,
            },
            CONTACT_FORM => Msg::ContactFieldEdited {
                field: ContactField::from_key(&field)?,
                value,
            },
            _ => return None,
        },
        PageEvent::FileChosen(file) => Msg::ResumeSelected(file),
        PageEvent::DragEnter => Msg::ResumeDragEntered,
        PageEvent::DragLeave => Msg::ResumeDragLeft,
        PageEvent::Drop(files) => Msg::ResumeDropped(files),
        PageEvent::Submit { form } => match form.as_str() {
            APPLICATION_FORM => Msg::ApplicationSubmitted,
            CONTACT_FORM => Msg::ContactSubmitted,
            _ => return None,
        },
        PageEvent::Intersect { target, ratio } => Msg::ViewportEntered { target, ratio },
        PageEvent::AnimationFrame => Msg::AnimationFrame,
        PageEvent::PointerMove {
            element,
            rect,
            x,
            y,
        } => Msg::CardPointerMoved {
            card: element,
            rect,
            x,
            y,
        },
        PageEvent::PointerLeave { element } => Msg::CardPointerLeft { card: element },
        PageEvent::BeforePrint => Msg::PrintStarted,
        PageEvent::AfterPrint => Msg::PrintFinished,
    };
    Some(msg)
}
