use crate::tilt::{tilt_transform, TILT_RESET};
use crate::{
    format_phone, validate_application, ApplicationForm, Effect, FieldName, Key, ModalState, Msg,
    NotificationSink, ObservedTarget, PageLayout, Severity, SiteState, SubmitStatus, Timer,
    UploadTarget,
};

const SUBMIT_SUCCEEDED: &str =
    "Application submitted successfully! We will review your application and get back to you soon.";
const SUBMIT_FAILED: &str = "There was an error submitting your application. Please try again.";
const CONTACT_SENT: &str = "Thank you for your message! Opening email client...";
/// Extra gap left above a deep-linked target.
const DEEP_LINK_MARGIN: f64 = 20.0;

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SiteState, msg: Msg) -> (SiteState, Vec<Effect>) {
    let mut effects = match msg {
        Msg::Tick { now_ms } => {
            state.notifications.set_clock(now_ms);
            Vec::new()
        }
        Msg::PageLoaded(layout) => page_loaded(&mut state, layout),
        Msg::Scrolled { y } => {
            if state.nav.on_scroll(y, &state.settings) {
                state.mark_dirty();
            }
            if state.nav.has_hero() {
                vec![Effect::StartTimer {
                    timer: Timer::Parallax,
                    after: state.settings.parallax_debounce,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::AnchorClicked { href } => match state.nav.anchor_destination(&href) {
            Some(top) => {
                if state.nav.close_menu() {
                    state.mark_dirty();
                }
                vec![Effect::ScrollTo { top, smooth: true }]
            }
            None => Vec::new(),
        },
        Msg::MobileMenuToggled => {
            state.nav.toggle_menu();
            state.mark_dirty();
            Vec::new()
        }
        Msg::BackToTopClicked => vec![Effect::ScrollTo {
            top: 0.0,
            smooth: true,
        }],
        Msg::ViewportEntered { target, ratio } => viewport_entered(&mut state, target, ratio),
        Msg::AnimationFrame => {
            let effects = state.counters.on_frame();
            state.mark_dirty();
            effects
        }
        Msg::TimerFired(timer) => timer_fired(&mut state, timer),
        Msg::ApplyClicked { job_title, job_id } => {
            state.form = ApplicationForm {
                job_position: job_title.clone(),
                job_id: job_id.clone(),
                ..ApplicationForm::default()
            };
            state.upload.reset();
            state.modal = ModalState::Open { job_title, job_id };
            state.mark_dirty();
            Vec::new()
        }
        Msg::ModalBackdropClicked | Msg::ModalCloseClicked | Msg::KeyPressed(Key::Escape) => {
            close_modal(&mut state)
        }
        Msg::KeyPressed(Key::Tab) => {
            if !state.user_is_tabbing {
                state.user_is_tabbing = true;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::KeyPressed(_) => Vec::new(),
        Msg::DropdownKeyPressed {
            dropdown,
            key: Key::Enter | Key::Space,
        } => {
            if let Some(visible) = state.dropdowns.get_mut(&dropdown) {
                *visible = !*visible;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DropdownKeyPressed { .. } => Vec::new(),
        Msg::PointerDown => {
            if state.user_is_tabbing {
                state.user_is_tabbing = false;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::FieldEdited { field, value } => {
            let value = match field {
                FieldName::Phone => format_phone(&value),
                FieldName::CoverLetter => state.cover_letter_budget().clamp(&value),
                _ => value,
            };
            state.form.set(field, value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ResumeSelected(file) => {
            // Rejections are reported through the notification center.
            let _ = state.upload.select(file, &mut state.notifications);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ResumeDragEntered => {
            state.upload.drag_over();
            state.mark_dirty();
            Vec::new()
        }
        Msg::ResumeDragLeft => {
            state.upload.drag_leave();
            state.mark_dirty();
            Vec::new()
        }
        Msg::ResumeDropped(files) => {
            let _ = state.upload.drop_files(files, &mut state.notifications);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ApplicationSubmitted => submit_application(&mut state),
        Msg::SubmissionSettled { ticket, result } => submission_settled(&mut state, ticket, result),
        Msg::ContactFieldEdited { field, value } => {
            state.contact.set(field, value);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ContactSubmitted => {
            // A resubmit inside the delay restarts the timer; only the latest form is sent.
            let mail = std::mem::take(&mut state.contact);
            state.pending_contact = Some(mail);
            state.notifications.notify(CONTACT_SENT, Severity::Success);
            state.mark_dirty();
            vec![Effect::StartTimer {
                timer: Timer::ContactMail,
                after: state.settings.contact_mail_delay,
            }]
        }
        Msg::FilterSelected { button, filter } => {
            state.mark_dirty();
            state.filter.select(
                &button,
                &filter,
                state.settings.filter_fade_in,
                state.settings.filter_fade_out,
            )
        }
        Msg::CardPointerMoved { card, rect, x, y } => {
            state.tilts.insert(card, tilt_transform(rect, x, y));
            state.mark_dirty();
            Vec::new()
        }
        Msg::CardPointerLeft { card } => {
            state.tilts.insert(card, TILT_RESET.to_string());
            state.mark_dirty();
            Vec::new()
        }
        Msg::PrintStarted => {
            state.printing = true;
            state.mark_dirty();
            Vec::new()
        }
        Msg::PrintFinished => {
            state.printing = false;
            state.mark_dirty();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    let notification_effects = state.notifications.drain_effects();
    if !notification_effects.is_empty() {
        state.mark_dirty();
        effects.extend(notification_effects);
    }

    (state, effects)
}

fn page_loaded(state: &mut SiteState, layout: PageLayout) -> Vec<Effect> {
    state.nav.apply_layout(&layout);
    state.reveal.register(&layout.reveal_targets, &layout.lazy_images);
    state.counters.register(&layout.stat_groups);
    state
        .filter
        .register(&layout.filter_buttons, &layout.project_cards);
    state.dropdowns = layout
        .dropdowns
        .iter()
        .map(|id| (id.clone(), false))
        .collect();
    let y = state.nav.scroll_y();
    state.nav.on_scroll(y, &state.settings);
    state.mark_dirty();

    let mut effects = vec![
        Effect::StartTimer {
            timer: Timer::InitialReveal,
            after: state.settings.initial_reveal_delay,
        },
        Effect::StartTimer {
            timer: Timer::BodyLoaded,
            after: state.settings.body_loaded_delay,
        },
    ];

    let deep_link = layout
        .location_hash
        .as_deref()
        .and_then(|hash| hash.strip_prefix('#'))
        .filter(|id| state.nav.target_top(id).is_some());
    if let Some(id) = deep_link {
        state.deep_link = Some(id.to_string());
        effects.push(Effect::StartTimer {
            timer: Timer::DeepLinkScroll,
            after: state.settings.deep_link_delay,
        });
    }
    effects
}

fn viewport_entered(state: &mut SiteState, target: ObservedTarget, ratio: f64) -> Vec<Effect> {
    match target {
        ObservedTarget::Reveal(id) => {
            if ratio >= state.settings.reveal_threshold && state.reveal.reveal(&id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        ObservedTarget::StatGroup(id) => {
            if ratio < state.settings.counter_threshold {
                return Vec::new();
            }
            let mut effects = state.counters.enter(
                &id,
                state.settings.counter_delay,
                state.settings.counter_stagger,
            );
            if !effects.is_empty() {
                state.mark_dirty();
                effects.push(Effect::Unobserve(ObservedTarget::StatGroup(id)));
            }
            effects
        }
        ObservedTarget::LazyImage(id) => {
            if state.reveal.load_image(&id) {
                state.mark_dirty();
                vec![Effect::Unobserve(ObservedTarget::LazyImage(id))]
            } else {
                Vec::new()
            }
        }
    }
}

fn timer_fired(state: &mut SiteState, timer: Timer) -> Vec<Effect> {
    match timer {
        Timer::NotificationExit(id) => {
            state.notifications.begin_exit(id);
            Vec::new()
        }
        Timer::NotificationRemove(id) => {
            if state.notifications.remove(id) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Timer::ModalClose => {
            // Only the post-success delay closes the modal.
            if state.submit != SubmitStatus::Succeeded {
                return Vec::new();
            }
            state.submit = SubmitStatus::Idle;
            state.mark_dirty();
            close_modal(state)
        }
        Timer::ContactMail => state
            .pending_contact
            .take()
            .map(Effect::SendContactMail)
            .into_iter()
            .collect(),
        Timer::CounterStart { group, index } => {
            state.mark_dirty();
            state
                .counters
                .start(&group, index, state.settings.counter_duration)
        }
        Timer::InitialReveal => {
            if state.reveal.reveal_above(state.nav.viewport_height()) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Timer::BodyLoaded => {
            state.body_loaded = true;
            state.mark_dirty();
            Vec::new()
        }
        Timer::Parallax => {
            if state.nav.update_parallax() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Timer::DeepLinkScroll => {
            let Some(id) = state.deep_link.take() else {
                return Vec::new();
            };
            let Some(top) = state.nav.target_top(&id) else {
                return Vec::new();
            };
            state.highlighted = Some(id);
            state.mark_dirty();
            vec![
                Effect::ScrollTo {
                    top: top - state.nav.nav_height() - DEEP_LINK_MARGIN,
                    smooth: true,
                },
                Effect::StartTimer {
                    timer: Timer::DeepLinkHighlightEnd,
                    after: state.settings.deep_link_highlight,
                },
            ]
        }
        Timer::DeepLinkHighlightEnd => {
            if state.highlighted.take().is_some() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Timer::FilterSettle(card) => {
            if state.filter.settle(&card) {
                state.mark_dirty();
            }
            Vec::new()
        }
    }
}

/// Closes the modal and discards everything entered in it.
fn close_modal(state: &mut SiteState) -> Vec<Effect> {
    if !state.modal.is_open() {
        return Vec::new();
    }
    state.modal = ModalState::Closed;
    state.form = ApplicationForm::default();
    state.upload.reset();
    state.mark_dirty();

    if state.submit == SubmitStatus::Succeeded {
        state.submit = SubmitStatus::Idle;
        return vec![Effect::CancelTimer {
            timer: Timer::ModalClose,
        }];
    }
    Vec::new()
}

fn submit_application(state: &mut SiteState) -> Vec<Effect> {
    if !state.modal.is_open() || state.submit.is_busy() {
        return Vec::new();
    }

    if let Err(err) = validate_application(&state.form, &state.upload) {
        state
            .notifications
            .notify(&err.to_string(), Severity::Error);
        return Vec::new();
    }
    let Some(resume) = state.upload.selected_resume().cloned() else {
        return Vec::new();
    };

    let ticket = state.next_ticket;
    state.next_ticket += 1;
    state.submit = SubmitStatus::Pending { ticket };
    state.mark_dirty();
    vec![Effect::SubmitApplication {
        ticket,
        form: state.form.clone(),
        resume,
    }]
}

fn submission_settled(
    state: &mut SiteState,
    ticket: u64,
    result: Result<(), String>,
) -> Vec<Effect> {
    if state.submit != (SubmitStatus::Pending { ticket }) {
        return Vec::new();
    }
    state.mark_dirty();

    match result {
        Ok(()) => {
            state
                .notifications
                .notify(SUBMIT_SUCCEEDED, Severity::Success);
            if state.modal.is_open() {
                state.submit = SubmitStatus::Succeeded;
                vec![Effect::StartTimer {
                    timer: Timer::ModalClose,
                    after: state.settings.modal_close_delay,
                }]
            } else {
                state.submit = SubmitStatus::Idle;
                Vec::new()
            }
        }
        Err(_) => {
            state.notifications.notify(SUBMIT_FAILED, Severity::Error);
            state.submit = SubmitStatus::Idle;
            Vec::new()
        }
    }
}
