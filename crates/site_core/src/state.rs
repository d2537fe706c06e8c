use std::collections::BTreeMap;

use crate::view_model::{
    BudgetView, CardView, CounterView, DropdownView, FilterView, LoadedImage, ModalView, NavView,
    NotificationView, ResumeView, SiteViewModel,
};
use crate::{
    ApplicationForm, CharBudget, ContactForm, CounterBoard, ElementId, ModalState, NavState,
    NotificationCenter, NotificationPhase, ProjectFilter, ResumeUpload, RevealState, SiteSettings,
    SubmitStatus,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SiteState {
    pub(crate) settings: SiteSettings,
    pub(crate) dirty: bool,
    pub(crate) body_loaded: bool,
    pub(crate) user_is_tabbing: bool,
    pub(crate) printing: bool,
    pub(crate) nav: NavState,
    pub(crate) reveal: RevealState,
    pub(crate) counters: CounterBoard,
    pub(crate) notifications: NotificationCenter,
    pub(crate) modal: ModalState,
    pub(crate) submit: SubmitStatus,
    pub(crate) next_ticket: u64,
    pub(crate) form: ApplicationForm,
    pub(crate) upload: ResumeUpload,
    pub(crate) contact: ContactForm,
    pub(crate) pending_contact: Option<ContactForm>,
    pub(crate) filter: ProjectFilter,
    pub(crate) tilts: BTreeMap<ElementId, String>,
    pub(crate) dropdowns: BTreeMap<ElementId, bool>,
    pub(crate) highlighted: Option<ElementId>,
    pub(crate) deep_link: Option<ElementId>,
}

impl Default for SiteState {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteState {
    pub fn new() -> Self {
        Self::with_settings(SiteSettings::default())
    }

    pub fn with_settings(settings: SiteSettings) -> Self {
        let notifications =
            NotificationCenter::new(settings.notification_display, settings.notification_exit);
        Self {
            settings,
            dirty: false,
            body_loaded: false,
            user_is_tabbing: false,
            printing: false,
            nav: NavState::default(),
            reveal: RevealState::default(),
            counters: CounterBoard::default(),
            notifications,
            modal: ModalState::Closed,
            submit: SubmitStatus::Idle,
            next_ticket: 1,
            form: ApplicationForm::default(),
            upload: ResumeUpload::new(),
            contact: ContactForm::default(),
            pending_contact: None,
            filter: ProjectFilter::default(),
            tilts: BTreeMap::new(),
            dropdowns: BTreeMap::new(),
            highlighted: None,
            deep_link: None,
        }
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn submit_status(&self) -> SubmitStatus {
        self.submit
    }

    pub fn form(&self) -> &ApplicationForm {
        &self.form
    }

    pub fn upload(&self) -> &ResumeUpload {
        &self.upload
    }

    pub fn counters(&self) -> &CounterBoard {
        &self.counters
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn cover_letter_budget(&self) -> CharBudget {
        CharBudget::new(
            self.settings.cover_letter_budget,
            self.settings.cover_letter_low_mark,
        )
    }

    pub fn view(&self) -> SiteViewModel {
        let budget = self.cover_letter_budget();
        let cover_letter = &self.form.cover_letter;

        SiteViewModel {
            body_loaded: self.body_loaded,
            user_is_tabbing: self.user_is_tabbing,
            scroll_locked: self.modal.is_open(),
            printing: self.printing,
            nav: NavView {
                sections: self.nav.section_ids().cloned().collect(),
                scrolled: self.nav.is_scrolled(),
                active_section: self.nav.active_section().map(ToOwned::to_owned),
                menu_open: self.nav.is_menu_open(),
                back_to_top_visible: self.nav.is_back_to_top_visible(),
                parallax: self.nav.parallax(),
            },
            revealed: self.reveal.revealed().cloned().collect(),
            loaded_images: self
                .reveal
                .loaded_images()
                .map(|(id, src)| LoadedImage {
                    id: id.clone(),
                    src: src.to_string(),
                })
                .collect(),
            counters: self
                .counters
                .counters()
                .map(|counter| CounterView {
                    element: counter.element.clone(),
                    text: counter.display.clone(),
                })
                .collect(),
            notification: self.notifications.active().map(|n| NotificationView {
                id: n.id,
                message: n.message.clone(),
                severity: n.severity,
                leaving: n.phase == NotificationPhase::Leaving,
            }),
            modal: match &self.modal {
                ModalState::Open { job_title, job_id } => Some(ModalView {
                    job_title: job_title.clone(),
                    job_id: job_id.clone(),
                }),
                ModalState::Closed => None,
            },
            form: self.form.clone(),
            cover_letter: BudgetView {
                remaining: budget.remaining(cover_letter),
                label: budget.label(cover_letter),
                low: budget.is_low(cover_letter),
            },
            resume: ResumeView {
                file_name: self.upload.file_name().map(ToOwned::to_owned),
                highlighted: self.upload.is_highlighted(),
            },
            submit_busy: self.submit.is_busy(),
            contact: self.contact.clone(),
            filter: FilterView {
                active_button: self.filter.active_button().map(ToOwned::to_owned),
                buttons: self.filter.buttons().iter().map(|b| b.id.clone()).collect(),
                cards: self
                    .filter
                    .cards()
                    .iter()
                    .map(|card| CardView {
                        id: card.id.clone(),
                        displayed: card.visibility.is_displayed(),
                        opaque: card.visibility.is_opaque(),
                    })
                    .collect(),
            },
            tilts: self
                .tilts
                .iter()
                .map(|(id, transform)| (id.clone(), transform.clone()))
                .collect(),
            dropdowns: self
                .dropdowns
                .iter()
                .map(|(id, visible)| DropdownView {
                    id: id.clone(),
                    visible: *visible,
                })
                .collect(),
            highlighted: self.highlighted.clone(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
