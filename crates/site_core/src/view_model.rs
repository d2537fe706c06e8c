use crate::{ApplicationForm, ContactForm, ElementId, NotificationId, Parallax, Severity};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteViewModel {
    pub body_loaded: bool,
    pub user_is_tabbing: bool,
    /// Page scroll is locked while the modal is open.
    pub scroll_locked: bool,
    pub printing: bool,
    pub nav: NavView,
    pub revealed: Vec<ElementId>,
    pub loaded_images: Vec<LoadedImage>,
    pub counters: Vec<CounterView>,
    pub notification: Option<NotificationView>,
    pub modal: Option<ModalView>,
    pub form: ApplicationForm,
    pub cover_letter: BudgetView,
    pub resume: ResumeView,
    pub submit_busy: bool,
    pub contact: ContactForm,
    pub filter: FilterView,
    pub tilts: Vec<(ElementId, String)>,
    pub dropdowns: Vec<DropdownView>,
    pub highlighted: Option<ElementId>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavView {
    /// Section ids in document order; each has one nav link.
    pub sections: Vec<ElementId>,
    pub scrolled: bool,
    pub active_section: Option<String>,
    pub menu_open: bool,
    pub back_to_top_visible: bool,
    pub parallax: Option<Parallax>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub id: ElementId,
    pub src: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub element: ElementId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationView {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub leaving: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub job_title: String,
    pub job_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BudgetView {
    pub remaining: usize,
    pub label: String,
    pub low: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResumeView {
    pub file_name: Option<String>,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterView {
    pub active_button: Option<ElementId>,
    pub buttons: Vec<ElementId>,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: ElementId,
    pub displayed: bool,
    pub opaque: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownView {
    pub id: ElementId,
    pub visible: bool,
}
