//! Site core: pure page-behaviour state machine and view-model helpers.
mod counter;
mod effect;
mod filter;
mod form;
mod format;
mod layout;
mod modal;
mod msg;
mod navigation;
mod notification;
mod reveal;
mod settings;
mod state;
mod tilt;
mod update;
mod upload;
mod validate;
mod view_model;

pub use counter::{
    Counter, CounterAnimation, CounterBoard, CounterStep, CounterTarget, Magnitude, StatGroup,
};
pub use effect::{Effect, ObservedTarget, Timer};
pub use filter::{CardState, CardVisibility, ProjectFilter, SHOW_ALL};
pub use form::{ApplicationForm, ContactField, ContactForm, FieldName};
pub use format::{format_phone, CharBudget};
pub use layout::{
    ElementId, FilterButton, GroupId, LazyImageLayout, PageLayout, Placement, ProjectCard, Rect,
    StatGroupLayout,
};
pub use modal::{ModalState, SubmitStatus};
pub use msg::{Key, Msg};
pub use navigation::{NavState, Parallax};
pub use notification::{
    Notification, NotificationCenter, NotificationId, NotificationPhase, NotificationSink,
    Severity,
};
pub use reveal::RevealState;
pub use settings::SiteSettings;
pub use state::SiteState;
pub use tilt::{tilt_transform, TILT_RESET};
pub use update::update;
pub use upload::{
    check_resume, ResumeFile, ResumeUpload, UploadRejection, UploadTarget, ALLOWED_RESUME_TYPES,
    MAX_RESUME_BYTES,
};
pub use validate::{is_valid_email, validate_application, ValidationError};
pub use view_model::{
    BudgetView, CardView, CounterView, DropdownView, FilterView, LoadedImage, ModalView, NavView,
    NotificationView, ResumeView, SiteViewModel,
};
