pub const BODY: &str = "body";
pub const NAVBAR: &str = "navbar";
pub const NAV_MENU: &str = "nav-menu";
pub const MOBILE_MENU_TOGGLE: &str = "mobile-menu-toggle";
pub const BACK_TO_TOP: &str = "backToTop";
pub const HERO_CONTENT: &str = "hero-content";
pub const HERO_SHAPES: &str = "animated-shapes";

pub const MODAL: &str = "applicationModal";
pub const MODAL_CLOSE: &str = "modal-close";
pub const MODAL_JOB_TITLE: &str = "modalJobTitle";
pub const APPLICATION_FORM: &str = "applicationForm";
pub const SUBMIT_BUTTON: &str = "applicationSubmit";
pub const FILE_LABEL: &str = "resume-label";
pub const FILE_NAME: &str = "resume-file-name";
pub const COVER_LETTER: &str = "coverLetter";
pub const COVER_LETTER_COUNTER: &str = "coverLetter-counter";

pub const CONTACT_FORM: &str = "contactForm";

pub const NOTIFICATION_STYLE: &str = "notification-animations";

pub const SUBMIT_IDLE_TEXT: &str = "Submit Application";
pub const SUBMIT_BUSY_TEXT: &str = "Submitting...";

pub const LOW_BUDGET_COLOR: &str = "#dc3545";
pub const BUDGET_COLOR: &str = "var(--text-gray)";
pub const HIGHLIGHT_SHADOW: &str = "0 0 0 3px var(--primary-green)";

/// Element id of the nav link pointing at `section`.
pub fn nav_link(section: &str) -> String {
    format!("nav-link-{section}")
}

/// Element id of the menu belonging to a dropdown trigger.
pub fn dropdown_menu(dropdown: &str) -> String {
    format!("{dropdown}-menu")
}

/// Contact fields share names with application fields, so they are
/// namespaced by form.
pub fn contact_field(key: &str) -> String {
    format!("{CONTACT_FORM}-{key}")
}
