//! The document as the host sees it: raw events coming up, commands going
//! down, and an in-memory page that applies those commands.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use site_core::{Key, ObservedTarget, PageLayout, Rect, ResumeFile};

/// Raw page events, one variant per (element, DOM event) pair the site
/// listens to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageEvent {
    Loaded(PageLayout),
    Scroll { y: f64 },
    /// Click on an element with no payload of its own.
    Click { element: String },
    /// Click on an in-page link.
    LinkClick { href: String },
    ApplyClick { job_title: String, job_id: String },
    FilterClick { element: String, filter: String },
    /// Key press on the document, or on a dropdown trigger when `target`
    /// names that dropdown.
    KeyDown {
        key: Key,
        #[serde(default)]
        target: Option<String>,
    },
    PointerDown,
    Input {
        form: String,
        field: String,
        value: String,
    },
    FileChosen(Option<ResumeFile>),
    DragEnter,
    DragLeave,
    Drop(Vec<ResumeFile>),
    Submit { form: String },
    Intersect { target: ObservedTarget, ratio: f64 },
    AnimationFrame,
    PointerMove {
        element: String,
        rect: Rect,
        x: f64,
        y: f64,
    },
    PointerLeave { element: String },
    BeforePrint,
    AfterPrint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationNode {
    pub id: u64,
    pub class: String,
    pub icon: String,
    pub message: String,
    pub background: String,
    pub animation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageCommand {
    InjectStyle { id: String, css: String },
    CreateElement { id: String, parent: String },
    SetClass { element: String, class: String, on: bool },
    SetText { element: String, text: String },
    /// An empty value clears the property.
    SetStyle {
        element: String,
        property: String,
        value: String,
    },
    SetAttribute {
        element: String,
        name: String,
        value: String,
    },
    SetValue { element: String, value: String },
    SetDisabled { element: String, disabled: bool },
    /// Replaces every notification node with this one. A node with the same
    /// id is updated in place.
    SetNotification(Option<NotificationNode>),
    ScrollTo { top: f64, smooth: bool },
    Unobserve(ObservedTarget),
    RequestAnimationFrame,
    Navigate { uri: String },
}

pub trait Page {
    fn apply(&mut self, command: PageCommand);

    /// Returns and clears a pending animation-frame request. Hosts whose
    /// frames are driven externally keep the default.
    fn take_frame_request(&mut self) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Element {
    pub parent: Option<String>,
    pub classes: BTreeSet<String>,
    pub text: Option<String>,
    pub styles: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
    pub value: Option<String>,
    pub disabled: bool,
}

/// In-memory page used by the replay binary and the tests.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HeadlessPage {
    pub elements: BTreeMap<String, Element>,
    pub style_sheets: BTreeMap<String, String>,
    pub notifications: Vec<NotificationNode>,
    pub scroll_y: f64,
    pub scrolls: Vec<f64>,
    pub navigations: Vec<String>,
    pub unobserved: Vec<ObservedTarget>,
    frame_pending: bool,
}

impl HeadlessPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.classes.contains(class))
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.text.as_deref())
    }

    pub fn style(&self, id: &str, property: &str) -> Option<&str> {
        self.element(id)
            .and_then(|el| el.styles.get(property))
            .map(String::as_str)
    }

    pub fn value(&self, id: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.value.as_deref())
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.element(id).is_some_and(|el| el.disabled)
    }

    fn element_mut(&mut self, id: String) -> &mut Element {
        self.elements.entry(id).or_default()
    }
}

impl Page for HeadlessPage {
    fn apply(&mut self, command: PageCommand) {
        match command {
            PageCommand::InjectStyle { id, css } => {
                self.style_sheets.insert(id, css);
            }
            PageCommand::CreateElement { id, parent } => {
                self.element_mut(id).parent = Some(parent);
            }
            PageCommand::SetClass { element, class, on } => {
                let classes = &mut self.element_mut(element).classes;
                if on {
                    classes.insert(class);
                } else {
                    classes.remove(&class);
                }
            }
            PageCommand::SetText { element, text } => {
                self.element_mut(element).text = Some(text);
            }
            PageCommand::SetStyle {
                element,
                property,
                value,
            } => {
                let styles = &mut self.element_mut(element).styles;
                if value.is_empty() {
                    styles.remove(&property);
                } else {
                    styles.insert(property, value);
                }
            }
            PageCommand::SetAttribute {
                element,
                name,
                value,
            } => {
                self.element_mut(element).attributes.insert(name, value);
            }
            PageCommand::SetValue { element, value } => {
                self.element_mut(element).value = Some(value);
            }
            PageCommand::SetDisabled { element, disabled } => {
                self.element_mut(element).disabled = disabled;
            }
            PageCommand::SetNotification(node) => match node {
                Some(node) => match self.notifications.iter_mut().find(|n| n.id == node.id) {
                    Some(existing) => *existing = node,
                    None => self.notifications = vec![node],
                },
                None => self.notifications.clear(),
            },
            PageCommand::ScrollTo { top, .. } => {
                self.scroll_y = top;
                self.scrolls.push(top);
            }
            PageCommand::Unobserve(target) => self.unobserved.push(target),
            PageCommand::RequestAnimationFrame => self.frame_pending = true,
            PageCommand::Navigate { uri } => self.navigations.push(uri),
        }
    }

    fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_pending)
    }
}
