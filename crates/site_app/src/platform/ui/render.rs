use site_core::{ContactField, FieldName, NotificationView, SiteViewModel};

use super::constants::*;
use crate::platform::page::{NotificationNode, PageCommand};

const ALL_FIELDS: [FieldName; 11] = [
    FieldName::FullName,
    FieldName::Email,
    FieldName::Phone,
    FieldName::Linkedin,
    FieldName::Citizenship,
    FieldName::Experience,
    FieldName::Education,
    FieldName::Certifications,
    FieldName::CoverLetter,
    FieldName::JobPosition,
    FieldName::JobId,
];

const CONTACT_FIELDS: [ContactField; 4] = [
    ContactField::Name,
    ContactField::Email,
    ContactField::Subject,
    ContactField::Message,
];

/// Full render of the view model. `previous` is the last rendered view and
/// is only consulted to clear state that has no element of its own in the
/// new view.
pub fn render(view: &SiteViewModel, previous: Option<&SiteViewModel>) -> Vec<PageCommand> {
    let mut cmds = Vec::new();

    render_body(view, &mut cmds);
    render_nav(view, &mut cmds);
    render_reveals(view, &mut cmds);
    for counter in &view.counters {
        cmds.push(text(&counter.element, &counter.text));
    }
    cmds.push(PageCommand::SetNotification(
        view.notification.as_ref().map(notification_node),
    ));
    render_modal(view, &mut cmds);
    render_contact(view, &mut cmds);
    render_filter(view, &mut cmds);
    for (card, transform) in &view.tilts {
        cmds.push(style(card, "transform", transform));
    }
    render_highlight(view, previous, &mut cmds);

    cmds
}

fn render_body(view: &SiteViewModel, cmds: &mut Vec<PageCommand>) {
    cmds.push(class(BODY, "loaded", view.body_loaded));
    cmds.push(class(BODY, "user-is-tabbing", view.user_is_tabbing));
    cmds.push(style(
        BODY,
        "overflow",
        if view.scroll_locked { "hidden" } else { "" },
    ));
}

fn render_nav(view: &SiteViewModel, cmds: &mut Vec<PageCommand>) {
    let nav = &view.nav;
    cmds.push(class(NAVBAR, "scrolled", nav.scrolled));
    cmds.push(class(NAV_MENU, "active", nav.menu_open));
    cmds.push(class(MOBILE_MENU_TOGGLE, "active", nav.menu_open));
    cmds.push(class(BACK_TO_TOP, "visible", nav.back_to_top_visible));

    for section in &nav.sections {
        let active = nav.active_section.as_deref() == Some(section.as_str());
        cmds.push(class(&nav_link(section), "active", active));
    }

    if let Some(parallax) = nav.parallax {
        cmds.push(style(
            HERO_CONTENT,
            "transform",
            &format!("translateY({}px)", parallax.content_offset),
        ));
        cmds.push(style(
            HERO_CONTENT,
            "opacity",
            &parallax.content_opacity.to_string(),
        ));
        cmds.push(style(
            HERO_SHAPES,
            "transform",
            &format!("translateY({}px)", parallax.shapes_offset),
        ));
    }

    for dropdown in &view.dropdowns {
        let menu = dropdown_menu(&dropdown.id);
        cmds.push(class(&menu, "visible", dropdown.visible));
        cmds.push(style(
            &menu,
            "display",
            if view.printing { "none" } else { "" },
        ));
    }
}

fn render_reveals(view: &SiteViewModel, cmds: &mut Vec<PageCommand>) {
    for id in &view.revealed {
        cmds.push(class(id, "aos-animate", true));
    }
    for image in &view.loaded_images {
        cmds.push(PageCommand::SetAttribute {
            element: image.id.clone(),
            name: "src".to_string(),
            value: image.src.clone(),
        });
        cmds.push(class(&image.id, "loaded", true));
    }
}

fn notification_node(notification: &NotificationView) -> NotificationNode {
    let severity = notification.severity;
    NotificationNode {
        id: notification.id,
        class: format!("notification {}", severity.class_name()),
        icon: severity.icon().to_string(),
        message: notification.message.clone(),
        background: severity.color().to_string(),
        animation: if notification.leaving {
            "slideOut 0.4s ease"
        } else {
            "slideIn 0.4s ease"
        }
        .to_string(),
    }
}

fn render_modal(view: &SiteViewModel, cmds: &mut Vec<PageCommand>) {
    cmds.push(class(MODAL, "active", view.modal.is_some()));
    if let Some(modal) = &view.modal {
        cmds.push(text(MODAL_JOB_TITLE, &modal.job_title));
    }

    for field in ALL_FIELDS {
        cmds.push(PageCommand::SetValue {
            element: field.key().to_string(),
            value: view.form.value(field).to_string(),
        });
    }

    let budget = &view.cover_letter;
    cmds.push(text(COVER_LETTER_COUNTER, &budget.label));
    cmds.push(style(
        COVER_LETTER_COUNTER,
        "color",
        if budget.low {
            LOW_BUDGET_COLOR
        } else {
            BUDGET_COLOR
        },
    ));

    let resume = &view.resume;
    cmds.push(text(FILE_NAME, resume.file_name.as_deref().unwrap_or("")));
    cmds.push(class(FILE_LABEL, "has-file", resume.file_name.is_some()));
    cmds.push(class(FILE_LABEL, "highlight", resume.highlighted));
    let (border, background) = if resume.highlighted {
        ("var(--primary-green)", "rgba(142, 198, 63, 0.1)")
    } else {
        ("", "")
    };
    cmds.push(style(FILE_LABEL, "border-color", border));
    cmds.push(style(FILE_LABEL, "background", background));

    cmds.push(PageCommand::SetDisabled {
        element: SUBMIT_BUTTON.to_string(),
        disabled: view.submit_busy,
    });
    cmds.push(text(
        SUBMIT_BUTTON,
        if view.submit_busy {
            SUBMIT_BUSY_TEXT
        } else {
            SUBMIT_IDLE_TEXT
        },
    ));
}

fn render_contact(view: &SiteViewModel, cmds: &mut Vec<PageCommand>) {
    for field in CONTACT_FIELDS {
        cmds.push(PageCommand::SetValue {
            element: contact_field(field.key()),
            value: view.contact.value(field).to_string(),
        });
    }
}

fn render_filter(view: &SiteViewModel, cmds: &mut Vec<PageCommand>) {
    let filter = &view.filter;
    for button in &filter.buttons {
        let active = filter.active_button.as_deref() == Some(button.as_str());
        cmds.push(class(button, "active", active));
    }
    for card in &filter.cards {
        cmds.push(style(
            &card.id,
            "display",
            if card.displayed { "block" } else { "none" },
        ));
        cmds.push(style(
            &card.id,
            "opacity",
            if card.opaque { "1" } else { "0" },
        ));
        cmds.push(style(
            &card.id,
            "transform",
            if card.opaque { "scale(1)" } else { "scale(0.9)" },
        ));
    }
}

fn render_highlight(
    view: &SiteViewModel,
    previous: Option<&SiteViewModel>,
    cmds: &mut Vec<PageCommand>,
) {
    if let Some(stale) = previous
        .and_then(|prev| prev.highlighted.as_ref())
        .filter(|stale| view.highlighted.as_ref() != Some(*stale))
    {
        cmds.push(style(stale, "box-shadow", ""));
    }
    if let Some(target) = &view.highlighted {
        cmds.push(style(target, "transition", "all 0.3s ease"));
        cmds.push(style(target, "box-shadow", HIGHLIGHT_SHADOW));
    }
}

fn class(element: &str, class: &str, on: bool) -> PageCommand {
    PageCommand::SetClass {
        element: element.to_string(),
        class: class.to_string(),
        on,
    }
}

fn text(element: &str, text: &str) -> PageCommand {
    PageCommand::SetText {
        element: element.to_string(),
        text: text.to_string(),
    }
}

fn style(element: &str, property: &str, value: &str) -> PageCommand {
    PageCommand::SetStyle {
        element: element.to_string(),
        property: property.to_string(),
        value: value.to_string(),
    }
}
