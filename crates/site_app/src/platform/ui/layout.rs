use site_core::SiteSettings;

use super::constants::*;
use crate::platform::page::PageCommand;

const NOTIFICATION_CSS: &str = "\
@keyframes slideIn {
    from { transform: translateX(400px); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(400px); opacity: 0; }
}

.notification {
    position: fixed;
    top: 100px;
    right: 24px;
    color: white;
    padding: 16px 24px;
    border-radius: 12px;
    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.16);
    z-index: 100000;
    max-width: 400px;
}

.notification-content {
    display: flex;
    align-items: center;
    gap: 12px;
}

.notification-icon {
    font-size: 1.25rem;
    font-weight: bold;
}

.notification-message {
    font-size: 0.95rem;
    font-weight: 500;
}
";

/// One-time page setup: notification styles, the cover-letter counter and
/// its length limit.
#[allow(clippy::vec_init_then_push)]
pub fn initial_commands(settings: &SiteSettings) -> Vec<PageCommand> {
    let mut commands = Vec::new();

    commands.push(PageCommand::InjectStyle {
        id: NOTIFICATION_STYLE.to_string(),
        css: NOTIFICATION_CSS.to_string(),
    });

    commands.push(PageCommand::CreateElement {
        id: COVER_LETTER_COUNTER.to_string(),
        parent: COVER_LETTER.to_string(),
    });
    for (property, value) in [
        ("text-align", "right"),
        ("font-size", "0.875rem"),
        ("margin-top", "4px"),
    ] {
        commands.push(PageCommand::SetStyle {
            element: COVER_LETTER_COUNTER.to_string(),
            property: property.to_string(),
            value: value.to_string(),
        });
    }

    commands.push(PageCommand::SetAttribute {
        element: COVER_LETTER.to_string(),
        name: "maxlength".to_string(),
        value: settings.cover_letter_budget.to_string(),
    });

    commands
}
