use std::fs;
use std::time::Duration;

use pretty_assertions::assert_eq;
use site_app::platform::config::{load_config, try_load_config, ConfigError};
use site_app::platform::script::parse_script;
use site_app::platform::ui::constants::*;
use site_app::platform::{replay, AppConfig};
use tempfile::tempdir;

#[test]
fn config_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("site.ron");
    fs::write(
        &path,
        r#"(
            recipient: Some("careers@example.com"),
            mail_settle_ms: Some(0),
            notification_display_ms: Some(1500),
        )"#,
    )
    .unwrap();

    let config = load_config(Some(&path));
    assert_eq!(config.mail.recipient, "careers@example.com");
    assert_eq!(config.mail.settle_delay, Duration::ZERO);
    assert_eq!(config.site.notification_display, Duration::from_millis(1500));
    assert_eq!(config.site.modal_close_delay, Duration::from_millis(2000));
}

#[test]
fn broken_or_missing_config_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.ron");
    fs::write(&path, "(recipient: ").unwrap();

    assert!(matches!(try_load_config(&path), Err(ConfigError::Parse(_))));
    assert_eq!(load_config(Some(&path)), AppConfig::default());

    let missing = dir.path().join("missing.ron");
    assert!(matches!(try_load_config(&missing), Err(ConfigError::Io(_))));
    assert_eq!(load_config(Some(&missing)), AppConfig::default());
    assert_eq!(load_config(None), AppConfig::default());
}

#[test]
fn replayed_script_drives_the_page() {
    let script = parse_script(
        r#"(steps: [
            Event(Loaded((
                viewport_height: 800.0,
                nav_height: 80.0,
                sections: [(id: "home", top: 0.0), (id: "contact", top: 1200.0)],
                dropdowns: ["services"],
            ))),
            Event(Scroll(y: 1100.0)),
            Event(KeyDown(key: Enter, target: Some("services"))),
            Event(Click(element: "mobile-menu-toggle")),
            Event(BeforePrint),
            Wait(30),
        ])"#,
    )
    .unwrap();

    let page = replay(&script, AppConfig::default());
    assert!(page.has_class(NAVBAR, "scrolled"));
    assert!(page.has_class(BACK_TO_TOP, "visible"));
    assert!(page.has_class(&nav_link("contact"), "active"));
    assert!(!page.has_class(&nav_link("home"), "active"));
    assert!(page.has_class(NAV_MENU, "active"));
    assert!(page.has_class(&dropdown_menu("services"), "visible"));
    assert_eq!(page.style(&dropdown_menu("services"), "display"), Some("none"));
}

#[test]
fn bundled_demos_parse() {
    let demos = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let config = try_load_config(&demos.join("site.ron")).unwrap();
    assert_eq!(config, AppConfig::default());

    let script = site_app::platform::load_script(&demos.join("careers.ron")).unwrap();
    assert_eq!(script.steps.len(), 16);
}
