//! Optional RON configuration file. Every key is optional; missing keys keep
//! their defaults and a file that cannot be read or parsed is ignored with a
//! warning.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use site_core::SiteSettings;
use site_engine::MailSettings;
use site_logging::{site_info, site_warn};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub site: SiteSettings,
    pub mail: MailSettings,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    recipient: Option<String>,
    mail_settle_ms: Option<u64>,
    notification_display_ms: Option<u64>,
    notification_exit_ms: Option<u64>,
    modal_close_ms: Option<u64>,
    contact_mail_delay_ms: Option<u64>,
    counter_duration_ms: Option<u64>,
    counter_delay_ms: Option<u64>,
    counter_stagger_ms: Option<u64>,
    counter_threshold: Option<f64>,
    reveal_threshold: Option<f64>,
    scrolled_threshold: Option<f64>,
    back_to_top_threshold: Option<f64>,
    active_section_offset: Option<f64>,
    cover_letter_budget: Option<usize>,
    cover_letter_low_mark: Option<usize>,
    filter_fade_in_ms: Option<u64>,
    filter_fade_out_ms: Option<u64>,
    deep_link_delay_ms: Option<u64>,
    deep_link_highlight_ms: Option<u64>,
    parallax_debounce_ms: Option<u64>,
    initial_reveal_delay_ms: Option<u64>,
    body_loaded_delay_ms: Option<u64>,
}

pub fn parse_config(text: &str) -> Result<AppConfig, ConfigError> {
    let file: ConfigFile = ron::from_str(text)?;
    Ok(file.into_config())
}

pub fn try_load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}

pub fn load_config(path: Option<&Path>) -> AppConfig {
    let Some(path) = path else {
        return AppConfig::default();
    };
    match try_load_config(path) {
        Ok(config) => {
            site_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            site_warn!("Using default config, {:?} rejected: {}", path, err);
            AppConfig::default()
        }
    }
}

impl ConfigFile {
    fn into_config(self) -> AppConfig {
        let mut site = SiteSettings::default();
        let mut mail = MailSettings::default();

        set_ms(&mut mail.settle_delay, self.mail_settle_ms);
        if let Some(recipient) = self.recipient {
            mail.recipient = recipient;
        }

        set_ms(&mut site.notification_display, self.notification_display_ms);
        set_ms(&mut site.notification_exit, self.notification_exit_ms);
        set_ms(&mut site.modal_close_delay, self.modal_close_ms);
        set_ms(&mut site.contact_mail_delay, self.contact_mail_delay_ms);
        set_ms(&mut site.counter_duration, self.counter_duration_ms);
        set_ms(&mut site.counter_delay, self.counter_delay_ms);
        set_ms(&mut site.counter_stagger, self.counter_stagger_ms);
        set_ms(&mut site.filter_fade_in, self.filter_fade_in_ms);
        set_ms(&mut site.filter_fade_out, self.filter_fade_out_ms);
        set_ms(&mut site.deep_link_delay, self.deep_link_delay_ms);
        set_ms(&mut site.deep_link_highlight, self.deep_link_highlight_ms);
        set_ms(&mut site.parallax_debounce, self.parallax_debounce_ms);
        set_ms(&mut site.initial_reveal_delay, self.initial_reveal_delay_ms);
        set_ms(&mut site.body_loaded_delay, self.body_loaded_delay_ms);

        set(&mut site.counter_threshold, self.counter_threshold);
        set(&mut site.reveal_threshold, self.reveal_threshold);
        set(&mut site.scrolled_threshold, self.scrolled_threshold);
        set(&mut site.back_to_top_threshold, self.back_to_top_threshold);
        set(&mut site.active_section_offset, self.active_section_offset);
        set(&mut site.cover_letter_budget, self.cover_letter_budget);
        set(&mut site.cover_letter_low_mark, self.cover_letter_low_mark);

        AppConfig { site, mail }
    }
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn set_ms(slot: &mut Duration, value: Option<u64>) {
    set(slot, value.map(Duration::from_millis));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(parse_config("()").unwrap(), AppConfig::default());
    }

    #[test]
    fn keys_override_defaults() {
        let config = parse_config(
            r#"(
                recipient: Some("jobs@example.com"),
                modal_close_ms: Some(50),
                counter_threshold: Some(0.25),
            )"#,
        )
        .unwrap();
        assert_eq!(config.mail.recipient, "jobs@example.com");
        assert_eq!(config.site.modal_close_delay, Duration::from_millis(50));
        assert_eq!(config.site.counter_threshold, 0.25);
        assert_eq!(config.site.notification_display, Duration::from_millis(5000));
    }
}
