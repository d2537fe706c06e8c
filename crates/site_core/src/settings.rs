use std::time::Duration;

/// Timings and thresholds for every page behaviour.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSettings {
    pub notification_display: Duration,
    pub notification_exit: Duration,
    pub modal_close_delay: Duration,
    pub contact_mail_delay: Duration,
    pub counter_duration: Duration,
    pub counter_delay: Duration,
    pub counter_stagger: Duration,
    /// Visible ratio a stat group must reach before its counters start.
    pub counter_threshold: f64,
    pub reveal_threshold: f64,
    pub scrolled_threshold: f64,
    pub back_to_top_threshold: f64,
    /// Extra lead (px) before a section counts as the active one.
    pub active_section_offset: f64,
    pub cover_letter_budget: usize,
    pub cover_letter_low_mark: usize,
    pub filter_fade_in: Duration,
    pub filter_fade_out: Duration,
    pub deep_link_delay: Duration,
    pub deep_link_highlight: Duration,
    pub parallax_debounce: Duration,
    pub initial_reveal_delay: Duration,
    pub body_loaded_delay: Duration,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            notification_display: Duration::from_millis(5000),
            notification_exit: Duration::from_millis(400),
            modal_close_delay: Duration::from_millis(2000),
            contact_mail_delay: Duration::from_millis(1000),
            counter_duration: Duration::from_millis(2000),
            counter_delay: Duration::from_millis(200),
            counter_stagger: Duration::from_millis(100),
            counter_threshold: 0.5,
            reveal_threshold: 0.1,
            scrolled_threshold: 100.0,
            back_to_top_threshold: 500.0,
            active_section_offset: 100.0,
            cover_letter_budget: 2000,
            cover_letter_low_mark: 100,
            filter_fade_in: Duration::from_millis(10),
            filter_fade_out: Duration::from_millis(300),
            deep_link_delay: Duration::from_millis(100),
            deep_link_highlight: Duration::from_millis(2000),
            parallax_debounce: Duration::from_millis(5),
            initial_reveal_delay: Duration::from_millis(100),
            body_loaded_delay: Duration::from_millis(100),
        }
    }
}
