//! Stat counters that count up once their group scrolls into view.
//!
//! Each group owns its "already animated" flag, so re-entering the viewport
//! after the first run never touches the displayed values again.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::{Effect, ElementId, GroupId, StatGroupLayout, Timer};

/// Frame length the per-frame increment is derived from.
const FRAME_MS: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    Unit,
    Thousands,
    Millions,
}

impl Magnitude {
    fn factor(self) -> f64 {
        match self {
            Magnitude::Unit => 1.0,
            Magnitude::Thousands => 1_000.0,
            Magnitude::Millions => 1_000_000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterTarget {
    /// Absolute value, magnitude already applied.
    pub value: f64,
    pub magnitude: Magnitude,
    pub plus_suffix: bool,
}

impl CounterTarget {
    /// Parses authored stat text such as `500+`, `2K+`, `1.5M` or `12`.
    pub fn parse(text: &str) -> Option<Self> {
        let mut rest = text.trim();
        let plus_suffix = match rest.strip_suffix('+') {
            Some(stripped) => {
                rest = stripped.trim_end();
                true
            }
            None => false,
        };

        let (number, magnitude) = if let Some(n) = rest.strip_suffix(['K', 'k']) {
            (n, Magnitude::Thousands)
        } else if let Some(n) = rest.strip_suffix(['M', 'm']) {
            (n, Magnitude::Millions)
        } else {
            (rest, Magnitude::Unit)
        };

        let number = number.trim();
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return None;
        }
        let mantissa: f64 = number.parse().ok()?;

        Some(Self {
            value: mantissa * magnitude.factor(),
            magnitude,
            plus_suffix,
        })
    }

    fn suffix(&self) -> &'static str {
        if self.plus_suffix {
            "+"
        } else {
            ""
        }
    }

    pub fn reset_text(&self) -> String {
        format!("0{}", self.suffix())
    }

    /// The exact text shown once the animation completes.
    pub fn final_text(&self) -> String {
        let body = match self.magnitude {
            Magnitude::Unit => format!("{}", self.value),
            Magnitude::Thousands => format!("{}K", (self.value / 1_000.0).trunc() as u64),
            Magnitude::Millions => format!("{:.1}M", self.value / 1_000_000.0),
        };
        format!("{body}{}", self.suffix())
    }

    /// Text for an in-flight value, always truncated toward zero.
    pub fn progress_text(&self, current: f64) -> String {
        let body = match self.magnitude {
            Magnitude::Unit => format!("{}", current.floor() as u64),
            Magnitude::Thousands => format!("{}K", (current / 1_000.0).floor() as u64),
            Magnitude::Millions => {
                format!("{:.1}M", (current / 100_000.0).floor() / 10.0)
            }
        };
        format!("{body}{}", self.suffix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterStep {
    Running(String),
    Finished(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: CounterTarget,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget, duration: Duration) -> Self {
        let frames = duration.as_millis() as f64 / FRAME_MS;
        let increment = if frames > 0.0 {
            target.value / frames
        } else {
            target.value
        };
        Self {
            target,
            increment,
            current: 0.0,
        }
    }

    pub fn step(&mut self) -> CounterStep {
        self.current += self.increment;
        if self.current < self.target.value {
            CounterStep::Running(self.target.progress_text(self.current))
        } else {
            CounterStep::Finished(self.target.final_text())
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Counter {
    pub element: ElementId,
    pub display: String,
    target: Option<CounterTarget>,
    animation: Option<CounterAnimation>,
}

impl Counter {
    fn new(element: ElementId, text: String) -> Self {
        Self {
            element,
            target: CounterTarget::parse(&text),
            display: text,
            animation: None,
        }
    }

    pub fn target(&self) -> Option<&CounterTarget> {
        self.target.as_ref()
    }

    pub fn is_running(&self) -> bool {
        self.animation.is_some()
    }

    /// Advances one frame; returns whether the counter is still running.
    fn advance(&mut self) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        match animation.step() {
            CounterStep::Running(text) => {
                self.display = text;
                true
            }
            CounterStep::Finished(text) => {
                self.display = text;
                self.animation = None;
                false
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatGroup {
    pub id: GroupId,
    animated: bool,
    counters: Vec<Counter>,
}

impl StatGroup {
    pub fn new(id: GroupId, counters: Vec<(ElementId, String)>) -> Self {
        Self {
            id,
            animated: false,
            counters: counters
                .into_iter()
                .map(|(element, text)| Counter::new(element, text))
                .collect(),
        }
    }

    pub fn is_animated(&self) -> bool {
        self.animated
    }

    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    /// First viewport entry: reset displays and schedule staggered starts.
    /// Later entries return no effects.
    pub fn trigger(&mut self, delay: Duration, stagger: Duration) -> Vec<Effect> {
        if self.animated {
            return Vec::new();
        }
        self.animated = true;

        let mut effects = Vec::new();
        for (index, counter) in self.counters.iter_mut().enumerate() {
            let Some(target) = counter.target else {
                continue;
            };
            counter.display = target.reset_text();
            effects.push(Effect::StartTimer {
                timer: Timer::CounterStart {
                    group: self.id.clone(),
                    index,
                },
                after: delay + stagger * index as u32,
            });
        }
        effects
    }

    /// Starts one counter and runs its first step immediately.
    fn start(&mut self, index: usize, duration: Duration) -> bool {
        let Some(counter) = self.counters.get_mut(index) else {
            return false;
        };
        let Some(target) = counter.target else {
            return false;
        };
        counter.animation = Some(CounterAnimation::new(target, duration));
        counter.advance()
    }

    fn advance(&mut self) -> bool {
        let mut running = false;
        for counter in &mut self.counters {
            running |= counter.advance();
        }
        running
    }
}

/// All stat groups on the page plus the shared animation-frame request flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CounterBoard {
    groups: BTreeMap<GroupId, StatGroup>,
    frame_requested: bool,
}

impl CounterBoard {
    pub fn register(&mut self, layouts: &[StatGroupLayout]) {
        for layout in layouts {
            self.groups.insert(
                layout.id.clone(),
                StatGroup::new(layout.id.clone(), layout.counters.clone()),
            );
        }
    }

    pub fn group(&self, id: &str) -> Option<&StatGroup> {
        self.groups.get(id)
    }

    pub fn enter(&mut self, id: &str, delay: Duration, stagger: Duration) -> Vec<Effect> {
        match self.groups.get_mut(id) {
            Some(group) => group.trigger(delay, stagger),
            None => Vec::new(),
        }
    }

    pub fn start(&mut self, id: &str, index: usize, duration: Duration) -> Vec<Effect> {
        let running = self
            .groups
            .get_mut(id)
            .is_some_and(|group| group.start(index, duration));
        if running {
            self.request_frame()
        } else {
            Vec::new()
        }
    }

    pub fn on_frame(&mut self) -> Vec<Effect> {
        self.frame_requested = false;
        let mut running = false;
        for group in self.groups.values_mut() {
            running |= group.advance();
        }
        if running {
            self.request_frame()
        } else {
            Vec::new()
        }
    }

    pub fn counters(&self) -> impl Iterator<Item = &Counter> {
        self.groups.values().flat_map(|group| group.counters.iter())
    }

    fn request_frame(&mut self) -> Vec<Effect> {
        if self.frame_requested {
            return Vec::new();
        }
        self.frame_requested = true;
        vec![Effect::RequestAnimationFrame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_suffixes_and_magnitudes() {
        let plain = CounterTarget::parse("500+").unwrap();
        assert_eq!(plain.value, 500.0);
        assert_eq!(plain.magnitude, Magnitude::Unit);
        assert!(plain.plus_suffix);

        let thousands = CounterTarget::parse("2K+").unwrap();
        assert_eq!(thousands.value, 2_000.0);
        assert_eq!(thousands.magnitude, Magnitude::Thousands);

        let millions = CounterTarget::parse("1.5M").unwrap();
        assert_eq!(millions.value, 1_500_000.0);
        assert!(!millions.plus_suffix);

        assert!(CounterTarget::parse("24/7").is_none());
        assert!(CounterTarget::parse("").is_none());
        assert!(CounterTarget::parse("+").is_none());
        assert!(CounterTarget::parse("-5").is_none());
    }

    #[test]
    fn final_and_reset_text() {
        let target = CounterTarget::parse("2K+").unwrap();
        assert_eq!(target.reset_text(), "0+");
        assert_eq!(target.final_text(), "2K+");
        assert_eq!(CounterTarget::parse("1.5M").unwrap().final_text(), "1.5M");
        assert_eq!(CounterTarget::parse("15").unwrap().final_text(), "15");
    }

    #[test]
    fn progress_is_truncated() {
        let target = CounterTarget::parse("2K+").unwrap();
        assert_eq!(target.progress_text(1_999.0), "1K+");
        let millions = CounterTarget::parse("2M").unwrap();
        assert_eq!(millions.progress_text(1_990_000.0), "1.9M");
        let unit = CounterTarget::parse("500+").unwrap();
        assert_eq!(unit.progress_text(12.9), "12+");
    }

    #[test]
    fn animation_snaps_to_target() {
        let target = CounterTarget::parse("500+").unwrap();
        let mut animation = CounterAnimation::new(target, Duration::from_millis(160));

        let mut steps = Vec::new();
        loop {
            match animation.step() {
                CounterStep::Running(text) => steps.push(text),
                CounterStep::Finished(text) => {
                    steps.push(text);
                    break;
                }
            }
        }
        assert_eq!(steps.first().map(String::as_str), Some("50+"));
        assert_eq!(steps.last().map(String::as_str), Some("500+"));
        assert!(steps.len() <= 11);
    }

    #[test]
    fn zero_duration_finishes_in_one_step() {
        let target = CounterTarget::parse("42").unwrap();
        let mut animation = CounterAnimation::new(target, Duration::ZERO);
        assert_eq!(animation.step(), CounterStep::Finished("42".to_string()));
    }

    #[test]
    fn trigger_skips_unparseable_counters() {
        let mut group = StatGroup::new(
            "hero".to_string(),
            vec![
                ("a".to_string(), "10+".to_string()),
                ("b".to_string(), "24/7".to_string()),
            ],
        );
        let effects = group.trigger(Duration::from_millis(200), Duration::from_millis(100));
        assert_eq!(effects.len(), 1);
        assert_eq!(group.counters()[0].display, "0+");
        assert_eq!(group.counters()[1].display, "24/7");
        assert!(group.trigger(Duration::ZERO, Duration::ZERO).is_empty());
    }
}
