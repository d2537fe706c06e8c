//! Scripted page sessions for the replay binary.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use super::page::PageEvent;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub enum Step {
    Event(PageEvent),
    /// Lets timers, frames and dispatches run for this many milliseconds.
    Wait(u64),
}

impl Step {
    pub fn wait(&self) -> Option<Duration> {
        match self {
            Step::Wait(ms) => Some(Duration::from_millis(*ms)),
            Step::Event(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

pub fn parse_script(text: &str) -> anyhow::Result<Script> {
    ron::from_str(text).context("script is not valid RON")
}

pub fn load_script(path: &Path) -> anyhow::Result<Script> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading script {}", path.display()))?;
    parse_script(&text).with_context(|| format!("parsing script {}", path.display()))
}
