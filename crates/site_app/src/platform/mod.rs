pub mod app;
pub mod config;
pub mod effects;
pub mod logging;
pub mod page;
pub mod script;
pub mod ui;

use std::path::Path;
use std::time::Duration;

use site_logging::site_info;

pub use app::App;
pub use config::{load_config, AppConfig};
pub use page::{HeadlessPage, Page, PageCommand, PageEvent};
pub use script::{load_script, Script, Step};

/// Replays `script` against a headless page and returns the final page.
pub fn replay(script: &Script, config: AppConfig) -> HeadlessPage {
    let mut app = App::new(config, HeadlessPage::new());
    for step in &script.steps {
        match step {
            Step::Event(event) => app.handle_event(event.clone()),
            Step::Wait(_) => app.run_for(step.wait().unwrap_or(Duration::ZERO)),
        }
        app.pump();
    }
    if !app.is_idle() {
        site_info!("Replay ended with timers or dispatches still pending");
    }
    app.page().clone()
}

/// Entry point of the replay binary: `site_app <script.ron> [config.ron]`.
pub fn run_replay(script_path: &Path, config_path: Option<&Path>) -> anyhow::Result<HeadlessPage> {
    let config = load_config(config_path);
    let script = load_script(script_path)?;
    site_info!(
        "Replaying {} step(s) from {:?}",
        script.steps.len(),
        script_path
    );
    Ok(replay(&script, config))
}
