use std::path::PathBuf;

use anyhow::Context;
use site_app::platform::{self, logging};
use site_logging::site_info;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::from_env());
    site_info!("site_app {} starting", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args_os().skip(1);
    let script = args
        .next()
        .map(PathBuf::from)
        .context("usage: site_app <script.ron> [config.ron]")?;
    let config = args.next().map(PathBuf::from);

    let page = platform::run_replay(&script, config.as_deref())?;
    let snapshot = ron::ser::to_string_pretty(&page, ron::ser::PrettyConfig::new())
        .context("serializing page snapshot")?;
    site_info!("Final page:\n{snapshot}");
    Ok(())
}
