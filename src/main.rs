use std::path::Path;

use anyhow::Context;
use furniview::{init_logging, AppConfig, AppContext, BUILD_DATE, VERSION};
use tracing::info;

const CONFIG_FILE: &str = "furniview.toml";

fn main() -> anyhow::Result<()> {
    init_logging()?;
    info!("FurniView {} (built {})", VERSION, BUILD_DATE);

    let config = AppConfig::load_or_default(Path::new(CONFIG_FILE))
        .with_context(|| format!("Failed to load {CONFIG_FILE}"))?;
    let mut app = AppContext::init(config).context("Failed to start FurniView")?;

    let saved = app.designs().saved_designs();
    info!("{} saved design(s)", saved.len());
    for name in &saved {
        info!("  {}", name);
    }

    app.shutdown()?;
    Ok(())
}
