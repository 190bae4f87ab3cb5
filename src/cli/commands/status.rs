//! Status command - show saved login and endpoint

use screener::adapters::FileSessionStore;
use screener::config::Config;
use screener::core::ports::SessionStore;
use screener::output::StatusResult;
use screener::paths;

use super::Context;

/// Show the saved login and the endpoint that would be used
pub fn status(ctx: &Context) -> anyhow::Result<()> {
    let saved = FileSessionStore::default_location().load()?;
    let config = Config::load()?;

    StatusResult {
        reviewer: saved.as_ref().map(|s| s.reviewer.clone()),
        role: saved.as_ref().map(|s| s.role),
        saved_at: saved.and_then(|s| s.saved_at),
        api_url: config.api_url(ctx.api_url.as_deref()),
        config_path: paths::config_file().display().to_string(),
    }
    .render(ctx.mode);
    Ok(())
}
