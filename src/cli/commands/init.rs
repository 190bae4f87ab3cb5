//! Write the screener configuration file

use screener::config::Config;
use screener::output::OperationResult;
use screener::paths;

use super::Context;

/// Create `config.toml` with the endpoint and the default reason catalog
pub fn init(ctx: &Context, force: bool) -> anyhow::Result<()> {
    let path = paths::config_file();

    if path.exists() && !force {
        OperationResult::ok(format!(
            "Already initialized ({} exists).\nUse --force to overwrite.",
            path.display()
        ))
        .render(ctx.mode);
        return Ok(());
    }

    let mut config = Config::default();
    config.api.url = config.api_url(ctx.api_url.as_deref());
    config.save_to(&path)?;

    let mut message = format!("Created {}", path.display());
    match &config.api.url {
        Some(url) => message.push_str(&format!("\n  API endpoint: {url}")),
        None => message.push_str("\n  No API endpoint set; edit [api] url or pass --api-url"),
    }
    OperationResult::ok(message).render(ctx.mode);
    Ok(())
}
