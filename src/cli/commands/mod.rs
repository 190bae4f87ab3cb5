//! Command implementations

mod init;
mod logout;
mod reasons;
mod review;
mod reviewers;
mod status;
mod summary;

pub use init::init;
pub use logout::logout;
pub use reasons::reasons;
pub use review::review;
pub use reviewers::reviewers;
pub use status::status;
pub use summary::summary;

use anyhow::{anyhow, bail};

use screener::adapters::{FileSessionStore, HttpGateway};
use screener::config::{API_URL_ENV, Config};
use screener::core::models::{Reviewer, Role};
use screener::core::ports::SessionStore;
use screener::output::OutputMode;

/// Settings shared by every command
#[derive(Debug)]
pub struct Context {
    /// Output mode
    pub mode: OutputMode,
    /// `--api-url` override
    pub api_url: Option<String>,
}

impl Context {
    /// Load configuration and connect to the configured endpoint
    fn connect(&self) -> anyhow::Result<(Config, HttpGateway)> {
        let config = Config::load()?;
        let Some(url) = config.api_url(self.api_url.as_deref()) else {
            bail!(
                "No API endpoint configured. Run 'screener init --api-url <URL>' or set {API_URL_ENV}"
            );
        };
        let gateway = HttpGateway::from_config(&url, &config.api)?;
        Ok((config, gateway))
    }
}

fn parse_role(role: &str) -> anyhow::Result<Role> {
    role.parse().map_err(|e: String| anyhow!(e))
}

/// Reviewer from flags, falling back to the saved login field by field
fn reviewer_from_flags(
    store: &FileSessionStore,
    reviewer: Option<&str>,
    role: Option<&str>,
) -> anyhow::Result<Option<Reviewer>> {
    let saved = store.load()?;
    let name = reviewer
        .map(String::from)
        .or_else(|| saved.as_ref().map(|s| s.reviewer.clone()));
    let role = match role {
        Some(role) => Some(parse_role(role)?),
        None => saved.as_ref().map(|s| s.role),
    };
    Ok(name.zip(role).map(|(name, role)| Reviewer::new(name, role)))
}
