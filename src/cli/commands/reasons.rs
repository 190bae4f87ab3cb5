//! Reasons command - show the reason catalog

use screener::adapters::FileSessionStore;
use screener::config::Config;
use screener::core::models::{DecisionKind, Role};
use screener::core::ports::SessionStore;
use screener::output::ReasonListResult;

use super::{Context, parse_role};

/// Print include and exclude reasons for a role
pub fn reasons(ctx: &Context, role: Option<&str>) -> anyhow::Result<()> {
    let role = match role {
        Some(role) => parse_role(role)?,
        None => FileSessionStore::default_location()
            .load()?
            .map_or(Role::First, |saved| saved.role),
    };
    let policy = Config::load()?.screening;

    ReasonListResult {
        role,
        require_include_reason: policy.require_include_reason,
        include: policy.reasons(role, DecisionKind::Include).to_vec(),
        exclude: policy.reasons(role, DecisionKind::Exclude).to_vec(),
    }
    .render(ctx.mode);
    Ok(())
}
