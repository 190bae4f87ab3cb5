//! Summary command - show screening progress

use anyhow::bail;

use screener::adapters::FileSessionStore;
use screener::core::ports::ReviewGateway;
use screener::output::SummaryResult;

use super::{Context, reviewer_from_flags};

/// Print the summary for the given or saved reviewer
pub fn summary(ctx: &Context, reviewer: Option<&str>, role: Option<&str>) -> anyhow::Result<()> {
    let store = FileSessionStore::default_location();
    let Some(reviewer) = reviewer_from_flags(&store, reviewer, role)? else {
        bail!("Not logged in. Pass --reviewer and --role, or run 'screener review' first");
    };

    let (_, gateway) = ctx.connect()?;
    let summary = gateway.get_summary(&reviewer)?;
    SummaryResult {
        reviewer: reviewer.name,
        role: reviewer.role,
        summary,
    }
    .render(ctx.mode);
    Ok(())
}
