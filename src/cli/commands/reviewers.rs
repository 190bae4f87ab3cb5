//! List reviewers

use screener::core::ports::ReviewGateway;
use screener::output::ReviewerListResult;

use super::Context;

/// Print the reviewers known to the spreadsheet
pub fn reviewers(ctx: &Context) -> anyhow::Result<()> {
    let (_, gateway) = ctx.connect()?;
    let reviewers = gateway.get_reviewers()?;
    ReviewerListResult { reviewers }.render(ctx.mode);
    Ok(())
}
