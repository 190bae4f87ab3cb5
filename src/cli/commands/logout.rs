//! Forget the saved login

use screener::adapters::FileSessionStore;
use screener::core::ports::SessionStore;
use screener::output::OperationResult;

use super::Context;

/// Clear the saved reviewer and role
pub fn logout(ctx: &Context) -> anyhow::Result<()> {
    let store = FileSessionStore::default_location();
    let message = match store.load()? {
        Some(saved) => format!("Logged out {} ({}).", saved.reviewer, saved.role.label()),
        None => "Not logged in.".to_string(),
    };
    store.clear()?;
    OperationResult::ok(message).render(ctx.mode);
    Ok(())
}
