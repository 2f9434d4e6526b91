//! Remove link command

use colored::Colorize;

use crate::interfaces::cli::{CliError, StdinConfirm};
use crate::manager::{Confirm, Confirmed, LinkManager};

pub async fn remove_link(manager: &mut LinkManager, code: &str, yes: bool) -> Result<(), CliError> {
    let confirm: &dyn Confirm = if yes { &Confirmed } else { &StdinConfirm };

    let Some(request) = manager.prepare_delete(code, confirm) else {
        println!("{} Cancelled", "ℹ".bold().blue());
        return Ok(());
    };
    let outcome = request.execute().await;
    let deleted = outcome.result.is_ok();
    manager.apply_delete(outcome);

    if deleted {
        println!("{} Deleted short link: {}", "✓".bold().green(), code.cyan());
        Ok(())
    } else {
        let message = manager
            .take_notice()
            .map(|n| n.message)
            .unwrap_or_else(|| format!("Delete failed: {}", code));
        Err(CliError::RequestError(message))
    }
}
