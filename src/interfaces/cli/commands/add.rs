//! Add link command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::manager::{CreateForm, LinkManager};

pub async fn add_link(
    manager: &mut LinkManager,
    url: String,
    title: String,
    code: Option<String>,
) -> Result<(), CliError> {
    let form = CreateForm::new(url)
        .with_title(title)
        .with_code(code.unwrap_or_default());

    let Some(request) = manager.prepare_create(form) else {
        return Err(CliError::CommandError(notice_message(manager, "invalid input")));
    };
    let target = request.body().url.clone();
    let outcome = request.execute().await;
    let short_url = outcome.result.as_ref().ok().map(|c| c.short_url.clone());
    manager.apply_create(outcome);

    match short_url {
        Some(short_url) => {
            println!(
                "{} Added short link: {} -> {}",
                "✓".bold().green(),
                short_url.cyan(),
                target.blue().underline()
            );
            Ok(())
        }
        None => Err(CliError::RequestError(notice_message(manager, "create failed"))),
    }
}

fn notice_message(manager: &mut LinkManager, fallback: &str) -> String {
    manager
        .take_notice()
        .map(|n| n.message)
        .unwrap_or_else(|| fallback.to_string())
}
