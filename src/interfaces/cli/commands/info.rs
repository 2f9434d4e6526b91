//! Link info command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::manager::LinkManager;
use crate::view::LinkRow;

pub async fn link_info(manager: &mut LinkManager, code: &str) -> Result<(), CliError> {
    let Some(link) = manager.link_detail(code).await.cloned() else {
        let message = manager
            .take_notice()
            .map(|n| n.message)
            .unwrap_or_else(|| format!("Failed to load {}", code));
        return Err(CliError::RequestError(message));
    };

    let row = LinkRow::from(&link);
    println!("{}", "Short link".bold().green());
    println!("  {}:     {}", "Code".cyan(), row.code.bold());
    println!("  {}:      {}", "Short".cyan(), row.short_url);
    println!("  {}:        {}", "URL".cyan(), row.original_url.blue().underline());
    println!("  {}:      {}", "Title".cyan(), row.title);
    println!("  {}:     {}", "Clicks".cyan(), row.clicks.to_string().green());
    println!("  {}:    {}", "Created".cyan(), row.created_at.dimmed());
    Ok(())
}
